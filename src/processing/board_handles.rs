use anyhow::{bail, Result};
use pleco::{BitMove, Board};

/// True once no further play is possible: checkmate, stalemate, or a
/// draw the rules engine recognizes (fifty-move rule, threefold
/// repetition).
pub fn game_over(board: &Board) -> bool {
    board.checkmate()
        || board.stalemate()
        || board.fifty_move_rule()
        || board.threefold_repetition()
}

/// Resolve user move text (UCI coordinate form, e.g. "e2e4" or "a7a8q")
/// against the legal moves of the current position.
///
/// Unparsable text and legal-looking-but-illegal moves both fail; the
/// console layer reacts by re-prompting.
pub fn parse_move(board: &Board, text: &str) -> Result<BitMove> {
    let all_moves = board.generate_moves();
    for mv in &all_moves {
        if mv.stringify() == text {
            return Ok(mv);
        }
    }
    bail!("`{text}` is not a legal move in this position");
}

/// Applies a move on construction and undoes it when dropped, so every
/// exit path out of a search node (exhaustion or cutoff) restores the
/// board it was handed.
pub struct AppliedMove<'a> {
    board: &'a mut Board,
}

impl<'a> AppliedMove<'a> {
    pub fn new(board: &'a mut Board, mv: BitMove) -> Self {
        board.apply_move(mv);
        AppliedMove { board }
    }

    pub fn board(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for AppliedMove<'_> {
    fn drop(&mut self) {
        self.board.undo_move();
    }
}
