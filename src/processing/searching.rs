use pleco::{BitMove, Board, Player};

use super::{
    board_handles::{game_over, AppliedMove},
    consts::{MyVal, INF_V, NEG_INF_V},
    evaluation::eval_board,
};

/// Upper bound on the root depth. Keeps the recursion (one stack frame
/// per ply) and the i8 depth counter comfortably in range.
pub const MAX_PLY: u8 = 31;

/// Pick the best move for the side to move by searching `depth` plies.
///
/// Root moves are taken in generation order and ties are won by the
/// first move reaching the best score. Every root child is searched with
/// a fresh full window; the alpha-beta narrowing only happens inside the
/// subtrees.
///
/// Returns `None` when the position has no legal moves (checkmate or
/// stalemate), which the caller must treat as game over.
pub fn select_best_move(board: &mut Board, is_white: bool, depth: u8) -> Option<BitMove> {
    assert!(
        depth >= 1 && depth <= MAX_PLY,
        "search depth must be between 1 and {MAX_PLY}, got {depth}"
    );
    debug_assert!(
        is_white == (board.turn() == Player::White),
        "side flag disagrees with the board's side to move"
    );

    let all_moves = board.generate_moves();
    if all_moves.len() == 0 {
        return None;
    }

    let mut best_score = if is_white { MyVal::MIN } else { MyVal::MAX };
    let mut best_move: Option<BitMove> = None;

    for mv in &all_moves {
        let value = {
            let mut applied = AppliedMove::new(board, mv);
            minimax(depth as i8 - 1, applied.board(), NEG_INF_V, INF_V, !is_white)
        };

        // Strict comparison: the first move to reach a score keeps it.
        if (is_white && value > best_score) || (!is_white && value < best_score) {
            best_score = value;
            best_move = Some(mv);
        }
    }

    best_move
}

/// Bounded minimax over the legal-move tree with alpha-beta pruning.
///
/// `alpha` is the best score the maximizing side is already guaranteed,
/// `beta` the best the minimizing side is guaranteed. Both arrive by
/// value and are only ever narrowed locally; once `beta <= alpha` the
/// remaining sibling moves cannot change the outcome and the node cuts
/// off.
pub fn minimax(
    depth: i8,
    board: &mut Board,
    mut alpha: MyVal,
    mut beta: MyVal,
    maximizing: bool,
) -> MyVal {
    // Terminal positions are leaves regardless of remaining depth, so
    // this check has to run before any move enumeration.
    if depth <= 0 || game_over(board) {
        return eval_board(board);
    }

    let all_moves = board.generate_moves();

    if maximizing {
        let mut best = NEG_INF_V;
        for mv in &all_moves {
            let value = {
                let mut applied = AppliedMove::new(board, mv);
                minimax(depth - 1, applied.board(), alpha, beta, false)
            };
            best = best.max(value);
            alpha = alpha.max(best);
            if beta <= alpha {
                break;
            }
        }
        best
    } else {
        let mut best = INF_V;
        for mv in &all_moves {
            let value = {
                let mut applied = AppliedMove::new(board, mv);
                minimax(depth - 1, applied.board(), alpha, beta, true)
            };
            best = best.min(value);
            beta = beta.min(best);
            if beta <= alpha {
                break;
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use pleco::{Board, Player};

    use crate::processing::{
        board_handles::game_over,
        consts::{MyVal, INF_V, NEG_INF_V},
        evaluation::eval_board,
    };

    use super::{minimax, select_best_move};

    const FOOLS_MATE: &str =
        "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3";
    const STALEMATE: &str = "7k/5Q2/6K1/8/8/8/8/8 b - - 0 1";
    const BACK_RANK: &str = "6k1/5ppp/8/8/8/8/8/4R2K w - - 0 1";
    const KIWIPETE: &str =
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
    const ROOK_ENDING: &str = "8/5pk1/8/8/8/8/1R3PK1/8 w - - 0 1";

    fn board(fen: &str) -> Board {
        Board::from_fen(fen).unwrap()
    }

    /// Exhaustive minimax without any pruning, used as the oracle for
    /// the alpha-beta implementation.
    fn plain_minimax(depth: i8, board: &mut Board, maximizing: bool) -> MyVal {
        if depth <= 0 || game_over(board) {
            return eval_board(board);
        }

        let all_moves = board.generate_moves();
        let mut best = if maximizing { NEG_INF_V } else { INF_V };

        for mv in &all_moves {
            board.apply_move(mv);
            let value = plain_minimax(depth - 1, board, !maximizing);
            board.undo_move();

            best = if maximizing {
                best.max(value)
            } else {
                best.min(value)
            };
        }

        best
    }

    fn is_legal(board: &Board, target: pleco::BitMove) -> bool {
        let all_moves = board.generate_moves();
        for mv in &all_moves {
            if mv == target {
                return true;
            }
        }
        false
    }

    #[test]
    fn depth_zero_matches_static_eval() {
        let mut b = Board::start_pos();
        let eval = eval_board(&b);
        assert_eq!(minimax(0, &mut b, NEG_INF_V, INF_V, true), eval);
        assert_eq!(minimax(0, &mut b, NEG_INF_V, INF_V, false), eval);
    }

    #[test]
    fn terminal_position_short_circuits() {
        // Depth remaining, but the game is over: the node is a leaf.
        let mut b = board(FOOLS_MATE);
        let eval = eval_board(&b);
        assert_eq!(minimax(3, &mut b, NEG_INF_V, INF_V, true), eval);
        assert_eq!(minimax(3, &mut b, NEG_INF_V, INF_V, false), eval);
    }

    #[test]
    fn checkmate_root_returns_none() {
        let mut b = board(FOOLS_MATE);
        assert!(select_best_move(&mut b, true, 2).is_none());
    }

    #[test]
    fn stalemate_root_returns_none() {
        let mut b = board(STALEMATE);
        assert!(select_best_move(&mut b, false, 2).is_none());
    }

    #[test]
    fn finds_back_rank_mate_at_depth_one() {
        let mut b = board(BACK_RANK);
        let mv = select_best_move(&mut b, true, 1).unwrap();
        assert_eq!(mv.stringify(), "e1e8");
    }

    #[test]
    fn still_finds_the_mate_at_deeper_search() {
        let mut b = board(BACK_RANK);
        let mv = select_best_move(&mut b, true, 3).unwrap();
        assert_eq!(mv.stringify(), "e1e8");
    }

    #[test]
    fn pruning_never_changes_the_score() {
        for (fen, depth) in [
            (KIWIPETE, 2),
            (ROOK_ENDING, 3),
            (BACK_RANK, 3),
        ] {
            let mut b = board(fen);
            let maximizing = b.turn() == Player::White;

            let mut oracle_board = board(fen);
            let expected = plain_minimax(depth, &mut oracle_board, maximizing);
            let pruned = minimax(depth, &mut b, NEG_INF_V, INF_V, maximizing);

            assert_eq!(pruned, expected, "score diverged for {fen}");
        }
    }

    #[test]
    fn search_is_deterministic() {
        let mut b = board(KIWIPETE);
        let first = select_best_move(&mut b, true, 2).unwrap();
        let second = select_best_move(&mut b, true, 2).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn board_is_restored_after_search() {
        let mut b = board(KIWIPETE);
        let before = b.fen();
        select_best_move(&mut b, true, 2);
        assert_eq!(b.fen(), before);

        minimax(3, &mut b, NEG_INF_V, INF_V, true);
        assert_eq!(b.fen(), before);
    }

    #[test]
    fn black_reply_from_the_opening_is_legal() {
        let mut b = Board::start_pos();
        assert!(b.apply_uci_move("e2e4"));
        let before = b.fen();

        let mv = select_best_move(&mut b, false, 1).unwrap();

        assert!(is_legal(&b, mv));
        assert_eq!(b.fen(), before);
    }
}
