use pleco::{Board, Player};

use super::consts::{MyVal, DRAW, MATE, MAX_EVAL};

mod basic_eval;

/// White-centric static evaluation: positive is good for White, negative
/// for Black.
///
/// Total over every reachable position, terminal ones included: when the
/// side to move is checkmated the score is the full mate magnitude,
/// stalemate and rule draws score zero. Non-terminal positions get the
/// material + placement score, capped below the mate score so search
/// bounds stay unambiguous.
pub fn eval_board(board: &Board) -> MyVal {
    if board.checkmate() {
        return if board.turn() == Player::White { -MATE } else { MATE };
    }
    if board.stalemate() || board.fifty_move_rule() || board.threefold_repetition() {
        return DRAW;
    }

    basic_eval::score_board(board).clamp(-MAX_EVAL, MAX_EVAL)
}
