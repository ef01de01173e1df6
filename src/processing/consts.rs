use lazy_static::lazy_static;
use pleco::core::masks::{PLAYER_CNT, SQ_CNT};
use pleco::Player;

pub type MyVal = i16;

//SEARCH BOUND CONSTANTS
//Sentinel "infinities" for the alpha/beta window. The evaluator never
//produces these: its outputs are capped at MAX_EVAL below.
pub const INF_V: MyVal = 10_000;
pub const NEG_INF_V: MyVal = -10_000;

//GAME EVALUATION CONSTANTS
pub const MATE: MyVal = 9_900;
pub const DRAW: MyVal = 0;
//Static scores are clamped here so a mate always outranks them.
pub const MAX_EVAL: MyVal = MATE - 1;

//PIECE EVALUATION CONSTANTS
pub const PAWN_VALUE: MyVal = 100;
pub const KNIGHT_VALUE: MyVal = 320;
pub const BISHOP_VALUE: MyVal = 330;
pub const ROOK_VALUE: MyVal = 500;
pub const QUEEN_VALUE: MyVal = 900;

pub const TWO_BISHOPS: MyVal = 15;

//Placement tables, written from Black's side of the board (rank 8 on the
//first row, the conventional published layout).
#[rustfmt::skip]
const PAWN_TABLE: [MyVal; SQ_CNT] = [
     0,  0,  0,  0,  0,  0,  0,  0,
    50, 50, 50, 50, 50, 50, 50, 50,
    10, 10, 20, 30, 30, 20, 10, 10,
     5,  5, 10, 25, 25, 10,  5,  5,
     0,  0,  0, 20, 20,  0,  0,  0,
     5, -5,-10,  0,  0,-10, -5,  5,
     5, 10, 10,-20,-20, 10, 10,  5,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const KNIGHT_TABLE: [MyVal; SQ_CNT] = [
    -50,-40,-30,-30,-30,-30,-40,-50,
    -40,-20,  0,  0,  0,  0,-20,-40,
    -30,  0, 10, 15, 15, 10,  0,-30,
    -30,  5, 15, 20, 20, 15,  5,-30,
    -30,  0, 15, 20, 20, 15,  0,-30,
    -30,  5, 10, 15, 15, 10,  5,-30,
    -40,-20,  0,  5,  5,  0,-20,-40,
    -50,-40,-30,-30,-30,-30,-40,-50,
];

#[rustfmt::skip]
const BISHOP_TABLE: [MyVal; SQ_CNT] = [
    -20,-10,-10,-10,-10,-10,-10,-20,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -10,  0,  5, 10, 10,  5,  0,-10,
    -10,  5,  5, 10, 10,  5,  5,-10,
    -10,  0, 10, 10, 10, 10,  0,-10,
    -10, 10, 10, 10, 10, 10, 10,-10,
    -10,  5,  0,  0,  0,  0,  5,-10,
    -20,-10,-10,-10,-10,-10,-10,-20,
];

#[rustfmt::skip]
const ROOK_TABLE: [MyVal; SQ_CNT] = [
     0,  0,  0,  0,  0,  0,  0,  0,
     5, 10, 10, 10, 10, 10, 10,  5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
     0,  0,  0,  5,  5,  0,  0,  0,
];

#[rustfmt::skip]
const QUEEN_TABLE: [MyVal; SQ_CNT] = [
    -20,-10,-10, -5, -5,-10,-10,-20,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -10,  0,  5,  5,  5,  5,  0,-10,
     -5,  0,  5,  5,  5,  5,  0, -5,
      0,  0,  5,  5,  5,  5,  0, -5,
    -10,  5,  5,  5,  5,  5,  0,-10,
    -10,  0,  5,  0,  0,  0,  0,-10,
    -20,-10,-10, -5, -5,-10,-10,-20,
];

#[rustfmt::skip]
const KING_TABLE: [MyVal; SQ_CNT] = [
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -20,-30,-30,-40,-40,-30,-30,-20,
    -10,-20,-20,-20,-20,-20,-20,-10,
     20, 20,  0,  0,  0,  0, 20, 20,
     20, 30, 10,  0,  0, 10, 30, 20,
];

/// Expand a published (rank-8-first) table into per-player tables indexed
/// by pleco square number (a1 = 0). White reads the table mirrored
/// vertically, Black reads it as written.
fn two_sided(table: &[MyVal; SQ_CNT]) -> [[MyVal; SQ_CNT]; PLAYER_CNT] {
    let mut res = [[0; SQ_CNT]; PLAYER_CNT];
    for sq in 0..SQ_CNT {
        res[Player::White as usize][sq] = table[sq ^ 56];
        res[Player::Black as usize][sq] = table[sq];
    }
    res
}

lazy_static! {
    pub static ref PAWN_POS: [[MyVal; SQ_CNT]; PLAYER_CNT] = two_sided(&PAWN_TABLE);
    pub static ref KNIGHT_POS: [[MyVal; SQ_CNT]; PLAYER_CNT] = two_sided(&KNIGHT_TABLE);
    pub static ref BISHOP_POS: [[MyVal; SQ_CNT]; PLAYER_CNT] = two_sided(&BISHOP_TABLE);
    pub static ref ROOK_POS: [[MyVal; SQ_CNT]; PLAYER_CNT] = two_sided(&ROOK_TABLE);
    pub static ref QUEEN_POS: [[MyVal; SQ_CNT]; PLAYER_CNT] = two_sided(&QUEEN_TABLE);
    pub static ref KING_POS: [[MyVal; SQ_CNT]; PLAYER_CNT] = two_sided(&KING_TABLE);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_mirror_between_players() {
        for sq in 0..SQ_CNT {
            // Vertical mirror: same file, flipped rank.
            let flipped = sq ^ 56;
            assert_eq!(
                PAWN_POS[Player::White as usize][sq],
                PAWN_POS[Player::Black as usize][flipped]
            );
            assert_eq!(
                KING_POS[Player::White as usize][sq],
                KING_POS[Player::Black as usize][flipped]
            );
        }
    }

    #[test]
    fn white_pawn_table_rewards_advancement() {
        // e2 (sq 12) sits on the doubled "-20" shelf, e7 (sq 52) on the 50 rank.
        let white = Player::White as usize;
        assert!(PAWN_POS[white][52] > PAWN_POS[white][12]);
    }

    #[test]
    fn eval_ceiling_stays_inside_search_window() {
        assert!(MAX_EVAL < MATE);
        assert!(MATE < INF_V);
    }
}
