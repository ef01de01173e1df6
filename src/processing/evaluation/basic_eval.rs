use pleco::core::masks::{PLAYER_CNT, SQ_CNT};
use pleco::core::mono_traits::{BlackType, PlayerTrait, WhiteType};
use pleco::{Board, PieceType};

use crate::processing::consts::{
    BISHOP_POS, BISHOP_VALUE, KING_POS, KNIGHT_POS, KNIGHT_VALUE, MyVal, PAWN_POS,
    PAWN_VALUE, QUEEN_POS, QUEEN_VALUE, ROOK_POS, ROOK_VALUE, TWO_BISHOPS,
};

/// Material + placement score, White total minus Black total.
pub fn score_board(board: &Board) -> MyVal {
    score_player::<WhiteType>(board) - score_player::<BlackType>(board)
}

#[inline(always)]
fn count_pieces<P: PlayerTrait>(board: &Board, ptype: PieceType) -> MyVal {
    board.count_piece(P::player(), ptype) as MyVal
}

fn score_player<P: PlayerTrait>(board: &Board) -> MyVal {
    let mut sum = 0;

    sum += count_pieces::<P>(board, PieceType::P) * PAWN_VALUE;
    sum += count_pieces::<P>(board, PieceType::N) * KNIGHT_VALUE;
    sum += count_pieces::<P>(board, PieceType::B) * BISHOP_VALUE;
    sum += count_pieces::<P>(board, PieceType::R) * ROOK_VALUE;
    sum += count_pieces::<P>(board, PieceType::Q) * QUEEN_VALUE;

    sum += placement::<P>(board, PieceType::P, &PAWN_POS);
    sum += placement::<P>(board, PieceType::N, &KNIGHT_POS);
    sum += placement::<P>(board, PieceType::B, &BISHOP_POS);
    sum += placement::<P>(board, PieceType::R, &ROOK_POS);
    sum += placement::<P>(board, PieceType::Q, &QUEEN_POS);
    sum += placement::<P>(board, PieceType::K, &KING_POS);

    if count_pieces::<P>(board, PieceType::B) == 2 {
        sum += TWO_BISHOPS;
    }

    sum
}

fn placement<P: PlayerTrait>(
    board: &Board,
    ptype: PieceType,
    table: &[[MyVal; SQ_CNT]; PLAYER_CNT],
) -> MyVal {
    let mut score = 0;
    let side = P::player() as usize;

    for square in board.piece_bb(P::player(), ptype) {
        score += table[side][square.0 as usize];
    }

    score
}
