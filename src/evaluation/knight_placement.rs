//! Penalty for knights parked on the rim (a- or h-file) (SPEC_FULL.md ss4.5).

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::config::KNIGHT_RIM_PENALTY;
use crate::types::PieceKind;

/// Rim-knight penalty difference, White minus Black. Own rim knights
/// subtract from the side's score; the opponent's rim knights add back.
pub(crate) fn knight_placement(board: &Board) -> i32 {
    let white_rim = (board.pieces(PieceKind::WhiteKnight) & Bitboard::EDGE_FILES).popcount() as i32;
    let black_rim = (board.pieces(PieceKind::BlackKnight) & Bitboard::EDGE_FILES).popcount() as i32;
    (black_rim - white_rim) * KNIGHT_RIM_PENALTY
}
