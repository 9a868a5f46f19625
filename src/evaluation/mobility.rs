//! Mobility term: popcount of pseudo-legal destinations summed over pawns,
//! knights, bishops, and rooks (SPEC_FULL.md ss4.5).

use crate::board::movegen::{bishop_attacks, knight_attacks, pawn_attacks, rook_attacks};
use crate::board::Board;
use crate::config::MOBILITY_WEIGHT;
use crate::types::{Color, Piece, PieceKind};

fn side_mobility(board: &Board, color: Color) -> i32 {
    let occ = board.occupied();
    let own = board.occupied_by(color);
    let mut total = 0u32;

    for sq in board.pieces(PieceKind::new(color, Piece::Pawn)).iter() {
        total += (pawn_attacks(sq, color) & board.occupied_by(color.opposite())).popcount();
    }
    for sq in board.pieces(PieceKind::new(color, Piece::Knight)).iter() {
        total += (knight_attacks(sq) & !own).popcount();
    }
    for sq in board.pieces(PieceKind::new(color, Piece::Bishop)).iter() {
        total += (bishop_attacks(sq, occ) & !own).popcount();
    }
    for sq in board.pieces(PieceKind::new(color, Piece::Rook)).iter() {
        total += (rook_attacks(sq, occ) & !own).popcount();
    }

    total as i32
}

/// Mobility difference, White minus Black, scaled by `MOBILITY_WEIGHT`.
pub(crate) fn mobility(board: &Board) -> i32 {
    (side_mobility(board, Color::White) - side_mobility(board, Color::Black)) * MOBILITY_WEIGHT
}
