//! Material term: piece counts times fixed weights, king excluded
//! (checkmate handles the king).

use crate::board::Board;
use crate::config::{MATERIAL_SCALE, MATERIAL_WEIGHTS};
use crate::types::{Color, Piece, PieceKind};

const COUNTED_PIECES: [Piece; 5] = [
    Piece::Pawn,
    Piece::Knight,
    Piece::Bishop,
    Piece::Rook,
    Piece::Queen,
];

fn side_material(board: &Board, color: Color) -> i32 {
    COUNTED_PIECES
        .into_iter()
        .map(|piece| {
            let weight = MATERIAL_WEIGHTS[piece_index(piece)];
            let count = board.pieces(PieceKind::new(color, piece)).popcount() as i32;
            weight * count
        })
        .sum()
}

fn piece_index(piece: Piece) -> usize {
    match piece {
        Piece::Pawn => 0,
        Piece::Knight => 1,
        Piece::Bishop => 2,
        Piece::Rook => 3,
        Piece::Queen => 4,
        Piece::King => 5,
    }
}

/// White material minus Black material, scaled by `MATERIAL_SCALE`.
pub(crate) fn material(board: &Board) -> i32 {
    (side_material(board, Color::White) - side_material(board, Color::Black)) * MATERIAL_SCALE
}
