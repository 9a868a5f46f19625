//! Game-phase estimate used to scale the king-safety term (SPEC_FULL.md
//! ss4.5): `1 - (total non-king pieces) / 32`, clamped to `[0, 1]`.

use crate::board::Board;
use crate::types::{PieceKind, ALL_PIECE_KINDS};

pub(crate) fn game_phase(board: &Board) -> f64 {
    let total: u32 = ALL_PIECE_KINDS
        .into_iter()
        .filter(|kind| !matches!(kind, PieceKind::WhiteKing | PieceKind::BlackKing))
        .map(|kind| board.pieces(kind).popcount())
        .sum();
    (1.0 - f64::from(total) / 32.0).clamp(0.0, 1.0)
}
