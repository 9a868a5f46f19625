//! Castled-king bonus, scaled by game phase so it matters more late
//! (SPEC_FULL.md ss4.5).

use crate::board::Board;
use crate::config::CASTLE_BONUS;

/// Castling bonus difference, White minus Black, weighted by `phase` per
/// `(0.5 + 0.5*phase)` so the term is worth more in the endgame.
pub(crate) fn king_safety(board: &Board, phase: f64) -> i32 {
    let weight = 0.5 + 0.5 * phase;
    let white = if board.white_castled() { CASTLE_BONUS } else { 0 };
    let black = if board.black_castled() { CASTLE_BONUS } else { 0 };
    (((white - black) as f64) * weight).round() as i32
}
