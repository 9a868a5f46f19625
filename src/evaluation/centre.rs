//! Extended-centre occupancy term (SPEC_FULL.md ss4.5).

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::config::CENTRE_WEIGHT;
use crate::types::Color;

/// Own pieces on the 16-square extended centre minus the opponent's,
/// scaled by `CENTRE_WEIGHT`.
pub(crate) fn centre_control(board: &Board) -> i32 {
    let white = (board.occupied_by(Color::White) & Bitboard::EXTENDED_CENTRE).popcount() as i32;
    let black = (board.occupied_by(Color::Black) & Bitboard::EXTENDED_CENTRE).popcount() as i32;
    (white - black) * CENTRE_WEIGHT
}
