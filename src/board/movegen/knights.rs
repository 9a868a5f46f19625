//! Knight pseudo-legal move generation: precomputed attack table intersected
//! with the relevant occupancy mask (SPEC_FULL.md ss4.2).

use crate::bitboard::KNIGHT_ATTACKS;
use crate::board::Board;
use crate::moves::{Move, MoveKind};
use crate::types::{Color, Piece, PieceKind, Square};

pub(crate) fn knight_attacks(sq: Square) -> crate::bitboard::Bitboard {
    KNIGHT_ATTACKS[sq.index() as usize]
}

pub(crate) fn generate_knight_moves(board: &Board, sq: Square, color: Color, out: &mut Vec<Move>) {
    let piece = PieceKind::new(color, Piece::Knight);
    let own_occ = board.occupied_by(color);
    let targets = knight_attacks(sq) & !own_occ;
    for to in targets.iter() {
        let captured = board.piece_at(to);
        out.push(Move {
            from: sq,
            to,
            piece,
            captured,
            kind: if captured.is_some() {
                MoveKind::Capture
            } else {
                MoveKind::Normal
            },
            promotion: None,
            is_check: false,
        });
    }
}
