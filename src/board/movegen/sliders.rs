//! Sliding-piece (bishop/rook/queen) attack and move generation by ray walk:
//! step one square at a time in each relevant direction, stopping at the
//! first occupied square (SPEC_FULL.md ss4.2).

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::moves::{Move, MoveKind};
use crate::types::{Color, Piece, PieceKind, Square};

type ShiftFn = fn(Bitboard) -> Bitboard;

const BISHOP_DIRECTIONS: [ShiftFn; 4] = [
    Bitboard::north_east,
    Bitboard::north_west,
    Bitboard::south_east,
    Bitboard::south_west,
];

const ROOK_DIRECTIONS: [ShiftFn; 4] =
    [Bitboard::north, Bitboard::south, Bitboard::east, Bitboard::west];

/// Squares attacked by a slider from `sq`, given the full occupancy. The
/// ray stops at (and includes) the first occupied square, regardless of
/// which side occupies it.
fn ray_attacks(sq: Square, occupied: Bitboard, directions: &[ShiftFn]) -> Bitboard {
    let mut attacks = Bitboard::EMPTY;
    for &shift in directions {
        let mut ray = shift(Bitboard::from_square(sq));
        while !ray.is_empty() {
            attacks |= ray;
            if !(ray & occupied).is_empty() {
                break;
            }
            ray = shift(ray);
        }
    }
    attacks
}

pub(crate) fn bishop_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    ray_attacks(sq, occupied, &BISHOP_DIRECTIONS)
}

pub(crate) fn rook_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    ray_attacks(sq, occupied, &ROOK_DIRECTIONS)
}

pub(crate) fn queen_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    bishop_attacks(sq, occupied) | rook_attacks(sq, occupied)
}

fn generate_slider_moves(
    board: &Board,
    sq: Square,
    color: Color,
    piece: Piece,
    attacks: Bitboard,
    out: &mut Vec<Move>,
) {
    let own_occ = board.occupied_by(color);
    let piece_kind = PieceKind::new(color, piece);
    let targets = attacks & !own_occ;
    for to in targets.iter() {
        let captured = board.piece_at(to);
        out.push(Move {
            from: sq,
            to,
            piece: piece_kind,
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

pub(crate) fn generate_bishop_moves(board: &Board, sq: Square, color: Color, out: &mut Vec<Move>) {
    let attacks = bishop_attacks(sq, board.occupied());
    generate_slider_moves(board, sq, color, Piece::Bishop, attacks, out);
}

pub(crate) fn generate_rook_moves(board: &Board, sq: Square, color: Color, out: &mut Vec<Move>) {
    let attacks = rook_attacks(sq, board.occupied());
    generate_slider_moves(board, sq, color, Piece::Rook, attacks, out);
}

pub(crate) fn generate_queen_moves(board: &Board, sq: Square, color: Color, out: &mut Vec<Move>) {
    let attacks = queen_attacks(sq, board.occupied());
    generate_slider_moves(board, sq, color, Piece::Queen, attacks, out);
}
