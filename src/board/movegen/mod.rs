//! Legal-move enumeration: pseudo-legal generation per piece kind, combined
//! with check-resolution filtering and castling legality (SPEC_FULL.md
//! ss4.2, ss4.4).

mod kings;
mod knights;
mod pawns;
mod sliders;

use crate::bitboard::Bitboard;
use crate::moves::Move;
use crate::types::{Color, Piece, PieceKind};

use super::Board;

pub(crate) use kings::king_attacks;
pub(crate) use knights::knight_attacks;
pub(crate) use pawns::pawn_attacks;
pub(crate) use sliders::{bishop_attacks, queen_attacks, rook_attacks};

/// All squares attacked by `color`'s pieces, independent of whether the
/// squares are occupied by friendly pieces.
pub(crate) fn attacked_squares(board: &Board, color: Color) -> Bitboard {
    let occ = board.occupied();
    let mut attacks = Bitboard::EMPTY;

    for sq in board.pieces(PieceKind::new(color, Piece::Pawn)).iter() {
        attacks |= pawn_attacks(sq, color);
    }
    for sq in board.pieces(PieceKind::new(color, Piece::Knight)).iter() {
        attacks |= knight_attacks(sq);
    }
    for sq in board.pieces(PieceKind::new(color, Piece::Bishop)).iter() {
        attacks |= bishop_attacks(sq, occ);
    }
    for sq in board.pieces(PieceKind::new(color, Piece::Rook)).iter() {
        attacks |= rook_attacks(sq, occ);
    }
    for sq in board.pieces(PieceKind::new(color, Piece::Queen)).iter() {
        attacks |= queen_attacks(sq, occ);
    }
    for sq in board.pieces(PieceKind::new(color, Piece::King)).iter() {
        attacks |= king_attacks(sq);
    }

    attacks
}

/// Pseudo-legal moves for the side to move: the union, over all of that
/// side's pieces, of their move generators. May leave the mover's own king
/// in check.
#[must_use]
pub fn pseudo_legal_moves(board: &Board) -> Vec<Move> {
    let color = board.side_to_move();
    let mut moves = Vec::with_capacity(48);

    for sq in board.pieces(PieceKind::new(color, Piece::Pawn)).iter() {
        pawns::generate_pawn_moves(board, sq, color, &mut moves);
    }
    for sq in board.pieces(PieceKind::new(color, Piece::Knight)).iter() {
        knights::generate_knight_moves(board, sq, color, &mut moves);
    }
    for sq in board.pieces(PieceKind::new(color, Piece::Bishop)).iter() {
        sliders::generate_bishop_moves(board, sq, color, &mut moves);
    }
    for sq in board.pieces(PieceKind::new(color, Piece::Rook)).iter() {
        sliders::generate_rook_moves(board, sq, color, &mut moves);
    }
    for sq in board.pieces(PieceKind::new(color, Piece::Queen)).iter() {
        sliders::generate_queen_moves(board, sq, color, &mut moves);
    }
    for sq in board.pieces(PieceKind::new(color, Piece::King)).iter() {
        kings::generate_king_moves(board, sq, color, &mut moves);
    }

    moves
}

/// Legal moves for the side to move: pseudo-legal moves that do not leave
/// the mover's king attacked after being played. Castling additionally
/// requires the king's current, pass-through, and landing squares to all
/// be safe, which is already enforced by `generate_king_moves` before the
/// move is even emitted.
#[must_use]
pub fn legal_moves(board: &Board) -> Vec<Move> {
    let color = board.side_to_move();
    let mut legal = Vec::new();
    for mv in pseudo_legal_moves(board) {
        let mut copy = board.clone();
        copy.make_move(&mv);
        if !copy.is_in_check(color) {
            legal.push(mv);
        }
    }
    legal
}

#[must_use]
pub fn is_checkmate(board: &Board) -> bool {
    board.is_in_check(board.side_to_move()) && legal_moves(board).is_empty()
}

#[must_use]
pub fn is_stalemate(board: &Board) -> bool {
    !board.is_in_check(board.side_to_move()) && legal_moves(board).is_empty()
}

/// Counts leaf nodes at fixed `depth` from `board`'s current position,
/// descending through legal moves only (SPEC_FULL.md ss8, the perft suite).
#[must_use]
pub fn perft(board: &mut Board, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = legal_moves(board);
    if depth == 1 {
        return moves.len() as u64;
    }
    let mut nodes = 0u64;
    for mv in moves {
        let undo = board.make_move(&mv);
        nodes += perft(board, depth - 1);
        board.undo_move(&undo);
    }
    nodes
}
