//! King pseudo-legal move generation, plus castling (SPEC_FULL.md ss4.2).
//!
//! Castling is emitted here as a single king move from e1/e8 to g1/g8 or
//! c1/c8; the rook relocation happens in `make_move`.

use crate::bitboard::KING_ATTACKS;
use crate::board::{
    Board, BLACK_KING_START, CASTLE_BLACK_KING_SIDE, CASTLE_BLACK_QUEEN_SIDE,
    CASTLE_WHITE_KING_SIDE, CASTLE_WHITE_QUEEN_SIDE, WHITE_KING_START,
};
use crate::moves::{Move, MoveKind};
use crate::types::{Color, Piece, PieceKind, Square};

pub(crate) fn king_attacks(sq: Square) -> crate::bitboard::Bitboard {
    KING_ATTACKS[sq.index() as usize]
}

pub(crate) fn generate_king_moves(board: &Board, sq: Square, color: Color, out: &mut Vec<Move>) {
    let piece = PieceKind::new(color, Piece::King);
    let own_occ = board.occupied_by(color);
    let targets = king_attacks(sq) & !own_occ;
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

    generate_castling_moves(board, sq, color, out);
}

fn generate_castling_moves(board: &Board, king_sq: Square, color: Color, out: &mut Vec<Move>) {
    let opponent = color.opposite();
    let piece = PieceKind::new(color, Piece::King);

    let (home, king_right, queen_right, kingside_empty, kingside_pass, kingside_land, queenside_empty, queenside_pass, queenside_land) =
        match color {
            Color::White => (
                WHITE_KING_START,
                CASTLE_WHITE_KING_SIDE,
                CASTLE_WHITE_QUEEN_SIDE,
                [Square(5), Square(6)],
                Square(5),
                Square(6),
                [Square(1), Square(2), Square(3)],
                Square(3),
                Square(2),
            ),
            Color::Black => (
                BLACK_KING_START,
                CASTLE_BLACK_KING_SIDE,
                CASTLE_BLACK_QUEEN_SIDE,
                [Square(61), Square(62)],
                Square(61),
                Square(62),
                [Square(57), Square(58), Square(59)],
                Square(59),
                Square(58),
            ),
        };

    if king_sq != home {
        return;
    }
    if board.is_square_attacked(king_sq, opponent) {
        return;
    }

    if board.has_castling_right(king_right)
        && kingside_empty.iter().all(|&sq| !board.occupied().contains(sq))
        && !board.is_square_attacked(kingside_pass, opponent)
        && !board.is_square_attacked(kingside_land, opponent)
    {
        out.push(Move {
            from: king_sq,
            to: kingside_land,
            piece,
            captured: None,
            kind: MoveKind::CastleKingside,
            promotion: None,
            is_check: false,
        });
    }

    if board.has_castling_right(queen_right)
        && queenside_empty.iter().all(|&sq| !board.occupied().contains(sq))
        && !board.is_square_attacked(queenside_pass, opponent)
        && !board.is_square_attacked(queenside_land, opponent)
    {
        out.push(Move {
            from: king_sq,
            to: queenside_land,
            piece,
            captured: None,
            kind: MoveKind::CastleQueenside,
            promotion: None,
            is_check: false,
        });
    }
}
