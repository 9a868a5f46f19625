//! Pawn pseudo-legal move and attack generation (SPEC_FULL.md ss4.2).

use crate::bitboard::{Bitboard, BLACK_PAWN_ATTACKS, WHITE_PAWN_ATTACKS};
use crate::board::Board;
use crate::moves::{Move, MoveKind};
use crate::types::{Color, Piece, PieceKind, Square};

const PROMOTION_PIECES: [Piece; 4] = [Piece::Queen, Piece::Rook, Piece::Bishop, Piece::Knight];

/// Squares a pawn of `color` on `sq` attacks (capture squares only,
/// regardless of whether anything occupies them).
pub(crate) fn pawn_attacks(sq: Square, color: Color) -> Bitboard {
    match color {
        Color::White => WHITE_PAWN_ATTACKS[sq.index() as usize],
        Color::Black => BLACK_PAWN_ATTACKS[sq.index() as usize],
    }
}

pub(crate) fn generate_pawn_moves(board: &Board, sq: Square, color: Color, out: &mut Vec<Move>) {
    let piece = PieceKind::new(color, Piece::Pawn);
    let bb = Bitboard::from_square(sq);
    let empty = board.empty_squares();
    let opp = board.occupied_by(color.opposite());
    let ep = board
        .en_passant_target()
        .map(Bitboard::from_square)
        .unwrap_or(Bitboard::EMPTY);

    let (single_push, double_push_rank, promotion_rank) = match color {
        Color::White => (bb.north() & empty, Bitboard::RANK_4, 7u8),
        Color::Black => (bb.south() & empty, Bitboard::RANK_5, 0u8),
    };

    for to in single_push.iter() {
        emit_push_or_promotion(piece, sq, to, promotion_rank, out);
    }

    let double_push = match color {
        Color::White => single_push.north() & empty & double_push_rank,
        Color::Black => single_push.south() & empty & double_push_rank,
    };
    for to in double_push.iter() {
        out.push(Move {
            from: sq,
            to,
            piece,
            captured: None,
            kind: MoveKind::Normal,
            promotion: None,
            is_check: false,
        });
    }

    let attacks = pawn_attacks(sq, color);
    let captures = attacks & opp;
    for to in captures.iter() {
        let captured = board.piece_at(to);
        if to.rank() == promotion_rank {
            for promo_piece in PROMOTION_PIECES {
                out.push(Move {
                    from: sq,
                    to,
                    piece,
                    captured,
                    kind: MoveKind::Promotion,
                    promotion: Some(PieceKind::new(color, promo_piece)),
                    is_check: false,
                });
            }
        } else {
            out.push(Move {
                from: sq,
                to,
                piece,
                captured,
                kind: MoveKind::Capture,
                promotion: None,
                is_check: false,
            });
        }
    }

    let en_passant_capture = attacks & ep;
    if let Some(to) = en_passant_capture.single_square() {
        let captured = PieceKind::new(color.opposite(), Piece::Pawn);
        out.push(Move {
            from: sq,
            to,
            piece,
            captured: Some(captured),
            kind: MoveKind::EnPassant,
            promotion: None,
            is_check: false,
        });
    }
}

fn emit_push_or_promotion(
    piece: PieceKind,
    from: Square,
    to: Square,
    promotion_rank: u8,
    out: &mut Vec<Move>,
) {
    if to.rank() == promotion_rank {
        let color = piece.color();
        for promo_piece in PROMOTION_PIECES {
            out.push(Move {
                from,
                to,
                piece,
                captured: None,
                kind: MoveKind::Promotion,
                promotion: Some(PieceKind::new(color, promo_piece)),
                is_check: false,
            });
        }
    } else {
        out.push(Move {
            from,
            to,
            piece,
            captured: None,
            kind: MoveKind::Normal,
            promotion: None,
            is_check: false,
        });
    }
}
