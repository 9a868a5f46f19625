//! Transactional move application: `make_move` records a full reversible
//! delta before mutating; `undo_move` restores state directly from that
//! delta (SPEC_FULL.md ss4.3).

use super::{castling_right_cleared_by, Board};
use crate::moves::{Move, MoveKind, UndoRecord};
use crate::types::{Color, PieceKind, Square};
use crate::zobrist::{black_to_move_key, castling_key, en_passant_file_key};

fn castle_index(right: u8) -> usize {
    match right {
        super::CASTLE_WHITE_KING_SIDE => 0,
        super::CASTLE_WHITE_QUEEN_SIDE => 1,
        super::CASTLE_BLACK_KING_SIDE => 2,
        _ => 3,
    }
}

fn toggle_castling_hash(board: &mut Board, right: u8) {
    board.hash ^= castling_key(castle_index(right));
}

pub(super) fn make_move(board: &mut Board, mv: &Move) -> UndoRecord {
    let undo = UndoRecord {
        mv: *mv,
        prior_castling_rights: board.castling_rights,
        prior_black_to_move: board.black_to_move,
        prior_ply: board.ply,
        prior_en_passant: board.en_passant,
        prior_white_pieces: board.white_pieces,
        prior_black_pieces: board.black_pieces,
        prior_occupied: board.occupied,
        prior_white_castled: board.white_castled,
        prior_black_castled: board.black_castled,
        prior_hash: board.hash,
    };

    let color = mv.piece.color();

    // 1 & 2: relocate the moving piece, clear a captured piece if any.
    board.remove_piece(mv.from, mv.piece);
    if let Some(captured) = mv.captured {
        if mv.kind != MoveKind::EnPassant {
            board.remove_piece(mv.to, captured);
        }
    }

    // 3: en-passant removes the pawn behind the destination, not on it.
    if mv.kind == MoveKind::EnPassant {
        let captured_sq = match color {
            Color::White => Square(mv.to.index() - 8),
            Color::Black => Square(mv.to.index() + 8),
        };
        let captured_piece = match color {
            Color::White => PieceKind::BlackPawn,
            Color::Black => PieceKind::WhitePawn,
        };
        board.remove_piece(captured_sq, captured_piece);
    }

    // 5: promotion replaces the pawn with the chosen piece at destination.
    if mv.kind == MoveKind::Promotion {
        let promo = mv.promotion.expect("promotion move carries a promotion piece");
        board.put_piece(mv.to, promo);
    } else {
        board.put_piece(mv.to, mv.piece);
    }

    // 4: castling also relocates the rook.
    if mv.kind == MoveKind::CastleKingside || mv.kind == MoveKind::CastleQueenside {
        let (rook_from, rook_to) = castle_rook_squares(color, mv.kind);
        let rook_kind = match color {
            Color::White => PieceKind::WhiteRook,
            Color::Black => PieceKind::BlackRook,
        };
        board.remove_piece(rook_from, rook_kind);
        board.put_piece(rook_to, rook_kind);
    }

    // 6: update castling rights -- king moves clear both of that side's
    // rights; a rook leaving or being captured on its corner clears that
    // corner's right (checked generally, SPEC_FULL.md O2).
    let (king_side, queen_side) = match color {
        Color::White => (super::CASTLE_WHITE_KING_SIDE, super::CASTLE_WHITE_QUEEN_SIDE),
        Color::Black => (super::CASTLE_BLACK_KING_SIDE, super::CASTLE_BLACK_QUEEN_SIDE),
    };
    if mv.piece.piece() == crate::types::Piece::King {
        for right in [king_side, queen_side] {
            if board.castling_rights & right != 0 {
                toggle_castling_hash(board, right);
                board.castling_rights &= !right;
            }
        }
    }
    for sq in [mv.from, mv.to] {
        if let Some(right) = castling_right_cleared_by(sq) {
            if board.castling_rights & right != 0 {
                toggle_castling_hash(board, right);
                board.castling_rights &= !right;
            }
        }
    }

    // 7: en-passant target tracks double pawn pushes only.
    if let Some(sq) = board.en_passant {
        board.hash ^= en_passant_file_key(sq.file());
    }
    let is_double_push = mv.piece.piece() == crate::types::Piece::Pawn
        && mv.from.rank().abs_diff(mv.to.rank()) == 2;
    board.en_passant = if is_double_push {
        let skipped_rank = (mv.from.rank() + mv.to.rank()) / 2;
        Some(Square::new(skipped_rank, mv.from.file()))
    } else {
        None
    };
    if let Some(sq) = board.en_passant {
        board.hash ^= en_passant_file_key(sq.file());
    }

    // 8: recompute derived state, toggle side to move, advance the ply.
    board.recompute_aggregates();
    board.black_to_move = !board.black_to_move;
    board.hash ^= black_to_move_key();
    board.ply += 1;

    // 9: sticky castled flags for king-safety evaluation.
    if mv.kind == MoveKind::CastleKingside || mv.kind == MoveKind::CastleQueenside {
        match color {
            Color::White => board.white_castled = true,
            Color::Black => board.black_castled = true,
        }
    }

    undo
}

pub(super) fn undo_move(board: &mut Board, undo: &UndoRecord) {
    let mv = &undo.mv;
    let color = mv.piece.color();

    if mv.kind == MoveKind::CastleKingside || mv.kind == MoveKind::CastleQueenside {
        let (rook_from, rook_to) = castle_rook_squares(color, mv.kind);
        let rook_kind = match color {
            Color::White => PieceKind::WhiteRook,
            Color::Black => PieceKind::BlackRook,
        };
        board.remove_piece(rook_to, rook_kind);
        board.put_piece(rook_from, rook_kind);
    }

    if mv.kind == MoveKind::Promotion {
        let promo = mv.promotion.expect("promotion move carries a promotion piece");
        board.remove_piece(mv.to, promo);
    } else {
        board.remove_piece(mv.to, mv.piece);
    }
    board.put_piece(mv.from, mv.piece);

    if mv.kind == MoveKind::EnPassant {
        let captured_sq = match color {
            Color::White => Square(mv.to.index() - 8),
            Color::Black => Square(mv.to.index() + 8),
        };
        let captured_piece = match color {
            Color::White => PieceKind::BlackPawn,
            Color::Black => PieceKind::WhitePawn,
        };
        board.put_piece(captured_sq, captured_piece);
    } else if let Some(captured) = mv.captured {
        board.put_piece(mv.to, captured);
    }

    board.castling_rights = undo.prior_castling_rights;
    board.black_to_move = undo.prior_black_to_move;
    board.ply = undo.prior_ply;
    board.en_passant = undo.prior_en_passant;
    board.white_pieces = undo.prior_white_pieces;
    board.black_pieces = undo.prior_black_pieces;
    board.occupied = undo.prior_occupied;
    board.white_castled = undo.prior_white_castled;
    board.black_castled = undo.prior_black_castled;
    board.hash = undo.prior_hash;
}

fn castle_rook_squares(color: Color, kind: MoveKind) -> (Square, Square) {
    match (color, kind) {
        (Color::White, MoveKind::CastleKingside) => (Square(7), Square(5)),
        (Color::White, MoveKind::CastleQueenside) => (Square(0), Square(3)),
        (Color::Black, MoveKind::CastleKingside) => (Square(63), Square(61)),
        (Color::Black, MoveKind::CastleQueenside) => (Square(56), Square(59)),
        _ => unreachable!("castle_rook_squares called with a non-castle move kind"),
    }
}
