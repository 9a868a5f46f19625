//! Move records and the reversible undo record.

use std::fmt;

use crate::bitboard::Bitboard;
use crate::types::{PieceKind, Square};

/// The kind of a move, used to drive `make`/`undo` and move ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Normal,
    Capture,
    EnPassant,
    CastleKingside,
    CastleQueenside,
    Promotion,
}

/// A single move: enough information to make it, undo it, and order it,
/// without consulting the board it was generated from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece: PieceKind,
    pub captured: Option<PieceKind>,
    pub kind: MoveKind,
    pub promotion: Option<PieceKind>,
    /// Set by move ordering (`order_moves`) after a temporary make; not
    /// populated by the move generator itself.
    pub is_check: bool,
}

impl Move {
    #[must_use]
    pub fn is_capture(&self) -> bool {
        matches!(self.kind, MoveKind::Capture | MoveKind::EnPassant) || self.captured.is_some()
    }

    #[must_use]
    pub fn is_castle(&self) -> bool {
        matches!(self.kind, MoveKind::CastleKingside | MoveKind::CastleQueenside)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "{}", promo.piece().to_char())?;
        }
        Ok(())
    }
}

/// The full reversible delta recorded by `make_move`, consumed exactly once
/// by the matching `undo_move`.
#[derive(Clone, Copy, Debug)]
pub struct UndoRecord {
    pub mv: Move,
    pub prior_castling_rights: u8,
    pub prior_black_to_move: bool,
    pub prior_ply: u32,
    pub prior_en_passant: Option<Square>,
    pub prior_white_pieces: Bitboard,
    pub prior_black_pieces: Bitboard,
    pub prior_occupied: Bitboard,
    pub prior_white_castled: bool,
    pub prior_black_castled: bool,
    pub prior_hash: u64,
}
