//! Board state: piece placement, aggregates, castling/en-passant state, and
//! the make/undo discipline that keeps them consistent.

mod fen;
mod make_unmake;
pub mod movegen;

use crate::bitboard::Bitboard;
use crate::error::invariant;
use crate::moves::{Move, UndoRecord};
use crate::types::{Color, PieceKind, Square, ALL_PIECE_KINDS};
use crate::zobrist::{black_to_move_key, castling_key, en_passant_file_key, piece_square_key};

pub const CASTLE_WHITE_KING_SIDE: u8 = 0b0001;
pub const CASTLE_WHITE_QUEEN_SIDE: u8 = 0b0010;
pub const CASTLE_BLACK_KING_SIDE: u8 = 0b0100;
pub const CASTLE_BLACK_QUEEN_SIDE: u8 = 0b1000;

pub(crate) const WHITE_QUEEN_ROOK_START: Square = Square(0);
pub(crate) const WHITE_KING_ROOK_START: Square = Square(7);
pub(crate) const WHITE_KING_START: Square = Square(4);
pub(crate) const BLACK_QUEEN_ROOK_START: Square = Square(56);
pub(crate) const BLACK_KING_ROOK_START: Square = Square(63);
pub(crate) const BLACK_KING_START: Square = Square(60);

const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// The full board state. Mutated only through `make_move` / `undo_move`.
#[derive(Clone, Debug)]
pub struct Board {
    pieces: [Bitboard; 12],
    white_pieces: Bitboard,
    black_pieces: Bitboard,
    occupied: Bitboard,
    black_to_move: bool,
    castling_rights: u8,
    en_passant: Option<Square>,
    white_castled: bool,
    black_castled: bool,
    ply: u32,
    hash: u64,
}

impl Board {
    /// The standard chess starting position.
    #[must_use]
    pub fn new() -> Self {
        Board::from_fen(START_FEN).expect("start FEN is well-formed")
    }

    /// A board with no pieces placed and White to move.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            pieces: [Bitboard::EMPTY; 12],
            white_pieces: Bitboard::EMPTY,
            black_pieces: Bitboard::EMPTY,
            occupied: Bitboard::EMPTY,
            black_to_move: false,
            castling_rights: 0,
            en_passant: None,
            white_castled: false,
            black_castled: false,
            ply: 0,
            hash: 0,
        }
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        if self.black_to_move {
            Color::Black
        } else {
            Color::White
        }
    }

    #[inline]
    #[must_use]
    pub fn black_to_move(&self) -> bool {
        self.black_to_move
    }

    #[inline]
    #[must_use]
    pub fn ply(&self) -> u32 {
        self.ply
    }

    #[inline]
    #[must_use]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    #[inline]
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant
    }

    #[inline]
    #[must_use]
    pub fn has_castling_right(&self, right: u8) -> bool {
        self.castling_rights & right != 0
    }

    #[inline]
    #[must_use]
    pub fn white_castled(&self) -> bool {
        self.white_castled
    }

    #[inline]
    #[must_use]
    pub fn black_castled(&self) -> bool {
        self.black_castled
    }

    #[inline]
    #[must_use]
    pub fn pieces(&self, kind: PieceKind) -> Bitboard {
        self.pieces[kind.index()]
    }

    #[inline]
    #[must_use]
    pub fn occupied_by(&self, color: Color) -> Bitboard {
        match color {
            Color::White => self.white_pieces,
            Color::Black => self.black_pieces,
        }
    }

    #[inline]
    #[must_use]
    pub fn occupied(&self) -> Bitboard {
        self.occupied
    }

    #[inline]
    #[must_use]
    pub fn empty_squares(&self) -> Bitboard {
        !self.occupied
    }

    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<PieceKind> {
        if !self.occupied.contains(sq) {
            return None;
        }
        ALL_PIECE_KINDS
            .into_iter()
            .find(|&kind| self.pieces[kind.index()].contains(sq))
    }

    #[must_use]
    pub fn king_square(&self, color: Color) -> Square {
        let kind = match color {
            Color::White => PieceKind::WhiteKing,
            Color::Black => PieceKind::BlackKing,
        };
        self.pieces[kind.index()]
            .single_square()
            .unwrap_or_else(|| {
                invariant(false, "king missing from board");
                unreachable!()
            })
    }

    pub(crate) fn put_piece(&mut self, sq: Square, kind: PieceKind) {
        self.pieces[kind.index()].set(sq);
        match kind.color() {
            Color::White => self.white_pieces.set(sq),
            Color::Black => self.black_pieces.set(sq),
        }
        self.occupied.set(sq);
        self.hash ^= piece_square_key(kind, sq);
    }

    pub(crate) fn remove_piece(&mut self, sq: Square, kind: PieceKind) {
        self.pieces[kind.index()].clear(sq);
        match kind.color() {
            Color::White => self.white_pieces.clear(sq),
            Color::Black => self.black_pieces.clear(sq),
        }
        self.occupied.clear(sq);
        self.hash ^= piece_square_key(kind, sq);
    }

    fn recompute_aggregates(&mut self) {
        let mut white = Bitboard::EMPTY;
        let mut black = Bitboard::EMPTY;
        for kind in ALL_PIECE_KINDS {
            match kind.color() {
                Color::White => white |= self.pieces[kind.index()],
                Color::Black => black |= self.pieces[kind.index()],
            }
        }
        self.white_pieces = white;
        self.black_pieces = black;
        self.occupied = white | black;
    }

    fn recompute_hash(&mut self) {
        let mut hash = 0u64;
        for kind in ALL_PIECE_KINDS {
            for sq in self.pieces[kind.index()].iter() {
                hash ^= piece_square_key(kind, sq);
            }
        }
        if self.black_to_move {
            hash ^= black_to_move_key();
        }
        for (bit, idx) in [
            (CASTLE_WHITE_KING_SIDE, 0),
            (CASTLE_WHITE_QUEEN_SIDE, 1),
            (CASTLE_BLACK_KING_SIDE, 2),
            (CASTLE_BLACK_QUEEN_SIDE, 3),
        ] {
            if self.castling_rights & bit != 0 {
                hash ^= castling_key(idx);
            }
        }
        if let Some(sq) = self.en_passant {
            hash ^= en_passant_file_key(sq.file());
        }
        self.hash = hash;
    }

    /// All squares attacked by `color`'s pieces, ignoring whether those
    /// squares are occupied by friendly pieces (used for check detection
    /// and castling legality, never for move legality of the attacker
    /// itself).
    #[must_use]
    pub fn attacks_by(&self, color: Color) -> Bitboard {
        movegen::attacked_squares(self, color)
    }

    #[must_use]
    pub fn is_square_attacked(&self, sq: Square, by: Color) -> bool {
        self.attacks_by(by).contains(sq)
    }

    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.is_square_attacked(self.king_square(color), color.opposite())
    }

    /// Checks the invariants from SPEC_FULL.md ss3; intended for tests and
    /// debug assertions, not the hot path.
    #[must_use]
    pub fn check_invariants(&self) -> bool {
        let mut seen = Bitboard::EMPTY;
        for kind in ALL_PIECE_KINDS {
            let bb = self.pieces[kind.index()];
            if !(bb & seen).is_empty() {
                return false;
            }
            seen |= bb;
        }
        let mut white = Bitboard::EMPTY;
        let mut black = Bitboard::EMPTY;
        for kind in ALL_PIECE_KINDS {
            match kind.color() {
                Color::White => white |= self.pieces[kind.index()],
                Color::Black => black |= self.pieces[kind.index()],
            }
        }
        if white.0 != self.white_pieces.0 || black.0 != self.black_pieces.0 {
            return false;
        }
        if self.occupied.0 != (white | black).0 {
            return false;
        }
        if self.pieces[PieceKind::WhiteKing.index()].popcount() != 1 {
            return false;
        }
        if self.pieces[PieceKind::BlackKing.index()].popcount() != 1 {
            return false;
        }
        if let Some(sq) = self.en_passant {
            if sq.rank() != 2 && sq.rank() != 5 {
                return false;
            }
        }
        true
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

/// Whether `mv`'s `from`/`to` touches a rook's starting corner, in which
/// case the corresponding castling right is cleared (SPEC_FULL.md O2: this
/// is checked generally, not via a fixed special-cased square list).
pub(crate) fn castling_right_cleared_by(sq: Square) -> Option<u8> {
    match sq {
        WHITE_QUEEN_ROOK_START => Some(CASTLE_WHITE_QUEEN_SIDE),
        WHITE_KING_ROOK_START => Some(CASTLE_WHITE_KING_SIDE),
        BLACK_QUEEN_ROOK_START => Some(CASTLE_BLACK_QUEEN_SIDE),
        BLACK_KING_ROOK_START => Some(CASTLE_BLACK_KING_SIDE),
        _ => None,
    }
}

/// Produces an `UndoRecord` and applies `mv` to the board, including castling
/// rook relocation, en-passant capture, and promotion.
impl Board {
    #[must_use]
    pub fn make_move(&mut self, mv: &Move) -> UndoRecord {
        make_unmake::make_move(self, mv)
    }

    pub fn undo_move(&mut self, undo: &UndoRecord) {
        make_unmake::undo_move(self, undo);
    }
}
