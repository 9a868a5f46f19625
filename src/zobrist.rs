//! Zobrist hashing for chess positions.
//!
//! Provides an incrementally-updatable 64-bit position hash for the
//! transposition table. Unlike a piece-on-square-only key, this one also
//! folds in side-to-move, castling rights, and the en-passant file (see
//! SPEC_FULL.md O3) so the table cannot conflate positions that differ only
//! in those respects.

use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::ZOBRIST_SEED;
use crate::types::{PieceKind, Square};

pub(crate) struct ZobristKeys {
    /// Indexed by `PieceKind::index()`, then square index.
    piece_keys: [[u64; 64]; 12],
    black_to_move_key: u64,
    /// White king-side, white queen-side, black king-side, black queen-side.
    castling_keys: [u64; 4],
    en_passant_file_keys: [u64; 8],
}

impl ZobristKeys {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(ZOBRIST_SEED);
        let mut piece_keys = [[0u64; 64]; 12];
        for kind in &mut piece_keys {
            for key in kind.iter_mut() {
                *key = rng.gen();
            }
        }
        let black_to_move_key = rng.gen();
        let mut castling_keys = [0u64; 4];
        for key in &mut castling_keys {
            *key = rng.gen();
        }
        let mut en_passant_file_keys = [0u64; 8];
        for key in &mut en_passant_file_keys {
            *key = rng.gen();
        }
        ZobristKeys {
            piece_keys,
            black_to_move_key,
            castling_keys,
            en_passant_file_keys,
        }
    }
}

pub(crate) static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);

#[inline]
pub(crate) fn piece_square_key(piece: PieceKind, sq: Square) -> u64 {
    ZOBRIST.piece_keys[piece.index()][sq.index() as usize]
}

#[inline]
pub(crate) fn black_to_move_key() -> u64 {
    ZOBRIST.black_to_move_key
}

/// `castle_index`: 0 = white king-side, 1 = white queen-side, 2 = black
/// king-side, 3 = black queen-side.
#[inline]
pub(crate) fn castling_key(castle_index: usize) -> u64 {
    ZOBRIST.castling_keys[castle_index]
}

#[inline]
pub(crate) fn en_passant_file_key(file: u8) -> u64 {
    ZOBRIST.en_passant_file_keys[file as usize]
}
