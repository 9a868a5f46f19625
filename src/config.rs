//! Centralised evaluation and search tunables.
//!
//! Kept as named constants in one module, mirroring the reference engine's
//! `core/config.rs`, so the numeric design of the evaluation and search can
//! be adjusted without touching algorithm code.

/// Material weights, indexed by `Piece` (pawn, knight, bishop, rook, queen,
/// king). The king is excluded from material scoring (checkmate handles it)
/// but kept as a zero entry so the array can be indexed by `Piece::index`-
/// style position without a special case.
pub const MATERIAL_WEIGHTS: [i32; 6] = [1, 3, 3, 5, 9, 0];

/// Scale factor applied to the raw material difference.
pub const MATERIAL_SCALE: i32 = 10;

/// Per-file doubled-pawn penalty multiplier (applied to the pawn count on
/// a file with two or more pawns of the same colour).
pub const DOUBLED_PAWN_WEIGHT: i32 = 1;

/// Penalty for each pawn blocked by any piece directly ahead of it.
pub const BLOCKED_PAWN_WEIGHT: i32 = 1;

/// Penalty for each isolated pawn (no own pawn on an adjacent file).
pub const ISOLATED_PAWN_WEIGHT: i32 = 1;

/// Weight applied to the mobility popcount difference.
pub const MOBILITY_WEIGHT: i32 = 1;

/// Weight applied to the extended-centre occupancy difference.
pub const CENTRE_WEIGHT: i32 = 2;

/// Bonus applied to a side that has castled, before game-phase scaling.
pub const CASTLE_BONUS: i32 = 30;

/// Penalty for each own knight sitting on the a- or h-file.
pub const KNIGHT_RIM_PENALTY: i32 = 5;

/// Magnitude of the score returned for a checkmated position. Comfortably
/// inside `i32`'s range with headroom for alpha/beta arithmetic during
/// search (the spec requires at least +-10_000 of headroom above this).
pub const MATE_SCORE: i32 = 1_000_000;

/// Fixed seed for the Zobrist key generator, so hashes (and therefore
/// search results at a fixed depth and ordering) are reproducible.
pub const ZOBRIST_SEED: u64 = 0x5EED_1234_5678_9ABC;

/// Number of slots in the transposition table (must be a power of two).
pub const TT_SIZE: usize = 1 << 20;

/// Number of consecutive identical engine moves for the same side that
/// trigger the repetition-draw heuristic.
pub const REPETITION_LIMIT: u32 = 3;
