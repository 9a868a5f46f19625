//! Error types for the engine core.
//!
//! Recoverable parse/legality failures are returned as `Result`; invariant
//! violations are a programming-error class and abort via panic rather than
//! being threaded through `Result` (see `invariant`).

use std::fmt;

use crate::types::Square;

/// Error parsing a FEN string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string has too few whitespace-separated fields (needs at least 4).
    TooFewParts { found: usize },
    /// Invalid piece character in the piece-placement field.
    InvalidPiece { char: char },
    /// Invalid castling-rights character (must be one of "KQkq-").
    InvalidCastling { char: char },
    /// Side-to-move field is neither "w" nor "b".
    InvalidSideToMove { found: String },
    /// En-passant field is not "-" and not a valid algebraic square.
    InvalidEnPassant { found: String },
    /// A rank in the piece-placement field does not sum to exactly 8 files.
    InvalidRank { rank: usize, files: usize },
    /// More than 8 ranks given in the piece-placement field.
    TooManyRanks,
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewParts { found } => {
                write!(f, "FEN must have at least 4 fields, found {found}")
            }
            FenError::InvalidPiece { char } => write!(f, "invalid piece character '{char}' in FEN"),
            FenError::InvalidCastling { char } => {
                write!(f, "invalid castling character '{char}' in FEN")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "invalid en-passant square '{found}'")
            }
            FenError::InvalidRank { rank, files } => {
                write!(f, "rank {rank} has {files} files, expected 8")
            }
            FenError::TooManyRanks => write!(f, "piece placement has more than 8 ranks"),
        }
    }
}

impl std::error::Error for FenError {}

/// Error parsing a UCI-like move string (`e2e4`, `a7a8q`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string is not 4 or 5 characters long.
    InvalidLength { found: usize },
    /// Source or destination square is not valid algebraic notation.
    InvalidSquare { notation: String },
    /// The trailing promotion character is not one of q, r, b, n.
    InvalidPromotion { char: char },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { found } => {
                write!(f, "move string must be 4 or 5 characters, found {found}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "invalid square notation '{notation}'")
            }
            MoveParseError::InvalidPromotion { char } => {
                write!(f, "invalid promotion character '{char}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Top-level error taxonomy surfaced to callers of the engine core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A UCI-like move string failed to parse.
    InvalidMoveString(MoveParseError),
    /// A move string parsed fine but is not in the legal-move set for the
    /// current position.
    IllegalMove { from: Square, to: Square },
    /// The search found no legal reply, or the repetition heuristic fired.
    ResignOrDraw,
    /// A FEN string failed to parse.
    InvalidFen(FenError),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidMoveString(e) => write!(f, "invalid move string: {e}"),
            EngineError::IllegalMove { from, to } => {
                write!(f, "illegal move {from}{to}")
            }
            EngineError::ResignOrDraw => write!(f, "no legal reply: resign or draw"),
            EngineError::InvalidFen(e) => write!(f, "invalid FEN: {e}"),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::InvalidMoveString(e) => Some(e),
            EngineError::InvalidFen(e) => Some(e),
            _ => None,
        }
    }
}

impl From<MoveParseError> for EngineError {
    fn from(e: MoveParseError) -> Self {
        EngineError::InvalidMoveString(e)
    }
}

impl From<FenError> for EngineError {
    fn from(e: FenError) -> Self {
        EngineError::InvalidFen(e)
    }
}

/// Panics with a descriptive message if `cond` is false.
///
/// `InternalInvariantViolation` is a programming-error class: the core never
/// catches it, so it is implemented as a panic rather than a `Result` variant.
#[inline]
pub fn invariant(cond: bool, msg: &str) {
    if !cond {
        panic!("internal invariant violation: {msg}");
    }
}
