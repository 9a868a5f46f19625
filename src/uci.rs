//! UCI-like move string parsing and formatting (SPEC_FULL.md ss4.7, ss6):
//! `e2e4`, `a7a8q`. The board the move is drawn from resolves captures,
//! castling, en-passant, and promotion kind from its own legal-move set.

use crate::board::movegen::legal_moves;
use crate::board::Board;
use crate::error::{EngineError, MoveParseError};
use crate::moves::Move;
use crate::types::{Piece, Square};

/// Parses a move string such as `e2e4` or `a7a8q` against `board`'s legal
/// moves for the side to move. The promotion letter, when present,
/// disambiguates which of the four legal promotion moves from the same
/// `from`/`to` pair is meant.
///
/// A string that isn't well-formed UCI notation fails as
/// `EngineError::InvalidMoveString`. A string that is well-formed but names
/// a move absent from the legal-move set fails as `EngineError::IllegalMove`,
/// carrying the squares that were attempted.
pub fn parse_uci_move(board: &Board, s: &str) -> Result<Move, EngineError> {
    if s.len() != 4 && s.len() != 5 {
        return Err(MoveParseError::InvalidLength { found: s.len() }.into());
    }

    let from = Square::from_algebraic(&s[0..2]).ok_or_else(|| MoveParseError::InvalidSquare {
        notation: s[0..2].to_string(),
    })?;
    let to = Square::from_algebraic(&s[2..4]).ok_or_else(|| MoveParseError::InvalidSquare {
        notation: s[2..4].to_string(),
    })?;

    let promotion = if s.len() == 5 {
        let c = s.as_bytes()[4] as char;
        Some(Piece::from_char(c).ok_or(MoveParseError::InvalidPromotion { char: c })?)
    } else {
        None
    };

    let candidates = legal_moves(board);
    candidates
        .into_iter()
        .find(|mv| {
            mv.from == from
                && mv.to == to
                && match promotion {
                    Some(piece) => mv.promotion.map(|p| p.piece()) == Some(piece),
                    None => mv.promotion.is_none(),
                }
        })
        .ok_or(EngineError::IllegalMove { from, to })
}

/// Formats `mv` as a UCI-like move string (`e2e4`, `a7a8q`).
#[must_use]
pub fn move_to_uci(mv: &Move) -> String {
    mv.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_pawn_push() {
        let board = Board::new();
        let mv = parse_uci_move(&board, "e2e4").unwrap();
        assert_eq!(mv.from, Square::from_algebraic("e2").unwrap());
        assert_eq!(mv.to, Square::from_algebraic("e4").unwrap());
    }

    #[test]
    fn rejects_malformed_move_string_as_invalid_move_string() {
        let board = Board::new();
        let err = parse_uci_move(&board, "z9z9").unwrap_err();
        assert!(matches!(err, EngineError::InvalidMoveString(_)));
    }

    #[test]
    fn rejects_well_formed_but_illegal_move_as_illegal_move() {
        // e2e5 names real squares but no legal pawn move reaches e5 in one
        // step from e2, so this must surface as IllegalMove, not a parse
        // failure over the square notation itself.
        let board = Board::new();
        let err = parse_uci_move(&board, "e2e5").unwrap_err();
        assert_eq!(
            err,
            EngineError::IllegalMove {
                from: Square::from_algebraic("e2").unwrap(),
                to: Square::from_algebraic("e5").unwrap(),
            }
        );
    }

    #[test]
    fn parses_promotion_with_piece_letter() {
        let board = Board::from_fen("8/P6k/8/8/8/8/7K/8 w - - 0 1").unwrap();
        let mv = parse_uci_move(&board, "a7a8q").unwrap();
        assert_eq!(mv.promotion.map(|p| p.piece()), Some(Piece::Queen));
    }

    #[test]
    fn round_trips_through_display() {
        let board = Board::new();
        let mv = parse_uci_move(&board, "g1f3").unwrap();
        assert_eq!(move_to_uci(&mv), "g1f3");
    }
}
