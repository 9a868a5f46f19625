//! FEN parsing and emission (piece placement, side to move, castling
//! rights, en-passant target; halfmove/fullmove clocks are optional on
//! parse and omitted on emit, per SPEC_FULL.md ss4.7 / ss6).

use std::fmt::Write as _;

use super::{
    Board, CASTLE_BLACK_KING_SIDE, CASTLE_BLACK_QUEEN_SIDE, CASTLE_WHITE_KING_SIDE,
    CASTLE_WHITE_QUEEN_SIDE,
};
use crate::error::FenError;
use crate::types::{PieceKind, Square, ALL_PIECE_KINDS};

impl Board {
    /// Parses a FEN string's piece-placement, side, castling, and
    /// en-passant fields. Halfmove/fullmove counters are accepted if
    /// present but not required or validated.
    pub fn from_fen(fen: &str) -> Result<Board, FenError> {
        let mut board = Board::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() > 8 {
            return Err(FenError::TooManyRanks);
        }
        for (rank_from_top, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_from_top as u8;
            let mut file = 0u8;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as u8;
                } else {
                    let kind = PieceKind::from_fen_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                    if file >= 8 {
                        return Err(FenError::InvalidRank {
                            rank: rank_from_top,
                            files: file as usize + 1,
                        });
                    }
                    board.put_piece(Square::new(rank, file), kind);
                    file += 1;
                }
            }
            if file != 8 {
                return Err(FenError::InvalidRank {
                    rank: rank_from_top,
                    files: file as usize,
                });
            }
        }

        board.black_to_move = match parts[1] {
            "w" => false,
            "b" => true,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        board.castling_rights = 0;
        if parts[2] != "-" {
            for c in parts[2].chars() {
                board.castling_rights |= match c {
                    'K' => CASTLE_WHITE_KING_SIDE,
                    'Q' => CASTLE_WHITE_QUEEN_SIDE,
                    'k' => CASTLE_BLACK_KING_SIDE,
                    'q' => CASTLE_BLACK_QUEEN_SIDE,
                    _ => return Err(FenError::InvalidCastling { char: c }),
                };
            }
        }

        board.en_passant = if parts[3] == "-" {
            None
        } else {
            Some(Square::from_algebraic(parts[3]).ok_or_else(|| FenError::InvalidEnPassant {
                found: parts[3].to_string(),
            })?)
        };

        board.recompute_aggregates();
        board.recompute_hash();
        Ok(board)
    }

    /// Emits the piece-placement/side/castling/en-passant fields. Halfmove
    /// and fullmove clocks are not tracked by the core and are omitted.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut out = String::with_capacity(64);
        for rank_from_top in 0..8u8 {
            let rank = 7 - rank_from_top;
            let mut empty_run = 0u32;
            for file in 0..8u8 {
                let sq = Square::new(rank, file);
                match ALL_PIECE_KINDS.into_iter().find(|k| self.pieces(*k).contains(sq)) {
                    Some(kind) => {
                        if empty_run > 0 {
                            let _ = write!(out, "{empty_run}");
                            empty_run = 0;
                        }
                        out.push(kind.to_fen_char());
                    }
                    None => empty_run += 1,
                }
            }
            if empty_run > 0 {
                let _ = write!(out, "{empty_run}");
            }
            if rank_from_top != 7 {
                out.push('/');
            }
        }

        out.push(' ');
        out.push(if self.black_to_move { 'b' } else { 'w' });

        out.push(' ');
        let mut any_castling = false;
        for (bit, c) in [
            (CASTLE_WHITE_KING_SIDE, 'K'),
            (CASTLE_WHITE_QUEEN_SIDE, 'Q'),
            (CASTLE_BLACK_KING_SIDE, 'k'),
            (CASTLE_BLACK_QUEEN_SIDE, 'q'),
        ] {
            if self.castling_rights & bit != 0 {
                out.push(c);
                any_castling = true;
            }
        }
        if !any_castling {
            out.push('-');
        }

        out.push(' ');
        match self.en_passant {
            Some(sq) => {
                let _ = write!(out, "{sq}");
            }
            None => out.push('-'),
        }

        out
    }
}
