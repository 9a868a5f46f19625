//! The engine façade: owns a `Board`, a shared transposition table, and the
//! top-level repetition heuristic described in SPEC_FULL.md ss4.6 / ss5.

use std::sync::Arc;

use crate::board::Board;
use crate::config::{REPETITION_LIMIT, TT_SIZE};
use crate::error::EngineError;
use crate::moves::Move;
use crate::search::{self, OrderingStrategy};
use crate::transposition_table::TranspositionTable;
use crate::types::Color;

/// Tracks the last few moves played by one side, to drive the repetition
/// heuristic described in SPEC_FULL.md ss4.6: three consecutive identical
/// engine moves for the same side declares the game drawn.
#[derive(Default, Clone)]
struct RepetitionTracker {
    last_move: Option<Move>,
    consecutive_count: u32,
}

impl RepetitionTracker {
    fn record(&mut self, mv: Move) -> bool {
        if self.last_move == Some(mv) {
            self.consecutive_count += 1;
        } else {
            self.last_move = Some(mv);
            self.consecutive_count = 1;
        }
        self.consecutive_count >= REPETITION_LIMIT
    }
}

/// Owns the position under analysis plus the state that must persist
/// across turns: the shared transposition table and, per side, the
/// repetition tracker.
pub struct Engine {
    board: Board,
    tt: Arc<TranspositionTable>,
    trackers: [RepetitionTracker; 2],
}

impl Engine {
    #[must_use]
    pub fn new(board: Board) -> Self {
        Engine {
            board,
            tt: Arc::new(TranspositionTable::with_capacity(TT_SIZE)),
            trackers: [RepetitionTracker::default(), RepetitionTracker::default()],
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Searches the current position to `depth` plies and returns the best
    /// move and its score, without applying it. Returns
    /// `EngineError::ResignOrDraw` if there is no legal move, or if the
    /// repetition heuristic fires for the side about to move.
    pub fn best_move(
        &mut self,
        depth: u32,
        ordering: OrderingStrategy,
    ) -> Result<(Move, i32), EngineError> {
        let (mv, score) = search::best_move(&self.board, Arc::clone(&self.tt), depth, ordering)
            .ok_or(EngineError::ResignOrDraw)?;
        #[cfg(feature = "logging")]
        log::debug!("best_move at depth {depth}: {mv} (score {score})");

        let side = self.board.side_to_move();
        let drawn_by_repetition = self.trackers[side.index_for_repetition()].record(mv);
        if drawn_by_repetition {
            #[cfg(feature = "logging")]
            log::warn!("repetition heuristic fired for {mv}, declaring a draw");
            return Err(EngineError::ResignOrDraw);
        }

        Ok((mv, score))
    }

    /// Applies `mv` to the current position.
    pub fn make_move(&mut self, mv: &Move) {
        self.board.make_move(mv);
    }
}

trait RepetitionIndex {
    fn index_for_repetition(self) -> usize;
}

impl RepetitionIndex for Color {
    fn index_for_repetition(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeating_the_same_move_three_times_declares_a_draw() {
        let mut tracker = RepetitionTracker::default();
        let mv = Move {
            from: crate::types::Square::from_algebraic("g1").unwrap(),
            to: crate::types::Square::from_algebraic("f3").unwrap(),
            piece: crate::types::PieceKind::WhiteKnight,
            captured: None,
            kind: crate::moves::MoveKind::Normal,
            promotion: None,
            is_check: false,
        };
        assert!(!tracker.record(mv));
        assert!(!tracker.record(mv));
        assert!(tracker.record(mv));
    }

    #[test]
    fn best_move_returns_a_legal_move_from_the_start_position() {
        let mut engine = Engine::new(Board::new());
        let (mv, _score) = engine
            .best_move(1, OrderingStrategy::CapturesChecksCastlesFirst)
            .unwrap();
        assert!(crate::board::movegen::legal_moves(engine.board()).contains(&mv));
    }
}
