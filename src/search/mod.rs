//! Root-parallel alpha-beta search (SPEC_FULL.md ss4.6, ss5): one thread
//! per legal root move, each driving a sequential `negamax` on its own
//! board copy; results are collected and the best-scoring move wins.

mod alpha_beta;
mod ordering;

use std::sync::Arc;
use std::thread;

use crate::board::movegen::legal_moves;
use crate::board::Board;
use crate::config::MATE_SCORE;
use crate::moves::Move;
use crate::transposition_table::TranspositionTable;

pub use ordering::order_moves;

/// The result of a root search: the chosen move and its score from the
/// perspective of the side that was to move in the searched position.
pub type SearchOutcome = (Move, i32);

/// Selects how non-root nodes order their moves before recursing. The
/// spec's default rule (captures, then checks, then castles, then the
/// rest) is `CapturesChecksCastlesFirst`; `Natural` leaves the move
/// generator's own order untouched, which is useful for comparing move
/// ordering's effect on node counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrderingStrategy {
    CapturesChecksCastlesFirst,
    Natural,
}

/// Searches every legal move at the root concurrently to `depth` plies and
/// returns the best-scoring one. `tt` is shared by every worker thread
/// behind a reader-writer lock; no task ever observes another task's board.
#[must_use]
pub fn best_move(
    board: &Board,
    tt: Arc<TranspositionTable>,
    depth: u32,
    ordering: OrderingStrategy,
) -> Option<SearchOutcome> {
    let root_moves = legal_moves(board);
    if root_moves.is_empty() {
        return None;
    }

    let handles: Vec<_> = root_moves
        .into_iter()
        .map(|mv| {
            let mut board_copy = board.clone();
            let tt = Arc::clone(&tt);
            thread::spawn(move || {
                let undo = board_copy.make_move(&mv);
                let remaining = depth.saturating_sub(1);
                let score = -alpha_beta::negamax(
                    &mut board_copy,
                    &tt,
                    remaining,
                    -MATE_SCORE * 2,
                    MATE_SCORE * 2,
                    ordering,
                );
                board_copy.undo_move(&undo);
                (mv, score)
            })
        })
        .collect();

    handles
        .into_iter()
        .filter_map(|h| h.join().ok())
        .max_by_key(|&(_, score)| score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_mate_in_one() {
        // White to move, mate in one with Qh5#? use a simpler forced mate:
        // Black king cornered, white queen delivers mate in one.
        let board = Board::from_fen("6k1/8/5KQ1/8/8/8/8/8 w - - 0 1").unwrap();
        let tt = Arc::new(TranspositionTable::with_capacity(1 << 10));
        let (_mv, score) =
            best_move(&board, tt, 1, OrderingStrategy::CapturesChecksCastlesFirst).unwrap();
        assert!(score >= MATE_SCORE - 1000);
    }

    #[test]
    fn prefers_winning_material_over_doing_nothing() {
        let board = Board::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").unwrap();
        let tt = Arc::new(TranspositionTable::with_capacity(1 << 10));
        let (mv, _score) =
            best_move(&board, tt, 2, OrderingStrategy::CapturesChecksCastlesFirst).unwrap();
        assert!(mv.is_capture());
    }
}
