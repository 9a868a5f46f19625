//! Fail-soft alpha-beta negamax with transposition-table probing and
//! storing (SPEC_FULL.md ss4.6).

use crate::board::movegen::legal_moves;
use crate::board::Board;
use crate::evaluation::evaluate;
use crate::transposition_table::{Bound, TranspositionTable};

use super::ordering::order_moves;
use super::OrderingStrategy;

/// Searches `board` to `depth` plies, returning the score from the
/// perspective of the side to move. `tt` is shared and probed/stored at
/// every node.
pub(crate) fn negamax(
    board: &mut Board,
    tt: &TranspositionTable,
    depth: u32,
    mut alpha: i32,
    mut beta: i32,
    ordering: OrderingStrategy,
) -> i32 {
    let original_alpha = alpha;
    let hash = board.hash();

    if let Some(entry) = tt.probe(hash) {
        if entry.depth >= depth {
            match entry.bound {
                Bound::Exact => return entry.score,
                Bound::Lower => alpha = alpha.max(entry.score),
                Bound::Upper => beta = beta.min(entry.score),
            }
            if alpha >= beta {
                return entry.score;
            }
        }
    }

    if depth == 0 {
        return evaluate(board);
    }

    let mut moves = legal_moves(board);
    if moves.is_empty() {
        return evaluate(board);
    }
    if ordering == OrderingStrategy::CapturesChecksCastlesFirst {
        order_moves(board, &mut moves);
    }

    let mut best_score = i32::MIN;
    let mut best_move = None;

    for mv in &moves {
        let undo = board.make_move(mv);
        let score = -negamax(board, tt, depth - 1, -beta, -alpha, ordering);
        board.undo_move(&undo);

        if score > best_score {
            best_score = score;
            best_move = Some(*mv);
        }
        alpha = alpha.max(best_score);
        if alpha >= beta {
            break;
        }
    }

    let bound = if best_score <= original_alpha {
        Bound::Upper
    } else if best_score >= beta {
        Bound::Lower
    } else {
        Bound::Exact
    };
    tt.store(hash, depth, best_score, bound, best_move);

    best_score
}
