//! Static position evaluation (SPEC_FULL.md ss4.5): a single `evaluate`
//! entry point that sums flat material, structural, mobility, centre, king
//! safety, and knight-placement terms, then applies terminal scoring and
//! the negamax sign flip.

mod centre;
mod king_safety;
mod knight_placement;
mod material;
mod mobility;
mod pawn_structure;
mod phase;

use crate::board::movegen::{is_checkmate, is_stalemate};
use crate::board::Board;
use crate::config::MATE_SCORE;
use crate::types::Color;

/// Evaluates `board` from the perspective of the side to move: positive is
/// good for the side to move. Terminal positions (checkmate, stalemate)
/// short-circuit every heuristic term.
#[must_use]
pub fn evaluate(board: &Board) -> i32 {
    if is_checkmate(board) {
        return -MATE_SCORE;
    }
    if is_stalemate(board) {
        return 0;
    }

    let phase = phase::game_phase(board);

    let white_minus_black = material::material(board)
        + pawn_structure::pawn_structure(board)
        + mobility::mobility(board)
        + centre::centre_control(board)
        + king_safety::king_safety(board, phase)
        + knight_placement::knight_placement(board);

    match board.side_to_move() {
        Color::White => white_minus_black,
        Color::Black => -white_minus_black,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_position_is_balanced() {
        let board = Board::new();
        assert_eq!(evaluate(&board), 0);
    }

    #[test]
    fn fools_mate_scores_as_mate_for_the_mated_side() {
        // 1. f3 e5 2. g4 Qh4#
        let board = Board::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
            .unwrap();
        assert_eq!(evaluate(&board), -MATE_SCORE);
    }

    #[test]
    fn up_a_queen_scores_better_for_the_side_to_move() {
        let up_queen = Board::from_fen("4k3/8/8/3Q4/8/8/8/4K3 w - - 0 1").unwrap();
        let even = Board::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        assert!(evaluate(&up_queen) > evaluate(&even));
    }
}
