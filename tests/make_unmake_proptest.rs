//! Property-based tests for the make/undo round-trip invariant.

use bitwise_chess::board::movegen::legal_moves;
use bitwise_chess::Board;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn play_random_moves(
    board: &mut Board,
    rng: &mut StdRng,
    count: usize,
) -> Vec<bitwise_chess::moves::UndoRecord> {
    let mut undos = Vec::with_capacity(count);
    for _ in 0..count {
        let moves = legal_moves(board);
        if moves.is_empty() {
            break;
        }
        let mv = moves[rng.gen_range(0..moves.len())];
        undos.push((mv, board.make_move(&mv)));
    }
    undos.into_iter().map(|(_, undo)| undo).collect()
}

proptest! {
    #[test]
    fn make_then_undo_restores_hash_and_fen(seed in any::<u64>(), num_moves in 1..20usize) {
        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);

        let initial_hash = board.hash();
        let initial_fen = board.to_fen();

        let undos = play_random_moves(&mut board, &mut rng, num_moves);
        for undo in undos.into_iter().rev() {
            board.undo_move(&undo);
        }

        prop_assert_eq!(board.hash(), initial_hash);
        prop_assert_eq!(board.to_fen(), initial_fen);
    }

    #[test]
    fn legal_moves_never_leave_the_mover_in_check(seed in any::<u64>()) {
        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..10 {
            let moves = legal_moves(&board);
            if moves.is_empty() {
                break;
            }
            let mover = board.side_to_move();
            for mv in &moves {
                let undo = board.make_move(mv);
                prop_assert!(!board.is_in_check(mover));
                board.undo_move(&undo);
            }
            let mv = moves[rng.gen_range(0..moves.len())];
            board.make_move(&mv);
        }
    }
}
