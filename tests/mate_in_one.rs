//! Data-driven mate-in-one suite, loaded from a JSON problem set the way
//! the engine's puzzle regression tests load theirs.

use std::sync::Arc;

use bitwise_chess::board::movegen::is_checkmate;
use bitwise_chess::search::{self, OrderingStrategy};
use bitwise_chess::transposition_table::TranspositionTable;
use bitwise_chess::uci::parse_uci_move;
use bitwise_chess::Board;
use serde::Deserialize;

#[derive(Deserialize)]
struct ProblemSet {
    problems: Vec<Problem>,
}

#[derive(Deserialize)]
struct Problem {
    name: String,
    fen: String,
    best_move: String,
}

#[test]
fn mate_in_one_suite() {
    let data = include_str!("data/mate_in_one.json");
    let set: ProblemSet = serde_json::from_str(data).expect("invalid mate_in_one.json");

    for problem in &set.problems {
        let mut board = Board::from_fen(&problem.fen)
            .unwrap_or_else(|e| panic!("{}: bad fen {}: {e:?}", problem.name, problem.fen));

        let expected = parse_uci_move(&board, &problem.best_move)
            .unwrap_or_else(|e| panic!("{}: bad move {}: {e:?}", problem.name, problem.best_move));

        let tt = Arc::new(TranspositionTable::new());
        let (found, _score) = search::best_move(&board, tt, 3, OrderingStrategy::CapturesChecksCastlesFirst)
            .unwrap_or_else(|| panic!("{}: search found no move", problem.name));
        assert_eq!(found, expected, "{}: expected {}", problem.name, problem.best_move);

        board.make_move(&found);
        assert!(is_checkmate(&board), "{}: {} is not mate", problem.name, problem.best_move);
    }
}
