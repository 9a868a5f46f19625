//! Perft (move-generation correctness) tests against canonical leaf counts.

use bitwise_chess::board::movegen::perft;
use bitwise_chess::Board;

struct Position {
    name: &'static str,
    fen: &'static str,
    depths: &'static [(u32, u64)],
}

const POSITIONS: &[Position] = &[
    Position {
        name: "startpos",
        fen: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        depths: &[(1, 20), (2, 400), (3, 8902), (4, 197281)],
    },
    Position {
        name: "kiwipete",
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        depths: &[(1, 48), (2, 2039), (3, 97862)],
    },
    Position {
        name: "en passant",
        fen: "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
        depths: &[(1, 31), (2, 707), (3, 21637)],
    },
    Position {
        name: "castling",
        fen: "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1",
        depths: &[(1, 26), (2, 568), (3, 13744)],
    },
];

#[test]
fn perft_matches_canonical_counts() {
    for position in POSITIONS {
        let mut board = Board::from_fen(position.fen).unwrap();
        for &(depth, expected) in position.depths {
            let nodes = perft(&mut board, depth);
            assert_eq!(
                nodes, expected,
                "{} depth {depth}: expected {expected}, got {nodes}",
                position.name
            );
        }
    }
}

#[test]
#[ignore = "depth 5 from the start position takes several seconds"]
fn perft_depth_five_from_startpos() {
    let mut board = Board::new();
    assert_eq!(perft(&mut board, 5), 4_865_609);
}
