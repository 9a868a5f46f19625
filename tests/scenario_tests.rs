//! End-to-end scenario tests exercising checkmate, en-passant, castling,
//! promotion, stalemate, and search determinism together.

use std::sync::Arc;

use bitwise_chess::board::movegen::{is_checkmate, is_stalemate, legal_moves};
use bitwise_chess::search::{self, OrderingStrategy};
use bitwise_chess::transposition_table::TranspositionTable;
use bitwise_chess::uci::parse_uci_move;
use bitwise_chess::Board;

fn play(board: &mut Board, moves: &[&str]) {
    for uci in moves {
        let mv = parse_uci_move(board, uci).unwrap();
        board.make_move(&mv);
    }
}

#[test]
fn fools_mate_is_checkmate_for_white() {
    let mut board = Board::new();
    play(&mut board, &["f2f3", "e7e5", "g2g4", "d8h4"]);
    assert!(is_checkmate(&board));
}

#[test]
fn en_passant_capture_removes_the_passed_pawn() {
    let mut board = Board::new();
    play(&mut board, &["e2e4", "a7a6", "e4e5", "d7d5"]);

    let target = bitwise_chess::types::Square::from_algebraic("d6").unwrap();
    assert_eq!(board.en_passant_target(), Some(target));

    let ep_move = parse_uci_move(&board, "e5d6").unwrap();
    assert_eq!(ep_move.kind, bitwise_chess::moves::MoveKind::EnPassant);

    board.make_move(&ep_move);
    let d5 = bitwise_chess::types::Square::from_algebraic("d5").unwrap();
    assert!(board.piece_at(d5).is_none());
}

#[test]
fn white_kingside_castle_moves_king_and_rook_and_clears_rights() {
    let mut board = Board::new();
    play(
        &mut board,
        &["e2e4", "e7e5", "g1f3", "b8c6", "f1b5", "g8f6"],
    );

    let castle = parse_uci_move(&board, "e1g1").unwrap();
    board.make_move(&castle);

    let g1 = bitwise_chess::types::Square::from_algebraic("g1").unwrap();
    let f1 = bitwise_chess::types::Square::from_algebraic("f1").unwrap();
    assert_eq!(board.piece_at(g1), Some(bitwise_chess::types::PieceKind::WhiteKing));
    assert_eq!(board.piece_at(f1), Some(bitwise_chess::types::PieceKind::WhiteRook));
    assert!(!board.has_castling_right(bitwise_chess::board::CASTLE_WHITE_KING_SIDE));
    assert!(!board.has_castling_right(bitwise_chess::board::CASTLE_WHITE_QUEEN_SIDE));
}

#[test]
fn promotion_make_and_undo_round_trips() {
    let mut board = Board::from_fen("8/P7/8/8/8/8/8/k6K w - - 0 1").unwrap();
    let mv = parse_uci_move(&board, "a7a8q").unwrap();

    let undo = board.make_move(&mv);
    let a8 = bitwise_chess::types::Square::from_algebraic("a8").unwrap();
    let a7 = bitwise_chess::types::Square::from_algebraic("a7").unwrap();
    assert_eq!(board.piece_at(a8), Some(bitwise_chess::types::PieceKind::WhiteQueen));
    assert!(board.piece_at(a7).is_none());

    board.undo_move(&undo);
    assert_eq!(board.piece_at(a7), Some(bitwise_chess::types::PieceKind::WhitePawn));
    assert!(board.piece_at(a8).is_none());
}

#[test]
fn stalemate_position_has_no_legal_moves_and_evaluates_to_zero() {
    let board = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
    assert!(is_stalemate(&board));
    assert!(!is_checkmate(&board));
    assert!(legal_moves(&board).is_empty());
    assert_eq!(bitwise_chess::evaluation::evaluate(&board), 0);
}

#[test]
fn search_is_deterministic_across_repeated_invocations() {
    let board = Board::new();
    let tt_a = Arc::new(TranspositionTable::new());
    let tt_b = Arc::new(TranspositionTable::new());

    let (mv_a, score_a) =
        search::best_move(&board, tt_a, 3, OrderingStrategy::CapturesChecksCastlesFirst).unwrap();
    let (mv_b, score_b) =
        search::best_move(&board, tt_b, 3, OrderingStrategy::CapturesChecksCastlesFirst).unwrap();

    assert_eq!(mv_a, mv_b);
    assert_eq!(score_a, score_b);
}
