//! Move application tests.

use crate::board::{Board, BoardBuilder, Color, Move, Piece, Square, RULE50_PLY_LIMIT};

#[test]
fn test_quiet_move_updates_state() {
    let mut board = Board::new();
    let mv = board.parse_iccs("h2e2").unwrap();
    board.do_move_assume_legal(mv);

    assert_eq!(board.piece_at(Square(2, 7)), None);
    assert_eq!(board.piece_at(Square(2, 4)), Some((Color::Red, Piece::Cannon)));
    assert_eq!(board.to_move(), Color::Black);
    assert_eq!(board.last_move(), mv);
    assert!(!board.is_capture());
    assert_eq!(board.rule50_ply(), 1);
    assert_eq!(board.gameply(), 1);
    assert_eq!(board.movenum(), 1);
    assert_eq!(board.hash(), board.calc_hash());
}

#[test]
fn test_capture_resets_rule50() {
    let mut board = Board::new();
    for text in ["h2e2", "h9g7", "e2e6"] {
        board.do_textmove(text).unwrap();
    }
    assert!(board.is_capture());
    assert_eq!(board.rule50_ply(), 0);
    assert_eq!(board.piece_at(Square(6, 4)), Some((Color::Red, Piece::Cannon)));
    assert_eq!(board.pieces_of(Color::Black, Piece::Pawn).popcount(), 4);
    assert_eq!(board.movenum(), 2);
    assert_eq!(board.gameply(), 3);
    assert_eq!(board.hash(), board.calc_hash());
}

#[test]
fn test_pawn_move_resets_rule50() {
    let mut board = BoardBuilder::starting_position().rule50_ply(40).build();
    board.do_textmove("c3c4").unwrap();
    assert_eq!(board.rule50_ply(), 0);
    board.do_textmove("h9g7").unwrap();
    assert_eq!(board.rule50_ply(), 1);
    assert_eq!(board.rule50_ply_left(), RULE50_PLY_LIMIT - 1);
}

#[test]
fn test_king_move_updates_cache() {
    let mut board = Board::new();
    board.do_textmove("e0e1").unwrap();
    assert_eq!(board.king_square(Color::Red), Some(Square(1, 4)));
    assert_eq!(board.piece_at(Square(1, 4)), Some((Color::Red, Piece::King)));
    assert_eq!(board.piece_at(Square(0, 4)), None);
}

#[test]
fn test_king_capture_removes_king() {
    let mut board = BoardBuilder::new()
        .piece(Square(0, 3), Color::Red, Piece::King)
        .piece(Square(9, 4), Color::Black, Piece::King)
        .piece(Square(5, 4), Color::Red, Piece::Rook)
        .build();
    board.do_move_assume_legal(Move::capture(Square(5, 4), Square(9, 4)));
    assert_eq!(board.king_square(Color::Black), None);
    assert!(!board.is_check(Color::Black));
    assert_eq!(board.hash(), board.calc_hash());
}

#[test]
fn test_swap_to_move_keeps_hash_consistent() {
    let mut board = Board::new();
    board.swap_to_move();
    assert_eq!(board.to_move(), Color::Black);
    assert_eq!(board.hash(), board.calc_hash());
    board.set_to_move(Color::Red);
    assert_eq!(board.hash(), Board::new().hash());
}

#[test]
fn test_transposition_same_hash() {
    let mut a = Board::new();
    let mut b = Board::new();
    for text in ["h2e2", "h9g7", "b0c2"] {
        a.do_textmove(text).unwrap();
    }
    for text in ["b0c2", "h9g7", "h2e2"] {
        b.do_textmove(text).unwrap();
    }
    assert_eq!(a.hash(), b.hash());
    assert_eq!(a.to_fen(), b.to_fen());
}
