//! Perft (performance test) for move generation correctness.

use crate::board::{Board, Color, START_FEN};
use std::time::Instant;

struct TestPosition {
    name: &'static str,
    fen: &'static str,
    depths: &'static [(usize, u64)],
}

const TEST_POSITIONS: &[TestPosition] = &[
    TestPosition {
        name: "Initial Position",
        fen: START_FEN,
        depths: &[(1, 44), (2, 1920), (3, 79666)],
    },
    TestPosition {
        name: "Bare Kings",
        fen: "3k5/9/9/9/9/9/9/9/9/4K4 w - - 0 1",
        depths: &[(1, 2), (2, 3)],
    },
];

#[test]
fn test_all_perft_positions() {
    for position in TEST_POSITIONS {
        let board = Board::from_fen(position.fen);

        for &(depth, expected) in position.depths {
            let start = Instant::now();
            let nodes = board.perft(depth);
            let duration = start.elapsed();

            println!("  Depth {}: {} nodes in {:?}", depth, nodes, duration);

            assert_eq!(
                nodes, expected,
                "Perft failed for position '{}' at depth {}. Expected: {}, Got: {}",
                position.name, depth, expected, nodes
            );
        }
    }
}

#[test]
fn test_start_pseudo_legal_breakdown() {
    let board = Board::new();
    let moves = board.generate_movelist(Color::Red);
    assert_eq!(moves.len(), 44);

    // pawns, horses, cannons, rooks, elephants, advisors, king
    let expected = [5, 4, 24, 4, 4, 2, 1];
    let mut counts = Vec::new();
    let mut last_piece = None;
    for mv in &moves {
        let piece = board.piece_at(mv.from()).map(|(_, p)| p);
        if piece != last_piece {
            counts.push(0);
            last_piece = piece;
        }
        if let Some(count) = counts.last_mut() {
            *count += 1;
        }
    }
    assert_eq!(counts, expected);
}

#[test]
fn test_black_mirrors_red_at_start() {
    let mut board = Board::new();
    board.swap_to_move();
    assert_eq!(board.generate_movelist(Color::Black).len(), 44);
    assert_eq!(board.perft(1), 44);
}
