//! Property-based tests using proptest.

use crate::board::{Bitboard, Board, Color};
use proptest::prelude::*;

/// Strategy to generate a random legal move sequence length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=40usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Play up to `num_moves` random legal moves, calling `check` after each.
fn random_playout(
    seed: u64,
    num_moves: usize,
    mut check: impl FnMut(&Board) -> Result<(), TestCaseError>,
) -> Result<Board, TestCaseError> {
    use rand::prelude::*;

    let mut board = Board::new();
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..num_moves {
        let moves = board.legal_moves();
        if moves.is_empty() {
            break;
        }
        let mv = moves.as_slice()[rng.gen_range(0..moves.len())];
        board.do_move_assume_legal(mv);
        check(&board)?;
    }
    Ok(board)
}

proptest! {
    /// Property: the incremental hash always equals a fresh recomputation
    #[test]
    fn prop_hash_consistency(seed in seed_strategy(), num_moves in move_count_strategy()) {
        random_playout(seed, num_moves, |board| {
            prop_assert_eq!(board.hash(), board.calc_hash());
            Ok(())
        })?;
    }

    /// Property: per-type sets, per-color sets and king squares describe the same occupancy
    #[test]
    fn prop_bitsets_consistent(seed in seed_strategy(), num_moves in move_count_strategy()) {
        random_playout(seed, num_moves, |board| {
            let mut typed = Bitboard::EMPTY;
            let mut typed_count = 0;
            for bb in board.pieces {
                prop_assert!((typed & bb).is_empty());
                typed |= bb;
                typed_count += bb.popcount();
            }
            for king in board.kings.into_iter().flatten() {
                typed |= Bitboard::from_square(king);
                typed_count += 1;
            }

            let red = board.colors(Color::Red);
            let black = board.colors(Color::Black);
            prop_assert!((red & black).is_empty());
            prop_assert_eq!(typed, board.occupied());
            prop_assert_eq!(typed_count, red.popcount() + black.popcount());
            prop_assert_eq!(board.occupied().without(Bitboard::ON_BOARD), Bitboard::EMPTY);
            Ok(())
        })?;
    }

    /// Property: FEN round-trip preserves position
    #[test]
    fn prop_fen_roundtrip(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let board = random_playout(seed, num_moves, |_| Ok(()))?;

        let fen = board.to_fen();
        let restored = Board::from_fen(&fen);

        prop_assert_eq!(board.hash(), restored.hash());
        prop_assert_eq!(board.to_move(), restored.to_move());
        prop_assert_eq!(board.occupied(), restored.occupied());
        prop_assert_eq!(board.rule50_ply(), restored.rule50_ply());
        prop_assert_eq!(board.gameply(), restored.gameply());
        prop_assert_eq!(restored.to_fen(), fen);
    }

    /// Property: legal moves never leave the mover in check or the kings facing
    #[test]
    fn prop_legal_moves_are_safe(seed in seed_strategy(), num_moves in move_count_strategy()) {
        random_playout(seed, num_moves, |board| {
            prop_assert!(!board.is_king_face_king());
            prop_assert!(!board.is_check(board.to_move().opponent()));
            for &mv in &board.legal_moves() {
                prop_assert!(board.is_legal(mv));
            }
            Ok(())
        })?;
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Property: ICCS and WXF text both parse back to the move they came from
    #[test]
    fn prop_notation_roundtrip(seed in seed_strategy(), num_moves in move_count_strategy()) {
        random_playout(seed, num_moves, |board| {
            for &mv in &board.legal_moves() {
                prop_assert_eq!(board.parse_iccs(&mv.to_string()).ok(), Some(mv));
                let wxf = board.move_to_wxf(mv);
                // Tandem pawns on two files share the same marker text.
                let tandem_pawn = wxf.starts_with('P')
                    && matches!(wxf.chars().nth(1), Some('+' | '-' | '.'));
                if !tandem_pawn {
                    prop_assert_eq!(board.parse_wxf(&wxf).ok(), Some(mv), "{}", wxf);
                }
            }
            Ok(())
        })?;
    }
}
