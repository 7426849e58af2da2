//! Zobrist hashing for positions.
//!
//! One key per (piece kind or empty, vertex) plus a red-to-move key. Keys
//! come from a fixed seed and the whole set is regenerated until no two
//! keys coincide.

use log::{debug, warn};
use rand::prelude::*;

use crate::board::{Color, Piece, Square, NUM_VERTICES};

const ZOBRIST_SEED: u64 = 1_234_567_890;

pub(crate) struct ZobristKeys {
    // piece_keys[kind][vertex], kind = color * 7 + piece, 14 = empty
    pub(crate) piece_keys: [[u64; NUM_VERTICES]; Piece::ZOBRIST_KINDS],
    pub(crate) red_to_move_key: u64,
}

impl ZobristKeys {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(ZOBRIST_SEED);
        let mut attempt = 0;
        loop {
            attempt += 1;
            let keys = Self::generate(&mut rng);
            if !keys.has_collision() {
                debug!("zobrist keys generated after {attempt} attempt(s)");
                return keys;
            }
            warn!("zobrist key collision, regenerating");
        }
    }

    fn generate(rng: &mut StdRng) -> Self {
        let mut piece_keys = [[0u64; NUM_VERTICES]; Piece::ZOBRIST_KINDS];
        for kind in &mut piece_keys {
            for key in kind.iter_mut() {
                *key = rng.gen();
            }
        }
        ZobristKeys {
            piece_keys,
            red_to_move_key: rng.gen(),
        }
    }

    fn all_keys(&self) -> Vec<u64> {
        let mut keys: Vec<u64> = self.piece_keys.iter().flatten().copied().collect();
        keys.push(self.red_to_move_key);
        keys
    }

    fn has_collision(&self) -> bool {
        let mut keys = self.all_keys();
        let total = keys.len();
        keys.sort_unstable();
        keys.dedup();
        keys.len() != total
    }
}

// Initialize Zobrist keys lazily and globally
pub(crate) static ZOBRIST: once_cell::sync::Lazy<ZobristKeys> =
    once_cell::sync::Lazy::new(ZobristKeys::new);

#[inline]
pub(crate) fn piece_key(piece: Option<(Color, Piece)>, sq: Square) -> u64 {
    let kind = piece.map_or(Piece::EMPTY_KIND, |(color, piece)| piece.kind(color));
    ZOBRIST.piece_keys[kind][sq.as_index()]
}

#[inline]
pub(crate) fn side_key(color: Color) -> u64 {
    match color {
        Color::Red => ZOBRIST.red_to_move_key,
        Color::Black => 0,
    }
}
