//! Precomputed step tables for pieces whose moves never depend on
//! occupancy (king, advisor, pawn).

use once_cell::sync::Lazy;

use crate::board::types::{Bitboard, Color, Direction, Square, NUM_VERTICES};

/// Palace intersections for a side.
pub(crate) fn palace(color: Color) -> Bitboard {
    let (low, high) = color.palace_ranks();
    let mut mask = Bitboard::EMPTY;
    for rank in low..=high {
        for file in 3..=5 {
            mask |= Bitboard::from_square(Square(rank, file));
        }
    }
    mask
}

fn palace_of(sq: Square) -> Bitboard {
    Color::BOTH
        .iter()
        .map(|&c| palace(c))
        .find(|p| p.contains(sq))
        .unwrap_or(Bitboard::EMPTY)
}

fn spread(from: Bitboard, dirs: &[Direction]) -> Bitboard {
    dirs.iter()
        .fold(Bitboard::EMPTY, |acc, &dir| acc | from.shift(dir))
}

pub(crate) static KING_ATTACKS: Lazy<[Bitboard; NUM_VERTICES]> = Lazy::new(|| {
    let mut attacks = [Bitboard::EMPTY; NUM_VERTICES];
    for sq in Square::all() {
        let home = palace_of(sq);
        attacks[sq.as_index()] = spread(Bitboard::from_square(sq), &Direction::ORTHOGONAL) & home;
    }
    attacks
});

pub(crate) static ADVISOR_ATTACKS: Lazy<[Bitboard; NUM_VERTICES]> = Lazy::new(|| {
    let mut attacks = [Bitboard::EMPTY; NUM_VERTICES];
    for sq in Square::all() {
        let home = palace_of(sq);
        attacks[sq.as_index()] = spread(Bitboard::from_square(sq), &Direction::DIAGONAL) & home;
    }
    attacks
});

pub(crate) static PAWN_ATTACKS: Lazy<[[Bitboard; NUM_VERTICES]; 2]> = Lazy::new(|| {
    let mut attacks = [[Bitboard::EMPTY; NUM_VERTICES]; 2];
    for color in Color::BOTH {
        let forward = match color {
            Color::Red => Direction::North,
            Color::Black => Direction::South,
        };
        for sq in Square::all() {
            let bb = Bitboard::from_square(sq);
            let mut targets = bb.shift(forward);
            if !color.owns_rank(sq.rank()) {
                targets |= bb.shift(Direction::East) | bb.shift(Direction::West);
            }
            attacks[color.index()][sq.as_index()] = targets;
        }
    }
    attacks
});
