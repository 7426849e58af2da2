//! Bitboard type and operations.
//!
//! The board is stored with a stride of ten vertices per rank, so bit
//! `file + 10 * rank` is set for an occupied square and every tenth bit
//! (the padding column) stays clear. A `u128` holds all 100 vertices.

use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

use super::square::{Direction, Square, SquareIdx, NUM_VERTICES, SHIFT};

/// A 128-bit bitboard representing a set of board vertices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bitboard(pub u128);

/// Mask with every playable intersection set.
const fn on_board_mask() -> u128 {
    let mut mask = 0u128;
    let mut vtx = 0;
    while vtx < NUM_VERTICES {
        if vtx % SHIFT < 9 {
            mask |= 1u128 << vtx;
        }
        vtx += 1;
    }
    mask
}

impl Bitboard {
    pub const EMPTY: Bitboard = Bitboard(0);
    pub const ON_BOARD: Bitboard = Bitboard(on_board_mask());

    /// Red half of the board (ranks 0-4).
    pub const RED_SIDE: Bitboard = Bitboard(on_board_mask() & ((1u128 << 50) - 1));
    /// Black half of the board (ranks 5-9).
    pub const BLACK_SIDE: Bitboard = Bitboard(on_board_mask() & !((1u128 << 50) - 1));

    /// Create a bitboard with a single square set
    #[inline]
    #[must_use]
    pub const fn from_square(sq: Square) -> Self {
        Bitboard(1u128 << (sq.0 * SHIFT + sq.1))
    }

    /// Create a bitboard with a single vertex set
    #[inline]
    #[must_use]
    pub const fn from_index(idx: SquareIdx) -> Self {
        Bitboard(1u128 << idx.0)
    }

    /// Low 64 bits (vertices 0-63)
    #[inline]
    #[must_use]
    pub const fn lower(self) -> u64 {
        self.0 as u64
    }

    /// High 64 bits (vertices 64-99)
    #[inline]
    #[must_use]
    pub const fn upper(self) -> u64 {
        (self.0 >> 64) as u64
    }

    /// Returns an iterator over the vertex indices set in this bitboard
    #[inline]
    #[must_use]
    pub fn iter(self) -> BitboardIter {
        BitboardIter(self)
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the number of set bits (population count)
    #[inline]
    #[must_use]
    pub const fn popcount(self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, sq: Square) -> bool {
        self.0 & (1u128 << (sq.0 * SHIFT + sq.1)) != 0
    }

    #[inline]
    #[must_use]
    pub const fn contains_index(self, idx: SquareIdx) -> bool {
        self.0 & (1u128 << idx.0) != 0
    }

    /// Squares on the board that are not in this set.
    #[inline]
    #[must_use]
    pub const fn complement(self) -> Self {
        Bitboard(!self.0 & Self::ON_BOARD.0)
    }

    /// Shift every bit one step in `dir`. Bits leaving the board, including
    /// those that would land in the padding column, are dropped.
    #[inline]
    #[must_use]
    pub const fn shift(self, dir: Direction) -> Self {
        let delta = dir.delta();
        let moved = if delta >= 0 {
            self.0 << delta
        } else {
            self.0 >> (-delta)
        };
        Bitboard(moved & Self::ON_BOARD.0)
    }

    /// Bitwise AND-NOT
    #[inline]
    #[must_use]
    pub const fn without(self, other: Self) -> Self {
        Bitboard(self.0 & !other.0)
    }
}

impl BitAnd for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Bitboard(self.0 & rhs.0)
    }
}

impl BitOr for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Bitboard(self.0 | rhs.0)
    }
}

impl BitXor for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitxor(self, rhs: Self) -> Self {
        Bitboard(self.0 ^ rhs.0)
    }
}

impl Not for Bitboard {
    type Output = Bitboard;

    /// Complement restricted to playable vertices.
    #[inline]
    fn not(self) -> Self {
        self.complement()
    }
}

impl BitAndAssign for Bitboard {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl BitOrAssign for Bitboard {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitXorAssign for Bitboard {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

pub(crate) fn pop_lsb(bb: &mut Bitboard) -> SquareIdx {
    let idx = bb.0.trailing_zeros() as u8;
    bb.0 &= bb.0 - 1;
    SquareIdx(idx)
}

/// Iterator over set bits in a Bitboard
pub struct BitboardIter(Bitboard);

impl Iterator for BitboardIter {
    type Item = SquareIdx;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0.is_empty() {
            None
        } else {
            Some(pop_lsb(&mut self.0))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn on_board_has_ninety_points() {
        assert_eq!(Bitboard::ON_BOARD.popcount(), 90);
        assert_eq!(Bitboard::RED_SIDE.popcount(), 45);
        assert_eq!(Bitboard::BLACK_SIDE.popcount(), 45);
    }

    #[test]
    fn shift_does_not_wrap_across_ranks() {
        let right_edge = Bitboard::from_square(Square(3, 8));
        assert!(right_edge.shift(Direction::East).is_empty());
        assert!(right_edge.shift(Direction::NorthEast).is_empty());

        let left_edge = Bitboard::from_square(Square(3, 0));
        assert!(left_edge.shift(Direction::West).is_empty());
        assert!(left_edge.shift(Direction::SouthWest).is_empty());

        let top = Bitboard::from_square(Square(9, 4));
        assert!(top.shift(Direction::North).is_empty());
        let bottom = Bitboard::from_square(Square(0, 4));
        assert!(bottom.shift(Direction::South).is_empty());
    }

    #[test]
    fn shift_moves_interior_bits() {
        let bb = Bitboard::from_square(Square(4, 4));
        assert_eq!(bb.shift(Direction::North), Bitboard::from_square(Square(5, 4)));
        assert_eq!(bb.shift(Direction::SouthWest), Bitboard::from_square(Square(3, 3)));
        assert_eq!(bb.shift(Direction::East), Bitboard::from_square(Square(4, 5)));
    }

    #[test]
    fn complement_stays_on_board() {
        let full = Bitboard::EMPTY.complement();
        assert_eq!(full, Bitboard::ON_BOARD);
        assert!(Bitboard::ON_BOARD.complement().is_empty());
    }

    #[test]
    fn iter_yields_ascending_vertices() {
        let bb = Bitboard::from_square(Square(0, 1)) | Bitboard::from_square(Square(7, 3));
        let got: Vec<u8> = bb.iter().map(|i| i.0).collect();
        assert_eq!(got, vec![1, 73]);
        assert_eq!(bb.lower().count_ones(), 1);
        assert_eq!(bb.upper().count_ones(), 1);
    }
}
