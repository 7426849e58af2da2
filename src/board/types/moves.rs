//! Move types and move list.

use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::{Square, SquareIdx};

const FROM_MASK: u16 = 0x7F;
const TO_SHIFT: u16 = 7;
const FLAG_CAPTURE: u16 = 1 << 14;

/// Compact 16-bit move representation.
///
/// Encoding:
/// - bits 0-6:   from vertex (0-99)
/// - bits 7-13:  to vertex (0-99)
/// - bit 14:     capture flag
///
/// Moves carry no undo information. The all-zero value is the null move and
/// is never produced by move generation (origin and destination differ).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move(u16);

impl Move {
    #[inline]
    #[must_use]
    pub const fn null() -> Self {
        Move(0)
    }

    /// Create a non-capturing move
    #[inline]
    #[must_use]
    pub const fn quiet(from: Square, to: Square) -> Self {
        Move::with_flag(from, to, 0)
    }

    /// Create a capture move
    #[inline]
    #[must_use]
    pub const fn capture(from: Square, to: Square) -> Self {
        Move::with_flag(from, to, FLAG_CAPTURE)
    }

    #[inline]
    const fn with_flag(from: Square, to: Square, flag: u16) -> Self {
        let from_idx = from.as_index() as u16;
        let to_idx = to.as_index() as u16;
        Move(from_idx | (to_idx << TO_SHIFT) | flag)
    }

    #[inline]
    #[must_use]
    pub(crate) const fn from_index(self) -> SquareIdx {
        SquareIdx((self.0 & FROM_MASK) as u8)
    }

    #[inline]
    #[must_use]
    pub(crate) const fn to_index(self) -> SquareIdx {
        SquareIdx(((self.0 >> TO_SHIFT) & FROM_MASK) as u8)
    }

    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        Square::from_index(self.from_index())
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        Square::from_index(self.to_index())
    }

    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        self.0 & FLAG_CAPTURE != 0
    }

    #[inline]
    #[must_use]
    pub const fn is_null(self) -> bool {
        self.0 == 0
    }

    /// Same origin and destination, ignoring the capture flag.
    #[inline]
    #[must_use]
    pub const fn same_squares(self, other: Move) -> bool {
        (self.0 & !FLAG_CAPTURE) == (other.0 & !FLAG_CAPTURE)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            return write!(f, "Move(null)");
        }
        write!(f, "Move({}{}", self.from(), self.to())?;
        if self.is_capture() {
            write!(f, " cap")?;
        }
        write!(f, ")")
    }
}

/// ICCS coordinate form, e.g. `h2e2`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            return write!(f, "0000");
        }
        write!(f, "{}{}", self.from(), self.to())
    }
}

pub(crate) const MAX_MOVES: usize = 256;
pub(crate) const EMPTY_MOVE: Move = Move::null();

/// List of moves with fixed-size backing array.
#[derive(Clone, Debug)]
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    len: usize,
}

impl MoveList {
    pub(crate) fn new() -> Self {
        MoveList {
            moves: [EMPTY_MOVE; MAX_MOVES],
            len: 0,
        }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        self.moves[self.len] = mv;
        self.len += 1;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Move> {
        if idx < self.len {
            Some(self.moves[idx])
        } else {
            None
        }
    }

    /// Find the generated move with these squares, if any.
    #[must_use]
    pub fn find(&self, from: Square, to: Square) -> Option<Move> {
        self.iter().copied().find(|m| m.from() == from && m.to() == to)
    }

    #[must_use]
    pub fn contains(&self, mv: Move) -> bool {
        self.iter().any(|m| m.same_squares(mv))
    }

    pub(crate) fn retain(&mut self, mut keep: impl FnMut(Move) -> bool) {
        let mut write = 0;
        for read in 0..self.len {
            let mv = self.moves[read];
            if keep(mv) {
                self.moves[write] = mv;
                write += 1;
            }
        }
        self.len = write;
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        MoveList::new()
    }
}

/// Owning iterator over moves in a `MoveList`
pub struct MoveListIntoIter {
    list: MoveList,
    idx: usize,
}

impl Iterator for MoveListIntoIter {
    type Item = Move;

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx < self.list.len {
            let mv = self.list.moves[self.idx];
            self.idx += 1;
            Some(mv)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len - self.idx;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MoveListIntoIter {}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = MoveListIntoIter;

    fn into_iter(self) -> Self::IntoIter {
        MoveListIntoIter { list: self, idx: 0 }
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        assert!(
            idx < self.len,
            "MoveList index {} out of bounds (len {})",
            idx,
            self.len
        );
        &self.moves[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_squares_and_capture() {
        let mv = Move::capture(Square(2, 7), Square(9, 7));
        assert_eq!(mv.from(), Square(2, 7));
        assert_eq!(mv.to(), Square(9, 7));
        assert!(mv.is_capture());
        assert!(!mv.is_null());
        assert_eq!(mv.to_string(), "h2h9");

        let quiet = Move::quiet(Square(2, 7), Square(9, 7));
        assert!(!quiet.is_capture());
        assert!(quiet.same_squares(mv));
        assert_ne!(quiet, mv);
    }

    #[test]
    fn null_move_displays_as_zeros() {
        assert!(Move::null().is_null());
        assert_eq!(Move::null().to_string(), "0000");
        assert_eq!(Move::default(), Move::null());
    }

    #[test]
    fn retain_keeps_order() {
        let mut list = MoveList::new();
        for file in 0..5 {
            list.push(Move::quiet(Square(0, file), Square(1, file)));
        }
        list.retain(|m| m.from().file() % 2 == 0);
        let files: Vec<usize> = list.iter().map(|m| m.from().file()).collect();
        assert_eq!(files, vec![0, 2, 4]);
    }
}
