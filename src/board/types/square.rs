//! Square types and board geometry.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// Playable files (a-i).
pub const WIDTH: usize = 9;
/// Playable ranks (0-9).
pub const HEIGHT: usize = 10;
/// Vertex stride per rank; column 9 is padding.
pub const SHIFT: usize = 10;
/// Number of vertices including padding.
pub const NUM_VERTICES: usize = SHIFT * HEIGHT;
/// Number of playable intersections.
pub const INTERSECTIONS: usize = WIDTH * HEIGHT;

pub(crate) fn file_to_index(file: char) -> usize {
    file as usize - ('a' as usize)
}

pub(crate) fn rank_to_index(rank: char) -> usize {
    rank as usize - ('0' as usize)
}

/// Index into the padded 100-vertex board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SquareIdx(pub u8);

impl SquareIdx {
    #[inline]
    #[must_use]
    pub(crate) const fn as_usize(self) -> usize {
        self.0 as usize
    }

    /// Returns true for vertices inside the 9x10 board.
    #[inline]
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        (self.0 as usize) < NUM_VERTICES && (self.0 as usize) % SHIFT < WIDTH
    }
}

/// An intersection on the board, represented as (rank, file).
///
/// Rank 0 is Red's back rank, file 0 is file `a` (Red's left).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize);

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(rank: usize, file: usize) -> Option<Self> {
        if rank < HEIGHT && file < WIDTH {
            Some(Square(rank, file))
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        self.1
    }

    #[inline]
    #[must_use]
    pub const fn as_index(self) -> usize {
        self.0 * SHIFT + self.1
    }

    #[inline]
    #[must_use]
    pub const fn from_index(idx: SquareIdx) -> Self {
        let idx = idx.0 as usize;
        Square(idx / SHIFT, idx % SHIFT)
    }

    #[inline]
    #[must_use]
    pub const fn index(self) -> SquareIdx {
        SquareIdx((self.0 * SHIFT + self.1) as u8)
    }

    /// Step by a signed (rank, file) offset, staying on the board.
    #[must_use]
    pub fn offset(self, d_rank: isize, d_file: isize) -> Option<Self> {
        let rank = self.0 as isize + d_rank;
        let file = self.1 as isize + d_file;
        if (0..HEIGHT as isize).contains(&rank) && (0..WIDTH as isize).contains(&file) {
            Some(Square(rank as usize, file as usize))
        } else {
            None
        }
    }

    /// Iterate every playable square, rank-major from Red's back rank.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..HEIGHT).flat_map(|rank| (0..WIDTH).map(move |file| Square(rank, file)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.1 as u8 + b'a') as char, self.0)
    }
}

impl PartialOrd for Square {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Square {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.index().0.cmp(&other.index().0)
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((rank, file): (usize, usize)) -> Result<Self, Self::Error> {
        if rank >= HEIGHT {
            return Err(SquareError::RankOutOfBounds { rank });
        }
        if file >= WIDTH {
            return Err(SquareError::FileOutOfBounds { file });
        }
        Ok(Square(rank, file))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 2 {
            return Err(SquareError::InvalidNotation {
                notation: s.to_string(),
            });
        }

        let file = match chars[0].to_ascii_lowercase() {
            c @ 'a'..='i' => file_to_index(c),
            _ => {
                return Err(SquareError::InvalidNotation {
                    notation: s.to_string(),
                })
            }
        };

        let rank = match chars[1] {
            c @ '0'..='9' => rank_to_index(c),
            _ => {
                return Err(SquareError::InvalidNotation {
                    notation: s.to_string(),
                })
            }
        };

        Ok(Square(rank, file))
    }
}

/// The eight ray directions on the padded board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
    NorthEast,
    SouthEast,
    SouthWest,
    NorthWest,
}

impl Direction {
    pub const ORTHOGONAL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub const DIAGONAL: [Direction; 4] = [
        Direction::NorthEast,
        Direction::SouthEast,
        Direction::SouthWest,
        Direction::NorthWest,
    ];

    /// Vertex delta on the padded board.
    #[inline]
    #[must_use]
    pub const fn delta(self) -> i32 {
        match self {
            Direction::North => SHIFT as i32,
            Direction::East => 1,
            Direction::South => -(SHIFT as i32),
            Direction::West => -1,
            Direction::NorthEast => SHIFT as i32 + 1,
            Direction::SouthEast => -(SHIFT as i32) + 1,
            Direction::SouthWest => -(SHIFT as i32) - 1,
            Direction::NorthWest => SHIFT as i32 - 1,
        }
    }

    /// (rank, file) step.
    #[inline]
    #[must_use]
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Direction::North => (1, 0),
            Direction::East => (0, 1),
            Direction::South => (-1, 0),
            Direction::West => (0, -1),
            Direction::NorthEast => (1, 1),
            Direction::SouthEast => (-1, 1),
            Direction::SouthWest => (-1, -1),
            Direction::NorthWest => (1, -1),
        }
    }
}
