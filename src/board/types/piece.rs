//! Piece and color types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Xiangqi piece types.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Piece {
    Pawn,
    Horse,
    Cannon,
    Rook,
    Elephant,
    Advisor,
    King,
}

impl Piece {
    /// All piece types in index order
    pub const ALL: [Piece; 7] = [
        Piece::Pawn,
        Piece::Horse,
        Piece::Cannon,
        Piece::Rook,
        Piece::Elephant,
        Piece::Advisor,
        Piece::King,
    ];

    /// Number of piece-kind slots in the Zobrist table (14 pieces + empty).
    pub(crate) const ZOBRIST_KINDS: usize = 15;
    /// Zobrist slot used for an empty intersection.
    pub(crate) const EMPTY_KIND: usize = 14;

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Piece::Pawn => 0,
            Piece::Horse => 1,
            Piece::Cannon => 2,
            Piece::Rook => 3,
            Piece::Elephant => 4,
            Piece::Advisor => 5,
            Piece::King => 6,
        }
    }

    /// Combined (color, piece) slot used for Zobrist keys.
    #[inline]
    #[must_use]
    pub(crate) const fn kind(self, color: Color) -> usize {
        color.index() * 7 + self.index()
    }

    /// Parse a piece from a FEN/WXF letter (case-insensitive).
    ///
    /// Accepts both `N`/`H` for the horse and `B`/`E` for the elephant.
    #[must_use]
    pub fn from_char(c: char) -> Option<Piece> {
        match c.to_ascii_lowercase() {
            'p' => Some(Piece::Pawn),
            'n' | 'h' => Some(Piece::Horse),
            'c' => Some(Piece::Cannon),
            'r' => Some(Piece::Rook),
            'b' | 'e' => Some(Piece::Elephant),
            'a' => Some(Piece::Advisor),
            'k' => Some(Piece::King),
            _ => None,
        }
    }

    /// FEN letter (lowercase)
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Piece::Pawn => 'p',
            Piece::Horse => 'n',
            Piece::Cannon => 'c',
            Piece::Rook => 'r',
            Piece::Elephant => 'b',
            Piece::Advisor => 'a',
            Piece::King => 'k',
        }
    }

    /// WXF letter (uppercase)
    #[inline]
    #[must_use]
    pub const fn to_wxf_char(self) -> char {
        match self {
            Piece::Pawn => 'P',
            Piece::Horse => 'H',
            Piece::Cannon => 'C',
            Piece::Rook => 'R',
            Piece::Elephant => 'E',
            Piece::Advisor => 'A',
            Piece::King => 'K',
        }
    }

    /// FEN letter with case based on color (uppercase for Red)
    #[inline]
    #[must_use]
    pub fn to_fen_char(self, color: Color) -> char {
        let c = self.to_char();
        if color == Color::Red {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }

    /// Rough material value, used by the reference evaluator.
    #[inline]
    #[must_use]
    pub const fn value(self) -> i32 {
        match self {
            Piece::Pawn => 100,
            Piece::Horse => 400,
            Piece::Cannon => 450,
            Piece::Rook => 900,
            Piece::Elephant => 200,
            Piece::Advisor => 200,
            Piece::King => 0,
        }
    }

    /// Moves along ranks and files (WXF counts steps for these).
    #[inline]
    #[must_use]
    pub const fn moves_straight(self) -> bool {
        matches!(self, Piece::Pawn | Piece::Cannon | Piece::Rook | Piece::King)
    }
}

/// Side colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    Red,
    Black,
}

impl Color {
    /// Both colors in index order (Red=0, Black=1)
    pub const BOTH: [Color; 2] = [Color::Red, Color::Black];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Color::Red => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }

    /// Forward rank step (+1 for Red, -1 for Black)
    #[inline]
    #[must_use]
    pub(crate) const fn forward(self) -> isize {
        match self {
            Color::Red => 1,
            Color::Black => -1,
        }
    }

    /// True if `rank` lies on this color's own side of the river.
    #[inline]
    #[must_use]
    pub(crate) const fn owns_rank(self, rank: usize) -> bool {
        match self {
            Color::Red => rank <= 4,
            Color::Black => rank >= 5,
        }
    }

    /// Palace rank range for this color.
    #[inline]
    #[must_use]
    pub(crate) const fn palace_ranks(self) -> (usize, usize) {
        match self {
            Color::Red => (0, 2),
            Color::Black => (7, 9),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => write!(f, "Red"),
            Color::Black => write!(f, "Black"),
        }
    }
}
