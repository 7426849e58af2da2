use std::fmt;

use crate::zobrist::{piece_key, side_key};

use super::{Bitboard, Color, Move, Piece, Square, HEIGHT, WIDTH};

/// Plies without a capture or pawn move before the game ends by rule.
pub const RULE50_PLY_LIMIT: u32 = 120;

/// Largest accepted full move number; keeps the ply counters clear of overflow.
pub const MOVENUM_LIMIT: u32 = u32::MAX / 4;

/// Number of piece types kept in per-type bitboards (kings are tracked by square).
const TYPED_PIECES: usize = 6;

/// Xiangqi position.
///
/// The board is plain data and `Copy`; search branches copy it by value
/// instead of undoing moves in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    // Indexed by `Piece::index()` for everything but the king.
    pub(crate) pieces: [Bitboard; TYPED_PIECES],
    pub(crate) colors: [Bitboard; 2],
    pub(crate) kings: [Option<Square>; 2],
    pub(crate) to_move: Color,
    pub(crate) movenum: u32,
    pub(crate) gameply: u32,
    pub(crate) rule50_ply: u32,
    pub(crate) capture: bool,
    pub(crate) last_move: Move,
    pub(crate) repetitions: u32,
    pub(crate) cycle_length: u32,
    pub(crate) hash: u64,
}

impl Board {
    /// The standard opening position, Red to move.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Horse,
            Piece::Elephant,
            Piece::Advisor,
            Piece::King,
            Piece::Advisor,
            Piece::Elephant,
            Piece::Horse,
            Piece::Rook,
        ];
        for (file, &piece) in back_rank.iter().enumerate() {
            board.set_piece(Square(0, file), Color::Red, piece);
            board.set_piece(Square(9, file), Color::Black, piece);
        }
        for file in [1, 7] {
            board.set_piece(Square(2, file), Color::Red, Piece::Cannon);
            board.set_piece(Square(7, file), Color::Black, Piece::Cannon);
        }
        for file in (0..WIDTH).step_by(2) {
            board.set_piece(Square(3, file), Color::Red, Piece::Pawn);
            board.set_piece(Square(6, file), Color::Black, Piece::Pawn);
        }
        board.hash = board.calc_hash();
        board
    }

    /// A board with no pieces, Red to move.
    #[must_use]
    pub fn empty() -> Self {
        let mut board = Board {
            pieces: [Bitboard::EMPTY; TYPED_PIECES],
            colors: [Bitboard::EMPTY; 2],
            kings: [None; 2],
            to_move: Color::Red,
            movenum: 1,
            gameply: 0,
            rule50_ply: 0,
            capture: false,
            last_move: Move::null(),
            repetitions: 0,
            cycle_length: 0,
            hash: 0,
        };
        board.hash = board.calc_hash();
        board
    }

    /// Put a piece on an empty square. Does not touch the hash.
    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        let bit = Bitboard::from_square(sq);
        self.colors[color.index()] |= bit;
        if piece == Piece::King {
            self.kings[color.index()] = Some(sq);
        } else {
            self.pieces[piece.index()] |= bit;
        }
    }

    /// Clear a square and return what stood there. Does not touch the hash.
    pub(crate) fn remove_piece(&mut self, sq: Square) -> Option<(Color, Piece)> {
        let found = self.piece_at(sq)?;
        let bit = Bitboard::from_square(sq);
        let (color, piece) = found;
        self.colors[color.index()] &= !bit;
        if piece == Piece::King {
            self.kings[color.index()] = None;
        } else {
            self.pieces[piece.index()] &= !bit;
        }
        Some(found)
    }

    /// The piece standing on `sq`, if any.
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        let color = if self.colors[Color::Red.index()].contains(sq) {
            Color::Red
        } else if self.colors[Color::Black.index()].contains(sq) {
            Color::Black
        } else {
            return None;
        };
        if self.kings[color.index()] == Some(sq) {
            return Some((color, Piece::King));
        }
        Piece::ALL[..TYPED_PIECES]
            .iter()
            .find(|p| self.pieces[p.index()].contains(sq))
            .map(|&p| (color, p))
    }

    /// Squares holding `color`'s pieces of type `piece`.
    #[must_use]
    pub fn pieces_of(&self, color: Color, piece: Piece) -> Bitboard {
        match piece {
            Piece::King => self.kings[color.index()]
                .map_or(Bitboard::EMPTY, Bitboard::from_square),
            _ => self.pieces[piece.index()] & self.colors[color.index()],
        }
    }

    #[inline]
    #[must_use]
    pub fn colors(&self, color: Color) -> Bitboard {
        self.colors[color.index()]
    }

    #[inline]
    #[must_use]
    pub fn occupied(&self) -> Bitboard {
        self.colors[0] | self.colors[1]
    }

    #[inline]
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.kings[color.index()]
    }

    /// Both king squares, Red first.
    #[inline]
    #[must_use]
    pub fn kings(&self) -> [Option<Square>; 2] {
        self.kings
    }

    #[inline]
    #[must_use]
    pub fn to_move(&self) -> Color {
        self.to_move
    }

    #[inline]
    #[must_use]
    pub fn movenum(&self) -> u32 {
        self.movenum
    }

    #[inline]
    #[must_use]
    pub fn gameply(&self) -> u32 {
        self.gameply
    }

    #[inline]
    #[must_use]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    #[inline]
    #[must_use]
    pub fn last_move(&self) -> Move {
        self.last_move
    }

    /// Whether the last move captured a piece.
    #[inline]
    #[must_use]
    pub fn is_capture(&self) -> bool {
        self.capture
    }

    #[inline]
    #[must_use]
    pub fn repetitions(&self) -> u32 {
        self.repetitions
    }

    #[inline]
    #[must_use]
    pub fn cycle_length(&self) -> u32 {
        self.cycle_length
    }

    #[inline]
    #[must_use]
    pub fn rule50_ply(&self) -> u32 {
        self.rule50_ply
    }

    #[inline]
    #[must_use]
    pub fn rule50_ply_left(&self) -> u32 {
        RULE50_PLY_LIMIT.saturating_sub(self.rule50_ply)
    }

    /// Record how often the current position occurred before and how many
    /// plies back the latest occurrence lies.
    pub fn set_repetitions(&mut self, repetitions: u32, cycle_length: u32) {
        self.repetitions = repetitions;
        self.cycle_length = cycle_length;
    }

    pub fn set_to_move(&mut self, color: Color) {
        if color != self.to_move {
            self.swap_to_move();
        }
    }

    pub fn swap_to_move(&mut self) {
        self.to_move = self.to_move.opponent();
        self.hash ^= side_key(Color::Red);
    }

    /// Recompute the Zobrist hash from scratch.
    #[must_use]
    pub fn calc_hash(&self) -> u64 {
        let mut hash = Square::all().fold(0, |h, sq| h ^ piece_key(self.piece_at(sq), sq));
        hash ^= side_key(self.to_move);
        hash
    }

    /// Material sum for `color`, kings excluded.
    #[must_use]
    pub fn material(&self, color: Color) -> i32 {
        Piece::ALL
            .iter()
            .map(|&p| p.value() * self.pieces_of(color, p).popcount() as i32)
            .sum()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

/// Plain-text diagram, Black's back rank on top.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..HEIGHT).rev() {
            write!(f, "{rank} ")?;
            for file in 0..WIDTH {
                let c = self
                    .piece_at(Square(rank, file))
                    .map_or('.', |(color, piece)| piece.to_fen_char(color));
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "   a b c d e f g h i")?;
        write!(f, "{} to move, hash {:016x}", self.to_move, self.hash)
    }
}
