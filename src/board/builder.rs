//! Fluent builder for constructing xiangqi positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//! The builder does not validate: positions without kings or with kings
//! outside their palace are allowed, which is handy for tests.
//!
//! # Example
//! ```
//! use xiangqi_engine::board::{BoardBuilder, Color, Piece, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square(0, 3), Color::Red, Piece::King)
//!     .piece(Square(9, 4), Color::Black, Piece::King)
//!     .piece(Square(5, 0), Color::Red, Piece::Rook)
//!     .side_to_move(Color::Red)
//!     .build();
//! assert!(!board.is_check(Color::Black));
//! ```

use super::{Board, Color, Piece, Square, MOVENUM_LIMIT, RULE50_PLY_LIMIT};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Color, Piece)>,
    side_to_move: Color,
    rule50_ply: u32,
    movenum: u32,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            side_to_move: Color::Red,
            rule50_ply: 0,
            movenum: 1,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let start = Board::new();
        let mut builder = Self::new();
        for sq in Square::all() {
            if let Some((color, piece)) = start.piece_at(sq) {
                builder.pieces.push((sq, color, piece));
            }
        }
        builder
    }

    /// Place a piece on the board.
    ///
    /// A second king of the same colour replaces the first.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.pieces.retain(|&(sq, c, p)| {
            sq != square && !(piece == Piece::King && p == Piece::King && c == color)
        });
        self.pieces.push((square, color, piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Set the non-progress counter (plies since the last capture or pawn move),
    /// capped at `RULE50_PLY_LIMIT`.
    #[must_use]
    pub const fn rule50_ply(mut self, ply: u32) -> Self {
        self.rule50_ply = if ply > RULE50_PLY_LIMIT { RULE50_PLY_LIMIT } else { ply };
        self
    }

    /// Set the full move number, clamped to `1..=MOVENUM_LIMIT`.
    #[must_use]
    pub const fn movenum(mut self, movenum: u32) -> Self {
        self.movenum = match movenum {
            0 => 1,
            n if n > MOVENUM_LIMIT => MOVENUM_LIMIT,
            n => n,
        };
        self
    }

    /// Build the board.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();

        for (square, color, piece) in self.pieces {
            board.set_piece(square, color, piece);
        }

        board.to_move = self.side_to_move;
        board.rule50_ply = self.rule50_ply;
        board.movenum = self.movenum;
        board.gameply = 2 * (self.movenum - 1) + u32::from(self.side_to_move == Color::Black);
        board.hash = board.calc_hash();
        board
    }
}
