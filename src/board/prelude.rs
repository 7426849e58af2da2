//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use xiangqi_engine::board::prelude::*;
//!
//! let board = Board::from_fen(START_FEN);
//! assert_eq!(board.to_move(), Color::Red);
//! ```

pub use super::{
    Board, BoardBuilder, Color, FenError, Move, MoveList, MoveParseError, Piece, Square,
    SquareError, START_FEN,
};
