//! Core board types.
//!
//! This module contains the fundamental types used throughout the engine:
//! - `Piece` and `Color` - piece types and sides
//! - `Square` - (rank, file) intersection, `SquareIdx` - padded vertex index
//! - `Direction` - the eight ray directions
//! - `Bitboard` - 128-bit set of vertices
//! - `Move` and `MoveList` - move representation

mod bitboard;
mod moves;
mod piece;
mod square;

pub use bitboard::{Bitboard, BitboardIter};
pub use moves::{Move, MoveList, MoveListIntoIter};
pub use piece::{Color, Piece};
pub use square::{Direction, Square, SquareIdx, HEIGHT, INTERSECTIONS, NUM_VERTICES, SHIFT, WIDTH};

pub(crate) use bitboard::pop_lsb;
