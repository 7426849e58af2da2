//! Xiangqi board representation and rules.
//!
//! Uses 128-bit bitboards over a 10-wide padded grid, with magic lookup
//! tables for every piece whose reach depends on blockers.
//!
//! # Example
//! ```
//! use xiangqi_engine::board::Board;
//!
//! let board = Board::new();
//! let moves = board.legal_moves();
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod attack_tables;
mod builder;
mod error;
mod fen;
mod make_move;
mod movegen;
mod notation;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{FenError, MoveParseError, SquareError};
pub use fen::START_FEN;
pub use state::{Board, MOVENUM_LIMIT, RULE50_PLY_LIMIT};
pub use types::{
    Bitboard, BitboardIter, Color, Direction, Move, MoveList, MoveListIntoIter, Piece, Square,
    SquareIdx, HEIGHT, INTERSECTIONS, NUM_VERTICES, SHIFT, WIDTH,
};

// Lookup tables, exposed for inspection and eager initialisation
pub use attack_tables::{init as init_attack_tables, magic_entry, Magic, MagicKind};

pub(crate) use types::pop_lsb;
