//! Xiangqi rules core: bitboard board representation with magic attack
//! tables, incremental Zobrist hashing, game history with repetition
//! adjudication, and a bounded forced-mate prover.
//!
//! ```
//! use xiangqi_engine::{ForcedCheckmate, Position};
//!
//! let pos = Position::from_fen("3k5/9/9/9/R8/9/9/9/9/4K4 w - - 0 1").unwrap();
//! let mate = ForcedCheckmate::new(&pos).find_checkmate();
//! assert_eq!(mate.to_string(), "a5d5");
//! ```

pub mod board;
pub mod eval;
pub mod position;
pub mod search;
pub(crate) mod zobrist;

pub use board::{Board, Color, Move, Piece, Square};
pub use eval::{Evaluation, Evaluator, MaterialEvaluator};
pub use position::{Position, RuleSet, Verdict};
pub use search::{ForcedCheckmate, MateSearchParams};
