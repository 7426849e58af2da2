//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Move tree counts for move generation
//! - `make_move.rs` - Move application and counters
//! - `edge_cases.rs` - Piece rules, checks and facing kings
//! - `proptest.rs` - Property-based tests

mod make_move;
mod perft;
mod proptest;
