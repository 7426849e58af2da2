//! Orthogonal sliders: rook and cannon.

use super::super::attack_tables::{cannon_attacks, rook_attacks};
use super::super::{Bitboard, Board, Color, SquareIdx};

pub(super) fn rook_destinations(board: &Board, _color: Color, from: SquareIdx) -> Bitboard {
    rook_attacks(from, board.occupied())
}

/// Quiet slides up to the screen plus the first piece behind it on each ray.
pub(super) fn cannon_destinations(board: &Board, _color: Color, from: SquareIdx) -> Bitboard {
    cannon_attacks(from, board.occupied())
}
