//! Pieces with fixed step sets: pawn, advisor, king.

use super::super::attack_tables::{advisor_attacks, king_attacks, pawn_attacks};
use super::super::{Bitboard, Board, Color, SquareIdx};

pub(super) fn pawn_destinations(_board: &Board, color: Color, from: SquareIdx) -> Bitboard {
    pawn_attacks(color, from)
}

pub(super) fn advisor_destinations(_board: &Board, _color: Color, from: SquareIdx) -> Bitboard {
    advisor_attacks(from)
}

pub(super) fn king_destinations(_board: &Board, _color: Color, from: SquareIdx) -> Bitboard {
    king_attacks(from)
}
