//! Blockable leapers: horse (leg) and elephant (eye).

use super::super::attack_tables::{elephant_attacks, horse_attacks};
use super::super::{Bitboard, Board, Color, SquareIdx};

pub(super) fn horse_destinations(board: &Board, _color: Color, from: SquareIdx) -> Bitboard {
    horse_attacks(from, board.occupied())
}

/// The elephant table already keeps targets on the origin's side of the river.
pub(super) fn elephant_destinations(board: &Board, _color: Color, from: SquareIdx) -> Bitboard {
    elephant_attacks(from, board.occupied())
}
