//! Attack tables for move generation.
//!
//! King, advisor and pawn moves come from fixed step tables. Everything
//! whose reach depends on occupancy (rook, cannon, horse, elephant) goes
//! through the magic tables in [`magic`].

mod magic;
mod multipliers;
mod tables;

use once_cell::sync::Lazy;

pub use magic::{Magic, MagicKind};
pub(crate) use tables::palace;

use magic::MagicTables;
use tables::{ADVISOR_ATTACKS, KING_ATTACKS, PAWN_ATTACKS};

use super::types::{Bitboard, Color, SquareIdx};

static MAGICS: Lazy<MagicTables> = Lazy::new(MagicTables::build);

/// Build every lookup table now instead of on first use.
pub fn init() {
    Lazy::force(&MAGICS);
    Lazy::force(&KING_ATTACKS);
    Lazy::force(&ADVISOR_ATTACKS);
    Lazy::force(&PAWN_ATTACKS);
}

/// The magic entry for `kind` at `idx`.
#[must_use]
pub fn magic_entry(kind: MagicKind, idx: SquareIdx) -> &'static Magic {
    MAGICS.get(kind, idx)
}

#[inline]
pub(crate) fn pawn_attacks(color: Color, idx: SquareIdx) -> Bitboard {
    PAWN_ATTACKS[color.index()][idx.as_usize()]
}

#[inline]
pub(crate) fn advisor_attacks(idx: SquareIdx) -> Bitboard {
    ADVISOR_ATTACKS[idx.as_usize()]
}

#[inline]
pub(crate) fn king_attacks(idx: SquareIdx) -> Bitboard {
    KING_ATTACKS[idx.as_usize()]
}

#[inline]
pub(crate) fn horse_attacks(idx: SquareIdx, occupied: Bitboard) -> Bitboard {
    MAGICS.get(MagicKind::Horse, idx).attack(occupied)
}

#[inline]
pub(crate) fn elephant_attacks(idx: SquareIdx, occupied: Bitboard) -> Bitboard {
    MAGICS.get(MagicKind::Elephant, idx).attack(occupied)
}

#[inline]
pub(crate) fn rook_file_attacks(idx: SquareIdx, occupied: Bitboard) -> Bitboard {
    MAGICS.get(MagicKind::RookFile, idx).attack(occupied)
}

#[inline]
pub(crate) fn rook_rank_attacks(idx: SquareIdx, occupied: Bitboard) -> Bitboard {
    MAGICS.get(MagicKind::RookRank, idx).attack(occupied)
}

#[inline]
pub(crate) fn rook_attacks(idx: SquareIdx, occupied: Bitboard) -> Bitboard {
    rook_rank_attacks(idx, occupied) | rook_file_attacks(idx, occupied)
}

/// Quiet slides plus the capture square beyond the screen on each ray.
#[inline]
pub(crate) fn cannon_attacks(idx: SquareIdx, occupied: Bitboard) -> Bitboard {
    MAGICS.get(MagicKind::CannonRank, idx).attack(occupied)
        | MAGICS.get(MagicKind::CannonFile, idx).attack(occupied)
}

#[cfg(test)]
mod tests {
    use super::magic::occupancy_subsets;
    use super::*;
    use crate::board::types::Square;

    #[test]
    fn every_magic_matches_ray_walk() {
        for kind in MagicKind::ALL {
            for sq in Square::all() {
                let entry = magic_entry(kind, sq.index());
                let mask = kind.relevance_mask(sq);
                assert_eq!(entry.mask, mask);
                for occ in occupancy_subsets(mask) {
                    assert_eq!(
                        entry.attack(occ),
                        kind.slow_attack(sq, occ),
                        "{kind:?} at {sq} with occupancy {:#x}",
                        occ.0
                    );
                }
            }
        }
    }

    #[test]
    fn irrelevant_occupancy_is_ignored() {
        let sq = Square(4, 4);
        let noise = Bitboard::from_square(Square(0, 0)) | Bitboard::from_square(Square(9, 8));
        for kind in MagicKind::ALL {
            let entry = magic_entry(kind, sq.index());
            assert_eq!(entry.attack(noise), entry.attack(Bitboard::EMPTY));
        }
    }

    #[test]
    fn table_sizes_are_dense() {
        for kind in MagicKind::ALL {
            for sq in Square::all() {
                let entry = magic_entry(kind, sq.index());
                let bits = entry.mask.popcount().max(1);
                assert_eq!(entry.attacks.len(), 1usize << bits, "{kind:?} at {sq}");
                assert_eq!(entry.attacks.len(), 1usize << (64 - entry.shift));
            }
        }
    }

    #[test]
    fn rook_and_cannon_on_open_board() {
        let idx = Square(4, 4).index();
        assert_eq!(rook_attacks(idx, Bitboard::EMPTY).popcount(), 17);
        assert_eq!(cannon_attacks(idx, Bitboard::EMPTY).popcount(), 17);
    }
}
