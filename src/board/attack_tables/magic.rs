//! Magic attack tables for occupancy-dependent pieces.
//!
//! Every blocked mover (rook and cannon split into rank and file halves,
//! plus the horse and elephant whose single leg/eye square can block) goes
//! through the same lookup: mask the occupancy to the relevant squares,
//! hash the two 64-bit halves with a pair of multipliers, shift, and read
//! the precomputed attack set.
//!
//! Multipliers come precomputed from `multipliers.rs` and are checked
//! against the ray walk when the tables are built. A pair that fails the
//! check is replaced by a sparse-random search from a fixed seed.

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::multipliers::{
    CANNON_FILE_MAGICS, CANNON_RANK_MAGICS, ELEPHANT_MAGICS, HORSE_MAGICS, ROOK_FILE_MAGICS,
    ROOK_RANK_MAGICS,
};
use crate::board::types::{
    Bitboard, Direction, Square, SquareIdx, INTERSECTIONS, NUM_VERTICES, WIDTH,
};

const MAGIC_SEED: u64 = 0x5851_F42D_4C95_7F2D;
const TRIES_PER_WIDTH: usize = 100_000;
const MAX_EXTRA_BITS: u32 = 3;

/// The occupancy-dependent movement patterns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MagicKind {
    Horse,
    Elephant,
    RookRank,
    RookFile,
    CannonRank,
    CannonFile,
}

impl MagicKind {
    pub const ALL: [MagicKind; 6] = [
        MagicKind::Horse,
        MagicKind::Elephant,
        MagicKind::RookRank,
        MagicKind::RookFile,
        MagicKind::CannonRank,
        MagicKind::CannonFile,
    ];

    fn multipliers(self) -> &'static [(u64, u64); INTERSECTIONS] {
        match self {
            MagicKind::Horse => &HORSE_MAGICS,
            MagicKind::Elephant => &ELEPHANT_MAGICS,
            MagicKind::RookRank => &ROOK_RANK_MAGICS,
            MagicKind::RookFile => &ROOK_FILE_MAGICS,
            MagicKind::CannonRank => &CANNON_RANK_MAGICS,
            MagicKind::CannonFile => &CANNON_FILE_MAGICS,
        }
    }

    const fn rays(self) -> [Direction; 2] {
        match self {
            MagicKind::RookRank | MagicKind::CannonRank => [Direction::East, Direction::West],
            _ => [Direction::North, Direction::South],
        }
    }

    /// Squares whose occupancy can change this piece's destinations from `sq`.
    #[must_use]
    pub fn relevance_mask(self, sq: Square) -> Bitboard {
        let mut mask = Bitboard::EMPTY;
        match self {
            MagicKind::Horse => {
                for dir in Direction::ORTHOGONAL {
                    let (dr, df) = dir.offset();
                    if let Some(leg) = sq.offset(dr, df) {
                        mask |= Bitboard::from_square(leg);
                    }
                }
            }
            MagicKind::Elephant => {
                for dir in Direction::DIAGONAL {
                    let (dr, df) = dir.offset();
                    if elephant_target(sq, dr, df).is_some() {
                        if let Some(eye) = sq.offset(dr, df) {
                            mask |= Bitboard::from_square(eye);
                        }
                    }
                }
            }
            MagicKind::RookRank | MagicKind::RookFile => {
                // The last square of a ray is reachable whatever stands on it.
                for dir in self.rays() {
                    let (dr, df) = dir.offset();
                    let mut cur = sq;
                    while let Some(next) = cur.offset(dr, df) {
                        if next.offset(dr, df).is_some() {
                            mask |= Bitboard::from_square(next);
                        }
                        cur = next;
                    }
                }
            }
            MagicKind::CannonRank | MagicKind::CannonFile => {
                for dir in self.rays() {
                    let (dr, df) = dir.offset();
                    let mut cur = sq;
                    while let Some(next) = cur.offset(dr, df) {
                        mask |= Bitboard::from_square(next);
                        cur = next;
                    }
                }
            }
        }
        mask
    }

    /// Destinations computed by walking the board square by square.
    #[must_use]
    pub fn slow_attack(self, sq: Square, occupied: Bitboard) -> Bitboard {
        let mut attacks = Bitboard::EMPTY;
        match self {
            MagicKind::Horse => {
                for dir in Direction::ORTHOGONAL {
                    let (dr, df) = dir.offset();
                    let Some(leg) = sq.offset(dr, df) else {
                        continue;
                    };
                    if occupied.contains(leg) {
                        continue;
                    }
                    // Step outward diagonally from the leg.
                    let sides = if dr == 0 { [(1, df), (-1, df)] } else { [(dr, 1), (dr, -1)] };
                    for (sr, sf) in sides {
                        if let Some(target) = leg.offset(sr, sf) {
                            attacks |= Bitboard::from_square(target);
                        }
                    }
                }
            }
            MagicKind::Elephant => {
                for dir in Direction::DIAGONAL {
                    let (dr, df) = dir.offset();
                    let Some(target) = elephant_target(sq, dr, df) else {
                        continue;
                    };
                    match sq.offset(dr, df) {
                        Some(eye) if !occupied.contains(eye) => {
                            attacks |= Bitboard::from_square(target);
                        }
                        _ => {}
                    }
                }
            }
            MagicKind::RookRank | MagicKind::RookFile => {
                for dir in self.rays() {
                    let (dr, df) = dir.offset();
                    let mut cur = sq;
                    while let Some(next) = cur.offset(dr, df) {
                        attacks |= Bitboard::from_square(next);
                        if occupied.contains(next) {
                            break;
                        }
                        cur = next;
                    }
                }
            }
            MagicKind::CannonRank | MagicKind::CannonFile => {
                for dir in self.rays() {
                    let (dr, df) = dir.offset();
                    let mut cur = sq;
                    let mut screened = false;
                    while let Some(next) = cur.offset(dr, df) {
                        let blocked = occupied.contains(next);
                        if !screened {
                            if blocked {
                                screened = true;
                            } else {
                                attacks |= Bitboard::from_square(next);
                            }
                        } else if blocked {
                            attacks |= Bitboard::from_square(next);
                            break;
                        }
                        cur = next;
                    }
                }
            }
        }
        attacks
    }
}

/// Elephant destination two diagonal steps away, if it stays on the
/// origin's side of the river.
fn elephant_target(sq: Square, dr: isize, df: isize) -> Option<Square> {
    let target = sq.offset(2 * dr, 2 * df)?;
    if (target.rank() <= 4) == (sq.rank() <= 4) {
        Some(target)
    } else {
        None
    }
}

/// Per-square magic entry.
#[derive(Clone, Debug)]
pub struct Magic {
    pub mask: Bitboard,
    pub lower_magic: u64,
    pub upper_magic: u64,
    pub shift: u32,
    pub attacks: Vec<Bitboard>,
}

impl Magic {
    /// Entry for padding vertices: every lookup lands on slot 0.
    fn off_board() -> Self {
        Magic {
            mask: Bitboard::EMPTY,
            lower_magic: 0,
            upper_magic: 0,
            shift: 63,
            attacks: vec![Bitboard::EMPTY; 2],
        }
    }

    #[inline]
    #[must_use]
    pub fn index(&self, occupied: Bitboard) -> usize {
        let mark = occupied & self.mask;
        let hashed = mark
            .lower()
            .wrapping_mul(self.lower_magic)
            .wrapping_add(mark.upper().wrapping_mul(self.upper_magic));
        (hashed >> self.shift) as usize
    }

    /// # Panics
    /// Panics if the hashed index falls outside the table, which means the
    /// multiplier/mask pair was derived incorrectly.
    #[inline]
    #[must_use]
    pub fn attack(&self, occupied: Bitboard) -> Bitboard {
        let idx = self.index(occupied);
        assert!(
            idx < self.attacks.len(),
            "magic index {} out of range (table size {})",
            idx,
            self.attacks.len()
        );
        self.attacks[idx]
    }
}

/// Enumerate every subset of `mask` (Carry-Rippler).
pub(crate) fn occupancy_subsets(mask: Bitboard) -> Vec<Bitboard> {
    let mut subsets = Vec::with_capacity(1usize << mask.popcount());
    let mut sub = 0u128;
    loop {
        subsets.push(Bitboard(sub));
        sub = sub.wrapping_sub(mask.0) & mask.0;
        if sub == 0 {
            break;
        }
    }
    subsets
}

fn sparse_random(rng: &mut StdRng) -> u64 {
    rng.gen::<u64>() & rng.gen::<u64>() & rng.gen::<u64>()
}

fn try_magic(
    entries: &[(Bitboard, Bitboard)],
    mask: Bitboard,
    bits: u32,
    lower_magic: u64,
    upper_magic: u64,
) -> Option<Magic> {
    let mut magic = Magic {
        mask,
        lower_magic,
        upper_magic,
        shift: 64 - bits,
        attacks: Vec::new(),
    };
    let mut table: Vec<Option<Bitboard>> = vec![None; 1usize << bits];
    for &(occ, attack) in entries {
        let slot = &mut table[magic.index(occ)];
        match *slot {
            None => *slot = Some(attack),
            Some(existing) if existing == attack => {}
            Some(_) => return None,
        }
    }
    magic.attacks = table.into_iter().map(|a| a.unwrap_or(Bitboard::EMPTY)).collect();
    Some(magic)
}

/// Every relevant occupancy of `kind` at `sq` with its attack set.
fn occupancy_entries(kind: MagicKind, sq: Square) -> (Bitboard, Vec<(Bitboard, Bitboard)>) {
    let mask = kind.relevance_mask(sq);
    let entries = occupancy_subsets(mask)
        .into_iter()
        .map(|occ| (occ, kind.slow_attack(sq, occ)))
        .collect();
    (mask, entries)
}

fn dense_bits(mask: Bitboard) -> u32 {
    mask.popcount().max(1)
}

fn search_magic(
    kind: MagicKind,
    sq: Square,
    mask: Bitboard,
    entries: &[(Bitboard, Bitboard)],
    rng: &mut StdRng,
) -> Magic {
    let base_bits = dense_bits(mask);
    for bits in base_bits..=base_bits + MAX_EXTRA_BITS {
        if bits > base_bits {
            warn!("widening {kind:?} magic at {sq} to {bits} bits");
        }
        for _ in 0..TRIES_PER_WIDTH {
            let lower = sparse_random(rng);
            let upper = sparse_random(rng);
            if let Some(magic) = try_magic(entries, mask, bits, lower, upper) {
                return magic;
            }
        }
    }
    panic!("no magic multiplier found for {kind:?} at {sq}");
}

fn build_magic(kind: MagicKind, sq: Square, rng: &mut StdRng) -> Magic {
    let (mask, entries) = occupancy_entries(kind, sq);
    let (lower, upper) = kind.multipliers()[sq.rank() * WIDTH + sq.file()];
    try_magic(&entries, mask, dense_bits(mask), lower, upper).unwrap_or_else(|| {
        warn!("embedded {kind:?} magic at {sq} collides, searching");
        search_magic(kind, sq, mask, &entries, rng)
    })
}

/// All magic tables, indexed by vertex.
pub(crate) struct MagicTables {
    tables: [Vec<Magic>; 6],
}

impl MagicTables {
    pub(crate) fn build() -> Self {
        let mut rng = StdRng::seed_from_u64(MAGIC_SEED);
        let tables = MagicKind::ALL.map(|kind| {
            (0..NUM_VERTICES)
                .map(|vtx| {
                    let idx = SquareIdx(vtx as u8);
                    if idx.is_on_board() {
                        build_magic(kind, Square::from_index(idx), &mut rng)
                    } else {
                        Magic::off_board()
                    }
                })
                .collect::<Vec<_>>()
        });
        let entries: usize = tables.iter().flatten().map(|m| m.attacks.len()).sum();
        debug!("magic tables ready: {entries} attack entries");
        MagicTables { tables }
    }

    #[inline]
    pub(crate) fn get(&self, kind: MagicKind, idx: SquareIdx) -> &Magic {
        &self.tables[kind as usize][idx.as_usize()]
    }
}
