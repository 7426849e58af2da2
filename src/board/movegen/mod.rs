//! Move generation, check detection and legality.
//!
//! Generation is pseudo-legal: own-piece captures are excluded but moves
//! that expose the mover's king are kept. Callers filter with
//! [`Board::is_legal`] or use [`Board::legal_moves`].

mod leapers;
mod sliders;
mod steppers;

use super::attack_tables::rook_attacks;
use super::{pop_lsb, Bitboard, Board, Color, Move, MoveList, Piece, Square, SquareIdx};

use leapers::{elephant_destinations, horse_destinations};
use sliders::{cannon_destinations, rook_destinations};
use steppers::{advisor_destinations, king_destinations, pawn_destinations};

/// Destination set of the piece on `from`, own pieces not yet removed.
type DestinationFn = fn(&Board, Color, SquareIdx) -> Bitboard;

/// Per-type generators in generation order.
const GENERATORS: [(Piece, DestinationFn); 7] = [
    (Piece::Pawn, pawn_destinations),
    (Piece::Horse, horse_destinations),
    (Piece::Cannon, cannon_destinations),
    (Piece::Rook, rook_destinations),
    (Piece::Elephant, elephant_destinations),
    (Piece::Advisor, advisor_destinations),
    (Piece::King, king_destinations),
];

impl Board {
    /// Every pseudo-legal move for `color`.
    ///
    /// Moves come grouped by piece type (pawns, horses, cannons, rooks,
    /// elephants, advisors, king), by ascending origin within a type and by
    /// ascending destination within a piece.
    #[must_use]
    pub fn generate_movelist(&self, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        let own = self.colors(color);
        let enemy = self.colors(color.opponent());

        for &(piece, destinations) in &GENERATORS {
            let mut origins = self.pieces_of(color, piece);
            while !origins.is_empty() {
                let from_idx = pop_lsb(&mut origins);
                let from = Square::from_index(from_idx);
                let targets = destinations(self, color, from_idx).without(own);
                for to_idx in targets.iter() {
                    let to = Square::from_index(to_idx);
                    if enemy.contains_index(to_idx) {
                        moves.push(Move::capture(from, to));
                    } else {
                        moves.push(Move::quiet(from, to));
                    }
                }
            }
        }
        moves
    }

    /// Union of every square `color`'s pieces attack.
    #[must_use]
    pub fn attacks_of(&self, color: Color) -> Bitboard {
        let mut attacked = Bitboard::EMPTY;
        for &(piece, destinations) in &GENERATORS {
            for from_idx in self.pieces_of(color, piece).iter() {
                attacked |= destinations(self, color, from_idx);
            }
        }
        attacked
    }

    /// True if `color`'s king is attacked by any opposing piece.
    ///
    /// A side without a king is never in check.
    #[must_use]
    pub fn is_check(&self, color: Color) -> bool {
        self.king_square(color)
            .is_some_and(|king| self.attacks_of(color.opponent()).contains(king))
    }

    /// True if the two kings see each other along an open file or rank.
    #[must_use]
    pub fn is_king_face_king(&self) -> bool {
        match self.kings {
            [Some(red), Some(black)] => {
                rook_attacks(red.index(), self.occupied()).contains(black)
            }
            _ => false,
        }
    }

    /// Pseudo-legal for the side to move, and leaves neither the mover's
    /// king in check nor the kings facing.
    #[must_use]
    pub fn is_legal(&self, mv: Move) -> bool {
        match self.piece_at(mv.from()) {
            Some((color, _)) if color == self.to_move => {}
            _ => return false,
        }
        self.generate_movelist(self.to_move).contains(mv) && self.is_safe_after(mv)
    }

    /// Pseudo-legal `mv` keeps the mover's king safe.
    pub(crate) fn is_safe_after(&self, mv: Move) -> bool {
        let color = self.to_move;
        let mut next = *self;
        next.do_move_assume_legal(mv);
        !next.is_check(color) && !next.is_king_face_king()
    }

    /// Fully legal moves for the side to move, in generation order.
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        let mut moves = self.generate_movelist(self.to_move);
        moves.retain(|mv| self.is_safe_after(mv));
        moves
    }

    /// Count the leaves of the legal move tree `depth` plies deep.
    #[must_use]
    pub fn perft(&self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for &mv in &moves {
            let mut next = *self;
            next.do_move_assume_legal(mv);
            nodes += next.perft(depth - 1);
        }
        nodes
    }
}
