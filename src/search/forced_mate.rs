//! Forced-mate prover.
//!
//! The attacker must give check on every move; the defender tries every
//! reply that gets out of check. A line is proven once the defender has no
//! escape, or the attacker can take the king outright.
//!
//! This is a bounded prover, not an exhaustive one. A null move or `false`
//! means no mate was found inside the horizon, never that the position is
//! a draw or that no mate exists.

use std::cell::Cell;

use log::{debug, trace};

use super::MateSearchParams;
use crate::board::{Board, Color, Move};
use crate::position::Position;

pub struct ForcedCheckmate<'a> {
    root: &'a Position,
    params: MateSearchParams,
    color: Color,
    nodes: Cell<u64>,
}

/// Outcome of playing `mv` on a scratch copy of `board`.
struct Trial {
    board: Board,
    mover_safe: bool,
}

impl Trial {
    fn new(board: &Board, mv: Move) -> Self {
        let mover = board.to_move();
        let mut next = *board;
        next.do_move_assume_legal(mv);
        Trial {
            mover_safe: !next.is_check(mover) && !next.is_king_face_king(),
            board: next,
        }
    }

    fn gives_check(&self) -> bool {
        // After the move the defender is the side to move.
        self.board.is_check(self.board.to_move())
    }
}

impl<'a> ForcedCheckmate<'a> {
    /// Prover for the side to move in `root`, with default parameters.
    #[must_use]
    pub fn new(root: &'a Position) -> Self {
        Self::with_params(root, MateSearchParams::default())
    }

    #[must_use]
    pub fn with_params(root: &'a Position, params: MateSearchParams) -> Self {
        ForcedCheckmate {
            root,
            params,
            color: root.to_move(),
            nodes: Cell::new(0),
        }
    }

    #[must_use]
    pub fn params(&self) -> &MateSearchParams {
        &self.params
    }

    /// Positions visited by this prover so far.
    #[must_use]
    pub fn nodes(&self) -> u64 {
        self.nodes.get()
    }

    /// First move, in generation order, that forces mate; the null move if
    /// none is found within the horizon.
    #[must_use]
    pub fn find_checkmate(&self) -> Move {
        if self.root.is_gameover() {
            debug!("mate search skipped: game already over");
            return Move::null();
        }

        let opp = self.color.opponent();
        let opp_king = self.root.board().king_square(opp);
        let already_hanging = self.root.is_check(opp);
        let threshold = self.root.rules().repetition_threshold;
        let movelist = self.root.movelist();
        let total = movelist.len();

        for (idx, &mv) in movelist.iter().enumerate() {
            if Some(mv.to()) == opp_king {
                debug!("king capture available: {mv}");
                return mv;
            }
            if already_hanging {
                continue;
            }

            let trial = Trial::new(self.root.board(), mv);
            if !trial.mover_safe || !trial.gives_check() {
                continue;
            }

            let mut next = self.root.branch();
            next.record_move(mv, trial.board, true);
            if next.repetitions() >= threshold {
                // Repeating checks end in a forfeit or a draw, not a mate.
                continue;
            }

            let mut hashbuf = vec![next.hash()];
            if !self.uncheckmate_search(&next, &mut hashbuf, 1, total - (idx + 1)) {
                debug!("forced mate found: {mv} after {} nodes", self.nodes());
                return mv;
            }
        }

        debug!("no forced mate within horizon, {} nodes", self.nodes());
        Move::null()
    }

    /// Whether the side not to move is lost: its king is gone, already
    /// hangs, or a forced mate against it was found.
    #[must_use]
    pub fn is_opp_checkmate(&self) -> bool {
        let opp = self.color.opponent();
        if self.root.board().king_square(opp).is_none() || self.root.is_check(opp) {
            return true;
        }
        !self.find_checkmate().is_null()
    }

    fn cutoff(&self, pos: &Position, depth: usize, remaining: usize) -> bool {
        pos.rule50_ply_left() == 0 || depth > self.params.horizon(depth, remaining)
    }

    /// Attacker to move in `pos`: true if some checking move leaves the
    /// defender no surviving reply.
    ///
    /// `buf[..depth]` holds the hashes of the positions already on this
    /// line; moves that return to one of them are not tried.
    pub fn checkmate_search(
        &self,
        pos: &Position,
        buf: &mut Vec<u64>,
        depth: usize,
        remaining: usize,
    ) -> bool {
        self.nodes.set(self.nodes.get() + 1);
        if self.cutoff(pos, depth, remaining) {
            return false;
        }

        let opp = pos.to_move().opponent();
        let opp_king = pos.board().king_square(opp);
        let already_hanging = pos.is_check(opp);
        let threshold = pos.rules().repetition_threshold;
        let movelist = pos.movelist();
        let total = movelist.len();

        for (idx, &mv) in movelist.iter().enumerate() {
            if Some(mv.to()) == opp_king {
                trace!("depth {depth}: {mv} takes the king");
                return true;
            }
            if already_hanging {
                continue;
            }

            let trial = Trial::new(pos.board(), mv);
            if !trial.mover_safe || !trial.gives_check() {
                continue;
            }
            let hash = trial.board.hash();
            if buf[..depth.min(buf.len())].contains(&hash) {
                trace!("depth {depth}: {mv} revisits the line");
                continue;
            }

            let mut next = pos.branch();
            next.record_move(mv, trial.board, true);
            if next.repetitions() >= threshold {
                continue;
            }

            buf.truncate(depth);
            buf.push(hash);
            if !self.uncheckmate_search(&next, buf, depth + 1, total - (idx + 1) + remaining) {
                trace!("depth {depth}: {mv} mates");
                return true;
            }
        }
        false
    }

    /// Defender to move in `pos`, in check: true if some reply escapes and
    /// the attacker cannot force mate afterwards.
    pub fn uncheckmate_search(
        &self,
        pos: &Position,
        buf: &mut Vec<u64>,
        depth: usize,
        remaining: usize,
    ) -> bool {
        self.nodes.set(self.nodes.get() + 1);
        if self.cutoff(pos, depth, remaining) {
            return true;
        }

        let opp_king = pos.board().king_square(pos.to_move().opponent());
        let movelist = pos.movelist();
        let total = movelist.len();

        for (idx, &mv) in movelist.iter().enumerate() {
            if Some(mv.to()) == opp_king {
                return true;
            }

            let trial = Trial::new(pos.board(), mv);
            if !trial.mover_safe {
                continue;
            }

            let gave_check = trial.gives_check();
            let mut next = pos.branch();
            next.record_move(mv, trial.board, gave_check);
            buf.truncate(depth);
            buf.push(next.hash());
            if !self.checkmate_search(&next, buf, depth + 1, total - (idx + 1) + remaining) {
                trace!("depth {depth}: {mv} escapes");
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardBuilder, Piece, Square};
    use crate::position::RuleSet;

    /// Red: king e0, rook a5. Black: king d9. Rook to d5 mates.
    fn rook_mate() -> Position {
        let board = BoardBuilder::new()
            .piece(Square(0, 4), Color::Red, Piece::King)
            .piece(Square(5, 0), Color::Red, Piece::Rook)
            .piece(Square(9, 3), Color::Black, Piece::King)
            .build();
        Position::from_board(board)
    }

    #[test]
    fn test_finds_rook_mate() {
        let pos = rook_mate();
        let prover = ForcedCheckmate::new(&pos);
        assert_eq!(prover.find_checkmate(), Move::quiet(Square(5, 0), Square(5, 3)));
        assert!(prover.nodes() > 0);
    }

    #[test]
    fn test_finds_rook_mate_with_tight_horizon() {
        let pos = rook_mate();
        let prover = ForcedCheckmate::with_params(&pos, MateSearchParams::mate_in_one());
        assert_eq!(prover.find_checkmate(), Move::quiet(Square(5, 0), Square(5, 3)));
        assert!(prover.is_opp_checkmate());
    }

    /// Red: king d0, rooks a1 and b0. Black: king e9.
    fn two_rooks() -> Position {
        Position::from_fen("4k4/9/9/9/9/9/9/9/R8/1R1K5 w - - 0 1").unwrap()
    }

    #[test]
    fn test_finds_mate_several_checks_deep() {
        let pos = two_rooks();
        let rook_to_b9 = Move::quiet(Square(0, 1), Square(9, 1));

        let shallow = ForcedCheckmate::with_params(&pos, MateSearchParams::mate_in_one());
        assert!(shallow.find_checkmate().is_null());

        let prover = ForcedCheckmate::new(&pos);
        assert_eq!(prover.find_checkmate(), rook_to_b9);

        // The king's only flight keeps it in a lost position.
        let mut next = pos.clone();
        next.do_move_assume_legal(rook_to_b9);
        let replies = next.legal_moves();
        assert_eq!(replies.len(), 1);
        assert_eq!(replies[0], Move::quiet(Square(9, 4), Square(8, 4)));

        let mut buf = vec![next.hash()];
        assert!(!prover.uncheckmate_search(&next, &mut buf, 1, 0));
        next.do_move_assume_legal(replies[0]);
        assert!(ForcedCheckmate::new(&next).is_opp_checkmate());
    }

    #[test]
    fn test_check_into_repeated_position_is_skipped() {
        // The position after b0b9 has already occurred twice.
        let shuffle = ["b0b9", "e9e8", "b9b1", "e8e9", "b1b9", "e9e8", "b9b0", "e8e9"];
        let rook_to_b9 = Move::quiet(Square(0, 1), Square(9, 1));

        let mut pos = two_rooks();
        for text in shuffle {
            pos.do_textmove(text).unwrap();
        }
        assert_eq!(pos.repetitions(), 1);
        assert!(!pos.is_gameover());

        let mut next = pos.clone();
        next.do_move_assume_legal(rook_to_b9);
        assert_eq!(next.repetitions(), 2);

        let found = ForcedCheckmate::new(&pos).find_checkmate();
        assert_ne!(found, rook_to_b9);
        assert!(!found.is_null());

        let lenient = RuleSet {
            repetition_threshold: 3,
            ..RuleSet::default()
        };
        let pos = pos.with_rules(lenient);
        assert_eq!(ForcedCheckmate::new(&pos).find_checkmate(), rook_to_b9);
    }

    #[test]
    fn test_escape_means_no_mate() {
        // Black king e9 can always step aside to f9 or e8.
        let board = BoardBuilder::new()
            .piece(Square(0, 3), Color::Red, Piece::King)
            .piece(Square(5, 0), Color::Red, Piece::Rook)
            .piece(Square(9, 4), Color::Black, Piece::King)
            .build();
        let pos = Position::from_board(board);
        let prover = ForcedCheckmate::with_params(&pos, MateSearchParams::mate_in_one());
        assert!(prover.find_checkmate().is_null());
        assert!(!prover.is_opp_checkmate());
    }

    #[test]
    fn test_hanging_king_is_taken() {
        let board = BoardBuilder::new()
            .piece(Square(0, 4), Color::Red, Piece::King)
            .piece(Square(5, 3), Color::Red, Piece::Rook)
            .piece(Square(9, 3), Color::Black, Piece::King)
            .build();
        let pos = Position::from_board(board);
        let prover = ForcedCheckmate::new(&pos);
        assert_eq!(prover.find_checkmate(), Move::capture(Square(5, 3), Square(9, 3)));
        assert!(prover.is_opp_checkmate());
    }

    #[test]
    fn test_revisited_position_is_pruned() {
        let pos = rook_mate();
        let prover = ForcedCheckmate::with_params(&pos, MateSearchParams::mate_in_one());

        let mut mated = *pos.board();
        mated.do_move_assume_legal(Move::quiet(Square(5, 0), Square(5, 3)));

        let mut fresh = vec![pos.hash()];
        assert!(prover.checkmate_search(&pos, &mut fresh, 1, 1));

        let mut seen = vec![mated.hash()];
        assert!(!prover.checkmate_search(&pos, &mut seen, 1, 1));
    }

    #[test]
    fn test_defender_without_escape_loses() {
        let mut pos = rook_mate();
        pos.do_textmove("a5d5").unwrap();
        let prover = ForcedCheckmate::new(&pos);
        let mut buf = vec![pos.hash()];
        assert!(!prover.uncheckmate_search(&pos, &mut buf, 1, 1));
    }

    #[test]
    fn test_exhausted_rule50_stops_search() {
        let board = BoardBuilder::new()
            .piece(Square(0, 4), Color::Red, Piece::King)
            .piece(Square(5, 0), Color::Red, Piece::Rook)
            .piece(Square(9, 3), Color::Black, Piece::King)
            .rule50_ply(crate::board::RULE50_PLY_LIMIT)
            .build();
        let pos = Position::from_board(board);
        let prover = ForcedCheckmate::new(&pos);
        assert!(pos.is_gameover());
        assert!(prover.find_checkmate().is_null());
        assert!(!prover.checkmate_search(&pos, &mut vec![pos.hash()], 1, 1));
    }

    #[test]
    fn test_start_position_has_no_mate() {
        let pos = Position::new();
        let prover = ForcedCheckmate::new(&pos);
        assert!(prover.find_checkmate().is_null());
        assert!(!prover.is_opp_checkmate());
    }
}
