use crate::zobrist::{piece_key, side_key};

use super::{Board, Color, Move, Piece};

impl Board {
    /// Apply `mv` without checking it.
    ///
    /// The caller must have validated the move (for example with
    /// [`Board::is_legal`], or by taking it from [`Board::legal_moves`] or
    /// [`Board::generate_movelist`] for the side to move). Applying a move
    /// whose origin is empty or holds the wrong side leaves the board in an
    /// unspecified state.
    ///
    /// Repetition bookkeeping is cleared; `Position` fills it back in.
    pub fn do_move_assume_legal(&mut self, mv: Move) {
        let from = mv.from();
        let to = mv.to();

        let moving = self.remove_piece(from);
        debug_assert!(moving.is_some(), "no piece on {from} for {mv:?}");
        let Some((color, piece)) = moving else {
            return;
        };
        let captured = self.remove_piece(to);
        self.set_piece(to, color, piece);

        self.hash ^= piece_key(Some((color, piece)), from) ^ piece_key(None, from);
        self.hash ^= piece_key(None, to) ^ piece_key(Some((color, piece)), to);
        if let Some(victim) = captured {
            self.hash ^= piece_key(Some(victim), to) ^ piece_key(None, to);
        }

        if captured.is_some() || piece == Piece::Pawn {
            self.rule50_ply = 0;
        } else {
            self.rule50_ply = self.rule50_ply.saturating_add(1);
        }

        self.capture = captured.is_some();
        self.last_move = mv;
        self.gameply = self.gameply.saturating_add(1);
        if color == Color::Black {
            self.movenum = self.movenum.saturating_add(1);
        }
        self.to_move = color.opponent();
        self.hash ^= side_key(Color::Red);
        self.repetitions = 0;
        self.cycle_length = 0;
    }
}
