//! Game-level wrapper around [`Board`]: move history, repetition
//! bookkeeping and adjudication.
//!
//! The board itself only moves forward. `Position` keeps the snapshot taken
//! before every move so a move can be taken back, and after each move it
//! scans the hash history to fill in the board's repetition counter and
//! cycle length.
//!
//! # Example
//! ```
//! use xiangqi_engine::position::Position;
//!
//! let mut pos = Position::new();
//! pos.do_textmove("h2e2").unwrap();
//! pos.do_textmove("h9g7").unwrap();
//! assert_eq!(pos.history().len(), 2);
//! pos.undo_move();
//! assert_eq!(pos.history().len(), 1);
//! ```

mod repetition;

pub use repetition::{Repetition, Verdict};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Board, Color, FenError, Move, MoveList, MoveParseError, Square};

/// Adjudication rules that differ between rule sets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RuleSet {
    /// Earlier occurrences of a position needed before repetition is judged.
    pub repetition_threshold: u32,
    /// A side that checks on every move of a repeating cycle loses.
    pub perpetual_check_loses: bool,
    /// A side with no legal move loses even when not in check.
    pub stalemate_loses: bool,
}

impl Default for RuleSet {
    fn default() -> Self {
        RuleSet {
            repetition_threshold: 2,
            perpetual_check_loses: true,
            stalemate_loses: true,
        }
    }
}

/// One played move and what it left behind.
#[derive(Clone, Copy, Debug)]
pub struct HistoryEntry {
    /// Hash of the position after the move.
    pub hash: u64,
    pub mv: Move,
    /// Whether the move attacked the opponent's king.
    pub gave_check: bool,
    before: Board,
}

impl HistoryEntry {
    /// The side that played this move.
    #[must_use]
    pub fn mover(&self) -> Color {
        self.before.to_move()
    }

    /// The board as it stood before the move.
    #[must_use]
    pub fn board_before(&self) -> &Board {
        &self.before
    }
}

#[derive(Clone, Debug)]
pub struct Position {
    board: Board,
    rules: RuleSet,
    history: Vec<HistoryEntry>,
    root_hash: u64,
}

impl Position {
    /// The opening position under the default rules.
    #[must_use]
    pub fn new() -> Self {
        Self::from_board(Board::new())
    }

    #[must_use]
    pub fn from_board(board: Board) -> Self {
        Position {
            board,
            rules: RuleSet::default(),
            history: Vec::new(),
            root_hash: board.hash(),
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Board::try_from_fen(fen).map(Self::from_board)
    }

    /// Load a new position and clear the history. Rules are kept.
    ///
    /// On error nothing changes.
    pub fn set_fen(&mut self, fen: &str) -> Result<(), FenError> {
        let board = Board::try_from_fen(fen)?;
        self.board = board;
        self.history.clear();
        self.root_hash = board.hash();
        Ok(())
    }

    #[must_use]
    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    pub fn set_rules(&mut self, rules: RuleSet) {
        self.rules = rules;
    }

    #[must_use]
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    #[must_use]
    pub fn to_move(&self) -> Color {
        self.board.to_move()
    }

    #[must_use]
    pub fn hash(&self) -> u64 {
        self.board.hash()
    }

    #[must_use]
    pub fn kings(&self) -> [Option<Square>; 2] {
        self.board.kings()
    }

    #[must_use]
    pub fn repetitions(&self) -> u32 {
        self.board.repetitions()
    }

    #[must_use]
    pub fn cycle_length(&self) -> u32 {
        self.board.cycle_length()
    }

    #[must_use]
    pub fn rule50_ply_left(&self) -> u32 {
        self.board.rule50_ply_left()
    }

    #[must_use]
    pub fn is_check(&self, color: Color) -> bool {
        self.board.is_check(color)
    }

    #[must_use]
    pub fn is_legal(&self, mv: Move) -> bool {
        self.board.is_legal(mv)
    }

    /// Pseudo-legal moves for the side to move.
    #[must_use]
    pub fn movelist(&self) -> MoveList {
        self.board.generate_movelist(self.board.to_move())
    }

    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        self.board.legal_moves()
    }

    #[must_use]
    pub fn to_fen(&self) -> String {
        self.board.to_fen()
    }

    /// Play `mv` and record it.
    ///
    /// Same contract as [`Board::do_move_assume_legal`]: the move is not
    /// validated.
    pub fn do_move_assume_legal(&mut self, mv: Move) {
        let mover = self.board.to_move();
        let mut after = self.board;
        after.do_move_assume_legal(mv);
        let gave_check = after.is_check(mover.opponent());
        self.record_move(mv, after, gave_check);
    }

    /// Record `mv` as played, given the board it produced.
    pub(crate) fn record_move(&mut self, mv: Move, after: Board, gave_check: bool) {
        let before = std::mem::replace(&mut self.board, after);
        self.history.push(HistoryEntry {
            hash: after.hash(),
            mv,
            gave_check,
            before,
        });
        self.update_repetitions();
    }

    /// Copy of this position keeping only the history inside the
    /// repetition window. Moves older than the window cannot be taken back
    /// on the copy.
    #[must_use]
    pub fn branch(&self) -> Position {
        let window = self.history.len().min(self.board.rule50_ply() as usize);
        let start = self.history.len() - window;
        Position {
            board: self.board,
            rules: self.rules,
            history: self.history[start..].to_vec(),
            root_hash: self.hash_at(start),
        }
    }

    /// Parse a move in ICCS or WXF notation and play it.
    pub fn do_textmove(&mut self, text: &str) -> Result<Move, MoveParseError> {
        let mv = self.board.parse_move(text)?;
        self.do_move_assume_legal(mv);
        Ok(mv)
    }

    /// Take back the last move. Returns `None` at the start of the history.
    pub fn undo_move(&mut self) -> Option<Move> {
        let entry = self.history.pop()?;
        self.board = entry.before;
        Some(entry.mv)
    }

    /// Hash of the position reached after `ply` moves of the history.
    fn hash_at(&self, ply: usize) -> u64 {
        match ply {
            0 => self.root_hash,
            _ => self.history[ply - 1].hash,
        }
    }

    fn update_repetitions(&mut self) {
        let current = self.history.len();
        let window = current.min(self.board.rule50_ply() as usize);
        let hash = self.board.hash();

        let mut repetitions = 0;
        let mut cycle = 0;
        for back in (2..=window).step_by(2) {
            if self.hash_at(current - back) == hash {
                repetitions += 1;
                if cycle == 0 {
                    cycle = back as u32;
                }
            }
        }
        self.board.set_repetitions(repetitions, cycle);
    }

    /// Judge the current repetition under this position's rules.
    #[must_use]
    pub fn repetition(&self) -> Verdict {
        Repetition::new(self).judge()
    }

    /// The side that has won, if the game is decided on the board.
    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        if let Some(winner) = self.capturer_of_king() {
            return Some(winner);
        }
        let to_move = self.board.to_move();
        if self.board.legal_moves().is_empty()
            && (self.rules.stalemate_loses || self.board.is_check(to_move))
        {
            return Some(to_move.opponent());
        }
        None
    }

    fn capturer_of_king(&self) -> Option<Color> {
        [Color::Red, Color::Black]
            .into_iter()
            .find(|&color| self.board.king_square(color).is_none())
            .map(Color::opponent)
    }

    /// Whether play has ended by result, non-progress or repetition.
    ///
    /// A side without legal moves always ends the game, whoever the rules
    /// credit with the win.
    #[must_use]
    pub fn is_gameover(&self) -> bool {
        self.capturer_of_king().is_some()
            || self.board.rule50_ply_left() == 0
            || self.repetition() != Verdict::None
            || self.board.legal_moves().is_empty()
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardBuilder, Piece};

    const SHUFFLE: [&str; 4] = ["h0g2", "h9g7", "g2h0", "g7h9"];

    #[test]
    fn test_history_and_undo() {
        let mut pos = Position::new();
        let start = *pos.board();
        pos.do_textmove("h2e2").unwrap();
        pos.do_textmove("C2.5").unwrap();
        assert_eq!(pos.history().len(), 2);
        assert_eq!(pos.history()[0].mover(), Color::Red);
        assert_eq!(pos.history()[1].mover(), Color::Black);
        assert_eq!(pos.history()[1].hash, pos.hash());
        assert_eq!(*pos.history()[0].board_before(), start);

        assert_eq!(pos.undo_move().map(|m| m.to_string()), Some("b7e7".to_string()));
        assert_eq!(pos.undo_move().map(|m| m.to_string()), Some("h2e2".to_string()));
        assert_eq!(pos.undo_move(), None);
        assert_eq!(*pos.board(), start);
    }

    #[test]
    fn test_repetition_counter_and_cycle() {
        let mut pos = Position::new();
        for text in SHUFFLE {
            pos.do_textmove(text).unwrap();
        }
        assert_eq!(pos.hash(), Board::new().hash());
        assert_eq!(pos.repetitions(), 1);
        assert_eq!(pos.cycle_length(), 4);

        for text in SHUFFLE {
            pos.do_textmove(text).unwrap();
        }
        assert_eq!(pos.repetitions(), 2);
        assert_eq!(pos.cycle_length(), 4);
    }

    #[test]
    fn test_capture_cuts_repetition_window() {
        let mut pos = Position::new();
        for text in ["h2e2", "h9g7", "e2e6", "g7h9"] {
            pos.do_textmove(text).unwrap();
        }
        assert_eq!(pos.board().rule50_ply(), 1);
        assert_eq!(pos.repetitions(), 0);
    }

    #[test]
    fn test_branch_keeps_only_the_repetition_window() {
        let mut pos = Position::new();
        for text in ["h2e2", "h9g7", "e2e6", "g7h9"] {
            pos.do_textmove(text).unwrap();
        }
        let mut branch = pos.branch();
        assert_eq!(branch.history().len(), 1);
        assert_eq!(branch.hash(), pos.hash());
        assert_eq!(branch.rules(), pos.rules());

        for _ in 0..2 {
            for text in SHUFFLE {
                pos.do_textmove(text).unwrap();
                branch.do_textmove(text).unwrap();
                assert_eq!(branch.repetitions(), pos.repetitions());
                assert_eq!(branch.cycle_length(), pos.cycle_length());
                assert_eq!(branch.repetition(), pos.repetition());
            }
        }
        assert_eq!(branch.repetitions(), 2);
        assert_eq!(branch.repetition(), Verdict::Draw);
        assert!(branch.is_gameover());
    }

    #[test]
    fn test_undo_restores_repetition_state() {
        let mut pos = Position::new();
        for text in SHUFFLE {
            pos.do_textmove(text).unwrap();
        }
        assert_eq!(pos.repetitions(), 1);
        pos.undo_move();
        assert_eq!(pos.repetitions(), 0);
        assert_eq!(pos.cycle_length(), 0);
    }

    #[test]
    fn test_set_fen_keeps_rules_and_clears_history() {
        let rules = RuleSet {
            repetition_threshold: 3,
            ..RuleSet::default()
        };
        let mut pos = Position::new().with_rules(rules);
        pos.do_textmove("h2e2").unwrap();
        pos.set_fen("4k4/9/9/9/9/9/9/9/9/3K5 b - - 0 1").unwrap();
        assert!(pos.history().is_empty());
        assert_eq!(pos.rules().repetition_threshold, 3);
        assert_eq!(pos.to_move(), Color::Black);

        let fen = pos.to_fen();
        assert!(pos.set_fen("not a fen").is_err());
        assert_eq!(pos.to_fen(), fen);
    }

    #[test]
    fn test_winner_on_checkmate() {
        let board = BoardBuilder::new()
            .piece(Square(0, 4), Color::Red, Piece::King)
            .piece(Square(9, 3), Color::Black, Piece::King)
            .piece(Square(5, 3), Color::Red, Piece::Rook)
            .side_to_move(Color::Black)
            .build();
        let pos = Position::from_board(board);
        assert_eq!(pos.winner(), Some(Color::Red));
        assert!(pos.is_gameover());
    }

    #[test]
    fn test_winner_on_missing_king() {
        let board = BoardBuilder::new()
            .piece(Square(0, 4), Color::Red, Piece::King)
            .side_to_move(Color::Black)
            .build();
        assert_eq!(Position::from_board(board).winner(), Some(Color::Red));
    }

    #[test]
    fn test_stalemate_rule_is_pluggable() {
        // Black king on d9: the rook holds the e-file and the pawn on d7 covers d8.
        let board = BoardBuilder::new()
            .piece(Square(0, 5), Color::Red, Piece::King)
            .piece(Square(9, 3), Color::Black, Piece::King)
            .piece(Square(5, 4), Color::Red, Piece::Rook)
            .piece(Square(7, 3), Color::Red, Piece::Pawn)
            .side_to_move(Color::Black)
            .build();
        assert!(!board.is_check(Color::Black));
        assert!(board.legal_moves().is_empty());

        let pos = Position::from_board(board);
        assert_eq!(pos.winner(), Some(Color::Red));

        let lenient = pos.with_rules(RuleSet {
            stalemate_loses: false,
            ..RuleSet::default()
        });
        assert_eq!(lenient.winner(), None);
        assert!(lenient.is_gameover());
    }

    #[test]
    fn test_start_is_not_gameover() {
        let pos = Position::default();
        assert_eq!(pos.winner(), None);
        assert!(!pos.is_gameover());
        assert_eq!(pos.movelist().len(), 44);
    }
}
