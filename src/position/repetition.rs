//! Adjudication of repeated positions.

use super::Position;
use crate::board::Color;

/// Outcome of judging a repetition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Not repeated often enough to judge.
    None,
    Draw,
    /// The given side forfeits, e.g. by perpetual check.
    Loss(Color),
    /// The cycle reaches back beyond the recorded history.
    Unknown,
}

/// Judges the current position of a game against its repetition rules.
pub struct Repetition<'a> {
    position: &'a Position,
}

impl<'a> Repetition<'a> {
    #[must_use]
    pub fn new(position: &'a Position) -> Self {
        Repetition { position }
    }

    #[must_use]
    pub fn judge(&self) -> Verdict {
        let board = self.position.board();
        let rules = self.position.rules();
        if board.repetitions() < rules.repetition_threshold {
            return Verdict::None;
        }

        let cycle = board.cycle_length() as usize;
        let history = self.position.history();
        if cycle == 0 || cycle > history.len() {
            return Verdict::Unknown;
        }
        if !rules.perpetual_check_loses {
            return Verdict::Draw;
        }

        let window = &history[history.len() - cycle..];
        let always_checks = |color: Color| {
            window
                .iter()
                .filter(|entry| entry.mover() == color)
                .all(|entry| entry.gave_check)
        };
        match (always_checks(Color::Red), always_checks(Color::Black)) {
            (true, false) => Verdict::Loss(Color::Red),
            (false, true) => Verdict::Loss(Color::Black),
            _ => Verdict::Draw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardBuilder;
    use crate::position::RuleSet;

    const CHASE_FEN: &str = "9/4k4/9/9/9/9/9/9/R8/3K5 w - - 0 1";
    const CHASE: [&str; 9] = [
        "a1a8", "e8e7", "a8a7", "e7e8", "a7a8", "e8e7", "a8a7", "e7e8", "a7a8",
    ];

    fn play(pos: &mut Position, moves: &[&str]) {
        for text in moves {
            pos.do_textmove(text).unwrap();
        }
    }

    #[test]
    fn test_below_threshold_is_none() {
        let mut pos = Position::from_fen(CHASE_FEN).unwrap();
        play(&mut pos, &CHASE[..5]);
        assert_eq!(pos.repetitions(), 1);
        assert_eq!(pos.repetition(), Verdict::None);
        assert!(!pos.is_gameover());
    }

    #[test]
    fn test_perpetual_check_loses() {
        let mut pos = Position::from_fen(CHASE_FEN).unwrap();
        play(&mut pos, &CHASE);
        assert_eq!(pos.repetitions(), 2);
        assert_eq!(pos.cycle_length(), 4);
        assert!(pos.history().last().is_some_and(|e| e.gave_check));
        assert_eq!(Repetition::new(&pos).judge(), Verdict::Loss(Color::Red));
        assert!(pos.is_gameover());
    }

    #[test]
    fn test_perpetual_check_draws_when_allowed() {
        let rules = RuleSet {
            perpetual_check_loses: false,
            ..RuleSet::default()
        };
        let mut pos = Position::from_fen(CHASE_FEN).unwrap().with_rules(rules);
        play(&mut pos, &CHASE);
        assert_eq!(pos.repetition(), Verdict::Draw);

        pos.set_rules(RuleSet::default());
        assert_eq!(pos.repetition(), Verdict::Loss(Color::Red));
    }

    #[test]
    fn test_threshold_comes_from_rules() {
        let rules = RuleSet {
            repetition_threshold: 3,
            ..RuleSet::default()
        };
        let mut pos = Position::from_fen(CHASE_FEN).unwrap().with_rules(rules);
        play(&mut pos, &CHASE);
        assert_eq!(pos.repetition(), Verdict::None);
    }

    #[test]
    fn test_quiet_shuffle_is_draw() {
        let mut pos = Position::new();
        for _ in 0..2 {
            play(&mut pos, &["h0g2", "h9g7", "g2h0", "g7h9"]);
        }
        assert_eq!(pos.repetition(), Verdict::Draw);
    }

    #[test]
    fn test_cycle_beyond_history_is_unknown() {
        let mut board = BoardBuilder::starting_position().build();
        board.set_repetitions(2, 4);
        let pos = Position::from_board(board);
        assert_eq!(pos.repetition(), Verdict::Unknown);
    }
}
