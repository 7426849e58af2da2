//! Evaluator boundary.
//!
//! A scorer maps a position to a move policy and a value. The crate ships
//! only a material-count scorer; network evaluators and their caches live
//! outside and plug in through [`Evaluator`]. [`Position::hash`] is the key
//! to cache results under.

use crate::board::Move;
use crate::position::Position;

/// Material difference that maps to a value of about 0.76.
const MATERIAL_SCALE: f32 = 1000.0;

/// Output of an evaluator.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Evaluation {
    /// Prior weight for each legal move.
    pub policy: Vec<(Move, f32)>,
    /// Expected result for the side to move, in `[-1, 1]`.
    pub value: f32,
}

pub trait Evaluator {
    fn evaluate(&mut self, position: &Position) -> Evaluation;
}

/// Uniform policy and a tanh-squashed material balance.
#[derive(Clone, Copy, Debug, Default)]
pub struct MaterialEvaluator;

impl Evaluator for MaterialEvaluator {
    fn evaluate(&mut self, position: &Position) -> Evaluation {
        let board = position.board();
        let us = board.to_move();

        let moves = board.legal_moves();
        let weight = 1.0 / moves.len().max(1) as f32;
        let policy = moves.iter().map(|&mv| (mv, weight)).collect();

        let balance = board.material(us) - board.material(us.opponent());
        Evaluation {
            policy,
            value: (balance as f32 / MATERIAL_SCALE).tanh(),
        }
    }
}
