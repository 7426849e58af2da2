#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tuning for the forced-mate prover's adaptive horizon.
///
/// A branch is cut once `depth > max_depth + depth * factor / remaining`,
/// where `remaining` counts the sibling moves still waiting along the line.
/// Few pending siblings widen the horizon.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MateSearchParams {
    pub max_depth: usize,
    pub factor: f32,
}

impl Default for MateSearchParams {
    fn default() -> Self {
        MateSearchParams {
            max_depth: 16,
            factor: 50.0,
        }
    }
}

impl MateSearchParams {
    /// Horizon that only proves mates where the first check leaves no reply.
    #[must_use]
    pub fn mate_in_one() -> Self {
        MateSearchParams {
            max_depth: 2,
            factor: 0.0,
        }
    }

    /// Deepest ply a line may reach at `depth` with `remaining` siblings pending.
    #[must_use]
    pub fn horizon(&self, depth: usize, remaining: usize) -> usize {
        let bound = depth as f32 * self.factor / remaining.max(1) as f32;
        self.max_depth + bound as usize
    }
}
