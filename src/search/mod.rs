//! Tactical search.
//!
//! Only a forced-mate prover lives here: it alternates an attacker that
//! must check on every move with a defender that must escape, inside a
//! horizon that adapts to how many alternatives are still pending.

mod forced_mate;
mod params;

pub use forced_mate::ForcedCheckmate;
pub use params::MateSearchParams;
