//! Matching state shared by all matchers.
//!
//! A [`Matching`] tracks which roster positions are paired, which are
//! still unpaired and the aggregate score. The aggregate is the sum of
//! pair scores plus the weakest pair score counted a second time.
//!
//! # Lifecycle
//!
//! `Empty -> Partial -> Complete -> Scored`. Adding or removing a pair
//! from a scored matching drops the cached score and re-enters `Partial`.

mod score;
mod set;
mod state;

pub use score::{aggregate, summarize, ScoreSummary};
pub use set::PositionSet;
pub use state::{Matching, MatchingPhase, MatchingReport, Pairs};
