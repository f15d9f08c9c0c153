//! Exhaustive matching.
//!
//! Enumerates every way to split the roster into pairs (plus one
//! leftover for odd rosters) and keeps the highest aggregate score. The
//! number of matchings grows as a double factorial, see [`match_count`],
//! so the runner refuses rosters above a configured size instead of
//! running unbounded.

mod config;
mod enumerate;
mod runner;

pub use config::{ExhaustiveConfig, MAX_EXHAUSTIVE_ROSTER};
pub use enumerate::{match_count, partitions, Partition, Partitions};
pub use runner::{ExhaustiveResult, ExhaustiveRunner};
