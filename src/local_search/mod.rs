//! Randomised local search (hill climbing).
//!
//! Starts from a uniformly random matching and repeatedly applies the
//! first pair swap that strictly improves the two affected pairs, until
//! no swap does. The local optimum reached depends on the start, so
//! several independent starts can be run and the best kept.
//!
//! Moves are judged on the sum of pair scores; the lowest-pair bonus of
//! the aggregate score is only used to pick between starts.

mod config;
mod runner;

pub use config::LocalSearchConfig;
pub use runner::{Climb, LocalSearchResult, LocalSearchRunner};
