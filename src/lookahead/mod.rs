//! Bounded-lookahead (K-greedy) matching.
//!
//! Sits between [`greedy`](crate::greedy) and
//! [`exhaustive`](crate::exhaustive): at each step only the K best
//! remaining pairs are branched on, so the search visits `K^(n/2 - 1)`
//! matchings instead of the full double factorial. K = 2 handles rosters
//! of 30 (16,384 matchings) easily.

mod config;
mod runner;

pub use config::LookaheadConfig;
pub use runner::{LookaheadResult, LookaheadRunner};
