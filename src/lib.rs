//! Pair matching on weekly availability overlap.
//!
//! Each member of a roster carries a week of half-hour availability
//! (7 days of 30 slots from 09:00 to 23:30, stored as bitmasks). Two
//! members score by how many adjacent free slot pairs they share. The
//! engine splits the roster into disjoint pairs (one member is left over
//! when the roster is odd) and maximises the sum of pair scores plus the
//! weakest pair's score again.
//!
//! - **Availability**: day bitmasks, weekday names and slot labels.
//! - **Scoring**: `day_score`, `overlap_score` and the precomputed
//!   [`ScoreTable`].
//! - **Matching**: the in-progress pairing state shared by all algorithms.
//! - **Exhaustive**: enumerates every matching; exact but refused above
//!   a configurable roster size.
//! - **Greedy**: best partner for each member in position order.
//! - **Lookahead**: K-greedy branching on the K best pairs per step,
//!   optionally parallel with rayon.
//! - **Local search**: random start plus pair-swap hill climbing with
//!   restarts.
//!
//! # Example
//!
//! ```
//! use u_pairing::{solve, Algorithm, Availability, Person, Roster};
//!
//! let week = |sun: u32| Availability::new([sun, 0, 0, 0, 0, 0, 0]).unwrap();
//! let roster = Roster::new(vec![
//!     Person::new("a", "Ann", week(0b1111)),
//!     Person::new("b", "Bo", week(0b1111)),
//!     Person::new("c", "Cy", week(0b11 << 10)),
//!     Person::new("d", "Di", week(0b11 << 10)),
//! ])
//! .unwrap();
//!
//! let report = solve(&roster, &Algorithm::Greedy).unwrap();
//! assert_eq!(report.pairs.len(), 2);
//! assert_eq!(report.total_score, 3 + 1 + 1);
//! ```

pub mod availability;
pub mod error;
pub mod exhaustive;
pub mod greedy;
pub mod local_search;
pub mod lookahead;
pub mod matching;
pub mod roster;
pub mod scoring;
pub mod solve;

#[cfg(test)]
mod fixtures;

pub use availability::{Availability, Weekday};
pub use error::{MatchError, Result};
pub use matching::Matching;
pub use roster::{Person, Roster};
pub use scoring::ScoreTable;
pub use solve::{compare, solve, Algorithm, MatchReport, PairReport};
