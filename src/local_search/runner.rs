//! Hill climbing with pair swaps.
//!
//! # Algorithm
//!
//! 1. Pair everyone uniformly at random
//! 2. Scan every two pairs `(a,b)`, `(c,d)` in position order and compare
//!    `s(a,b)+s(c,d)` with `s(a,c)+s(b,d)` and `s(a,d)+s(b,c)`
//! 3. On the first strictly better re-pairing, swap and rescan
//! 4. Stop when a full scan finds nothing: a local optimum
//!
//! Every accepted swap strictly raises the sum of pair scores, so the
//! climb terminates. The result depends on the random start.

use super::config::LocalSearchConfig;
use crate::error::Result;
use crate::matching::Matching;
use crate::scoring::ScoreTable;
use log::{debug, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Result of a local search run.
#[derive(Debug, Clone)]
pub struct LocalSearchResult<'t> {
    /// The best local optimum found, scored.
    pub matching: Matching<'t>,

    /// Statistics of the climb that produced `matching`.
    pub climb: Climb,

    /// Index of the start that produced `matching`.
    pub best_restart: usize,

    /// Accepted swaps summed over all starts.
    pub total_swaps: usize,
}

/// Statistics of one hill climb.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Climb {
    /// Number of accepted swaps.
    pub swaps: usize,

    /// Sum of pair scores at the start and after each swap. Strictly
    /// increasing.
    pub history: Vec<u32>,

    /// False if the swap budget ran out before reaching a local optimum.
    pub converged: bool,
}

/// A re-pairing of two existing pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Swap {
    remove: [(usize, usize); 2],
    add: [(usize, usize); 2],
}

/// Randomised hill climber.
pub struct LocalSearchRunner;

impl LocalSearchRunner {
    /// Runs `config.restarts` random starts and keeps the best optimum.
    ///
    /// Ties between starts keep the earliest.
    pub fn run<'t>(
        table: &'t ScoreTable<'t>,
        config: &LocalSearchConfig,
    ) -> Result<LocalSearchResult<'t>> {
        config.validate()?;
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let climb_once = |rng: &mut StdRng| {
            let mut matching = Matching::new(table);
            matching.pair_remaining_randomly(rng);
            let climb = Self::improve(&mut matching, config.max_swaps);
            (matching, climb)
        };

        let (mut matching, mut climb) = climb_once(&mut rng);
        let mut best_restart = 0;
        let mut total_swaps = climb.swaps;

        for restart in 1..config.restarts {
            let (candidate, candidate_climb) = climb_once(&mut rng);
            total_swaps += candidate_climb.swaps;
            trace!(
                "local search: start {} reached {} after {} swaps",
                restart,
                candidate.score(),
                candidate_climb.swaps
            );
            if candidate.score() > matching.score() {
                matching = candidate;
                climb = candidate_climb;
                best_restart = restart;
            }
        }

        let summary = matching.finalize();
        debug!(
            "local search: {} members, {} starts, {} swaps, score {}",
            table.len(),
            config.restarts,
            total_swaps,
            summary.total
        );

        Ok(LocalSearchResult {
            matching,
            climb,
            best_restart,
            total_swaps,
        })
    }

    /// Climbs from an existing matching until no single swap improves it
    /// or `max_swaps` swaps were made (0 = no limit).
    pub fn improve(matching: &mut Matching<'_>, max_swaps: usize) -> Climb {
        let mut climb = Climb {
            history: vec![matching.pair_sum()],
            ..Climb::default()
        };
        loop {
            if max_swaps > 0 && climb.swaps >= max_swaps {
                return climb;
            }
            let Some(swap) = find_improving_swap(matching) else {
                climb.converged = true;
                return climb;
            };
            for (i, j) in swap.remove {
                matching.unlink(i, j);
            }
            for (i, j) in swap.add {
                matching.link(i, j);
            }
            climb.swaps += 1;
            climb.history.push(matching.pair_sum());
            trace!("swap {:?} -> {:?}", swap.remove, swap.add);
        }
    }
}

/// First swap, in pair order, that strictly raises the two pairs' sum.
///
/// When both re-pairings improve, `(a,c),(b,d)` is taken only if it is
/// strictly better than `(a,d),(b,c)`.
fn find_improving_swap(m: &Matching<'_>) -> Option<Swap> {
    let pairs: Vec<(usize, usize)> = m.all_pairs().collect();
    for (x, &(a, b)) in pairs.iter().enumerate() {
        for &(c, d) in &pairs[x + 1..] {
            let current = m.pair_score(a, b) + m.pair_score(c, d);
            let crossed = m.pair_score(a, c) + m.pair_score(b, d);
            let nested = m.pair_score(a, d) + m.pair_score(b, c);
            if current >= crossed && current >= nested {
                continue;
            }
            let add = if crossed > nested {
                [(a, c), (b, d)]
            } else {
                [(a, d), (b, c)]
            };
            return Some(Swap {
                remove: [(a, b), (c, d)],
                add,
            });
        }
    }
    None
}
