//! Greedy matching.
//!
//! Takes the lowest unpaired position and pairs it with whichever
//! unpaired member scores highest with it, then repeats. Early pairings
//! are never revisited, so the result can be far from optimal; it is
//! O(n^2) table lookups.

use crate::matching::Matching;
use crate::scoring::ScoreTable;
use log::debug;

/// Result of a greedy run.
#[derive(Debug, Clone)]
pub struct GreedyResult<'t> {
    /// The greedy matching, scored.
    pub matching: Matching<'t>,
}

/// Greedy matcher.
pub struct GreedyRunner;

impl GreedyRunner {
    /// Runs the greedy matcher. Ties go to the lowest partner position.
    pub fn run<'t>(table: &'t ScoreTable<'t>) -> GreedyResult<'t> {
        let n = table.len();
        let mut matching = Matching::new(table);

        for anchor in 0..n {
            if !matching.is_unpaired(anchor) {
                continue;
            }
            let mut best: Option<(usize, u32)> = None;
            for other in (anchor + 1)..n {
                if !matching.is_unpaired(other) {
                    continue;
                }
                let s = table.get(anchor, other);
                if best.is_none_or(|(_, b)| s > b) {
                    best = Some((other, s));
                }
            }
            match best {
                Some((partner, _)) => matching.link(anchor, partner),
                // anchor is the last unpaired member
                None => break,
            }
        }

        let summary = matching.finalize();
        debug!("greedy: {} members, score {}", n, summary.total);
        GreedyResult { matching }
    }
}
