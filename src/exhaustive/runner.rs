//! Exhaustive search over every matching.

use super::config::ExhaustiveConfig;
use super::enumerate::{match_count, partitions};
use crate::error::{MatchError, Result};
use crate::matching::{aggregate, Matching};
use crate::scoring::ScoreTable;
use log::debug;

/// Result of an exhaustive run.
#[derive(Debug, Clone)]
pub struct ExhaustiveResult<'t> {
    /// The best matching, scored.
    pub matching: Matching<'t>,
    /// Number of complete matchings evaluated.
    pub evaluated: u64,
}

/// Evaluates every matching and keeps the best.
pub struct ExhaustiveRunner;

impl ExhaustiveRunner {
    /// Runs the exhaustive search.
    ///
    /// Ties keep the first maximum in enumeration order. Rosters above
    /// `config.max_roster_size` are refused before any work is done.
    pub fn run<'t>(
        table: &'t ScoreTable<'t>,
        config: &ExhaustiveConfig,
    ) -> Result<ExhaustiveResult<'t>> {
        config.validate()?;
        let n = table.len();
        if n > config.max_roster_size {
            return Err(MatchError::SearchSpaceTooLarge {
                roster_size: n,
                matchings: match_count(n).unwrap_or(u128::MAX),
                limit: config.max_roster_size,
            });
        }
        debug!(
            "exhaustive: {} members, {} matchings",
            n,
            match_count(n).unwrap_or(u128::MAX)
        );

        let mut best: Option<(u32, Vec<(usize, usize)>)> = None;
        let mut evaluated = 0u64;
        for partition in partitions(n) {
            evaluated += 1;
            let score = aggregate(partition.pairs.iter().map(|&(i, j)| table.get(i, j)));
            if best.as_ref().is_none_or(|(b, _)| score > *b) {
                best = Some((score, partition.pairs));
            }
        }

        let pairs = best.map(|(_, pairs)| pairs).unwrap_or_default();
        let mut matching = Matching::from_pairs(table, &pairs)?;
        let summary = matching.finalize();
        debug!("exhaustive: best score {} after {} matchings", summary.total, evaluated);

        Ok(ExhaustiveResult {
            matching,
            evaluated,
        })
    }
}
