//! Entry points for callers outside the engine.
//!
//! A caller supplies a validated [`Roster`] and an [`Algorithm`] and gets
//! back a [`MatchReport`] keyed by identity. The score table is built
//! once per call; [`compare`] reuses it across several algorithms.

use crate::error::Result;
use crate::exhaustive::{ExhaustiveConfig, ExhaustiveRunner};
use crate::greedy::GreedyRunner;
use crate::local_search::{LocalSearchConfig, LocalSearchRunner};
use crate::lookahead::{LookaheadConfig, LookaheadRunner};
use crate::matching::Matching;
use crate::roster::Roster;
use crate::scoring::ScoreTable;

/// A matching strategy and its configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "name", content = "config", rename_all = "snake_case")
)]
pub enum Algorithm {
    /// Every matching; refused above the configured roster size.
    Exhaustive(ExhaustiveConfig),
    /// Best partner for each member in position order.
    Greedy,
    /// Branch on the K best pairs at each step.
    Lookahead(LookaheadConfig),
    /// Random start plus pair-swap hill climbing.
    LocalSearch(LocalSearchConfig),
}

impl Algorithm {
    /// Short name used in reports.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Exhaustive(_) => "exhaustive",
            Algorithm::Greedy => "greedy",
            Algorithm::Lookahead(_) => "lookahead",
            Algorithm::LocalSearch(_) => "local_search",
        }
    }

    /// Exhaustive search when the roster is within its default limit,
    /// K-greedy otherwise.
    pub fn for_roster_size(n: usize) -> Self {
        let exhaustive = ExhaustiveConfig::default();
        if n <= exhaustive.max_roster_size {
            Algorithm::Exhaustive(exhaustive)
        } else {
            Algorithm::Lookahead(LookaheadConfig::default())
        }
    }

    /// Runs this algorithm against a prebuilt table.
    pub fn run<'t>(&self, table: &'t ScoreTable<'t>) -> Result<Matching<'t>> {
        let matching = match self {
            Algorithm::Exhaustive(config) => ExhaustiveRunner::run(table, config)?.matching,
            Algorithm::Greedy => GreedyRunner::run(table).matching,
            Algorithm::Lookahead(config) => LookaheadRunner::run(table, config)?.matching,
            Algorithm::LocalSearch(config) => LocalSearchRunner::run(table, config)?.matching,
        };
        Ok(matching)
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One pair in a [`MatchReport`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PairReport {
    pub first: String,
    pub second: String,
    pub score: u32,
}

/// Outcome of one run, keyed by identity.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchReport {
    /// Algorithm name, see [`Algorithm::name`].
    pub algorithm: String,
    /// Pairs in position order of their first member.
    pub pairs: Vec<PairReport>,
    /// Identity of the unpaired member of an odd roster.
    pub leftover: Option<String>,
    /// Sum of pair scores plus the lowest pair score again.
    pub total_score: u32,
    /// Score of the weakest pair.
    pub lowest_score: Option<u32>,
}

impl MatchReport {
    /// Converts a matching into identity form.
    pub fn from_matching(algorithm: &str, matching: &Matching<'_>) -> Self {
        let roster = matching.table().roster();
        let summary = matching.summary();
        let pairs = matching
            .all_pairs()
            .map(|(i, j)| PairReport {
                first: roster[i].identity.clone(),
                second: roster[j].identity.clone(),
                score: matching.pair_score(i, j),
            })
            .collect();
        MatchReport {
            algorithm: algorithm.to_string(),
            pairs,
            leftover: matching.leftover().map(|i| roster[i].identity.clone()),
            total_score: summary.total,
            lowest_score: summary.lowest_score(),
        }
    }
}

impl std::fmt::Display for MatchReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}:", self.algorithm)?;
        for p in &self.pairs {
            writeln!(f, "{}\t{} with {}", p.score, p.first, p.second)?;
        }
        if let Some(solo) = &self.leftover {
            writeln!(f, "unmatched:  {solo}")?;
        }
        write!(f, "score: {}", self.total_score)
    }
}

/// Matches `roster` with `algorithm`.
pub fn solve(roster: &Roster, algorithm: &Algorithm) -> Result<MatchReport> {
    let table = ScoreTable::build(roster);
    let matching = algorithm.run(&table)?;
    Ok(MatchReport::from_matching(algorithm.name(), &matching))
}

/// Runs several algorithms on one roster, sharing one score table.
///
/// Fails on the first algorithm that fails (e.g. exhaustive search on a
/// roster above its limit).
pub fn compare(roster: &Roster, algorithms: &[Algorithm]) -> Result<Vec<MatchReport>> {
    let table = ScoreTable::build(roster);
    algorithms
        .iter()
        .map(|algorithm| {
            let matching = algorithm.run(&table)?;
            Ok(MatchReport::from_matching(algorithm.name(), &matching))
        })
        .collect()
}
