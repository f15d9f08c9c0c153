//! K-greedy search.
//!
//! # Algorithm
//!
//! 1. Score every pair of still-unpaired members
//! 2. Take the K highest-scoring pairs (ties in position order)
//! 3. For each, pair it and recurse on the remaining members
//! 4. When at most one member is left, score the complete matching
//! 5. Keep the best complete matching, first found on ties
//!
//! With `n` members (even) this evaluates `K^(n/2 - 1)` matchings.

use super::config::LookaheadConfig;
use crate::error::Result;
use crate::matching::Matching;
use crate::scoring::ScoreTable;
use log::debug;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Result of a K-greedy run.
#[derive(Debug, Clone)]
pub struct LookaheadResult<'t> {
    /// The best matching found, scored.
    pub matching: Matching<'t>,
    /// Number of complete matchings evaluated.
    pub evaluated: u64,
}

/// K-greedy matcher.
pub struct LookaheadRunner;

impl LookaheadRunner {
    /// Runs the K-greedy search.
    pub fn run<'t>(
        table: &'t ScoreTable<'t>,
        config: &LookaheadConfig,
    ) -> Result<LookaheadResult<'t>> {
        config.validate()?;
        let k = config.branching;
        let root = Matching::new(table);

        let search = if root.is_complete() {
            let mut search = Search::default();
            search.leaf(&root);
            search
        } else {
            let candidates = top_pairs(&root, k);
            let branches = explore_branches(&root, k, &candidates, config.parallel);
            branches
                .into_iter()
                .fold(Search::default(), |acc, branch| acc.merge(branch))
        };

        let pairs = search.best.map(|(_, pairs)| pairs).unwrap_or_default();
        let mut matching = Matching::from_pairs(table, &pairs)?;
        let summary = matching.finalize();
        debug!(
            "lookahead(k={}): {} members, {} matchings, score {}",
            k,
            table.len(),
            search.evaluated,
            summary.total
        );

        Ok(LookaheadResult {
            matching,
            evaluated: search.evaluated,
        })
    }
}

/// Best complete matching seen by one branch of the search.
#[derive(Debug, Default)]
struct Search {
    best: Option<(u32, Vec<(usize, usize)>)>,
    evaluated: u64,
}

impl Search {
    fn leaf(&mut self, m: &Matching<'_>) {
        self.evaluated += 1;
        let score = m.score();
        if self.best.as_ref().is_none_or(|(b, _)| score > *b) {
            self.best = Some((score, m.all_pairs().collect()));
        }
    }

    fn explore(&mut self, m: &mut Matching<'_>, k: usize) {
        if m.is_complete() {
            self.leaf(m);
            return;
        }
        for (a, b) in top_pairs(m, k) {
            m.link(a, b);
            self.explore(m, k);
            m.unlink(a, b);
        }
    }

    /// Combines with a later branch; an earlier best wins ties.
    fn merge(mut self, later: Search) -> Search {
        self.evaluated += later.evaluated;
        if let Some((score, pairs)) = later.best {
            if self.best.as_ref().is_none_or(|(b, _)| score > *b) {
                self.best = Some((score, pairs));
            }
        }
        self
    }
}

/// The `k` best pairs among unpaired members, highest score first and
/// position order on ties.
fn top_pairs(m: &Matching<'_>, k: usize) -> Vec<(usize, usize)> {
    let open = m.unpaired().sorted();
    let mut scored = Vec::with_capacity(open.len() * open.len().saturating_sub(1) / 2);
    for (x, &i) in open.iter().enumerate() {
        for &j in &open[x + 1..] {
            scored.push((m.pair_score(i, j), i, j));
        }
    }
    // stable: equal scores keep enumeration order
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.truncate(k);
    scored.into_iter().map(|(_, i, j)| (i, j)).collect()
}

fn explore_branches(
    root: &Matching<'_>,
    k: usize,
    candidates: &[(usize, usize)],
    parallel: bool,
) -> Vec<Search> {
    let branch = |&(a, b): &(usize, usize)| {
        let mut m = root.clone();
        m.link(a, b);
        let mut search = Search::default();
        search.explore(&mut m, k);
        search
    };

    #[cfg(feature = "parallel")]
    let branches = if parallel {
        candidates.par_iter().map(branch).collect()
    } else {
        candidates.iter().map(branch).collect()
    };

    #[cfg(not(feature = "parallel"))]
    let branches = {
        let _ = parallel;
        candidates.iter().map(branch).collect()
    };

    branches
}
