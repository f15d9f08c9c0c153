//! Mutable pairing state over a fixed roster.

use super::score::{summarize, ScoreSummary};
use super::set::PositionSet;
use crate::error::{MatchError, Result};
use crate::scoring::ScoreTable;
use rand::Rng;

/// Lifecycle of a [`Matching`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchingPhase {
    /// No pairs yet.
    Empty,
    /// Some pairs, more than one member still unpaired.
    Partial,
    /// At most one member unpaired, score not computed.
    Complete,
    /// Complete and the cached score is current.
    Scored,
}

/// Which members are paired with whom, plus the cached score.
///
/// The pairing relation is symmetric, each position has at most one
/// partner, and the unpaired set is always the complement of the paired
/// positions. Any `add_pair`/`remove_pair` drops the cached score.
///
/// A matching borrows the [`ScoreTable`] it was created for. Cloning is
/// cheap enough to give each parallel branch its own copy.
#[derive(Debug, Clone)]
pub struct Matching<'t> {
    table: &'t ScoreTable<'t>,
    partner: Vec<Option<usize>>,
    unpaired: PositionSet,
    pair_count: usize,
    cached: Option<ScoreSummary>,
}

impl<'t> Matching<'t> {
    /// An empty matching: every position unpaired.
    pub fn new(table: &'t ScoreTable<'t>) -> Self {
        let n = table.len();
        Self {
            table,
            partner: vec![None; n],
            unpaired: PositionSet::full(n),
            pair_count: 0,
            cached: None,
        }
    }

    /// Builds a matching from explicit position pairs.
    pub fn from_pairs(table: &'t ScoreTable<'t>, pairs: &[(usize, usize)]) -> Result<Self> {
        let mut m = Self::new(table);
        for &(i, j) in pairs {
            m.add_pair(i, j)?;
        }
        Ok(m)
    }

    /// The score table this matching reads from.
    pub fn table(&self) -> &'t ScoreTable<'t> {
        self.table
    }

    /// Number of roster positions.
    pub fn len(&self) -> usize {
        self.partner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.partner.is_empty()
    }

    fn check(&self, position: usize) -> Result<()> {
        if position >= self.partner.len() {
            return Err(MatchError::PositionOutOfRange {
                position,
                len: self.partner.len(),
            });
        }
        Ok(())
    }

    /// Pairs two currently unpaired positions.
    pub fn add_pair(&mut self, i: usize, j: usize) -> Result<()> {
        self.check(i)?;
        self.check(j)?;
        if i == j {
            return Err(MatchError::SelfPair(i));
        }
        if self.partner[i].is_some() {
            return Err(MatchError::AlreadyPaired(i));
        }
        if self.partner[j].is_some() {
            return Err(MatchError::AlreadyPaired(j));
        }
        self.link(i, j);
        Ok(())
    }

    /// Splits a pair, returning both positions to the unpaired set.
    pub fn remove_pair(&mut self, i: usize, j: usize) -> Result<()> {
        self.check(i)?;
        self.check(j)?;
        if self.partner[i] != Some(j) {
            return Err(MatchError::NotPaired(i, j));
        }
        self.unlink(i, j);
        Ok(())
    }

    /// Partner of `position`, if paired.
    pub fn partner(&self, position: usize) -> Option<usize> {
        self.partner.get(position).copied().flatten()
    }

    pub fn is_unpaired(&self, position: usize) -> bool {
        self.unpaired.contains(position)
    }

    /// Unpaired positions (internal order, not sorted).
    pub fn unpaired(&self) -> &PositionSet {
        &self.unpaired
    }

    /// Number of pairs.
    pub fn pair_count(&self) -> usize {
        self.pair_count
    }

    /// Pairs `(i, j)` with `i < j`, in position order. Each call starts a
    /// fresh enumeration.
    pub fn all_pairs(&self) -> Pairs<'_> {
        Pairs {
            partner: &self.partner,
            next: 0,
        }
    }

    /// Whether at most one member is left unpaired.
    pub fn is_complete(&self) -> bool {
        self.unpaired.len() <= 1
    }

    /// The single leftover of a complete odd matching.
    pub fn leftover(&self) -> Option<usize> {
        if self.unpaired.len() == 1 {
            self.unpaired.nth(0)
        } else {
            None
        }
    }

    pub fn phase(&self) -> MatchingPhase {
        if self.cached.is_some() {
            MatchingPhase::Scored
        } else if self.is_complete() {
            MatchingPhase::Complete
        } else if self.pair_count == 0 {
            MatchingPhase::Empty
        } else {
            MatchingPhase::Partial
        }
    }

    /// Pair score for positions `i` and `j`.
    #[inline]
    pub fn pair_score(&self, i: usize, j: usize) -> u32 {
        self.table.get(i, j)
    }

    /// Computes the score breakdown without caching it.
    pub fn summary(&self) -> ScoreSummary {
        if let Some(cached) = self.cached {
            return cached;
        }
        summarize(self.all_pairs().map(|(i, j)| (i, j, self.table.get(i, j))))
    }

    /// Aggregate score: pair scores plus the lowest one again.
    pub fn score(&self) -> u32 {
        self.summary().total
    }

    /// Sum of pair scores without the lowest-pair bonus.
    pub fn pair_sum(&self) -> u32 {
        self.all_pairs().map(|(i, j)| self.table.get(i, j)).sum()
    }

    /// Computes and caches the score, entering [`MatchingPhase::Scored`]
    /// once the matching is complete.
    pub fn finalize(&mut self) -> ScoreSummary {
        let summary = self.summary();
        if self.is_complete() {
            self.cached = Some(summary);
        }
        summary
    }

    /// The cached score, if current.
    pub fn cached_score(&self) -> Option<ScoreSummary> {
        self.cached
    }

    /// Pairs the remaining unpaired members uniformly at random.
    ///
    /// Each step draws a row from the `m` unpaired members and a column
    /// from the other `m - 1`: a column equal to the row is remapped to
    /// the last index, which the column draw can never produce.
    pub fn pair_remaining_randomly<R: Rng>(&mut self, rng: &mut R) {
        while self.unpaired.len() > 1 {
            let m = self.unpaired.len();
            let row = rng.random_range(0..m);
            let mut col = rng.random_range(0..m - 1);
            if col == row {
                col = m - 1;
            }
            if let (Some(a), Some(b)) = (self.unpaired.nth(row), self.unpaired.nth(col)) {
                self.link(a, b);
            }
        }
    }

    /// Pairs two positions the caller knows to be distinct and unpaired.
    pub(crate) fn link(&mut self, i: usize, j: usize) {
        debug_assert!(i != j && self.is_unpaired(i) && self.is_unpaired(j));
        self.partner[i] = Some(j);
        self.partner[j] = Some(i);
        self.unpaired.remove(i);
        self.unpaired.remove(j);
        self.pair_count += 1;
        self.cached = None;
    }

    /// Splits a pair the caller knows to exist.
    pub(crate) fn unlink(&mut self, i: usize, j: usize) {
        debug_assert!(self.partner[i] == Some(j));
        self.partner[i] = None;
        self.partner[j] = None;
        self.unpaired.insert(i);
        self.unpaired.insert(j);
        self.pair_count -= 1;
        self.cached = None;
    }

    /// Human-readable listing of pairs, leftover and score.
    pub fn report(&self) -> MatchingReport<'_, 't> {
        MatchingReport { matching: self }
    }
}

/// Iterator over the pairs of a [`Matching`], see [`Matching::all_pairs`].
pub struct Pairs<'a> {
    partner: &'a [Option<usize>],
    next: usize,
}

impl Iterator for Pairs<'_> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<(usize, usize)> {
        while self.next < self.partner.len() {
            let i = self.next;
            self.next += 1;
            if let Some(j) = self.partner[i] {
                if i < j {
                    return Some((i, j));
                }
            }
        }
        None
    }
}

/// Printable form of a [`Matching`]: one line per pair with its score,
/// the weakest pair flagged `**`, then leftover, total and lowest score.
pub struct MatchingReport<'a, 't> {
    matching: &'a Matching<'t>,
}

impl std::fmt::Display for MatchingReport<'_, '_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let m = self.matching;
        let roster = m.table.roster();
        let summary = m.summary();
        let lowest = summary.lowest.map(|(i, j, _)| (i, j));

        for (i, j) in m.all_pairs() {
            write!(
                f,
                "{} with {} ({})",
                roster[i].name,
                roster[j].name,
                m.pair_score(i, j)
            )?;
            if lowest == Some((i, j)) {
                write!(f, " **")?;
            }
            writeln!(f)?;
        }
        for solo in m.unpaired.sorted() {
            writeln!(f, "unmatched:  {}", roster[solo].name)?;
        }
        writeln!(f, "score: {}", summary.total)?;
        match summary.lowest_score() {
            Some(low) => writeln!(f, "lowest: {low}"),
            None => writeln!(f, "lowest: none"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sunday_roster as roster_of;
    use crate::roster::Roster;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_add_and_remove_pair() {
        let roster = roster_of(&[15, 15, 7, 7]);
        let table = ScoreTable::build(&roster);
        let mut m = Matching::new(&table);
        assert_eq!(m.phase(), MatchingPhase::Empty);

        m.add_pair(0, 1).unwrap();
        assert_eq!(m.partner(0), Some(1));
        assert_eq!(m.partner(1), Some(0));
        assert!(!m.is_unpaired(0));
        assert_eq!(m.unpaired().sorted(), vec![2, 3]);
        assert_eq!(m.phase(), MatchingPhase::Partial);

        m.add_pair(3, 2).unwrap();
        assert_eq!(m.all_pairs().collect::<Vec<_>>(), vec![(0, 1), (2, 3)]);
        assert_eq!(m.phase(), MatchingPhase::Complete);

        m.remove_pair(1, 0).unwrap();
        assert_eq!(m.partner(0), None);
        assert_eq!(m.unpaired().sorted(), vec![0, 1]);
        assert_eq!(m.pair_count(), 1);
    }

    #[test]
    fn test_precondition_violations() {
        let roster = roster_of(&[1, 1, 1]);
        let table = ScoreTable::build(&roster);
        let mut m = Matching::new(&table);
        assert_eq!(m.add_pair(1, 1), Err(MatchError::SelfPair(1)));
        m.add_pair(0, 1).unwrap();
        assert_eq!(m.add_pair(2, 0), Err(MatchError::AlreadyPaired(0)));
        assert_eq!(m.remove_pair(0, 2), Err(MatchError::NotPaired(0, 2)));
        assert!(matches!(
            m.add_pair(2, 9),
            Err(MatchError::PositionOutOfRange { position: 9, len: 3 })
        ));
        // failed calls leave the state untouched
        assert_eq!(m.all_pairs().collect::<Vec<_>>(), vec![(0, 1)]);
        assert_eq!(m.leftover(), Some(2));
    }

    #[test]
    fn test_score_adds_lowest_again() {
        // AB = 3, CD = 1
        let roster = roster_of(&[15, 15, 0b111, 0b011]);
        let table = ScoreTable::build(&roster);
        let m = Matching::from_pairs(&table, &[(0, 1), (2, 3)]).unwrap();
        let summary = m.summary();
        assert_eq!(summary.pair_sum, 4);
        assert_eq!(summary.total, 5);
        assert_eq!(summary.lowest, Some((2, 3, 1)));
        assert_eq!(m.score(), 5);
    }

    #[test]
    fn test_score_empty_is_zero() {
        let roster = roster_of(&[15, 15]);
        let table = ScoreTable::build(&roster);
        let m = Matching::new(&table);
        assert_eq!(m.score(), 0);
        assert_eq!(m.summary().lowest, None);
    }

    #[test]
    fn test_finalize_caches_until_mutation() {
        let roster = roster_of(&[15, 15, 15, 15]);
        let table = ScoreTable::build(&roster);
        let mut m = Matching::from_pairs(&table, &[(0, 1), (2, 3)]).unwrap();
        assert_eq!(m.cached_score(), None);
        let s = m.finalize();
        assert_eq!(m.phase(), MatchingPhase::Scored);
        assert_eq!(m.cached_score(), Some(s));

        m.remove_pair(2, 3).unwrap();
        assert_eq!(m.cached_score(), None);
        assert_eq!(m.phase(), MatchingPhase::Partial);
        // not complete: finalize computes but does not cache
        m.finalize();
        assert_eq!(m.cached_score(), None);
    }

    #[test]
    fn test_random_pairing_complete() {
        let mut rng = StdRng::seed_from_u64(11);
        for n in 0..12 {
            let roster = Roster::random(n, &mut rng);
            let table = ScoreTable::build(&roster);
            let mut m = Matching::new(&table);
            m.pair_remaining_randomly(&mut rng);
            assert_eq!(m.pair_count(), n / 2);
            assert_eq!(m.unpaired().len(), n % 2);
            assert_eq!(m.unpaired().len(), n - 2 * m.pair_count());
            for (i, j) in m.all_pairs() {
                assert_eq!(m.partner(j), Some(i));
            }
        }
    }

    #[test]
    fn test_random_pairing_covers_all_pairs() {
        // every partner of position 0 should show up over many draws
        let roster = roster_of(&[1, 2, 4, 8, 16, 32]);
        let table = ScoreTable::build(&roster);
        let mut rng = StdRng::seed_from_u64(5);
        let mut seen = [0usize; 6];
        for _ in 0..600 {
            let mut m = Matching::new(&table);
            m.pair_remaining_randomly(&mut rng);
            seen[m.partner(0).unwrap()] += 1;
        }
        assert_eq!(seen[0], 0);
        for &count in &seen[1..] {
            assert!(count > 60, "partner counts too skewed: {seen:?}");
        }
    }

    #[test]
    fn test_report_flags_lowest() {
        let roster = roster_of(&[15, 15, 0b111, 0b011, 1]);
        let table = ScoreTable::build(&roster);
        let m = Matching::from_pairs(&table, &[(0, 1), (2, 3)]).unwrap();
        let text = m.report().to_string();
        assert_eq!(
            text,
            "A with B (3)\nC with D (1) **\nunmatched:  E\nscore: 5\nlowest: 1\n"
        );
    }

    #[test]
    fn test_report_empty() {
        let roster = roster_of(&[1]);
        let table = ScoreTable::build(&roster);
        let m = Matching::new(&table);
        assert_eq!(m.report().to_string(), "unmatched:  A\nscore: 0\nlowest: none\n");
    }
}
