//! Aggregate score of a matching.

/// Breakdown of a matching's aggregate score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreSummary {
    /// Sum of pair scores plus the lowest pair score again.
    pub total: u32,
    /// Sum of pair scores alone.
    pub pair_sum: u32,
    /// The weakest pair `(i, j, score)`, first found in position order.
    pub lowest: Option<(usize, usize, u32)>,
}

impl ScoreSummary {
    /// Score of the weakest pair, if any pair exists.
    pub fn lowest_score(&self) -> Option<u32> {
        self.lowest.map(|(_, _, s)| s)
    }
}

/// Folds `(i, j, score)` pairs into a [`ScoreSummary`].
///
/// The lowest pair score is counted twice. No pairs scores 0.
pub fn summarize<I>(pairs: I) -> ScoreSummary
where
    I: IntoIterator<Item = (usize, usize, u32)>,
{
    let mut pair_sum = 0u32;
    let mut lowest: Option<(usize, usize, u32)> = None;
    for (i, j, s) in pairs {
        pair_sum += s;
        if lowest.is_none_or(|(_, _, low)| s < low) {
            lowest = Some((i, j, s));
        }
    }
    let bonus = lowest.map_or(0, |(_, _, s)| s);
    ScoreSummary {
        total: pair_sum + bonus,
        pair_sum,
        lowest,
    }
}

/// Aggregate score only, for hot loops that do not need the breakdown.
#[inline]
pub fn aggregate<I>(scores: I) -> u32
where
    I: IntoIterator<Item = u32>,
{
    let mut sum = 0u32;
    let mut low: Option<u32> = None;
    for s in scores {
        sum += s;
        low = Some(low.map_or(s, |l| l.min(s)));
    }
    sum + low.unwrap_or(0)
}
