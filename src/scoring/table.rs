//! Precomputed pairwise scores for one roster.

use super::pair::overlap_score;
use crate::roster::Roster;

/// Symmetric `n x n` matrix of pair scores, indexed by roster position.
///
/// Built once per roster and read-only afterwards, so one table can be
/// shared by several runners (and across threads) without locking. The
/// diagonal is not a pair score and reads as 0.
#[derive(Debug, Clone)]
pub struct ScoreTable<'r> {
    roster: &'r Roster,
    n: usize,
    scores: Vec<u32>,
}

impl<'r> ScoreTable<'r> {
    /// Scores every pair of the roster.
    pub fn build(roster: &'r Roster) -> Self {
        let n = roster.len();
        let mut scores = vec![0u32; n * n];
        for i in 0..n {
            let a = &roster[i].availability;
            for j in (i + 1)..n {
                let s = overlap_score(a, &roster[j].availability);
                scores[i * n + j] = s;
                scores[j * n + i] = s;
            }
        }
        Self { roster, n, scores }
    }

    /// Score of the pair at positions `i` and `j`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> u32 {
        self.scores[i * self.n + j]
    }

    /// Number of roster positions.
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// The roster the table was built from.
    pub fn roster(&self) -> &'r Roster {
        self.roster
    }

    /// Overlap of a member with themselves. Diagnostic only.
    pub fn self_overlap(&self, i: usize) -> u32 {
        let a = &self.roster[i].availability;
        overlap_score(a, a)
    }

    /// Printable table of all pair scores, members ordered by free time.
    pub fn triangle(&self) -> TriangleTable<'_, 'r> {
        TriangleTable { table: self }
    }
}

/// Diagnostic rendering of a [`ScoreTable`].
///
/// Members with the least free time come first. A legend lists each row
/// (index, identity, free slots, self overlap, name), followed by the
/// score grid in the same order.
pub struct TriangleTable<'t, 'r> {
    table: &'t ScoreTable<'r>,
}

impl TriangleTable<'_, '_> {
    fn order(&self) -> Vec<usize> {
        let roster = self.table.roster;
        let mut order: Vec<usize> = (0..self.table.n).collect();
        order.sort_by_key(|&i| roster[i].availability.total_free_slots());
        order
    }
}

impl std::fmt::Display for TriangleTable<'_, '_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let table = self.table;
        let roster = table.roster;
        let order = self.order();

        for (row, &i) in order.iter().enumerate() {
            let p = &roster[i];
            writeln!(
                f,
                "{}\t{}\t{}\t{}\t{}",
                row,
                p.identity,
                p.availability.total_free_slots(),
                table.self_overlap(i),
                p.name
            )?;
        }

        write!(f, "X\t")?;
        for col in 0..order.len() {
            write!(f, " {col:2} |")?;
        }
        writeln!(f)?;
        for (row, &i) in order.iter().enumerate() {
            write!(f, "{row}\t")?;
            for &j in &order {
                let v = if i == j {
                    table.self_overlap(i)
                } else {
                    table.get(i, j)
                };
                write!(f, " {v:2} |")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
