//! Overlap scoring between roster members.
//!
//! [`day_score`] rewards long contiguous shared blocks over fragmented
//! ones; [`overlap_score`] sums it over the week. A [`ScoreTable`] caches
//! every pairwise score for one roster so the matchers only do O(1)
//! lookups.

mod pair;
mod table;

pub use pair::{day_score, overlap_score};
pub use table::{ScoreTable, TriangleTable};
