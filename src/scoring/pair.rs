//! Pairwise overlap scoring.

use crate::availability::{Availability, DAY_MASK};

/// Scores the overlap of two masks for the same day.
///
/// Each shared slot counts 1 and each contiguous shared block costs 1,
/// so `score = shared slots - shared blocks`. One two-hour block (4 slots)
/// scores 3, two one-hour blocks score 2 and four separate half hours
/// score 0. The result is never negative.
///
/// # Examples
///
/// ```
/// use u_pairing::scoring::day_score;
///
/// assert_eq!(day_score(0b1111, 0b1111), 3);
/// assert_eq!(day_score(0b1111, 0b1111 << 1), 2);
/// assert_eq!(day_score(0b1111, 0b1111 << 4), 0);
/// ```
#[inline]
pub fn day_score(a: u32, b: u32) -> u32 {
    let overlap = a & b & DAY_MASK;
    let slots = overlap.count_ones();
    // a block starts at every set bit whose lower neighbour is clear
    let blocks = (overlap & !(overlap << 1)).count_ones();
    slots - blocks
}

/// Sum of [`day_score`] over all seven days. Symmetric.
pub fn overlap_score(a: &Availability, b: &Availability) -> u32 {
    a.days()
        .iter()
        .zip(b.days().iter())
        .map(|(&x, &y)| day_score(x, y))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_day_score_shifting_block() {
        let a = 15;
        assert_eq!(day_score(a, 15), 3);
        assert_eq!(day_score(a, 15 << 1), 2);
        assert_eq!(day_score(a, 15 << 2), 1);
        assert_eq!(day_score(a, 15 << 3), 0);
    }

    #[test]
    fn test_day_score_two_blocks() {
        let a = (15 << 6) + 15;
        assert_eq!(day_score(a, a), 6);
    }

    #[test]
    fn test_day_score_fragmented() {
        // two one-hour blocks
        assert_eq!(day_score(0b11011, 0b11011), 2);
        // four separate half hours
        assert_eq!(day_score(0b1010101, 0b1010101), 0);
        assert_eq!(day_score(0, DAY_MASK), 0);
    }

    #[test]
    fn test_day_score_full_day() {
        assert_eq!(day_score(DAY_MASK, DAY_MASK), 29);
    }

    #[test]
    fn test_day_score_ignores_bits_outside_grid() {
        assert_eq!(day_score(u32::MAX, u32::MAX), 29);
    }

    #[test]
    fn test_overlap_score_sums_days() {
        let a = Availability::new([15, 15, 0, 0, 0, 0, (15 << 6) + 15]).unwrap();
        let b = Availability::new([15, 15 << 1, DAY_MASK, 0, 0, 0, (15 << 6) + 15]).unwrap();
        assert_eq!(overlap_score(&a, &b), 3 + 2 + 0 + 6);
        assert_eq!(overlap_score(&b, &a), 3 + 2 + 0 + 6);
    }

    proptest! {
        #[test]
        fn prop_day_score_symmetric(a in 0..=DAY_MASK, b in 0..=DAY_MASK) {
            prop_assert_eq!(day_score(a, b), day_score(b, a));
        }

        #[test]
        fn prop_day_score_bounded_by_shared_slots(a in 0..=DAY_MASK, b in 0..=DAY_MASK) {
            let shared = (a & b).count_ones();
            let score = day_score(a, b);
            prop_assert!(score <= shared);
            prop_assert_eq!(score == 0, shared == 0 || (a & b) & ((a & b) << 1) == 0);
        }

        #[test]
        fn prop_overlap_score_symmetric(
            x in proptest::array::uniform7(0..=DAY_MASK),
            y in proptest::array::uniform7(0..=DAY_MASK),
        ) {
            let a = Availability::new(x).unwrap();
            let b = Availability::new(y).unwrap();
            prop_assert_eq!(overlap_score(&a, &b), overlap_score(&b, &a));
        }
    }
}
