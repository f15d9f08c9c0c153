//! A person's weekly free time as seven day masks.

use super::slots::{decode_day, Weekday, DAYS_PER_WEEK, DAY_MASK};
use crate::error::{MatchError, Result};
use rand::Rng;

/// Free slots for one week, one bitmask per day.
///
/// Every mask is guaranteed to fit within [`DAY_MASK`]; the constructors
/// reject anything wider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "[i64; 7]", into = "[u32; 7]"))]
pub struct Availability {
    days: [u32; DAYS_PER_WEEK],
}

impl Availability {
    /// A week with no free slots.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds an availability from validated day masks (Sunday first).
    pub fn new(days: [u32; DAYS_PER_WEEK]) -> Result<Self> {
        for (day, &mask) in days.iter().enumerate() {
            check_mask(day, mask)?;
        }
        Ok(Self { days })
    }

    /// Builds an availability from raw signed values, as stored by
    /// external layers. Negative or over-wide values are rejected.
    pub fn from_raw(raw: [i64; DAYS_PER_WEEK]) -> Result<Self> {
        let mut days = [0u32; DAYS_PER_WEEK];
        for (day, &value) in raw.iter().enumerate() {
            if value < 0 {
                return Err(MatchError::NegativeMask { day, value });
            }
            if value > DAY_MASK as i64 {
                return Err(MatchError::MaskOutOfRange {
                    day,
                    mask: value as u64,
                });
            }
            days[day] = value as u32;
        }
        Ok(Self { days })
    }

    /// Uniformly random masks over the full slot grid.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let mut days = [0u32; DAYS_PER_WEEK];
        for mask in days.iter_mut() {
            *mask = rng.random_range(0..=DAY_MASK);
        }
        Self { days }
    }

    /// Replaces one day's mask.
    pub fn set_day(&mut self, day: Weekday, mask: u32) -> Result<()> {
        check_mask(day.index(), mask)?;
        self.days[day.index()] = mask;
        Ok(())
    }

    /// The mask for one day.
    pub fn day(&self, day: Weekday) -> u32 {
        self.days[day.index()]
    }

    /// All seven masks, Sunday first.
    pub fn days(&self) -> &[u32; DAYS_PER_WEEK] {
        &self.days
    }

    /// Slot labels free on `day`.
    pub fn slots(&self, day: Weekday) -> Vec<&'static str> {
        decode_day(self.day(day))
    }

    /// Total free slots across the week. Only used for ordering displays.
    pub fn total_free_slots(&self) -> u32 {
        self.days.iter().map(|m| m.count_ones()).sum()
    }

    /// Slots free for both `self` and `other`.
    pub fn overlap(&self, other: &Availability) -> Availability {
        let mut days = self.days;
        for (mask, theirs) in days.iter_mut().zip(other.days.iter()) {
            *mask &= theirs;
        }
        Self { days }
    }
}

fn check_mask(day: usize, mask: u32) -> Result<()> {
    if mask & !DAY_MASK != 0 {
        return Err(MatchError::MaskOutOfRange {
            day,
            mask: mask as u64,
        });
    }
    Ok(())
}

impl TryFrom<[i64; DAYS_PER_WEEK]> for Availability {
    type Error = MatchError;

    fn try_from(raw: [i64; DAYS_PER_WEEK]) -> Result<Self> {
        Self::from_raw(raw)
    }
}

impl From<Availability> for [u32; DAYS_PER_WEEK] {
    fn from(a: Availability) -> Self {
        a.days
    }
}

impl std::fmt::Display for Availability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for day in Weekday::ALL {
            writeln!(f, "{}\t{}", day, self.slots(day).join(","))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_new_rejects_wide_mask() {
        let mut days = [0u32; 7];
        days[2] = 1 << 30;
        let err = Availability::new(days).unwrap_err();
        assert_eq!(
            err,
            MatchError::MaskOutOfRange {
                day: 2,
                mask: 1 << 30
            }
        );
        days[2] = DAY_MASK;
        assert!(Availability::new(days).is_ok());
    }

    #[test]
    fn test_from_raw() {
        let err = Availability::from_raw([0, 0, 0, 0, -1, 0, 0]).unwrap_err();
        assert_eq!(err, MatchError::NegativeMask { day: 4, value: -1 });

        let err = Availability::from_raw([0, 0, 0, 0, 0, 0, 1 << 40]).unwrap_err();
        assert!(matches!(err, MatchError::MaskOutOfRange { day: 6, .. }));

        let a = Availability::try_from([1, 2, 3, 4, 5, 6, 7]).unwrap();
        assert_eq!(a.days(), &[1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_set_and_read_day() {
        let mut a = Availability::empty();
        a.set_day(Weekday::Mon, 0b11).unwrap();
        assert_eq!(a.day(Weekday::Mon), 0b11);
        assert_eq!(a.slots(Weekday::Mon), vec!["900", "930"]);
        assert!(a.set_day(Weekday::Tue, u32::MAX).is_err());
        assert_eq!(a.day(Weekday::Tue), 0);
    }

    #[test]
    fn test_total_free_slots() {
        let a = Availability::new([0b1111, 0, 0b1, 0, 0, 0, DAY_MASK]).unwrap();
        assert_eq!(a.total_free_slots(), 4 + 1 + 30);
        assert_eq!(Availability::empty().total_free_slots(), 0);
    }

    #[test]
    fn test_overlap() {
        let a = Availability::new([0b1100, 0b1, 0, 0, 0, 0, 0]).unwrap();
        let b = Availability::new([0b0110, 0b1, 0b1, 0, 0, 0, 0]).unwrap();
        let o = a.overlap(&b);
        assert_eq!(o.days(), &[0b0100, 0b1, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_random_within_grid() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let a = Availability::random(&mut rng);
            assert!(a.days().iter().all(|&m| m & !DAY_MASK == 0));
        }
    }

    #[test]
    fn test_display() {
        let a = Availability::new([0b11, 0, 0, 0, 0, 0, 1 << 29]).unwrap();
        let text = a.to_string();
        assert!(text.starts_with("sun\t900,930\n"));
        assert!(text.contains("mon\t\n"));
        assert!(text.ends_with("sat\t2330\n"));
    }
}
