//! The weekly slot grid: weekdays and half-hour slot labels.

use crate::error::{MatchError, Result};

/// Number of days tracked per week.
pub const DAYS_PER_WEEK: usize = 7;

/// Number of half-hour slots per day (09:00 to 24:00).
pub const SLOTS_PER_DAY: usize = 30;

/// Mask of all valid slot bits within a day.
pub const DAY_MASK: u32 = (1 << SLOTS_PER_DAY) - 1;

/// Start-time labels for each slot, bit `i` is `SLOT_LABELS[i]`.
pub const SLOT_LABELS: [&str; SLOTS_PER_DAY] = [
    "900", "930", "1000", "1030", "1100", "1130", "1200", "1230", "1300", "1330", "1400", "1430",
    "1500", "1530", "1600", "1630", "1700", "1730", "1800", "1830", "1900", "1930", "2000", "2030",
    "2100", "2130", "2200", "2230", "2300", "2330",
];

/// Day of the week, numbered from Sunday = 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Weekday {
    Sun,
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
}

impl Weekday {
    /// All days in index order.
    pub const ALL: [Weekday; DAYS_PER_WEEK] = [
        Weekday::Sun,
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
    ];

    /// Index of this day (Sunday = 0).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Three-letter lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Sun => "sun",
            Weekday::Mon => "mon",
            Weekday::Tue => "tue",
            Weekday::Wed => "wed",
            Weekday::Thu => "thu",
            Weekday::Fri => "fri",
            Weekday::Sat => "sat",
        }
    }

    /// Day for a 0-based index, if in range.
    pub fn from_index(index: usize) -> Option<Weekday> {
        Self::ALL.get(index).copied()
    }

    /// Resolves a day name, case-insensitive. Accepts the three-letter
    /// abbreviation or any longer prefix of the full name ("Tuesday").
    pub fn from_name(name: &str) -> Result<Weekday> {
        let lower = name.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|day| lower.len() >= 3 && lower.starts_with(day.name()))
            .ok_or_else(|| MatchError::UnknownDay(name.to_string()))
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns the labels of the slots set in a day mask, in time order.
///
/// Bits beyond the slot grid are ignored.
pub fn decode_day(mask: u32) -> Vec<&'static str> {
    SLOT_LABELS
        .iter()
        .enumerate()
        .filter(|&(i, _)| mask & (1 << i) != 0)
        .map(|(_, &label)| label)
        .collect()
}

/// Builds a day mask from slot labels. Unknown labels are ignored.
pub fn encode_day<'a, I>(labels: I) -> u32
where
    I: IntoIterator<Item = &'a str>,
{
    labels
        .into_iter()
        .filter_map(|label| SLOT_LABELS.iter().position(|&l| l == label))
        .fold(0, |mask, i| mask | (1 << i))
}
