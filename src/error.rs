//! Error type shared by roster validation, matching state and the runners.

use thiserror::Error;

/// Errors raised by the pairing engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// A day mask uses bits beyond the slot grid.
    #[error("availability mask {mask:#x} for day {day} uses bits beyond the slot grid")]
    MaskOutOfRange { day: usize, mask: u64 },

    /// A raw day value was negative.
    #[error("availability value {value} for day {day} is negative")]
    NegativeMask { day: usize, value: i64 },

    /// Two roster members share an identity.
    #[error("duplicate identity in roster: {0}")]
    DuplicateIdentity(String),

    /// A weekday name could not be resolved.
    #[error("unknown weekday: {0}")]
    UnknownDay(String),

    /// Exhaustive search was requested above its roster-size limit.
    #[error(
        "search space too large: {roster_size} members give {matchings} matchings (limit is {limit} members)"
    )]
    SearchSpaceTooLarge {
        roster_size: usize,
        matchings: u128,
        limit: usize,
    },

    /// A configuration value is outside its valid range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A roster position does not exist.
    #[error("position {position} is out of range for a roster of {len}")]
    PositionOutOfRange { position: usize, len: usize },

    /// `add_pair` on a position that already has a partner.
    #[error("position {0} is already paired")]
    AlreadyPaired(usize),

    /// `remove_pair` on two positions that are not partners.
    #[error("positions {0} and {1} are not paired with each other")]
    NotPaired(usize, usize),

    /// `add_pair(i, i)`.
    #[error("position {0} cannot be paired with itself")]
    SelfPair(usize),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MatchError>;
