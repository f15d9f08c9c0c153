//! Exhaustive search configuration.

use crate::error::{MatchError, Result};

/// Largest roster the exhaustive matcher can be configured for.
///
/// 24 members already give about 3.2e14 matchings.
pub const MAX_EXHAUSTIVE_ROSTER: usize = 24;

/// Configuration for [`ExhaustiveRunner`](super::ExhaustiveRunner).
///
/// # Examples
///
/// ```
/// use u_pairing::exhaustive::ExhaustiveConfig;
///
/// let config = ExhaustiveConfig::default().with_max_roster_size(12);
/// assert_eq!(config.max_roster_size, 12);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExhaustiveConfig {
    /// Rosters larger than this are refused with
    /// [`MatchError::SearchSpaceTooLarge`]. 16 members are about two
    /// million matchings.
    pub max_roster_size: usize,
}

impl Default for ExhaustiveConfig {
    fn default() -> Self {
        Self {
            max_roster_size: 16,
        }
    }
}

impl ExhaustiveConfig {
    pub fn with_max_roster_size(mut self, n: usize) -> Self {
        self.max_roster_size = n;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.max_roster_size > MAX_EXHAUSTIVE_ROSTER {
            return Err(MatchError::InvalidConfig(format!(
                "max_roster_size must be at most {MAX_EXHAUSTIVE_ROSTER}, got {}",
                self.max_roster_size
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ExhaustiveConfig::default();
        assert_eq!(config.max_roster_size, 16);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_limit() {
        assert!(ExhaustiveConfig::default()
            .with_max_roster_size(MAX_EXHAUSTIVE_ROSTER)
            .validate()
            .is_ok());
        assert!(ExhaustiveConfig::default()
            .with_max_roster_size(MAX_EXHAUSTIVE_ROSTER + 1)
            .validate()
            .is_err());
    }
}
