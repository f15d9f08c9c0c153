//! Local search configuration.

use crate::error::{MatchError, Result};

/// Configuration for [`LocalSearchRunner`](super::LocalSearchRunner).
///
/// # Examples
///
/// ```
/// use u_pairing::local_search::LocalSearchConfig;
///
/// let config = LocalSearchConfig::default()
///     .with_restarts(10)
///     .with_seed(42);
/// assert_eq!(config.restarts, 10);
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocalSearchConfig {
    /// Number of independent random starts. The best local optimum wins.
    pub restarts: usize,

    /// Maximum accepted swaps per start. 0 = climb until no swap improves.
    pub max_swaps: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for LocalSearchConfig {
    fn default() -> Self {
        Self {
            restarts: 1,
            max_swaps: 0,
            seed: None,
        }
    }
}

impl LocalSearchConfig {
    pub fn with_restarts(mut self, n: usize) -> Self {
        self.restarts = n;
        self
    }

    pub fn with_max_swaps(mut self, n: usize) -> Self {
        self.max_swaps = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.restarts == 0 {
            return Err(MatchError::InvalidConfig(
                "restarts must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
