//! K-greedy configuration.

use crate::error::{MatchError, Result};

/// Configuration for [`LookaheadRunner`](super::LookaheadRunner).
///
/// # Examples
///
/// ```
/// use u_pairing::lookahead::LookaheadConfig;
///
/// let config = LookaheadConfig::default().with_branching(3);
/// assert_eq!(config.branching, 3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LookaheadConfig {
    /// Number of best-scoring candidate pairs branched on at each step
    /// (K). 1 is a single greedy chain; larger values approach the
    /// exhaustive search.
    pub branching: usize,

    /// Whether to explore the top-level branches in parallel using rayon.
    ///
    /// Only takes effect with the `parallel` feature; each branch works on
    /// its own copy of the matching.
    pub parallel: bool,
}

impl Default for LookaheadConfig {
    fn default() -> Self {
        Self {
            branching: 2,
            parallel: false,
        }
    }
}

impl LookaheadConfig {
    pub fn with_branching(mut self, k: usize) -> Self {
        self.branching = k;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.branching == 0 {
            return Err(MatchError::InvalidConfig(
                "branching must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LookaheadConfig::default();
        assert_eq!(config.branching, 2);
        assert!(!config.parallel);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_branching() {
        assert!(LookaheadConfig::default()
            .with_branching(0)
            .validate()
            .is_err());
    }
}
