//! Configuration for the Review Ledger.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reviews a paper needs before the publication check can pass.
pub const MIN_REVIEWS_FOR_PUBLICATION: u64 = 3;

/// Minimum truncated approval percentage for publication.
pub const APPROVAL_THRESHOLD_PERCENT: u8 = 67;

/// Reputation credited to a reviewer for each recorded review.
pub const REPUTATION_PER_REVIEW: u64 = 10;

/// Reputation credited to an author when their paper is published.
pub const REPUTATION_FOR_APPROVED_PAPER: u64 = 50;

/// Ledger configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Review count at which the publication check starts to apply
    pub min_reviews_for_publication: u64,
    /// Publication requires `floor(approvals * 100 / reviews) >= this`
    pub approval_threshold_percent: u8,
    /// Reviewer reward per review
    pub reputation_per_review: u64,
    /// Author reward on publication
    pub reputation_for_approved_paper: u64,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            min_reviews_for_publication: MIN_REVIEWS_FOR_PUBLICATION,
            approval_threshold_percent: APPROVAL_THRESHOLD_PERCENT,
            reputation_per_review: REPUTATION_PER_REVIEW,
            reputation_for_approved_paper: REPUTATION_FOR_APPROVED_PAPER,
        }
    }
}

/// Rejected configuration values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A threshold of 0 would publish on any review; above 100 never publishes.
    #[error("Approval threshold must be within 1..=100, got {0}")]
    ThresholdOutOfRange(u8),

    /// Publication needs at least one review to compute a rate.
    #[error("Minimum reviews for publication must be at least 1")]
    ZeroMinimumReviews,
}

impl LedgerConfig {
    /// Check the values the publication check depends on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.approval_threshold_percent == 0 || self.approval_threshold_percent > 100 {
            return Err(ConfigError::ThresholdOutOfRange(
                self.approval_threshold_percent,
            ));
        }
        if self.min_reviews_for_publication == 0 {
            return Err(ConfigError::ZeroMinimumReviews);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LedgerConfig::default();
        assert_eq!(config.min_reviews_for_publication, 3);
        assert_eq!(config.approval_threshold_percent, 67);
        assert_eq!(config.reputation_per_review, 10);
        assert_eq!(config.reputation_for_approved_paper, 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_threshold() {
        let config = LedgerConfig {
            approval_threshold_percent: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ThresholdOutOfRange(0)));
    }

    #[test]
    fn test_rejects_zero_min_reviews() {
        let config = LedgerConfig {
            min_reviews_for_publication: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroMinimumReviews));
    }
}
