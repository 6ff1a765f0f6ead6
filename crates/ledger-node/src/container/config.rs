//! # Node Configuration
//!
//! Ledger rules plus runtime parameters, loaded from the environment.
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `PL_MIN_REVIEWS` | `3` | Reviews before publication can trigger |
//! | `PL_APPROVAL_THRESHOLD` | `67` | Minimum truncated approval percentage |
//! | `PL_REPUTATION_PER_REVIEW` | `10` | Reviewer reward |
//! | `PL_REPUTATION_FOR_PUBLICATION` | `50` | Author reward on publication |
//! | `PL_VERIFICATION` | `auto` | `auto` or `allowlist:<id>,<id>` |
//! | `PL_EVENT_CAPACITY` | `1000` | Event bus buffer per subscriber |

use pl_01_review_ledger::adapters::verification::PolicyParseError;
use pl_01_review_ledger::config::ConfigError as LedgerConfigError;
use pl_01_review_ledger::{LedgerConfig, VerificationPolicy};
use shared_bus::DEFAULT_CHANNEL_CAPACITY;
use std::env;
use thiserror::Error;

/// Complete node configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeConfig {
    /// Review and reputation rules.
    pub ledger: LedgerConfig,
    /// Who may review.
    pub verification: VerificationPolicy,
    /// Broadcast buffer size of the event bus.
    pub event_capacity: usize,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            ledger: LedgerConfig::default(),
            verification: VerificationPolicy::Auto,
            event_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A variable is set but does not parse.
    #[error("{var} has invalid value '{value}': {reason}")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },

    #[error(transparent)]
    Verification(#[from] PolicyParseError),

    #[error(transparent)]
    Ledger(#[from] LedgerConfigError),

    #[error("PL_EVENT_CAPACITY must be at least 1")]
    ZeroEventCapacity,
}

impl NodeConfig {
    /// Load from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load using `lookup` in place of the environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = LedgerConfig::default();
        let ledger = LedgerConfig {
            min_reviews_for_publication: parse_or(
                &lookup,
                "PL_MIN_REVIEWS",
                defaults.min_reviews_for_publication,
            )?,
            approval_threshold_percent: parse_or(
                &lookup,
                "PL_APPROVAL_THRESHOLD",
                defaults.approval_threshold_percent,
            )?,
            reputation_per_review: parse_or(
                &lookup,
                "PL_REPUTATION_PER_REVIEW",
                defaults.reputation_per_review,
            )?,
            reputation_for_approved_paper: parse_or(
                &lookup,
                "PL_REPUTATION_FOR_PUBLICATION",
                defaults.reputation_for_approved_paper,
            )?,
        };

        let verification = match lookup("PL_VERIFICATION") {
            Some(raw) => raw.parse()?,
            None => VerificationPolicy::Auto,
        };

        let config = Self {
            ledger,
            verification,
            event_capacity: parse_or(&lookup, "PL_EVENT_CAPACITY", DEFAULT_CHANNEL_CAPACITY)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject values the ledger cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.ledger.validate()?;
        if self.event_capacity == 0 {
            return Err(ConfigError::ZeroEventCapacity);
        }
        Ok(())
    }
}

fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(var) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
            var,
            value: raw.clone(),
            reason: e.to_string(),
        }),
    }
}
