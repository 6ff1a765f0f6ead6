//! Verification adapters.

use crate::domain::ActorId;
use crate::ports::VerificationProvider;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Treats every actor as verified.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoVerify;

impl VerificationProvider for AutoVerify {
    fn is_verified(&self, _actor: &ActorId) -> bool {
        true
    }
}

/// Verifies only the listed actors.
#[derive(Debug, Clone, Default)]
pub struct AllowListVerifier {
    allowed: HashSet<ActorId>,
}

impl AllowListVerifier {
    pub fn new<I>(allowed: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ActorId>,
    {
        Self {
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.allowed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.allowed.is_empty()
    }
}

impl VerificationProvider for AllowListVerifier {
    fn is_verified(&self, actor: &ActorId) -> bool {
        self.allowed.contains(actor)
    }
}

/// Verification policy as written in configuration.
///
/// `auto` or `allowlist:<id>,<id>,...`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum VerificationPolicy {
    #[default]
    Auto,
    AllowList(Vec<ActorId>),
}

impl VerificationPolicy {
    /// Build the provider this policy describes.
    pub fn into_provider(self) -> Box<dyn VerificationProvider> {
        match self {
            Self::Auto => Box::new(AutoVerify),
            Self::AllowList(ids) => Box::new(AllowListVerifier::new(ids)),
        }
    }
}

/// Unparseable verification policy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid verification policy '{0}': expected 'auto' or 'allowlist:<id>,...'")]
pub struct PolicyParseError(pub String);

impl FromStr for VerificationPolicy {
    type Err = PolicyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("auto") {
            return Ok(Self::Auto);
        }
        match trimmed.split_once(':') {
            Some((kind, list)) if kind.eq_ignore_ascii_case("allowlist") => Ok(Self::AllowList(
                list.split(',')
                    .map(str::trim)
                    .filter(|id| !id.is_empty())
                    .map(ActorId::from)
                    .collect(),
            )),
            _ => Err(PolicyParseError(s.to_string())),
        }
    }
}

impl fmt::Display for VerificationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str("auto"),
            Self::AllowList(ids) => {
                let ids: Vec<&str> = ids.iter().map(ActorId::as_str).collect();
                write!(f, "allowlist:{}", ids.join(","))
            }
        }
    }
}
