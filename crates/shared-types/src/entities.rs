//! # Core Identifiers
//!
//! Identifier and handle types shared by every crate in the workspace.
//!
//! ## Clusters
//!
//! - **Identity**: `ActorId`
//! - **Ledger keys**: `PaperId`, `Timestamp`
//! - **External content**: `ContentRef`

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// CLUSTER A: IDENTITY
// =============================================================================

/// Unique key of a researcher (principal text, account address, ...).
///
/// The ledger never interprets the string; equality is the only operation
/// that matters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActorId(String);

impl ActorId {
    /// Wrap a raw identity string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identity string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ActorId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ActorId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

// =============================================================================
// CLUSTER B: LEDGER KEYS
// =============================================================================

/// Dense paper identifier, assigned sequentially starting at 0.
pub type PaperId = u64;

/// Milliseconds since the Unix epoch.
pub type Timestamp = u64;

// =============================================================================
// CLUSTER C: EXTERNAL CONTENT
// =============================================================================

/// Opaque handle to content held by the external blob store
/// (paper text, review body, revised manuscript).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentRef(String);

impl ContentRef {
    /// Wrap a content identifier.
    pub fn new(cid: impl Into<String>) -> Self {
        Self(cid.into())
    }

    /// Borrow the content identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ContentRef {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ContentRef {
    fn from(value: String) -> Self {
        Self(value)
    }
}
