//! # Error Types
//!
//! Errors raised while unwrapping a request envelope, before any ledger
//! operation runs.

use thiserror::Error;

/// Errors related to envelope validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessageError {
    /// Message version not supported.
    #[error("Unsupported version: received {received}, supported {supported}")]
    UnsupportedVersion { received: u16, supported: u16 },

    /// The envelope carries an empty sender identity.
    #[error("Missing sender identity")]
    MissingSender,

    /// Payload could not be decoded.
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),
}
