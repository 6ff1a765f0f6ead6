//! # `AuthenticatedMessage` Envelope
//!
//! The wrapper for every request entering the ledger.
//!
//! ## Properties
//!
//! - **Versioning**: All messages include a `version` field for forward compatibility.
//! - **Correlation**: Responses echo the request's `correlation_id`.
//! - **Envelope Authority**: `sender` is the sole source of truth for the
//!   caller's identity. Verification of that identity happens outside the
//!   ledger; by the time a message is built, `sender` is trusted.

use crate::entities::{ActorId, Timestamp};
use crate::errors::MessageError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The universal message envelope for ledger requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedMessage<T> {
    /// Protocol version. Checked before the payload is dispatched.
    pub version: u16,

    /// Identity of the caller. Payloads MUST NOT duplicate this.
    pub sender: ActorId,

    /// Unique identifier for correlating request/response pairs.
    pub correlation_id: Uuid,

    /// Milliseconds since the epoch at which the caller built the message.
    pub timestamp: Timestamp,

    /// The actual message payload.
    pub payload: T,
}

impl<T> AuthenticatedMessage<T> {
    /// Current protocol version.
    pub const CURRENT_VERSION: u16 = 1;

    /// Build a current-version envelope with a fresh correlation id.
    pub fn new(sender: ActorId, timestamp: Timestamp, payload: T) -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            sender,
            correlation_id: Uuid::new_v4(),
            timestamp,
            payload,
        }
    }

    /// Check the header fields that must hold before dispatch.
    pub fn validate(&self) -> Result<(), MessageError> {
        if self.version != Self::CURRENT_VERSION {
            return Err(MessageError::UnsupportedVersion {
                received: self.version,
                supported: Self::CURRENT_VERSION,
            });
        }
        if self.sender.as_str().is_empty() {
            return Err(MessageError::MissingSender);
        }
        Ok(())
    }
}
