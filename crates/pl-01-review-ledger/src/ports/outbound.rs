//! # Outbound Ports
//!
//! Dependencies of the Review Ledger on the outside world: who counts as
//! verified, what time it is, and where audit events go.

use crate::domain::{ActorId, Timestamp};
use shared_bus::LedgerEvent;

/// Identity verification capability check.
///
/// Consulted once per actor, when the actor is first created. The answer
/// is stored on the actor and not re-evaluated.
pub trait VerificationProvider: Send + Sync {
    /// Whether `actor` may review papers.
    fn is_verified(&self, actor: &ActorId) -> bool;
}

/// Time source for consistent timestamp handling.
pub trait TimeSource: Send + Sync {
    /// Returns the current timestamp in milliseconds.
    fn now(&self) -> Timestamp;
}

/// Default system time source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> Timestamp {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as Timestamp
    }
}

/// Receiver of audit events.
///
/// Called synchronously on the success path of every mutation, after the
/// state change is complete. Never called for a rejected operation.
pub trait AuditSink: Send + Sync {
    fn record(&self, event: &LedgerEvent);
}

impl<T: VerificationProvider + ?Sized> VerificationProvider for std::sync::Arc<T> {
    fn is_verified(&self, actor: &ActorId) -> bool {
        (**self).is_verified(actor)
    }
}

impl<T: VerificationProvider + ?Sized> VerificationProvider for Box<T> {
    fn is_verified(&self, actor: &ActorId) -> bool {
        (**self).is_verified(actor)
    }
}

impl<T: TimeSource + ?Sized> TimeSource for std::sync::Arc<T> {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}

impl<T: AuditSink + ?Sized> AuditSink for std::sync::Arc<T> {
    fn record(&self, event: &LedgerEvent) {
        (**self).record(event);
    }
}
