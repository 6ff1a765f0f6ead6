//! # Shared Bus - Audit Event Bus
//!
//! Carries the audit events emitted by the ledger to whoever is listening
//! (notification delivery, metrics, indexers).
//!
//! ## Rules
//!
//! - Events are published only on the success path of a mutating operation.
//! - Publishing never fails the operation: an event with no receivers is dropped.
//! - Subscribers filter by topic and/or paper id.
//!
//! ```text
//! ┌──────────────┐    publish()     ┌──────────────┐   subscribe()   ┌──────────────┐
//! │ Review Ledger│ ───────────────→ │  Event Bus   │ ──────────────→ │  Notifier /  │
//! │              │                  │              │                 │  Metrics     │
//! └──────────────┘                  └──────────────┘                 └──────────────┘
//! ```

// Nursery lints that are too strict
#![allow(clippy::missing_const_for_fn)]
// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
#![cfg_attr(test, allow(clippy::panic))]

pub mod events;
pub mod publisher;
pub mod subscriber;

// Re-export main types
pub use events::{EventFilter, EventTopic, LedgerEvent};
pub use publisher::{EventPublisher, InMemoryEventBus};
pub use subscriber::{EventStream, EventSubscriber, Subscription, SubscriptionError};

/// Maximum events to buffer per subscriber before it starts lagging.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 1000;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_capacity() {
        assert_eq!(DEFAULT_CHANNEL_CAPACITY, 1000);
    }
}
