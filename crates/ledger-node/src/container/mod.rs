//! # Ledger Container
//!
//! Holds the node's shared components: the event bus and the authority
//! wrapping the ledger service.

pub mod config;

pub use config::{ConfigError, NodeConfig};

use std::sync::Arc;

use shared_bus::InMemoryEventBus;
use tracing::info;

use crate::authority::LedgerAuthority;

/// Component container built from a `NodeConfig`.
pub struct LedgerContainer {
    pub config: NodeConfig,
    pub bus: Arc<InMemoryEventBus>,
    pub authority: LedgerAuthority,
}

impl LedgerContainer {
    pub fn new(config: NodeConfig) -> Self {
        let bus = Arc::new(InMemoryEventBus::with_capacity(config.event_capacity));
        let authority = LedgerAuthority::new(
            config.ledger.clone(),
            config.verification.clone().into_provider(),
            Arc::clone(&bus),
        );

        info!(
            min_reviews = config.ledger.min_reviews_for_publication,
            approval_threshold = config.ledger.approval_threshold_percent,
            verification = %config.verification,
            event_capacity = config.event_capacity,
            "Ledger container initialized"
        );

        Self {
            config,
            bus,
            authority,
        }
    }
}
