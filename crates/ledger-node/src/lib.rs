//! # Peer Ledger Node Runtime
//!
//! Hosts the review ledger as a single serializing authority.
//!
//! ## Modular Structure
//!
//! - `container/` - Configuration and shared components
//! - `authority` - Lock discipline around the ledger service
//! - `handlers/` - Background tasks fed by the event bus
//! - `protocol` - Newline-delimited JSON framing
//!
//! ## Request Flow
//!
//! ```text
//! stdin line ──decode──→ AuthenticatedMessage<LedgerRequest>
//!                                │
//!                       LedgerAuthority::dispatch
//!                 (write lock: mutations, read lock: queries)
//!                                │
//!              ┌─────────────────┴──────────────────┐
//!              ↓                                    ↓
//!        LedgerResponse ──→ stdout          LedgerEvent ──→ Event Bus
//!                                                           │
//!                                                    MetricsRecorder
//! ```

pub mod authority;
pub mod container;
pub mod handlers;
pub mod protocol;

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{error, info};

use pl_01_review_ledger::{LedgerRequest, LedgerResponse};
use shared_bus::EventFilter;
use shared_types::AuthenticatedMessage;

use crate::authority::LedgerAuthority;
use crate::container::{LedgerContainer, NodeConfig};
use crate::handlers::MetricsRecorder;

/// The node: container plus background task lifecycle.
pub struct LedgerRuntime {
    container: Arc<LedgerContainer>,
    shutdown_tx: watch::Sender<bool>,
    shutdown_rx: watch::Receiver<bool>,
    recorder: Option<JoinHandle<u64>>,
}

impl LedgerRuntime {
    pub fn new(config: NodeConfig) -> Self {
        info!("Creating Peer Ledger node runtime");
        let container = Arc::new(LedgerContainer::new(config));
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        Self {
            container,
            shutdown_tx,
            shutdown_rx,
            recorder: None,
        }
    }

    /// Spawn the background handlers. Must run inside a tokio runtime.
    pub fn start(&mut self) {
        let subscription = self.container.bus.subscribe(EventFilter::all());
        let authority = self.container.authority.clone();
        let recorder = MetricsRecorder::new(subscription, &self.container.config.ledger)
            .with_reputation_source(Arc::new(move || authority.total_reputation()));
        self.recorder = Some(tokio::spawn(recorder.run(self.shutdown_rx.clone())));
        info!("Event handlers started");
    }

    pub fn authority(&self) -> &LedgerAuthority {
        &self.container.authority
    }

    pub fn container(&self) -> Arc<LedgerContainer> {
        Arc::clone(&self.container)
    }

    pub fn dispatch(&self, msg: AuthenticatedMessage<LedgerRequest>) -> LedgerResponse {
        self.container.authority.dispatch(msg)
    }

    /// Stop the handlers and wait for them to flush.
    pub async fn shutdown(mut self) -> Result<()> {
        info!("Initiating graceful shutdown...");

        if let Err(e) = self.shutdown_tx.send(true) {
            error!("Failed to send shutdown signal: {}", e);
        }

        if let Some(recorder) = self.recorder.take() {
            let recorded = recorder.await.context("Metrics recorder task failed")?;
            info!(recorded, "Metrics recorder flushed");
        }

        info!(
            papers = self.container.authority.paper_count(),
            total_reputation = self.container.authority.total_reputation(),
            "Shutdown complete"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledger_telemetry::PAPERS_SUBMITTED;
    use shared_types::{ActorId, ContentRef};

    #[tokio::test]
    async fn test_runtime_lifecycle() {
        let mut runtime = LedgerRuntime::new(NodeConfig::default());
        runtime.start();

        let before = PAPERS_SUBMITTED.get();
        let resp = runtime.dispatch(AuthenticatedMessage::new(
            ActorId::from("alice"),
            0,
            LedgerRequest::SubmitPaper {
                content: ContentRef::from("p"),
            },
        ));
        assert!(resp.success);

        runtime.shutdown().await.unwrap();
        assert!(PAPERS_SUBMITTED.get() > before);
    }
}
