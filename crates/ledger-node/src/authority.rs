//! # Ledger Authority
//!
//! The single serializing authority. Mutating requests take the write
//! lock and run one at a time; queries share the read lock and never see
//! a half-applied mutation.

use std::sync::Arc;

use ledger_telemetry::{metric_inc, OPERATIONS_REJECTED};
use parking_lot::RwLock;
use pl_01_review_ledger::{
    BusAuditSink, LedgerConfig, LedgerIpcHandler, LedgerRequest, LedgerResponse,
    ReviewLedgerApi, ReviewLedgerService, SystemTimeSource, VerificationProvider,
};
use shared_bus::InMemoryEventBus;
use shared_types::AuthenticatedMessage;
use tracing::debug;

/// Service type hosted by the node.
pub type NodeService =
    ReviewLedgerService<Box<dyn VerificationProvider>, SystemTimeSource, BusAuditSink>;

/// Shared handle to the ledger. Cheap to clone.
#[derive(Clone)]
pub struct LedgerAuthority {
    inner: Arc<RwLock<LedgerIpcHandler<NodeService>>>,
}

impl LedgerAuthority {
    /// Build a ledger that audits into `bus`.
    pub fn new(
        config: LedgerConfig,
        verifier: Box<dyn VerificationProvider>,
        bus: Arc<InMemoryEventBus>,
    ) -> Self {
        let service =
            ReviewLedgerService::with_ports(config, verifier, SystemTimeSource, BusAuditSink::new(bus));
        Self {
            inner: Arc::new(RwLock::new(LedgerIpcHandler::new(service))),
        }
    }

    /// Apply one request envelope.
    pub fn dispatch(&self, msg: AuthenticatedMessage<LedgerRequest>) -> LedgerResponse {
        let op = msg.payload.op();
        let response = if msg.payload.is_mutation() {
            self.inner.write().handle(msg)
        } else {
            self.inner.read().handle_query(msg)
        };

        if let Some(code) = response.error_code() {
            debug!(op, code, correlation_id = %response.correlation_id, "Request rejected");
            metric_inc!(OPERATIONS_REJECTED, &[code]);
        }
        response
    }

    /// Run `f` against the service under the read lock.
    pub fn read<R>(&self, f: impl FnOnce(&NodeService) -> R) -> R {
        f(self.inner.read().service())
    }

    /// Total reputation across all actors.
    pub fn total_reputation(&self) -> u64 {
        self.read(|svc| svc.store().actors.total_reputation())
    }

    pub fn paper_count(&self) -> usize {
        self.read(ReviewLedgerApi::paper_count)
    }
}
