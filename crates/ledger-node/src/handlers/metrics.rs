//! # Metrics Recorder
//!
//! Subscribes to the event bus and turns committed ledger events into
//! Prometheus counters. Rejections never reach the bus; the authority
//! counts those itself.
//!
//! With a reputation source attached, the reputation gauge is read from
//! the ledger rather than summed from events, so a lagging subscription
//! cannot make it drift.

use std::sync::Arc;

use ledger_telemetry::{
    metric_inc, verdict_label, EVENTS_LAGGED, PAPERS_PUBLISHED, PAPERS_SUBMITTED,
    REPUTATION_TOTAL, REVIEWS_RECORDED, REVISIONS_RECORDED,
};
use pl_01_review_ledger::LedgerConfig;
use shared_bus::{LedgerEvent, Subscription};
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Current total reputation held by the ledger.
pub type ReputationSource = Arc<dyn Fn() -> u64 + Send + Sync>;

/// Event handler that feeds the metrics registry.
pub struct MetricsRecorder {
    subscription: Subscription,
    per_review: i64,
    per_publication: i64,
    reputation_source: Option<ReputationSource>,
    lagged_seen: u64,
}

impl MetricsRecorder {
    pub fn new(subscription: Subscription, config: &LedgerConfig) -> Self {
        Self {
            subscription,
            per_review: i64::try_from(config.reputation_per_review).unwrap_or(i64::MAX),
            per_publication: i64::try_from(config.reputation_for_approved_paper)
                .unwrap_or(i64::MAX),
            reputation_source: None,
            lagged_seen: 0,
        }
    }

    /// Read the reputation gauge from `source` instead of summing rewards.
    pub fn with_reputation_source(mut self, source: ReputationSource) -> Self {
        self.reputation_source = Some(source);
        self
    }

    /// Update the metrics for one event.
    pub fn record(&self, event: &LedgerEvent) {
        match event {
            LedgerEvent::PaperSubmitted { .. } => metric_inc!(PAPERS_SUBMITTED),
            LedgerEvent::PaperReviewed { verdict, .. } => {
                metric_inc!(REVIEWS_RECORDED, &[verdict_label(*verdict)]);
                self.credit_reputation(self.per_review);
            }
            LedgerEvent::PaperPublished { .. } => {
                metric_inc!(PAPERS_PUBLISHED);
                self.credit_reputation(self.per_publication);
            }
            LedgerEvent::PaperRevised { .. } => metric_inc!(REVISIONS_RECORDED),
        }
        debug!(event = event.name(), paper_id = event.paper_id(), "Metrics updated");
    }

    fn credit_reputation(&self, reward: i64) {
        match &self.reputation_source {
            Some(source) => self.sync_reputation(source),
            None => REPUTATION_TOTAL.add(reward),
        }
    }

    fn sync_reputation(&self, source: &ReputationSource) {
        REPUTATION_TOTAL.set(i64::try_from(source()).unwrap_or(i64::MAX));
    }

    /// Account for events the subscription skipped since the last check.
    ///
    /// Returns the number of newly missed events.
    pub fn check_lag(&mut self) -> u64 {
        let lagged = self.subscription.lagged();
        let missed = lagged.saturating_sub(self.lagged_seen);
        if missed == 0 {
            return 0;
        }
        self.lagged_seen = lagged;
        EVENTS_LAGGED.inc_by(missed);

        match &self.reputation_source {
            Some(source) => self.sync_reputation(source),
            None => warn!(missed, "Reputation gauge is missing rewards from skipped events"),
        }
        missed
    }

    /// Run until the bus closes or `shutdown` fires. Returns the number of
    /// events recorded.
    ///
    /// Events already buffered when shutdown arrives are still recorded.
    pub async fn run(mut self, mut shutdown: watch::Receiver<bool>) -> u64 {
        info!("Metrics recorder started");
        let mut recorded = 0u64;

        loop {
            tokio::select! {
                event = self.subscription.recv() => match event {
                    Some(event) => {
                        self.check_lag();
                        self.record(&event);
                        recorded += 1;
                    }
                    None => break,
                },
                _ = shutdown.changed() => {
                    for event in self.subscription.drain() {
                        self.record(&event);
                        recorded += 1;
                    }
                    self.check_lag();
                    break;
                }
            }
        }

        info!(recorded, "Metrics recorder stopped");
        recorded
    }
}
