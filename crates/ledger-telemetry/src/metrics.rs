//! Prometheus metrics for the Peer Ledger.
//!
//! All metrics follow the naming convention: `pl_ledger_<metric>[_<unit>]`

use lazy_static::lazy_static;
use prometheus::{Encoder, IntCounter, IntCounterVec, IntGauge, Opts, Registry, TextEncoder};

use crate::TelemetryError;

lazy_static! {
    /// Global metrics registry
    pub static ref REGISTRY: Registry = Registry::new();

    /// Papers accepted by the ledger
    pub static ref PAPERS_SUBMITTED: IntCounter = IntCounter::new(
        "pl_ledger_papers_submitted_total",
        "Total number of papers submitted"
    ).expect("metric creation failed");

    /// Reviews recorded, by verdict
    pub static ref REVIEWS_RECORDED: IntCounterVec = IntCounterVec::new(
        Opts::new("pl_ledger_reviews_recorded_total", "Total reviews recorded"),
        &["verdict"]  // verdict: approve/reject
    ).expect("metric creation failed");

    /// Papers that crossed the publication threshold
    pub static ref PAPERS_PUBLISHED: IntCounter = IntCounter::new(
        "pl_ledger_papers_published_total",
        "Total number of papers published"
    ).expect("metric creation failed");

    /// Revisions appended
    pub static ref REVISIONS_RECORDED: IntCounter = IntCounter::new(
        "pl_ledger_revisions_recorded_total",
        "Total number of paper revisions"
    ).expect("metric creation failed");

    /// Rejected operations, by error code
    pub static ref OPERATIONS_REJECTED: IntCounterVec = IntCounterVec::new(
        Opts::new("pl_ledger_operations_rejected_total", "Operations rejected by the ledger"),
        &["code"]
    ).expect("metric creation failed");

    /// Audit events a bus subscriber missed by lagging
    pub static ref EVENTS_LAGGED: IntCounter = IntCounter::new(
        "pl_ledger_events_lagged_total",
        "Audit events dropped because a subscriber fell behind"
    ).expect("metric creation failed");

    /// Sum of all actor reputation
    pub static ref REPUTATION_TOTAL: IntGauge = IntGauge::new(
        "pl_ledger_reputation_total",
        "Sum of reputation across all actors"
    ).expect("metric creation failed");
}

/// Register all metrics with the global registry.
///
/// Safe to call more than once.
pub fn register_metrics() -> Result<(), TelemetryError> {
    let metrics: Vec<Box<dyn prometheus::core::Collector>> = vec![
        Box::new(PAPERS_SUBMITTED.clone()),
        Box::new(REVIEWS_RECORDED.clone()),
        Box::new(PAPERS_PUBLISHED.clone()),
        Box::new(REVISIONS_RECORDED.clone()),
        Box::new(OPERATIONS_REJECTED.clone()),
        Box::new(EVENTS_LAGGED.clone()),
        Box::new(REPUTATION_TOTAL.clone()),
    ];

    for metric in metrics {
        match REGISTRY.register(metric) {
            Ok(()) | Err(prometheus::Error::AlreadyReg) => {}
            Err(e) => return Err(TelemetryError::MetricsInit(e.to_string())),
        }
    }
    Ok(())
}

/// Encode all metrics as Prometheus text format.
pub fn gather_metrics() -> Result<String, TelemetryError> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::MetricsInit(e.to_string()))
}

/// Label value for a review verdict.
pub fn verdict_label(verdict: bool) -> &'static str {
    if verdict {
        "approve"
    } else {
        "reject"
    }
}
