//! # Ledger Telemetry
//!
//! Logging and metrics for the Peer Ledger.
//!
//! ## Components
//!
//! - **Logs**: `tracing` events rendered by `tracing-subscriber` (pretty or JSON)
//! - **Metrics**: Prometheus counters and gauges in a dedicated registry
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ledger_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     init_telemetry(TelemetryConfig::from_env())?;
//!     // ledger work; then
//!     println!("{}", ledger_telemetry::gather_metrics()?);
//!     Ok(())
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `OTEL_SERVICE_NAME` | `peer-ledger` | Service name in logs |
//! | `PL_LOG_LEVEL` / `RUST_LOG` | `info` | Log level filter |
//! | `PL_CONSOLE_OUTPUT` | `true` | Emit logs at all |
//! | `PL_JSON_LOGS` | `false` | JSON log lines |

mod config;
mod logging;
pub mod metrics;

pub use config::TelemetryConfig;
pub use logging::{build_filter, init_logging};
pub use metrics::{
    gather_metrics, register_metrics, verdict_label, EVENTS_LAGGED, OPERATIONS_REJECTED,
    PAPERS_PUBLISHED,
    PAPERS_SUBMITTED, REPUTATION_TOTAL, REVIEWS_RECORDED, REVISIONS_RECORDED,
};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Failed to initialize logging: {0}")]
    LoggingInit(String),

    #[error("Failed to initialize Prometheus metrics: {0}")]
    MetricsInit(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Register metrics and install the global log subscriber.
pub fn init_telemetry(config: TelemetryConfig) -> Result<(), TelemetryError> {
    // Metrics first so early events are counted
    register_metrics()?;
    init_logging(&config)
}

/// Convenience macro for recording a metric increment.
#[macro_export]
macro_rules! metric_inc {
    ($metric:expr) => {
        $metric.inc()
    };
    ($metric:expr, $labels:expr) => {
        $metric.with_label_values($labels).inc()
    };
}
