//! # Event Handlers
//!
//! Background tasks fed by the event bus.

pub mod metrics;

pub use metrics::{MetricsRecorder, ReputationSource};
