//! Ports layer: the driving API and the driven dependencies.

pub mod inbound;
pub mod outbound;

pub use inbound::ReviewLedgerApi;
pub use outbound::{AuditSink, SystemTimeSource, TimeSource, VerificationProvider};
