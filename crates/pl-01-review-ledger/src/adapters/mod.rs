//! Adapters for the outbound ports.

pub mod audit;
pub mod clock;
pub mod verification;

pub use audit::{BusAuditSink, NoOpAuditSink, RecordingAuditSink};
pub use clock::ManualTimeSource;
pub use verification::{AllowListVerifier, AutoVerify, PolicyParseError, VerificationPolicy};
