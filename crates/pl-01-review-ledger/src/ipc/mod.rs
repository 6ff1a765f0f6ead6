//! IPC layer: wire payloads and the envelope-aware handler.

pub mod handler;
pub mod payloads;

pub use handler::LedgerIpcHandler;
pub use payloads::{ErrorPayload, LedgerRequest, LedgerResponse, ResponseBody};
