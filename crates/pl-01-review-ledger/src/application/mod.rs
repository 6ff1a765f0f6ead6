//! Application layer: the service that drives the domain through the ports.

pub mod service;

pub use service::ReviewLedgerService;
