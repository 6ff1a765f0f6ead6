//! # Peer Ledger Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── integration/      # Service + event bus flows
//! │   ├── flows.rs      # Audit events through the bus
//! │   └── scenarios.rs  # Review and publication scenarios over IPC
//! │
//! └── properties.rs     # Random operation sequences vs. ledger invariants
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p pl-tests
//!
//! # By category
//! cargo test -p pl-tests integration::
//! cargo test -p pl-tests properties::
//!
//! # Benchmarks
//! cargo bench -p pl-tests
//! ```

pub mod integration;
pub mod properties;
