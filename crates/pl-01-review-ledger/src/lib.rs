//! # Review Ledger Subsystem
//!
//! **Subsystem ID:** 1
//! **Status:** Production-Ready
//!
//! ## Purpose
//!
//! Tracks paper submissions, peer reviews and researcher reputation as an
//! append-only ledger of state transitions. Independent, unordered reviews
//! accumulate against a paper and deterministically trigger publication;
//! reputation rewards are applied exactly once per qualifying event.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | `review_count == approvals + rejections` | `domain/entities.rs` - `Paper::record_review()` |
//! | INVARIANT-2 | One review per (paper, reviewer) | `algorithms/aggregation.rs` - `validate_review()` |
//! | INVARIANT-3 | No self review | `algorithms/aggregation.rs` - `validate_review()` |
//! | INVARIANT-4 | Published papers are closed | `aggregation.rs`, `domain/ledger.rs` - `check_revise()` |
//! | INVARIANT-5 | Publication iff rate >= threshold after >= N reviews | `algorithms/approval.rs` |
//! | INVARIANT-6 | Reputation never decreases | `domain/registry.rs` - saturating adds only |
//!
//! ## Review State Machine
//!
//! ```text
//! [OPEN] ──review (count < N or rate < T)──→ [OPEN]
//!    │
//!    └──review (count >= N and rate >= T)──→ [PUBLISHED]  (terminal)
//! ```
//!
//! With defaults N = 3 and T = 67, reviews `true, true, false` leave the
//! paper open at 66%; a fourth `true` publishes it at 75%.
//!
//! ## Precondition Order (`submit_review`)
//!
//! | # | Check | Error |
//! |---|-------|-------|
//! | 1 | Paper exists | `NotFound` |
//! | 2 | Reviewer verified | `Unauthorized` |
//! | 3 | Reviewer is not the author | `SelfReviewForbidden` |
//! | 4 | Reviewer has not reviewed yet | `DuplicateReview` |
//! | 5 | Paper not published | `AlreadyPublished` |
//!
//! A rejected operation applies no effects and emits no event.
//!
//! ## Outbound Dependencies
//!
//! | Port | Purpose | Default adapter |
//! |------|---------|-----------------|
//! | `VerificationProvider` | Reviewer capability flag | `AutoVerify` |
//! | `TimeSource` | Submission and review timestamps | `SystemTimeSource` |
//! | `AuditSink` | Committed events | `NoOpAuditSink` |
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  ipc/         - LedgerRequest payloads, LedgerIpcHandler        │
//! │  adapters/    - audit sinks, verifiers, manual clock            │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  application/ - ReviewLedgerService                             │
//! │  ports/       - ReviewLedgerApi, outbound traits                │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  algorithms/  - aggregation, approval rate, publication         │
//! │  domain/      - Actor, Paper, Review, store, invariants         │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod adapters;
pub mod algorithms;
pub mod application;
pub mod config;
pub mod domain;
pub mod ipc;
pub mod ports;

pub use adapters::{
    AllowListVerifier, AutoVerify, BusAuditSink, ManualTimeSource, NoOpAuditSink,
    RecordingAuditSink, VerificationPolicy,
};
pub use application::ReviewLedgerService;
pub use config::LedgerConfig;
pub use domain::{
    ActorProfile, ErrorKind, InvariantViolation, JournalEntry, LedgerError, PaperDetails, Review,
    ReviewOutcome,
};
pub use ipc::{ErrorPayload, LedgerIpcHandler, LedgerRequest, LedgerResponse, ResponseBody};
pub use ports::{AuditSink, ReviewLedgerApi, SystemTimeSource, TimeSource, VerificationProvider};
