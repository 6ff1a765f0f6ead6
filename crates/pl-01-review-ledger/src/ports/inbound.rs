//! # Inbound Port - ReviewLedgerApi
//!
//! The driving port. Mutations take the caller identity as an explicit
//! argument; the IPC layer fills it from the envelope sender and never
//! from the payload.

use crate::domain::{
    ActorId, ActorProfile, ContentRef, InvariantViolation, JournalEntry, LedgerError,
    PaperDetails, PaperId, Review, ReviewOutcome,
};

/// Primary API of the Review Ledger.
pub trait ReviewLedgerApi: Send + Sync {
    /// Submit a new paper. Never fails; the caller becomes its author.
    fn submit_paper(&mut self, caller: &ActorId, content: ContentRef) -> PaperId;

    /// Record a review by `caller`.
    ///
    /// # Errors
    /// In precedence order: `NotFound`, `Unauthorized`,
    /// `SelfReviewForbidden`, `DuplicateReview`, `AlreadyPublished`.
    fn submit_review(
        &mut self,
        caller: &ActorId,
        paper_id: PaperId,
        verdict: bool,
        content: ContentRef,
    ) -> Result<ReviewOutcome, LedgerError>;

    /// Append a revision. Returns the new history length.
    ///
    /// # Errors
    /// `NotFound`, `Forbidden` (caller is not the author), `AlreadyPublished`.
    fn submit_revision(
        &mut self,
        caller: &ActorId,
        paper_id: PaperId,
        content: ContentRef,
    ) -> Result<usize, LedgerError>;

    fn get_paper_details(&self, paper_id: PaperId) -> Result<PaperDetails, LedgerError>;

    /// Reputation of `actor`, 0 if the ledger has never seen them.
    fn get_reputation(&self, actor: &ActorId) -> u64;

    /// Reviews of a paper in the order they were recorded.
    fn get_reviews(&self, paper_id: PaperId) -> Result<Vec<Review>, LedgerError>;

    /// Content references of a paper in submission order.
    fn get_revision_history(&self, paper_id: PaperId) -> Result<Vec<ContentRef>, LedgerError>;

    fn get_actor_profile(&self, actor: &ActorId) -> Option<ActorProfile>;

    /// Truncated approval percentage; `Ok(None)` until the first review.
    fn get_approval_rate(&self, paper_id: PaperId) -> Result<Option<u8>, LedgerError>;

    fn paper_count(&self) -> usize;

    fn papers_by_author(&self, author: &ActorId) -> Vec<PaperId>;

    /// Journal entries with a sequence greater than `sequence`.
    fn journal_since(&self, sequence: u64) -> Vec<JournalEntry>;

    fn check_invariants(&self) -> Result<(), InvariantViolation>;
}
