//! Review Ledger Service
//!
//! Main service implementing `ReviewLedgerApi`. Owns the ledger store and
//! the outbound ports; every mutation validates first, commits, then
//! journals and audits the resulting events in order.

use crate::adapters::{AutoVerify, NoOpAuditSink};
use crate::algorithms::aggregation::{self, ReviewSubmission};
use crate::algorithms::approval::approval_rate;
use crate::config::LedgerConfig;
use crate::domain::invariants::check_store;
use crate::domain::{
    ActorId, ActorProfile, ContentRef, InvariantViolation, JournalEntry, LedgerError,
    LedgerStore, PaperDetails, PaperId, Review, ReviewOutcome,
};
use crate::ports::{
    AuditSink, ReviewLedgerApi, SystemTimeSource, TimeSource, VerificationProvider,
};
use shared_bus::LedgerEvent;
use tracing::{debug, info};

/// Review Ledger Service
///
/// The single serializing authority over one `LedgerStore`. Mutations take
/// `&mut self`; wrap the service in a lock to share it between threads.
pub struct ReviewLedgerService<V = AutoVerify, T = SystemTimeSource, A = NoOpAuditSink> {
    config: LedgerConfig,
    store: LedgerStore,
    verifier: V,
    clock: T,
    audit: A,
}

impl ReviewLedgerService {
    /// Service with auto-verification, the system clock and no audit sink.
    pub fn new(config: LedgerConfig) -> Self {
        Self::with_ports(config, AutoVerify, SystemTimeSource, NoOpAuditSink)
    }
}

impl Default for ReviewLedgerService {
    fn default() -> Self {
        Self::new(LedgerConfig::default())
    }
}

impl<V, T, A> ReviewLedgerService<V, T, A>
where
    V: VerificationProvider,
    T: TimeSource,
    A: AuditSink,
{
    /// Service with explicit port implementations.
    pub fn with_ports(config: LedgerConfig, verifier: V, clock: T, audit: A) -> Self {
        Self {
            config,
            store: LedgerStore::new(),
            verifier,
            clock,
            audit,
        }
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Read access to the underlying state.
    pub fn store(&self) -> &LedgerStore {
        &self.store
    }

    pub fn audit(&self) -> &A {
        &self.audit
    }

    /// Full journal, oldest first.
    pub fn journal(&self) -> &[JournalEntry] {
        self.store.journal()
    }

    fn resolve_verified(&self, actor: &ActorId) -> bool {
        self.store
            .actors
            .resolve_verified(actor, || self.verifier.is_verified(actor))
    }

    fn emit(&mut self, events: Vec<LedgerEvent>) {
        for event in events {
            let sequence = self.store.append_event(event.clone());
            debug!(sequence, event = event.name(), paper_id = event.paper_id(), "Journaled event");
            self.audit.record(&event);
        }
    }

    fn paper(&self, paper_id: PaperId) -> Result<&crate::domain::Paper, LedgerError> {
        self.store
            .papers
            .get(paper_id)
            .ok_or(LedgerError::NotFound(paper_id))
    }
}

impl<V, T, A> ReviewLedgerApi for ReviewLedgerService<V, T, A>
where
    V: VerificationProvider,
    T: TimeSource,
    A: AuditSink,
{
    fn submit_paper(&mut self, caller: &ActorId, content: ContentRef) -> PaperId {
        let now = self.clock.now();
        let verified = self.resolve_verified(caller);

        self.store.actors.record_submission(caller, verified);
        let paper_id = self.store.papers.submit(caller.clone(), content.clone(), now);

        info!(paper_id, actor = %caller, content = %content, "Paper submitted");

        self.emit(vec![LedgerEvent::PaperSubmitted {
            paper_id,
            author: caller.clone(),
            content,
            timestamp: now,
        }]);
        paper_id
    }

    fn submit_review(
        &mut self,
        caller: &ActorId,
        paper_id: PaperId,
        verdict: bool,
        content: ContentRef,
    ) -> Result<ReviewOutcome, LedgerError> {
        let verified = self.resolve_verified(caller);
        let submission = ReviewSubmission {
            paper_id,
            reviewer: caller.clone(),
            verdict,
            content,
            timestamp: self.clock.now(),
        };

        let (outcome, events) =
            aggregation::submit_review(&mut self.store, &self.config, submission, verified)
                .map_err(|e| {
                    debug!(paper_id, actor = %caller, error = %e, "Review rejected");
                    e
                })?;

        info!(
            paper_id,
            actor = %caller,
            verdict,
            review_count = outcome.review_count,
            approval_rate = ?outcome.approval_rate,
            "Review recorded"
        );
        if outcome.published {
            info!(paper_id, approval_rate = ?outcome.approval_rate, "Paper published");
        }

        self.emit(events);
        Ok(outcome)
    }

    fn submit_revision(
        &mut self,
        caller: &ActorId,
        paper_id: PaperId,
        content: ContentRef,
    ) -> Result<usize, LedgerError> {
        let revision_count = self
            .store
            .papers
            .revise(paper_id, caller, content.clone())
            .map_err(|e| {
                debug!(paper_id, actor = %caller, error = %e, "Revision rejected");
                e
            })?;

        info!(paper_id, actor = %caller, revision_count, "Paper revised");

        self.emit(vec![LedgerEvent::PaperRevised {
            paper_id,
            author: caller.clone(),
            content,
            revision_count,
        }]);
        Ok(revision_count)
    }

    fn get_paper_details(&self, paper_id: PaperId) -> Result<PaperDetails, LedgerError> {
        self.paper(paper_id).map(|p| p.details())
    }

    fn get_reputation(&self, actor: &ActorId) -> u64 {
        self.store.actors.reputation(actor)
    }

    fn get_reviews(&self, paper_id: PaperId) -> Result<Vec<Review>, LedgerError> {
        self.paper(paper_id).map(|p| p.reviews().to_vec())
    }

    fn get_revision_history(&self, paper_id: PaperId) -> Result<Vec<ContentRef>, LedgerError> {
        self.paper(paper_id).map(|p| p.revisions().to_vec())
    }

    fn get_actor_profile(&self, actor: &ActorId) -> Option<ActorProfile> {
        self.store.actors.get(actor).map(ActorProfile::from)
    }

    fn get_approval_rate(&self, paper_id: PaperId) -> Result<Option<u8>, LedgerError> {
        self.paper(paper_id)
            .map(|p| approval_rate(p.approval_count(), p.review_count()))
    }

    fn paper_count(&self) -> usize {
        self.store.papers.len()
    }

    fn papers_by_author(&self, author: &ActorId) -> Vec<PaperId> {
        self.store.papers.papers_by_author(author)
    }

    fn journal_since(&self, sequence: u64) -> Vec<JournalEntry> {
        self.store.journal_since(sequence).to_vec()
    }

    fn check_invariants(&self) -> Result<(), InvariantViolation> {
        check_store(&self.store, &self.config)
    }
}
