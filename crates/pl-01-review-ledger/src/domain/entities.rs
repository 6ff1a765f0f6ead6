//! Core domain entities for the Review Ledger.
//!
//! `Actor`, `Paper` and `Review` are the three records of the data model.
//! The read-only projections (`PaperDetails`, `ActorProfile`,
//! `ReviewOutcome`) are what the query side hands out.

use serde::{Deserialize, Serialize};
use shared_bus::LedgerEvent;
use std::collections::HashSet;

pub use shared_types::entities::{ActorId, ContentRef, PaperId, Timestamp};

/// A researcher known to the ledger.
///
/// Created on first interaction with zero counters; never deleted.
/// Reputation only ever grows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// Unique key.
    pub id: ActorId,
    /// Accumulated reputation score.
    pub reputation: u64,
    /// Papers this actor has submitted.
    pub papers_submitted: u64,
    /// Reviews this actor has completed.
    pub reviews_completed: u64,
    /// Capability flag, fixed when the actor is first created.
    pub verified: bool,
}

impl Actor {
    /// A fresh actor with all counters at zero.
    pub fn new(id: ActorId, verified: bool) -> Self {
        Self {
            id,
            reputation: 0,
            papers_submitted: 0,
            reviews_completed: 0,
            verified,
        }
    }
}

/// A single immutable review record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub reviewer: ActorId,
    pub paper_id: PaperId,
    /// `true` approves, `false` rejects.
    pub verdict: bool,
    pub content: ContentRef,
    pub timestamp: Timestamp,
}

/// A paper and everything recorded against it.
///
/// Fields are private so the counters can only move through the
/// aggregation path, which keeps `review_count == approvals + rejections`
/// and the reviewer set in lockstep with the review list.
#[derive(Clone, Debug)]
pub struct Paper {
    id: PaperId,
    content: ContentRef,
    author: ActorId,
    created_at: Timestamp,
    revisions: Vec<ContentRef>,
    review_count: u64,
    approval_count: u64,
    rejection_count: u64,
    published: bool,
    reviews: Vec<Review>,
    reviewed_by: HashSet<ActorId>,
}

impl Paper {
    /// A freshly submitted paper. The revision history starts with `content`.
    pub(crate) fn new(
        id: PaperId,
        author: ActorId,
        content: ContentRef,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            revisions: vec![content.clone()],
            content,
            author,
            created_at,
            review_count: 0,
            approval_count: 0,
            rejection_count: 0,
            published: false,
            reviews: Vec::new(),
            reviewed_by: HashSet::new(),
        }
    }

    pub fn id(&self) -> PaperId {
        self.id
    }

    /// Current content (the last revision).
    pub fn content(&self) -> &ContentRef {
        &self.content
    }

    pub fn author(&self) -> &ActorId {
        &self.author
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Every content reference in submission order.
    pub fn revisions(&self) -> &[ContentRef] {
        &self.revisions
    }

    pub fn review_count(&self) -> u64 {
        self.review_count
    }

    pub fn approval_count(&self) -> u64 {
        self.approval_count
    }

    pub fn rejection_count(&self) -> u64 {
        self.rejection_count
    }

    pub fn is_published(&self) -> bool {
        self.published
    }

    /// Reviews in the order they were recorded.
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn has_reviewed(&self, actor: &ActorId) -> bool {
        self.reviewed_by.contains(actor)
    }

    pub(crate) fn reviewed_by(&self) -> &HashSet<ActorId> {
        &self.reviewed_by
    }

    pub(crate) fn append_revision(&mut self, content: ContentRef) {
        self.revisions.push(content.clone());
        self.content = content;
    }

    pub(crate) fn record_review(&mut self, review: Review) {
        if review.verdict {
            self.approval_count = self.approval_count.saturating_add(1);
        } else {
            self.rejection_count = self.rejection_count.saturating_add(1);
        }
        self.review_count = self.review_count.saturating_add(1);
        self.reviewed_by.insert(review.reviewer.clone());
        self.reviews.push(review);
    }

    pub(crate) fn mark_published(&mut self) {
        self.published = true;
    }

    /// Snapshot for the query side.
    pub fn details(&self) -> PaperDetails {
        PaperDetails {
            content: self.content.clone(),
            author: self.author.clone(),
            timestamp: self.created_at,
            review_count: self.review_count,
            approval_count: self.approval_count,
            rejection_count: self.rejection_count,
            published: self.published,
        }
    }
}

/// Result of `get_paper_details`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperDetails {
    pub content: ContentRef,
    pub author: ActorId,
    pub timestamp: Timestamp,
    pub review_count: u64,
    pub approval_count: u64,
    pub rejection_count: u64,
    pub published: bool,
}

/// Result of `get_actor_profile`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorProfile {
    pub id: ActorId,
    pub reputation: u64,
    pub papers_submitted: u64,
    pub reviews_completed: u64,
    pub verified: bool,
}

impl From<&Actor> for ActorProfile {
    fn from(actor: &Actor) -> Self {
        Self {
            id: actor.id.clone(),
            reputation: actor.reputation,
            papers_submitted: actor.papers_submitted,
            reviews_completed: actor.reviews_completed,
            verified: actor.verified,
        }
    }
}

/// What a successful review did to its paper.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewOutcome {
    pub review_count: u64,
    pub approval_count: u64,
    /// Truncated approval percentage after this review.
    pub approval_rate: Option<u8>,
    /// `true` only if this review triggered publication.
    pub published: bool,
}

/// One journal record: an emitted event and its position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Starts at 1 and increases by exactly 1 per event.
    pub sequence: u64,
    pub event: LedgerEvent,
}
