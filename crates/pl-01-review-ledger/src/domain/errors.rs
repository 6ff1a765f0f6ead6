//! # Domain Errors
//!
//! Every way a ledger operation can be refused. All variants are terminal:
//! retrying with the same input yields the same error, and a refused
//! operation leaves the ledger untouched.

use serde::{Deserialize, Serialize};
use shared_types::entities::{ActorId, PaperId};
use std::fmt;
use thiserror::Error;

/// Ledger operation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// Unknown paper id.
    #[error("Paper not found: {0}")]
    NotFound(PaperId),

    /// Reviewer lacks the verified capability.
    #[error("Actor {0} is not verified")]
    Unauthorized(ActorId),

    /// Author attempted to review their own paper.
    #[error("Actor {actor} cannot review their own paper {paper_id}")]
    SelfReviewForbidden {
        /// Target paper
        paper_id: PaperId,
        /// The author
        actor: ActorId,
    },

    /// Reviewer already has a review on this paper.
    #[error("Actor {reviewer} already reviewed paper {paper_id}")]
    DuplicateReview {
        /// Target paper
        paper_id: PaperId,
        /// Repeat reviewer
        reviewer: ActorId,
    },

    /// Paper is published; reviews and revisions are closed.
    #[error("Paper {0} is already published")]
    AlreadyPublished(PaperId),

    /// Someone other than the author attempted a revision.
    #[error("Actor {actor} is not the author of paper {paper_id}")]
    Forbidden {
        /// Target paper
        paper_id: PaperId,
        /// Rejected caller
        actor: ActorId,
    },
}

impl LedgerError {
    /// The stable kind callers surface to end users.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Unauthorized(_) => ErrorKind::Unauthorized,
            Self::SelfReviewForbidden { .. } => ErrorKind::SelfReviewForbidden,
            Self::DuplicateReview { .. } => ErrorKind::DuplicateReview,
            Self::AlreadyPublished(_) => ErrorKind::AlreadyPublished,
            Self::Forbidden { .. } => ErrorKind::Forbidden,
        }
    }
}

/// Error taxonomy without payload, for wire responses and metrics labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    NotFound,
    Unauthorized,
    SelfReviewForbidden,
    DuplicateReview,
    AlreadyPublished,
    Forbidden,
}

impl ErrorKind {
    /// Wire name of this kind.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::SelfReviewForbidden => "SELF_REVIEW_FORBIDDEN",
            Self::DuplicateReview => "DUPLICATE_REVIEW",
            Self::AlreadyPublished => "ALREADY_PUBLISHED",
            Self::Forbidden => "FORBIDDEN",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A broken ledger invariant, reported by `check_invariants`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("Paper {paper_id}: review count {reviews} != approvals {approvals} + rejections {rejections}")]
    CountMismatch {
        paper_id: PaperId,
        reviews: u64,
        approvals: u64,
        rejections: u64,
    },

    #[error("Paper {paper_id}: reviewer set does not match review records")]
    ReviewerSetMismatch { paper_id: PaperId },

    #[error("Paper {paper_id}: author {author} holds a review")]
    SelfReview { paper_id: PaperId, author: ActorId },

    #[error("Paper {paper_id}: revision history is empty or out of sync")]
    RevisionHistory { paper_id: PaperId },

    #[error("Paper {paper_id}: published below threshold")]
    PublishedBelowThreshold { paper_id: PaperId },

    #[error("Paper {paper_id}: meets the publication threshold but is unpublished")]
    MissedPublication { paper_id: PaperId },

    #[error("Paper {paper_id}: id does not match its ledger position")]
    NonDenseId { paper_id: PaperId },

    #[error("Actor {actor}: reputation {actual} does not match recorded events ({expected})")]
    ReputationMismatch {
        actor: ActorId,
        expected: u64,
        actual: u64,
    },
}
