//! # Ledger Events
//!
//! The audit events emitted by the review ledger. Each one corresponds to a
//! committed state transition and carries the identifiers a consumer needs
//! to look the details up.

use serde::{Deserialize, Serialize};
use shared_types::entities::{ActorId, ContentRef, PaperId, Timestamp};

/// All events that can be published to the event bus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LedgerEvent {
    /// A new paper entered the ledger.
    PaperSubmitted {
        paper_id: PaperId,
        author: ActorId,
        content: ContentRef,
        timestamp: Timestamp,
    },

    /// A review was recorded against a paper.
    PaperReviewed {
        paper_id: PaperId,
        reviewer: ActorId,
        verdict: bool,
        /// Review count after this review was applied.
        review_count: u64,
        /// Approval count after this review was applied.
        approval_count: u64,
    },

    /// A paper crossed the publication threshold.
    /// Always follows the `PaperReviewed` event that caused it.
    PaperPublished {
        paper_id: PaperId,
        author: ActorId,
        /// Truncated approval percentage at the moment of publication.
        approval_rate: u8,
    },

    /// The author appended a revision.
    PaperRevised {
        paper_id: PaperId,
        author: ActorId,
        content: ContentRef,
        /// Length of the revision history after the append.
        revision_count: usize,
    },
}

impl LedgerEvent {
    /// Get the topic for this event (for filtering).
    #[must_use]
    pub fn topic(&self) -> EventTopic {
        match self {
            Self::PaperSubmitted { .. } => EventTopic::Submissions,
            Self::PaperReviewed { .. } => EventTopic::Reviews,
            Self::PaperPublished { .. } => EventTopic::Publications,
            Self::PaperRevised { .. } => EventTopic::Revisions,
        }
    }

    /// The paper this event is about.
    #[must_use]
    pub fn paper_id(&self) -> PaperId {
        match self {
            Self::PaperSubmitted { paper_id, .. }
            | Self::PaperReviewed { paper_id, .. }
            | Self::PaperPublished { paper_id, .. }
            | Self::PaperRevised { paper_id, .. } => *paper_id,
        }
    }

    /// Short stable name, used as a metrics label and in logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::PaperSubmitted { .. } => "paper_submitted",
            Self::PaperReviewed { .. } => "paper_reviewed",
            Self::PaperPublished { .. } => "paper_published",
            Self::PaperRevised { .. } => "paper_revised",
        }
    }
}

/// Event topics for subscription filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventTopic {
    /// `PaperSubmitted`.
    Submissions,
    /// `PaperReviewed`.
    Reviews,
    /// `PaperPublished`.
    Publications,
    /// `PaperRevised`.
    Revisions,
    /// All events (no filtering).
    All,
}

/// Filter for subscribing to specific events.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    /// Topics to include. Empty means all topics.
    pub topics: Vec<EventTopic>,
    /// Papers to include. Empty means all papers.
    pub papers: Vec<PaperId>,
}

impl EventFilter {
    /// Create a filter that accepts all events.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Create a filter for specific topics.
    #[must_use]
    pub fn topics(topics: Vec<EventTopic>) -> Self {
        Self {
            topics,
            papers: Vec::new(),
        }
    }

    /// Create a filter for events about specific papers.
    #[must_use]
    pub fn for_papers(papers: Vec<PaperId>) -> Self {
        Self {
            topics: Vec::new(),
            papers,
        }
    }

    /// Check if an event matches this filter.
    #[must_use]
    pub fn matches(&self, event: &LedgerEvent) -> bool {
        let topic_match = self.topics.is_empty()
            || self.topics.contains(&EventTopic::All)
            || self.topics.contains(&event.topic());

        let paper_match = self.papers.is_empty() || self.papers.contains(&event.paper_id());

        topic_match && paper_match
    }
}
