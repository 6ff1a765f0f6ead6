//! IPC payloads for the Review Ledger.
//!
//! Requests carry no caller field. The caller is always the envelope sender.

use crate::domain::{
    ActorId, ActorProfile, ContentRef, ErrorKind, JournalEntry, LedgerError, PaperDetails,
    PaperId, Review, ReviewOutcome,
};
use serde::{Deserialize, Serialize};
use shared_types::MessageError;
use uuid::Uuid;

/// Every operation the ledger accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum LedgerRequest {
    SubmitPaper {
        content: ContentRef,
    },
    SubmitReview {
        paper_id: PaperId,
        verdict: bool,
        content: ContentRef,
    },
    SubmitRevision {
        paper_id: PaperId,
        content: ContentRef,
    },
    GetPaperDetails {
        paper_id: PaperId,
    },
    GetReputation {
        actor: ActorId,
    },
    GetReviews {
        paper_id: PaperId,
    },
    GetRevisionHistory {
        paper_id: PaperId,
    },
    GetActorProfile {
        actor: ActorId,
    },
    GetApprovalRate {
        paper_id: PaperId,
    },
    PaperCount,
    PapersByAuthor {
        author: ActorId,
    },
    JournalSince {
        sequence: u64,
    },
    CheckInvariants,
}

impl LedgerRequest {
    /// Whether this request changes ledger state.
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Self::SubmitPaper { .. } | Self::SubmitReview { .. } | Self::SubmitRevision { .. }
        )
    }

    /// Operation name, for logs and metrics.
    pub fn op(&self) -> &'static str {
        match self {
            Self::SubmitPaper { .. } => "submit_paper",
            Self::SubmitReview { .. } => "submit_review",
            Self::SubmitRevision { .. } => "submit_revision",
            Self::GetPaperDetails { .. } => "get_paper_details",
            Self::GetReputation { .. } => "get_reputation",
            Self::GetReviews { .. } => "get_reviews",
            Self::GetRevisionHistory { .. } => "get_revision_history",
            Self::GetActorProfile { .. } => "get_actor_profile",
            Self::GetApprovalRate { .. } => "get_approval_rate",
            Self::PaperCount => "paper_count",
            Self::PapersByAuthor { .. } => "papers_by_author",
            Self::JournalSince { .. } => "journal_since",
            Self::CheckInvariants => "check_invariants",
        }
    }
}

/// Successful result of a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResponseBody {
    PaperSubmitted { paper_id: PaperId },
    ReviewRecorded { outcome: ReviewOutcome },
    PaperRevised { revision_count: usize },
    PaperDetails { details: PaperDetails },
    Reputation { actor: ActorId, reputation: u64 },
    Reviews { reviews: Vec<Review> },
    RevisionHistory { revisions: Vec<ContentRef> },
    ActorProfile { profile: Option<ActorProfile> },
    ApprovalRate { approval_rate: Option<u8> },
    PaperCount { count: usize },
    Papers { paper_ids: Vec<PaperId> },
    Journal { entries: Vec<JournalEntry> },
    Invariants { holds: bool, violation: Option<String> },
}

/// Error code sent when a mutation reaches the read-only path.
pub const WRITE_REQUIRED: &str = "WRITE_REQUIRED";

/// Failed result of a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    /// Stable machine-readable code, e.g. `DUPLICATE_REVIEW`.
    pub code: String,
    /// Human-readable detail.
    pub message: String,
}

impl ErrorPayload {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// The ledger error kind, if this payload carries one.
    pub fn ledger_kind(&self) -> Option<ErrorKind> {
        serde_json::from_value(serde_json::Value::String(self.code.clone())).ok()
    }
}

impl From<&LedgerError> for ErrorPayload {
    fn from(err: &LedgerError) -> Self {
        Self::new(err.kind().as_str(), err.to_string())
    }
}

impl From<&MessageError> for ErrorPayload {
    fn from(err: &MessageError) -> Self {
        let code = match err {
            MessageError::UnsupportedVersion { .. } => "UNSUPPORTED_VERSION",
            MessageError::MissingSender => "MISSING_SENDER",
            MessageError::MalformedPayload(_) => "MALFORMED_PAYLOAD",
        };
        Self::new(code, err.to_string())
    }
}

/// Response to one envelope. Exactly one of `body` and `error` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerResponse {
    /// Echo of the request's correlation id.
    pub correlation_id: Uuid,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<ResponseBody>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorPayload>,
}

impl LedgerResponse {
    pub fn ok(correlation_id: Uuid, body: ResponseBody) -> Self {
        Self {
            correlation_id,
            success: true,
            body: Some(body),
            error: None,
        }
    }

    pub fn err(correlation_id: Uuid, error: ErrorPayload) -> Self {
        Self {
            correlation_id,
            success: false,
            body: None,
            error: Some(error),
        }
    }

    /// Code of the error, if this response is a failure.
    pub fn error_code(&self) -> Option<&str> {
        self.error.as_ref().map(|e| e.code.as_str())
    }
}
