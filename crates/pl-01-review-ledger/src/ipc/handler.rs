//! IPC message handler for the Review Ledger.
//!
//! Validates the envelope, takes the caller from `sender`, and dispatches
//! the payload to the service.

use crate::domain::LedgerError;
use crate::ipc::payloads::{ErrorPayload, LedgerRequest, LedgerResponse, ResponseBody, WRITE_REQUIRED};
use crate::ports::ReviewLedgerApi;
use shared_types::{ActorId, AuthenticatedMessage};
use tracing::{debug, warn};

/// IPC handler wrapping a `ReviewLedgerApi` implementation.
pub struct LedgerIpcHandler<S> {
    service: S,
}

impl<S: ReviewLedgerApi> LedgerIpcHandler<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn service_mut(&mut self) -> &mut S {
        &mut self.service
    }

    /// Handle any request.
    pub fn handle(&mut self, msg: AuthenticatedMessage<LedgerRequest>) -> LedgerResponse {
        let correlation_id = msg.correlation_id;
        if let Err(e) = msg.validate() {
            warn!(%correlation_id, error = %e, "Rejected envelope");
            return LedgerResponse::err(correlation_id, ErrorPayload::from(&e));
        }

        let caller = msg.sender;
        let result = match msg.payload {
            LedgerRequest::SubmitPaper { content } => Ok(ResponseBody::PaperSubmitted {
                paper_id: self.service.submit_paper(&caller, content),
            }),
            LedgerRequest::SubmitReview {
                paper_id,
                verdict,
                content,
            } => self
                .service
                .submit_review(&caller, paper_id, verdict, content)
                .map(|outcome| ResponseBody::ReviewRecorded { outcome }),
            LedgerRequest::SubmitRevision { paper_id, content } => self
                .service
                .submit_revision(&caller, paper_id, content)
                .map(|revision_count| ResponseBody::PaperRevised { revision_count }),
            query => match self.query(&caller, query) {
                Some(result) => result,
                None => return write_required(correlation_id),
            },
        };
        respond(correlation_id, result)
    }

    /// Handle a read-only request without mutable access.
    ///
    /// Mutations are refused with `WRITE_REQUIRED`.
    pub fn handle_query(&self, msg: AuthenticatedMessage<LedgerRequest>) -> LedgerResponse {
        let correlation_id = msg.correlation_id;
        if let Err(e) = msg.validate() {
            warn!(%correlation_id, error = %e, "Rejected envelope");
            return LedgerResponse::err(correlation_id, ErrorPayload::from(&e));
        }
        match self.query(&msg.sender, msg.payload) {
            Some(result) => respond(correlation_id, result),
            None => write_required(correlation_id),
        }
    }

    /// `None` for mutations.
    fn query(
        &self,
        caller: &ActorId,
        request: LedgerRequest,
    ) -> Option<Result<ResponseBody, LedgerError>> {
        debug!(actor = %caller, op = request.op(), "Query");
        let svc = &self.service;
        let result = match request {
            LedgerRequest::SubmitPaper { .. }
            | LedgerRequest::SubmitReview { .. }
            | LedgerRequest::SubmitRevision { .. } => return None,
            LedgerRequest::GetPaperDetails { paper_id } => svc
                .get_paper_details(paper_id)
                .map(|details| ResponseBody::PaperDetails { details }),
            LedgerRequest::GetReputation { actor } => Ok(ResponseBody::Reputation {
                reputation: svc.get_reputation(&actor),
                actor,
            }),
            LedgerRequest::GetReviews { paper_id } => svc
                .get_reviews(paper_id)
                .map(|reviews| ResponseBody::Reviews { reviews }),
            LedgerRequest::GetRevisionHistory { paper_id } => svc
                .get_revision_history(paper_id)
                .map(|revisions| ResponseBody::RevisionHistory { revisions }),
            LedgerRequest::GetActorProfile { actor } => Ok(ResponseBody::ActorProfile {
                profile: svc.get_actor_profile(&actor),
            }),
            LedgerRequest::GetApprovalRate { paper_id } => svc
                .get_approval_rate(paper_id)
                .map(|approval_rate| ResponseBody::ApprovalRate { approval_rate }),
            LedgerRequest::PaperCount => Ok(ResponseBody::PaperCount {
                count: svc.paper_count(),
            }),
            LedgerRequest::PapersByAuthor { author } => Ok(ResponseBody::Papers {
                paper_ids: svc.papers_by_author(&author),
            }),
            LedgerRequest::JournalSince { sequence } => Ok(ResponseBody::Journal {
                entries: svc.journal_since(sequence),
            }),
            LedgerRequest::CheckInvariants => {
                let check = svc.check_invariants();
                Ok(ResponseBody::Invariants {
                    holds: check.is_ok(),
                    violation: check.err().map(|v| v.to_string()),
                })
            }
        };
        Some(result)
    }
}

fn respond(
    correlation_id: uuid::Uuid,
    result: Result<ResponseBody, LedgerError>,
) -> LedgerResponse {
    match result {
        Ok(body) => LedgerResponse::ok(correlation_id, body),
        Err(e) => LedgerResponse::err(correlation_id, ErrorPayload::from(&e)),
    }
}

fn write_required(correlation_id: uuid::Uuid) -> LedgerResponse {
    LedgerResponse::err(
        correlation_id,
        ErrorPayload::new(WRITE_REQUIRED, "Mutating request sent to the read-only path"),
    )
}
