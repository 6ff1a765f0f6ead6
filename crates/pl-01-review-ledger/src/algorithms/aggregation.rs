//! Review aggregation.
//!
//! Validates a review against the store, applies it, and runs the
//! publication check with the post-update counts. Every precondition is
//! checked before the first write, so a rejected review changes nothing.

use super::approval::{approval_rate, meets_publication_threshold};
use super::publication::publish;
use crate::config::LedgerConfig;
use crate::domain::{
    ActorId, ContentRef, LedgerError, LedgerStore, PaperId, Review, ReviewOutcome, Timestamp,
};
use shared_bus::LedgerEvent;

/// A review as submitted, with the reviewer taken from the caller identity.
#[derive(Clone, Debug)]
pub struct ReviewSubmission {
    pub paper_id: PaperId,
    pub reviewer: ActorId,
    pub verdict: bool,
    pub content: ContentRef,
    pub timestamp: Timestamp,
}

/// Check the preconditions in order:
/// `NotFound`, `Unauthorized`, `SelfReviewForbidden`, `DuplicateReview`,
/// `AlreadyPublished`.
///
/// `reviewer_verified` is the reviewer's capability flag, resolved by the
/// caller without creating the actor.
pub fn validate_review(
    store: &LedgerStore,
    submission: &ReviewSubmission,
    reviewer_verified: bool,
) -> Result<(), LedgerError> {
    let paper_id = submission.paper_id;
    let paper = store
        .papers
        .get(paper_id)
        .ok_or(LedgerError::NotFound(paper_id))?;

    if !reviewer_verified {
        return Err(LedgerError::Unauthorized(submission.reviewer.clone()));
    }
    if paper.author() == &submission.reviewer {
        return Err(LedgerError::SelfReviewForbidden {
            paper_id,
            actor: submission.reviewer.clone(),
        });
    }
    if paper.has_reviewed(&submission.reviewer) {
        return Err(LedgerError::DuplicateReview {
            paper_id,
            reviewer: submission.reviewer.clone(),
        });
    }
    if paper.is_published() {
        return Err(LedgerError::AlreadyPublished(paper_id));
    }
    Ok(())
}

/// Validate and apply a review.
///
/// On success returns the outcome and the events to emit, in order:
/// `PaperReviewed`, then `PaperPublished` if this review published the paper.
pub fn submit_review(
    store: &mut LedgerStore,
    config: &LedgerConfig,
    submission: ReviewSubmission,
    reviewer_verified: bool,
) -> Result<(ReviewOutcome, Vec<LedgerEvent>), LedgerError> {
    validate_review(store, &submission, reviewer_verified)?;

    let paper_id = submission.paper_id;
    let reviewer = submission.reviewer.clone();
    let verdict = submission.verdict;

    let paper = store
        .papers
        .get_mut(paper_id)
        .ok_or(LedgerError::NotFound(paper_id))?;
    paper.record_review(Review {
        reviewer: submission.reviewer,
        paper_id,
        verdict,
        content: submission.content,
        timestamp: submission.timestamp,
    });
    let review_count = paper.review_count();
    let approval_count = paper.approval_count();

    store
        .actors
        .record_review(&reviewer, reviewer_verified, config.reputation_per_review);

    let rate = approval_rate(approval_count, review_count);
    let mut events = vec![LedgerEvent::PaperReviewed {
        paper_id,
        reviewer,
        verdict,
        review_count,
        approval_count,
    }];

    let mut published = false;
    if meets_publication_threshold(approval_count, review_count, config) {
        if let Some(event) = publish(store, paper_id, rate.unwrap_or(0), config) {
            events.push(event);
            published = true;
        }
    }

    Ok((
        ReviewOutcome {
            review_count,
            approval_count,
            approval_rate: rate,
            published,
        },
        events,
    ))
}
