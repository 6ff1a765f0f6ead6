//! Domain invariants for the Review Ledger.
//!
//! Each `invariant_*` function checks one property of a single record.
//! `check_store` walks the whole store and reports the first violation.

use super::entities::{Actor, Paper};
use super::errors::InvariantViolation;
use super::store::LedgerStore;
use crate::algorithms::approval::meets_publication_threshold;
use crate::config::LedgerConfig;
use std::collections::HashMap;

/// INVARIANT-1: Count Consistency
/// `review_count == approval_count + rejection_count`.
pub fn invariant_count_consistency(paper: &Paper) -> bool {
    paper
        .approval_count()
        .checked_add(paper.rejection_count())
        .is_some_and(|sum| sum == paper.review_count())
}

/// INVARIANT-2: One Review Per Reviewer
/// The reviewer set and the review list describe the same reviewers,
/// with no repeats.
pub fn invariant_unique_reviewers(paper: &Paper) -> bool {
    let reviewed_by = paper.reviewed_by();
    paper.reviews().len() == reviewed_by.len()
        && paper.reviews().len() as u64 == paper.review_count()
        && paper
            .reviews()
            .iter()
            .all(|r| reviewed_by.contains(&r.reviewer) && r.paper_id == paper.id())
}

/// INVARIANT-3: No Self Review
pub fn invariant_no_self_review(paper: &Paper) -> bool {
    !paper.has_reviewed(paper.author())
}

/// INVARIANT-4: Revision History
/// Never empty, and the last entry is the current content.
pub fn invariant_revision_history(paper: &Paper) -> bool {
    paper.revisions().last() == Some(paper.content())
}

/// INVARIANT-5: Publication Rule
/// A published paper meets the threshold with its final counts (no review
/// can land after publication); an unpublished one does not.
pub fn invariant_publication_rule(paper: &Paper, config: &LedgerConfig) -> bool {
    let meets = meets_publication_threshold(paper.approval_count(), paper.review_count(), config);
    paper.is_published() == meets
}

/// INVARIANT-6: Reputation Accounting
/// Reputation equals review rewards plus publication rewards.
pub fn expected_reputation(actor: &Actor, published_papers: u64, config: &LedgerConfig) -> u64 {
    actor
        .reviews_completed
        .saturating_mul(config.reputation_per_review)
        .saturating_add(published_papers.saturating_mul(config.reputation_for_approved_paper))
}

/// Check every invariant over every paper and actor.
pub fn check_store(store: &LedgerStore, config: &LedgerConfig) -> Result<(), InvariantViolation> {
    let mut published_by_author: HashMap<_, u64> = HashMap::new();

    for (position, paper) in store.papers.iter().enumerate() {
        let paper_id = paper.id();
        if paper_id != position as u64 {
            return Err(InvariantViolation::NonDenseId { paper_id });
        }
        if !invariant_count_consistency(paper) {
            return Err(InvariantViolation::CountMismatch {
                paper_id,
                reviews: paper.review_count(),
                approvals: paper.approval_count(),
                rejections: paper.rejection_count(),
            });
        }
        if !invariant_unique_reviewers(paper) {
            return Err(InvariantViolation::ReviewerSetMismatch { paper_id });
        }
        if !invariant_no_self_review(paper) {
            return Err(InvariantViolation::SelfReview {
                paper_id,
                author: paper.author().clone(),
            });
        }
        if !invariant_revision_history(paper) {
            return Err(InvariantViolation::RevisionHistory { paper_id });
        }
        if !invariant_publication_rule(paper, config) {
            return Err(if paper.is_published() {
                InvariantViolation::PublishedBelowThreshold { paper_id }
            } else {
                InvariantViolation::MissedPublication { paper_id }
            });
        }
        if paper.is_published() {
            *published_by_author.entry(paper.author()).or_default() += 1;
        }
    }

    for actor in store.actors.iter() {
        let published = published_by_author.get(&actor.id).copied().unwrap_or(0);
        let expected = expected_reputation(actor, published, config);
        if actor.reputation != expected {
            return Err(InvariantViolation::ReputationMismatch {
                actor: actor.id.clone(),
                expected,
                actual: actor.reputation,
            });
        }
    }

    Ok(())
}
