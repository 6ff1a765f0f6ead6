//! Approval rate and the publication decision.
//!
//! Integer arithmetic only: the rate is `floor(approvals * 100 / reviews)`.

use crate::config::LedgerConfig;

/// Truncated approval percentage, or `None` when there are no reviews.
///
/// ```
/// use pl_01_review_ledger::algorithms::approval::approval_rate;
///
/// assert_eq!(approval_rate(2, 3), Some(66));
/// assert_eq!(approval_rate(3, 4), Some(75));
/// assert_eq!(approval_rate(0, 0), None);
/// ```
pub fn approval_rate(approvals: u64, reviews: u64) -> Option<u8> {
    if reviews == 0 {
        return None;
    }
    let approvals = approvals.min(reviews);
    let percent = u128::from(approvals) * 100 / u128::from(reviews);
    u8::try_from(percent).ok()
}

/// Whether counts taken right after a review qualify the paper for publication.
pub fn meets_publication_threshold(approvals: u64, reviews: u64, config: &LedgerConfig) -> bool {
    if reviews < config.min_reviews_for_publication {
        return false;
    }
    approval_rate(approvals, reviews).is_some_and(|rate| rate >= config.approval_threshold_percent)
}
