//! Publication trigger.
//!
//! Only reachable from review aggregation, after a review has been applied.

use crate::config::LedgerConfig;
use crate::domain::{LedgerStore, PaperId};
use shared_bus::LedgerEvent;

/// Mark the paper published and credit its author.
///
/// Returns `None` if the paper is unknown or already published, so a
/// paper can never be published (or its author rewarded) twice.
pub(crate) fn publish(
    store: &mut LedgerStore,
    paper_id: PaperId,
    approval_rate: u8,
    config: &LedgerConfig,
) -> Option<LedgerEvent> {
    let paper = store.papers.get_mut(paper_id)?;
    if paper.is_published() {
        return None;
    }
    paper.mark_published();
    let author = paper.author().clone();

    store
        .actors
        .record_publication_reward(&author, config.reputation_for_approved_paper);

    Some(LedgerEvent::PaperPublished {
        paper_id,
        author,
        approval_rate,
    })
}
