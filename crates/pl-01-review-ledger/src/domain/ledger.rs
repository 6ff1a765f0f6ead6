//! Paper ledger: paper records and their revision history.

use super::entities::{ActorId, ContentRef, Paper, PaperId, Timestamp};
use super::errors::LedgerError;

/// Papers in submission order. A paper's id is its position.
#[derive(Debug, Default, Clone)]
pub struct PaperLedger {
    papers: Vec<Paper>,
}

impl PaperLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id the next submission will receive.
    pub fn next_id(&self) -> PaperId {
        self.papers.len() as PaperId
    }

    /// Append a new paper and return its id.
    pub fn submit(&mut self, author: ActorId, content: ContentRef, now: Timestamp) -> PaperId {
        let id = self.next_id();
        self.papers.push(Paper::new(id, author, content, now));
        id
    }

    /// Check that `actor` may revise `paper_id` right now.
    pub fn check_revise(&self, paper_id: PaperId, actor: &ActorId) -> Result<&Paper, LedgerError> {
        let paper = self.get(paper_id).ok_or(LedgerError::NotFound(paper_id))?;
        if paper.author() != actor {
            return Err(LedgerError::Forbidden {
                paper_id,
                actor: actor.clone(),
            });
        }
        if paper.is_published() {
            return Err(LedgerError::AlreadyPublished(paper_id));
        }
        Ok(paper)
    }

    /// Append a revision. Returns the new history length.
    pub fn revise(
        &mut self,
        paper_id: PaperId,
        actor: &ActorId,
        content: ContentRef,
    ) -> Result<usize, LedgerError> {
        self.check_revise(paper_id, actor)?;
        let paper = self.get_mut(paper_id).ok_or(LedgerError::NotFound(paper_id))?;
        paper.append_revision(content);
        Ok(paper.revisions().len())
    }

    pub fn exists(&self, paper_id: PaperId) -> bool {
        self.get(paper_id).is_some()
    }

    pub fn get(&self, paper_id: PaperId) -> Option<&Paper> {
        usize::try_from(paper_id).ok().and_then(|i| self.papers.get(i))
    }

    pub(crate) fn get_mut(&mut self, paper_id: PaperId) -> Option<&mut Paper> {
        usize::try_from(paper_id)
            .ok()
            .and_then(|i| self.papers.get_mut(i))
    }

    /// Ids of every paper `author` submitted, ascending.
    pub fn papers_by_author(&self, author: &ActorId) -> Vec<PaperId> {
        self.papers
            .iter()
            .filter(|p| p.author() == author)
            .map(Paper::id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.papers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.papers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Paper> {
        self.papers.iter()
    }
}
