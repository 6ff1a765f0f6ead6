//! The ledger state object every operation is applied to.

use super::entities::JournalEntry;
use super::ledger::PaperLedger;
use super::registry::ActorRegistry;
use shared_bus::LedgerEvent;

/// Complete ledger state: actors, papers and the event journal.
///
/// Owned by the service and passed explicitly to the algorithms.
#[derive(Debug, Default, Clone)]
pub struct LedgerStore {
    pub actors: ActorRegistry,
    pub papers: PaperLedger,
    journal: Vec<JournalEntry>,
}

impl LedgerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event to the journal and return its sequence number.
    pub fn append_event(&mut self, event: LedgerEvent) -> u64 {
        let sequence = self.last_sequence().saturating_add(1);
        self.journal.push(JournalEntry { sequence, event });
        sequence
    }

    /// Sequence of the newest entry, 0 when empty.
    pub fn last_sequence(&self) -> u64 {
        self.journal.last().map_or(0, |e| e.sequence)
    }

    pub fn journal(&self) -> &[JournalEntry] {
        &self.journal
    }

    /// Entries with a sequence strictly greater than `sequence`.
    pub fn journal_since(&self, sequence: u64) -> &[JournalEntry] {
        let start = self.journal.partition_point(|e| e.sequence <= sequence);
        &self.journal[start..]
    }
}
