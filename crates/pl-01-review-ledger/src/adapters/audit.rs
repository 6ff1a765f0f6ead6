//! Audit sink adapters.
//!
//! Forward committed ledger events to the shared bus, drop them, or keep
//! them in memory for inspection.

use crate::ports::AuditSink;
use parking_lot::Mutex;
use shared_bus::{InMemoryEventBus, LedgerEvent};
use std::sync::Arc;
use tracing::trace;

/// Publishes every event to the in-memory bus.
#[derive(Clone)]
pub struct BusAuditSink {
    bus: Arc<InMemoryEventBus>,
}

impl BusAuditSink {
    pub fn new(bus: Arc<InMemoryEventBus>) -> Self {
        Self { bus }
    }

    pub fn bus(&self) -> &Arc<InMemoryEventBus> {
        &self.bus
    }
}

impl AuditSink for BusAuditSink {
    fn record(&self, event: &LedgerEvent) {
        let receivers = self.bus.emit(event.clone());
        trace!(event = event.name(), receivers, "Audit event published");
    }
}

/// Discards events. Used when nothing listens.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpAuditSink;

impl AuditSink for NoOpAuditSink {
    fn record(&self, _event: &LedgerEvent) {}
}

/// Keeps every event in order of arrival.
#[derive(Debug, Default)]
pub struct RecordingAuditSink {
    events: Mutex<Vec<LedgerEvent>>,
}

impl RecordingAuditSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every event recorded so far.
    pub fn events(&self) -> Vec<LedgerEvent> {
        self.events.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    /// Take every recorded event, leaving the sink empty.
    pub fn take(&self) -> Vec<LedgerEvent> {
        std::mem::take(&mut *self.events.lock())
    }
}

impl AuditSink for RecordingAuditSink {
    fn record(&self, event: &LedgerEvent) {
        self.events.lock().push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_bus::EventFilter;
    use shared_types::entities::{ActorId, ContentRef};

    fn event() -> LedgerEvent {
        LedgerEvent::PaperSubmitted {
            paper_id: 0,
            author: ActorId::from("alice"),
            content: ContentRef::from("cid"),
            timestamp: 1,
        }
    }

    #[test]
    fn test_recording_sink_keeps_order() {
        let sink = RecordingAuditSink::new();
        sink.record(&event());
        sink.record(&LedgerEvent::PaperPublished {
            paper_id: 0,
            author: ActorId::from("alice"),
            approval_rate: 100,
        });
        let events = sink.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[1].name(), "paper_published");
        assert_eq!(sink.take().len(), 2);
        assert!(sink.is_empty());
    }

    #[tokio::test]
    async fn test_bus_sink_forwards() {
        let bus = Arc::new(InMemoryEventBus::new());
        let mut sub = bus.subscribe(EventFilter::all());
        let sink = BusAuditSink::new(Arc::clone(&bus));

        sink.record(&event());

        let received = sub.recv().await;
        assert_eq!(received, Some(event()));
    }
}
