//! # Integration Test Flows
//!
//! The review ledger publishing its audit events through the shared bus.
//!
//! ## Flows Tested:
//!
//! 1. **Ordering**: a publishing review yields `PaperReviewed` then `PaperPublished`
//! 2. **Filtering**: subscribers see only the topics and papers they asked for
//! 3. **Journal parity**: the internal journal and the bus carry the same events
//! 4. **Failure silence**: rejected operations publish nothing

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::time::timeout;
    use tokio_stream::StreamExt;

    use pl_01_review_ledger::{
        AutoVerify, BusAuditSink, LedgerConfig, ReviewLedgerApi, ReviewLedgerService,
        SystemTimeSource,
    };
    use shared_bus::{EventFilter, EventPublisher, EventTopic, InMemoryEventBus, LedgerEvent};
    use shared_types::{ActorId, ContentRef};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    type BusService = ReviewLedgerService<AutoVerify, SystemTimeSource, BusAuditSink>;

    fn service_on(bus: &Arc<InMemoryEventBus>) -> BusService {
        ReviewLedgerService::with_ports(
            LedgerConfig::default(),
            AutoVerify,
            SystemTimeSource,
            BusAuditSink::new(Arc::clone(bus)),
        )
    }

    fn actor(name: &str) -> ActorId {
        ActorId::from(name)
    }

    fn cid(s: &str) -> ContentRef {
        ContentRef::from(s)
    }

    // =============================================================================
    // FLOW 1: EVENT ORDERING
    // =============================================================================

    #[tokio::test]
    async fn test_publishing_review_events_in_order() {
        let bus = Arc::new(InMemoryEventBus::new());
        let mut sub = bus.subscribe(EventFilter::all());
        let mut svc = service_on(&bus);

        let id = svc.submit_paper(&actor("alice"), cid("paper"));
        for name in ["bob", "carol", "dave"] {
            svc.submit_review(&actor(name), id, true, cid("r")).unwrap();
        }

        let mut names = Vec::new();
        for _ in 0..5 {
            let event = timeout(Duration::from_secs(1), sub.recv())
                .await
                .expect("event should arrive")
                .expect("bus open");
            names.push(event.name());
        }
        assert_eq!(
            names,
            vec![
                "paper_submitted",
                "paper_reviewed",
                "paper_reviewed",
                "paper_reviewed",
                "paper_published"
            ]
        );
    }

    // =============================================================================
    // FLOW 2: FILTERING
    // =============================================================================

    #[tokio::test]
    async fn test_publication_subscriber_sees_only_publications() {
        let bus = Arc::new(InMemoryEventBus::new());
        let mut stream = bus.event_stream(EventFilter::topics(vec![EventTopic::Publications]));
        let mut svc = service_on(&bus);

        let first = svc.submit_paper(&actor("alice"), cid("a"));
        let second = svc.submit_paper(&actor("alice"), cid("b"));
        for name in ["bob", "carol", "dave"] {
            svc.submit_review(&actor(name), second, true, cid("r")).unwrap();
        }
        svc.submit_review(&actor("bob"), first, false, cid("r")).unwrap();

        let event = timeout(Duration::from_secs(1), stream.next())
            .await
            .expect("publication should arrive")
            .expect("stream open");
        match event {
            LedgerEvent::PaperPublished {
                paper_id,
                author,
                approval_rate,
            } => {
                assert_eq!(paper_id, second);
                assert_eq!(author, actor("alice"));
                assert_eq!(approval_rate, 100);
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_paper_filter() {
        let bus = Arc::new(InMemoryEventBus::new());
        let mut sub = bus.subscribe(EventFilter {
            topics: vec![],
            papers: vec![1],
        });
        let mut svc = service_on(&bus);

        svc.submit_paper(&actor("alice"), cid("a"));
        svc.submit_paper(&actor("bob"), cid("b"));
        svc.submit_revision(&actor("bob"), 1, cid("b2")).unwrap();

        let events = sub.drain();
        assert_eq!(events.len(), 2);
        assert!(events.iter().all(|e| e.paper_id() == 1));
        assert_eq!(events[1].name(), "paper_revised");
    }

    // =============================================================================
    // FLOW 3: JOURNAL PARITY
    // =============================================================================

    #[tokio::test]
    async fn test_journal_matches_bus() {
        let bus = Arc::new(InMemoryEventBus::new());
        let mut sub = bus.subscribe(EventFilter::all());
        let mut svc = service_on(&bus);

        let id = svc.submit_paper(&actor("alice"), cid("v1"));
        svc.submit_revision(&actor("alice"), id, cid("v2")).unwrap();
        svc.submit_review(&actor("bob"), id, false, cid("r")).unwrap();

        let from_bus = sub.drain();
        let from_journal: Vec<_> = svc.journal().iter().map(|e| e.event.clone()).collect();
        assert_eq!(from_bus, from_journal);

        let sequences: Vec<_> = svc.journal().iter().map(|e| e.sequence).collect();
        assert_eq!(sequences, vec![1, 2, 3]);
    }

    // =============================================================================
    // FLOW 4: FAILURE SILENCE
    // =============================================================================

    #[tokio::test]
    async fn test_rejected_operations_publish_nothing() {
        let bus = Arc::new(InMemoryEventBus::new());
        let mut svc = service_on(&bus);
        let id = svc.submit_paper(&actor("alice"), cid("v1"));
        svc.submit_review(&actor("bob"), id, true, cid("r")).unwrap();

        let mut sub = bus.subscribe(EventFilter::all());
        let published_before = bus.events_published();

        assert!(svc.submit_review(&actor("bob"), id, true, cid("r")).is_err());
        assert!(svc.submit_review(&actor("alice"), id, true, cid("r")).is_err());
        assert!(svc.submit_review(&actor("bob"), 99, true, cid("r")).is_err());
        assert!(svc.submit_revision(&actor("bob"), id, cid("v2")).is_err());

        assert!(sub.drain().is_empty());
        assert_eq!(bus.events_published(), published_before);
        assert_eq!(svc.journal().len(), 2);
    }
}
