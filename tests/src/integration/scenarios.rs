//! # Review Scenarios
//!
//! End-to-end review and publication scenarios driven through the IPC
//! handler, with the caller taken from the envelope sender.
//!
//! | Scenario | Expectation |
//! |----------|-------------|
//! | approve, approve, reject | 66%, stays open, author unpaid |
//! | ... then approve | 75%, published on the 4th review, author +50 |
//! | same reviewer twice | `DUPLICATE_REVIEW`, no state change, no event |
//! | review after publication | `ALREADY_PUBLISHED` |

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use pl_01_review_ledger::{
        AllowListVerifier, LedgerConfig, LedgerIpcHandler, LedgerRequest, LedgerResponse,
        ManualTimeSource, RecordingAuditSink, ResponseBody, ReviewLedgerApi, ReviewLedgerService,
    };
    use shared_types::{ActorId, AuthenticatedMessage, ContentRef};

    type Service =
        ReviewLedgerService<AllowListVerifier, Arc<ManualTimeSource>, Arc<RecordingAuditSink>>;

    struct Harness {
        handler: LedgerIpcHandler<Service>,
        audit: Arc<RecordingAuditSink>,
        clock: Arc<ManualTimeSource>,
    }

    impl Harness {
        fn new() -> Self {
            let audit = Arc::new(RecordingAuditSink::new());
            let clock = Arc::new(ManualTimeSource::new(1_700_000_000_000));
            let verifier = AllowListVerifier::new(["alice", "r1", "r2", "r3", "r4", "r5"]);
            let service = ReviewLedgerService::with_ports(
                LedgerConfig::default(),
                verifier,
                Arc::clone(&clock),
                Arc::clone(&audit),
            );
            Self {
                handler: LedgerIpcHandler::new(service),
                audit,
                clock,
            }
        }

        fn send(&mut self, sender: &str, payload: LedgerRequest) -> LedgerResponse {
            self.clock.advance(1_000);
            let msg = AuthenticatedMessage::new(ActorId::from(sender), self.clock_now(), payload);
            self.handler.handle(msg)
        }

        fn clock_now(&self) -> u64 {
            use pl_01_review_ledger::TimeSource;
            self.clock.now()
        }

        fn submit(&mut self, author: &str) -> u64 {
            let resp = self.send(
                author,
                LedgerRequest::SubmitPaper {
                    content: ContentRef::from("cid-paper"),
                },
            );
            match resp.body {
                Some(ResponseBody::PaperSubmitted { paper_id }) => paper_id,
                other => panic!("submit failed: {other:?} {:?}", resp.error),
            }
        }

        fn review(&mut self, reviewer: &str, paper_id: u64, verdict: bool) -> LedgerResponse {
            self.send(
                reviewer,
                LedgerRequest::SubmitReview {
                    paper_id,
                    verdict,
                    content: ContentRef::from(format!("cid-review-{reviewer}")),
                },
            )
        }

        fn service(&self) -> &Service {
            self.handler.service()
        }
    }

    #[test]
    fn test_two_thirds_then_three_quarters() {
        let mut h = Harness::new();
        let id = h.submit("alice");

        assert!(h.review("r1", id, true).success);
        assert!(h.review("r2", id, true).success);
        let resp = h.review("r3", id, false);
        match resp.body {
            Some(ResponseBody::ReviewRecorded { outcome }) => {
                assert_eq!(outcome.approval_rate, Some(66));
                assert!(!outcome.published);
            }
            other => panic!("unexpected: {other:?}"),
        }
        assert!(!h.service().get_paper_details(id).unwrap().published);
        assert_eq!(h.service().get_reputation(&ActorId::from("alice")), 0);

        let resp = h.review("r4", id, true);
        match resp.body {
            Some(ResponseBody::ReviewRecorded { outcome }) => {
                assert_eq!(outcome.review_count, 4);
                assert_eq!(outcome.approval_rate, Some(75));
                assert!(outcome.published);
            }
            other => panic!("unexpected: {other:?}"),
        }

        let details = h.service().get_paper_details(id).unwrap();
        assert!(details.published);
        assert_eq!(details.review_count, 4);
        assert_eq!(details.approval_count, 3);
        assert_eq!(details.rejection_count, 1);
        assert_eq!(h.service().get_reputation(&ActorId::from("alice")), 50);
        for reviewer in ["r1", "r2", "r3", "r4"] {
            assert_eq!(h.service().get_reputation(&ActorId::from(reviewer)), 10);
        }

        let resp = h.review("r5", id, true);
        assert_eq!(resp.error_code(), Some("ALREADY_PUBLISHED"));
        assert_eq!(h.service().get_reputation(&ActorId::from("alice")), 50);
        assert!(h.service().check_invariants().is_ok());
    }

    #[test]
    fn test_duplicate_review_changes_nothing() {
        let mut h = Harness::new();
        let id = h.submit("alice");
        assert!(h.review("r1", id, true).success);

        let details_before = h.service().get_paper_details(id).unwrap();
        let reviews_before = h.service().get_reviews(id).unwrap();
        let events_before = h.audit.len();
        let journal_before = h.service().journal().len();

        let resp = h.review("r1", id, false);
        assert_eq!(resp.error_code(), Some("DUPLICATE_REVIEW"));

        assert_eq!(h.service().get_paper_details(id).unwrap(), details_before);
        assert_eq!(h.service().get_reviews(id).unwrap(), reviews_before);
        assert_eq!(h.audit.len(), events_before);
        assert_eq!(h.service().journal().len(), journal_before);
        assert_eq!(h.service().get_reputation(&ActorId::from("r1")), 10);
    }

    #[test]
    fn test_reviews_listed_in_insertion_order() {
        let mut h = Harness::new();
        let id = h.submit("alice");
        h.review("r3", id, false);
        h.review("r1", id, true);

        let reviews = h.service().get_reviews(id).unwrap();
        let reviewers: Vec<_> = reviews.iter().map(|r| r.reviewer.as_str().to_string()).collect();
        assert_eq!(reviewers, vec!["r3", "r1"]);
        assert!(reviews[0].timestamp < reviews[1].timestamp);
        assert_eq!(reviews[0].content, ContentRef::from("cid-review-r3"));
    }

    #[test]
    fn test_revision_history_grows_by_one() {
        let mut h = Harness::new();
        let id = h.submit("alice");
        for (i, cid) in ["v2", "v3", "v4"].iter().enumerate() {
            let resp = h.send(
                "alice",
                LedgerRequest::SubmitRevision {
                    paper_id: id,
                    content: ContentRef::from(*cid),
                },
            );
            assert_eq!(
                resp.body,
                Some(ResponseBody::PaperRevised {
                    revision_count: i + 2
                })
            );
        }
        let history = h.service().get_revision_history(id).unwrap();
        assert_eq!(history.first(), Some(&ContentRef::from("cid-paper")));
        assert_eq!(history.last(), Some(&ContentRef::from("v4")));

        let resp = h.send(
            "r1",
            LedgerRequest::SubmitRevision {
                paper_id: id,
                content: ContentRef::from("hijack"),
            },
        );
        assert_eq!(resp.error_code(), Some("FORBIDDEN"));
        assert_eq!(h.service().get_revision_history(id).unwrap().len(), 4);
    }

    #[test]
    fn test_unverified_and_self_review() {
        let mut h = Harness::new();
        let id = h.submit("alice");

        assert_eq!(h.review("stranger", id, true).error_code(), Some("UNAUTHORIZED"));
        assert_eq!(
            h.review("alice", id, true).error_code(),
            Some("SELF_REVIEW_FORBIDDEN")
        );
        assert_eq!(h.review("r1", 42, true).error_code(), Some("NOT_FOUND"));
        assert_eq!(h.service().get_reviews(id).unwrap().len(), 0);
        assert!(h.service().get_actor_profile(&ActorId::from("stranger")).is_none());
    }

    #[test]
    fn test_publication_with_custom_rules() {
        let audit = Arc::new(RecordingAuditSink::new());
        let config = LedgerConfig {
            min_reviews_for_publication: 2,
            approval_threshold_percent: 50,
            reputation_per_review: 1,
            reputation_for_approved_paper: 5,
        };
        let mut svc = ReviewLedgerService::with_ports(
            config,
            pl_01_review_ledger::AutoVerify,
            Arc::new(ManualTimeSource::new(0)),
            Arc::clone(&audit),
        );
        let id = svc.submit_paper(&ActorId::from("a"), ContentRef::from("p"));
        svc.submit_review(&ActorId::from("b"), id, true, ContentRef::from("r"))
            .unwrap();
        let outcome = svc
            .submit_review(&ActorId::from("c"), id, false, ContentRef::from("r"))
            .unwrap();
        assert_eq!(outcome.approval_rate, Some(50));
        assert!(outcome.published);
        assert_eq!(svc.get_reputation(&ActorId::from("a")), 5);
        assert_eq!(svc.get_reputation(&ActorId::from("c")), 1);
        assert!(svc.check_invariants().is_ok());
    }
}
