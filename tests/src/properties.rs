//! # Ledger Properties
//!
//! Randomized operation sequences checked against the ledger invariants
//! after every step.

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;

    use pl_01_review_ledger::{
        AllowListVerifier, LedgerConfig, ManualTimeSource, RecordingAuditSink, ReviewLedgerApi,
        ReviewLedgerService,
    };
    use proptest::prelude::*;
    use shared_types::{ActorId, ContentRef};

    const ACTORS: [&str; 5] = ["a0", "a1", "a2", "a3", "a4"];

    #[derive(Debug, Clone)]
    enum Op {
        Submit { author: usize },
        Review { reviewer: usize, paper: u64, verdict: bool },
        Revise { caller: usize, paper: u64 },
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            1 => (0..ACTORS.len()).prop_map(|author| Op::Submit { author }),
            4 => (0..ACTORS.len(), 0u64..4, any::<bool>())
                .prop_map(|(reviewer, paper, verdict)| Op::Review { reviewer, paper, verdict }),
            1 => (0..ACTORS.len(), 0u64..4).prop_map(|(caller, paper)| Op::Revise { caller, paper }),
        ]
    }

    type Service =
        ReviewLedgerService<AllowListVerifier, Arc<ManualTimeSource>, Arc<RecordingAuditSink>>;

    fn service() -> (Service, Arc<ManualTimeSource>) {
        let clock = Arc::new(ManualTimeSource::new(1));
        // a4 is never verified
        let verifier = AllowListVerifier::new(["a0", "a1", "a2", "a3"]);
        let svc = ReviewLedgerService::with_ports(
            LedgerConfig::default(),
            verifier,
            Arc::clone(&clock),
            Arc::new(RecordingAuditSink::new()),
        );
        (svc, clock)
    }

    fn reputations(svc: &Service) -> HashMap<&'static str, u64> {
        ACTORS
            .iter()
            .map(|a| (*a, svc.get_reputation(&ActorId::from(*a))))
            .collect()
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_invariants_hold_after_every_operation(ops in prop::collection::vec(op_strategy(), 1..60)) {
            let (mut svc, clock) = service();
            let mut published: Vec<u64> = Vec::new();

            for op in ops {
                clock.advance(10);
                let reputation_before = reputations(&svc);
                let journal_before = svc.journal().len();

                match op {
                    Op::Submit { author } => {
                        let expected = svc.paper_count() as u64;
                        let id = svc.submit_paper(&ActorId::from(ACTORS[author]), ContentRef::from("p"));
                        prop_assert_eq!(id, expected);
                        prop_assert_eq!(svc.journal().len(), journal_before + 1);
                    }
                    Op::Review { reviewer, paper, verdict } => {
                        let before = svc.get_paper_details(paper).ok();
                        let result = svc.submit_review(
                            &ActorId::from(ACTORS[reviewer]),
                            paper,
                            verdict,
                            ContentRef::from("r"),
                        );
                        match result {
                            Ok(outcome) => {
                                let before = before.expect("accepted review on a missing paper");
                                prop_assert_eq!(outcome.review_count, before.review_count + 1);
                                prop_assert!(!before.published);
                                prop_assert!(svc.journal().len() > journal_before);
                            }
                            Err(_) => {
                                prop_assert_eq!(svc.get_paper_details(paper).ok(), before);
                                prop_assert_eq!(svc.journal().len(), journal_before);
                                prop_assert_eq!(reputations(&svc), reputation_before.clone());
                            }
                        }
                    }
                    Op::Revise { caller, paper } => {
                        let before = svc.get_revision_history(paper).map(|h| h.len()).ok();
                        let result = svc.submit_revision(
                            &ActorId::from(ACTORS[caller]),
                            paper,
                            ContentRef::from("rev"),
                        );
                        let after = svc.get_revision_history(paper).map(|h| h.len()).ok();
                        match result {
                            Ok(len) => {
                                prop_assert_eq!(Some(len), after);
                                prop_assert_eq!(before.map(|b| b + 1), after);
                            }
                            Err(_) => {
                                prop_assert_eq!(before, after);
                                prop_assert_eq!(svc.journal().len(), journal_before);
                            }
                        }
                    }
                }

                prop_assert!(svc.check_invariants().is_ok(), "{:?}", svc.check_invariants());

                let reputation_after = reputations(&svc);
                for actor in ACTORS {
                    prop_assert!(reputation_after[actor] >= reputation_before[actor]);
                }

                for id in &published {
                    prop_assert!(svc.get_paper_details(*id).map(|d| d.published).unwrap_or(false));
                }
                published = (0..svc.paper_count() as u64)
                    .filter(|id| svc.get_paper_details(*id).map(|d| d.published).unwrap_or(false))
                    .collect();
            }
        }

        #[test]
        fn prop_unverified_actor_never_reviews(paper_count in 1usize..4, verdict in any::<bool>()) {
            let (mut svc, _clock) = service();
            for _ in 0..paper_count {
                svc.submit_paper(&ActorId::from("a0"), ContentRef::from("p"));
            }
            for paper in 0..paper_count as u64 {
                let result = svc.submit_review(&ActorId::from("a4"), paper, verdict, ContentRef::from("r"));
                prop_assert!(result.is_err());
                prop_assert!(svc.get_reviews(paper).unwrap().is_empty());
            }
            prop_assert_eq!(svc.get_reputation(&ActorId::from("a4")), 0);
        }
    }
}
