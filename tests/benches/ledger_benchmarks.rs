//! # Peer Ledger Benchmarks
//!
//! | Group | Operation | Expectation |
//! |-------|-----------|-------------|
//! | approval | `approval_rate` integer arithmetic | constant time |
//! | review | `submit_review` incl. publication check | O(1) per review |
//! | query | `get_reviews` on a busy paper | linear in reviews |

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pl_01_review_ledger::algorithms::approval_rate;
use pl_01_review_ledger::{LedgerConfig, ReviewLedgerApi, ReviewLedgerService};
use rand::Rng;
use shared_types::{ActorId, ContentRef};

fn bench_approval_rate(c: &mut Criterion) {
    let mut group = c.benchmark_group("approval");
    let mut rng = rand::thread_rng();
    let samples: Vec<(u64, u64)> = (0..1_000)
        .map(|_| {
            let reviews = rng.gen_range(1..10_000u64);
            (rng.gen_range(0..=reviews), reviews)
        })
        .collect();

    group.throughput(Throughput::Elements(samples.len() as u64));
    group.bench_function("approval_rate_batch", |b| {
        b.iter(|| {
            for (approvals, reviews) in &samples {
                black_box(approval_rate(*approvals, *reviews));
            }
        })
    });
    group.finish();
}

fn bench_submit_review(c: &mut Criterion) {
    let mut group = c.benchmark_group("review");
    group.measurement_time(Duration::from_secs(5));

    for reviewers in [3usize, 10, 100] {
        group.throughput(Throughput::Elements(reviewers as u64));
        group.bench_with_input(
            BenchmarkId::new("review_one_paper", reviewers),
            &reviewers,
            |b, &reviewers| {
                let mut rng = rand::thread_rng();
                let verdicts: Vec<bool> = (0..reviewers).map(|_| rng.gen_bool(0.7)).collect();
                let ids: Vec<ActorId> = (0..reviewers)
                    .map(|i| ActorId::new(format!("reviewer-{i}")))
                    .collect();
                b.iter(|| {
                    let mut svc = ReviewLedgerService::new(LedgerConfig::default());
                    let paper = svc.submit_paper(&ActorId::from("author"), ContentRef::from("p"));
                    for (reviewer, verdict) in ids.iter().zip(&verdicts) {
                        // later reviews fail once the paper is published
                        let _ = black_box(svc.submit_review(
                            reviewer,
                            paper,
                            *verdict,
                            ContentRef::from("r"),
                        ));
                    }
                })
            },
        );
    }
    group.finish();
}

fn bench_get_reviews(c: &mut Criterion) {
    let mut group = c.benchmark_group("query");
    // never publishes, so every review lands
    let config = LedgerConfig {
        approval_threshold_percent: 100,
        ..LedgerConfig::default()
    };
    let mut svc = ReviewLedgerService::new(config);
    let paper = svc.submit_paper(&ActorId::from("author"), ContentRef::from("p"));
    for i in 0..1_000 {
        let _ = svc.submit_review(
            &ActorId::new(format!("reviewer-{i}")),
            paper,
            false,
            ContentRef::from("r"),
        );
    }

    group.bench_function("get_reviews_1000", |b| {
        b.iter(|| black_box(svc.get_reviews(paper)))
    });
    group.finish();
}

criterion_group!(benches, bench_approval_rate, bench_submit_review, bench_get_reviews);
criterion_main!(benches);
