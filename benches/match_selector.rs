//! Benchmarks for the match selector and lexical scorer.
//!
//! Run with: `cargo bench --bench match_selector`

use std::hint::black_box;
use std::sync::Arc;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use triage::knowledge::{Entry, KnowledgeBase, default_entries};
use triage::lexical::LexicalScorer;
use triage::matching::MatchSelector;
use triage::semantic::{MockSemanticScorer, UnavailableScorer};

const QUERIES: [&str; 4] = [
    "What are your business hours?",
    "support shipping",
    "I forgot my password and cannot log in",
    "Tell me a joke about penguins",
];

/// Synthetic FAQ set of `n` entries built from the default questions.
fn synthetic_entries(n: usize) -> Vec<Entry> {
    let defaults = default_entries();
    (0..n)
        .map(|i| {
            let base = &defaults[i % defaults.len()];
            Entry::new(
                format!("{} variant {}", base.question, i),
                base.response.clone(),
                base.intent.clone(),
            )
        })
        .collect()
}

fn bench_lexical_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexical_fit");
    for size in [6usize, 100, 1000] {
        let entries = synthetic_entries(size);
        let questions: Vec<&str> = entries.iter().map(|e| e.question.as_str()).collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &questions, |b, q| {
            b.iter(|| LexicalScorer::fit(black_box(q)));
        });
    }
    group.finish();
}

fn bench_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("select");
    for size in [6usize, 100, 1000] {
        let kb = Arc::new(KnowledgeBase::new(synthetic_entries(size)).unwrap());
        let lexical_only = MatchSelector::new(Arc::clone(&kb), Arc::new(UnavailableScorer)).unwrap();
        let with_semantic = MatchSelector::new(
            Arc::clone(&kb),
            Arc::new(MockSemanticScorer::new(vec![0.5; size])),
        )
        .unwrap();

        group.bench_with_input(BenchmarkId::new("lexical_only", size), &lexical_only, |b, s| {
            b.iter(|| {
                for query in QUERIES {
                    black_box(s.select(black_box(query)));
                }
            });
        });
        group.bench_with_input(BenchmarkId::new("with_semantic", size), &with_semantic, |b, s| {
            b.iter(|| {
                for query in QUERIES {
                    black_box(s.select(black_box(query)));
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_lexical_fit, bench_select);
criterion_main!(benches);
