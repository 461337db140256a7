//! Resolution latency: discovery and scoring alone, and full resolve calls
//! across the fast path, direct patterns and scored selection.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use restyle_core::config::ResolverConfig;
use restyle_core::types::{ComponentType, StyleContext};
use restyle_engine::{CommandRegistry, ConfidenceScorer, EditingSession, PatternLibrary};

const COMMANDS: &[&str] = &[
    "horizontal",
    "padding: 12px",
    "add subtle outer shadow",
    "make the background darker",
    "set the border radius to 8px",
    "show the legend at the bottom",
    "order a pizza",
];

fn bench_resolution(c: &mut Criterion) {
    let registry =
        CommandRegistry::with_builtins(&PatternLibrary::with_builtins(), ResolverConfig::default());
    let scorer = ConfidenceScorer::new(registry.config());
    let ctx = StyleContext::new(ComponentType::Container);
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap();

    c.bench_function("discover_and_rank", |b| {
        b.iter(|| {
            for text in COMMANDS {
                let candidates = registry.discover(black_box(text), &ctx);
                black_box(scorer.rank(candidates, None));
            }
        })
    });

    c.bench_function("resolve_mixed_commands", |b| {
        b.iter(|| {
            let mut session = EditingSession::new();
            for text in COMMANDS {
                let resolution =
                    runtime.block_on(registry.resolve(black_box(text), &ctx, &mut session));
                black_box(resolution);
            }
        })
    });

    c.bench_function("library_load_builtins", |b| {
        b.iter(|| black_box(PatternLibrary::with_builtins()))
    });
}

criterion_group!(benches, bench_resolution);
criterion_main!(benches);
