//! Benchmarks for the digest predicate and the search engine.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use trinity_pow::{nonce_digest, Miner, Nonce, NullReporter, SearchConfig, Trit};

fn bench_digest(c: &mut Criterion) {
    let mut nonce = Nonce::new();
    for i in 0..20 {
        nonce.push(Trit::ALL[i % 3]);
    }

    c.bench_function("digest_len20", |b| {
        b.iter(|| nonce_digest(black_box(nonce.trits())))
    });
}

fn bench_full_tree_depth8(c: &mut Criterion) {
    // Difficulty 32 never matches, so this measures pure enumeration
    // plus one digest per leaf.
    let config = SearchConfig::new(8, 0.0, 32).expect("valid config");

    c.bench_function("search_depth8_unpruned", |b| {
        b.iter(|| Miner::new(black_box(config)).run(&mut NullReporter))
    });
}

fn bench_pruned_tree_depth10(c: &mut Criterion) {
    let config = SearchConfig::new(10, 1.2, 32).expect("valid config");

    c.bench_function("search_depth10_pruned", |b| {
        b.iter(|| Miner::new(black_box(config)).run(&mut NullReporter))
    });
}

criterion_group!(
    benches,
    bench_digest,
    bench_full_tree_depth8,
    bench_pruned_tree_depth10
);
criterion_main!(benches);
