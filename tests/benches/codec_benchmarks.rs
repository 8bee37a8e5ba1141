//! Criterion benchmarks for block decoding and ancestry resolution.
//!
//! Run with: `cargo bench -p fc-tests`

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fc_01_block_codec::BlockCodec;
use fc_02_ancestry::{AncestryResolver, InMemoryBlockStore, InMemoryBlockchain};
use fc_tests::fixtures::{produce_block, produce_chain};
use shared_types::ZERO_HASH;

fn bench_decode(c: &mut Criterion) {
    let codec = BlockCodec::default();
    let mut group = c.benchmark_group("fc01_decode");

    for tx_count in [0usize, 10, 100, 500] {
        let raw = produce_block(&codec, 1, ZERO_HASH, tx_count, 1)
            .encode()
            .to_vec();
        group.bench_with_input(BenchmarkId::from_parameter(tx_count), &raw, |b, raw| {
            b.iter(|| codec.decode(black_box(raw)))
        });
    }
    group.finish();
}

fn bench_lazy_hash(c: &mut Criterion) {
    let codec = BlockCodec::default();
    let raw = produce_block(&codec, 1, ZERO_HASH, 100, 1).encode().to_vec();

    c.bench_function("fc01_lazy_hash_100_txs", |b| {
        b.iter(|| codec.lazy(black_box(raw.clone())).hash())
    });
}

fn bench_ancestry(c: &mut Criterion) {
    let codec = BlockCodec::default();
    let mut group = c.benchmark_group("fc02_unknown_ancestors");

    for orphan_run in [10u64, 100, 1_000] {
        let blocks = produce_chain(&codec, orphan_run + 11, 0);
        let chain = InMemoryBlockchain::with_blocks(blocks[..10].iter().cloned());
        let store = InMemoryBlockStore::new();
        for block in &blocks[11..] {
            store.insert(Arc::new(block.clone()));
        }
        let tip = blocks[blocks.len() - 1].hash();
        let resolver = AncestryResolver::default();

        group.bench_with_input(BenchmarkId::from_parameter(orphan_run), &tip, |b, tip| {
            b.iter(|| resolver.unknown_ancestors_of(black_box(*tip), &chain, &store))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_decode, bench_lazy_hash, bench_ancestry);
criterion_main!(benches);
