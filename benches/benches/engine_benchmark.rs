//! Engine benchmarks: tree range queries and append/query interleaving.
//!
//! Run with: `cargo bench --package nazca-bench`

use std::hint::black_box;

use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use nazca_bench::ValueGenerator;
use nazca_lib::{AggregateTree, SeriesStore};

/// Benchmarks a trailing-window range query at several series sizes.
fn tree_query_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree_range_query");

    for &len in &[1_000usize, 100_000, 1_000_000] {
        let mut generator = ValueGenerator::new(42);
        let mut tree = AggregateTree::new();
        tree.ensure_capacity(len);
        for (i, value) in generator.batch(len).into_iter().enumerate() {
            tree.set_leaf(i, value);
        }

        let window = 10_000.min(len);
        group.throughput(Throughput::Elements(window as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &tree, |b, tree| {
            b.iter(|| black_box(tree.range_query(len - window, len)));
        });
    }

    group.finish();
}

/// Benchmarks the lazy fold: every iteration appends a fresh batch and
/// immediately queries, so the fold cost cannot be amortized away by the
/// result cache.
fn append_query_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("append_then_query");

    let mut generator = ValueGenerator::new(7);
    let mut template = SeriesStore::new();
    template.append(&generator.batch(10_000)).unwrap();
    template.query(4).unwrap();

    for &batch_len in &[10usize, 100, 1_000] {
        let batch = generator.batch(batch_len);
        group.throughput(Throughput::Elements(batch_len as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(batch_len),
            &batch,
            |b, batch| {
                b.iter_batched_ref(
                    || template.clone(),
                    |store| {
                        store.append(batch).unwrap();
                        black_box(store.query(4).unwrap());
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

criterion_group!(benches, tree_query_benchmark, append_query_benchmark);
criterion_main!(benches);
