//! Heap benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Push/pop cycles over duplicate-heavy and random data
//! - Batch heapify versus repeated push
//! - Repair after random in-place updates

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use minheap::OrderedHeap;
use rand::prelude::*;
use std::hint::black_box;

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

fn generate_random(size: usize, seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size).map(|_| rng.random()).collect()
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_pop");

    for size in [1_000, 10_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("duplicates", size), &size, |b, &n| {
            let mut heap = OrderedHeap::with_capacity(n);
            b.iter(|| {
                for _ in 0..n {
                    heap.push(0u64);
                }
                while let Ok(v) = heap.pop() {
                    black_box(v);
                }
            });
        });

        let data = generate_random(size, 42);
        group.bench_with_input(BenchmarkId::new("random", size), &data, |b, data| {
            let mut heap = OrderedHeap::with_capacity(data.len());
            b.iter(|| {
                for &v in data {
                    heap.push(v);
                }
                while let Ok(v) = heap.pop() {
                    black_box(v);
                }
            });
        });
    }

    group.finish();
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for size in [1_000, 10_000, 100_000] {
        let data = generate_random(size, 7);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("heapify", size), &data, |b, data| {
            b.iter(|| black_box(OrderedHeap::from_values(0, data.iter().copied())));
        });

        group.bench_with_input(BenchmarkId::new("repeated_push", size), &data, |b, data| {
            b.iter(|| {
                let mut heap = OrderedHeap::with_capacity(data.len());
                heap.extend(data.iter().copied());
                black_box(heap)
            });
        });
    }

    group.finish();
}

fn bench_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("update");
    let size = 10_000;
    let mut heap = OrderedHeap::from(generate_random(size, 11));
    let mut rng = StdRng::seed_from_u64(13);

    group.bench_function("replace_random", |b| {
        b.iter(|| {
            let i = rng.random_range(0..size);
            let v: u64 = rng.random();
            black_box(heap.replace(i, v))
        });
    });

    group.finish();
}

criterion_group!(benches, bench_push_pop, bench_build, bench_update);
criterion_main!(benches);
