//! Benchmarks for the hand-rolled collections: ring insertion and
//! traversal, and search-index workloads shaped like store lookups.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use innkeep::collections::{Ring, SearchIndex};

/// Deterministic non-sequential key order so the unbalanced tree is
/// exercised on something other than its degenerate chain case.
fn scattered_keys(n: usize) -> Vec<u64> {
    (0..n as u64).map(|i| (i * 7919) % n as u64).collect()
}

fn bench_ring(c: &mut Criterion) {
    let mut group = c.benchmark_group("ring");
    for size in [100usize, 1_000, 10_000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("insert_back", size), &size, |b, &n| {
            b.iter(|| {
                let mut ring = Ring::new();
                for i in 0..n {
                    ring.insert_back(black_box(i));
                }
                ring
            });
        });

        group.bench_with_input(BenchmarkId::new("iterate", size), &size, |b, &n| {
            let mut ring = Ring::new();
            for i in 0..n {
                ring.insert_back(i);
            }
            b.iter(|| {
                let mut sum = 0usize;
                for value in &ring {
                    sum = sum.wrapping_add(*value);
                }
                black_box(sum)
            });
        });
    }
    group.finish();
}

fn bench_search_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_index");
    for size in [100usize, 1_000, 10_000] {
        let keys = scattered_keys(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("insert", size), &keys, |b, keys| {
            b.iter(|| {
                let mut index = SearchIndex::new();
                for &key in keys {
                    index.insert(black_box(key), ());
                }
                index
            });
        });

        group.bench_with_input(BenchmarkId::new("get", size), &keys, |b, keys| {
            let mut index = SearchIndex::new();
            for &key in keys {
                index.insert(key, ());
            }
            b.iter(|| {
                let mut hits = 0usize;
                for key in keys {
                    if index.get(black_box(key)).is_some() {
                        hits += 1;
                    }
                }
                black_box(hits)
            });
        });

        group.bench_with_input(BenchmarkId::new("churn", size), &keys, |b, keys| {
            b.iter(|| {
                let mut index = SearchIndex::new();
                for &key in keys {
                    index.insert(key, ());
                }
                for key in keys.iter().step_by(2) {
                    index.remove(black_box(key));
                }
                index.len()
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_ring, bench_search_index);
criterion_main!(benches);
