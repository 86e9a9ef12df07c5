//! Benchmarks for the adaptive sort dispatcher.
//! Run with: cargo bench -p fmedian --features bench --bench sorting

use std::hint::black_box;

use criterion::{BatchSize, BenchmarkId, Criterion, Throughput};
use rand::prelude::*;

use super::{generic_sort, insertion_sort, sort};

pub fn bench_sorting(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_small");
    let mut rng = StdRng::seed_from_u64(0);

    // Window-derived lengths: full 3x3, 3x5, 5x5, 3x9, 5x5x5, plus the
    // insertion-sort range and the generic fallback.
    for len in [9usize, 15, 25, 27, 33, 49, 124, 125] {
        let values: Vec<f64> = (0..len).map(|_| rng.random_range(0.0..65535.0)).collect();

        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("dispatch", len), &values, |b, values| {
            b.iter_batched_ref(
                || values.clone(),
                |v| sort(black_box(v.as_mut_slice())),
                BatchSize::SmallInput,
            );
        });
        group.bench_with_input(BenchmarkId::new("generic", len), &values, |b, values| {
            b.iter_batched_ref(
                || values.clone(),
                |v| generic_sort(black_box(v.as_mut_slice())),
                BatchSize::SmallInput,
            );
        });
        if len < 40 {
            group.bench_with_input(BenchmarkId::new("insertion", len), &values, |b, values| {
                b.iter_batched_ref(
                    || values.clone(),
                    |v| insertion_sort(black_box(v.as_mut_slice())),
                    BatchSize::SmallInput,
                );
            });
        }
    }

    group.finish();
}
