//! Benchmarks for the thresholded median and sigma filters.
//! Run with: cargo bench -p fmedian --features bench --bench filter

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput};
use rand::prelude::*;

use super::{median_filter, median_filter3, sigma_filter};
use crate::common::{Buffer2, Buffer3};
use crate::config::{FilterConfig, FilterConfig3};

pub fn bench_filter(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let (width, height) = (1024, 1024);
    let input = Buffer2::from_fn(width, height, |_, _| rng.random_range(0u16..4096));
    let mut output = Buffer2::new_default(width, height);

    let mut group = c.benchmark_group("median_filter");
    group.sample_size(20);
    group.throughput(Throughput::Elements((width * height) as u64));

    // 3x3, 5x5, 3x9 and 11x11 windows; the last one hits the generic sort
    for (hx, hy) in [(1, 1), (2, 2), (1, 4), (5, 5)] {
        let label = format!("{}x{}", 2 * hx + 1, 2 * hy + 1);

        let config = FilterConfig::unthresholded(hx, hy);
        group.bench_function(BenchmarkId::new("unthresholded", &label), |b| {
            b.iter(|| {
                median_filter(black_box(&input.view()), &mut output.view_mut(), &config).unwrap();
            });
        });

        let config = FilterConfig::new(hx, hy, 500.0);
        group.bench_function(BenchmarkId::new("threshold_500", &label), |b| {
            b.iter(|| {
                median_filter(black_box(&input.view()), &mut output.view_mut(), &config).unwrap();
            });
        });
    }

    group.finish();

    let mut group = c.benchmark_group("sigma_filter");
    group.sample_size(20);
    group.throughput(Throughput::Elements((width * height) as u64));

    for radius in [1, 2] {
        let config = FilterConfig::square(radius);
        group.bench_function(BenchmarkId::new("square", radius), |b| {
            b.iter(|| {
                sigma_filter(black_box(&input.view()), &mut output.view_mut(), &config).unwrap();
            });
        });
    }

    group.finish();

    let side = 64;
    let volume = Buffer3::from_fn(side, side, side, |_, _, _| rng.random_range(0u16..4096));
    let mut output = Buffer3::new_default(side, side, side);

    let mut group = c.benchmark_group("median_filter3");
    group.sample_size(20);
    group.throughput(Throughput::Elements((side * side * side) as u64));

    // 27 and 125 neighbors, both on sorting networks
    for radius in [1, 2] {
        let config = FilterConfig3::cube(radius);
        group.bench_function(BenchmarkId::new("cube", radius), |b| {
            b.iter(|| {
                median_filter3(black_box(&volume.view()), &mut output.view_mut(), &config).unwrap();
            });
        });
    }

    group.finish();
}
