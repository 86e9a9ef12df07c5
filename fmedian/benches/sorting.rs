use criterion::{criterion_group, criterion_main};

fn sorting_benchmarks(c: &mut criterion::Criterion) {
    fmedian::bench::sorting::bench_sorting(c);
}

criterion_group!(benches, sorting_benchmarks);
criterion_main!(benches);
