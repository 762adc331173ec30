//! Criterion benchmarks for warpsum-dtw: fresh versus reused row buffers.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use warpsum_dtw::{RowBuffers, TimeSeries, distance, distance_with_buffers};

fn make_sine_series(n: usize, offset: f64) -> TimeSeries {
    let values: Vec<f64> = (0..n).map(|i| (i as f64 * 0.1).sin() + offset).collect();
    TimeSeries::new(values).unwrap()
}

fn bench_dtw_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("dtw_distance");

    for len in [64usize, 256, 1024] {
        let a = make_sine_series(len, 0.0);
        let b = make_sine_series(len, 1.0);

        group.bench_with_input(BenchmarkId::new("fresh", len), &(&a, &b), |bencher, (a, b)| {
            bencher.iter(|| distance(a.as_view(), b.as_view()).unwrap());
        });

        let mut buffers = RowBuffers::new(len);
        group.bench_with_input(BenchmarkId::new("reused", len), &(&a, &b), |bencher, (a, b)| {
            bencher.iter(|| distance_with_buffers(a.as_view(), b.as_view(), &mut buffers).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_dtw_distance);
criterion_main!(benches);
