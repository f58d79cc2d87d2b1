/// Statistics Overhead Benchmarks
///
/// Measures the cost of reducing raw samples to a PerformanceResult and of
/// the individual statistics behind it. These benchmarks help detect
/// performance regressions in the summary path.
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rendimiento::profiler::{Profiler, ProfilerConfig};
use rendimiento::stats::{self, OutlierMethod};

/// Deterministic jittered latency samples around 10ms
fn latency_samples(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| 10.0 + ((i * 7919) % 101) as f64 / 50.0)
        .collect()
}

fn bench_percentile(c: &mut Criterion) {
    let mut group = c.benchmark_group("percentile");

    for size in [100, 1_000, 10_000] {
        let samples = latency_samples(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("p99", size), &samples, |b, samples| {
            b.iter(|| stats::calculate_percentile(black_box(samples), 99.0));
        });
    }

    group.finish();
}

fn bench_confidence_interval(c: &mut Criterion) {
    let mut group = c.benchmark_group("confidence_interval");

    for size in [10, 100, 1_000] {
        let samples = latency_samples(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &samples, |b, samples| {
            b.iter(|| stats::calculate_confidence_interval(black_box(samples), 0.95));
        });
    }

    group.finish();
}

fn bench_outlier_detection(c: &mut Criterion) {
    let mut group = c.benchmark_group("outliers");
    let samples = latency_samples(1_000);

    for method in [OutlierMethod::Iqr, OutlierMethod::ZScore] {
        group.bench_with_input(
            BenchmarkId::from_parameter(method),
            &samples,
            |b, samples| {
                b.iter(|| stats::detect_outliers(black_box(samples), method));
            },
        );
    }

    group.finish();
}

fn bench_summarize(c: &mut Criterion) {
    let mut group = c.benchmark_group("summarize");
    let samples = latency_samples(1_000);

    for (name, config) in [
        ("default", ProfilerConfig::default()),
        ("thorough", ProfilerConfig::thorough()),
    ] {
        let profiler = Profiler::new(config).expect("valid preset");
        group.bench_function(name, |b| {
            b.iter(|| profiler.summarize(black_box(samples.clone()), samples.len()));
        });
    }

    group.finish();
}

/// Overhead of the timing loop itself around a trivial operation
fn bench_measure_sync(c: &mut Criterion) {
    let profiler = Profiler::new(ProfilerConfig::quick()).expect("valid preset");

    c.bench_function("measure_sync_noop_100", |b| {
        b.iter(|| profiler.measure_sync(|| black_box(1u64 + 1), 100));
    });
}

criterion_group!(
    benches,
    bench_percentile,
    bench_confidence_interval,
    bench_outlier_detection,
    bench_summarize,
    bench_measure_sync
);
criterion_main!(benches);
