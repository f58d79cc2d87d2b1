// Scenario tests for the sampling profiler
//
// Deterministic clocks stand in for wall time so exact sample values can be
// asserted; the real MonotonicClock is exercised only for sanity bounds.

use super::*;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::time::Duration;

/// Advances by a fixed step on every reading
struct StepClock {
    now: Cell<Duration>,
    step: Duration,
}

impl StepClock {
    fn new(step: Duration) -> Self {
        Self {
            now: Cell::new(Duration::ZERO),
            step,
        }
    }
}

impl Clock for StepClock {
    fn now(&self) -> Duration {
        let current = self.now.get();
        self.now.set(current + self.step);
        current
    }
}

/// Replays a fixed list of per-iteration durations
struct ScriptedClock {
    readings: RefCell<VecDeque<Duration>>,
}

impl ScriptedClock {
    fn from_iteration_ms(durations_ms: &[u64]) -> Self {
        let mut readings = VecDeque::new();
        let mut t = Duration::ZERO;
        for &ms in durations_ms {
            readings.push_back(t);
            t += Duration::from_millis(ms);
            readings.push_back(t);
            t += Duration::from_millis(1);
        }
        Self {
            readings: RefCell::new(readings),
        }
    }
}

impl Clock for ScriptedClock {
    fn now(&self) -> Duration {
        self.readings
            .borrow_mut()
            .pop_front()
            .expect("clock read more often than scripted")
    }
}

/// Returns a queued sequence of snapshots
struct FakeMemoryProbe {
    snapshots: RefCell<VecDeque<MemorySnapshot>>,
}

impl MemoryProbe for FakeMemoryProbe {
    fn snapshot(&self) -> MemorySnapshot {
        self.snapshots.borrow_mut().pop_front().unwrap_or_default()
    }
}

fn profiler_with_warmup(warmup_iterations: usize) -> Profiler {
    Profiler::new(ProfilerConfig {
        warmup_iterations,
        ..Default::default()
    })
    .unwrap()
}

#[test]
fn test_new_rejects_invalid_config() {
    let config = ProfilerConfig {
        confidence_level: 1.0,
        ..Default::default()
    };
    assert!(matches!(
        Profiler::new(config),
        Err(StatsError::InvalidArgument(_))
    ));
}

#[test]
fn test_measure_sync_zero_iterations() {
    let profiler = profiler_with_warmup(10);
    let calls = Cell::new(0);
    let err = profiler
        .measure_sync(|| calls.set(calls.get() + 1), 0)
        .unwrap_err();

    assert!(err.to_string().contains("Iterations must be positive"));
    // Validation happens before any warm-up run
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_measure_sync_invocation_count() {
    let profiler = profiler_with_warmup(10);
    let mut calls = 0;
    let result = profiler.measure_sync(|| calls += 1, 25).unwrap();

    assert_eq!(calls, 35);
    assert_eq!(result.iterations, 25);
    assert_eq!(result.samples.len(), 25);
}

#[test]
fn test_measure_sync_with_step_clock() {
    let profiler = profiler_with_warmup(3).with_clock(StepClock::new(Duration::from_micros(250)));
    let result = profiler.measure_sync(|| (), 8).unwrap();

    assert!(result.samples.iter().all(|&s| (s - 0.25).abs() < 1e-12));
    assert!((result.mean - 0.25).abs() < 1e-12);
    assert_eq!(result.stddev, 0.0);
    assert_eq!(result.confidence_interval.0, result.confidence_interval.1);
}

#[test]
fn test_measure_sync_scripted_samples() {
    let durations = [2, 4, 6, 8];
    let profiler = profiler_with_warmup(0).with_clock(ScriptedClock::from_iteration_ms(&durations));
    let result = profiler.measure_sync(|| (), 4).unwrap();

    assert_eq!(result.samples, vec![2.0, 4.0, 6.0, 8.0]);
    assert_eq!(result.mean, 5.0);
    assert_eq!(result.median, 5.0);
    assert_eq!(result.min, 2.0);
    assert_eq!(result.max, 8.0);
    assert!((result.stddev - (20.0f64 / 3.0).sqrt()).abs() < 1e-12);
}

#[test]
fn test_measure_sync_filters_outliers() {
    let durations = [10, 11, 10, 12, 11, 10, 11, 250];
    let profiler = Profiler::new(ProfilerConfig {
        warmup_iterations: 0,
        filter_outliers: true,
        ..Default::default()
    })
    .unwrap()
    .with_clock(ScriptedClock::from_iteration_ms(&durations));

    let result = profiler.measure_sync(|| (), durations.len()).unwrap();

    assert_eq!(result.iterations, 8);
    assert_eq!(result.outliers_removed, Some(1));
    assert_eq!(result.samples.len(), 7);
    assert_eq!(result.max, 12.0);
}

#[test]
fn test_measure_sync_real_clock_invariants() {
    let profiler = profiler_with_warmup(2);
    let result = profiler
        .measure_sync(|| std::thread::sleep(Duration::from_micros(200)), 10)
        .unwrap();

    assert!(result.min >= 0.2);
    assert!(result.min <= result.median && result.median <= result.max);
    assert!(result.min <= result.mean && result.mean <= result.max);
    assert!(result.confidence_interval.0 <= result.confidence_interval.1);
    assert!(result.samples.iter().all(|s| s.is_finite() && *s >= 0.0));
}

#[tokio::test]
async fn test_measure_async_invocation_count() {
    let profiler = profiler_with_warmup(10);
    let calls = Cell::new(0);
    let result = profiler
        .measure_async(
            || {
                calls.set(calls.get() + 1);
                async {}
            },
            15,
        )
        .await
        .unwrap();

    assert_eq!(calls.get(), 25);
    assert_eq!(result.samples.len(), 15);
}

#[tokio::test]
async fn test_measure_async_zero_iterations() {
    let profiler = profiler_with_warmup(10);
    let calls = Cell::new(0);
    let err = profiler
        .measure_async(
            || {
                calls.set(calls.get() + 1);
                async {}
            },
            0,
        )
        .await
        .unwrap_err();

    assert!(matches!(err, StatsError::InvalidArgument(ref m) if m == "Iterations must be positive"));
    assert_eq!(calls.get(), 0);
}

#[tokio::test]
async fn test_measure_async_includes_suspension() {
    let profiler = profiler_with_warmup(1);
    let result = profiler
        .measure_async(|| tokio::time::sleep(Duration::from_millis(2)), 5)
        .await
        .unwrap();

    assert!(result.min >= 2.0, "min {} shorter than the sleep", result.min);
}

#[tokio::test]
async fn test_measure_async_runs_sequentially() {
    let profiler = profiler_with_warmup(2);
    let in_flight = &Cell::new(0);
    let overlap = &Cell::new(false);

    profiler
        .measure_async(
            || async move {
                in_flight.set(in_flight.get() + 1);
                if in_flight.get() > 1 {
                    overlap.set(true);
                }
                tokio::task::yield_now().await;
                in_flight.set(in_flight.get() - 1);
            },
            10,
        )
        .await
        .unwrap();

    assert!(!overlap.get());
}

#[test]
fn test_measure_memory_reports_delta() {
    let before = MemorySnapshot {
        heap_used: 1_000,
        heap_total: 8_000,
        external: 100,
        array_buffers: 0,
    };
    let after = MemorySnapshot {
        heap_used: 900,
        heap_total: 12_096,
        external: 100,
        array_buffers: 32,
    };
    let probe = FakeMemoryProbe {
        snapshots: RefCell::new(VecDeque::from(vec![before, after])),
    };
    let profiler = profiler_with_warmup(10).with_memory_probe(probe);

    let calls = Cell::new(0);
    let delta = profiler.measure_memory(|| calls.set(calls.get() + 1));

    assert_eq!(calls.get(), 1);
    assert_eq!(delta.heap_used, -100);
    assert_eq!(delta.heap_total, 4_096);
    assert_eq!(delta.external, 0);
    assert_eq!(delta.array_buffers, 32);
}

#[test]
fn test_returned_samples_are_owned() {
    let profiler = profiler_with_warmup(0).with_clock(StepClock::new(Duration::from_millis(1)));
    let mut first = profiler.measure_sync(|| (), 3).unwrap();
    let snapshot = first.samples.clone();

    first.samples.push(99.0);
    let second = profiler.measure_sync(|| (), 3).unwrap();

    assert_eq!(second.samples, snapshot);
}

#[test]
fn test_report_from_measurements() {
    let profiler = profiler_with_warmup(0).with_clock(StepClock::new(Duration::from_millis(2)));
    let a = profiler.measure_sync(|| (), 4).unwrap();
    let b = profiler.measure_sync(|| (), 6).unwrap();

    let report = generate_report(&[a, b]);
    assert!(report.contains("Measurement 1"));
    assert!(report.contains("Iterations: 6"));
    assert!(report.contains("Mean: 2.000ms"));
}
