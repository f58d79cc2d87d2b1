// Sampling profiler: repeated execution with warm-up and descriptive statistics
//
// The profiler runs an operation a fixed number of times after a warm-up
// phase, times each measured call with an injectable monotonic clock, and
// reduces the samples to a PerformanceResult. Execution is strictly
// sequential: iteration i+1 never starts before iteration i has finished
// (or, for async operations, settled), since overlapping runs would put
// contention noise into the latency samples.
//
// Capabilities:
// - Clock: time source for per-iteration durations (MonotonicClock default)
// - MemoryProbe: process memory counters for measure_memory
//   (ProcessMemoryProbe default)

mod clock;
mod config;
mod memory;
mod report;
mod result;

pub use clock::{Clock, MonotonicClock};
pub use config::ProfilerConfig;
pub use memory::{MemoryProbe, MemorySnapshot, ProcessMemoryProbe};
pub use report::generate_report;
pub use result::PerformanceResult;

use crate::error::{Result, StatsError};
use std::future::Future;
use std::hint::black_box;

/// Measures operations under a fixed configuration
///
/// # Example
/// ```
/// use rendimiento::profiler::{Profiler, ProfilerConfig};
///
/// let profiler = Profiler::new(ProfilerConfig::default()).unwrap();
/// let result = profiler.measure_sync(|| (0..100u64).sum::<u64>(), 25).unwrap();
/// assert_eq!(result.iterations, 25);
/// assert_eq!(result.samples.len(), 25);
/// assert!(result.min <= result.median && result.median <= result.max);
/// ```
#[derive(Debug, Clone)]
pub struct Profiler<C = MonotonicClock, M = ProcessMemoryProbe> {
    config: ProfilerConfig,
    clock: C,
    memory: M,
}

impl Profiler {
    /// Create a profiler with the system clock and process memory probe
    pub fn new(config: ProfilerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            clock: MonotonicClock::new(),
            memory: ProcessMemoryProbe,
        })
    }
}

impl<C: Clock, M: MemoryProbe> Profiler<C, M> {
    /// Replace the time source
    pub fn with_clock<C2: Clock>(self, clock: C2) -> Profiler<C2, M> {
        Profiler {
            config: self.config,
            clock,
            memory: self.memory,
        }
    }

    /// Replace the memory probe
    pub fn with_memory_probe<M2: MemoryProbe>(self, memory: M2) -> Profiler<C, M2> {
        Profiler {
            config: self.config,
            clock: self.clock,
            memory,
        }
    }

    pub fn config(&self) -> &ProfilerConfig {
        &self.config
    }

    /// Measure a synchronous operation
    ///
    /// Runs `operation` `warmup_iterations` times untimed, then `iterations`
    /// times timed. Fails before any execution when `iterations` is zero.
    pub fn measure_sync<F, R>(&self, mut operation: F, iterations: usize) -> Result<PerformanceResult>
    where
        F: FnMut() -> R,
    {
        validate_iterations(iterations)?;

        tracing::debug!(
            warmup = self.config.warmup_iterations,
            iterations,
            "starting synchronous measurement"
        );
        for _ in 0..self.config.warmup_iterations {
            black_box(operation());
        }

        let mut samples = Vec::with_capacity(iterations);
        for _ in 0..iterations {
            let start = self.clock.now();
            black_box(operation());
            let end = self.clock.now();
            samples.push(clock::elapsed_ms(start, end));
        }
        tracing::debug!(iterations, "synchronous measurement complete");

        self.summarize(samples, iterations)
    }

    /// Measure an asynchronous operation, awaiting each call in turn
    ///
    /// Each timed sample covers the full await, including suspension. The
    /// future is runtime-agnostic; any executor may drive it.
    pub async fn measure_async<F, Fut>(
        &self,
        mut operation: F,
        iterations: usize,
    ) -> Result<PerformanceResult>
    where
        F: FnMut() -> Fut,
        Fut: Future,
    {
        validate_iterations(iterations)?;

        tracing::debug!(
            warmup = self.config.warmup_iterations,
            iterations,
            "starting asynchronous measurement"
        );
        for _ in 0..self.config.warmup_iterations {
            black_box(operation().await);
        }

        let mut samples = Vec::with_capacity(iterations);
        for _ in 0..iterations {
            let start = self.clock.now();
            black_box(operation().await);
            let end = self.clock.now();
            samples.push(clock::elapsed_ms(start, end));
        }
        tracing::debug!(iterations, "asynchronous measurement complete");

        self.summarize(samples, iterations)
    }

    /// Reduce already-collected samples with this profiler's configuration
    pub fn summarize(&self, samples: Vec<f64>, iterations: usize) -> Result<PerformanceResult> {
        PerformanceResult::from_samples(
            samples,
            iterations,
            self.config.confidence_level,
            self.config.filter_outliers,
        )
    }

    /// Run `operation` once and return the memory delta (after - before)
    pub fn measure_memory<F, R>(&self, operation: F) -> MemorySnapshot
    where
        F: FnOnce() -> R,
    {
        let before = self.memory.snapshot();
        black_box(operation());
        let after = self.memory.snapshot();
        after - before
    }
}

fn validate_iterations(iterations: usize) -> Result<()> {
    if iterations == 0 {
        return Err(StatsError::invalid("Iterations must be positive"));
    }
    Ok(())
}

#[cfg(test)]
mod tests;
