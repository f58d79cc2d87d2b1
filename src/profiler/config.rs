// Configuration for the sampling profiler
//
// Resolved once when a Profiler is constructed and never mutated afterwards.

use crate::error::{Result, StatsError};
use serde::{Deserialize, Serialize};

/// Configuration for repeated-execution measurements
///
/// # Example
/// ```
/// use rendimiento::profiler::ProfilerConfig;
///
/// let config = ProfilerConfig::default();
/// assert_eq!(config.warmup_iterations, 10);
/// assert_eq!(config.confidence_level, 0.95);
/// assert!(!config.filter_outliers);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfilerConfig {
    /// Un-timed executions before measurement starts
    ///
    /// Warm-up runs still execute the operation and its side effects. They
    /// bring caches, branch predictors and lazy initialisation into steady
    /// state before timing begins.
    ///
    /// Default: 10
    pub warmup_iterations: usize,

    /// Coverage of the reported confidence interval, exclusive range (0, 1)
    ///
    /// Default: 0.95
    pub confidence_level: f64,

    /// Drop IQR outliers (Tukey fences, 1.5 x IQR) before computing statistics
    ///
    /// Default: false
    pub filter_outliers: bool,
}

impl Default for ProfilerConfig {
    fn default() -> Self {
        Self {
            warmup_iterations: 10,
            confidence_level: 0.95,
            filter_outliers: false,
        }
    }
}

impl ProfilerConfig {
    /// Fast feedback: short warm-up, 90% interval
    pub fn quick() -> Self {
        Self {
            warmup_iterations: 2,
            confidence_level: 0.90,
            filter_outliers: false,
        }
    }

    /// Long warm-up, 99% interval, outliers removed
    ///
    /// Use for latency budgets checked in CI where scheduler noise would
    /// otherwise dominate the tail.
    pub fn thorough() -> Self {
        Self {
            warmup_iterations: 50,
            confidence_level: 0.99,
            filter_outliers: true,
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !(self.confidence_level > 0.0 && self.confidence_level < 1.0) {
            return Err(StatsError::invalid(format!(
                "confidence_level must be in (0, 1), got {}",
                self.confidence_level
            )));
        }

        Ok(())
    }
}
