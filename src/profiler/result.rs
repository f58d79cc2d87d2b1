//! Reduction of duration samples into a `PerformanceResult`

use crate::error::{Result, StatsError};
use crate::stats::{self, OutlierMethod};
use serde::{Deserialize, Serialize};

/// Descriptive statistics for one measurement run (milliseconds)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceResult {
    /// Requested measured iterations (warm-up excluded)
    pub iterations: usize,
    /// Samples the statistics were computed from (post-filter when filtering)
    pub samples: Vec<f64>,
    pub mean: f64,
    pub median: f64,
    pub p95: f64,
    pub p99: f64,
    pub min: f64,
    pub max: f64,
    /// Sample standard deviation (N-1)
    pub stddev: f64,
    pub confidence_interval: (f64, f64),
    /// Present only when outlier filtering was enabled
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub outliers_removed: Option<usize>,
}

impl PerformanceResult {
    /// Summarize raw samples
    ///
    /// With `filter_outliers`, samples outside the IQR fences are dropped
    /// first and the dropped count lands in `outliers_removed`. A single
    /// sample yields `stddev = 0` and a collapsed interval `[mean, mean]`.
    pub fn from_samples(
        samples: Vec<f64>,
        iterations: usize,
        confidence_level: f64,
        filter_outliers: bool,
    ) -> Result<Self> {
        if samples.is_empty() {
            return Err(StatsError::EmptyInput);
        }

        let (samples, outliers_removed) = if filter_outliers {
            let flags = stats::detect_outliers(&samples, OutlierMethod::Iqr)?;
            let kept: Vec<f64> = samples
                .iter()
                .zip(&flags)
                .filter_map(|(&x, &is_outlier)| (!is_outlier).then_some(x))
                .collect();
            let removed = samples.len() - kept.len();
            (kept, Some(removed))
        } else {
            (samples, None)
        };

        let min = stats::min(&samples)?;
        let max = stats::max(&samples)?;
        // Rounding in the sum can push the mean a ULP outside the range
        let mean = stats::mean(&samples)?.clamp(min, max);
        let median = stats::calculate_percentile(&samples, 50.0)?;
        let p95 = stats::calculate_percentile(&samples, 95.0)?;
        let p99 = stats::calculate_percentile(&samples, 99.0)?;
        let stddev = stats::sample_stddev(&samples)?;
        let confidence_interval = if samples.len() >= 2 {
            stats::calculate_confidence_interval(&samples, confidence_level)?
        } else {
            (mean, mean)
        };

        tracing::trace!(
            iterations,
            kept = samples.len(),
            mean,
            median,
            p99,
            "summarized measurement"
        );

        Ok(Self {
            iterations,
            samples,
            mean,
            median,
            p95,
            p99,
            min,
            max,
            stddev,
            confidence_interval,
            outliers_removed,
        })
    }

    /// Width of the confidence interval relative to the mean
    pub fn relative_ci_width(&self) -> f64 {
        if self.mean == 0.0 {
            return 0.0;
        }
        (self.confidence_interval.1 - self.confidence_interval.0) / self.mean
    }
}
