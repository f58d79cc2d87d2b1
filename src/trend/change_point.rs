//! Single change-point detection for level shifts
//!
//! Every admissible split is scored by the effect size between the two
//! segments (mean difference over pooled within-segment standard deviation).
//! The best split is reported only if it also explains the data clearly
//! better than a straight line, which keeps smooth ramps from registering as
//! steps: a ramp has a large effect size across its midpoint but is fit
//! almost exactly by a trend line.

use crate::error::{Result, StatsError};
use crate::stats::mean;
use crate::trend::regression::least_squares;
use crate::trend::series::{values_of, TimeSeriesPoint};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MIN_SEGMENT_SIZE: usize = 5;

/// Minimum effect size (in pooled standard deviations) for a reported change
pub const CHANGE_POINT_EFFECT_SIZE: f64 = 2.0;

/// Largest allowed ratio of step-model residual to linear-trend residual
pub const STEP_MODEL_RESIDUAL_RATIO: f64 = 0.5;

/// A level shift between `series[..index]` and `series[index..]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChangePoint {
    /// First index of the second regime
    pub index: usize,
    pub timestamp: i64,
    pub mean_before: f64,
    pub mean_after: f64,
    /// Effect size of the split
    pub score: f64,
}

#[derive(Debug, Clone, Copy)]
struct Split {
    index: usize,
    mean_before: f64,
    mean_after: f64,
    score: f64,
    residual: f64,
}

/// Sum of squared deviations from the segment mean
fn within_ss(segment: &[f64], segment_mean: f64) -> f64 {
    segment.iter().map(|&x| (x - segment_mean).powi(2)).sum()
}

fn score_split(values: &[f64], index: usize) -> Result<Split> {
    let (before, after) = values.split_at(index);
    let mean_before = mean(before)?;
    let mean_after = mean(after)?;
    let residual = within_ss(before, mean_before) + within_ss(after, mean_after);

    let dof = values.len().saturating_sub(2);
    let pooled_sd = if dof > 0 {
        (residual / dof as f64).sqrt()
    } else {
        0.0
    };
    // Floor keeps the score finite for noise-free steps
    let floor = 1e-12 * (mean_before.abs() + mean_after.abs()).max(1.0);
    let score = (mean_after - mean_before).abs() / pooled_sd.max(floor);

    Ok(Split {
        index,
        mean_before,
        mean_after,
        score,
        residual,
    })
}

/// Find the dominant level shift, if any
///
/// Returns `Ok(None)` when the series is shorter than `2 * min_segment_size`
/// or no split is both large enough and better explained by a step than by
/// a trend line.
///
/// # Example
/// ```
/// use rendimiento::trend::{detect_change_point, series_from_values, DEFAULT_MIN_SEGMENT_SIZE};
///
/// let mut values = vec![10.0; 6];
/// values.extend(vec![50.0; 6]);
/// let series = series_from_values(&values, 1000);
///
/// let change = detect_change_point(&series, DEFAULT_MIN_SEGMENT_SIZE).unwrap().unwrap();
/// assert_eq!(change.index, 6);
/// assert_eq!(change.mean_before, 10.0);
/// assert_eq!(change.mean_after, 50.0);
/// ```
pub fn detect_change_point(
    series: &[TimeSeriesPoint],
    min_segment_size: usize,
) -> Result<Option<ChangePoint>> {
    if min_segment_size == 0 {
        return Err(StatsError::invalid("minimum segment size must be at least 1"));
    }
    if series.len() / 2 < min_segment_size {
        return Ok(None);
    }

    let values = values_of(series);
    let mut best: Option<Split> = None;
    for index in min_segment_size..=(values.len() - min_segment_size) {
        let split = score_split(&values, index)?;
        if best.map_or(true, |b| split.score > b.score) {
            best = Some(split);
        }
    }

    let Some(best) = best else {
        return Ok(None);
    };

    if best.score < CHANGE_POINT_EFFECT_SIZE {
        tracing::trace!(score = best.score, "no change point: effect size too small");
        return Ok(None);
    }

    let linear_residual = least_squares(series).ss_res;
    if best.residual > STEP_MODEL_RESIDUAL_RATIO * linear_residual {
        tracing::trace!(
            step_residual = best.residual,
            linear_residual,
            "no change point: trend line explains the series"
        );
        return Ok(None);
    }

    Ok(Some(ChangePoint {
        index: best.index,
        timestamp: series[best.index].timestamp,
        mean_before: best.mean_before,
        mean_after: best.mean_after,
        score: best.score,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trend::series::series_from_values;

    fn step(before: usize, low: f64, after: usize, high: f64) -> Vec<TimeSeriesPoint> {
        let mut values = vec![low; before];
        values.extend(vec![high; after]);
        series_from_values(&values, 1000)
    }

    #[test]
    fn test_detects_even_step() {
        let change = detect_change_point(&step(6, 10.0, 6, 50.0), 5)
            .unwrap()
            .expect("step should be detected");
        assert_eq!(change.index, 6);
        assert_eq!(change.timestamp, 6000);
        assert!((change.mean_before - 10.0).abs() < 1e-9);
        assert!((change.mean_after - 50.0).abs() < 1e-9);
        assert!(change.score >= CHANGE_POINT_EFFECT_SIZE);
    }

    #[test]
    fn test_detects_step_near_start_and_end() {
        let early = detect_change_point(&step(5, 1.0, 10, 9.0), 5).unwrap().unwrap();
        assert_eq!(early.index, 5);

        let late = detect_change_point(&step(10, 1.0, 5, 9.0), 5).unwrap().unwrap();
        assert_eq!(late.index, 10);
    }

    #[test]
    fn test_detects_downward_step() {
        let change = detect_change_point(&step(8, 40.0, 8, 12.0), 5).unwrap().unwrap();
        assert_eq!(change.index, 8);
        assert!(change.mean_after < change.mean_before);
    }

    #[test]
    fn test_flat_noisy_series_returns_none() {
        let noise = [-0.5, 0.0, 0.5, -0.25, 0.25];
        let values: Vec<f64> = (0..20).map(|i| 20.0 + noise[(i * 7) % 5]).collect();
        let series = series_from_values(&values, 1000);
        assert_eq!(detect_change_point(&series, 5).unwrap(), None);
    }

    #[test]
    fn test_linear_ramp_returns_none() {
        let values: Vec<f64> = (0..20).map(|i| i as f64).collect();
        let series = series_from_values(&values, 1000);
        assert_eq!(detect_change_point(&series, 5).unwrap(), None);
    }

    #[test]
    fn test_constant_series_returns_none() {
        let series = series_from_values(&[3.0; 12], 1000);
        assert_eq!(detect_change_point(&series, 5).unwrap(), None);
    }

    #[test]
    fn test_short_series_returns_none() {
        let series = step(4, 1.0, 5, 100.0);
        assert_eq!(detect_change_point(&series, 5).unwrap(), None);
    }

    #[test]
    fn test_zero_min_segment_rejected() {
        assert!(matches!(
            detect_change_point(&step(6, 1.0, 6, 2.0), 0),
            Err(StatsError::InvalidArgument(_))
        ));
    }
}
