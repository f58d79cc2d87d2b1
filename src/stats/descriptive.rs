//! Descriptive statistics over sample slices

use crate::error::{Result, StatsError};

/// Arithmetic mean
pub fn mean(samples: &[f64]) -> Result<f64> {
    if samples.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    Ok(samples.iter().sum::<f64>() / samples.len() as f64)
}

/// Sample variance with the N-1 (Bessel) denominator
///
/// A single sample has no spread and yields `0.0`.
pub fn sample_variance(samples: &[f64]) -> Result<f64> {
    let avg = mean(samples)?;
    if samples.len() < 2 {
        return Ok(0.0);
    }
    let sum_sq: f64 = samples.iter().map(|&x| (x - avg) * (x - avg)).sum();
    Ok(sum_sq / (samples.len() - 1) as f64)
}

/// Sample standard deviation (N-1 denominator)
pub fn sample_stddev(samples: &[f64]) -> Result<f64> {
    Ok(sample_variance(samples)?.sqrt())
}

pub fn min(samples: &[f64]) -> Result<f64> {
    samples
        .iter()
        .copied()
        .min_by(f64::total_cmp)
        .ok_or(StatsError::EmptyInput)
}

pub fn max(samples: &[f64]) -> Result<f64> {
    samples
        .iter()
        .copied()
        .max_by(f64::total_cmp)
        .ok_or(StatsError::EmptyInput)
}

/// Calculate a percentile with linear interpolation between order statistics
///
/// The rank is `p/100 * (n-1)`; the result interpolates between the samples
/// at `floor(rank)` and `ceil(rank)`. The input slice is not reordered.
///
/// # Example
/// ```
/// use rendimiento::stats::calculate_percentile;
///
/// let samples = [4.0, 1.0, 3.0, 2.0];
/// assert_eq!(calculate_percentile(&samples, 50.0).unwrap(), 2.5);
/// assert_eq!(calculate_percentile(&samples, 100.0).unwrap(), 4.0);
/// ```
pub fn calculate_percentile(samples: &[f64], percentile: f64) -> Result<f64> {
    if samples.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    if !(0.0..=100.0).contains(&percentile) {
        return Err(StatsError::invalid(format!(
            "percentile must be in [0, 100], got {}",
            percentile
        )));
    }

    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);
    Ok(percentile_of_sorted(&sorted, percentile))
}

/// Percentile of data that is already sorted ascending and non-empty
pub(crate) fn percentile_of_sorted(sorted: &[f64], percentile: f64) -> f64 {
    if sorted.len() == 1 {
        return sorted[0];
    }

    let rank = (percentile / 100.0) * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;

    if lower == upper {
        sorted[lower]
    } else {
        let weight = rank - lower as f64;
        sorted[lower] + weight * (sorted[upper] - sorted[lower])
    }
}
