//! Outlier classification (IQR fences and z-score rule)

use crate::error::{Result, StatsError};
use crate::stats::descriptive::{mean, percentile_of_sorted, sample_stddev};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Tukey fence multiplier applied to the interquartile range
pub const IQR_MULTIPLIER: f64 = 1.5;

/// Values further than this many standard deviations from the mean are outliers
pub const Z_SCORE_THRESHOLD: f64 = 3.0;

/// Outlier detection rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutlierMethod {
    /// Outside `[Q1 - 1.5*IQR, Q3 + 1.5*IQR]`
    Iqr,
    /// `|x - mean| / stddev > 3`
    #[value(name = "zscore", alias = "z-score")]
    ZScore,
}

impl fmt::Display for OutlierMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutlierMethod::Iqr => write!(f, "iqr"),
            OutlierMethod::ZScore => write!(f, "zscore"),
        }
    }
}

impl FromStr for OutlierMethod {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "iqr" => Ok(OutlierMethod::Iqr),
            "zscore" | "z-score" => Ok(OutlierMethod::ZScore),
            other => Err(StatsError::invalid(format!(
                "unknown outlier detection method '{}' (expected 'iqr' or 'zscore')",
                other
            ))),
        }
    }
}

/// Lower and upper Tukey fences of a non-empty sample set
pub fn iqr_fences(samples: &[f64]) -> Result<(f64, f64)> {
    if samples.is_empty() {
        return Err(StatsError::EmptyInput);
    }

    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);
    let q1 = percentile_of_sorted(&sorted, 25.0);
    let q3 = percentile_of_sorted(&sorted, 75.0);
    let iqr = q3 - q1;

    Ok((q1 - IQR_MULTIPLIER * iqr, q3 + IQR_MULTIPLIER * iqr))
}

/// Flag each sample as outlier (`true`) or inlier (`false`)
///
/// The output is index-aligned with the input. Empty input yields an empty
/// vector and uniform data yields all-false for both methods.
///
/// # Example
/// ```
/// use rendimiento::stats::{detect_outliers, OutlierMethod};
///
/// let flags = detect_outliers(&[1.0, 10.0, 11.0, 12.0, 13.0, 14.0, 100.0], OutlierMethod::Iqr).unwrap();
/// assert_eq!(flags, vec![true, false, false, false, false, false, true]);
/// ```
pub fn detect_outliers(samples: &[f64], method: OutlierMethod) -> Result<Vec<bool>> {
    match samples.len() {
        0 => return Ok(Vec::new()),
        1 => return Ok(vec![false]),
        _ => {}
    }

    let flags = match method {
        OutlierMethod::Iqr => {
            let (lower, upper) = iqr_fences(samples)?;
            samples.iter().map(|&x| x < lower || x > upper).collect()
        }
        OutlierMethod::ZScore => {
            let avg = mean(samples)?;
            let stddev = sample_stddev(samples)?;
            if stddev > 0.0 {
                samples
                    .iter()
                    .map(|&x| ((x - avg) / stddev).abs() > Z_SCORE_THRESHOLD)
                    .collect()
            } else {
                vec![false; samples.len()]
            }
        }
    };

    Ok(flags)
}
