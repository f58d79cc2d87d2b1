//! Time-stamped metric samples

use serde::{Deserialize, Serialize};

/// One observation of a metric at a point in time
///
/// `timestamp` is milliseconds, either epoch-based or relative to a run start.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub struct TimeSeriesPoint {
    pub timestamp: i64,
    pub value: f64,
}

impl TimeSeriesPoint {
    pub fn new(timestamp: i64, value: f64) -> Self {
        Self { timestamp, value }
    }
}

/// Build a series from evenly spaced values starting at timestamp 0
pub fn series_from_values(values: &[f64], interval_ms: i64) -> Vec<TimeSeriesPoint> {
    values
        .iter()
        .enumerate()
        .map(|(i, &value)| TimeSeriesPoint::new(i as i64 * interval_ms, value))
        .collect()
}

pub(crate) fn values_of(series: &[TimeSeriesPoint]) -> Vec<f64> {
    series.iter().map(|p| p.value).collect()
}
