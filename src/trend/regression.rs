//! Ordinary least-squares trend lines over time series

use crate::error::{Result, StatsError};
use crate::trend::series::TimeSeriesPoint;
use serde::{Deserialize, Serialize};

/// Best-fit line `value = slope * timestamp + intercept`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendLine {
    /// Change in value per millisecond
    pub slope: f64,
    pub intercept: f64,
    /// Coefficient of determination, in [0, 1]
    pub r_squared: f64,
}

impl TrendLine {
    /// Value of the line at `timestamp`
    pub fn predict(&self, timestamp: i64) -> f64 {
        self.slope * timestamp as f64 + self.intercept
    }
}

/// Intermediate quantities of a least-squares fit, kept in centred form
#[derive(Debug, Clone, Copy)]
pub(crate) struct LinearFit {
    pub trend: TrendLine,
    pub n: usize,
    /// First timestamp; offsets are taken relative to it
    t_origin: i64,
    /// Mean timestamp, as an offset from `t_origin`
    t_mean_offset: f64,
    pub value_mean: f64,
    /// Σ(t - t̄)²
    pub sxx: f64,
    /// Residual sum of squares
    pub ss_res: f64,
}

impl LinearFit {
    /// Distance of `timestamp` from the timestamp mean
    pub fn centred(&self, timestamp: i64) -> f64 {
        timestamp.saturating_sub(self.t_origin) as f64 - self.t_mean_offset
    }

    /// Line value at `timestamp`, evaluated around the mean for precision
    pub fn predict(&self, timestamp: i64) -> f64 {
        self.value_mean + self.trend.slope * self.centred(timestamp)
    }
}

/// Least-squares fit over a series with at least one point
///
/// Timestamps are shifted by the first timestamp before accumulation so
/// epoch-millisecond inputs do not lose precision.
pub(crate) fn least_squares(series: &[TimeSeriesPoint]) -> LinearFit {
    let n = series.len();
    let nf = n as f64;
    let t_origin = series[0].timestamp;
    let offset = |p: &TimeSeriesPoint| p.timestamp.saturating_sub(t_origin) as f64;

    let t_mean_offset = series.iter().map(offset).sum::<f64>() / nf;
    let value_mean = series.iter().map(|p| p.value).sum::<f64>() / nf;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    let mut ss_tot = 0.0;
    for p in series {
        let dt = offset(p) - t_mean_offset;
        let dv = p.value - value_mean;
        sxx += dt * dt;
        sxy += dt * dv;
        ss_tot += dv * dv;
    }

    // All timestamps equal: no time axis to regress on
    let slope = if sxx > 0.0 { sxy / sxx } else { 0.0 };

    let ss_res: f64 = series
        .iter()
        .map(|p| {
            let fitted = value_mean + slope * (offset(p) - t_mean_offset);
            (p.value - fitted).powi(2)
        })
        .sum();

    let r_squared = if ss_tot == 0.0 || (n == 2 && sxx > 0.0) {
        1.0
    } else {
        (1.0 - ss_res / ss_tot).clamp(0.0, 1.0)
    };

    let t_mean = t_origin as f64 + t_mean_offset;
    let intercept = value_mean - slope * t_mean;

    LinearFit {
        trend: TrendLine {
            slope,
            intercept,
            r_squared,
        },
        n,
        t_origin,
        t_mean_offset,
        value_mean,
        sxx,
        ss_res,
    }
}

/// Fit `value` against `timestamp` by ordinary least squares
///
/// A constant series, or any two points with distinct timestamps, is a
/// perfect fit (`r_squared = 1`). When every timestamp is equal the slope is
/// 0 and the intercept is the value mean.
///
/// # Example
/// ```
/// use rendimiento::trend::{fit_trend_line, series_from_values};
///
/// let series = series_from_values(&[10.0, 12.0, 14.0, 16.0], 1);
/// let trend = fit_trend_line(&series).unwrap();
/// assert!((trend.slope - 2.0).abs() < 1e-9);
/// assert!((trend.r_squared - 1.0).abs() < 1e-9);
/// ```
pub fn fit_trend_line(series: &[TimeSeriesPoint]) -> Result<TrendLine> {
    StatsError::require(2, series.len())?;
    Ok(least_squares(series).trend)
}
