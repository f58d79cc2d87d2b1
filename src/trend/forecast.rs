//! Trend extrapolation with a prediction interval

use crate::error::{Result, StatsError};
use crate::stats::t_critical_value;
use crate::trend::regression::least_squares;
use crate::trend::series::TimeSeriesPoint;
use serde::{Deserialize, Serialize};

/// Coverage of the forecast prediction band
pub const FORECAST_CONFIDENCE: f64 = 0.95;

/// Extrapolated value with its prediction band
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub value: f64,
    pub confidence: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
}

/// Forecast the series value `horizon_ms` after its last timestamp
///
/// The band is the OLS prediction interval
/// `value ± t(0.95, n-2) * s * sqrt(1 + 1/n + (x0 - t̄)² / Sxx)`, where `s` is
/// the residual standard error. It widens as `x0` moves away from the
/// observed time range. With two points there are no residual degrees of
/// freedom and the band collapses onto the value.
pub fn forecast_value(series: &[TimeSeriesPoint], horizon_ms: i64) -> Result<Forecast> {
    StatsError::require(2, series.len())?;
    if horizon_ms < 0 {
        return Err(StatsError::invalid(format!(
            "forecast horizon must be non-negative, got {}ms",
            horizon_ms
        )));
    }

    let fit = least_squares(series);
    let last = series[series.len() - 1].timestamp;
    let target = last.saturating_add(horizon_ms);
    let value = fit.predict(target);

    let half_width = if fit.n > 2 {
        let df = fit.n - 2;
        let residual_se = (fit.ss_res / df as f64).sqrt();
        let leverage = if fit.sxx > 0.0 {
            fit.centred(target).powi(2) / fit.sxx
        } else {
            0.0
        };
        let t = t_critical_value(FORECAST_CONFIDENCE, df)?;
        t * residual_se * (1.0 + 1.0 / fit.n as f64 + leverage).sqrt()
    } else {
        0.0
    };

    Ok(Forecast {
        value,
        confidence: FORECAST_CONFIDENCE,
        lower_bound: value - half_width,
        upper_bound: value + half_width,
    })
}
