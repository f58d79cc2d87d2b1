// Trend analysis over collected metric sequences
//
// Operates on samples that were already collected, either plain value
// sequences or time-stamped series:
// - smoothing: simple (trailing, expanding prefix) and exponential moving averages
// - regression: OLS trend line with R²
// - forecast: trend extrapolation with an OLS prediction band
// - change_point: dominant level shift between two stable regimes
//
// Outlier flags come from the shared stats layer and are re-exported here so
// trend callers have one import surface.

mod change_point;
mod forecast;
mod regression;
mod series;
mod smoothing;

pub use change_point::{
    detect_change_point, ChangePoint, CHANGE_POINT_EFFECT_SIZE, DEFAULT_MIN_SEGMENT_SIZE,
    STEP_MODEL_RESIDUAL_RATIO,
};
pub use forecast::{forecast_value, Forecast, FORECAST_CONFIDENCE};
pub use regression::{fit_trend_line, TrendLine};
pub use series::{series_from_values, TimeSeriesPoint};
pub use smoothing::{calculate_exponential_moving_average, calculate_moving_average};

pub use crate::stats::{detect_outliers, OutlierMethod};
