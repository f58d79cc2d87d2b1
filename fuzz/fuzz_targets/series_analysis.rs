#![no_main]

use libfuzzer_sys::fuzz_target;
use rendimiento::stats::{self, OutlierMethod};
use rendimiento::trend::{self, TimeSeriesPoint};

fuzz_target!(|input: (Vec<TimeSeriesPoint>, u8, u32)| {
    let (series, segment, horizon) = input;
    let values: Vec<f64> = series.iter().map(|p| p.value).collect();

    // None of these may panic, whatever the timestamps or values
    let _ = stats::calculate_percentile(&values, 95.0);
    let _ = stats::calculate_confidence_interval(&values, 0.95);
    let _ = stats::detect_outliers(&values, OutlierMethod::Iqr);
    let _ = stats::detect_outliers(&values, OutlierMethod::ZScore);
    let _ = trend::calculate_moving_average(&values, segment as usize);
    let _ = trend::fit_trend_line(&series);
    let _ = trend::forecast_value(&series, horizon as i64);
    let _ = trend::detect_change_point(&series, segment as usize);
});
