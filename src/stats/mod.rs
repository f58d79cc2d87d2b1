// Shared statistical primitives for the profiler and the trend analyzer
//
// Both components reduce sample sets with the same percentile, spread and
// outlier rules, so those rules live here once:
// - descriptive: mean, sample standard deviation (N-1), interpolated percentile
// - distribution: Student-t critical values and confidence intervals
// - outliers: IQR fences and z-score classification

mod descriptive;
mod distribution;
mod outliers;

pub use descriptive::{calculate_percentile, max, mean, min, sample_stddev, sample_variance};
pub use distribution::{calculate_confidence_interval, normal_quantile, t_critical_value};
pub use outliers::{detect_outliers, iqr_fences, OutlierMethod, IQR_MULTIPLIER, Z_SCORE_THRESHOLD};
