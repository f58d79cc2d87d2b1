//! Human-readable performance report

use crate::profiler::result::PerformanceResult;

const EMPTY_REPORT: &str = "No performance results to report";

/// Format one or more results for console or log display
///
/// Labels and field order are stable; downstream snapshot tests depend on
/// them. `Measurement N` headers appear only when more than one result is
/// given.
///
/// # Example
/// ```
/// use rendimiento::profiler::generate_report;
///
/// assert_eq!(generate_report(&[]), "No performance results to report");
/// ```
pub fn generate_report(results: &[PerformanceResult]) -> String {
    if results.is_empty() {
        return EMPTY_REPORT.to_string();
    }

    let mut report = String::new();
    report.push_str("Performance Report\n");
    report.push_str("==================\n");

    let labelled = results.len() > 1;
    for (i, result) in results.iter().enumerate() {
        if i > 0 {
            report.push('\n');
        }
        if labelled {
            report.push_str(&format!("Measurement {}\n", i + 1));
        }
        push_result(&mut report, result);
    }

    report
}

fn push_result(report: &mut String, result: &PerformanceResult) {
    let (lower, upper) = result.confidence_interval;

    report.push_str(&format!("  Iterations: {}\n", result.iterations));
    report.push_str(&format!("  Mean: {:.3}ms\n", result.mean));
    report.push_str(&format!("  Median: {:.3}ms\n", result.median));
    report.push_str(&format!("  P95: {:.3}ms\n", result.p95));
    report.push_str(&format!("  P99: {:.3}ms\n", result.p99));
    report.push_str(&format!("  Min: {:.3}ms\n", result.min));
    report.push_str(&format!("  Max: {:.3}ms\n", result.max));
    report.push_str(&format!("  Std Dev: {:.3}ms\n", result.stddev));
    report.push_str(&format!(
        "  Confidence Interval: [{:.3}ms, {:.3}ms]\n",
        lower, upper
    ));
    if let Some(removed) = result.outliers_removed {
        report.push_str(&format!("  Outliers Removed: {}\n", removed));
    }
}
