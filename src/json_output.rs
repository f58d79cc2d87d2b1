//! JSON output format for analysis results

use crate::profiler::PerformanceResult;
use crate::stats::OutlierMethod;
use crate::trend::{ChangePoint, Forecast, TrendLine};
use serde::{Deserialize, Serialize};

/// Smoothing technique applied to a sample sequence
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum JsonSmoothing {
    MovingAverage { window_size: usize },
    Exponential { alpha: f64 },
}

/// One analysis payload, tagged by `kind`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum JsonAnalysis {
    Summary {
        results: Vec<PerformanceResult>,
    },
    Smoothing {
        smoothing: JsonSmoothing,
        values: Vec<f64>,
    },
    Outliers {
        method: OutlierMethod,
        flags: Vec<bool>,
        outlier_indices: Vec<usize>,
    },
    Trend {
        trend: TrendLine,
    },
    Forecast {
        horizon_ms: i64,
        forecast: Forecast,
    },
    ChangePoint {
        min_segment_size: usize,
        change_point: Option<ChangePoint>,
    },
}

impl JsonAnalysis {
    /// Outlier payload with the indices of flagged samples precomputed
    pub fn outliers(method: OutlierMethod, flags: Vec<bool>) -> Self {
        let outlier_indices = flags
            .iter()
            .enumerate()
            .filter_map(|(i, &flagged)| flagged.then_some(i))
            .collect();
        JsonAnalysis::Outliers {
            method,
            flags,
            outlier_indices,
        }
    }
}

/// Versioned envelope around one analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonOutput {
    pub version: String,
    pub format: String,
    pub analysis: JsonAnalysis,
}

impl JsonOutput {
    pub fn new(analysis: JsonAnalysis) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            format: "rendimiento-json-v1".to_string(),
            analysis,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
