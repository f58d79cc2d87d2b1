//! Rendimiento - Statistical measurement and trend analysis for performance budgets
//!
//! This library provides sampling-based measurement of sync and async
//! operations, descriptive statistics with confidence intervals, outlier
//! detection, and trend analysis (smoothing, regression, forecasting and
//! change-point detection) over collected metric histories.

pub mod cli;
pub mod error;
pub mod json_output;
pub mod profiler;
pub mod stats;
pub mod trend;

pub use error::{Result, StatsError};
