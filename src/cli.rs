//! CLI argument parsing for rendimiento

use crate::stats::OutlierMethod;
use crate::trend::DEFAULT_MIN_SEGMENT_SIZE;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for analysis results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "rendimiento")]
#[command(version)]
#[command(about = "Statistical measurement and trend analysis for performance budgets", long_about = None)]
pub struct Cli {
    /// Output format (text or json)
    #[arg(long = "format", value_enum, default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Enable debug tracing output to stderr
    #[arg(long = "debug", global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Input file argument shared by every subcommand
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// JSON input file, or '-' for stdin
    #[arg(value_name = "FILE")]
    pub input: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Descriptive statistics for a JSON array of samples (ms)
    Summarize {
        #[command(flatten)]
        input: InputArgs,

        /// Confidence level for the mean's interval
        #[arg(long = "confidence-level", value_name = "LEVEL", default_value = "0.95")]
        confidence_level: f64,

        /// Remove IQR outliers before computing statistics
        #[arg(long = "filter-outliers")]
        filter_outliers: bool,
    },

    /// Moving average (--window) or exponential moving average (--alpha)
    Smooth {
        #[command(flatten)]
        input: InputArgs,

        /// Trailing window size for the simple moving average
        #[arg(long = "window", value_name = "N", conflicts_with = "alpha", required_unless_present = "alpha")]
        window: Option<usize>,

        /// Smoothing factor in (0, 1) for the exponential moving average
        #[arg(long = "alpha", value_name = "ALPHA")]
        alpha: Option<f64>,
    },

    /// Flag outliers in a JSON array of samples
    Outliers {
        #[command(flatten)]
        input: InputArgs,

        /// Detection rule
        #[arg(long = "method", value_enum, default_value = "iqr")]
        method: OutlierMethod,
    },

    /// Fit a least-squares trend to a JSON array of {timestamp, value}
    Trend {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Extrapolate the trend past the last timestamp
    Forecast {
        #[command(flatten)]
        input: InputArgs,

        /// Milliseconds past the last timestamp
        #[arg(long = "horizon", value_name = "MS", allow_negative_numbers = true)]
        horizon: i64,
    },

    /// Detect a level shift in a JSON array of {timestamp, value}
    ChangePoint {
        #[command(flatten)]
        input: InputArgs,

        /// Minimum points on each side of the split
        #[arg(long = "min-segment-size", value_name = "N", default_value_t = DEFAULT_MIN_SEGMENT_SIZE)]
        min_segment_size: usize,
    },
}
