use anyhow::{Context, Result};
use clap::Parser;
use rendimiento::cli::{Cli, Command, InputArgs, OutputFormat};
use rendimiento::json_output::{JsonAnalysis, JsonOutput, JsonSmoothing};
use rendimiento::profiler::{generate_report, Profiler, ProfilerConfig};
use rendimiento::{stats, trend};
use serde::de::DeserializeOwned;
use std::io::Read;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Read and deserialize JSON from a file path, or stdin for "-"
fn read_input<T: DeserializeOwned>(input: &InputArgs) -> Result<T> {
    let path: &Path = &input.input;
    let raw = if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read input from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display()))?
    };

    serde_json::from_str(&raw).with_context(|| format!("Invalid JSON in {}", path.display()))
}

fn format_values(values: &[f64]) -> String {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| format!("{:>6}  {:.3}\n", i, v))
        .collect()
}

/// Run one subcommand, returning (text rendering, JSON payload)
fn analyze(command: Command) -> Result<(String, JsonAnalysis)> {
    match command {
        Command::Summarize {
            input,
            confidence_level,
            filter_outliers,
        } => {
            let samples: Vec<f64> = read_input(&input)?;
            let profiler = Profiler::new(ProfilerConfig {
                confidence_level,
                filter_outliers,
                ..Default::default()
            })?;
            let iterations = samples.len();
            let result = profiler
                .summarize(samples, iterations)
                .context("Failed to summarize samples")?;
            let results = vec![result];
            Ok((generate_report(&results), JsonAnalysis::Summary { results }))
        }
        Command::Smooth {
            input,
            window,
            alpha,
        } => {
            let samples: Vec<f64> = read_input(&input)?;
            let (smoothing, values) = match (window, alpha) {
                (Some(window_size), _) => (
                    JsonSmoothing::MovingAverage { window_size },
                    trend::calculate_moving_average(&samples, window_size)?,
                ),
                (None, Some(alpha)) => (
                    JsonSmoothing::Exponential { alpha },
                    trend::calculate_exponential_moving_average(&samples, alpha)?,
                ),
                (None, None) => anyhow::bail!("Must specify either --window or --alpha"),
            };
            Ok((format_values(&values), JsonAnalysis::Smoothing { smoothing, values }))
        }
        Command::Outliers { input, method } => {
            let samples: Vec<f64> = read_input(&input)?;
            let flags = stats::detect_outliers(&samples, method)?;
            let mut text = format!(
                "Outliers ({}): {} of {} samples\n",
                method,
                flags.iter().filter(|&&f| f).count(),
                samples.len()
            );
            for (i, (value, _)) in samples
                .iter()
                .zip(&flags)
                .enumerate()
                .filter(|(_, (_, flagged))| **flagged)
            {
                text.push_str(&format!("  [{}] {:.3}\n", i, value));
            }
            Ok((text, JsonAnalysis::outliers(method, flags)))
        }
        Command::Trend { input } => {
            let series: Vec<trend::TimeSeriesPoint> = read_input(&input)?;
            let line = trend::fit_trend_line(&series)?;
            let text = format!(
                "Trend Line\n  Slope: {:.6e} per ms\n  Intercept: {:.3}\n  R-squared: {:.4}\n",
                line.slope, line.intercept, line.r_squared
            );
            Ok((text, JsonAnalysis::Trend { trend: line }))
        }
        Command::Forecast { input, horizon } => {
            let series: Vec<trend::TimeSeriesPoint> = read_input(&input)?;
            let forecast = trend::forecast_value(&series, horizon)?;
            let text = format!(
                "Forecast (+{}ms)\n  Value: {:.3}\n  {:.0}% Band: [{:.3}, {:.3}]\n",
                horizon,
                forecast.value,
                forecast.confidence * 100.0,
                forecast.lower_bound,
                forecast.upper_bound
            );
            Ok((
                text,
                JsonAnalysis::Forecast {
                    horizon_ms: horizon,
                    forecast,
                },
            ))
        }
        Command::ChangePoint {
            input,
            min_segment_size,
        } => {
            let series: Vec<trend::TimeSeriesPoint> = read_input(&input)?;
            let change_point = trend::detect_change_point(&series, min_segment_size)?;
            let text = match &change_point {
                Some(cp) => format!(
                    "Change point at index {} (timestamp {})\n  Mean before: {:.3}\n  Mean after: {:.3}\n  Effect size: {:.2}\n",
                    cp.index, cp.timestamp, cp.mean_before, cp.mean_after, cp.score
                ),
                None => "No change point detected\n".to_string(),
            };
            Ok((
                text,
                JsonAnalysis::ChangePoint {
                    min_segment_size,
                    change_point,
                },
            ))
        }
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Initialize tracing if --debug flag is set
    init_tracing(args.debug);

    let (text, analysis) = analyze(args.command)?;
    match args.format {
        OutputFormat::Text => print!("{}", text),
        OutputFormat::Json => {
            let json = JsonOutput::new(analysis)
                .to_json()
                .context("Failed to serialize JSON output")?;
            println!("{}", json);
        }
    }

    Ok(())
}
