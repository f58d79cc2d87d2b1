//! Simple and exponential moving averages

use crate::error::{Result, StatsError};

/// Trailing moving average, same length as the input
///
/// The first `window_size - 1` outputs average the expanding prefix
/// `samples[0..=i]`; from there on each output averages the trailing
/// `window_size` samples ending at `i`.
///
/// # Example
/// ```
/// use rendimiento::trend::calculate_moving_average;
///
/// let smoothed = calculate_moving_average(&[1.0, 2.0, 3.0, 4.0], 2).unwrap();
/// assert_eq!(smoothed, vec![1.0, 1.5, 2.5, 3.5]);
/// ```
pub fn calculate_moving_average(samples: &[f64], window_size: usize) -> Result<Vec<f64>> {
    if window_size == 0 {
        return Err(StatsError::invalid("window size must be at least 1"));
    }
    if window_size > samples.len() {
        return Err(StatsError::invalid(format!(
            "window size {} exceeds available data ({} samples)",
            window_size,
            samples.len()
        )));
    }

    let averages = (0..samples.len())
        .map(|i| {
            let start = (i + 1).saturating_sub(window_size);
            let window = &samples[start..=i];
            window.iter().sum::<f64>() / window.len() as f64
        })
        .collect();

    Ok(averages)
}

/// Exponential moving average with smoothing factor `alpha`
///
/// `ema[0] = samples[0]`, then `ema[i] = alpha * samples[i] + (1 - alpha) * ema[i-1]`.
pub fn calculate_exponential_moving_average(samples: &[f64], alpha: f64) -> Result<Vec<f64>> {
    if !(alpha > 0.0 && alpha < 1.0) {
        return Err(StatsError::invalid(format!(
            "alpha must be in (0, 1), got {}",
            alpha
        )));
    }

    let mut ema = Vec::with_capacity(samples.len());
    let mut iter = samples.iter();
    if let Some(&first) = iter.next() {
        ema.push(first);
        let mut previous = first;
        for &x in iter {
            previous = alpha * x + (1.0 - alpha) * previous;
            ema.push(previous);
        }
    }

    Ok(ema)
}
