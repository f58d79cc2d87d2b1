//! Error taxonomy for measurement and trend analysis
//!
//! Every variant is a validation failure raised before any computation
//! starts. Numeric degenerate cases (zero variance, constant series) are
//! defined results, never errors.

use thiserror::Error;

/// Errors returned by the statistics, profiler and trend modules
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    /// An argument is outside its documented domain
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Insufficient data: need at least {required} samples, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    #[error("Cannot compute statistics on an empty sample set")]
    EmptyInput,
}

pub type Result<T> = std::result::Result<T, StatsError>;

impl StatsError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        StatsError::InvalidArgument(message.into())
    }

    pub(crate) fn require(required: usize, actual: usize) -> Result<()> {
        if actual < required {
            Err(StatsError::InsufficientData { required, actual })
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_message() {
        let err = StatsError::invalid("Iterations must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid argument: Iterations must be positive"
        );
    }

    #[test]
    fn test_require_reports_counts() {
        assert!(StatsError::require(2, 2).is_ok());
        let err = StatsError::require(2, 1).unwrap_err();
        assert_eq!(
            err,
            StatsError::InsufficientData {
                required: 2,
                actual: 1
            }
        );
        assert!(err.to_string().contains("need at least 2 samples, got 1"));
    }
}
