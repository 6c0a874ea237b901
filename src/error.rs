//! Error types for resampling operations.

/// Result type for resampling operations.
pub type Result<T> = std::result::Result<T, ResampleError>;

/// Errors that can occur while estimating correlation statistics.
///
/// All of these are input or configuration errors. The computation is local
/// and deterministic, so none of them are transient.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ResampleError {
    /// Paired sequences have different lengths.
    #[error("Length mismatch: expected {expected} values, got {got}")]
    LengthMismatch {
        /// Length of `y_true`.
        expected: usize,
        /// Length of the offending prediction sequence.
        got: usize,
    },

    /// Too few observations to define a correlation.
    #[error("Insufficient data: need at least {required} observations, got {got}")]
    InsufficientData {
        /// Minimum number of observations.
        required: usize,
        /// Number of observations supplied.
        got: usize,
    },

    /// Requested number of resamples is zero.
    #[error("Invalid sample count {got}: at least one resample is required")]
    InvalidSampleCount {
        /// The rejected sample count.
        got: usize,
    },

    /// Confidence level outside the open interval (0, 1).
    #[error("Invalid confidence level {value}: must be in (0, 1)")]
    InvalidConfidenceLevel {
        /// The rejected confidence level.
        value: f64,
    },

    /// Correlation is undefined because an operand has zero variance.
    #[error("Undefined correlation: {context}")]
    UndefinedCorrelation {
        /// Where the undefined value arose.
        context: String,
    },
}

impl ResampleError {
    pub(crate) fn undefined(context: impl Into<String>) -> Self {
        Self::UndefinedCorrelation {
            context: context.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ResampleError::LengthMismatch {
            expected: 5,
            got: 4,
        };
        assert!(err.to_string().contains("expected 5"));
        assert!(err.to_string().contains("got 4"));

        let err = ResampleError::InvalidConfidenceLevel { value: 1.5 };
        assert!(err.to_string().contains("1.5"));
        assert!(err.to_string().contains("(0, 1)"));

        let err = ResampleError::undefined("point estimate");
        assert_eq!(err.to_string(), "Undefined correlation: point estimate");
    }
}
