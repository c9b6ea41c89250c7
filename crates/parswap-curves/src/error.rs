//! Error types for curve operations.

use parswap_core::CoreError;
use parswap_math::MathError;
use thiserror::Error;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Error types for curve construction, queries and calibration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// A discount factor or rate was requested for a negative time.
    #[error("Negative time {time:.6} is not allowed")]
    NegativeTime {
        /// The requested time in years.
        time: f64,
    },

    /// A forward rate was requested with `t1 >= t2`.
    #[error("Invalid forward interval: t1 = {t1:.6} must be before t2 = {t2:.6}")]
    InvalidForwardInterval {
        /// Start of the interval.
        t1: f64,
        /// End of the interval.
        t2: f64,
    },

    /// A tenor solve failed to converge.
    #[error(
        "Calibration failed at {tenor}Y after {iterations} iterations (residual: {residual:.2e}): {message}"
    )]
    CalibrationFailure {
        /// Tenor in years that failed.
        tenor: u32,
        /// Number of iterations attempted.
        iterations: u32,
        /// Final residual value.
        residual: f64,
        /// Description of failure.
        message: String,
    },

    /// Not enough knots for the interpolation method.
    #[error("Insufficient points: need at least {required}, got {got}")]
    InsufficientPoints {
        /// Minimum required points.
        required: usize,
        /// Actual number of points provided.
        got: usize,
    },

    /// Knot times are not strictly increasing.
    #[error("Non-monotonic tenors at index {index}: {prev:.4} >= {current:.4}")]
    NonMonotonicTenors {
        /// Index where monotonicity violation occurred.
        index: usize,
        /// Previous tenor value.
        prev: f64,
        /// Current tenor value.
        current: f64,
    },

    /// Invalid market quotes.
    #[error("Invalid quotes: {reason}")]
    InvalidQuotes {
        /// Description of the problem.
        reason: String,
    },

    /// Invalid value (NaN, Inf, or domain error).
    #[error("Invalid value: {reason}")]
    InvalidValue {
        /// Description of why value is invalid.
        reason: String,
    },

    /// The bootstrapped curve failed to reprice its inputs.
    #[error("Repricing failed for {failed} of {total} quotes (max error: {max_error:.2e})")]
    RepricingFailed {
        /// Number of quotes outside tolerance.
        failed: usize,
        /// Number of quotes checked.
        total: usize,
        /// Largest absolute par-rate error.
        max_error: f64,
    },

    /// Mathematical error.
    #[error("Math error: {0}")]
    Math(MathError),

    /// Core library error.
    #[error("Core error: {0}")]
    Core(#[from] CoreError),
}

impl CurveError {
    /// Creates a calibration failure error.
    #[must_use]
    pub fn calibration_failed(
        tenor: u32,
        iterations: u32,
        residual: f64,
        message: impl Into<String>,
    ) -> Self {
        Self::CalibrationFailure {
            tenor,
            iterations,
            residual,
            message: message.into(),
        }
    }

    /// Creates an insufficient points error.
    #[must_use]
    pub fn insufficient_points(required: usize, got: usize) -> Self {
        Self::InsufficientPoints { required, got }
    }

    /// Creates a non-monotonic tenors error.
    #[must_use]
    pub fn non_monotonic_tenors(index: usize, prev: f64, current: f64) -> Self {
        Self::NonMonotonicTenors {
            index,
            prev,
            current,
        }
    }

    /// Creates an invalid quotes error.
    #[must_use]
    pub fn invalid_quotes(reason: impl Into<String>) -> Self {
        Self::InvalidQuotes {
            reason: reason.into(),
        }
    }

    /// Creates an invalid value error.
    #[must_use]
    pub fn invalid_value(reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            reason: reason.into(),
        }
    }
}

impl From<MathError> for CurveError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::InsufficientData { required, actual } => {
                Self::insufficient_points(required, actual)
            }
            other => Self::Math(other),
        }
    }
}
