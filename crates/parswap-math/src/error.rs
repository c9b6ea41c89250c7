//! Numerical error types.

use thiserror::Error;

/// Result alias for interpolation, linear algebra and root finding.
pub type MathResult<T> = Result<T, MathError>;

/// Failures of the numerical routines.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// A root finder ran out of iterations or hit a non-finite value.
    #[error("No convergence after {iterations} iterations (residual: {residual:.2e})")]
    ConvergenceFailed {
        /// Iterations performed.
        iterations: u32,
        /// Objective value at the last iterate.
        residual: f64,
    },

    /// The objective does not change sign over the bracket.
    #[error("Root not bracketed: f({a}) = {fa:.2e}, f({b}) = {fb:.2e}")]
    InvalidBracket {
        /// Left end.
        a: f64,
        /// Right end.
        b: f64,
        /// Objective at `a`.
        fa: f64,
        /// Objective at `b`.
        fb: f64,
    },

    /// Newton step undefined because the slope vanished.
    #[error("Flat objective at x = {x}: derivative {derivative:.2e}")]
    ZeroDerivative {
        /// Iterate where the slope vanished.
        x: f64,
        /// The slope.
        derivative: f64,
    },

    /// A tridiagonal pivot vanished.
    #[error("Singular tridiagonal system")]
    SingularMatrix,

    /// Query outside the knots of an interpolator without extrapolation.
    #[error("{x} is outside the knot range [{min}, {max}]")]
    ExtrapolationNotAllowed {
        /// Query point.
        x: f64,
        /// First knot.
        min: f64,
        /// Last knot.
        max: f64,
    },

    /// Too few knots for the interpolation scheme.
    #[error("Insufficient data: need at least {required}, got {actual}")]
    InsufficientData {
        /// Knots the scheme needs.
        required: usize,
        /// Knots supplied.
        actual: usize,
    },

    /// Malformed input such as unsorted or non-finite knots.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// What was wrong.
        reason: String,
    },
}

impl MathError {
    /// Non-convergence after `iterations` with the last residual.
    #[must_use]
    pub fn convergence_failed(iterations: u32, residual: f64) -> Self {
        Self::ConvergenceFailed {
            iterations,
            residual,
        }
    }

    /// Malformed input.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Too few knots.
    #[must_use]
    pub fn insufficient_data(required: usize, actual: usize) -> Self {
        Self::InsufficientData { required, actual }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MathError::convergence_failed(100, 1e-6);
        assert!(err.to_string().contains("100 iterations"));

        let err = MathError::insufficient_data(3, 2);
        assert_eq!(err.to_string(), "Insufficient data: need at least 3, got 2");

        let err = MathError::ZeroDerivative {
            x: 0.9,
            derivative: 0.0,
        };
        assert!(err.to_string().starts_with("Flat objective at x = 0.9"));
    }
}
