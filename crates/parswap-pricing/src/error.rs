//! Error types for the pricing framework.

use parswap_core::{CoreError, Date};
use parswap_curves::CurveError;
use thiserror::Error;

/// Result type for pricing operations.
pub type PricingResult<T> = Result<T, PricingError>;

/// Errors that can occur during swap valuation and risk.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PricingError {
    /// The swap definition is invalid.
    #[error("invalid swap: {reason}")]
    InvalidSwap {
        /// Description of the problem.
        reason: String,
    },

    /// The swap does not start on the curve anchor date.
    #[error("swap trade date {trade_date} differs from curve date {curve_date}")]
    CurveDateMismatch {
        /// Trade date of the swap.
        trade_date: Date,
        /// Reference date of the curves.
        curve_date: Date,
    },

    /// Valuation requested before the curve anchor date.
    #[error("valuation date {valuation} is before curve date {curve_date}")]
    ValuationBeforeCurve {
        /// Requested valuation date.
        valuation: Date,
        /// Reference date of the curves.
        curve_date: Date,
    },

    /// Invalid risk or horizon input.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Curve construction or query failed.
    #[error("curve error: {0}")]
    Curve(#[from] CurveError),

    /// Date or schedule arithmetic failed.
    #[error("core error: {0}")]
    Core(#[from] CoreError),
}

impl PricingError {
    /// Creates an invalid swap error.
    pub fn invalid_swap(reason: impl Into<String>) -> Self {
        Self::InvalidSwap {
            reason: reason.into(),
        }
    }

    /// Creates an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
