//! Desk error types.

use std::fmt;

use parswap_core::CoreError;
use parswap_curves::CurveError;
use parswap_pricing::PricingError;
use thiserror::Error;

/// Desk operation result type.
pub type DeskResult<T> = Result<T, DeskError>;

/// Errors raised by the desk session.
#[derive(Debug, Error)]
pub enum DeskError {
    /// The configuration failed validation.
    #[error("invalid configuration: {}", join(.0))]
    Validation(Vec<ValidationError>),

    /// Configuration JSON could not be read or written.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Curve construction or bootstrap failed.
    #[error(transparent)]
    Curve(#[from] CurveError),

    /// Valuation or risk failed.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// Date arithmetic failed.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// A single validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Field that failed validation.
    pub field: String,
    /// Validation error message.
    pub message: String,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
