//! Interpolation methods for zero curves.

use serde::{Deserialize, Serialize};

/// Interpolation applied to the zero-rate knots of a curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum InterpolationMethod {
    /// Linear interpolation on zero rates.
    #[default]
    Linear,

    /// Natural cubic spline on zero rates.
    CubicSpline,
}

impl InterpolationMethod {
    /// Minimum number of knots the method needs.
    #[must_use]
    pub fn min_points(&self) -> usize {
        match self {
            Self::Linear => 2,
            Self::CubicSpline => 3,
        }
    }
}

impl std::fmt::Display for InterpolationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Linear => "Linear",
            Self::CubicSpline => "Cubic Spline",
        };
        write!(f, "{name}")
    }
}
