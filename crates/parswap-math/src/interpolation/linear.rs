//! Linear interpolation.

use crate::error::MathResult;
use crate::interpolation::{clamp, find_segment, validate_knots, Clamp, Interpolator};

/// Linear interpolation between data points.
///
/// # Example
///
/// ```rust
/// use parswap_math::interpolation::{Interpolator, LinearInterpolator};
///
/// let interp = LinearInterpolator::new(vec![1.0, 2.0], vec![0.0408, 0.0367])
///     .unwrap()
///     .with_flat_extrapolation();
///
/// assert!((interp.interpolate(1.5).unwrap() - 0.03875).abs() < 1e-12);
/// assert!((interp.interpolate(0.25).unwrap() - 0.0408).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct LinearInterpolator {
    xs: Vec<f64>,
    ys: Vec<f64>,
    allow_extrapolation: bool,
}

impl LinearInterpolator {
    /// Creates a new linear interpolator.
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than 2 points, if lengths differ,
    /// or if xs are not strictly increasing.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        validate_knots(&xs, &ys, 2)?;

        Ok(Self {
            xs,
            ys,
            allow_extrapolation: false,
        })
    }

    /// Clamps queries outside the data range to the boundary value.
    #[must_use]
    pub fn with_flat_extrapolation(mut self) -> Self {
        self.allow_extrapolation = true;
        self
    }
}

impl Interpolator for LinearInterpolator {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        match clamp(&self.xs, x, self.allow_extrapolation)? {
            Clamp::Below => return Ok(self.ys[0]),
            Clamp::Above => return Ok(self.ys[self.ys.len() - 1]),
            Clamp::Inside => {}
        }

        let i = find_segment(&self.xs, x);

        let x0 = self.xs[i];
        let x1 = self.xs[i + 1];
        let y0 = self.ys[i];
        let y1 = self.ys[i + 1];

        Ok(y0 + (y1 - y0) * (x - x0) / (x1 - x0))
    }

    fn derivative(&self, x: f64) -> MathResult<f64> {
        if !matches!(clamp(&self.xs, x, self.allow_extrapolation)?, Clamp::Inside) {
            return Ok(0.0);
        }

        let i = find_segment(&self.xs, x);
        Ok((self.ys[i + 1] - self.ys[i]) / (self.xs[i + 1] - self.xs[i]))
    }

    fn allows_extrapolation(&self) -> bool {
        self.allow_extrapolation
    }

    fn min_x(&self) -> f64 {
        self.xs[0]
    }

    fn max_x(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MathError;
    use approx::assert_relative_eq;

    #[test]
    fn test_linear_midpoints() {
        let interp =
            LinearInterpolator::new(vec![0.5, 1.0, 2.0], vec![0.0411, 0.0408, 0.0367]).unwrap();

        assert_relative_eq!(interp.interpolate(0.75).unwrap(), 0.04095, epsilon = 1e-12);
        assert_relative_eq!(interp.interpolate(1.5).unwrap(), 0.03875, epsilon = 1e-12);
    }

    #[test]
    fn test_linear_derivative() {
        let interp = LinearInterpolator::new(vec![0.0, 1.0, 2.0], vec![0.0, 2.0, 3.0]).unwrap();

        assert_relative_eq!(interp.derivative(0.5).unwrap(), 2.0);
        assert_relative_eq!(interp.derivative(1.5).unwrap(), 1.0);
    }

    #[test]
    fn test_extrapolation_rejected_by_default() {
        let interp = LinearInterpolator::new(vec![1.0, 2.0], vec![1.0, 2.0]).unwrap();

        assert!(!interp.allows_extrapolation());
        assert!(matches!(
            interp.interpolate(3.0),
            Err(MathError::ExtrapolationNotAllowed { .. })
        ));
        assert!(interp.derivative(0.0).is_err());
    }
}
