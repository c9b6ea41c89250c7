//! Interpolation methods for zero-rate curves.
//!
//! # Available Methods
//!
//! - [`LinearInterpolator`]: piecewise linear, C0
//! - [`CubicSpline`]: natural cubic spline, C2, zero curvature at both ends
//!
//! Both interpolate in the value being stored (zero rates here) and can be
//! switched to flat extrapolation, clamping queries outside the knot range to
//! the boundary value.
//!
//! | Method | Smoothness | Minimum knots | Forward rates |
//! |--------|------------|---------------|---------------|
//! | Linear | C0 | 2 | Piecewise, kinked at knots |
//! | Cubic Spline | C2 | 3 | Smooth, may overshoot |

mod cubic_spline;
mod linear;

pub use cubic_spline::{CubicSpline, SplineSegment};
pub use linear::LinearInterpolator;

use crate::error::{MathError, MathResult};

/// Trait for interpolation methods.
pub trait Interpolator: Send + Sync {
    /// Returns the interpolated value at x.
    fn interpolate(&self, x: f64) -> MathResult<f64>;

    /// Returns the first derivative at x.
    ///
    /// Zero in the flat-extrapolated region.
    fn derivative(&self, x: f64) -> MathResult<f64>;

    /// Returns true if (flat) extrapolation is allowed.
    fn allows_extrapolation(&self) -> bool {
        false
    }

    /// Returns the minimum x value in the data.
    fn min_x(&self) -> f64;

    /// Returns the maximum x value in the data.
    fn max_x(&self) -> f64;
}

/// Validates knot vectors shared by every interpolator.
pub(crate) fn validate_knots(xs: &[f64], ys: &[f64], required: usize) -> MathResult<()> {
    if xs.len() < required {
        return Err(MathError::insufficient_data(required, xs.len()));
    }
    if xs.len() != ys.len() {
        return Err(MathError::invalid_input(format!(
            "xs and ys must have same length: {} vs {}",
            xs.len(),
            ys.len()
        )));
    }
    if xs.iter().chain(ys).any(|v| !v.is_finite()) {
        return Err(MathError::invalid_input("knots must be finite"));
    }
    if xs.windows(2).any(|w| w[1] <= w[0]) {
        return Err(MathError::invalid_input(
            "x values must be strictly increasing",
        ));
    }
    Ok(())
}

/// Finds the index i such that xs[i] <= x < xs[i+1], clamped to the last segment.
pub(crate) fn find_segment(xs: &[f64], x: f64) -> usize {
    match xs.binary_search_by(|knot| knot.partial_cmp(&x).unwrap_or(std::cmp::Ordering::Equal)) {
        Ok(i) => i.min(xs.len() - 2),
        Err(i) => (i.saturating_sub(1)).min(xs.len() - 2),
    }
}

/// Outcome of a range check under flat extrapolation.
pub(crate) enum Clamp {
    /// Query lies inside the knot range.
    Inside,
    /// Query lies left of the first knot.
    Below,
    /// Query lies right of the last knot.
    Above,
}

pub(crate) fn clamp(xs: &[f64], x: f64, allow_extrapolation: bool) -> MathResult<Clamp> {
    let min = xs[0];
    let max = xs[xs.len() - 1];
    if x >= min && x <= max {
        return Ok(Clamp::Inside);
    }
    if !allow_extrapolation {
        return Err(MathError::ExtrapolationNotAllowed { x, min, max });
    }
    Ok(if x < min { Clamp::Below } else { Clamp::Above })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_all_interpolators_through_points() {
        let times = vec![0.5, 1.0, 2.0, 3.0, 5.0, 7.0, 10.0];
        let rates = vec![0.0411, 0.0408, 0.0367, 0.0342, 0.0315, 0.0305, 0.0302];

        let linear = LinearInterpolator::new(times.clone(), rates.clone()).unwrap();
        let spline = CubicSpline::new(times.clone(), rates.clone()).unwrap();

        for (t, r) in times.iter().zip(rates.iter()) {
            assert_relative_eq!(linear.interpolate(*t).unwrap(), *r, epsilon = 1e-12);
            assert_relative_eq!(spline.interpolate(*t).unwrap(), *r, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_flat_extrapolation_matches_boundaries() {
        let times = vec![0.5, 1.0, 2.0];
        let rates = vec![0.0411, 0.0408, 0.0367];

        let interpolators: Vec<Box<dyn Interpolator>> = vec![
            Box::new(
                LinearInterpolator::new(times.clone(), rates.clone())
                    .unwrap()
                    .with_flat_extrapolation(),
            ),
            Box::new(
                CubicSpline::new(times.clone(), rates.clone())
                    .unwrap()
                    .with_flat_extrapolation(),
            ),
        ];

        for interp in &interpolators {
            assert!(interp.allows_extrapolation());
            assert_relative_eq!(interp.interpolate(0.1).unwrap(), 0.0411);
            assert_relative_eq!(interp.interpolate(30.0).unwrap(), 0.0367);
            assert_eq!(interp.derivative(30.0).unwrap(), 0.0);
        }
    }

    #[test]
    fn test_validation() {
        assert!(matches!(
            LinearInterpolator::new(vec![1.0], vec![0.04]),
            Err(MathError::InsufficientData { required: 2, actual: 1 })
        ));
        assert!(matches!(
            CubicSpline::new(vec![0.5, 1.0], vec![0.04, 0.041]),
            Err(MathError::InsufficientData { required: 3, actual: 2 })
        ));
        assert!(LinearInterpolator::new(vec![1.0, 1.0], vec![0.04, 0.05]).is_err());
        assert!(LinearInterpolator::new(vec![1.0, 2.0], vec![0.04]).is_err());
        assert!(LinearInterpolator::new(vec![1.0, 2.0], vec![0.04, f64::NAN]).is_err());
    }
}
