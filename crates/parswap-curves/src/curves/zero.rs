//! Zero-coupon curve on continuously compounded rates.

use parswap_math::interpolation::{CubicSpline, Interpolator, LinearInterpolator};

use crate::error::{CurveError, CurveResult};
use crate::interpolation::InterpolationMethod;

/// Interpolator chosen at construction.
#[derive(Debug, Clone)]
enum Engine {
    Linear(LinearInterpolator),
    Spline(CubicSpline),
}

impl Engine {
    fn build(times: &[f64], rates: &[f64], method: InterpolationMethod) -> CurveResult<Self> {
        let (xs, ys) = (times.to_vec(), rates.to_vec());
        Ok(match method {
            InterpolationMethod::Linear => {
                Self::Linear(LinearInterpolator::new(xs, ys)?.with_flat_extrapolation())
            }
            InterpolationMethod::CubicSpline => {
                Self::Spline(CubicSpline::new(xs, ys)?.with_flat_extrapolation())
            }
        })
    }

    fn as_interpolator(&self) -> &dyn Interpolator {
        match self {
            Self::Linear(i) => i,
            Self::Spline(s) => s,
        }
    }
}

/// A zero-coupon curve.
///
/// Knots are `(time in years, continuously compounded zero rate)` pairs with
/// strictly increasing, non-negative times. Queries outside the knot range
/// take the boundary rate. The curve is immutable: bumped, shifted or
/// re-interpolated curves are new instances.
///
/// # Example
///
/// ```rust
/// use parswap_curves::curves::ZeroCurve;
/// use parswap_curves::interpolation::InterpolationMethod;
///
/// let curve = ZeroCurve::new(
///     vec![(0.5, 0.0411), (1.0, 0.0408), (2.0, 0.0367)],
///     InterpolationMethod::Linear,
/// )
/// .unwrap();
///
/// assert!((curve.zero_rate(1.5).unwrap() - 0.03875).abs() < 1e-12);
/// assert!((curve.discount_factor(2.0).unwrap() - (-0.0367f64 * 2.0).exp()).abs() < 1e-15);
/// ```
#[derive(Debug, Clone)]
pub struct ZeroCurve {
    times: Vec<f64>,
    rates: Vec<f64>,
    method: InterpolationMethod,
    engine: Engine,
}

impl ZeroCurve {
    /// Creates a curve from `(time, zero rate)` knots.
    ///
    /// # Errors
    ///
    /// - `InsufficientPoints` for fewer than 2 knots (linear) or 3 (spline)
    /// - `NonMonotonicTenors` if times are not strictly increasing
    /// - `NegativeTime` / `InvalidValue` for negative or non-finite inputs
    pub fn new(knots: Vec<(f64, f64)>, method: InterpolationMethod) -> CurveResult<Self> {
        let required = method.min_points();
        if knots.len() < required {
            return Err(CurveError::insufficient_points(required, knots.len()));
        }

        for (index, &(t, r)) in knots.iter().enumerate() {
            if !t.is_finite() || !r.is_finite() {
                return Err(CurveError::invalid_value(format!(
                    "knot {index} is not finite: ({t}, {r})"
                )));
            }
            if t < 0.0 {
                return Err(CurveError::NegativeTime { time: t });
            }
            if index > 0 && t <= knots[index - 1].0 {
                return Err(CurveError::non_monotonic_tenors(index, knots[index - 1].0, t));
            }
        }

        let (times, rates): (Vec<f64>, Vec<f64>) = knots.into_iter().unzip();
        let engine = Engine::build(&times, &rates, method)?;

        Ok(Self {
            times,
            rates,
            method,
            engine,
        })
    }

    /// Returns the interpolation method.
    #[must_use]
    pub fn interpolation(&self) -> InterpolationMethod {
        self.method
    }

    /// Knot times in years.
    #[must_use]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Knot zero rates.
    #[must_use]
    pub fn rates(&self) -> &[f64] {
        &self.rates
    }

    /// Knots as `(time, rate)` pairs.
    #[must_use]
    pub fn knots(&self) -> Vec<(f64, f64)> {
        self.times.iter().copied().zip(self.rates.iter().copied()).collect()
    }

    /// Last knot time.
    #[must_use]
    pub fn max_time(&self) -> f64 {
        self.times[self.times.len() - 1]
    }

    /// Interpolated zero rate at `t`.
    ///
    /// # Errors
    ///
    /// Returns `NegativeTime` if `t < 0`.
    pub fn zero_rate(&self, t: f64) -> CurveResult<f64> {
        if t < 0.0 || t.is_nan() {
            return Err(CurveError::NegativeTime { time: t });
        }
        Ok(self.engine.as_interpolator().interpolate(t)?)
    }

    /// Discount factor `exp(-r(t)·t)`.
    ///
    /// # Errors
    ///
    /// Returns `NegativeTime` if `t < 0`.
    pub fn discount_factor(&self, t: f64) -> CurveResult<f64> {
        let r = self.zero_rate(t)?;
        Ok((-r * t).exp())
    }

    /// Simple forward rate over `[t1, t2]`: `(DF(t1)/DF(t2) - 1)/(t2 - t1)`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidForwardInterval` unless `t1 < t2`.
    pub fn forward_rate(&self, t1: f64, t2: f64) -> CurveResult<f64> {
        if t1 >= t2 || t1.is_nan() || t2.is_nan() {
            return Err(CurveError::InvalidForwardInterval { t1, t2 });
        }
        let df1 = self.discount_factor(t1)?;
        let df2 = self.discount_factor(t2)?;
        Ok((df1 / df2 - 1.0) / (t2 - t1))
    }

    /// A new curve with one more knot at `t`, replacing any knot already there.
    pub fn with_point(&self, t: f64, rate: f64) -> CurveResult<Self> {
        let mut knots: Vec<(f64, f64)> = self.knots().into_iter().filter(|k| k.0 != t).collect();
        let at = knots.partition_point(|k| k.0 < t);
        knots.insert(at, (t, rate));
        Self::new(knots, self.method)
    }

    /// The same knots under another interpolation method.
    pub fn with_interpolation(&self, method: InterpolationMethod) -> CurveResult<Self> {
        Self::new(self.knots(), method)
    }

    /// Every knot shifted by `shift` (decimal, 0.0001 = 1bp).
    pub fn shifted(&self, shift: f64) -> CurveResult<Self> {
        Self::new(
            self.knots().into_iter().map(|(t, r)| (t, r + shift)).collect(),
            self.method,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample(method: InterpolationMethod) -> ZeroCurve {
        ZeroCurve::new(
            vec![
                (0.5, 0.0411),
                (1.0, 0.0408091),
                (2.0, 0.03669618),
                (3.0, 0.03419598),
                (5.0, 0.03145586),
                (7.0, 0.03047966),
                (10.0, 0.03021464),
            ],
            method,
        )
        .unwrap()
    }

    #[test]
    fn test_discount_factor_at_knot() {
        let curve = sample(InterpolationMethod::Linear);
        assert_relative_eq!(
            curve.discount_factor(10.0).unwrap(),
            (-0.03021464f64 * 10.0).exp(),
            epsilon = 1e-15
        );
        assert_eq!(curve.discount_factor(0.0).unwrap(), 1.0);
    }

    #[test]
    fn test_flat_extrapolation() {
        let curve = sample(InterpolationMethod::CubicSpline);
        assert_relative_eq!(curve.zero_rate(0.1).unwrap(), 0.0411);
        assert_relative_eq!(curve.zero_rate(30.0).unwrap(), 0.03021464);
    }

    #[test]
    fn test_negative_time_rejected() {
        let curve = sample(InterpolationMethod::Linear);
        assert!(matches!(
            curve.discount_factor(-0.01),
            Err(CurveError::NegativeTime { .. })
        ));
    }

    #[test]
    fn test_forward_rate() {
        let curve = sample(InterpolationMethod::Linear);

        let fwd = curve.forward_rate(1.0, 2.0).unwrap();
        let expected = ((2.0 * 0.03669618 - 0.0408091f64) * 1.0).exp() - 1.0;
        assert_relative_eq!(fwd, expected, epsilon = 1e-14);

        assert!(matches!(
            curve.forward_rate(2.0, 2.0),
            Err(CurveError::InvalidForwardInterval { .. })
        ));
        assert!(curve.forward_rate(3.0, 1.0).is_err());
    }

    #[test]
    fn test_construction_errors() {
        assert!(matches!(
            ZeroCurve::new(vec![(0.5, 0.04)], InterpolationMethod::Linear),
            Err(CurveError::InsufficientPoints { required: 2, got: 1 })
        ));
        assert!(matches!(
            ZeroCurve::new(vec![(0.5, 0.04), (1.0, 0.04)], InterpolationMethod::CubicSpline),
            Err(CurveError::InsufficientPoints { required: 3, got: 2 })
        ));
        assert!(matches!(
            ZeroCurve::new(vec![(1.0, 0.04), (0.5, 0.04)], InterpolationMethod::Linear),
            Err(CurveError::NonMonotonicTenors { index: 1, .. })
        ));
        assert!(matches!(
            ZeroCurve::new(vec![(-1.0, 0.04), (0.5, 0.04)], InterpolationMethod::Linear),
            Err(CurveError::NegativeTime { .. })
        ));
    }

    #[test]
    fn test_with_point_inserts_in_order() {
        let curve = ZeroCurve::new(vec![(0.5, 0.0411), (2.0, 0.037)], InterpolationMethod::Linear)
            .unwrap();

        let extended = curve.with_point(1.0, 0.0408).unwrap();
        assert_eq!(extended.times(), &[0.5, 1.0, 2.0]);

        let replaced = extended.with_point(1.0, 0.05).unwrap();
        assert_eq!(replaced.rates(), &[0.0411, 0.05, 0.037]);
        // The source curve is untouched
        assert_eq!(curve.times().len(), 2);
    }

    #[test]
    fn test_shifted_and_reinterpolated() {
        let curve = sample(InterpolationMethod::Linear);

        let up = curve.shifted(0.0001).unwrap();
        assert_relative_eq!(
            up.zero_rate(4.0).unwrap(),
            curve.zero_rate(4.0).unwrap() + 0.0001,
            epsilon = 1e-15
        );

        let spline = curve.with_interpolation(InterpolationMethod::CubicSpline).unwrap();
        assert_eq!(spline.interpolation(), InterpolationMethod::CubicSpline);
        assert_relative_eq!(spline.zero_rate(5.0).unwrap(), 0.03145586, epsilon = 1e-15);
        assert!((spline.zero_rate(4.0).unwrap() - curve.zero_rate(4.0).unwrap()).abs() > 1e-6);
    }
}
