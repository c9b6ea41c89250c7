//! Natural cubic spline interpolation.

use serde::{Deserialize, Serialize};

use crate::error::MathResult;
use crate::interpolation::{clamp, find_segment, validate_knots, Clamp, Interpolator};
use crate::linear_algebra::solve_tridiagonal;

/// Polynomial coefficients of one spline segment.
///
/// On `[x_i, x_{i+1}]` the spline is `a + b·dx + c·dx² + d·dx³` with
/// `dx = x - x_i`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SplineSegment {
    /// Constant term, equal to `y_i`.
    pub a: f64,
    /// Linear term.
    pub b: f64,
    /// Quadratic term, `M_i / 2`.
    pub c: f64,
    /// Cubic term.
    pub d: f64,
}

impl SplineSegment {
    fn value(&self, dx: f64) -> f64 {
        self.a + dx * (self.b + dx * (self.c + dx * self.d))
    }

    fn slope(&self, dx: f64) -> f64 {
        self.b + dx * (2.0 * self.c + dx * 3.0 * self.d)
    }

    fn curvature(&self, dx: f64) -> f64 {
        2.0 * self.c + 6.0 * self.d * dx
    }
}

/// Natural cubic spline interpolation.
///
/// Piecewise cubic with continuous first and second derivatives through every
/// knot. "Natural" means the second derivative is zero at the first and last
/// knot. The second derivatives are solved once at construction and the
/// segment coefficients cached.
///
/// # Example
///
/// ```rust
/// use parswap_math::interpolation::{CubicSpline, Interpolator};
///
/// let spline = CubicSpline::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 0.0]).unwrap();
///
/// // Single interior knot: M_1 = -3
/// assert!((spline.second_derivatives()[1] + 3.0).abs() < 1e-12);
/// assert!((spline.interpolate(0.5).unwrap() - 0.6875).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct CubicSpline {
    xs: Vec<f64>,
    ys: Vec<f64>,
    /// Second derivatives at each knot
    m: Vec<f64>,
    segments: Vec<SplineSegment>,
    allow_extrapolation: bool,
}

impl CubicSpline {
    /// Creates a natural cubic spline interpolator.
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than 3 points, if lengths differ,
    /// or if xs are not strictly increasing.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        validate_knots(&xs, &ys, 3)?;

        let m = natural_second_derivatives(&xs, &ys)?;
        let segments = (0..xs.len() - 1)
            .map(|i| {
                let h = xs[i + 1] - xs[i];
                SplineSegment {
                    a: ys[i],
                    b: (ys[i + 1] - ys[i]) / h - h * (2.0 * m[i] + m[i + 1]) / 6.0,
                    c: m[i] / 2.0,
                    d: (m[i + 1] - m[i]) / (6.0 * h),
                }
            })
            .collect();

        Ok(Self {
            xs,
            ys,
            m,
            segments,
            allow_extrapolation: false,
        })
    }

    /// Clamps queries outside the data range to the boundary value.
    #[must_use]
    pub fn with_flat_extrapolation(mut self) -> Self {
        self.allow_extrapolation = true;
        self
    }

    /// Second derivatives `M_i` at the knots (`M_0 = M_n = 0`).
    #[must_use]
    pub fn second_derivatives(&self) -> &[f64] {
        &self.m
    }

    /// Cached coefficients, one per segment.
    #[must_use]
    pub fn segments(&self) -> &[SplineSegment] {
        &self.segments
    }

    /// Returns the second derivative at x (zero in the extrapolated region).
    pub fn second_derivative(&self, x: f64) -> MathResult<f64> {
        if !matches!(clamp(&self.xs, x, self.allow_extrapolation)?, Clamp::Inside) {
            return Ok(0.0);
        }
        let i = find_segment(&self.xs, x);
        Ok(self.segments[i].curvature(x - self.xs[i]))
    }
}

impl Interpolator for CubicSpline {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        match clamp(&self.xs, x, self.allow_extrapolation)? {
            Clamp::Below => return Ok(self.ys[0]),
            Clamp::Above => return Ok(self.ys[self.ys.len() - 1]),
            Clamp::Inside => {}
        }

        let i = find_segment(&self.xs, x);
        Ok(self.segments[i].value(x - self.xs[i]))
    }

    fn derivative(&self, x: f64) -> MathResult<f64> {
        if !matches!(clamp(&self.xs, x, self.allow_extrapolation)?, Clamp::Inside) {
            return Ok(0.0);
        }

        let i = find_segment(&self.xs, x);
        Ok(self.segments[i].slope(x - self.xs[i]))
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

/// Solves for the knot second derivatives of a natural spline.
///
/// Interior rows read `μ_i·M_{i-1} + 2·M_i + λ_i·M_{i+1} = r_i` with
/// `μ_i = h_{i-1}/(h_{i-1}+h_i)`, `λ_i = h_i/(h_{i-1}+h_i)` and
/// `r_i = 6·[(y_{i+1}-y_i)/h_i − (y_i-y_{i-1})/h_{i-1}]/(h_{i-1}+h_i)`.
fn natural_second_derivatives(xs: &[f64], ys: &[f64]) -> MathResult<Vec<f64>> {
    let n = xs.len() - 1;
    let h: Vec<f64> = xs.windows(2).map(|w| w[1] - w[0]).collect();

    let interior = n - 1;
    let mut sub = Vec::with_capacity(interior.saturating_sub(1));
    let diag = vec![2.0; interior];
    let mut sup = Vec::with_capacity(interior.saturating_sub(1));
    let mut rhs = Vec::with_capacity(interior);

    for i in 1..n {
        let span = h[i - 1] + h[i];
        let mu = h[i - 1] / span;
        let lambda = h[i] / span;

        if i > 1 {
            sub.push(mu);
        }
        if i < n - 1 {
            sup.push(lambda);
        }
        rhs.push(6.0 * ((ys[i + 1] - ys[i]) / h[i] - (ys[i] - ys[i - 1]) / h[i - 1]) / span);
    }

    let inner = solve_tridiagonal(&sub, &diag, &sup, &rhs)?;

    let mut m = Vec::with_capacity(n + 1);
    m.push(0.0);
    m.extend(inner);
    m.push(0.0);
    Ok(m)
}
