//! Curve bootstrapping.
//!
//! [`CurveBootstrapper`] solves the IBOR zero rate at each quoted tenor in
//! ascending order so that the par swap for that tenor prices to zero on
//! the dual-curve pair.

mod sequential;

pub use sequential::CurveBootstrapper;

use serde::{Deserialize, Serialize};

use parswap_math::solvers::{SolverConfig, SolverKind};

use crate::error::{CurveError, CurveResult};
use crate::instruments::LegConventions;
use crate::interpolation::InterpolationMethod;
use crate::repricing;

/// Bootstrap configuration.
///
/// # Example
///
/// ```rust
/// use parswap_curves::bootstrap::BootstrapConfig;
/// use parswap_curves::interpolation::InterpolationMethod;
///
/// let config = BootstrapConfig::default()
///     .with_interpolation(InterpolationMethod::CubicSpline)
///     .with_short_end_anchor(true);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootstrapConfig {
    /// Interpolation used for trial and final curves.
    pub interpolation: InterpolationMethod,
    /// Adds a knot at t = 0 equal to the fixing.
    pub short_end_anchor: bool,
    /// Swap conventions of the quoted instruments.
    pub conventions: LegConventions,
    /// Root finder for each tenor.
    pub solver: SolverKind,
    /// Tolerance and iteration limit of the root finder.
    pub solver_config: SolverConfig,
    /// Search bracket for the zero rate.
    pub bracket: (f64, f64),
    /// Starting point for Newton; defaults to the tenor's par quote.
    pub initial_guess: Option<f64>,
    /// Allowed par-rate error when repricing the quotes.
    pub repricing_tolerance: f64,
    /// Fail the bootstrap if any quote reprices outside tolerance.
    pub strict_repricing: bool,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            interpolation: InterpolationMethod::Linear,
            short_end_anchor: false,
            conventions: LegConventions::default(),
            solver: SolverKind::Newton,
            solver_config: SolverConfig::default(),
            bracket: (0.0, 0.10),
            initial_guess: None,
            repricing_tolerance: repricing::DEFAULT_TOLERANCE,
            strict_repricing: false,
        }
    }
}

impl BootstrapConfig {
    /// Sets the interpolation method.
    #[must_use]
    pub fn with_interpolation(mut self, method: InterpolationMethod) -> Self {
        self.interpolation = method;
        self
    }

    /// Enables or disables the t = 0 anchor knot.
    #[must_use]
    pub fn with_short_end_anchor(mut self, enabled: bool) -> Self {
        self.short_end_anchor = enabled;
        self
    }

    /// Sets the root finder.
    #[must_use]
    pub fn with_solver(mut self, solver: SolverKind) -> Self {
        self.solver = solver;
        self
    }

    /// Sets the root finder tolerance and iteration limit.
    #[must_use]
    pub fn with_solver_config(mut self, config: SolverConfig) -> Self {
        self.solver_config = config;
        self
    }

    /// Sets the zero-rate search bracket.
    #[must_use]
    pub fn with_bracket(mut self, lo: f64, hi: f64) -> Self {
        self.bracket = (lo, hi);
        self
    }

    /// Sets a fixed Newton starting point for every tenor.
    #[must_use]
    pub fn with_initial_guess(mut self, guess: f64) -> Self {
        self.initial_guess = Some(guess);
        self
    }

    /// Makes repricing failures fatal.
    #[must_use]
    pub fn with_strict_repricing(mut self, strict: bool) -> Self {
        self.strict_repricing = strict;
        self
    }

    /// Checks the configuration for consistency.
    ///
    /// A spline needs three knots, so a spline bootstrap requires the
    /// short-end anchor for the first tenor to have a curve to solve on.
    pub fn validate(&self) -> CurveResult<()> {
        self.conventions.validate()?;
        let (lo, hi) = self.bracket;
        if !(lo.is_finite() && hi.is_finite()) || lo >= hi {
            return Err(CurveError::invalid_value(format!(
                "bracket [{lo}, {hi}] must be finite and increasing"
            )));
        }
        if !(self.solver_config.tolerance > 0.0) || self.solver_config.max_iterations == 0 {
            return Err(CurveError::invalid_value(
                "solver needs a positive tolerance and iteration limit",
            ));
        }
        if self.initial_guess.is_some_and(|g| !g.is_finite()) {
            return Err(CurveError::invalid_value("initial guess must be finite"));
        }
        if !(self.repricing_tolerance >= 0.0) {
            return Err(CurveError::invalid_value(
                "repricing tolerance must be non-negative",
            ));
        }
        if self.interpolation == InterpolationMethod::CubicSpline && !self.short_end_anchor {
            return Err(CurveError::invalid_value(
                "a cubic spline bootstrap requires the short-end anchor",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parswap_core::types::Frequency;

    #[test]
    fn test_default_is_valid() {
        let config = BootstrapConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.bracket, (0.0, 0.10));
        assert_eq!(config.solver, SolverKind::Newton);
    }

    #[test]
    fn test_spline_requires_anchor() {
        let config =
            BootstrapConfig::default().with_interpolation(InterpolationMethod::CubicSpline);
        assert!(config.validate().is_err());
        assert!(config.with_short_end_anchor(true).validate().is_ok());
    }

    #[test]
    fn test_invalid_bracket() {
        assert!(BootstrapConfig::default().with_bracket(0.1, 0.0).validate().is_err());
        assert!(BootstrapConfig::default()
            .with_bracket(f64::NAN, 0.1)
            .validate()
            .is_err());
    }

    #[test]
    fn test_leg_frequencies_must_match_quotes() {
        let mut config = BootstrapConfig::default();
        config.conventions.float_frequency = Frequency::Annual;
        assert!(matches!(config.validate(), Err(CurveError::InvalidValue { .. })));

        let mut config = BootstrapConfig::default();
        config.conventions.fixed_frequency = Frequency::SemiAnnual;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_serde_defaults_fill_missing_fields() {
        let config: BootstrapConfig =
            serde_json::from_str(r#"{"solver": "Bisection", "strict_repricing": true}"#).unwrap();
        assert_eq!(config.solver, SolverKind::Bisection);
        assert!(config.strict_repricing);
        assert_eq!(config.interpolation, InterpolationMethod::Linear);
    }
}
