//! Sequential bootstrap algorithm.
//!
//! Solves one IBOR zero rate per quoted tenor, shortest first, each against
//! the knots already solved.

use std::cell::Cell;

use parswap_core::Date;
use parswap_math::solvers::RootSolver;
use parswap_math::MathError;

use crate::bootstrap::BootstrapConfig;
use crate::curves::CurvePair;
use crate::error::{CurveError, CurveResult};
use crate::instruments::SwapLegs;
use crate::quotes::{MarketQuotes, FIXING_TENOR};
use crate::repricing::{BootstrapResult, BuildTimer, RepricingCheck, RepricingReport, TenorSolve};

/// Sequential dual-curve bootstrapper.
///
/// The algorithm:
/// 1. Seed the IBOR curve with the 6M fixing at t = 0.5
/// 2. For each tenor, solve `float PV - par x annuity = 0` for the zero
///    rate at the tenor, with the discount curve at IBOR + spread
/// 3. Append the solved knot and move to the next tenor
/// 4. Reprice every quote on the finished pair
///
/// Each trial rate is priced on a disposable curve built from the solved
/// knots plus the trial knot, so the objective never mutates shared state.
///
/// # Example
///
/// ```rust
/// use parswap_core::Date;
/// use parswap_curves::bootstrap::CurveBootstrapper;
/// use parswap_curves::quotes::MarketQuotes;
///
/// let trade = Date::from_ymd(2026, 1, 7).unwrap();
/// let result = CurveBootstrapper::new(trade)
///     .bootstrap(&MarketQuotes::sample(), -38.0)
///     .unwrap();
///
/// assert!(result.is_valid());
/// let z10 = result.curves.ibor().zero_rate(10.0).unwrap();
/// assert!((z10 - 0.030215).abs() < 1e-5);
/// ```
pub struct CurveBootstrapper {
    reference_date: Date,
    config: BootstrapConfig,
    solver: Box<dyn RootSolver>,
}

impl CurveBootstrapper {
    /// Creates a bootstrapper with the default configuration.
    #[must_use]
    pub fn new(reference_date: Date) -> Self {
        let config = BootstrapConfig::default();
        Self {
            reference_date,
            solver: config.solver.to_solver(),
            config,
        }
    }

    /// Sets the configuration, including the solver it names.
    #[must_use]
    pub fn with_config(mut self, config: BootstrapConfig) -> Self {
        self.solver = config.solver.to_solver();
        self.config = config;
        self
    }

    /// Injects a root finder, overriding the configured kind.
    #[must_use]
    pub fn with_solver(mut self, solver: Box<dyn RootSolver>) -> Self {
        self.solver = solver;
        self
    }

    /// Curve anchor date.
    #[must_use]
    pub fn reference_date(&self) -> Date {
        self.reference_date
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &BootstrapConfig {
        &self.config
    }

    /// Bootstraps the IBOR and discount curves.
    ///
    /// `spread_bps` is the constant discount spread over IBOR in basis
    /// points (-38.0 for a discount curve 38bp below IBOR).
    ///
    /// # Errors
    ///
    /// - `InvalidQuotes` / `InvalidValue` for bad inputs or configuration
    /// - `CalibrationFailure` naming the tenor whose solve did not converge
    /// - `RepricingFailed` in strict mode when a quote does not reprice
    pub fn bootstrap(
        &self,
        quotes: &MarketQuotes,
        spread_bps: f64,
    ) -> CurveResult<BootstrapResult> {
        let timer = BuildTimer::start();

        quotes.validate()?;
        self.config.validate()?;
        if !spread_bps.is_finite() {
            return Err(CurveError::invalid_value("discount spread must be finite"));
        }

        let spread = spread_bps / 10_000.0;
        let fixing = quotes.fixing();

        let mut knots = Vec::with_capacity(quotes.par_rates().len() + 2);
        if self.config.short_end_anchor {
            knots.push((0.0, fixing));
        }
        knots.push((FIXING_TENOR, fixing));

        let mut solves = Vec::with_capacity(quotes.par_rates().len());

        for quote in quotes.par_rates() {
            let legs =
                SwapLegs::generate(self.reference_date, quote.tenor, self.config.conventions)?;
            let t = f64::from(quote.tenor);

            // Solvers only see NaN; the first curve error is kept for the report
            let first_error: Cell<Option<CurveError>> = Cell::new(None);
            let objective = |z: f64| -> f64 {
                let mut trial = knots.clone();
                trial.push((t, z));
                match self
                    .pair(trial, spread)
                    .and_then(|curves| legs.par_residual(quote.rate, fixing, &curves))
                {
                    Ok(residual) => residual,
                    Err(err) => {
                        let kept = first_error.take().unwrap_or(err);
                        first_error.set(Some(kept));
                        f64::NAN
                    }
                }
            };

            let guess = self.config.initial_guess.unwrap_or(quote.rate);
            let result = self
                .solver
                .solve(&objective, guess, self.config.bracket, &self.config.solver_config)
                .map_err(|e| {
                    let (iterations, residual) = match &e {
                        MathError::ConvergenceFailed {
                            iterations,
                            residual,
                        } => (*iterations, *residual),
                        _ => (0, f64::NAN),
                    };
                    let solver = self.solver.name();
                    let message = match first_error.take() {
                        Some(curve_error) => {
                            format!("{solver} failed: {e}; trial curve rejected: {curve_error}")
                        }
                        None => format!("{solver} failed: {e}"),
                    };
                    CurveError::calibration_failed(quote.tenor, iterations, residual, message)
                })?;

            log::debug!(
                "Solved {}Y zero {:.10} in {} iterations (residual {:.2e})",
                quote.tenor,
                result.root,
                result.iterations,
                result.residual
            );

            knots.push((t, result.root));
            solves.push(TenorSolve {
                tenor: quote.tenor,
                zero_rate: result.root,
                iterations: result.iterations,
                residual: result.residual,
            });
        }

        let curves = self.pair(knots, spread)?;
        let repricing = self.reprice(&curves, quotes)?;

        if !repricing.is_valid() {
            log::warn!(
                "Bootstrap repriced {} of {} quotes outside tolerance (max error {:.2e})",
                repricing.failed_count(),
                repricing.total_count(),
                repricing.max_error()
            );
            if self.config.strict_repricing {
                return Err(CurveError::RepricingFailed {
                    failed: repricing.failed_count(),
                    total: repricing.total_count(),
                    max_error: repricing.max_error(),
                });
            }
        }

        let result = BootstrapResult {
            curves,
            solves,
            repricing,
            build_duration: timer.elapsed(),
        };

        log::info!(
            "Bootstrapped {} tenors ({}, spread {spread_bps}bp) in {} iterations, {:?}",
            result.solves.len(),
            self.config.interpolation,
            result.total_iterations(),
            result.build_duration
        );

        Ok(result)
    }

    /// Reprices every quote on a curve pair.
    pub fn reprice(
        &self,
        curves: &CurvePair,
        quotes: &MarketQuotes,
    ) -> CurveResult<RepricingReport> {
        let checks = quotes
            .par_rates()
            .iter()
            .map(|quote| {
                let legs =
                    SwapLegs::generate(self.reference_date, quote.tenor, self.config.conventions)?;
                let model = legs.par_rate(quotes.fixing(), curves, self.reference_date)?;
                Ok(RepricingCheck::new(
                    quote.tenor,
                    quote.rate,
                    model,
                    self.config.repricing_tolerance,
                ))
            })
            .collect::<CurveResult<Vec<_>>>()?;

        Ok(RepricingReport::new(checks))
    }

    fn pair(&self, knots: Vec<(f64, f64)>, spread: f64) -> CurveResult<CurvePair> {
        Ok(
            CurvePair::from_knots(self.reference_date, knots, spread, self.config.interpolation)?
                .with_day_count(self.config.conventions.day_count),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instruments::LegConventions;
    use crate::interpolation::InterpolationMethod;
    use approx::assert_abs_diff_eq;
    use parswap_math::solvers::{BisectionSolver, SolverConfig, SolverKind};

    fn trade() -> Date {
        Date::from_ymd(2026, 1, 7).unwrap()
    }

    #[test]
    fn test_first_knot_is_fixing() {
        let result = CurveBootstrapper::new(trade())
            .bootstrap(&MarketQuotes::sample(), -38.0)
            .unwrap();

        let knots = result.curves.ibor().knots();
        assert_eq!(knots[0], (0.5, 0.0411));
        assert_eq!(knots.len(), 7);
        assert_eq!(result.solves.len(), 6);
    }

    #[test]
    fn test_one_year_zero() {
        let result = CurveBootstrapper::new(trade())
            .bootstrap(&MarketQuotes::sample(), -38.0)
            .unwrap();

        assert_abs_diff_eq!(
            result.curves.ibor().zero_rate(1.0).unwrap(),
            0.040809103,
            epsilon = 1e-8
        );
    }

    #[test]
    fn test_objective_vanishes_at_solution() {
        let quotes = MarketQuotes::sample();
        let bootstrapper = CurveBootstrapper::new(trade());
        let result = bootstrapper.bootstrap(&quotes, -38.0).unwrap();

        for quote in quotes.par_rates() {
            let legs = SwapLegs::generate(trade(), quote.tenor, LegConventions::default()).unwrap();
            let residual = legs
                .par_residual(quote.rate, quotes.fixing(), &result.curves)
                .unwrap();
            assert_abs_diff_eq!(residual, 0.0, epsilon = 1e-9);
        }
        assert!(result.repricing.max_error() < 1e-8);
    }

    #[test]
    fn test_bisection_agrees_with_newton() {
        let quotes = MarketQuotes::sample();
        let newton = CurveBootstrapper::new(trade()).bootstrap(&quotes, -38.0).unwrap();
        let bisection = CurveBootstrapper::new(trade())
            .with_config(BootstrapConfig::default().with_solver(SolverKind::Bisection))
            .bootstrap(&quotes, -38.0)
            .unwrap();
        let injected = CurveBootstrapper::new(trade())
            .with_solver(Box::new(BisectionSolver))
            .bootstrap(&quotes, -38.0)
            .unwrap();

        for ((a, b), c) in newton.solves.iter().zip(&bisection.solves).zip(&injected.solves) {
            assert_abs_diff_eq!(a.zero_rate, b.zero_rate, epsilon = 1e-9);
            assert_abs_diff_eq!(b.zero_rate, c.zero_rate, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_anchored_spline_bootstrap_reprices_last_tenor() {
        // Later knots move a spline on earlier segments, so only the
        // last solve is guaranteed to hold on the final curve.
        let config = BootstrapConfig::default()
            .with_interpolation(InterpolationMethod::CubicSpline)
            .with_short_end_anchor(true);
        let result = CurveBootstrapper::new(trade())
            .with_config(config)
            .bootstrap(&MarketQuotes::sample(), -38.0)
            .unwrap();

        assert_eq!(result.curves.ibor().times()[0], 0.0);
        assert_eq!(result.curves.interpolation(), InterpolationMethod::CubicSpline);
        let last = result.repricing.checks().last().unwrap();
        assert_eq!(last.tenor, 10);
        assert!(last.passed);
    }

    #[test]
    fn test_strict_repricing_rejects_spline_drift() {
        let config = BootstrapConfig::default()
            .with_interpolation(InterpolationMethod::CubicSpline)
            .with_short_end_anchor(true)
            .with_strict_repricing(true);
        let err = CurveBootstrapper::new(trade())
            .with_config(config)
            .bootstrap(&MarketQuotes::sample(), -38.0)
            .unwrap_err();

        assert!(matches!(err, CurveError::RepricingFailed { total: 6, .. }));
    }

    #[test]
    fn test_out_of_bracket_quote_fails_with_tenor() {
        let quotes = MarketQuotes::new(0.0411, [(1, 0.0414), (2, 0.25)]).unwrap();
        let err = CurveBootstrapper::new(trade())
            .with_config(
                BootstrapConfig::default()
                    .with_solver(SolverKind::Bisection)
                    .with_solver_config(SolverConfig::new(1e-10, 50)),
            )
            .bootstrap(&quotes, -38.0)
            .unwrap_err();

        assert!(matches!(err, CurveError::CalibrationFailure { tenor: 2, .. }));
    }

    /// Evaluates the objective at a rate no curve accepts, then gives up.
    struct NonFiniteStart;

    impl RootSolver for NonFiniteStart {
        fn solve(
            &self,
            f: &dyn Fn(f64) -> f64,
            _initial_guess: f64,
            _bracket: (f64, f64),
            _config: &SolverConfig,
        ) -> parswap_math::MathResult<parswap_math::solvers::SolverResult> {
            let residual = f(f64::INFINITY);
            Err(MathError::convergence_failed(1, residual))
        }

        fn name(&self) -> &'static str {
            "non-finite start"
        }
    }

    #[test]
    fn test_calibration_failure_keeps_curve_error() {
        let err = CurveBootstrapper::new(trade())
            .with_solver(Box::new(NonFiniteStart))
            .bootstrap(&MarketQuotes::sample(), -38.0)
            .unwrap_err();

        let CurveError::CalibrationFailure { tenor, message, .. } = err else {
            panic!("expected a calibration failure, got {err:?}");
        };
        assert_eq!(tenor, 1);
        assert!(message.contains("non-finite start failed"));
        assert!(message.contains("trial curve rejected"));
        assert!(message.contains("is not finite"));
    }

    #[test]
    fn test_rejects_invalid_spread() {
        let err = CurveBootstrapper::new(trade())
            .bootstrap(&MarketQuotes::sample(), f64::NAN)
            .unwrap_err();
        assert!(matches!(err, CurveError::InvalidValue { .. }));
    }
}
