//! Root-finding algorithms.
//!
//! - [`newton_raphson`]: quadratic convergence when a derivative is available
//! - [`newton_raphson_numerical`]: Newton with a central-difference derivative
//! - [`bisection`]: slow but guaranteed on a sign-changing bracket
//!
//! Curve bootstrapping takes its solver as a [`RootSolver`] trait object so
//! the algorithm is chosen by configuration ([`SolverKind`]) rather than by
//! the calibration code.
//!
//! # Example
//!
//! ```rust
//! use parswap_math::solvers::{RootSolver, SolverConfig, SolverKind};
//!
//! let solver = SolverKind::Newton.to_solver();
//! let result = solver
//!     .solve(&|x: f64| x * x - 2.0, 1.5, (0.0, 2.0), &SolverConfig::default())
//!     .unwrap();
//! assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-10);
//! ```

mod bisection;
mod newton;

pub use bisection::bisection;
pub use newton::{newton_raphson, newton_raphson_numerical};

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::MathResult;

/// Default tolerance for root-finding algorithms.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Default maximum iterations for root-finding algorithms.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Tolerance for convergence.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Result of a root-finding iteration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// Number of iterations used.
    pub iterations: u32,
    /// Final residual (function value at root).
    pub residual: f64,
}

/// Object-safe root finder.
///
/// `bracket` bounds the search. Bracketing methods require a sign change
/// across it; Newton uses it only when it has to fall back.
pub trait RootSolver: Send + Sync {
    /// Solves `f(x) = 0`.
    fn solve(
        &self,
        f: &dyn Fn(f64) -> f64,
        initial_guess: f64,
        bracket: (f64, f64),
        config: &SolverConfig,
    ) -> MathResult<SolverResult>;

    /// Returns the name of the solver.
    fn name(&self) -> &'static str;
}

/// Newton-Raphson with a numerical derivative.
///
/// With `bracket_fallback` set, a failed Newton run (flat derivative,
/// non-convergence, or a root outside the bracket) is retried by bisection.
#[derive(Debug, Clone, Copy)]
pub struct NewtonSolver {
    /// Retry with bisection on the bracket when Newton fails.
    pub bracket_fallback: bool,
}

impl Default for NewtonSolver {
    fn default() -> Self {
        Self {
            bracket_fallback: true,
        }
    }
}

impl RootSolver for NewtonSolver {
    fn solve(
        &self,
        f: &dyn Fn(f64) -> f64,
        initial_guess: f64,
        bracket: (f64, f64),
        config: &SolverConfig,
    ) -> MathResult<SolverResult> {
        let (lo, hi) = (bracket.0.min(bracket.1), bracket.0.max(bracket.1));

        match newton_raphson_numerical(f, initial_guess, config) {
            Ok(result) if result.root >= lo && result.root <= hi => Ok(result),
            Ok(result) if !self.bracket_fallback => Ok(result),
            Err(err) if !self.bracket_fallback => Err(err),
            outcome => {
                log::debug!(
                    "Newton from {initial_guess} unusable ({outcome:?}), bisecting [{lo}, {hi}]"
                );
                bisection(f, lo, hi, config)
            }
        }
    }

    fn name(&self) -> &'static str {
        "Newton-Raphson"
    }
}

/// Bisection solver implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct BisectionSolver;

impl RootSolver for BisectionSolver {
    fn solve(
        &self,
        f: &dyn Fn(f64) -> f64,
        _initial_guess: f64,
        bracket: (f64, f64),
        config: &SolverConfig,
    ) -> MathResult<SolverResult> {
        bisection(f, bracket.0, bracket.1, config)
    }

    fn name(&self) -> &'static str {
        "Bisection"
    }
}

/// Selects a root solver by name in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SolverKind {
    /// Newton-Raphson with bisection fallback
    #[default]
    Newton,
    /// Pure bisection
    Bisection,
}

impl SolverKind {
    /// Creates the boxed solver.
    #[must_use]
    pub fn to_solver(&self) -> Box<dyn RootSolver> {
        match self {
            SolverKind::Newton => Box::new(NewtonSolver::default()),
            SolverKind::Bisection => Box::new(BisectionSolver),
        }
    }
}

impl fmt::Display for SolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverKind::Newton => write!(f, "Newton"),
            SolverKind::Bisection => write!(f, "Bisection"),
        }
    }
}
