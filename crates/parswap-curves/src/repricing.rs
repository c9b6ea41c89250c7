//! Repricing validation for the bootstrap.
//!
//! After a bootstrap every quoted tenor is repriced on the finished curve
//! pair. The check compares the model par rate with the quote; a curve that
//! cannot reproduce its own inputs is wrong.

use std::fmt;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::curves::CurvePair;

/// Default par-rate repricing tolerance (decimal, 1e-8 = 0.0001bp).
pub const DEFAULT_TOLERANCE: f64 = 1e-8;

/// Repricing of one quoted tenor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RepricingCheck {
    /// Tenor in years.
    pub tenor: u32,
    /// Quoted par rate.
    pub quoted: f64,
    /// Par rate implied by the bootstrapped curves.
    pub model: f64,
    /// `|model - quoted|`.
    pub error: f64,
    /// Allowed error.
    pub tolerance: f64,
    /// Whether the tenor is within tolerance.
    pub passed: bool,
}

impl RepricingCheck {
    /// Creates a check from the quoted and model par rates.
    #[must_use]
    pub fn new(tenor: u32, quoted: f64, model: f64, tolerance: f64) -> Self {
        let error = (model - quoted).abs();
        Self {
            tenor,
            quoted,
            model,
            error,
            tolerance,
            passed: error <= tolerance,
        }
    }
}

impl fmt::Display for RepricingCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.passed { "ok" } else { "FAIL" };
        write!(
            f,
            "{:>4} {:>3}Y | quote {:.6}% | model {:.6}% | error {:.2e} (tol {:.2e})",
            status,
            self.tenor,
            self.quoted * 100.0,
            self.model * 100.0,
            self.error,
            self.tolerance
        )
    }
}

/// Repricing checks for every quoted tenor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepricingReport {
    checks: Vec<RepricingCheck>,
}

impl RepricingReport {
    /// Creates a report from individual checks.
    #[must_use]
    pub fn new(checks: Vec<RepricingCheck>) -> Self {
        Self { checks }
    }

    /// Whether every tenor repriced within tolerance.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }

    /// The individual checks.
    #[must_use]
    pub fn checks(&self) -> &[RepricingCheck] {
        &self.checks
    }

    /// Largest absolute par-rate error.
    #[must_use]
    pub fn max_error(&self) -> f64 {
        self.checks.iter().map(|c| c.error).fold(0.0_f64, f64::max)
    }

    /// Root mean square par-rate error.
    #[must_use]
    pub fn rms_error(&self) -> f64 {
        if self.checks.is_empty() {
            return 0.0;
        }
        let sum_sq: f64 = self.checks.iter().map(|c| c.error * c.error).sum();
        (sum_sq / self.checks.len() as f64).sqrt()
    }

    /// Number of tenors outside tolerance.
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.checks.iter().filter(|c| !c.passed).count()
    }

    /// Number of tenors checked.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.checks.len()
    }

    /// Tenors outside tolerance.
    #[must_use]
    pub fn failed_tenors(&self) -> Vec<u32> {
        self.checks.iter().filter(|c| !c.passed).map(|c| c.tenor).collect()
    }
}

impl fmt::Display for RepricingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Repricing Report")?;
        writeln!(f, "================")?;
        writeln!(f, "Status: {}", if self.is_valid() { "PASSED" } else { "FAILED" })?;
        writeln!(
            f,
            "Tenors: {}/{} passed",
            self.total_count() - self.failed_count(),
            self.total_count()
        )?;
        writeln!(f, "Max Error: {:.2e}", self.max_error())?;
        writeln!(f, "RMS Error: {:.2e}", self.rms_error())?;
        for check in &self.checks {
            writeln!(f, "  {check}")?;
        }
        Ok(())
    }
}

/// Diagnostics of one tenor solve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TenorSolve {
    /// Tenor in years.
    pub tenor: u32,
    /// Solved IBOR zero rate at the tenor.
    pub zero_rate: f64,
    /// Solver iterations.
    pub iterations: u32,
    /// Par-condition residual at the solved rate.
    pub residual: f64,
}

/// Bootstrapped curves with their solve diagnostics and repricing report.
#[derive(Debug, Clone)]
pub struct BootstrapResult {
    /// The bootstrapped IBOR and discount curves.
    pub curves: CurvePair,
    /// One entry per quoted tenor, in tenor order.
    pub solves: Vec<TenorSolve>,
    /// Repricing of every quote on the finished curves.
    pub repricing: RepricingReport,
    /// Wall-clock build time.
    pub build_duration: Duration,
}

impl BootstrapResult {
    /// Whether every quote repriced within tolerance.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.repricing.is_valid()
    }

    /// Consumes the result, returning the curves.
    #[must_use]
    pub fn into_curves(self) -> CurvePair {
        self.curves
    }

    /// Total solver iterations across all tenors.
    #[must_use]
    pub fn total_iterations(&self) -> u32 {
        self.solves.iter().map(|s| s.iterations).sum()
    }
}

/// Wall-clock timer for curve builds.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BuildTimer(Instant);

impl BuildTimer {
    pub(crate) fn start() -> Self {
        Self(Instant::now())
    }

    pub(crate) fn elapsed(self) -> Duration {
        self.0.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_pass_and_fail() {
        let ok = RepricingCheck::new(5, 0.0321, 0.0321 + 1e-12, DEFAULT_TOLERANCE);
        assert!(ok.passed);

        let bad = RepricingCheck::new(7, 0.0311, 0.0312, DEFAULT_TOLERANCE);
        assert!(!bad.passed);
        assert!(bad.to_string().contains("FAIL"));
    }

    #[test]
    fn test_report_statistics() {
        let report = RepricingReport::new(vec![
            RepricingCheck::new(1, 0.0414, 0.0414, 1e-8),
            RepricingCheck::new(2, 0.0373, 0.0373 + 3e-8, 1e-8),
            RepricingCheck::new(3, 0.0348, 0.0348 - 4e-8, 1e-8),
        ]);

        assert!(!report.is_valid());
        assert_eq!(report.failed_count(), 2);
        assert_eq!(report.failed_tenors(), vec![2, 3]);
        assert!((report.max_error() - 4e-8).abs() < 1e-15);
        assert!((report.rms_error() - (25e-16_f64 / 3.0).sqrt()).abs() < 1e-15);
        assert!(report.to_string().contains("1/3 passed"));
    }

    #[test]
    fn test_empty_report_is_valid() {
        let report = RepricingReport::new(Vec::new());
        assert!(report.is_valid());
        assert_eq!(report.max_error(), 0.0);
        assert_eq!(report.rms_error(), 0.0);
    }
}
