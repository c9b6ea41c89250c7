//! Curve risk by re-bootstrapping bumped quotes.
//!
//! ## Formula
//!
//! ```text
//! DV01  = PV(+1bp) − PV(base)
//! Gamma = PV(+1bp) − 2·PV(base) + PV(−1bp)
//! ```
//!
//! Each PV is taken on curves bootstrapped from par quotes shifted in
//! parallel; the 6M fixing is never shocked.

use std::fmt;

use serde::{Deserialize, Serialize};

use parswap_curves::bootstrap::CurveBootstrapper;
use parswap_curves::curves::CurvePair;
use parswap_curves::quotes::MarketQuotes;

use crate::engine::SwapEngine;
use crate::error::{PricingError, PricingResult};
use crate::swap::Swap;

/// Risk run configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskConfig {
    /// Parallel shift applied to every par quote, in basis points.
    pub bump_bps: f64,
    /// Notional the figures are reported for.
    pub notional: f64,
    /// Run the three bootstraps on the rayon pool (needs the `parallel` feature).
    pub parallel: bool,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            bump_bps: 1.0,
            notional: 1_000_000.0,
            parallel: false,
        }
    }
}

impl RiskConfig {
    /// Sets the bump size.
    #[must_use]
    pub fn with_bump(mut self, bps: f64) -> Self {
        self.bump_bps = bps;
        self
    }

    /// Sets the reporting notional.
    #[must_use]
    pub fn with_notional(mut self, notional: f64) -> Self {
        self.notional = notional;
        self
    }

    /// Enables or disables parallel bootstraps.
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Checks that bump and notional are positive.
    pub fn validate(&self) -> PricingResult<()> {
        if !(self.bump_bps.is_finite() && self.bump_bps > 0.0) {
            return Err(PricingError::invalid_input(format!(
                "bump must be positive, got {}bp",
                self.bump_bps
            )));
        }
        if !(self.notional.is_finite() && self.notional > 0.0) {
            return Err(PricingError::invalid_input(format!(
                "reporting notional must be positive, got {}",
                self.notional
            )));
        }
        Ok(())
    }

    fn should_parallelize(&self) -> bool {
        cfg!(feature = "parallel") && self.parallel
    }
}

/// PVs and sensitivities of one risk run, at the reporting notional.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskReport {
    /// Bump size in basis points.
    pub bump_bps: f64,
    /// Reporting notional.
    pub notional: f64,
    /// PV on the base curves.
    pub base_pv: f64,
    /// PV with quotes bumped up.
    pub up_pv: f64,
    /// PV with quotes bumped down.
    pub down_pv: f64,
    /// `up − base`.
    pub dv01: f64,
    /// `up − 2·base + down`.
    pub gamma: f64,
}

impl RiskReport {
    fn new(bump_bps: f64, notional: f64, base_pv: f64, up_pv: f64, down_pv: f64) -> Self {
        Self {
            bump_bps,
            notional,
            base_pv,
            up_pv,
            down_pv,
            dv01: up_pv - base_pv,
            gamma: up_pv - 2.0 * base_pv + down_pv,
        }
    }

    /// Central-difference DV01, `(up − down) / 2`.
    #[must_use]
    pub fn central_dv01(&self) -> f64 {
        0.5 * (self.up_pv - self.down_pv)
    }
}

impl fmt::Display for RiskReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DV01 ${:.4} | Gamma ${:.4} per ${:.0} ({}bp bump)",
            self.dv01, self.gamma, self.notional, self.bump_bps
        )
    }
}

/// Re-bootstraps bumped quotes and reprices a swap on each curve set.
pub struct RiskCalculator {
    bootstrapper: CurveBootstrapper,
    config: RiskConfig,
}

impl RiskCalculator {
    /// Creates a calculator with the default risk configuration.
    #[must_use]
    pub fn new(bootstrapper: CurveBootstrapper) -> Self {
        Self {
            bootstrapper,
            config: RiskConfig::default(),
        }
    }

    /// Sets the risk configuration.
    #[must_use]
    pub fn with_config(mut self, config: RiskConfig) -> Self {
        self.config = config;
        self
    }

    /// Active configuration.
    pub fn config(&self) -> &RiskConfig {
        &self.config
    }

    /// DV01 and Gamma of `swap` under parallel par-quote shifts.
    ///
    /// Base, up and down curves are each fully re-bootstrapped. PVs are
    /// scaled from the swap's notional to the reporting notional.
    pub fn dv01_and_gamma(
        &self,
        quotes: &MarketQuotes,
        spread_bps: f64,
        swap: &Swap,
    ) -> PricingResult<RiskReport> {
        self.config.validate()?;
        let bump = self.config.bump_bps;
        let scenarios = [0.0, bump, -bump];

        let pvs = maybe_parallel_map(&scenarios, self.config.should_parallelize(), |&shift| {
            let bumped = quotes.bumped(shift);
            let curves = self.bootstrapper.bootstrap(&bumped, spread_bps)?.into_curves();
            self.scaled_pv(&curves, bumped.fixing(), swap)
        })
        .into_iter()
        .collect::<PricingResult<Vec<_>>>()?;

        let report = RiskReport::new(bump, self.config.notional, pvs[0], pvs[1], pvs[2]);

        log::info!(
            "Risk for {}Y swap at {:.6}%: {report}",
            swap.spec.maturity_years,
            swap.fixed_rate * 100.0
        );

        Ok(report)
    }

    /// DV01 from shifting every zero rate of given curves (no re-bootstrap).
    pub fn zero_shift_dv01(
        &self,
        curves: &CurvePair,
        fixing: f64,
        swap: &Swap,
    ) -> PricingResult<f64> {
        self.config.validate()?;
        let base = self.scaled_pv(curves, fixing, swap)?;
        let up = self.scaled_pv(&curves.shifted(self.config.bump_bps)?, fixing, swap)?;
        Ok(up - base)
    }

    fn scaled_pv(&self, curves: &CurvePair, fixing: f64, swap: &Swap) -> PricingResult<f64> {
        let pv = SwapEngine::new(curves, fixing).price(swap)?;
        Ok(pv * self.config.notional / swap.notional())
    }
}

/// Maps over items, on the rayon pool when `parallel` is set and the
/// `parallel` feature is enabled.
#[allow(unused_variables)]
fn maybe_parallel_map<T, U, F>(items: &[T], parallel: bool, f: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        if parallel {
            return items.par_iter().map(f).collect();
        }
    }

    items.iter().map(f).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::swap::SwapSpec;
    use parswap_core::Date;

    fn trade() -> Date {
        Date::from_ymd(2026, 1, 7).unwrap()
    }

    #[test]
    fn test_report_formulas() {
        let report = RiskReport::new(1.0, 1e6, 0.0, -784.0, 784.7);
        assert_eq!(report.dv01, -784.0);
        assert!((report.gamma - 0.7).abs() < 1e-9);
        assert!((report.central_dv01() + 784.35).abs() < 1e-9);
        assert!(report.to_string().contains("DV01 $-784.0000"));
    }

    #[test]
    fn test_config_validation() {
        assert!(RiskConfig::default().validate().is_ok());
        assert!(RiskConfig::default().with_bump(0.0).validate().is_err());
        assert!(RiskConfig::default().with_notional(-1.0).validate().is_err());
    }

    #[test]
    fn test_parallel_flag_needs_feature() {
        let config = RiskConfig::default().with_parallel(true);
        assert_eq!(config.should_parallelize(), cfg!(feature = "parallel"));
        assert!(!RiskConfig::default().should_parallelize());
    }

    #[test]
    fn test_receiver_dv01_negative_gamma_positive() {
        let quotes = MarketQuotes::sample();
        let calculator = RiskCalculator::new(CurveBootstrapper::new(trade()));
        let swap = Swap::new(SwapSpec::new(trade(), 5, 1_000_000.0), 0.0321).unwrap();

        let report = calculator.dv01_and_gamma(&quotes, -38.0, &swap).unwrap();
        assert!(report.base_pv.abs() < 1e-2);
        assert!(report.dv01 < 0.0);
        assert!(report.gamma >= 0.0);
    }

    #[test]
    fn test_reporting_notional_scales() {
        let quotes = MarketQuotes::sample();
        let swap = Swap::new(SwapSpec::new(trade(), 3, 10_000_000.0), 0.0348).unwrap();

        let per_million = RiskCalculator::new(CurveBootstrapper::new(trade()))
            .dv01_and_gamma(&quotes, -38.0, &swap)
            .unwrap();
        let per_ten_million = RiskCalculator::new(CurveBootstrapper::new(trade()))
            .with_config(RiskConfig::default().with_notional(10_000_000.0))
            .dv01_and_gamma(&quotes, -38.0, &swap)
            .unwrap();

        assert!((per_ten_million.dv01 - 10.0 * per_million.dv01).abs() < 1e-6);
    }
}
