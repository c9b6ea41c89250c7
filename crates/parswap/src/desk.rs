//! Desk session running the scenario computations.

use serde::{Deserialize, Serialize};

use parswap_curves::bootstrap::CurveBootstrapper;
use parswap_curves::curves::{CurvePair, CurvePoint};
use parswap_curves::interpolation::InterpolationMethod;
use parswap_curves::repricing::{BootstrapResult, RepricingReport};
use parswap_pricing::{RiskCalculator, RiskReport, Swap, SwapEngine, ValuationResult};

use crate::config::DeskConfig;
use crate::error::DeskResult;

/// Par rate and curve risk of the configured swap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParRisk {
    /// Par fixed rate on the base curves.
    pub par_rate: f64,
    /// Fixed-leg annuity per unit notional.
    pub annuity: f64,
    /// Re-bootstrap DV01 and Gamma of the par swap.
    pub risk: RiskReport,
    /// DV01 from shifting the base zero rates instead of the quotes.
    pub zero_shift_dv01: f64,
}

/// Seasoned valuation of the par swap on linear and spline curves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InterpolationComparison {
    /// Fixed rate of the swap (the linear par rate).
    pub fixed_rate: f64,
    /// Valuation on the linear curves.
    pub linear: ValuationResult,
    /// Valuation on the anchored spline curves.
    pub spline: ValuationResult,
    /// `spline clean PV − linear clean PV`.
    pub clean_pv_difference: f64,
    /// Par rate the spline curves imply for the same swap.
    pub spline_par_rate: f64,
}

/// All scenario outputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeskReport {
    /// Per-knot zero rates and discount factors.
    pub curve_table: Vec<CurvePoint>,
    /// Quote repricing on the base curves.
    pub repricing: RepricingReport,
    /// Par rate and risk.
    pub par_risk: ParRisk,
    /// Seasoned valuation on the configured interpolation.
    pub seasoned: ValuationResult,
    /// Linear versus spline seasoned valuation.
    pub comparison: InterpolationComparison,
}

/// A pricing session over one market.
///
/// The base curves are bootstrapped once on construction; every operation
/// reads them and the configuration, nothing is mutated afterwards.
///
/// # Example
///
/// ```rust
/// use parswap::{DeskConfig, SwapDesk};
///
/// let desk = SwapDesk::new(DeskConfig::scenario().unwrap()).unwrap();
/// let comparison = desk.compare_interpolation().unwrap();
/// assert!(comparison.spline.clean_pv > comparison.linear.clean_pv);
/// ```
pub struct SwapDesk {
    config: DeskConfig,
    base: BootstrapResult,
}

impl SwapDesk {
    /// Validates the configuration and bootstraps the base curves.
    pub fn new(config: DeskConfig) -> DeskResult<Self> {
        config.validate()?;
        let base = Self::bootstrapper(&config).bootstrap(&config.quotes, config.spread_bps)?;
        log::info!(
            "Desk ready: {} tenors, {}Y swap, horizon {}Y",
            base.solves.len(),
            config.swap.maturity_years,
            config.horizon_years
        );
        Ok(Self { config, base })
    }

    /// Session configuration.
    pub fn config(&self) -> &DeskConfig {
        &self.config
    }

    /// Base curves.
    pub fn curves(&self) -> &CurvePair {
        &self.base.curves
    }

    /// Base bootstrap with solve diagnostics.
    pub fn bootstrap_result(&self) -> &BootstrapResult {
        &self.base
    }

    /// Per-knot IBOR/discount zero rates and discount factors.
    pub fn curve_table(&self) -> DeskResult<Vec<CurvePoint>> {
        Ok(self.base.curves.table()?)
    }

    /// The configured swap at its par rate on the base curves.
    pub fn par_swap(&self) -> DeskResult<Swap> {
        let par = self.engine(&self.base.curves).par_rate(&self.config.swap)?;
        Ok(Swap::new(self.config.swap, par)?)
    }

    /// Par rate, annuity and DV01/Gamma of the par swap.
    pub fn par_and_risk(&self) -> DeskResult<ParRisk> {
        let swap = self.par_swap()?;
        let engine = self.engine(&self.base.curves);
        let calculator =
            RiskCalculator::new(Self::bootstrapper(&self.config)).with_config(self.config.risk);

        Ok(ParRisk {
            par_rate: swap.fixed_rate,
            annuity: engine.annuity(&swap.spec)?,
            risk: calculator.dv01_and_gamma(&self.config.quotes, self.config.spread_bps, &swap)?,
            zero_shift_dv01: calculator.zero_shift_dv01(
                &self.base.curves,
                self.config.quotes.fixing(),
                &swap,
            )?,
        })
    }

    /// The par swap valued at the configured horizon on the base curves.
    pub fn seasoned_valuation(&self) -> DeskResult<ValuationResult> {
        let swap = self.par_swap()?;
        Ok(self
            .engine(&self.base.curves)
            .value_after(&swap, self.config.horizon_years)?)
    }

    /// Seasoned valuation on linear and anchored spline curves.
    ///
    /// The spline re-interpolates the bootstrapped knots plus a t = 0 knot
    /// at the fixing; it is not bootstrapped separately. Both valuations
    /// use the linear par rate.
    pub fn compare_interpolation(&self) -> DeskResult<InterpolationComparison> {
        let linear_curves = self.base.curves.with_interpolation(InterpolationMethod::Linear)?;
        let spline_curves = linear_curves
            .with_short_end_anchor()?
            .with_interpolation(InterpolationMethod::CubicSpline)?;

        let linear_engine = self.engine(&linear_curves);
        let spline_engine = self.engine(&spline_curves);

        let fixed_rate = linear_engine.par_rate(&self.config.swap)?;
        let swap = Swap::new(self.config.swap, fixed_rate)?;
        let horizon = self.config.horizon_years;

        let linear = linear_engine.value_after(&swap, horizon)?;
        let spline = spline_engine.value_after(&swap, horizon)?;

        Ok(InterpolationComparison {
            fixed_rate,
            linear,
            spline,
            clean_pv_difference: spline.clean_pv - linear.clean_pv,
            spline_par_rate: spline_engine.par_rate(&self.config.swap)?,
        })
    }

    /// Runs every computation.
    pub fn run(&self) -> DeskResult<DeskReport> {
        Ok(DeskReport {
            curve_table: self.curve_table()?,
            repricing: self.base.repricing.clone(),
            par_risk: self.par_and_risk()?,
            seasoned: self.seasoned_valuation()?,
            comparison: self.compare_interpolation()?,
        })
    }

    fn engine<'a>(&self, curves: &'a CurvePair) -> SwapEngine<'a> {
        SwapEngine::new(curves, self.config.quotes.fixing())
    }

    fn bootstrapper(config: &DeskConfig) -> CurveBootstrapper {
        CurveBootstrapper::new(config.swap.trade_date).with_config(config.bootstrap)
    }
}
