//! Swap valuation on a curve pair.
//!
//! This module provides the [`SwapEngine`], which prices a receive-fixed /
//! pay-float swap at inception and values it on a later date against the
//! same curves.

use serde::{Deserialize, Serialize};

use parswap_core::types::Schedule;
use parswap_core::Date;
use parswap_curves::curves::CurvePair;
use parswap_curves::instruments::SwapLegs;

use crate::error::{PricingError, PricingResult};
use crate::swap::{Swap, SwapSpec};

/// Value and accrual of one leg on a valuation date.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LegValuation {
    /// Present value of the unpaid cash flows.
    pub pv: f64,
    /// Rate of the period running on the valuation date (0 if none).
    pub current_rate: f64,
    /// Elapsed year fraction of the running period.
    pub accrual_fraction: f64,
    /// `current_rate × notional × accrual_fraction`.
    pub accrued: f64,
}

/// Seasoned valuation of a receiver swap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValuationResult {
    /// Date the swap is valued on.
    pub valuation_date: Date,
    /// Fixed (received) leg.
    pub fixed: LegValuation,
    /// Floating (paid) leg.
    pub float: LegValuation,
    /// `fixed PV − float PV`.
    pub dirty_pv: f64,
    /// `dirty PV − fixed accrued + float accrued`.
    pub clean_pv: f64,
}

impl ValuationResult {
    /// Fixed leg PV.
    #[must_use]
    pub fn fixed_leg_pv(&self) -> f64 {
        self.fixed.pv
    }

    /// Floating leg PV.
    #[must_use]
    pub fn float_leg_pv(&self) -> f64 {
        self.float.pv
    }

    /// Accrued fixed interest.
    #[must_use]
    pub fn fixed_accrued(&self) -> f64 {
        self.fixed.accrued
    }

    /// Accrued floating interest.
    #[must_use]
    pub fn float_accrued(&self) -> f64 {
        self.float.accrued
    }
}

/// Prices swaps on a dual-curve pair.
///
/// The first floating period of every swap pays `fixing`; later periods pay
/// the IBOR forward. Swaps must start on the curve anchor date.
///
/// # Example
///
/// ```rust
/// use parswap_core::Date;
/// use parswap_curves::curves::CurvePair;
/// use parswap_curves::interpolation::InterpolationMethod;
/// use parswap_pricing::{Swap, SwapEngine, SwapSpec};
///
/// let trade = Date::from_ymd(2026, 1, 7).unwrap();
/// let curves = CurvePair::from_knots(
///     trade,
///     vec![(0.5, 0.0411), (1.0, 0.0408), (10.0, 0.0302)],
///     -0.0038,
///     InterpolationMethod::Linear,
/// )
/// .unwrap();
///
/// let engine = SwapEngine::new(&curves, 0.0411);
/// let spec = SwapSpec::new(trade, 9, 1_000_000.0);
/// let par = engine.par_rate(&spec).unwrap();
///
/// let swap = Swap::new(spec, par).unwrap();
/// assert!(engine.price(&swap).unwrap().abs() < 1e-6);
/// ```
pub struct SwapEngine<'a> {
    curves: &'a CurvePair,
    fixing: f64,
}

impl<'a> SwapEngine<'a> {
    /// Creates an engine on `curves` with the known first-period fixing.
    pub fn new(curves: &'a CurvePair, fixing: f64) -> Self {
        Self { curves, fixing }
    }

    /// The curves priced against.
    pub fn curves(&self) -> &CurvePair {
        self.curves
    }

    /// The first-period fixing.
    pub fn fixing(&self) -> f64 {
        self.fixing
    }

    /// Fixed rate that prices the swap to zero at inception.
    pub fn par_rate(&self, spec: &SwapSpec) -> PricingResult<f64> {
        let legs = self.legs(spec)?;
        Ok(legs.par_rate(self.fixing, self.curves, spec.trade_date)?)
    }

    /// `Σ τ_i·DF_disc(t_i)` of the fixed leg at inception, per unit notional.
    pub fn annuity(&self, spec: &SwapSpec) -> PricingResult<f64> {
        let legs = self.legs(spec)?;
        Ok(legs.annuity(self.curves, spec.trade_date)?)
    }

    /// Receiver PV at inception: `notional × (fixed PV − float PV)`.
    pub fn price(&self, swap: &Swap) -> PricingResult<f64> {
        Ok(self.value_at(swap, swap.spec.trade_date)?.dirty_pv)
    }

    /// Values the swap on `valuation_date`.
    ///
    /// Cash flows paid on or before the date are dropped and the rest are
    /// discounted over their remaining time on the unchanged curves. The
    /// running periods accrue from their start to the valuation date.
    pub fn value_at(&self, swap: &Swap, valuation_date: Date) -> PricingResult<ValuationResult> {
        let curve_date = self.curves.reference_date();
        if valuation_date < curve_date {
            return Err(PricingError::ValuationBeforeCurve {
                valuation: valuation_date,
                curve_date,
            });
        }

        let legs = self.legs(&swap.spec)?;
        let notional = swap.notional();

        let fixed = LegValuation {
            pv: notional * legs.fixed_leg_pv(swap.fixed_rate, self.curves, valuation_date)?,
            ..self.accrual(legs.fixed(), valuation_date, notional, |_| Ok(swap.fixed_rate))?
        };
        let float = LegValuation {
            pv: notional * legs.float_leg_pv(self.fixing, self.curves, valuation_date)?,
            ..self.accrual(legs.float(), valuation_date, notional, |index| {
                Ok(legs.float_rate(index, self.fixing, self.curves, valuation_date)?)
            })?
        };

        let dirty_pv = fixed.pv - float.pv;
        let clean_pv = dirty_pv - fixed.accrued + float.accrued;

        log::debug!(
            "Valued {}Y swap on {valuation_date}: dirty {dirty_pv:.4}, clean {clean_pv:.4}",
            swap.spec.maturity_years
        );

        Ok(ValuationResult {
            valuation_date,
            fixed,
            float,
            dirty_pv,
            clean_pv,
        })
    }

    /// Values the swap `years` after its trade date.
    pub fn value_after(&self, swap: &Swap, years: f64) -> PricingResult<ValuationResult> {
        self.value_at(swap, swap.spec.horizon_date(years)?)
    }

    fn legs(&self, spec: &SwapSpec) -> PricingResult<SwapLegs> {
        if spec.trade_date != self.curves.reference_date() {
            return Err(PricingError::CurveDateMismatch {
                trade_date: spec.trade_date,
                curve_date: self.curves.reference_date(),
            });
        }
        spec.legs()
    }

    fn accrual(
        &self,
        schedule: &Schedule,
        date: Date,
        notional: f64,
        rate: impl Fn(usize) -> PricingResult<f64>,
    ) -> PricingResult<LegValuation> {
        let Some((index, period)) = schedule.current_period(date) else {
            return Ok(LegValuation::default());
        };
        let current_rate = rate(index)?;
        let accrual_fraction = schedule.day_count().year_fraction(period.start, date);
        Ok(LegValuation {
            pv: 0.0,
            current_rate,
            accrual_fraction,
            accrued: current_rate * notional * accrual_fraction,
        })
    }
}
