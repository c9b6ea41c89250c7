//! Fixed and floating leg schedules and their present values.
//!
//! Remaining times are measured from the valuation date, so the same legs
//! price a swap at inception and after it has seasoned.

use serde::{Deserialize, Serialize};

use parswap_core::daycounts::DayCountConvention;
use parswap_core::types::{Frequency, Period, Schedule};
use parswap_core::Date;

use crate::curves::CurvePair;
use crate::error::{CurveError, CurveResult};

/// Leg frequencies and accrual day count of a vanilla swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegConventions {
    /// Fixed leg payment frequency.
    pub fixed_frequency: Frequency,
    /// Floating leg payment frequency (and index tenor).
    pub float_frequency: Frequency,
    /// Accrual and curve-time day count.
    pub day_count: DayCountConvention,
}

impl Default for LegConventions {
    fn default() -> Self {
        Self {
            fixed_frequency: Frequency::Annual,
            float_frequency: Frequency::SemiAnnual,
            day_count: DayCountConvention::ActActIsda,
        }
    }
}

impl LegConventions {
    /// Checks the legs match the quoted instruments.
    ///
    /// The first floating period pays the 6M fixing and the bootstrap pins
    /// that fixing at the 6M knot, so the floating leg must be semi-annual
    /// and the fixed leg annual.
    pub fn validate(&self) -> CurveResult<()> {
        if self.fixed_frequency != Frequency::Annual {
            return Err(CurveError::invalid_value(format!(
                "fixed leg must pay annually, got {}",
                self.fixed_frequency
            )));
        }
        if self.float_frequency != Frequency::SemiAnnual {
            return Err(CurveError::invalid_value(format!(
                "floating leg must pay semi-annually against the 6M fixing, got {}",
                self.float_frequency
            )));
        }
        Ok(())
    }
}

/// Fixed and floating schedules of a spot-starting swap.
///
/// All values are per unit notional. The first floating period pays the
/// known fixing; later periods pay the IBOR forward implied by the pair.
#[derive(Debug, Clone, PartialEq)]
pub struct SwapLegs {
    fixed: Schedule,
    float: Schedule,
}

impl SwapLegs {
    /// Generates both schedules from `start` for `term_years`.
    pub fn generate(
        start: Date,
        term_years: u32,
        conventions: LegConventions,
    ) -> CurveResult<Self> {
        let months = term_years.checked_mul(12).ok_or_else(|| {
            CurveError::invalid_value(format!("term of {term_years} years is out of range"))
        })?;
        Ok(Self {
            fixed: Schedule::generate(
                start,
                months,
                conventions.fixed_frequency,
                conventions.day_count,
            )?,
            float: Schedule::generate(
                start,
                months,
                conventions.float_frequency,
                conventions.day_count,
            )?,
        })
    }

    /// Fixed leg schedule.
    #[must_use]
    pub fn fixed(&self) -> &Schedule {
        &self.fixed
    }

    /// Floating leg schedule.
    #[must_use]
    pub fn float(&self) -> &Schedule {
        &self.float
    }

    /// `Σ τ_i·DF_disc(t_i)` over fixed periods paid after `valuation`.
    pub fn annuity(&self, curves: &CurvePair, valuation: Date) -> CurveResult<f64> {
        unpaid(&self.fixed, valuation).try_fold(0.0, |acc, (_, period)| {
            let t = curves.time_between(valuation, period.end);
            Ok(acc + period.accrual * curves.discount_factor(t)?)
        })
    }

    /// `rate × annuity`.
    pub fn fixed_leg_pv(&self, rate: f64, curves: &CurvePair, valuation: Date) -> CurveResult<f64> {
        Ok(rate * self.annuity(curves, valuation)?)
    }

    /// `Σ rate_i·τ_i·DF_disc(t_i)` over floating periods paid after `valuation`.
    pub fn float_leg_pv(
        &self,
        fixing: f64,
        curves: &CurvePair,
        valuation: Date,
    ) -> CurveResult<f64> {
        unpaid(&self.float, valuation).try_fold(0.0, |acc, (index, period)| {
            let rate = self.float_rate(index, fixing, curves, valuation)?;
            let t = curves.time_between(valuation, period.end);
            Ok(acc + rate * period.accrual * curves.discount_factor(t)?)
        })
    }

    /// Floating rate paid in period `index` seen from `valuation`.
    ///
    /// Period 0 pays the fixing. A period that starts after the valuation
    /// date pays the forward over its remaining times; one that has already
    /// started pays the forward projected from the curve anchor date.
    pub fn float_rate(
        &self,
        index: usize,
        fixing: f64,
        curves: &CurvePair,
        valuation: Date,
    ) -> CurveResult<f64> {
        if index == 0 {
            return Ok(fixing);
        }
        let period = self.float.periods().get(index).ok_or_else(|| {
            CurveError::invalid_value(format!("no floating period {index}"))
        })?;
        let origin = if period.start >= valuation {
            valuation
        } else {
            curves.reference_date()
        };
        curves.ibor_forward(
            curves.time_between(origin, period.start),
            curves.time_between(origin, period.end),
            period.accrual,
        )
    }

    /// Par rate `float PV / annuity` seen from `valuation`.
    pub fn par_rate(&self, fixing: f64, curves: &CurvePair, valuation: Date) -> CurveResult<f64> {
        let annuity = self.annuity(curves, valuation)?;
        if annuity <= 0.0 {
            return Err(CurveError::invalid_value("no fixed cash flows remain"));
        }
        Ok(self.float_leg_pv(fixing, curves, valuation)? / annuity)
    }

    /// Par condition `float PV − rate × annuity` at the curve anchor date.
    pub fn par_residual(&self, rate: f64, fixing: f64, curves: &CurvePair) -> CurveResult<f64> {
        let start = curves.reference_date();
        Ok(self.float_leg_pv(fixing, curves, start)? - self.fixed_leg_pv(rate, curves, start)?)
    }
}

/// Periods whose payment date is after `valuation`, with their index.
fn unpaid(schedule: &Schedule, valuation: Date) -> impl Iterator<Item = (usize, &Period)> {
    schedule
        .periods()
        .iter()
        .enumerate()
        .filter(move |(_, p)| p.end > valuation)
}
