//! IBOR projection curve paired with a spread discount curve.

use serde::{Deserialize, Serialize};

use parswap_core::daycounts::DayCountConvention;
use parswap_core::Date;

use super::ZeroCurve;
use crate::error::CurveResult;
use crate::interpolation::InterpolationMethod;

/// One row of the curve table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Knot time in years.
    pub time: f64,
    /// IBOR zero rate.
    pub ibor_zero: f64,
    /// Discount zero rate (IBOR + spread).
    pub discount_zero: f64,
    /// IBOR discount factor.
    pub ibor_df: f64,
    /// Discount curve discount factor.
    pub discount_df: f64,
}

/// Dual-curve environment: IBOR projection plus discounting at a constant spread.
///
/// Every discount knot equals the IBOR knot plus `spread`, so for any query
/// `DF_ibor(t) = DF_disc(t)·exp(spread·t)`. Forwards are projected from the
/// IBOR side and cash flows discounted on the discount side.
///
/// Times are year fractions under the pair's day count, measured from the
/// caller's valuation date; the curves themselves are never re-anchored.
#[derive(Debug, Clone)]
pub struct CurvePair {
    reference_date: Date,
    day_count: DayCountConvention,
    ibor: ZeroCurve,
    discount: ZeroCurve,
    spread: f64,
}

impl CurvePair {
    /// Builds the pair from an IBOR curve and a discount spread (decimal).
    pub fn from_ibor(reference_date: Date, ibor: ZeroCurve, spread: f64) -> CurveResult<Self> {
        let discount = ibor.shifted(spread)?;
        Ok(Self {
            reference_date,
            day_count: DayCountConvention::ActActIsda,
            ibor,
            discount,
            spread,
        })
    }

    /// Builds the pair from IBOR `(time, zero)` knots.
    pub fn from_knots(
        reference_date: Date,
        knots: Vec<(f64, f64)>,
        spread: f64,
        method: InterpolationMethod,
    ) -> CurveResult<Self> {
        Self::from_ibor(reference_date, ZeroCurve::new(knots, method)?, spread)
    }

    /// Sets the day count used to turn dates into curve times.
    #[must_use]
    pub fn with_day_count(mut self, day_count: DayCountConvention) -> Self {
        self.day_count = day_count;
        self
    }

    /// Curve anchor date (the trade date the knots are measured from).
    #[must_use]
    pub fn reference_date(&self) -> Date {
        self.reference_date
    }

    /// Day count for curve times.
    #[must_use]
    pub fn day_count(&self) -> DayCountConvention {
        self.day_count
    }

    /// IBOR projection curve.
    #[must_use]
    pub fn ibor(&self) -> &ZeroCurve {
        &self.ibor
    }

    /// Discount curve.
    #[must_use]
    pub fn discount(&self) -> &ZeroCurve {
        &self.discount
    }

    /// Constant discount spread in decimal (-0.0038 = -38bp).
    #[must_use]
    pub fn spread(&self) -> f64 {
        self.spread
    }

    /// Interpolation shared by both curves.
    #[must_use]
    pub fn interpolation(&self) -> InterpolationMethod {
        self.ibor.interpolation()
    }

    /// Curve time between two dates.
    #[must_use]
    pub fn time_between(&self, from: Date, to: Date) -> f64 {
        self.day_count.year_fraction(from, to)
    }

    /// Discount factor on the discount curve.
    pub fn discount_factor(&self, t: f64) -> CurveResult<f64> {
        self.discount.discount_factor(t)
    }

    /// IBOR discount factor derived from the discount curve.
    pub fn ibor_discount_factor(&self, t: f64) -> CurveResult<f64> {
        Ok(self.discount.discount_factor(t)? * (self.spread * t).exp())
    }

    /// IBOR forward for a period from `t_start` to `t_end` with accrual `tau`.
    ///
    /// `(DF_ibor(t_start)/DF_ibor(t_end) - 1)/tau`.
    pub fn ibor_forward(&self, t_start: f64, t_end: f64, tau: f64) -> CurveResult<f64> {
        let df_start = self.ibor_discount_factor(t_start)?;
        let df_end = self.ibor_discount_factor(t_end)?;
        Ok((df_start / df_end - 1.0) / tau)
    }

    /// The same knots under another interpolation method.
    pub fn with_interpolation(&self, method: InterpolationMethod) -> CurveResult<Self> {
        self.rebuild(self.ibor.with_interpolation(method)?)
    }

    /// Adds a knot at t = 0 carrying the first knot's rate.
    ///
    /// Pins the short end flat at the fixing so a spline has a natural
    /// boundary at the trade date rather than at the first knot.
    pub fn with_short_end_anchor(&self) -> CurveResult<Self> {
        let times = self.ibor.times();
        if times[0] <= 0.0 {
            return Ok(self.clone());
        }
        let anchored = self.ibor.with_point(0.0, self.ibor.rates()[0])?;
        self.rebuild(anchored)
    }

    /// Every zero rate on both curves shifted by `bps` basis points.
    pub fn shifted(&self, bps: f64) -> CurveResult<Self> {
        self.rebuild(self.ibor.shifted(bps / 10_000.0)?)
    }

    /// Per-knot zero rates and discount factors of both curves.
    pub fn table(&self) -> CurveResult<Vec<CurvePoint>> {
        self.ibor
            .times()
            .iter()
            .map(|&time| {
                Ok(CurvePoint {
                    time,
                    ibor_zero: self.ibor.zero_rate(time)?,
                    discount_zero: self.discount.zero_rate(time)?,
                    ibor_df: self.ibor_discount_factor(time)?,
                    discount_df: self.discount_factor(time)?,
                })
            })
            .collect()
    }

    fn rebuild(&self, ibor: ZeroCurve) -> CurveResult<Self> {
        Ok(Self::from_ibor(self.reference_date, ibor, self.spread)?.with_day_count(self.day_count))
    }
}
