//! Vanilla swap definition.

use serde::{Deserialize, Serialize};

use parswap_core::Date;
use parswap_curves::instruments::{LegConventions, SwapLegs};

use crate::error::{PricingError, PricingResult};

/// Terms of a spot-starting receive-fixed / pay-float swap.
///
/// The fixed rate is kept out of the terms so they can be priced at par
/// and then valued at an agreed fixed rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwapSpec {
    /// Trade (and effective) date.
    pub trade_date: Date,
    /// Maturity in whole years.
    pub maturity_years: u32,
    /// Notional amount.
    pub notional: f64,
    /// Leg frequencies and day count.
    #[serde(flatten)]
    pub conventions: LegConventions,
}

impl SwapSpec {
    /// Creates terms with annual fixed, semi-annual floating, Act/Act ISDA.
    #[must_use]
    pub fn new(trade_date: Date, maturity_years: u32, notional: f64) -> Self {
        Self {
            trade_date,
            maturity_years,
            notional,
            conventions: LegConventions::default(),
        }
    }

    /// Sets the leg conventions.
    #[must_use]
    pub fn with_conventions(mut self, conventions: LegConventions) -> Self {
        self.conventions = conventions;
        self
    }

    /// Checks maturity, notional and leg conventions.
    pub fn validate(&self) -> PricingResult<()> {
        self.conventions.validate()?;
        if self.maturity_years == 0 {
            return Err(PricingError::invalid_swap("maturity must be at least 1Y"));
        }
        if !(self.notional.is_finite() && self.notional > 0.0) {
            return Err(PricingError::invalid_swap(format!(
                "notional must be positive, got {}",
                self.notional
            )));
        }
        Ok(())
    }

    /// Generates the fixed and floating schedules.
    pub fn legs(&self) -> PricingResult<SwapLegs> {
        self.validate()?;
        Ok(SwapLegs::generate(
            self.trade_date,
            self.maturity_years,
            self.conventions,
        )?)
    }

    /// Final payment date.
    pub fn maturity_date(&self) -> PricingResult<Date> {
        let years = i32::try_from(self.maturity_years)
            .map_err(|_| PricingError::invalid_swap("maturity out of range"))?;
        Ok(self.trade_date.add_years(years)?)
    }

    /// Date `years` after the trade date.
    ///
    /// Whole months are rolled on the calendar; the remaining fraction of a
    /// month becomes days at 365 per year (0.25 is exactly 3 months).
    pub fn horizon_date(&self, years: f64) -> PricingResult<Date> {
        if !(years.is_finite() && years >= 0.0) {
            return Err(PricingError::invalid_input(format!(
                "horizon must be a non-negative number of years, got {years}"
            )));
        }
        let total_months = years * 12.0;
        let months = (total_months + 1e-9).floor();
        let days = ((total_months - months).max(0.0) / 12.0 * 365.0).round();

        let months = i32::try_from(months as i64)
            .map_err(|_| PricingError::invalid_input("horizon out of range"))?;
        Ok(self.trade_date.add_months(months)?.add_days(days as i64))
    }
}

/// A swap at an agreed fixed rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Swap {
    /// Swap terms.
    pub spec: SwapSpec,
    /// Fixed rate received (decimal).
    pub fixed_rate: f64,
}

impl Swap {
    /// Creates a swap, validating its terms.
    pub fn new(spec: SwapSpec, fixed_rate: f64) -> PricingResult<Self> {
        spec.validate()?;
        if !fixed_rate.is_finite() {
            return Err(PricingError::invalid_swap("fixed rate must be finite"));
        }
        Ok(Self { spec, fixed_rate })
    }

    /// Notional amount.
    #[must_use]
    pub fn notional(&self) -> f64 {
        self.spec.notional
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parswap_core::types::Frequency;
    use parswap_curves::error::CurveError;

    fn spec() -> SwapSpec {
        SwapSpec::new(Date::from_ymd(2026, 1, 7).unwrap(), 9, 1_000_000.0)
    }

    #[test]
    fn test_horizon_maps_to_months() {
        let spec = spec();
        assert_eq!(spec.horizon_date(0.25).unwrap(), Date::from_ymd(2026, 4, 7).unwrap());
        assert_eq!(spec.horizon_date(0.0).unwrap(), spec.trade_date);
        assert_eq!(spec.horizon_date(1.0).unwrap(), Date::from_ymd(2027, 1, 7).unwrap());
        assert_eq!(spec.horizon_date(0.5).unwrap(), Date::from_ymd(2026, 7, 7).unwrap());
        assert!(spec.horizon_date(-0.1).is_err());
        assert!(spec.horizon_date(f64::NAN).is_err());
    }

    #[test]
    fn test_horizon_remainder_in_days() {
        // 1/24 year = half a month ~ 15 days
        let date = spec().horizon_date(1.0 / 24.0).unwrap();
        assert_eq!(date, Date::from_ymd(2026, 1, 22).unwrap());
    }

    #[test]
    fn test_legs_and_maturity() {
        let spec = spec();
        let legs = spec.legs().unwrap();
        assert_eq!(legs.fixed().len(), 9);
        assert_eq!(legs.float().len(), 18);
        assert_eq!(spec.maturity_date().unwrap(), Date::from_ymd(2035, 1, 7).unwrap());
        assert_eq!(legs.fixed().end_date(), Some(spec.maturity_date().unwrap()));
    }

    #[test]
    fn test_maturity_date_out_of_range() {
        let far = SwapSpec::new(Date::from_ymd(2026, 1, 7).unwrap(), 200_000_000, 1e6);
        assert!(matches!(far.maturity_date(), Err(PricingError::Core(_))));
        assert!(far.legs().is_err());
    }

    #[test]
    fn test_validation() {
        let mut bad = spec();
        bad.notional = 0.0;
        assert!(bad.validate().is_err());
        assert!(Swap::new(bad, 0.03).is_err());

        let mut short = spec();
        short.maturity_years = 0;
        assert!(short.legs().is_err());

        assert!(Swap::new(spec(), f64::NAN).is_err());
    }

    #[test]
    fn test_rejects_non_standard_legs() {
        let mut semi_annual_fixed = spec();
        semi_annual_fixed.conventions.fixed_frequency = Frequency::SemiAnnual;
        assert!(matches!(
            semi_annual_fixed.validate(),
            Err(PricingError::Curve(CurveError::InvalidValue { .. }))
        ));

        let mut annual_float = spec();
        annual_float.conventions.float_frequency = Frequency::Annual;
        assert!(annual_float.legs().is_err());
        assert!(Swap::new(annual_float, 0.03).is_err());
    }

    #[test]
    fn test_serde_flattens_conventions() {
        let json = serde_json::to_value(spec()).unwrap();
        assert_eq!(json["fixed_frequency"], "Annual");
        assert_eq!(json["float_frequency"], "SemiAnnual");
        let back: SwapSpec = serde_json::from_value(json).unwrap();
        assert_eq!(back, spec());
    }
}
