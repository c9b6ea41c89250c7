//! Day count conventions for swap accrual and discounting.
//!
//! Day count conventions turn a pair of dates into a year fraction. The
//! pricing kernel uses them for two things: the accrual fraction `τ` of
//! each coupon period and the time-to-payment fed to the curves.
//!
//! # Supported Conventions
//!
//! - [`ActActIsda`]: Actual/Actual ISDA, splitting the interval by calendar year
//! - [`Act365Fixed`]: Actual/365 Fixed
//!
//! # Usage
//!
//! ```rust
//! use parswap_core::daycounts::{DayCount, DayCountConvention};
//! use parswap_core::types::Date;
//!
//! let dc = DayCountConvention::ActActIsda.to_day_count();
//! let start = Date::from_ymd(2026, 1, 7).unwrap();
//! let end = Date::from_ymd(2027, 1, 7).unwrap();
//!
//! assert_eq!(dc.day_count(start, end), 365);
//! assert!((dc.year_fraction(start, end) - 1.0).abs() < 1e-12);
//! ```

mod act365;
mod actact;

pub use act365::Act365Fixed;
pub use actact::ActActIsda;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::Date;

/// Trait for day count conventions.
///
/// Implementations must be thread-safe (`Send + Sync`) so schedules and
/// engines holding a boxed convention can be shared across rayon workers.
pub trait DayCount: Send + Sync {
    /// Returns the market name of the convention (e.g. "ACT/ACT ISDA").
    fn name(&self) -> &'static str;

    /// Calculates the year fraction between two dates.
    ///
    /// Negative if `end` is before `start`.
    fn year_fraction(&self, start: Date, end: Date) -> f64;

    /// Calculates the day count between two dates.
    fn day_count(&self, start: Date, end: Date) -> i64;
}

/// Runtime selection of a day count convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DayCountConvention {
    /// Actual/Actual ISDA
    #[default]
    ActActIsda,

    /// Actual/365 Fixed
    Act365Fixed,
}

impl DayCountConvention {
    /// Creates a boxed day count implementation.
    #[must_use]
    pub fn to_day_count(&self) -> Box<dyn DayCount> {
        match self {
            DayCountConvention::ActActIsda => Box::new(ActActIsda),
            DayCountConvention::Act365Fixed => Box::new(Act365Fixed),
        }
    }

    /// Year fraction under this convention without boxing.
    #[must_use]
    pub fn year_fraction(&self, start: Date, end: Date) -> f64 {
        match self {
            DayCountConvention::ActActIsda => ActActIsda.year_fraction(start, end),
            DayCountConvention::Act365Fixed => Act365Fixed.year_fraction(start, end),
        }
    }

    /// Returns the market name of the convention.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            DayCountConvention::ActActIsda => "ACT/ACT ISDA",
            DayCountConvention::Act365Fixed => "ACT/365F",
        }
    }

    /// Returns all available day count conventions.
    #[must_use]
    pub fn all() -> &'static [DayCountConvention] {
        &[DayCountConvention::ActActIsda, DayCountConvention::Act365Fixed]
    }
}

impl std::fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for DayCountConvention {
    type Err = CoreError;

    /// Accepts market names ("ACT/ACT ISDA", "ACT/365F") and enum-style
    /// names ("ActActIsda"), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();

        match normalized.as_str() {
            "ACT/ACT" | "ACT/ACT ISDA" | "ACTUAL/ACTUAL" | "ACTUAL/ACTUAL ISDA" | "ACTACTISDA"
            | "ACTACT" => Ok(DayCountConvention::ActActIsda),

            "ACT/365" | "ACT/365F" | "ACT/365 FIXED" | "ACTUAL/365" | "ACT365FIXED" | "ACT365" => {
                Ok(DayCountConvention::Act365Fixed)
            }

            _ => Err(CoreError::unknown_convention(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_convention_enum() {
        let start = Date::from_ymd(2026, 1, 7).unwrap();
        let end = Date::from_ymd(2026, 7, 7).unwrap();

        for convention in DayCountConvention::all() {
            let dc = convention.to_day_count();
            assert_eq!(dc.name(), convention.name());
            assert_eq!(dc.day_count(start, end), 181);
            assert_relative_eq!(
                dc.year_fraction(start, end),
                convention.year_fraction(start, end),
                epsilon = 1e-15
            );
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "ACT/ACT ISDA".parse::<DayCountConvention>().unwrap(),
            DayCountConvention::ActActIsda
        );
        assert_eq!(
            "act/365f".parse::<DayCountConvention>().unwrap(),
            DayCountConvention::Act365Fixed
        );
        assert!(matches!(
            "30/360".parse::<DayCountConvention>(),
            Err(CoreError::UnknownConvention { .. })
        ));
    }

    #[test]
    fn test_display_round_trip() {
        for convention in DayCountConvention::all() {
            let parsed: DayCountConvention = convention.to_string().parse().unwrap();
            assert_eq!(parsed, *convention);
        }
    }
}
