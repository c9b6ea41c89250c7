//! Actual/365 Fixed day count.

use super::DayCount;
use crate::types::Date;

/// Actual/365 Fixed day count convention.
///
/// $$\text{Year Fraction} = \frac{\text{Actual Days}}{365}$$
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act365Fixed;

impl DayCount for Act365Fixed {
    fn name(&self) -> &'static str {
        "ACT/365F"
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        start.days_between(&end) as f64 / 365.0
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_act365_fixed_ignores_leap_day() {
        let start = Date::from_ymd(2028, 1, 1).unwrap();
        let end = Date::from_ymd(2029, 1, 1).unwrap();
        assert_eq!(Act365Fixed.day_count(start, end), 366);
        assert_relative_eq!(Act365Fixed.year_fraction(start, end), 366.0 / 365.0);
    }
}
