//! Actual/Actual ISDA day count.

use super::DayCount;
use crate::types::Date;

/// Actual/Actual ISDA day count convention.
///
/// The interval is split at each January 1st; days falling in a leap year
/// count 1/366 and the rest 1/365.
///
/// # Formula
///
/// $$\text{Year Fraction} = \frac{\text{Days in non-leap years}}{365} + \frac{\text{Days in leap years}}{366}$$
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActActIsda;

impl DayCount for ActActIsda {
    fn name(&self) -> &'static str {
        "ACT/ACT ISDA"
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        if start == end {
            return 0.0;
        }
        if end < start {
            return -self.year_fraction(end, start);
        }

        let mut total = 0.0;
        let mut current = start;

        while current.year() < end.year() {
            let days = current.days_to_year_end();
            total += days as f64 / f64::from(current.days_in_year());
            current = current.add_days(days);
        }

        let days = current.days_between(&end);
        total + days as f64 / f64::from(current.days_in_year())
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}
