//! Unadjusted accrual schedules for swap legs.

use serde::{Deserialize, Serialize};

use super::{Date, Frequency};
use crate::daycounts::DayCountConvention;
use crate::error::{CoreError, CoreResult};

/// One accrual period of a leg.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Period {
    /// Accrual start date.
    pub start: Date,
    /// Accrual end date, also the payment date.
    pub end: Date,
    /// Accrual fraction `τ` between start and end.
    pub accrual: f64,
}

impl Period {
    /// True if `date` falls inside `[start, end)`.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date < self.end
    }
}

/// A regular schedule of accrual periods rolled from a start date.
///
/// Dates are rolled by whole months from the start date without any
/// business-day adjustment, so each end date is `start + k·step` months.
///
/// # Example
///
/// ```rust
/// use parswap_core::daycounts::DayCountConvention;
/// use parswap_core::types::{Date, Frequency, Schedule};
///
/// let trade = Date::from_ymd(2026, 1, 7).unwrap();
/// let float = Schedule::generate(trade, 24, Frequency::SemiAnnual, DayCountConvention::ActActIsda)
///     .unwrap();
///
/// assert_eq!(float.len(), 4);
/// assert_eq!(float.periods()[1].start.to_string(), "2026-07-07");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    frequency: Frequency,
    day_count: DayCountConvention,
    periods: Vec<Period>,
}

impl Schedule {
    /// Generates a schedule covering `term_months` from `start`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidSchedule` if the term is zero or not a whole
    /// number of periods, and `CoreError::InvalidDate` if a rolled date is out
    /// of range.
    pub fn generate(
        start: Date,
        term_months: u32,
        frequency: Frequency,
        day_count: DayCountConvention,
    ) -> CoreResult<Self> {
        if term_months == 0 {
            return Err(CoreError::invalid_schedule("term must be positive"));
        }
        let count = frequency.periods_in(term_months).ok_or_else(|| {
            CoreError::invalid_schedule(format!(
                "{term_months} months is not a whole number of {frequency} periods"
            ))
        })?;
        let step = frequency.months_per_period() as i32;
        let term = i32::try_from(term_months).map_err(|_| {
            CoreError::invalid_schedule(format!("term of {term_months} months is out of range"))
        })?;
        // Fails before allocating when the maturity is past the last representable date
        start.add_months(term)?;

        let mut periods = Vec::with_capacity(count as usize);
        let mut period_start = start;
        for k in 1..=count as i32 {
            // Roll from the anchor so month-end clamping never accumulates
            let period_end = start.add_months(k * step)?;
            periods.push(Period {
                start: period_start,
                end: period_end,
                accrual: day_count.year_fraction(period_start, period_end),
            });
            period_start = period_end;
        }

        Ok(Self {
            frequency,
            day_count,
            periods,
        })
    }

    /// Returns the periods in date order.
    #[must_use]
    pub fn periods(&self) -> &[Period] {
        &self.periods
    }

    /// Number of periods.
    #[must_use]
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    /// True if the schedule has no periods.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// Payment frequency.
    #[must_use]
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Accrual day count.
    #[must_use]
    pub fn day_count(&self) -> DayCountConvention {
        self.day_count
    }

    /// Final payment date.
    #[must_use]
    pub fn end_date(&self) -> Option<Date> {
        self.periods.last().map(|p| p.end)
    }

    /// The period accruing on `date`, with its index.
    #[must_use]
    pub fn current_period(&self, date: Date) -> Option<(usize, &Period)> {
        self.periods.iter().enumerate().find(|(_, p)| p.contains(date))
    }
}
