//! Payment frequency of a swap leg.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Payment frequency of a swap leg.
///
/// Only the two frequencies of the quoted instruments exist: the fixed leg
/// pays annually and the floating leg pays against the 6M index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Frequency {
    /// One payment per year (fixed leg convention)
    Annual,
    /// Two payments per year (floating leg against a 6M index)
    #[default]
    SemiAnnual,
}

impl Frequency {
    /// Returns the number of periods per year.
    #[must_use]
    pub fn periods_per_year(&self) -> u32 {
        match self {
            Frequency::Annual => 1,
            Frequency::SemiAnnual => 2,
        }
    }

    /// Returns the number of months per period.
    #[must_use]
    pub fn months_per_period(&self) -> u32 {
        12 / self.periods_per_year()
    }

    /// Nominal length of one period in years.
    #[must_use]
    pub fn period_length(&self) -> f64 {
        1.0 / f64::from(self.periods_per_year())
    }

    /// Number of whole periods in a term of `months`, if the term divides evenly.
    #[must_use]
    pub fn periods_in(&self, months: u32) -> Option<u32> {
        let step = self.months_per_period();
        (months % step == 0).then_some(months / step)
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Frequency::Annual => "Annual",
            Frequency::SemiAnnual => "Semi-Annual",
        };
        write!(f, "{name}")
    }
}
