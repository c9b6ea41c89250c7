//! Domain types for swap pricing.
//!
//! - [`Date`]: Calendar date for schedule generation and day counts
//! - [`Frequency`]: Payment frequency of a swap leg
//! - [`Schedule`]: Unadjusted accrual periods of a leg

mod date;
mod frequency;
mod schedule;

pub use date::Date;
pub use frequency::Frequency;
pub use schedule::{Period, Schedule};
