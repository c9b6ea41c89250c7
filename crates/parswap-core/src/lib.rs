//! # Parswap Core
//!
//! Foundation types for the Parswap dual-curve swap pricing kernel.
//!
//! This crate provides the building blocks shared by every other crate:
//!
//! - **Types**: [`Date`], payment [`Frequency`] and accrual [`Schedule`]s
//! - **Day Count Conventions**: Actual/Actual ISDA and Actual/365 Fixed
//!   year fractions
//! - **Errors**: [`CoreError`] for invalid dates and schedule arithmetic
//!
//! ## Example
//!
//! ```rust
//! use parswap_core::prelude::*;
//!
//! let start = Date::from_ymd(2026, 1, 7).unwrap();
//! let end = start.add_months(3).unwrap();
//!
//! let yf = ActActIsda.year_fraction(start, end);
//! assert!((yf - 90.0 / 365.0).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::return_self_not_must_use)]

pub mod daycounts;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::daycounts::{Act365Fixed, ActActIsda, DayCount, DayCountConvention};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{Date, Frequency, Period, Schedule};
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use types::{Date, Frequency, Period, Schedule};
