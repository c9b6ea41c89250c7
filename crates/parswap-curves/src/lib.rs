//! # Parswap Curves
//!
//! Zero curves and dual-curve bootstrapping.
//!
//! This crate provides:
//!
//! - **Curves**: [`ZeroCurve`](curves::ZeroCurve) on continuously compounded
//!   zero rates and [`CurvePair`](curves::CurvePair), an IBOR projection
//!   curve with a discount curve at a constant spread
//! - **Instruments**: [`SwapLegs`](instruments::SwapLegs), the fixed and
//!   floating leg pricer shared by calibration and valuation
//! - **Bootstrap**: [`CurveBootstrapper`](bootstrap::CurveBootstrapper),
//!   solving one zero rate per par quote with an injectable root finder
//! - **Repricing**: a report of every quote repriced on the finished curves
//!
//! ## Example
//!
//! ```rust
//! use parswap_curves::prelude::*;
//! use parswap_core::Date;
//!
//! let trade = Date::from_ymd(2026, 1, 7).unwrap();
//! let result = CurveBootstrapper::new(trade)
//!     .bootstrap(&MarketQuotes::sample(), -38.0)
//!     .unwrap();
//!
//! for point in result.curves.table().unwrap() {
//!     assert!(point.ibor_df < 1.0);
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::neg_cmp_op_on_partial_ord)]
#![allow(clippy::unreadable_literal)]

pub mod bootstrap;
pub mod curves;
pub mod error;
pub mod instruments;
pub mod interpolation;
pub mod quotes;
pub mod repricing;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bootstrap::{BootstrapConfig, CurveBootstrapper};
    pub use crate::curves::{CurvePair, CurvePoint, ZeroCurve};
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::instruments::{LegConventions, SwapLegs};
    pub use crate::interpolation::InterpolationMethod;
    pub use crate::quotes::{MarketQuotes, ParQuote};
    pub use crate::repricing::{BootstrapResult, RepricingCheck, RepricingReport, TenorSolve};
}

pub use error::{CurveError, CurveResult};
