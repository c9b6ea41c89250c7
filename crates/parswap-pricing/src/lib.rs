//! # Parswap Pricing
//!
//! Valuation and risk of vanilla receive-fixed / pay-float swaps on a
//! bootstrapped dual-curve pair.
//!
//! ## Modules
//!
//! - [`swap`]: [`SwapSpec`] terms and [`Swap`] at an agreed fixed rate
//! - [`engine`]: [`SwapEngine`] for par rates, inception PV and seasoned
//!   clean/dirty valuation
//! - [`risk`]: [`RiskCalculator`] for DV01 and Gamma by re-bootstrapping
//!   bumped par quotes
//!
//! ## Example
//!
//! ```rust
//! use parswap_core::Date;
//! use parswap_curves::prelude::*;
//! use parswap_pricing::prelude::*;
//!
//! let trade = Date::from_ymd(2026, 1, 7).unwrap();
//! let quotes = MarketQuotes::sample();
//! let curves = CurveBootstrapper::new(trade)
//!     .bootstrap(&quotes, -38.0)
//!     .unwrap()
//!     .into_curves();
//!
//! let engine = SwapEngine::new(&curves, quotes.fixing());
//! let spec = SwapSpec::new(trade, 9, 1_000_000.0);
//! let swap = Swap::new(spec, engine.par_rate(&spec).unwrap()).unwrap();
//!
//! let seasoned = engine.value_after(&swap, 0.25).unwrap();
//! assert!(seasoned.clean_pv < 0.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::neg_cmp_op_on_partial_ord)]

pub mod engine;
pub mod error;
pub mod risk;
pub mod swap;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::engine::{LegValuation, SwapEngine, ValuationResult};
    pub use crate::error::{PricingError, PricingResult};
    pub use crate::risk::{RiskCalculator, RiskConfig, RiskReport};
    pub use crate::swap::{Swap, SwapSpec};
}

pub use engine::{LegValuation, SwapEngine, ValuationResult};
pub use error::{PricingError, PricingResult};
pub use risk::{RiskCalculator, RiskConfig, RiskReport};
pub use swap::{Swap, SwapSpec};
