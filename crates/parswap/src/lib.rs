//! # Parswap
//!
//! Dual-curve interest rate swap pricing.
//!
//! This facade re-exports the workspace crates and adds [`SwapDesk`], a
//! session that bootstraps the curves for one market and answers the
//! standard questions about one swap:
//!
//! - the curve table (IBOR and discount zero rates and discount factors)
//! - the par rate with re-bootstrap DV01 and Gamma
//! - the seasoned clean and dirty valuation
//! - the linear versus cubic spline comparison
//!
//! ## Example
//!
//! ```rust
//! use parswap::{DeskConfig, SwapDesk};
//!
//! let desk = SwapDesk::new(DeskConfig::scenario().unwrap()).unwrap();
//! let report = desk.run().unwrap();
//!
//! assert_eq!(report.curve_table.len(), 7);
//! assert!(report.par_risk.risk.dv01 < 0.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]

pub mod config;
pub mod desk;
pub mod error;

pub use parswap_core;
pub use parswap_curves;
pub use parswap_math;
pub use parswap_pricing;

pub use config::DeskConfig;
pub use desk::{DeskReport, InterpolationComparison, ParRisk, SwapDesk};
pub use error::{DeskError, DeskResult, ValidationError};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::{DeskConfig, DeskError, DeskResult, SwapDesk};
    pub use parswap_core::prelude::*;
    pub use parswap_curves::prelude::*;
    pub use parswap_pricing::prelude::*;
}
