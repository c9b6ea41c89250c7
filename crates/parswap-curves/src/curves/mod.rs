//! Curve types.
//!
//! - [`ZeroCurve`]: interpolated continuously compounded zero rates
//! - [`CurvePair`]: IBOR projection curve plus spread discount curve

mod pair;
mod zero;

pub use pair::{CurvePair, CurvePoint};
pub use zero::ZeroCurve;
