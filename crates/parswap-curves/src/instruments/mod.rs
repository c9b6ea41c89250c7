//! Swap legs priced on a [`CurvePair`](crate::curves::CurvePair).
//!
//! [`SwapLegs`] is the single leg-pricing routine: the bootstrap objective,
//! repricing checks and the swap engine all value cash flows through it.

mod legs;

pub use legs::{LegConventions, SwapLegs};
