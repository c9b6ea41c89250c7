//! # Parswap Math
//!
//! Numerical building blocks for curve construction.
//!
//! This crate provides:
//!
//! - **Interpolation**: Linear and natural cubic spline interpolation of zero
//!   rates, with optional flat extrapolation
//! - **Linear Algebra**: Tridiagonal (Thomas) solver used by the spline
//! - **Solvers**: Newton-Raphson and bisection root finders behind an
//!   object-safe [`RootSolver`](solvers::RootSolver) trait so callers can
//!   inject the algorithm
//!
//! ## Example
//!
//! ```rust
//! use parswap_math::prelude::*;
//!
//! let spline = CubicSpline::new(vec![0.0, 1.0, 2.0], vec![0.04, 0.041, 0.037]).unwrap();
//! assert!((spline.interpolate(1.0).unwrap() - 0.041).abs() < 1e-12);
//!
//! let result = bisection(|x| x * x - 2.0, 1.0, 2.0, &SolverConfig::default()).unwrap();
//! assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-9);
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
#![allow(clippy::many_single_char_names)]
#![allow(clippy::unreadable_literal)]

pub mod error;
pub mod interpolation;
pub mod linear_algebra;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::interpolation::{CubicSpline, Interpolator, LinearInterpolator};
    pub use crate::linear_algebra::solve_tridiagonal;
    pub use crate::solvers::{
        bisection, newton_raphson, newton_raphson_numerical, BisectionSolver, NewtonSolver,
        RootSolver, SolverConfig, SolverKind, SolverResult,
    };
}

pub use error::{MathError, MathResult};
