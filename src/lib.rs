//! Fixed-step Euler and RK4 integration of a closed-form sample function, with a
//! Runge (step doubling) error estimate for the RK4 result.
//!
//! The crate produces plain point sequences over a uniform grid. Anything that
//! draws them (a chart widget, a plotting script) consumes [`SampleSeries`] or
//! the [`chart::Chart`] hand-off type.

pub mod chart;
pub mod config;
pub mod core;
pub mod methods;
pub mod prelude;
pub mod solve;

mod error;

pub use crate::core::{
    grid::{Grid, GridSettings},
    series::{Sample, SampleSeries},
    target::{df, f},
};
pub use error::GridError;
pub use solve::{EulerSolution, Method, Rk4Solution, Solution, compute_euler, compute_rk4, solve};

/// Floating point type used for every grid coordinate and sample value.
pub type Float = f64;
