//! High-level entry points handed to the presentation layer.

pub mod compute;
pub mod options;
pub mod solution;

pub use compute::{compute_euler, compute_rk4, solve};
pub use options::Method;
pub use solution::{EulerSolution, Rk4Solution, Solution};
