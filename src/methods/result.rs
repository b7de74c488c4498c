//! Outputs of the stepping schemes.

use crate::core::series::SampleSeries;

/// Output of a single-series scheme.
#[derive(Clone, Debug, PartialEq)]
pub struct MethodResult {
    /// Computed samples, one per grid point.
    pub series: SampleSeries,
    /// Number of evaluations of the target function.
    pub nfev: usize,
    /// Number of steps taken.
    pub nstep: usize,
}

/// Output of the RK4 scheme: the solution and its per-step error estimate.
#[derive(Clone, Debug, PartialEq)]
pub struct Rk4Result {
    /// RK4 approximation.
    pub solution: SampleSeries,
    /// Runge error estimate at every grid point.
    pub error: SampleSeries,
    /// Number of evaluations of the target function.
    pub nfev: usize,
    /// Number of steps taken.
    pub nstep: usize,
}
