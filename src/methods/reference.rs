//! Direct evaluation of the target function, the baseline curve.

use crate::{
    core::{grid::Grid, series::SampleSeries, target::f},
    methods::result::MethodResult,
};

/// Reference series `y_i = f(t_i)`. No integration is involved.
pub fn reference(grid: &Grid) -> MethodResult {
    MethodResult {
        series: SampleSeries::tabulate(grid, f),
        nfev: grid.len(),
        nstep: 0,
    }
}
