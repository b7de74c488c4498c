//! Explicit (forward) Euler scheme.

use crate::{
    Float,
    core::{grid::Grid, series::SampleSeries, target::df},
    methods::result::MethodResult,
};

/// Forward Euler applied to the forward-difference slope field.
///
/// `y_0 = 0`, `y_i = y_{i-1} + h * df(t_{i-1})`.
pub fn euler(grid: &Grid) -> MethodResult {
    let h = grid.h();
    let n = grid.steps();

    let mut y = Vec::with_capacity(grid.len());
    let mut nfev = 0;
    let mut ym: Float = 0.0;
    y.push(ym);

    for i in 1..=n {
        ym += h * df(grid.abscissa(i - 1), h);
        nfev += 2;
        y.push(ym);
    }

    MethodResult {
        series: SampleSeries::from_values(grid, y),
        nfev,
        nstep: n,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::target::f;
    use approx::assert_abs_diff_eq;

    #[test]
    fn starts_at_zero() {
        let grid = Grid::new(0.0, 3.0, 600).unwrap();
        let result = euler(&grid);
        assert_eq!(result.series[0], 0.0);
        assert_eq!(result.nstep, 600);
        assert_eq!(result.nfev, 1200);
    }

    #[test]
    fn first_step_is_one_difference() {
        let grid = Grid::new(0.0, 3.0, 1).unwrap();
        let result = euler(&grid);
        assert_eq!(result.series.len(), 2);
        assert_eq!(result.series[1], 3.0 * df(0.0, 3.0));
        assert_abs_diff_eq!(result.series[1], f(3.0), epsilon = 1e-12);
    }

    #[test]
    fn telescopes_to_target_increment() {
        // h * (f(t + h) - f(t)) / h summed over the grid collapses to f(t_i) - f(t0)
        let grid = Grid::new(0.0, 3.0, 600).unwrap();
        let result = euler(&grid);
        for (i, p) in result.series.iter().enumerate() {
            assert_abs_diff_eq!(p.y, f(grid.abscissa(i)) - f(0.0), epsilon = 1e-10);
        }
    }
}
