//! Entry points: compute_euler, compute_rk4 and method dispatch.

use tracing::debug;

use crate::{
    core::grid::Grid,
    methods::{euler, reference, rk4},
};

use super::{
    options::Method,
    solution::{EulerSolution, Rk4Solution, Solution},
};

/// Reference curve and Euler approximation over `grid`.
///
/// Pure: every call allocates fresh series, so identical grids give identical output.
pub fn compute_euler(grid: &Grid) -> EulerSolution {
    debug!(steps = grid.steps(), h = grid.h(), "computing Euler series");

    let reference = reference(grid);
    let euler = euler(grid);

    let solution = EulerSolution {
        reference: reference.series,
        euler: euler.series,
        nfev: reference.nfev + euler.nfev,
        nstep: euler.nstep,
    };
    debug!(nfev = solution.nfev, "Euler series done");
    solution
}

/// Reference curve, RK4 approximation and RK4 error estimate over `grid`.
pub fn compute_rk4(grid: &Grid) -> Rk4Solution {
    debug!(steps = grid.steps(), h = grid.h(), "computing RK4 series");

    let reference = reference(grid);
    let rk = rk4(grid);

    let solution = Rk4Solution {
        reference: reference.series,
        rk4: rk.solution,
        error: rk.error,
        nfev: reference.nfev + rk.nfev,
        nstep: rk.nstep,
    };
    debug!(nfev = solution.nfev, "RK4 series done");
    solution
}

/// Dispatch by method.
pub fn solve(grid: &Grid, method: Method) -> Solution {
    match method {
        Method::Euler => Solution::Euler(compute_euler(grid)),
        Method::RK4 => Solution::RK4(compute_rk4(grid)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euler_counts_reference_and_steps() {
        let grid = Grid::new(0.0, 3.0, 10).unwrap();
        let sol = compute_euler(&grid);
        assert_eq!(sol.nfev, 11 + 20);
        assert_eq!(sol.nstep, 10);
    }

    #[test]
    fn dispatch_matches_direct_calls() {
        let grid = Grid::new(0.0, 3.0, 30).unwrap();
        assert_eq!(solve(&grid, Method::Euler), Solution::Euler(compute_euler(&grid)));
        assert_eq!(solve(&grid, Method::RK4), Solution::RK4(compute_rk4(&grid)));
        assert_eq!(solve(&grid, Method::RK4).nfev(), 31 + 16 * 30);
    }
}
