use approx::assert_relative_eq;
use fixstep::prelude::*;

mod common;
use common::{assert_all_finite, assert_on_grid, reference_grid};

// (index, reference, euler, rk4, error) for grid(0, 3, 600), computed once from the
// stepping formulas in double precision with f(x) = exp(sin x) * atan(2x^2).
// A pow(e, sin x) evaluation can differ from these in the last ulp.
const STORED: [(usize, f64, f64, f64, f64); 4] = [
    (1, 5.0250624954207804e-05, 5.0250624954207804e-05, 0.00020314748723177694, 0.00016964811051523967),
    (100, 0.7488587185318792, 0.74885871853188, 0.7732186376447456, 0.01696036992172519),
    (300, 3.666267726855462, 3.6662677268554376, 3.673692297127743, 0.006116848764595654),
    (600, 1.744960657547469, 1.7449606575474828, 1.732244798791632, 0.014522195147097369),
];

#[test]
fn euler_reference_run() {
    let grid = reference_grid();
    let sol = compute_euler(&grid);

    assert_eq!(sol.reference.len(), 601);
    assert_eq!(sol.euler.len(), 601);
    assert_eq!(sol.reference[0], 0.0);
    assert_eq!(sol.euler[0], 0.0);
    assert_on_grid(&sol.reference, &grid);
    assert_on_grid(&sol.euler, &grid);
    assert_all_finite(&sol.reference);
    assert_all_finite(&sol.euler);

    for (i, reference, euler, _, _) in STORED {
        assert_relative_eq!(sol.reference[i], reference, max_relative = 1e-12);
        assert_relative_eq!(sol.euler[i], euler, max_relative = 1e-12);
    }
}

#[test]
fn rk4_reference_run() {
    let grid = reference_grid();
    let sol = compute_rk4(&grid);

    for series in [&sol.reference, &sol.rk4, &sol.error] {
        assert_on_grid(series, &grid);
        assert_all_finite(series);
    }
    assert_eq!(sol.rk4[0], 0.0);
    assert_eq!(sol.error[0], 0.0);

    for (i, reference, _, rk4, error) in STORED {
        assert_relative_eq!(sol.reference[i], reference, max_relative = 1e-12);
        assert_relative_eq!(sol.rk4[i], rk4, max_relative = 1e-12);
        assert_relative_eq!(sol.error[i], error, max_relative = 1e-10);
    }
}

#[test]
fn rk4_charts_follow_error_window() {
    let sol = solve(&reference_grid(), Method::RK4);
    let charts = sol.charts(100);
    assert_eq!(charts.len(), 2);
    assert_eq!(charts[0].series.len(), 2);
    assert_eq!(charts[1].series[0].points.len(), 101);
    assert_eq!(charts[1].series[0].points.last().unwrap().x, 100.0 * 0.005);

    let full = sol.charts(0);
    assert_eq!(full[1].series[0].points.len(), 601);
}

#[test]
fn euler_chart_pairs_reference_and_approximation() {
    let charts = solve(&reference_grid(), Method::Euler).charts(100);
    assert_eq!(charts.len(), 1);
    let chart = &charts[0];
    assert_eq!(chart.title, "Euler method");
    assert_eq!(chart.series("Original").unwrap().len(), 601);
    assert_eq!(chart.series("Euler method").unwrap().len(), 601);
}
