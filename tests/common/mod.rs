#![allow(dead_code)]

use fixstep::prelude::*;

/// Reference run: [0, 3] with 600 steps.
pub fn reference_grid() -> Grid {
    Grid::new(0.0, 3.0, 600).unwrap()
}

pub fn assert_all_finite(series: &SampleSeries) {
    for p in series {
        assert!(p.x.is_finite() && p.y.is_finite(), "non-finite sample {p:?}");
    }
}

pub fn assert_on_grid(series: &SampleSeries, grid: &Grid) {
    assert_eq!(series.len(), grid.len());
    for (i, p) in series.iter().enumerate() {
        assert_eq!(p.x, grid.abscissa(i));
    }
    for w in series.xs().windows(2) {
        assert!(w[0] < w[1]);
    }
}
