//! Convenient prelude: import the most commonly used types and functions.
//!
//! ```rust
//! use fixstep::prelude::*;
//!
//! let grid = Grid::new(0.0, 3.0, 600).unwrap();
//! let sol = compute_rk4(&grid);
//! assert_eq!(sol.rk4.len(), 601);
//! ```

pub use crate::{
    Float,
    chart::Chart,
    core::{
        grid::{Grid, GridSettings},
        series::{Sample, SampleSeries},
    },
    error::GridError,
    solve::{EulerSolution, Method, Rk4Solution, Solution, compute_euler, compute_rk4, solve},
};
