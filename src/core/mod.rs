//! Problem definition: the sampling grid, the target function and the point series.

pub mod grid;
pub mod series;
pub mod target;
