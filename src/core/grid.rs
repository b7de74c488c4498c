//! Uniform sampling grid over `[t0, t1]`.

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::{Float, error::GridError};

/// Uniform partition of `[t0, t1]` into `steps` intervals of width `h`.
///
/// Sample points are `t_i = t0 + i * h` for `i` in `0..=steps`. A `Grid` can only
/// be obtained through [`Grid::new`], so `steps >= 1` and `h > 0` always hold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    t0: Float,
    t1: Float,
    steps: usize,
    h: Float,
}

impl Grid {
    /// Validate the interval and step count and derive the step size.
    pub fn new(t0: Float, t1: Float, steps: usize) -> Result<Self, GridError> {
        if steps == 0 {
            return Err(GridError::ZeroSteps);
        }
        if !t0.is_finite() || !t1.is_finite() {
            return Err(GridError::NonFiniteBound { t0, t1 });
        }

        let h = (t1 - t0) / steps as Float;
        if h <= 0.0 {
            return Err(GridError::EmptyInterval { t0, t1 });
        }
        if !h.is_finite() {
            return Err(GridError::NonFiniteStep { t0, t1, steps });
        }

        let grid = Self { t0, t1, steps, h };
        let mut prev = grid.abscissa(0);
        for i in 1..=steps {
            let x = grid.abscissa(i);
            if x <= prev {
                return Err(GridError::UnresolvedStep { t0, t1, steps });
            }
            prev = x;
        }

        Ok(grid)
    }

    /// Left end of the interval.
    pub fn t0(&self) -> Float {
        self.t0
    }

    /// Right end of the interval.
    pub fn t1(&self) -> Float {
        self.t1
    }

    /// Number of steps `N`.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Step size `h = (t1 - t0) / N`.
    pub fn h(&self) -> Float {
        self.h
    }

    /// Number of sample points, `N + 1`.
    pub fn len(&self) -> usize {
        self.steps + 1
    }

    /// Always false: a grid holds at least two points.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Abscissa of grid index `i`.
    pub fn abscissa(&self, i: usize) -> Float {
        self.t0 + i as Float * self.h
    }

    /// All abscissae in increasing order.
    pub fn abscissae(&self) -> impl ExactSizeIterator<Item = Float> + '_ {
        (0..self.len()).map(move |i| self.abscissa(i))
    }
}

impl TryFrom<GridSettings> for Grid {
    type Error = GridError;

    fn try_from(settings: GridSettings) -> Result<Self, Self::Error> {
        Grid::new(settings.t0, settings.t1, settings.steps)
    }
}

/// Unvalidated grid parameters, as read from configuration or assembled with the builder.
///
/// Defaults are the reference run: `[0, 3]` with 600 steps.
#[derive(Builder, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSettings {
    /// Start of the interval.
    #[builder(default = 0.0)]
    #[serde(default = "default_t0")]
    pub t0: Float,
    /// End of the interval.
    #[builder(default = 3.0)]
    #[serde(default = "default_t1")]
    pub t1: Float,
    /// Number of steps.
    #[builder(default = 600)]
    #[serde(default = "default_steps")]
    pub steps: usize,
}

fn default_t0() -> Float {
    0.0
}

fn default_t1() -> Float {
    3.0
}

fn default_steps() -> usize {
    600
}

impl Default for GridSettings {
    fn default() -> Self {
        GridSettings::builder().build()
    }
}

impl GridSettings {
    /// Validate into a [`Grid`].
    pub fn grid(&self) -> Result<Grid, GridError> {
        Grid::try_from(*self)
    }
}
