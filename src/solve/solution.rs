//! Solutions returned by the compute entry points, with chart hand-off helpers.

use crate::{chart::Chart, core::series::SampleSeries};

pub const REFERENCE_NAME: &str = "Original";
pub const EULER_TITLE: &str = "Euler method";
pub const RK4_TITLE: &str = "Runge-Kutta method";
pub const ERROR_TITLE: &str = "Error (Runge rule)";

/// Result of [`crate::compute_euler`].
#[derive(Debug, Clone, PartialEq)]
pub struct EulerSolution {
    /// `f(t_i)` sampled directly.
    pub reference: SampleSeries,
    /// Euler approximation.
    pub euler: SampleSeries,
    /// Target function evaluations, reference included.
    pub nfev: usize,
    pub nstep: usize,
}

/// Result of [`crate::compute_rk4`].
#[derive(Debug, Clone, PartialEq)]
pub struct Rk4Solution {
    /// `f(t_i)` sampled directly.
    pub reference: SampleSeries,
    /// RK4 approximation.
    pub rk4: SampleSeries,
    /// Runge error estimate for `rk4`.
    pub error: SampleSeries,
    /// Target function evaluations, reference included.
    pub nfev: usize,
    pub nstep: usize,
}

/// Either solution, as returned by [`crate::solve`].
#[derive(Debug, Clone, PartialEq)]
pub enum Solution {
    Euler(EulerSolution),
    RK4(Rk4Solution),
}

impl EulerSolution {
    /// Reference and Euler curves on one chart.
    pub fn chart(&self) -> Chart {
        Chart::new(EULER_TITLE)
            .with_series(REFERENCE_NAME, self.reference.clone())
            .with_series(EULER_TITLE, self.euler.clone())
    }
}

impl Rk4Solution {
    /// Reference and RK4 curves on one chart.
    pub fn chart(&self) -> Chart {
        Chart::new(RK4_TITLE)
            .with_series(REFERENCE_NAME, self.reference.clone())
            .with_series(RK4_TITLE, self.rk4.clone())
    }

    /// Error curve on its own chart. A non-zero `window` keeps only the first
    /// `window + 1` samples (indices `0..=window`).
    pub fn error_chart(&self, window: usize) -> Chart {
        let error = match window {
            0 => self.error.clone(),
            w => self.error.head(w.saturating_add(1)),
        };
        Chart::new(ERROR_TITLE).with_series("Error", error)
    }
}

impl Solution {
    pub fn nfev(&self) -> usize {
        match self {
            Solution::Euler(s) => s.nfev,
            Solution::RK4(s) => s.nfev,
        }
    }

    pub fn nstep(&self) -> usize {
        match self {
            Solution::Euler(s) => s.nstep,
            Solution::RK4(s) => s.nstep,
        }
    }

    /// Charts for the presentation layer: one for Euler, two for RK4.
    pub fn charts(&self, error_window: usize) -> Vec<Chart> {
        match self {
            Solution::Euler(s) => vec![s.chart()],
            Solution::RK4(s) => vec![s.chart(), s.error_chart(error_window)],
        }
    }
}
