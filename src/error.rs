//! Errors for grid construction

use thiserror::Error;

use crate::Float;

/// Validation errors returned by [`crate::Grid::new`].
///
/// Integration itself cannot fail: every method takes an already validated grid.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    #[error("step count must be at least 1 (got 0)")]
    ZeroSteps,
    #[error("interval bounds must be finite (got t0 = {t0}, t1 = {t1})")]
    NonFiniteBound { t0: Float, t1: Float },
    #[error("interval must have positive length (got t0 = {t0}, t1 = {t1})")]
    EmptyInterval { t0: Float, t1: Float },
    #[error("step size overflows (t0 = {t0}, t1 = {t1}, steps = {steps})")]
    NonFiniteStep { t0: Float, t1: Float, steps: usize },
    #[error("step size too small to separate grid points (t0 = {t0}, t1 = {t1}, steps = {steps})")]
    UnresolvedStep { t0: Float, t1: Float, steps: usize },
}
