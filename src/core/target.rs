//! The fixed target function and its forward-difference derivative.

use crate::Float;

/// Target function `f(x) = e^sin(x) * atan(2x^2)`.
///
/// Defined for every real `x`; `f(0) == 0`.
pub fn f(x: Float) -> Float {
    x.sin().exp() * (2.0 * x * x).atan()
}

/// Forward difference `(f(x + h) - f(x)) / h`.
///
/// `h` is the grid step, passed in by the caller. The RK4 error estimate
/// evaluates this at halved abscissae with the same full-grid `h`, so it must
/// never be derived from `x`.
pub fn df(x: Float, h: Float) -> Float {
    (f(x + h) - f(x)) / h
}
