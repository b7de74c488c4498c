//! Fixed-step schemes over a [`crate::Grid`]

mod euler;
mod reference;
mod rk4;

pub mod result;

pub use euler::euler;
pub use reference::reference;
pub use rk4::rk4;
