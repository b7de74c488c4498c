//! Method selection for [`crate::solve`]

use std::fmt;

/// Integration scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    /// Explicit first-order Euler
    Euler,
    /// Classic fixed-step RK4 with Runge error estimate
    RK4,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Euler => write!(f, "Euler"),
            Method::RK4 => write!(f, "RK4"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names() {
        assert_eq!(Method::Euler.to_string(), "Euler");
        assert_eq!(Method::RK4.to_string(), "RK4");
    }
}
