//! Beta distribution.

use std::fmt;

use serde::{Deserialize, Serialize};
use statrs::distribution::{Beta as StatrsBeta, ContinuousCDF};

/// `P(X <= x)` for `X ~ Beta(a, b)` (regularized incomplete beta function).
///
/// Below 0 the result is 0 and above 1 it is 1. Non-positive or non-finite
/// shape parameters yield NaN.
pub fn cdf(x: f64, a: f64, b: f64) -> f64 {
    match StatrsBeta::new(a, b) {
        Ok(d) => d.cdf(x),
        Err(_) => f64::NAN,
    }
}

/// Beta distribution with pseudocounts `a` and `b`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Beta {
    /// Pseudocount `a` (alpha)
    pub a: f64,
    /// Pseudocount `b` (beta)
    pub b: f64,
}

impl Beta {
    /// Create a Beta distribution. `a` and `b` are expected to be positive.
    pub fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    /// Cumulative probability at `x`.
    pub fn cdf(&self, x: f64) -> f64 {
        cdf(x, self.a, self.b)
    }
}

impl fmt::Display for Beta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Beta{{a={} b={}}}", self.a, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_uniform_is_identity_on_unit_interval() {
        for x in [0.0, 0.2, 0.5, 0.9, 1.0] {
            assert_abs_diff_eq!(cdf(x, 1.0, 1.0), x, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_outside_support() {
        assert_eq!(cdf(-0.5, 2.0, 3.0), 0.0);
        assert_eq!(cdf(1.5, 2.0, 3.0), 1.0);
    }

    #[test]
    fn test_symmetric_median() {
        assert_abs_diff_eq!(Beta::new(2.0, 2.0).cdf(0.5), 0.5, epsilon = 1e-12);
        // Beta(2, 1): F(x) = x^2
        assert_abs_diff_eq!(cdf(0.3, 2.0, 1.0), 0.09, epsilon = 1e-10);
    }

    #[test]
    fn test_invalid_params_are_nan() {
        assert!(cdf(0.5, 0.0, 1.0).is_nan());
        assert!(cdf(0.5, 1.0, -2.0).is_nan());
    }
}
