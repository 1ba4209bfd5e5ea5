//! Normal distribution.

use std::fmt;

use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, Normal as StatrsNormal};

/// `P(X <= x)` for `X ~ N(mean, sd)`.
///
/// Parameters are not validated: a non-positive or non-finite `sd` yields NaN.
pub fn cdf(x: f64, mean: f64, sd: f64) -> f64 {
    match StatrsNormal::new(mean, sd) {
        Ok(d) => d.cdf(x),
        Err(_) => f64::NAN,
    }
}

/// Normal distribution with mean `mean` and standard deviation `sd`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Normal {
    /// Mean
    pub mean: f64,
    /// Standard deviation
    pub sd: f64,
}

impl Normal {
    /// Create a Normal distribution. `sd` is expected to be positive.
    pub fn new(mean: f64, sd: f64) -> Self {
        Self { mean, sd }
    }

    /// Cumulative probability at `x`.
    pub fn cdf(&self, x: f64) -> f64 {
        cdf(x, self.mean, self.sd)
    }
}

impl fmt::Display for Normal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Normal{{mean={} sd={}}}", self.mean, self.sd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_cdf_at_mean_is_half() {
        for (mean, sd) in [(0.0, 1.0), (100.0, 15.0), (-3.5, 0.01), (1e3, 250.0)] {
            assert_abs_diff_eq!(Normal::new(mean, sd).cdf(mean), 0.5, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_cdf_known_values() {
        // Phi(1) = 0.841344746...
        assert_abs_diff_eq!(cdf(1.0, 0.0, 1.0), 0.841_344_746_068_543, epsilon = 1e-9);
        assert_abs_diff_eq!(cdf(130.0, 100.0, 15.0), 0.977_249_868_051_821, epsilon = 1e-9);
    }

    #[test]
    fn test_invalid_sd_is_nan() {
        assert!(cdf(0.0, 0.0, 0.0).is_nan());
        assert!(cdf(0.0, 0.0, -1.0).is_nan());
    }

    #[test]
    fn test_display() {
        assert_eq!(Normal::new(100.0, 15.0).to_string(), "Normal{mean=100 sd=15}");
    }
}
