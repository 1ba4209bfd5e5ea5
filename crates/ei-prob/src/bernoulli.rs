//! Bernoulli distribution.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::discrete::DiscreteSample;

/// Distribution producing the integers 1 (with probability `p`) and 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bernoulli {
    /// Probability of 1
    pub p: f64,
}

impl Bernoulli {
    /// Create a Bernoulli distribution. `p` is expected in `[0, 1]`.
    pub fn new(p: f64) -> Self {
        Self { p }
    }

    /// `{1: p, 0: 1-p}`
    pub fn sample(&self) -> DiscreteSample<i64> {
        DiscreteSample::new().add(1, self.p).add(0, 1.0 - self.p)
    }
}

impl fmt::Display for Bernoulli {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bernoulli{{p={}}}", self.p)
    }
}
