//! Flip distribution: a Bernoulli trial over booleans.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::discrete::DiscreteSample;

/// Distribution producing `true` with probability `p` and `false` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Flip {
    /// Probability of `true`
    pub p: f64,
}

impl Flip {
    /// Create a Flip distribution. `p` is expected in `[0, 1]`.
    pub fn new(p: f64) -> Self {
        Self { p }
    }

    /// `{true: p, false: 1-p}`
    pub fn sample(&self) -> DiscreteSample<bool> {
        DiscreteSample::new().add(true, self.p).add(false, 1.0 - self.p)
    }
}

impl fmt::Display for Flip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Flip{{p={}}}", self.p)
    }
}
