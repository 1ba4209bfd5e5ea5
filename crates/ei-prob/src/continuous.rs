//! Continuous samples.
//!
//! A continuous sample never materialises a support. It keeps the base
//! distribution together with an offset `a` and scale `b`, and answers
//! cumulative-probability queries on demand as `F(n * b + a)`.

use std::fmt;
use std::sync::Arc;

use crate::discrete::DiscreteSample;
use crate::distributions::ContinuousDistribution;

/// Base distribution plus an affine pair `(a, b)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ContinuousSample {
    distribution: Arc<ContinuousDistribution>,
    a: f64,
    b: f64,
}

impl ContinuousSample {
    /// Untransformed sample of `distribution` (`a = 0`, `b = 1`).
    pub fn new(distribution: Arc<ContinuousDistribution>) -> Self {
        Self::with_transform(distribution, 0.0, 1.0)
    }

    /// Sample of `distribution` with an explicit offset and scale.
    pub fn with_transform(distribution: Arc<ContinuousDistribution>, a: f64, b: f64) -> Self {
        Self { distribution, a, b }
    }

    /// New sample shifted by `n` (`a' = a + n`).
    pub fn add(&self, n: f64) -> Self {
        Self::with_transform(Arc::clone(&self.distribution), self.a + n, self.b)
    }

    /// New sample scaled by `n` (`b' = b * n`).
    pub fn multiply(&self, n: f64) -> Self {
        Self::with_transform(Arc::clone(&self.distribution), self.a, self.b * n)
    }

    /// `{true: p, false: 1 - p}` with `p = F(n * b + a)`.
    pub fn cumulative(&self, n: f64) -> DiscreteSample<bool> {
        let p = self.distribution.cdf(n * self.b + self.a);
        if !p.is_finite() {
            log::warn!("{}: non-finite cumulative probability at {}", self.distribution, n);
        }
        DiscreteSample::new().add(true, p).add(false, 1.0 - p)
    }

    /// Base distribution.
    pub fn distribution(&self) -> &Arc<ContinuousDistribution> {
        &self.distribution
    }

    /// Offset `a`.
    pub fn offset(&self) -> f64 {
        self.a
    }

    /// Scale `b`.
    pub fn scale(&self) -> f64 {
        self.b
    }
}

impl fmt::Display for ContinuousSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{} {} + {}x}}", self.distribution, self.a, self.b)
    }
}
