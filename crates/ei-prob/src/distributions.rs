//! The distribution family and the samples it produces.
//!
//! Every distribution declares which kind of sample its `sample()` yields
//! ([`SampleKind`]), so callers re-tag results without inspecting which
//! concrete family they hold.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::bernoulli::Bernoulli;
use crate::beta::Beta;
use crate::continuous::ContinuousSample;
use crate::discrete::DiscreteSample;
use crate::flip::Flip;
use crate::normal::Normal;

/// Shape of the sample a distribution produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleKind {
    /// Discrete sample over integers
    DiscreteInt,
    /// Discrete sample over booleans
    DiscreteBool,
    /// Symbolic continuous sample
    Continuous,
}

/// Distributions that only expose a cumulative probability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum ContinuousDistribution {
    /// Normal(mean, sd)
    Normal(Normal),
    /// Beta(a, b)
    Beta(Beta),
}

impl ContinuousDistribution {
    /// `P(X <= x)`.
    pub fn cdf(&self, x: f64) -> f64 {
        match self {
            ContinuousDistribution::Normal(d) => d.cdf(x),
            ContinuousDistribution::Beta(d) => d.cdf(x),
        }
    }

    /// Family name.
    pub fn name(&self) -> &'static str {
        match self {
            ContinuousDistribution::Normal(_) => "Normal",
            ContinuousDistribution::Beta(_) => "Beta",
        }
    }
}

impl fmt::Display for ContinuousDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContinuousDistribution::Normal(d) => fmt::Display::fmt(d, f),
            ContinuousDistribution::Beta(d) => fmt::Display::fmt(d, f),
        }
    }
}

/// A stateless, parametrized distribution.
#[derive(Debug, Clone, PartialEq)]
pub enum Distribution {
    /// Integer-valued Bernoulli
    Bernoulli(Bernoulli),
    /// Boolean-valued Bernoulli
    Flip(Flip),
    /// Normal, Beta
    Continuous(Arc<ContinuousDistribution>),
}

/// Result of sampling a [`Distribution`].
#[derive(Debug, Clone, PartialEq)]
pub enum Sample {
    /// Integer PMF
    Int(DiscreteSample<i64>),
    /// Boolean PMF
    Bool(DiscreteSample<bool>),
    /// Lazy continuous sample
    Continuous(ContinuousSample),
}

impl Sample {
    /// Kind of this sample.
    pub fn kind(&self) -> SampleKind {
        match self {
            Sample::Int(_) => SampleKind::DiscreteInt,
            Sample::Bool(_) => SampleKind::DiscreteBool,
            Sample::Continuous(_) => SampleKind::Continuous,
        }
    }
}

impl Distribution {
    /// Normal(mean, sd)
    pub fn normal(mean: f64, sd: f64) -> Self {
        Distribution::Continuous(Arc::new(ContinuousDistribution::Normal(Normal::new(mean, sd))))
    }

    /// Beta(a, b)
    pub fn beta(a: f64, b: f64) -> Self {
        Distribution::Continuous(Arc::new(ContinuousDistribution::Beta(Beta::new(a, b))))
    }

    /// Bernoulli(p)
    pub fn bernoulli(p: f64) -> Self {
        Distribution::Bernoulli(Bernoulli::new(p))
    }

    /// Flip(p)
    pub fn flip(p: f64) -> Self {
        Distribution::Flip(Flip::new(p))
    }

    /// Kind of sample that [`Distribution::sample`] returns.
    pub fn sample_kind(&self) -> SampleKind {
        match self {
            Distribution::Bernoulli(_) => SampleKind::DiscreteInt,
            Distribution::Flip(_) => SampleKind::DiscreteBool,
            Distribution::Continuous(_) => SampleKind::Continuous,
        }
    }

    /// Sample the distribution: the full PMF for discrete families, the
    /// untransformed symbolic sample for continuous ones.
    pub fn sample(&self) -> Sample {
        match self {
            Distribution::Bernoulli(d) => Sample::Int(d.sample()),
            Distribution::Flip(d) => Sample::Bool(d.sample()),
            Distribution::Continuous(d) => Sample::Continuous(ContinuousSample::new(Arc::clone(d))),
        }
    }

    /// Family name.
    pub fn name(&self) -> &'static str {
        match self {
            Distribution::Bernoulli(_) => "Bernoulli",
            Distribution::Flip(_) => "Flip",
            Distribution::Continuous(d) => d.name(),
        }
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distribution::Bernoulli(d) => fmt::Display::fmt(d, f),
            Distribution::Flip(d) => fmt::Display::fmt(d, f),
            Distribution::Continuous(d) => fmt::Display::fmt(d, f),
        }
    }
}
