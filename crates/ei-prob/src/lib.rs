//! Probability building blocks for the exact-inference runtime.
//!
//! This crate hosts the probability representations compiled programs work on:
//! - discrete samples (explicit probability mass functions)
//! - continuous samples (a base distribution plus a lazy affine transform)
//! - the distribution family (Bernoulli, Flip, Normal, Beta)
//! - the cross-product combination algebra over discrete samples
//! - weighted selection of a concrete value from a discrete sample

pub mod bernoulli;
pub mod beta;
pub mod continuous;
pub mod discrete;
pub mod distributions;
pub mod flip;
pub mod normal;
pub mod observations;
pub mod operators;

pub use continuous::ContinuousSample;
pub use discrete::DiscreteSample;
pub use distributions::{ContinuousDistribution, Distribution, Sample, SampleKind};
