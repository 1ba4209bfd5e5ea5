//! # ei-core
//!
//! Shared foundation for the exact-inference runtime: the error taxonomy every
//! layer reports through, and the hashable float type used as a support value
//! of discrete samples.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::Real;
