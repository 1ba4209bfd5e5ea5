//! # ei-runtime
//!
//! The interface compiled probabilistic programs call into.
//!
//! A program manipulates [`RuntimeValue`]s only: a tagged union over boolean,
//! integer and float discrete samples, continuous samples and distributions.
//! Each language primitive is one function in [`dispatch`] that matches on the
//! operand tags and routes to the matching representation in `ei-prob`.
//!
//! ## Randomness
//!
//! The only operation that draws randomness is [`dispatch::observe`], and it
//! draws from the [`EvalContext`] it is handed. Seeding the context makes a
//! whole evaluation reproducible.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Evaluation context and its configuration (random source, seed).
pub mod context;
/// One dispatcher per language primitive.
pub mod dispatch;
/// JSON expression trees standing in for compiled programs.
pub mod expr;
/// Program entry point and host-side outcome reporting.
pub mod program;
/// Tagged runtime values.
pub mod value;

pub use context::{EvalConfig, EvalContext};
pub use expr::{Expr, Op};
pub use program::{Outcome, Program, execute};
pub use value::{Literal, RuntimeValue, ValueKind, ValueSummary};
