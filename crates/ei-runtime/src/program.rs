use std::fmt;

use ei_core::{Error, Result};

use crate::context::EvalContext;
use crate::value::RuntimeValue;

/// A compiled program: one entry point evaluating to a runtime value.
pub trait Program {
    /// Evaluate the program.
    fn run(&self, ctx: &mut EvalContext) -> Result<RuntimeValue>;
}

impl<F> Program for F
where
    F: Fn(&mut EvalContext) -> Result<RuntimeValue>,
{
    fn run(&self, ctx: &mut EvalContext) -> Result<RuntimeValue> {
        self(ctx)
    }
}

/// How one evaluation ended, as the host presents it.
#[derive(Debug)]
pub enum Outcome {
    /// The program produced a value
    Value(RuntimeValue),
    /// A conditioning statement rejected this run
    ObservationFailed,
    /// Type, construction, arithmetic or selection error
    Error(Error),
}

impl Outcome {
    /// `true` when the program produced a value.
    pub fn is_value(&self) -> bool {
        matches!(self, Outcome::Value(_))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Value(v) => fmt::Display::fmt(v, f),
            Outcome::ObservationFailed => write!(f, "Runtime error: {}", Error::ObservationFailed),
            Outcome::Error(e) => write!(f, "Runtime error: {e}"),
        }
    }
}

/// Run `program` once and classify the result.
pub fn execute<P: Program + ?Sized>(program: &P, ctx: &mut EvalContext) -> Outcome {
    match program.run(ctx) {
        Ok(value) => Outcome::Value(value),
        Err(e) if e.is_observation_failure() => Outcome::ObservationFailed,
        Err(e) => {
            log::warn!("evaluation failed: {e}");
            Outcome::Error(e)
        }
    }
}
