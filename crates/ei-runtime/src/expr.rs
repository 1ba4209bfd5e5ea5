//! Expression trees in JSON form.
//!
//! A compiled program is, for this runtime, nothing more than a fixed order
//! of dispatcher calls. [`Expr`] captures that order as data so a host can
//! run programs without a compiler:
//!
//! ```json
//! {"op": "less_than", "args": [
//!     {"op": "sample", "args": [{"op": "normal", "args": [{"const": 100.0}, {"const": 15.0}]}]},
//!     {"const": 130.0}
//! ]}
//! ```
//!
//! Arguments are evaluated left to right before the operation is applied.

use std::path::Path;

use ei_core::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::context::EvalContext;
use crate::dispatch;
use crate::program::Program;
use crate::value::{Literal, RuntimeValue};

/// Language primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Op {
    /// `add(l, r)`
    Add,
    /// `subtract(l, r)`
    Subtract,
    /// `multiply(l, r)`
    Multiply,
    /// `divide(l, r)`
    Divide,
    /// `and(l, r)`
    And,
    /// `or(l, r)`
    Or,
    /// `not(x)`
    Not,
    /// `equal(l, r)`
    Equal,
    /// `less_than(l, r)`
    LessThan,
    /// `greater_than(l, r)`
    GreaterThan,
    /// `bernoulli(p)`
    Bernoulli,
    /// `beta(a, b)`
    Beta,
    /// `normal(mean, sd)`
    Normal,
    /// `flip(p)`
    Flip,
    /// `sample(distribution)`
    Sample,
    /// `observe(condition, result)`
    Observe,
}

impl Op {
    /// Snake-case name, as written in JSON.
    pub fn name(self) -> &'static str {
        match self {
            Op::Add => "add",
            Op::Subtract => "subtract",
            Op::Multiply => "multiply",
            Op::Divide => "divide",
            Op::And => "and",
            Op::Or => "or",
            Op::Not => "not",
            Op::Equal => "equal",
            Op::LessThan => "less_than",
            Op::GreaterThan => "greater_than",
            Op::Bernoulli => "bernoulli",
            Op::Beta => "beta",
            Op::Normal => "normal",
            Op::Flip => "flip",
            Op::Sample => "sample",
            Op::Observe => "observe",
        }
    }

    /// Number of operands.
    pub fn arity(self) -> usize {
        match self {
            Op::Not | Op::Bernoulli | Op::Flip | Op::Sample => 1,
            _ => 2,
        }
    }

    fn apply(self, ctx: &mut EvalContext, args: &[RuntimeValue]) -> Result<RuntimeValue> {
        match (self, args) {
            (Op::Not, [x]) => dispatch::not(x),
            (Op::Bernoulli, [p]) => dispatch::bernoulli(p),
            (Op::Flip, [p]) => dispatch::flip(p),
            (Op::Sample, [d]) => dispatch::sample(d),
            (Op::Add, [l, r]) => dispatch::add(l, r),
            (Op::Subtract, [l, r]) => dispatch::subtract(l, r),
            (Op::Multiply, [l, r]) => dispatch::multiply(l, r),
            (Op::Divide, [l, r]) => dispatch::divide(l, r),
            (Op::And, [l, r]) => dispatch::and(l, r),
            (Op::Or, [l, r]) => dispatch::or(l, r),
            (Op::Equal, [l, r]) => dispatch::equal(l, r),
            (Op::LessThan, [l, r]) => dispatch::less_than(l, r),
            (Op::GreaterThan, [l, r]) => dispatch::greater_than(l, r),
            (Op::Beta, [a, b]) => dispatch::beta(a, b),
            (Op::Normal, [m, sd]) => dispatch::normal(m, sd),
            (Op::Observe, [c, r]) => dispatch::observe(ctx, c, r),
            _ => Err(Error::Arity { op: self.name(), expected: self.arity(), got: args.len() }),
        }
    }
}

/// A node of an expression tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Expr {
    /// Literal lifted with `constant`
    Const {
        /// Boolean, integer or float
        #[serde(rename = "const")]
        value: serde_json::Value,
    },
    /// Primitive applied to sub-expressions
    Call {
        /// Primitive
        op: Op,
        /// Operands, evaluated left to right
        #[serde(default)]
        args: Vec<Expr>,
    },
}

impl Expr {
    /// Literal node.
    pub fn constant(value: impl Into<serde_json::Value>) -> Self {
        Expr::Const { value: value.into() }
    }

    /// Call node.
    pub fn call(op: Op, args: Vec<Expr>) -> Self {
        Expr::Call { op, args }
    }

    /// Parse a JSON expression tree.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and parse a JSON expression tree from disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Evaluate the tree.
    pub fn eval(&self, ctx: &mut EvalContext) -> Result<RuntimeValue> {
        match self {
            Expr::Const { value } => Ok(dispatch::constant(Literal::try_from(value)?)),
            Expr::Call { op, args } => {
                let values = args.iter().map(|a| a.eval(ctx)).collect::<Result<Vec<_>>>()?;
                op.apply(ctx, &values)
            }
        }
    }

    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        match self {
            Expr::Const { .. } => 1,
            Expr::Call { args, .. } => 1 + args.iter().map(Expr::size).sum::<usize>(),
        }
    }
}

impl Program for Expr {
    fn run(&self, ctx: &mut EvalContext) -> Result<RuntimeValue> {
        self.eval(ctx)
    }
}
