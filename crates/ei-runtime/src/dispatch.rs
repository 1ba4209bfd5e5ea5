//! Each function here implements one language primitive.
//!
//! Operand tags are tried in a fixed order: same-kind discrete pairs first,
//! then a scalar/continuous coercion in either operand order. Anything else is
//! a [`Error::TypeMismatch`] naming the operation.

use ei_core::{Error, Real, Result};
use ei_prob::observations;
use ei_prob::operators;
use ei_prob::{ContinuousSample, DiscreteSample, Distribution};

use crate::context::EvalContext;
use crate::value::{Literal, RuntimeValue};

use RuntimeValue::{Bool, Continuous, Float, Int};

fn mismatch(op: &'static str, operands: &[&RuntimeValue]) -> Error {
    let kinds: Vec<&str> = operands.iter().map(|v| v.kind().as_str()).collect();
    Error::type_mismatch(op, &kinds)
}

/// A Dirac float sample paired with a continuous sample, in either order.
///
/// The returned flag is `true` when the scalar was the left operand.
fn scalar_with_continuous<'a>(
    left: &'a RuntimeValue,
    right: &'a RuntimeValue,
) -> Option<(f64, &'a ContinuousSample, bool)> {
    match (left, right) {
        (Float(s), Continuous(cs)) => s.single().map(|x| (x.get(), cs.as_ref(), true)),
        (Continuous(cs), Float(s)) => s.single().map(|x| (x.get(), cs.as_ref(), false)),
        _ => None,
    }
}

/// Lift a literal into a singleton sample of the matching tag.
pub fn constant(value: impl Into<Literal>) -> RuntimeValue {
    match value.into() {
        Literal::Bool(b) => DiscreteSample::create(b).into(),
        Literal::Int(n) => DiscreteSample::create(n).into(),
        Literal::Float(x) => DiscreteSample::create(Real(x)).into(),
    }
}

/// `left + right`
pub fn add(left: &RuntimeValue, right: &RuntimeValue) -> Result<RuntimeValue> {
    match (left, right) {
        (Int(l), Int(r)) => Ok(operators::add(l, r)?.into()),
        (Float(l), Float(r)) => Ok(operators::add(l, r)?.into()),
        _ => match scalar_with_continuous(left, right) {
            Some((x, cs, _)) => Ok(cs.add(x).into()),
            None => Err(mismatch("add", &[left, right])),
        },
    }
}

/// `left - right`
///
/// Against a continuous operand the scalar is negated and added, whichever
/// side it is on.
pub fn subtract(left: &RuntimeValue, right: &RuntimeValue) -> Result<RuntimeValue> {
    match (left, right) {
        (Int(l), Int(r)) => Ok(operators::subtract(l, r)?.into()),
        (Float(l), Float(r)) => Ok(operators::subtract(l, r)?.into()),
        _ => match scalar_with_continuous(left, right) {
            Some((x, cs, scalar_left)) => {
                if scalar_left {
                    log::debug!("subtract: scalar {x} on the left of a continuous sample is applied as a shift by {}", -x);
                }
                Ok(cs.add(-x).into())
            }
            None => Err(mismatch("subtract", &[left, right])),
        },
    }
}

/// `left * right`
pub fn multiply(left: &RuntimeValue, right: &RuntimeValue) -> Result<RuntimeValue> {
    match (left, right) {
        (Int(l), Int(r)) => Ok(operators::multiply(l, r)?.into()),
        (Float(l), Float(r)) => Ok(operators::multiply(l, r)?.into()),
        _ => match scalar_with_continuous(left, right) {
            Some((x, cs, _)) => Ok(cs.multiply(x).into()),
            None => Err(mismatch("multiply", &[left, right])),
        },
    }
}

/// `left / right`
///
/// Against a continuous operand the scalar is inverted and multiplied,
/// whichever side it is on.
pub fn divide(left: &RuntimeValue, right: &RuntimeValue) -> Result<RuntimeValue> {
    match (left, right) {
        (Int(l), Int(r)) => Ok(operators::divide(l, r)?.into()),
        (Float(l), Float(r)) => Ok(operators::divide(l, r)?.into()),
        _ => match scalar_with_continuous(left, right) {
            Some((x, cs, scalar_left)) => {
                if scalar_left {
                    log::debug!("divide: scalar {x} on the left of a continuous sample is applied as a scale by {}", 1.0 / x);
                }
                Ok(cs.multiply(1.0 / x).into())
            }
            None => Err(mismatch("divide", &[left, right])),
        },
    }
}

/// `left and right`
pub fn and(left: &RuntimeValue, right: &RuntimeValue) -> Result<RuntimeValue> {
    match (left, right) {
        (Bool(l), Bool(r)) => Ok(operators::and(l, r).into()),
        _ => Err(mismatch("and", &[left, right])),
    }
}

/// `left or right`
pub fn or(left: &RuntimeValue, right: &RuntimeValue) -> Result<RuntimeValue> {
    match (left, right) {
        (Bool(l), Bool(r)) => Ok(operators::or(l, r).into()),
        _ => Err(mismatch("or", &[left, right])),
    }
}

/// `not value`
pub fn not(value: &RuntimeValue) -> Result<RuntimeValue> {
    match value {
        Bool(s) => Ok(operators::not(s).into()),
        _ => Err(mismatch("not", &[value])),
    }
}

/// `left == right`
///
/// A continuous sample never equals a float: any single point has zero
/// probability, so the result is `false` with certainty.
pub fn equal(left: &RuntimeValue, right: &RuntimeValue) -> Result<RuntimeValue> {
    match (left, right) {
        (Int(l), Int(r)) => Ok(operators::equal(l, r).into()),
        (Float(l), Float(r)) => Ok(operators::equal(l, r).into()),
        (Bool(l), Bool(r)) => Ok(operators::equal(l, r).into()),
        (Float(_), Continuous(_)) | (Continuous(_), Float(_)) => {
            Ok(DiscreteSample::new().add(false, 1.0).add(true, 0.0).into())
        }
        _ => Err(mismatch("equal", &[left, right])),
    }
}

/// `left < right`
pub fn less_than(left: &RuntimeValue, right: &RuntimeValue) -> Result<RuntimeValue> {
    match (left, right) {
        (Int(l), Int(r)) => Ok(operators::less_than(l, r).into()),
        (Float(l), Float(r)) => Ok(operators::less_than(l, r).into()),
        (Continuous(l), Float(r)) => Ok(operators::less_than_continuous(l, r).into()),
        (Float(l), Continuous(r)) => Ok(operators::greater_than_continuous(r, l).into()),
        _ => Err(mismatch("less_than", &[left, right])),
    }
}

/// `left > right`
pub fn greater_than(left: &RuntimeValue, right: &RuntimeValue) -> Result<RuntimeValue> {
    match (left, right) {
        (Int(l), Int(r)) => Ok(operators::greater_than(l, r).into()),
        (Float(l), Float(r)) => Ok(operators::greater_than(l, r).into()),
        (Continuous(l), Float(r)) => Ok(operators::greater_than_continuous(l, r).into()),
        (Float(l), Continuous(r)) => Ok(operators::less_than_continuous(r, l).into()),
        _ => Err(mismatch("greater_than", &[left, right])),
    }
}

/// A distribution parameter: a deterministic float sample.
fn parameter(distribution: &'static str, name: &str, value: &RuntimeValue) -> Result<f64> {
    match value {
        Float(s) => s.single().map(|x| x.get()).ok_or_else(|| Error::DistributionConstruction {
            distribution,
            reason: format!("{name} must be deterministic, got {} possible values", s.len()),
        }),
        other => Err(Error::DistributionConstruction {
            distribution,
            reason: format!("{name} must be a float sample, got {}", other.kind()),
        }),
    }
}

/// `bernoulli(p)`
pub fn bernoulli(p: &RuntimeValue) -> Result<RuntimeValue> {
    Ok(Distribution::bernoulli(parameter("Bernoulli", "p", p)?).into())
}

/// `flip(p)`
pub fn flip(p: &RuntimeValue) -> Result<RuntimeValue> {
    Ok(Distribution::flip(parameter("Flip", "p", p)?).into())
}

/// `normal(mean, sd)`
pub fn normal(mean: &RuntimeValue, sd: &RuntimeValue) -> Result<RuntimeValue> {
    let mean = parameter("Normal", "mean", mean)?;
    let sd = parameter("Normal", "sd", sd)?;
    Ok(Distribution::normal(mean, sd).into())
}

/// `beta(a, b)`
pub fn beta(a: &RuntimeValue, b: &RuntimeValue) -> Result<RuntimeValue> {
    let a = parameter("Beta", "a", a)?;
    let b = parameter("Beta", "b", b)?;
    Ok(Distribution::beta(a, b).into())
}

/// `sample(distribution)`: tagged by the kind the distribution declares.
pub fn sample(value: &RuntimeValue) -> Result<RuntimeValue> {
    match value {
        RuntimeValue::Distribution(d) => RuntimeValue::from_sample(d.sample_kind(), d.sample()),
        _ => Err(mismatch("sample", &[value])),
    }
}

/// `observe(condition, result)`
///
/// Draws one value from the boolean `condition` using the context's random
/// source. A `true` draw returns `result` unchanged; a `false` draw fails the
/// evaluation with [`Error::ObservationFailed`]. This is a single trial of the
/// conditioning event, not exact conditioning.
pub fn observe(ctx: &mut EvalContext, condition: &RuntimeValue, result: &RuntimeValue) -> Result<RuntimeValue> {
    let Bool(s) = condition else {
        return Err(mismatch("observe", &[condition, result]));
    };
    let accepted = observations::select(s, ctx.rng())?;
    log::debug!("observe: condition {} drew {}", s, accepted);
    if accepted { Ok(result.clone()) } else { Err(Error::ObservationFailed) }
}
