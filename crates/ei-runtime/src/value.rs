use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use ei_core::{Error, Real, Result};
use ei_prob::{ContinuousDistribution, ContinuousSample, DiscreteSample, Distribution, Sample, SampleKind};
use serde::Serialize;

/// The only type that crosses the boundary to and from compiled programs.
///
/// Payloads sit behind `Arc`: values are immutable once built, and cloning
/// one (e.g. when `observe` hands its result back) never copies a support.
#[derive(Debug, Clone, PartialEq)]
pub enum RuntimeValue {
    /// Discrete sample over booleans
    Bool(Arc<DiscreteSample<bool>>),
    /// Discrete sample over integers
    Int(Arc<DiscreteSample<i64>>),
    /// Discrete sample over floats
    Float(Arc<DiscreteSample<Real>>),
    /// Symbolic continuous sample
    Continuous(Arc<ContinuousSample>),
    /// Distribution handle, not yet sampled
    Distribution(Arc<Distribution>),
}

/// Tag of a [`RuntimeValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// [`RuntimeValue::Bool`]
    Bool,
    /// [`RuntimeValue::Int`]
    Int,
    /// [`RuntimeValue::Float`]
    Float,
    /// [`RuntimeValue::Continuous`]
    Continuous,
    /// [`RuntimeValue::Distribution`]
    Distribution,
}

impl ValueKind {
    /// Human readable tag, used in error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Bool => "bool sample",
            ValueKind::Int => "int sample",
            ValueKind::Float => "float sample",
            ValueKind::Continuous => "continuous sample",
            ValueKind::Distribution => "distribution",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl RuntimeValue {
    /// Tag of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            RuntimeValue::Bool(_) => ValueKind::Bool,
            RuntimeValue::Int(_) => ValueKind::Int,
            RuntimeValue::Float(_) => ValueKind::Float,
            RuntimeValue::Continuous(_) => ValueKind::Continuous,
            RuntimeValue::Distribution(_) => ValueKind::Distribution,
        }
    }

    /// Serializable view, with discrete supports sorted by value.
    pub fn summary(&self) -> ValueSummary {
        match self {
            RuntimeValue::Bool(s) => ValueSummary::Bool { support: masses(s, |v| *v, bool::cmp) },
            RuntimeValue::Int(s) => ValueSummary::Int { support: masses(s, |v| *v, i64::cmp) },
            RuntimeValue::Float(s) => ValueSummary::Float { support: masses(s, |v| v.get(), f64::total_cmp) },
            RuntimeValue::Continuous(cs) => ValueSummary::Continuous {
                distribution: **cs.distribution(),
                a: cs.offset(),
                b: cs.scale(),
            },
            RuntimeValue::Distribution(d) => {
                ValueSummary::Distribution { name: d.name().to_string(), text: d.to_string() }
            }
        }
    }
}

fn masses<T, V, F, C>(sample: &DiscreteSample<T>, f: F, order: C) -> Vec<Mass<V>>
where
    T: Eq + Hash,
    F: Fn(&T) -> V,
    C: Fn(&V, &V) -> Ordering,
{
    let mut out: Vec<Mass<V>> = sample.iter().map(|(v, mass)| Mass { value: f(v), mass }).collect();
    out.sort_by(|x, y| order(&x.value, &y.value));
    out
}

impl fmt::Display for RuntimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeValue::Bool(s) => fmt::Display::fmt(s, f),
            RuntimeValue::Int(s) => fmt::Display::fmt(s, f),
            RuntimeValue::Float(s) => fmt::Display::fmt(s, f),
            RuntimeValue::Continuous(s) => fmt::Display::fmt(s, f),
            RuntimeValue::Distribution(d) => fmt::Display::fmt(d, f),
        }
    }
}

impl From<DiscreteSample<bool>> for RuntimeValue {
    fn from(s: DiscreteSample<bool>) -> Self {
        RuntimeValue::Bool(Arc::new(s))
    }
}

impl From<DiscreteSample<i64>> for RuntimeValue {
    fn from(s: DiscreteSample<i64>) -> Self {
        RuntimeValue::Int(Arc::new(s))
    }
}

impl From<DiscreteSample<Real>> for RuntimeValue {
    fn from(s: DiscreteSample<Real>) -> Self {
        RuntimeValue::Float(Arc::new(s))
    }
}

impl From<ContinuousSample> for RuntimeValue {
    fn from(s: ContinuousSample) -> Self {
        RuntimeValue::Continuous(Arc::new(s))
    }
}

impl From<Distribution> for RuntimeValue {
    fn from(d: Distribution) -> Self {
        RuntimeValue::Distribution(Arc::new(d))
    }
}

impl From<SampleKind> for ValueKind {
    fn from(kind: SampleKind) -> Self {
        match kind {
            SampleKind::DiscreteInt => ValueKind::Int,
            SampleKind::DiscreteBool => ValueKind::Bool,
            SampleKind::Continuous => ValueKind::Continuous,
        }
    }
}

impl RuntimeValue {
    /// Tag `sample` as the kind its distribution `declared`.
    ///
    /// A sample whose shape disagrees with the declaration is a type mismatch.
    pub fn from_sample(declared: SampleKind, sample: Sample) -> Result<Self> {
        match (declared, sample) {
            (SampleKind::DiscreteInt, Sample::Int(s)) => Ok(s.into()),
            (SampleKind::DiscreteBool, Sample::Bool(s)) => Ok(s.into()),
            (SampleKind::Continuous, Sample::Continuous(s)) => Ok(s.into()),
            (declared, produced) => Err(Error::type_mismatch(
                "sample",
                &[ValueKind::from(declared).as_str(), ValueKind::from(produced.kind()).as_str()],
            )),
        }
    }
}

/// A literal a compiled program can lift with [`crate::dispatch::constant`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal {
    /// Boolean literal
    Bool(bool),
    /// Integer literal
    Int(i64),
    /// Float literal
    Float(f64),
}

impl From<bool> for Literal {
    fn from(b: bool) -> Self {
        Literal::Bool(b)
    }
}

impl From<i64> for Literal {
    fn from(n: i64) -> Self {
        Literal::Int(n)
    }
}

impl From<f64> for Literal {
    fn from(x: f64) -> Self {
        Literal::Float(x)
    }
}

impl TryFrom<&serde_json::Value> for Literal {
    type Error = Error;

    /// JSON integers become [`Literal::Int`], any other JSON number
    /// [`Literal::Float`]. Strings, arrays, objects and `null` are rejected.
    fn try_from(value: &serde_json::Value) -> Result<Self> {
        match value {
            serde_json::Value::Bool(b) => Ok(Literal::Bool(*b)),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64().filter(|_| !n.is_f64()) {
                    Ok(Literal::Int(i))
                } else if let Some(x) = n.as_f64().filter(|_| n.is_f64()) {
                    Ok(Literal::Float(x))
                } else {
                    Err(Error::UnsupportedConstant(format!("integer out of range: {n}")))
                }
            }
            other => Err(Error::UnsupportedConstant(other.to_string())),
        }
    }
}

/// Serializable form of a [`RuntimeValue`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValueSummary {
    /// Boolean PMF
    Bool {
        /// Support sorted by value
        support: Vec<Mass<bool>>,
    },
    /// Integer PMF
    Int {
        /// Support sorted by value
        support: Vec<Mass<i64>>,
    },
    /// Float PMF
    Float {
        /// Support sorted by value
        support: Vec<Mass<f64>>,
    },
    /// Continuous sample
    Continuous {
        /// Base distribution
        distribution: ContinuousDistribution,
        /// Offset
        a: f64,
        /// Scale
        b: f64,
    },
    /// Distribution handle
    Distribution {
        /// Family name
        name: String,
        /// Textual form
        text: String,
    },
}

/// One support entry of a discrete summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mass<T> {
    /// Outcome
    pub value: T,
    /// Probability mass
    pub mass: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_and_display() {
        let v = RuntimeValue::from(DiscreteSample::create(true));
        assert_eq!(v.kind(), ValueKind::Bool);
        assert_eq!(v.to_string(), "{true 100%}");

        let d = RuntimeValue::from(Distribution::flip(0.25));
        assert_eq!(d.kind(), ValueKind::Distribution);
        assert_eq!(d.to_string(), "Flip{p=0.25}");
    }

    #[test]
    fn test_sample_retagging() {
        for (d, kind) in [
            (Distribution::bernoulli(0.5), ValueKind::Int),
            (Distribution::flip(0.5), ValueKind::Bool),
            (Distribution::beta(1.0, 2.0), ValueKind::Continuous),
        ] {
            assert_eq!(ValueKind::from(d.sample_kind()), kind);
            assert_eq!(RuntimeValue::from_sample(d.sample_kind(), d.sample()).unwrap().kind(), kind);
        }
    }

    #[test]
    fn test_sample_disagreeing_with_declared_kind() {
        let err = RuntimeValue::from_sample(SampleKind::DiscreteBool, Distribution::bernoulli(0.5).sample()).unwrap_err();
        match err {
            Error::TypeMismatch { op, operands } => {
                assert_eq!(op, "sample");
                assert_eq!(operands, "bool sample, int sample");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_literal_from_json() {
        assert_eq!(Literal::try_from(&json!(true)).unwrap(), Literal::Bool(true));
        assert_eq!(Literal::try_from(&json!(3)).unwrap(), Literal::Int(3));
        assert_eq!(Literal::try_from(&json!(3.5)).unwrap(), Literal::Float(3.5));
        assert_eq!(Literal::try_from(&json!(100.0)).unwrap(), Literal::Float(100.0));
        assert!(matches!(Literal::try_from(&json!("x")), Err(Error::UnsupportedConstant(_))));
        assert!(matches!(Literal::try_from(&json!(null)), Err(Error::UnsupportedConstant(_))));
        assert!(matches!(Literal::try_from(&json!(u64::MAX)), Err(Error::UnsupportedConstant(_))));
    }

    #[test]
    fn test_summary_sorted_and_serializable() {
        let v = RuntimeValue::from(DiscreteSample::new().add(3_i64, 0.5).add(1, 0.25).add(2, 0.25));
        let ValueSummary::Int { support } = v.summary() else { panic!("expected int summary") };
        let values: Vec<i64> = support.iter().map(|m| m.value).collect();
        assert_eq!(values, vec![1, 2, 3]);

        let f = RuntimeValue::from(
            DiscreteSample::new().add(Real(2.5), 0.25).add(Real(-1.0), 0.5).add(Real(0.5), 0.25),
        );
        let ValueSummary::Float { support } = f.summary() else { panic!("expected float summary") };
        let values: Vec<f64> = support.iter().map(|m| m.value).collect();
        assert_eq!(values, vec![-1.0, 0.5, 2.5]);
        assert_eq!(support[0].mass, 0.5);

        let normal = Distribution::normal(0.0, 1.0);
        let cs = RuntimeValue::from_sample(normal.sample_kind(), normal.sample()).unwrap();
        let text = serde_json::to_value(cs.summary()).unwrap();
        assert_eq!(text["kind"], "continuous");
        assert_eq!(text["distribution"]["family"], "normal");
        assert_eq!(text["b"], 1.0);
    }
}
