//! Discrete samples: explicit probability mass over a finite support.

use std::fmt;
use std::hash::Hash;

use indexmap::IndexMap;
use indexmap::map;

/// Probability mass function over values of type `T`.
///
/// Adding a value that is already present accumulates its mass. The total mass
/// is not checked: a sample describing a genuine distribution sums to 1 because
/// every constructor and operator in this crate preserves it, not because the
/// type enforces it.
///
/// The support keeps insertion order, so iteration (and therefore seeded
/// selection) is the same across processes and across equal samples built
/// the same way.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscreteSample<T: Eq + Hash> {
    masses: IndexMap<T, f64>,
}

impl<T: Eq + Hash> Default for DiscreteSample<T> {
    fn default() -> Self {
        Self { masses: IndexMap::new() }
    }
}

impl<T: Eq + Hash> DiscreteSample<T> {
    /// Empty sample (no support).
    pub fn new() -> Self {
        Self::default()
    }

    /// Dirac sample: `value` with mass 1.
    pub fn create(value: T) -> Self {
        Self::new().add(value, 1.0)
    }

    /// Returns the sample with `probability` accumulated onto `value`.
    pub fn add(mut self, value: T, probability: f64) -> Self {
        self.accumulate(value, probability);
        self
    }

    /// In-place accumulation, used while an operator is still building its result.
    pub(crate) fn accumulate(&mut self, value: T, probability: f64) {
        *self.masses.entry(value).or_insert(0.0) += probability;
    }

    /// Mass of `value`, or 0 if it is not in the support.
    pub fn get(&self, value: &T) -> f64 {
        self.masses.get(value).copied().unwrap_or(0.0)
    }

    /// Values recorded in the sample, in insertion order.
    pub fn values(&self) -> map::Keys<'_, T, f64> {
        self.masses.keys()
    }

    /// `(value, mass)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&T, f64)> {
        self.masses.iter().map(|(v, &p)| (v, p))
    }

    /// The only value carrying nonzero mass, if there is exactly one.
    ///
    /// This is how deterministic (Dirac) samples are recognised.
    pub fn single(&self) -> Option<&T> {
        let mut supported = self.masses.iter().filter(|(_, p)| **p != 0.0).map(|(v, _)| v);
        match (supported.next(), supported.next()) {
            (Some(v), None) => Some(v),
            _ => None,
        }
    }

    /// Sum of all masses.
    pub fn total_mass(&self) -> f64 {
        self.masses.values().sum()
    }

    /// Number of recorded values.
    pub fn len(&self) -> usize {
        self.masses.len()
    }

    /// `true` if no value was ever added.
    pub fn is_empty(&self) -> bool {
        self.masses.is_empty()
    }
}

impl<T: Eq + Hash> FromIterator<(T, f64)> for DiscreteSample<T> {
    fn from_iter<I: IntoIterator<Item = (T, f64)>>(iter: I) -> Self {
        let mut sample = Self::new();
        for (value, probability) in iter {
            sample.accumulate(value, probability);
        }
        sample
    }
}

impl<T: Eq + Hash + fmt::Display> fmt::Display for DiscreteSample<T> {
    /// `{v1 p1%; v2 p2%}`, percentages truncated toward zero.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (value, p)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{} {}%", value, (p * 100.0) as i64)?;
        }
        f.write_str("}")
    }
}
