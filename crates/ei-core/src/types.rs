//! Float support values.
//!
//! `f64` has no total equality, so it cannot key a probability mass function
//! directly. [`Real`] compares and hashes by bit pattern, with every NaN
//! collapsed onto one canonical pattern. Consequently `0.0` and `-0.0` are
//! distinct outcomes while all NaNs are the same outcome.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

/// A float outcome usable as a discrete support value.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Real(pub f64);

impl Real {
    /// Underlying float.
    #[inline]
    pub fn get(self) -> f64 {
        self.0
    }

    #[inline]
    fn key(self) -> u64 {
        if self.0.is_nan() { f64::NAN.to_bits() } else { self.0.to_bits() }
    }
}

impl PartialEq for Real {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Real {}

impl Hash for Real {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl From<f64> for Real {
    fn from(x: f64) -> Self {
        Real(x)
    }
}

impl From<Real> for f64 {
    fn from(x: Real) -> Self {
        x.0
    }
}

impl fmt::Display for Real {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

macro_rules! real_binop {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait for Real {
            type Output = Real;

            #[inline]
            fn $method(self, rhs: Real) -> Real {
                Real(self.0 $op rhs.0)
            }
        }
    };
}

real_binop!(Add, add, +);
real_binop!(Sub, sub, -);
real_binop!(Mul, mul, *);
real_binop!(Div, div, /);

impl Neg for Real {
    type Output = Real;

    fn neg(self) -> Real {
        Real(-self.0)
    }
}
