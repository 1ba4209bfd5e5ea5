//! Combination algebra over discrete samples.
//!
//! Binary operators enumerate the joint distribution of their operands under
//! an independence assumption: every pair `(u, v)` of support values
//! contributes `P(u) * P(v)` to `op(u, v)`. Two references to the same random
//! variable are treated as independent draws.

use std::fmt;
use std::hash::Hash;

use ei_core::{Error, Real, Result};

use crate::continuous::ContinuousSample;
use crate::discrete::DiscreteSample;

/// Exact enumeration of `op(left, right)`.
///
/// Cost is `O(|support(left)| * |support(right)|)`.
pub fn combine<U, V, T, F>(left: &DiscreteSample<U>, right: &DiscreteSample<V>, mut op: F) -> DiscreteSample<T>
where
    U: Eq + Hash,
    V: Eq + Hash,
    T: Eq + Hash,
    F: FnMut(&U, &V) -> T,
{
    let mut result = DiscreteSample::new();
    for (u, pu) in left.iter() {
        for (v, pv) in right.iter() {
            result.accumulate(op(u, v), pu * pv);
        }
    }
    result
}

/// Fallible [`combine`]: the first error from `op` aborts the enumeration.
pub fn try_combine<U, V, T, F>(
    left: &DiscreteSample<U>,
    right: &DiscreteSample<V>,
    mut op: F,
) -> Result<DiscreteSample<T>>
where
    U: Eq + Hash,
    V: Eq + Hash,
    T: Eq + Hash,
    F: FnMut(&U, &V) -> Result<T>,
{
    let mut result = DiscreteSample::new();
    for (u, pu) in left.iter() {
        for (v, pv) in right.iter() {
            result.accumulate(op(u, v)?, pu * pv);
        }
    }
    Ok(result)
}

/// Logical AND.
pub fn and(left: &DiscreteSample<bool>, right: &DiscreteSample<bool>) -> DiscreteSample<bool> {
    combine(left, right, |a, b| *a && *b)
}

/// Logical OR.
pub fn or(left: &DiscreteSample<bool>, right: &DiscreteSample<bool>) -> DiscreteSample<bool> {
    combine(left, right, |a, b| *a || *b)
}

/// Logical NOT: swaps the masses of `true` and `false`.
pub fn not(sample: &DiscreteSample<bool>) -> DiscreteSample<bool> {
    DiscreteSample::new().add(true, sample.get(&false)).add(false, sample.get(&true))
}

/// Support values the arithmetic operators accept.
///
/// Integers use checked arithmetic; floats follow IEEE-754 and never fail.
pub trait Numeric: Copy + Eq + Hash + fmt::Display {
    /// `self + rhs`
    fn try_add(self, rhs: Self) -> Result<Self>;
    /// `self - rhs`
    fn try_sub(self, rhs: Self) -> Result<Self>;
    /// `self * rhs`
    fn try_mul(self, rhs: Self) -> Result<Self>;
    /// `self / rhs`
    fn try_div(self, rhs: Self) -> Result<Self>;
    /// Numeric `self < rhs` (false whenever a NaN is involved).
    fn less(self, rhs: Self) -> bool;
}

fn overflow(lhs: i64, sym: char, rhs: i64) -> Error {
    Error::Arithmetic(format!("{lhs} {sym} {rhs} overflows"))
}

impl Numeric for i64 {
    fn try_add(self, rhs: Self) -> Result<Self> {
        self.checked_add(rhs).ok_or_else(|| overflow(self, '+', rhs))
    }

    fn try_sub(self, rhs: Self) -> Result<Self> {
        self.checked_sub(rhs).ok_or_else(|| overflow(self, '-', rhs))
    }

    fn try_mul(self, rhs: Self) -> Result<Self> {
        self.checked_mul(rhs).ok_or_else(|| overflow(self, '*', rhs))
    }

    fn try_div(self, rhs: Self) -> Result<Self> {
        if rhs == 0 {
            return Err(Error::Arithmetic(format!("{self} / 0: division by zero")));
        }
        self.checked_div(rhs).ok_or_else(|| overflow(self, '/', rhs))
    }

    fn less(self, rhs: Self) -> bool {
        self < rhs
    }
}

impl Numeric for Real {
    fn try_add(self, rhs: Self) -> Result<Self> {
        Ok(self + rhs)
    }

    fn try_sub(self, rhs: Self) -> Result<Self> {
        Ok(self - rhs)
    }

    fn try_mul(self, rhs: Self) -> Result<Self> {
        Ok(self * rhs)
    }

    fn try_div(self, rhs: Self) -> Result<Self> {
        Ok(self / rhs)
    }

    fn less(self, rhs: Self) -> bool {
        self.get() < rhs.get()
    }
}

/// Distribution of `left + right`.
pub fn add<T: Numeric>(left: &DiscreteSample<T>, right: &DiscreteSample<T>) -> Result<DiscreteSample<T>> {
    try_combine(left, right, |a, b| a.try_add(*b))
}

/// Distribution of `left - right`.
pub fn subtract<T: Numeric>(left: &DiscreteSample<T>, right: &DiscreteSample<T>) -> Result<DiscreteSample<T>> {
    try_combine(left, right, |a, b| a.try_sub(*b))
}

/// Distribution of `left * right`.
pub fn multiply<T: Numeric>(left: &DiscreteSample<T>, right: &DiscreteSample<T>) -> Result<DiscreteSample<T>> {
    try_combine(left, right, |a, b| a.try_mul(*b))
}

/// Distribution of `left / right`. Integer division truncates toward zero.
pub fn divide<T: Numeric>(left: &DiscreteSample<T>, right: &DiscreteSample<T>) -> Result<DiscreteSample<T>> {
    try_combine(left, right, |a, b| a.try_div(*b))
}

/// Probability that the operands are equal, as a boolean sample.
pub fn equal<T: Eq + Hash>(left: &DiscreteSample<T>, right: &DiscreteSample<T>) -> DiscreteSample<bool> {
    combine(left, right, |a, b| a == b)
}

/// Probability that `left < right`.
pub fn less_than<T: Numeric>(left: &DiscreteSample<T>, right: &DiscreteSample<T>) -> DiscreteSample<bool> {
    combine(left, right, |a, b| a.less(*b))
}

/// Probability that `left > right`.
pub fn greater_than<T: Numeric>(left: &DiscreteSample<T>, right: &DiscreteSample<T>) -> DiscreteSample<bool> {
    combine(left, right, |a, b| b.less(*a))
}

/// Probability that a continuous sample lies below a discrete float sample.
///
/// Marginalizes over the discrete operand: each support value `a` with mass
/// `p` contributes `p * cumulative(a)`.
pub fn less_than_continuous(left: &ContinuousSample, right: &DiscreteSample<Real>) -> DiscreteSample<bool> {
    let mut result = DiscreteSample::new();
    for (a, p) in right.iter() {
        let c = left.cumulative(a.get());
        for (b, pc) in c.iter() {
            result.accumulate(*b, p * pc);
        }
    }
    result
}

/// Probability that a continuous sample lies above a discrete float sample.
///
/// A continuous distribution puts no mass on a single point, so this is the
/// complement of [`less_than_continuous`].
pub fn greater_than_continuous(left: &ContinuousSample, right: &DiscreteSample<Real>) -> DiscreteSample<bool> {
    not(&less_than_continuous(left, right))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distributions::{Distribution, Sample};
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    fn bools(p_true: f64) -> DiscreteSample<bool> {
        DiscreteSample::new().add(true, p_true).add(false, 1.0 - p_true)
    }

    fn normal(mean: f64, sd: f64) -> ContinuousSample {
        match Distribution::normal(mean, sd).sample() {
            Sample::Continuous(cs) => cs,
            other => panic!("unexpected sample {other:?}"),
        }
    }

    #[test]
    fn test_single_value_and() {
        let r = and(&DiscreteSample::create(true), &DiscreteSample::create(true));
        assert_abs_diff_eq!(r.get(&true), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_multiple_values_and() {
        let r = and(&bools(0.3), &bools(0.2));
        assert_abs_diff_eq!(r.get(&true), 0.3 * 0.2, epsilon = 1e-12);
        assert_abs_diff_eq!(r.get(&false), 0.3 * 0.8 + 0.7 * 0.2 + 0.7 * 0.8, epsilon = 1e-12);
    }

    #[test]
    fn test_single_value_or() {
        let r = or(&DiscreteSample::create(true), &DiscreteSample::create(false));
        assert_abs_diff_eq!(r.get(&true), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_multiple_values_or() {
        let r = or(&bools(0.3), &bools(0.2));
        assert_abs_diff_eq!(r.get(&true), 0.3 * 0.2 + 0.3 * 0.8 + 0.7 * 0.2, epsilon = 1e-12);
        assert_abs_diff_eq!(r.get(&false), 0.7 * 0.8, epsilon = 1e-12);
    }

    #[test]
    fn test_not() {
        let r = not(&bools(0.3));
        assert_abs_diff_eq!(r.get(&true), 0.7, epsilon = 1e-12);
        assert_abs_diff_eq!(r.get(&false), 0.3, epsilon = 1e-12);
    }

    #[test]
    fn test_integer_arithmetic() {
        // Two fair dice restricted to {1, 2}.
        let d = DiscreteSample::new().add(1_i64, 0.5).add(2, 0.5);
        let sum = add(&d, &d).unwrap();
        assert_abs_diff_eq!(sum.get(&2), 0.25, epsilon = 1e-12);
        assert_abs_diff_eq!(sum.get(&3), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(sum.get(&4), 0.25, epsilon = 1e-12);

        let diff = subtract(&d, &d).unwrap();
        assert_abs_diff_eq!(diff.get(&0), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(diff.get(&-1), 0.25, epsilon = 1e-12);

        let prod = multiply(&d, &DiscreteSample::create(3)).unwrap();
        assert_abs_diff_eq!(prod.get(&6), 0.5, epsilon = 1e-12);

        let quot = divide(&DiscreteSample::create(7_i64), &d).unwrap();
        assert_abs_diff_eq!(quot.get(&7), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(quot.get(&3), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_integer_division_by_zero_fails() {
        let err = divide(&DiscreteSample::create(1_i64), &DiscreteSample::create(0)).unwrap_err();
        assert!(matches!(err, Error::Arithmetic(_)));
    }

    #[test]
    fn test_integer_overflow_fails() {
        let err = add(&DiscreteSample::create(i64::MAX), &DiscreteSample::create(1)).unwrap_err();
        assert!(matches!(err, Error::Arithmetic(_)));
        assert!(divide(&DiscreteSample::create(i64::MIN), &DiscreteSample::create(-1)).is_err());
    }

    #[test]
    fn test_float_arithmetic() {
        let x = DiscreteSample::new().add(Real(1.5), 0.4).add(Real(2.5), 0.6);
        let r = add(&x, &DiscreteSample::create(Real(1.0))).unwrap();
        assert_abs_diff_eq!(r.get(&Real(2.5)), 0.4, epsilon = 1e-12);
        assert_abs_diff_eq!(r.get(&Real(3.5)), 0.6, epsilon = 1e-12);

        let inf = divide(&DiscreteSample::create(Real(1.0)), &DiscreteSample::create(Real(0.0))).unwrap();
        assert_eq!(inf.single(), Some(&Real(f64::INFINITY)));
    }

    #[test]
    fn test_comparisons() {
        let x = DiscreteSample::new().add(1_i64, 0.2).add(2, 0.3).add(3, 0.5);
        let two = DiscreteSample::create(2_i64);
        assert_abs_diff_eq!(less_than(&x, &two).get(&true), 0.2, epsilon = 1e-12);
        assert_abs_diff_eq!(greater_than(&x, &two).get(&true), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(equal(&x, &two).get(&true), 0.3, epsilon = 1e-12);
        assert_abs_diff_eq!(equal(&bools(0.3), &bools(0.2)).get(&true), 0.3 * 0.2 + 0.7 * 0.8, epsilon = 1e-12);
    }

    #[test]
    fn test_single_continuous_less_than() {
        let r = less_than_continuous(&normal(100.0, 15.0), &DiscreteSample::create(Real(100.0)));
        assert_abs_diff_eq!(r.get(&true), 0.5, epsilon = 1e-3);
        assert_abs_diff_eq!(r.get(&false), 0.5, epsilon = 1e-3);
    }

    #[test]
    fn test_multiple_continuous_less_than() {
        let right = DiscreteSample::new().add(Real(70.0), 0.3).add(Real(130.0), 0.7);
        let r = less_than_continuous(&normal(100.0, 15.0), &right);
        assert_abs_diff_eq!(r.get(&true), 0.6908, epsilon = 1e-3);
        assert_abs_diff_eq!(r.get(&false), 0.3092, epsilon = 1e-3);
    }

    #[test]
    fn test_greater_than_continuous_is_complement() {
        let right = DiscreteSample::new().add(Real(70.0), 0.3).add(Real(130.0), 0.7);
        let r = greater_than_continuous(&normal(100.0, 15.0), &right);
        assert_abs_diff_eq!(r.get(&true), 0.3092, epsilon = 1e-3);
        assert_abs_diff_eq!(r.get(&false), 0.6908, epsilon = 1e-3);
    }

    fn pmf(max_len: usize) -> impl Strategy<Value = DiscreteSample<i64>> {
        proptest::collection::vec((-20i64..20, 0.01f64..1.0), 1..max_len).prop_map(|entries| {
            let total: f64 = entries.iter().map(|(_, w)| w).sum();
            entries.into_iter().map(|(v, w)| (v, w / total)).collect::<DiscreteSample<i64>>()
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]

        #[test]
        fn prop_combine_conserves_mass(left in pmf(12), right in pmf(12)) {
            let r = combine(&left, &right, |a, b| a * 7 + b);
            prop_assert!((r.total_mass() - 1.0).abs() < 1e-9);
            let s = add(&left, &right).unwrap();
            prop_assert!((s.total_mass() - 1.0).abs() < 1e-9);
        }

        #[test]
        fn prop_boolean_ops_conserve_mass(p in 0.0f64..=1.0, q in 0.0f64..=1.0) {
            prop_assert!((and(&bools(p), &bools(q)).total_mass() - 1.0).abs() < 1e-9);
            prop_assert!((or(&bools(p), &bools(q)).total_mass() - 1.0).abs() < 1e-9);
            prop_assert!((not(&bools(p)).total_mass() - 1.0).abs() < 1e-9);
        }

        #[test]
        fn prop_not_is_involution(p in 0.0f64..=1.0) {
            let s = bools(p);
            prop_assert_eq!(not(&not(&s)), s);
        }
    }
}
