//! Weighted selection of a concrete value from a discrete sample.

use std::hash::Hash;

use ei_core::{Error, Result};
use rand::Rng;

use crate::discrete::DiscreteSample;

/// Draw one value from `sample`, honouring its masses.
///
/// The random source is passed in explicitly so callers control seeding.
pub fn select<T, R>(sample: &DiscreteSample<T>, rng: &mut R) -> Result<T>
where
    T: Eq + Hash + Clone,
    R: Rng,
{
    let u: f64 = rng.random();
    select_at(sample, u)
}

/// Deterministic core of [`select`]: walks the support accumulating mass and
/// returns the first value whose running total reaches `u`.
///
/// Values with zero mass are never returned. The support is walked in
/// insertion order, so a given `u` always picks the same value from samples
/// built the same way.
pub fn select_at<T>(sample: &DiscreteSample<T>, u: f64) -> Result<T>
where
    T: Eq + Hash + Clone,
{
    let mut total = 0.0;
    for (value, p) in sample.iter() {
        if p <= 0.0 {
            continue;
        }
        total += p;
        if total >= u {
            return Ok(value.clone());
        }
    }

    log::warn!("selection exhausted support of {} values at u={u}, total mass {total}", sample.len());
    Err(Error::SelectionExhausted { total_mass: total })
}
