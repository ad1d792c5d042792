//! Weighted random selection over an ordered pool.
//!
//! [`sample`] is the strict contract: a degenerate pool is an error.
//! [`sample_or_first`] is the lenient one: it hands back the first entry on a
//! degenerate pool but tags the draw as [`Draw::Fallback`] so callers can tell.

use rand_chacha::rand_core::Rng;
use tracing::warn;

use crate::catalog::RewardWeightEntry;
use crate::error::SampleError;
use crate::rng::unit_f64;

pub trait Weighted {
    fn weight(&self) -> f64;
}

impl Weighted for RewardWeightEntry {
    fn weight(&self) -> f64 {
        self.weight
    }
}

impl<T> Weighted for (T, f64) {
    fn weight(&self) -> f64 {
        self.1
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Draw<'a, T> {
    Weighted(&'a T),
    Fallback { entry: &'a T, reason: SampleError },
}

impl<'a, T> Draw<'a, T> {
    pub fn entry(&self) -> &'a T {
        match self {
            Draw::Weighted(entry) | Draw::Fallback { entry, .. } => entry,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Draw::Fallback { .. })
    }
}

/// Sum of weights, or why the pool cannot be sampled.
pub fn total_weight<T: Weighted>(pool: &[T]) -> Result<f64, SampleError> {
    if pool.is_empty() {
        return Err(SampleError::EmptyPool);
    }
    let mut total = 0.0;
    for (index, entry) in pool.iter().enumerate() {
        let weight = entry.weight();
        if !weight.is_finite() || weight < 0.0 {
            return Err(SampleError::InvalidWeight { index, weight });
        }
        total += weight;
    }
    if total > 0.0 && total.is_finite() {
        Ok(total)
    } else {
        Err(SampleError::NonPositiveTotalWeight { total })
    }
}

pub fn sample<'a, T: Weighted, R: Rng + ?Sized>(
    pool: &'a [T],
    rng: &mut R,
) -> Result<&'a T, SampleError> {
    let total = total_weight(pool)?;
    let roll = unit_f64(rng) * total;

    let mut cumulative = 0.0;
    for entry in pool {
        cumulative += entry.weight();
        if roll < cumulative {
            return Ok(entry);
        }
    }

    // Rounding can push the roll onto the running sum; the last weighted entry owns it.
    let last = pool.iter().rposition(|entry| entry.weight() > 0.0).unwrap_or(pool.len() - 1);
    Ok(&pool[last])
}

/// Lenient draw. `None` only for an empty pool, where no fallback exists.
pub fn sample_or_first<'a, T: Weighted, R: Rng + ?Sized>(
    pool: &'a [T],
    rng: &mut R,
) -> Option<Draw<'a, T>> {
    match sample(pool, rng) {
        Ok(entry) => Some(Draw::Weighted(entry)),
        Err(SampleError::EmptyPool) => None,
        Err(reason) => {
            warn!(%reason, "degenerate reward pool, falling back to the first entry");
            pool.first().map(|entry| Draw::Fallback { entry, reason })
        }
    }
}
