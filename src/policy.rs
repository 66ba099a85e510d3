//! Acceptance and selection policies.
//!
//! The tabu admissibility rule (best non-tabu-or-aspirating neighbor) lives
//! in the tabu strategy itself because it needs the tabu list; everything
//! here is memory-free.

use crate::solution::Scored;
use rand::Rng;

/// Metropolis acceptance criterion.
///
/// Improving moves (`delta < 0`) are always accepted; worse moves are
/// accepted with probability `exp(-delta / temperature)`. A non-positive
/// temperature accepts improving moves only.
pub fn metropolis<R: Rng>(delta: f64, temperature: f64, rng: &mut R) -> bool {
    if delta < 0.0 {
        return true;
    }
    if temperature <= 0.0 {
        return false;
    }
    rng.random_range(0.0..1.0) < (-delta / temperature).exp()
}

/// Tournament selection: `k` uniform draws with replacement, lowest cost wins.
///
/// Returns the index of the winner.
///
/// # Panics
/// Panics if `pool` is empty.
pub fn tournament<S, R: Rng>(pool: &[Scored<S>], k: usize, rng: &mut R) -> usize {
    assert!(!pool.is_empty(), "cannot select from an empty pool");

    let k = k.max(1);
    let n = pool.len();
    let mut best = rng.random_range(0..n);
    for _ in 1..k {
        let idx = rng.random_range(0..n);
        if pool[idx].cost < pool[best].cost {
            best = idx;
        }
    }
    best
}

/// Roulette-wheel sampling: cumulative selection against one uniform draw.
///
/// Returns `None` when the weights sum to zero or the total is not finite,
/// so the caller can apply its documented fallback instead of dividing by
/// zero.
pub fn roulette<R: Rng>(weights: &[f64], rng: &mut R) -> Option<usize> {
    let total: f64 = weights.iter().sum();
    if !(total > 0.0) || !total.is_finite() {
        return None;
    }

    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (idx, &weight) in weights.iter().enumerate() {
        cumulative += weight;
        if cumulative > threshold {
            return Some(idx);
        }
    }

    // Floating-point shortfall: the draw landed past the last bucket.
    Some(weights.len() - 1)
}
