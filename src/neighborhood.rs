//! Neighborhood and perturbation generators.

use crate::error::SearchError;
use crate::memory::PheromoneMatrix;
use crate::policy::roulette;
use crate::problem::{EdgeWeighted, Gene};
use rand::Rng;

/// One swap neighbor: the resulting sequence plus its move key.
///
/// The key is the unordered pair of the two swapped element identifiers,
/// normalized so that `swap(a, b)` and `swap(b, a)` share one tabu entry.
#[derive(Debug, Clone)]
pub struct Swap {
    /// The sequence after the swap.
    pub neighbor: Vec<usize>,
    /// Normalized (min, max) pair of the swapped element ids.
    pub key: (usize, usize),
}

/// Enumerates the exhaustive pairwise-swap neighborhood: every index pair
/// `i < j` yields one neighbor, O(n²) in total.
pub fn pairwise_swaps(sequence: &[usize]) -> Vec<Swap> {
    let n = sequence.len();
    let mut swaps = Vec::with_capacity(n * n.saturating_sub(1) / 2);

    for i in 0..n {
        for j in (i + 1)..n {
            let mut neighbor = sequence.to_vec();
            neighbor.swap(i, j);
            let (a, b) = (sequence[i], sequence[j]);
            swaps.push(Swap {
                neighbor,
                key: (a.min(b), a.max(b)),
            });
        }
    }

    swaps
}

/// Single-point crossover: the child takes `parent1` up to a uniformly
/// chosen split point and `parent2` from there on.
///
/// # Panics
/// Panics if the parents are empty or of different lengths.
pub fn single_point_crossover<G: Copy, R: Rng>(
    parent1: &[G],
    parent2: &[G],
    rng: &mut R,
) -> Vec<G> {
    assert_eq!(
        parent1.len(),
        parent2.len(),
        "parents must have equal length"
    );
    assert!(!parent1.is_empty(), "parents must not be empty");

    let point = rng.random_range(0..parent1.len());
    let mut child = parent1.to_vec();
    child[point..].copy_from_slice(&parent2[point..]);
    child
}

/// Flips each gene independently with probability `rate`.
pub fn flip_mutation<G: Gene, R: Rng>(genome: &mut [G], rate: f64, rng: &mut R) {
    for gene in genome {
        if rng.random_range(0.0..1.0) < rate {
            gene.flip(rng);
        }
    }
}

/// Adds a uniform random offset in `[-step, step)` to a scalar state.
///
/// # Panics
/// Panics if `step` is not positive.
pub fn uniform_step<R: Rng>(x: f64, step: f64, rng: &mut R) -> f64 {
    x + rng.random_range(-step..step)
}

/// Ant transition rule: picks the next element for a partial tour.
///
/// Each unvisited element `j` gets unnormalized weight
/// `pheromone(i, j)^alpha * (1 / weight(i, j))^beta` where `i` is the tour's
/// last element, then one roulette draw selects among them. A zero-sum or
/// non-finite weight vector (degenerate edge weights) falls back to a
/// uniform choice over the unvisited set rather than dividing by zero.
///
/// Returns [`SearchError::NonPositiveCost`] if the adapter reports a
/// zero or negative edge weight (inversion is impossible), and
/// [`SearchError::EmptyCandidateSet`] if `unvisited` is empty.
pub fn ant_transition<P, R>(
    problem: &P,
    pheromones: &PheromoneMatrix,
    tour: &[usize],
    unvisited: &[usize],
    alpha: f64,
    beta: f64,
    rng: &mut R,
) -> Result<usize, SearchError>
where
    P: EdgeWeighted,
    R: Rng,
{
    let current = match tour.last() {
        Some(&last) => last,
        None => return Err(SearchError::EmptyCandidateSet),
    };
    if unvisited.is_empty() {
        return Err(SearchError::EmptyCandidateSet);
    }

    let mut weights = Vec::with_capacity(unvisited.len());
    for &next in unvisited {
        let edge = problem.weight(current, next);
        if edge <= 0.0 {
            return Err(SearchError::NonPositiveCost(edge));
        }
        let trail = pheromones.get(current, next).powf(alpha);
        let desirability = (1.0 / edge).powf(beta);
        weights.push(trail * desirability);
    }

    match roulette(&weights, rng) {
        Some(idx) => Ok(unvisited[idx]),
        // Degenerate distribution: recovered locally with a uniform draw.
        None => Ok(unvisited[rng.random_range(0..unvisited.len())]),
    }
}
