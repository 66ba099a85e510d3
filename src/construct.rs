//! Construction strategies: initial and restart solutions.

use crate::error::SearchError;
use crate::problem::{Gene, PermutationProblem};
use crate::random::shuffle;
use rand::Rng;

/// Draws a uniformly random permutation of the given elements.
pub fn random_permutation<R: Rng>(mut elements: Vec<usize>, rng: &mut R) -> Vec<usize> {
    shuffle(&mut elements, rng);
    elements
}

/// Greedy-randomized construction with a restricted candidate list (RCL).
///
/// At each step every remaining candidate is scored by the adapter's
/// incremental cost; the RCL holds all candidates with
/// `score <= min + alpha * (max - min)`, and the next element is drawn
/// uniformly from it. `alpha = 0` is pure greedy, `alpha = 1` pure random.
///
/// Returns [`SearchError::EmptyCandidateSet`] if the adapter's element
/// universe is empty or the RCL degenerates (non-comparable scores) —
/// a malformed problem instance, not a crash.
pub fn greedy_randomized<P, R>(
    problem: &P,
    rcl_alpha: f64,
    rng: &mut R,
) -> Result<Vec<usize>, SearchError>
where
    P: PermutationProblem,
    R: Rng,
{
    let mut available = problem.elements();
    if available.is_empty() {
        return Err(SearchError::EmptyCandidateSet);
    }

    let mut sequence = Vec::with_capacity(available.len());

    while !available.is_empty() {
        let scores: Vec<f64> = available
            .iter()
            .map(|&candidate| problem.incremental_cost(&sequence, candidate))
            .collect();

        let min = scores.iter().copied().fold(f64::INFINITY, f64::min);
        let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let threshold = min + rcl_alpha * (max - min);

        let rcl: Vec<usize> = scores
            .iter()
            .enumerate()
            .filter(|(_, &score)| score <= threshold)
            .map(|(idx, _)| idx)
            .collect();

        if rcl.is_empty() {
            // Only reachable with NaN scores from the adapter.
            return Err(SearchError::EmptyCandidateSet);
        }

        let pick = rcl[rng.random_range(0..rcl.len())];
        sequence.push(available.remove(pick));
    }

    Ok(sequence)
}

/// Draws a genome of `len` independently random genes.
pub fn random_genome<G: Gene, R: Rng>(len: usize, rng: &mut R) -> Vec<G> {
    (0..len).map(|_| G::random(rng)).collect()
}

/// Generates a fixed-size set of independently random genomes.
pub fn sample_population<G: Gene, R: Rng>(len: usize, size: usize, rng: &mut R) -> Vec<Vec<G>> {
    (0..size).map(|_| random_genome(len, rng)).collect()
}
