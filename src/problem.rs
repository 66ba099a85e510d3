//! Problem Adapter traits — the engine's only external boundary.
//!
//! The caller implements [`Problem`] plus whichever capability traits the
//! chosen strategy requires:
//!
//! - [`PermutationProblem`]: tabu search, GRASP
//! - [`EdgeWeighted`]: ant colony optimization
//! - [`GenomeProblem`]: genetic algorithm
//! - [`PerturbProblem`]: simulated annealing
//!
//! All costs are minimized; for maximization, negate the cost.

use rand::Rng;

/// Core adapter capability: cost evaluation.
///
/// # Thread safety
///
/// `Send + Sync` because strategies may evaluate a candidate pool in
/// parallel using rayon. Evaluation must be pure with respect to shared
/// memory structures — they are only mutated between batches.
pub trait Problem: Send + Sync {
    /// The solution representation type.
    type Solution: Clone + Send;

    /// Computes the cost of a solution. Lower is better.
    fn evaluate(&self, solution: &Self::Solution) -> f64;

    /// Called once per engine iteration with the best cost so far.
    ///
    /// Useful for progress reporting or adaptive control. Default: no-op.
    fn on_iteration(&self, _iteration: usize, _best_cost: f64) {}
}

/// Problems whose solutions are permutations of an element universe.
pub trait PermutationProblem: Problem<Solution = Vec<usize>> {
    /// The element identifiers every solution must contain exactly once.
    fn elements(&self) -> Vec<usize>;

    /// Cost of extending `partial` with `candidate` as the next element.
    ///
    /// Drives greedy-randomized construction. For an empty partial sequence
    /// any consistent scoring works (e.g. a constant).
    fn incremental_cost(&self, partial: &[usize], candidate: usize) -> f64;
}

/// Symmetric pairwise edge weights over the element universe.
///
/// The ant transition rule takes `1 / weight(a, b)` as the heuristic
/// desirability of an edge, so the adapter must return strictly positive
/// values; zero or negative is reported as
/// [`NonPositiveCost`](crate::SearchError::NonPositiveCost).
pub trait EdgeWeighted: PermutationProblem {
    /// Weight (distance) between two elements. Symmetric, positive.
    fn weight(&self, a: usize, b: usize) -> f64;
}

/// A single gene in a fixed-length genome.
pub trait Gene: Copy + Send + Sync {
    /// Draws a uniformly random gene value.
    fn random<R: Rng>(rng: &mut R) -> Self;

    /// Mutates the gene in place.
    fn flip<R: Rng>(&mut self, rng: &mut R);
}

impl Gene for bool {
    fn random<R: Rng>(rng: &mut R) -> Self {
        rng.random_bool(0.5)
    }

    fn flip<R: Rng>(&mut self, _rng: &mut R) {
        *self = !*self;
    }
}

/// Problems over fixed-length gene vectors.
pub trait GenomeProblem: Problem<Solution = Vec<Self::Gene>> {
    /// The gene type.
    type Gene: Gene;

    /// Number of genes in every genome. Must be at least 1.
    fn genome_length(&self) -> usize;
}

/// Single-solution problems with a caller-defined perturbation move.
pub trait PerturbProblem: Problem {
    /// Creates the starting solution.
    fn initial<R: Rng>(&self, rng: &mut R) -> Self::Solution;

    /// Generates a neighbor by small perturbation of `solution`.
    fn perturb<R: Rng>(&self, solution: &Self::Solution, rng: &mut R) -> Self::Solution;
}
