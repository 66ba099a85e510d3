//! Solution model: a candidate value paired with its evaluated cost.

use crate::problem::Problem;

/// A candidate solution with its cost.
///
/// The cost is always the Problem Adapter's evaluation of `value`; the engine
/// never mutates `value` without re-evaluating, so the pair cannot go stale.
///
/// Ordering is by cost (lower is better). Ties are resolved deterministically
/// by the engine's strict `<` comparisons: the earlier candidate wins, so
/// results are reproducible for a fixed seed.
#[derive(Debug, Clone)]
pub struct Scored<S> {
    /// The solution value (permutation, gene vector, scalar, ...).
    pub value: S,
    /// Evaluated cost. Lower is better.
    pub cost: f64,
}

impl<S> Scored<S> {
    /// Wraps an already-evaluated solution.
    pub fn new(value: S, cost: f64) -> Self {
        Self { value, cost }
    }

    /// Evaluates `value` against the adapter and caches the cost.
    pub fn evaluate<P>(problem: &P, value: S) -> Self
    where
        P: Problem<Solution = S> + ?Sized,
    {
        let cost = problem.evaluate(&value);
        Self { value, cost }
    }
}

impl<S> PartialEq for Scored<S> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost
    }
}

impl<S> PartialOrd for Scored<S> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.cost.partial_cmp(&other.cost)
    }
}
