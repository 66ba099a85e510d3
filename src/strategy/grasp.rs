//! GRASP over permutation problems.
//!
//! Every iteration is an independent restart: a greedy-randomized
//! construction (restricted candidate list) followed by a best-improvement
//! pairwise-swap descent to a local optimum. Restarts share nothing, so the
//! strategy carries no memory; the engine's best-ever record is the only
//! state that accumulates.
//!
//! Reference: Feo & Resende (1995), "Greedy Randomized Adaptive Search
//! Procedures", *Journal of Global Optimization* 6(2).

use crate::config::SearchConfig;
use crate::construct::greedy_randomized;
use crate::engine::Strategy;
use crate::error::SearchError;
use crate::neighborhood::{pairwise_swaps, Swap};
use crate::problem::PermutationProblem;
use crate::solution::Scored;
use rand::Rng;
use rayon::prelude::*;

/// Multi-start greedy-randomized construction with local search.
#[derive(Debug, Clone)]
pub struct Grasp {
    rcl_alpha: f64,
    parallel: bool,
}

impl Grasp {
    /// Builds the strategy from a configuration.
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            rcl_alpha: config.rcl_alpha,
            parallel: config.parallel,
        }
    }

    fn restart<P, R>(&self, problem: &P, rng: &mut R) -> Result<Scored<Vec<usize>>, SearchError>
    where
        P: PermutationProblem,
        R: Rng,
    {
        let constructed = greedy_randomized(problem, self.rcl_alpha, rng)?;
        Ok(self.descend(problem, Scored::evaluate(problem, constructed)))
    }

    /// Best-improvement pairwise-swap descent to a local optimum.
    fn descend<P: PermutationProblem>(
        &self,
        problem: &P,
        mut current: Scored<Vec<usize>>,
    ) -> Scored<Vec<usize>> {
        loop {
            let swaps = pairwise_swaps(&current.value);
            if swaps.is_empty() {
                return current;
            }
            let costs = evaluate_swaps(problem, &swaps, self.parallel);

            let mut best = 0;
            for (idx, &cost) in costs.iter().enumerate() {
                if cost < costs[best] {
                    best = idx;
                }
            }
            if costs[best] >= current.cost {
                return current;
            }
            current = Scored::new(swaps[best].neighbor.clone(), costs[best]);
        }
    }
}

fn evaluate_swaps<P: PermutationProblem>(problem: &P, swaps: &[Swap], parallel: bool) -> Vec<f64> {
    if parallel {
        swaps
            .par_iter()
            .map(|swap| problem.evaluate(&swap.neighbor))
            .collect()
    } else {
        swaps
            .iter()
            .map(|swap| problem.evaluate(&swap.neighbor))
            .collect()
    }
}

impl<P: PermutationProblem> Strategy<P> for Grasp {
    type Memory = ();

    fn initialize<R: Rng>(
        &self,
        problem: &P,
        rng: &mut R,
    ) -> Result<((), Scored<Vec<usize>>), SearchError> {
        Ok(((), self.restart(problem, rng)?))
    }

    fn step<R: Rng>(
        &self,
        problem: &P,
        _memory: &mut (),
        _current: &Scored<Vec<usize>>,
        _best_cost: f64,
        rng: &mut R,
    ) -> Result<Scored<Vec<usize>>, SearchError> {
        self.restart(problem, rng)
    }
}
