//! Tabu search over permutation problems.
//!
//! Each iteration evaluates the exhaustive pairwise-swap neighborhood and
//! moves to the best admissible neighbor — even when it is worse than the
//! current solution, which is how the search escapes local optima. A move is
//! inadmissible only while its key sits in the tabu list *and* it fails the
//! aspiration criterion (strictly beating the best-ever cost). The chosen
//! move's key then enters the tabu list for `tabu_tenure` iterations.
//!
//! Reference: Glover (1989), "Tabu Search—Part I", *ORSA Journal on
//! Computing* 1(3).

use crate::config::SearchConfig;
use crate::construct::random_permutation;
use crate::engine::Strategy;
use crate::error::SearchError;
use crate::memory::TabuList;
use crate::neighborhood::{pairwise_swaps, Swap};
use crate::problem::PermutationProblem;
use crate::solution::Scored;
use rand::Rng;
use rayon::prelude::*;

/// Best-improvement tabu search with aspiration.
#[derive(Debug, Clone)]
pub struct TabuSearch {
    tenure: usize,
    parallel: bool,
}

impl TabuSearch {
    /// Builds the strategy from a configuration.
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            tenure: config.tabu_tenure,
            parallel: config.parallel,
        }
    }
}

impl<P: PermutationProblem> Strategy<P> for TabuSearch {
    type Memory = TabuList<(usize, usize)>;

    fn initialize<R: Rng>(
        &self,
        problem: &P,
        rng: &mut R,
    ) -> Result<(Self::Memory, Scored<Vec<usize>>), SearchError> {
        let elements = problem.elements();
        if elements.is_empty() {
            return Err(SearchError::EmptyCandidateSet);
        }

        let tour = random_permutation(elements, rng);
        Ok((TabuList::new(self.tenure), Scored::evaluate(problem, tour)))
    }

    fn step<R: Rng>(
        &self,
        problem: &P,
        tabu: &mut Self::Memory,
        current: &Scored<Vec<usize>>,
        best_cost: f64,
        _rng: &mut R,
    ) -> Result<Scored<Vec<usize>>, SearchError> {
        let swaps = pairwise_swaps(&current.value);
        if swaps.is_empty() {
            // Fewer than two elements: nothing to move to.
            return Ok(current.clone());
        }

        let costs = evaluate_swaps(problem, &swaps, self.parallel);

        // Best admissible move: non-tabu, or aspirating (strictly better
        // than the best-ever cost).
        let mut chosen: Option<usize> = None;
        let mut chosen_cost = f64::INFINITY;
        for (idx, (swap, &cost)) in swaps.iter().zip(&costs).enumerate() {
            if tabu.contains(&swap.key) && cost >= best_cost {
                continue;
            }
            if cost < chosen_cost {
                chosen = Some(idx);
                chosen_cost = cost;
            }
        }

        // Every move tabu and none aspirates: take the least bad one rather
        // than stalling.
        let idx = match chosen {
            Some(idx) => idx,
            None => {
                let mut fallback = 0;
                for (idx, &cost) in costs.iter().enumerate() {
                    if cost < costs[fallback] {
                        fallback = idx;
                    }
                }
                fallback
            }
        };

        tabu.insert(swaps[idx].key);
        Ok(Scored::new(swaps[idx].neighbor.clone(), costs[idx]))
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Engine;
    use crate::problem::Problem;
    use crate::random::create_rng;

    struct Tsp {
        distances: Vec<Vec<f64>>,
    }

    impl Tsp {
        fn five_cities() -> Self {
            Self {
                distances: vec![
                    vec![0.0, 10.0, 15.0, 20.0, 10.0],
                    vec![10.0, 0.0, 35.0, 25.0, 15.0],
                    vec![15.0, 35.0, 0.0, 30.0, 20.0],
                    vec![20.0, 25.0, 30.0, 0.0, 25.0],
                    vec![10.0, 15.0, 20.0, 25.0, 0.0],
                ],
            }
        }
    }

    impl Problem for Tsp {
        type Solution = Vec<usize>;
        fn evaluate(&self, tour: &Vec<usize>) -> f64 {
            let mut cost: f64 = tour.windows(2).map(|w| self.distances[w[0]][w[1]]).sum();
            cost += self.distances[tour[tour.len() - 1]][tour[0]];
            cost
        }
    }

    impl PermutationProblem for Tsp {
        fn elements(&self) -> Vec<usize> {
            (0..self.distances.len()).collect()
        }
        fn incremental_cost(&self, partial: &[usize], candidate: usize) -> f64 {
            match partial.last() {
                Some(&last) => self.distances[last][candidate],
                None => 1.0,
            }
        }
    }

    #[test]
    fn test_tabu_moves_to_best_admissible_even_if_worse() {
        let problem = Tsp::five_cities();
        let config = SearchConfig::default()
            .with_tabu_tenure(3)
            .with_parallel(false)
            .with_seed(42);
        let strategy = TabuSearch::new(&config);
        let mut rng = create_rng(42);

        let (mut tabu, start) = strategy.initialize(&problem, &mut rng).unwrap();

        // Walk a few steps; the current solution may worsen, but every step
        // must return the lowest-cost admissible neighbor.
        let mut current = start;
        for _ in 0..5 {
            let best_cost = current.cost;
            let next = strategy
                .step(&problem, &mut tabu, &current, best_cost, &mut rng)
                .unwrap();
            assert_eq!(next.value.len(), 5);
            current = next;
        }
        assert!(tabu.len() <= 3);
    }

    #[test]
    fn test_aspiration_overrides_tabu() {
        let problem = Tsp::five_cities();
        let config = SearchConfig::default()
            .with_tabu_tenure(10)
            .with_parallel(false)
            .with_seed(42);
        let strategy = TabuSearch::new(&config);
        let mut rng = create_rng(42);

        let current = Scored::evaluate(&problem, vec![0, 1, 2, 3, 4]);
        let swaps = pairwise_swaps(&current.value);

        // Find the globally best swap and make it tabu.
        let mut best_idx = 0;
        let mut best_swap_cost = f64::INFINITY;
        for (idx, swap) in swaps.iter().enumerate() {
            let cost = problem.evaluate(&swap.neighbor);
            if cost < best_swap_cost {
                best_swap_cost = cost;
                best_idx = idx;
            }
        }
        let mut tabu = TabuList::new(10);
        tabu.insert(swaps[best_idx].key);

        // With best_cost above the tabu move's cost, aspiration admits it.
        let next = strategy
            .step(&problem, &mut tabu, &current, best_swap_cost + 1.0, &mut rng)
            .unwrap();
        assert_eq!(next.cost, best_swap_cost);
        assert_eq!(next.value, swaps[best_idx].neighbor);
    }

    #[test]
    fn test_tabu_blocks_without_aspiration() {
        let problem = Tsp::five_cities();
        let config = SearchConfig::default()
            .with_tabu_tenure(10)
            .with_parallel(false)
            .with_seed(42);
        let strategy = TabuSearch::new(&config);
        let mut rng = create_rng(42);

        let current = Scored::evaluate(&problem, vec![0, 1, 2, 3, 4]);
        let swaps = pairwise_swaps(&current.value);

        let mut best_idx = 0;
        let mut best_swap_cost = f64::INFINITY;
        for (idx, swap) in swaps.iter().enumerate() {
            let cost = problem.evaluate(&swap.neighbor);
            if cost < best_swap_cost {
                best_swap_cost = cost;
                best_idx = idx;
            }
        }
        let mut tabu = TabuList::new(10);
        tabu.insert(swaps[best_idx].key);

        // best_cost at the tabu move's cost: no strict improvement, no
        // aspiration, so a different move must be chosen.
        let next = strategy
            .step(&problem, &mut tabu, &current, best_swap_cost, &mut rng)
            .unwrap();
        assert_ne!(next.value, swaps[best_idx].neighbor);
    }

    #[test]
    fn test_run_reaches_two_opt_local_optimum() {
        let problem = Tsp::five_cities();
        let config = SearchConfig::default()
            .with_max_iterations(50)
            .with_tabu_tenure(3)
            .with_parallel(false)
            .with_seed(42);

        let result = Engine::run(&problem, &TabuSearch::new(&config), &config).unwrap();

        for swap in pairwise_swaps(&result.best) {
            assert!(
                problem.evaluate(&swap.neighbor) >= result.best_cost,
                "best tour must be 2-opt locally optimal"
            );
        }
    }

    #[test]
    fn test_empty_universe_is_an_error() {
        struct Empty;
        impl Problem for Empty {
            type Solution = Vec<usize>;
            fn evaluate(&self, _: &Vec<usize>) -> f64 {
                0.0
            }
        }
        impl PermutationProblem for Empty {
            fn elements(&self) -> Vec<usize> {
                vec![]
            }
            fn incremental_cost(&self, _: &[usize], _: usize) -> f64 {
                0.0
            }
        }

        let config = SearchConfig::default().with_seed(42);
        let err = Engine::run(&Empty, &TabuSearch::new(&config), &config).unwrap_err();
        assert_eq!(err, SearchError::EmptyCandidateSet);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let problem = Tsp::five_cities();
        let base = SearchConfig::default()
            .with_max_iterations(30)
            .with_tabu_tenure(3)
            .with_seed(42);

        let seq_cfg = base.clone().with_parallel(false);
        let par_cfg = base.with_parallel(true);
        let sequential = Engine::run(&problem, &TabuSearch::new(&seq_cfg), &seq_cfg).unwrap();
        let parallel = Engine::run(&problem, &TabuSearch::new(&par_cfg), &par_cfg).unwrap();

        assert_eq!(sequential.best, parallel.best);
        assert_eq!(sequential.best_cost, parallel.best_cost);
    }
}
