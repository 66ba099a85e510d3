//! Ant colony optimization over edge-weighted permutation problems.
//!
//! Each iteration a colony of ants builds complete tours from random start
//! elements, one probabilistic transition at a time. The pheromone matrix
//! then evaporates and every ant deposits `deposit_constant / tour_cost` on
//! each edge of its tour, closing edge included. Short tours deposit more,
//! so their edges grow more attractive over time.
//!
//! Reference: Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization
//! by a Colony of Cooperating Agents", *IEEE Transactions on Systems, Man,
//! and Cybernetics* 26(1).

use crate::config::SearchConfig;
use crate::construct::random_permutation;
use crate::engine::Strategy;
use crate::error::SearchError;
use crate::memory::PheromoneMatrix;
use crate::neighborhood::ant_transition;
use crate::problem::EdgeWeighted;
use crate::solution::Scored;
use rand::Rng;
use rayon::prelude::*;

/// Ant system with evaporation and cost-proportional deposit.
#[derive(Debug, Clone)]
pub struct AntColony {
    colony_size: usize,
    pheromone_alpha: f64,
    pheromone_beta: f64,
    evaporation_rate: f64,
    deposit_constant: f64,
    parallel: bool,
}

impl AntColony {
    /// Builds the strategy from a configuration. The colony size is the
    /// configured population size.
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            colony_size: config.population_size,
            pheromone_alpha: config.pheromone_alpha,
            pheromone_beta: config.pheromone_beta,
            evaporation_rate: config.evaporation_rate,
            deposit_constant: config.deposit_constant,
            parallel: config.parallel,
        }
    }

    /// Builds one complete tour from a random start element.
    fn build_tour<P, R>(
        &self,
        problem: &P,
        pheromones: &PheromoneMatrix,
        elements: &[usize],
        rng: &mut R,
    ) -> Result<Vec<usize>, SearchError>
    where
        P: EdgeWeighted,
        R: Rng,
    {
        let start = elements[rng.random_range(0..elements.len())];
        let mut tour = Vec::with_capacity(elements.len());
        tour.push(start);

        let mut unvisited: Vec<usize> = elements.iter().copied().filter(|&e| e != start).collect();
        while !unvisited.is_empty() {
            let next = ant_transition(
                problem,
                pheromones,
                &tour,
                &unvisited,
                self.pheromone_alpha,
                self.pheromone_beta,
                rng,
            )?;
            unvisited.retain(|&e| e != next);
            tour.push(next);
        }

        Ok(tour)
    }
}

impl<P: EdgeWeighted> Strategy<P> for AntColony {
    type Memory = PheromoneMatrix;

    fn initialize<R: Rng>(
        &self,
        problem: &P,
        rng: &mut R,
    ) -> Result<(Self::Memory, Scored<Vec<usize>>), SearchError> {
        let elements = problem.elements();
        if elements.is_empty() {
            return Err(SearchError::EmptyCandidateSet);
        }

        // Matrix indexed by element id, not by tour position.
        let n = elements.iter().copied().max().unwrap_or(0) + 1;
        let pheromones = PheromoneMatrix::new(n);
        let tour = random_permutation(elements, rng);
        Ok((pheromones, Scored::evaluate(problem, tour)))
    }

    fn step<R: Rng>(
        &self,
        problem: &P,
        pheromones: &mut Self::Memory,
        current: &Scored<Vec<usize>>,
        _best_cost: f64,
        rng: &mut R,
    ) -> Result<Scored<Vec<usize>>, SearchError> {
        let elements = problem.elements();
        if elements.len() < 2 {
            return Ok(current.clone());
        }

        let mut tours = Vec::with_capacity(self.colony_size);
        for _ in 0..self.colony_size {
            tours.push(self.build_tour(problem, pheromones, &elements, rng)?);
        }

        let scored: Vec<Scored<Vec<usize>>> = if self.parallel {
            tours
                .into_par_iter()
                .map(|tour| Scored::evaluate(problem, tour))
                .collect()
        } else {
            tours
                .into_iter()
                .map(|tour| Scored::evaluate(problem, tour))
                .collect()
        };

        pheromones.evaporate(self.evaporation_rate);
        for ant in &scored {
            if ant.cost <= 0.0 {
                // The deposit is deposit_constant / cost.
                return Err(SearchError::NonPositiveCost(ant.cost));
            }
            pheromones.deposit_tour(&ant.value, self.deposit_constant / ant.cost);
        }

        let mut best = 0;
        for (idx, ant) in scored.iter().enumerate() {
            if ant.cost < scored[best].cost {
                best = idx;
            }
        }
        Ok(scored[best].clone())
    }
}
