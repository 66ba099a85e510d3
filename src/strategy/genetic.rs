//! Genetic algorithm over genome problems.
//!
//! Elitism-free generational replacement: every generation the whole working
//! population is rebuilt from offspring. Parents come from tournament
//! selection, offspring from single-point crossover followed by per-gene flip
//! mutation. Because nothing survives a generation, the best-ever individual
//! is tracked by the engine, not by the population; its record is seeded from
//! the first evaluated population rather than a sentinel.
//!
//! Reference: Holland (1975), *Adaptation in Natural and Artificial Systems*.

use crate::config::SearchConfig;
use crate::construct::sample_population;
use crate::engine::Strategy;
use crate::error::SearchError;
use crate::neighborhood::{flip_mutation, single_point_crossover};
use crate::policy::tournament;
use crate::problem::GenomeProblem;
use crate::solution::Scored;
use rand::Rng;
use rayon::prelude::*;

/// Generational genetic algorithm.
#[derive(Debug, Clone)]
pub struct GeneticAlgorithm {
    population_size: usize,
    mutation_rate: f64,
    tournament_size: usize,
    parallel: bool,
}

impl GeneticAlgorithm {
    /// Builds the strategy from a configuration.
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            population_size: config.population_size,
            mutation_rate: config.mutation_rate,
            tournament_size: config.tournament_size,
            parallel: config.parallel,
        }
    }

    fn evaluate_all<P: GenomeProblem>(
        &self,
        problem: &P,
        genomes: Vec<Vec<P::Gene>>,
    ) -> Vec<Scored<Vec<P::Gene>>> {
        if self.parallel {
            genomes
                .into_par_iter()
                .map(|genome| Scored::evaluate(problem, genome))
                .collect()
        } else {
            genomes
                .into_iter()
                .map(|genome| Scored::evaluate(problem, genome))
                .collect()
        }
    }
}

impl<P: GenomeProblem> Strategy<P> for GeneticAlgorithm {
    type Memory = Vec<Scored<Vec<P::Gene>>>;

    fn initialize<R: Rng>(
        &self,
        problem: &P,
        rng: &mut R,
    ) -> Result<(Self::Memory, Scored<Vec<P::Gene>>), SearchError> {
        let len = problem.genome_length();
        if len == 0 {
            return Err(SearchError::EmptyCandidateSet);
        }

        let genomes = sample_population(len, self.population_size, rng);
        let population = self.evaluate_all(problem, genomes);
        let best = fittest(&population).clone();
        Ok((population, best))
    }

    fn step<R: Rng>(
        &self,
        problem: &P,
        population: &mut Self::Memory,
        _current: &Scored<Vec<P::Gene>>,
        _best_cost: f64,
        rng: &mut R,
    ) -> Result<Scored<Vec<P::Gene>>, SearchError> {
        let mut offspring = Vec::with_capacity(self.population_size);
        for _ in 0..self.population_size {
            let p1 = tournament(population, self.tournament_size, rng);
            let p2 = tournament(population, self.tournament_size, rng);

            let mut child =
                single_point_crossover(&population[p1].value, &population[p2].value, rng);
            flip_mutation(&mut child, self.mutation_rate, rng);
            offspring.push(child);
        }

        *population = self.evaluate_all(problem, offspring);
        Ok(fittest(population).clone())
    }
}

/// Lowest-cost member; earlier index wins ties for reproducibility.
fn fittest<S>(population: &[Scored<S>]) -> &Scored<S> {
    let mut best = 0;
    for (idx, candidate) in population.iter().enumerate() {
        if candidate.cost < population[best].cost {
            best = idx;
        }
    }
    &population[best]
}
