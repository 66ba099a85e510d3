//! Simulated annealing over perturbation problems.
//!
//! One neighbor per iteration: the adapter perturbs the current solution,
//! the metropolis criterion decides acceptance, and the temperature cools
//! geometrically. The search finishes once the temperature drops below the
//! configured floor (or the engine's iteration budget runs out, whichever
//! comes first).
//!
//! Reference: Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by
//! Simulated Annealing", *Science* 220(4598).

use crate::config::SearchConfig;
use crate::engine::Strategy;
use crate::error::SearchError;
use crate::memory::Temperature;
use crate::policy::metropolis;
use crate::problem::PerturbProblem;
use crate::solution::Scored;
use rand::Rng;

/// Metropolis-accepted trajectory search with geometric cooling.
#[derive(Debug, Clone)]
pub struct SimulatedAnnealing {
    initial_temperature: f64,
    final_temperature: f64,
    cooling_alpha: f64,
}

impl SimulatedAnnealing {
    /// Builds the strategy from a configuration.
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            initial_temperature: config.initial_temperature,
            final_temperature: config.final_temperature,
            cooling_alpha: config.cooling_alpha,
        }
    }
}

impl<P: PerturbProblem> Strategy<P> for SimulatedAnnealing {
    type Memory = Temperature;

    fn initialize<R: Rng>(
        &self,
        problem: &P,
        rng: &mut R,
    ) -> Result<(Self::Memory, Scored<P::Solution>), SearchError> {
        let temperature = Temperature::new(
            self.initial_temperature,
            self.final_temperature,
            self.cooling_alpha,
        );
        let initial = problem.initial(rng);
        Ok((temperature, Scored::evaluate(problem, initial)))
    }

    fn step<R: Rng>(
        &self,
        problem: &P,
        temperature: &mut Self::Memory,
        current: &Scored<P::Solution>,
        _best_cost: f64,
        rng: &mut R,
    ) -> Result<Scored<P::Solution>, SearchError> {
        let neighbor = problem.perturb(&current.value, rng);
        let neighbor = Scored::evaluate(problem, neighbor);
        let delta = neighbor.cost - current.cost;

        let next = if metropolis(delta, temperature.current(), rng) {
            neighbor
        } else {
            current.clone()
        };

        temperature.cool();
        Ok(next)
    }

    fn finished(&self, temperature: &Self::Memory) -> bool {
        temperature.frozen()
    }
}
