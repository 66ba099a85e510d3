//! Run configuration.
//!
//! [`SearchConfig`] is the single parameter object passed to
//! [`Engine::run`](crate::engine::Engine::run) and to strategy constructors.
//! Each strategy reads only the fields it needs.

use crate::error::SearchError;

/// Configuration for a search run.
///
/// # Builder pattern
///
/// ```
/// use heurion::SearchConfig;
///
/// let config = SearchConfig::default()
///     .with_max_iterations(200)
///     .with_tabu_tenure(5)
///     .with_seed(42);
/// assert_eq!(config.max_iterations, 200);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Maximum number of engine iterations (generations for the genetic
    /// strategy, restarts for GRASP, temperature steps for annealing).
    pub max_iterations: usize,

    /// Population size (genetic) or colony size (ant colony).
    pub population_size: usize,

    /// Per-gene flip probability for genetic mutation (0.0–1.0).
    pub mutation_rate: f64,

    /// Geometric cooling factor in (0, 1). Higher = slower cooling.
    pub cooling_alpha: f64,

    /// Initial temperature for annealing. Must be positive.
    pub initial_temperature: f64,

    /// Temperature floor; annealing finishes once the temperature drops
    /// below it. Must be positive and less than `initial_temperature`.
    pub final_temperature: f64,

    /// Number of iterations a move stays in the tabu list. 0 disables
    /// the tabu list.
    pub tabu_tenure: usize,

    /// RCL greediness for GRASP construction, in [0, 1].
    /// 0 is pure greedy, 1 is pure random.
    pub rcl_alpha: f64,

    /// Pheromone influence exponent for the ant transition rule. Non-negative.
    pub pheromone_alpha: f64,

    /// Heuristic (inverse edge weight) influence exponent. Non-negative.
    pub pheromone_beta: f64,

    /// Pheromone evaporation rate in [0, 1).
    pub evaporation_rate: f64,

    /// Pheromone deposit constant Q; each completed tour deposits
    /// `Q / tour_cost` along its edges. Must be positive.
    pub deposit_constant: f64,

    /// Tournament size for genetic parent selection. At least 1.
    pub tournament_size: usize,

    /// Whether to evaluate candidate pools in parallel using rayon.
    ///
    /// Evaluation order is preserved, so results are identical to the
    /// sequential path for the same seed.
    pub parallel: bool,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_iterations: 500,
            population_size: 100,
            mutation_rate: 0.1,
            cooling_alpha: 0.99,
            initial_temperature: 100.0,
            final_temperature: 1e-6,
            tabu_tenure: 7,
            rcl_alpha: 0.3,
            pheromone_alpha: 1.0,
            pheromone_beta: 2.0,
            evaporation_rate: 0.5,
            deposit_constant: 100.0,
            tournament_size: 3,
            parallel: true,
            seed: None,
        }
    }
}

impl SearchConfig {
    /// Sets the maximum number of iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the population (or colony) size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the per-gene mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the geometric cooling factor.
    pub fn with_cooling_alpha(mut self, alpha: f64) -> Self {
        self.cooling_alpha = alpha;
        self
    }

    /// Sets the initial temperature.
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    /// Sets the temperature floor.
    pub fn with_final_temperature(mut self, t: f64) -> Self {
        self.final_temperature = t;
        self
    }

    /// Sets the tabu tenure.
    pub fn with_tabu_tenure(mut self, tenure: usize) -> Self {
        self.tabu_tenure = tenure;
        self
    }

    /// Sets the RCL greediness parameter.
    pub fn with_rcl_alpha(mut self, alpha: f64) -> Self {
        self.rcl_alpha = alpha;
        self
    }

    /// Sets the pheromone influence exponent.
    pub fn with_pheromone_alpha(mut self, alpha: f64) -> Self {
        self.pheromone_alpha = alpha;
        self
    }

    /// Sets the heuristic influence exponent.
    pub fn with_pheromone_beta(mut self, beta: f64) -> Self {
        self.pheromone_beta = beta;
        self
    }

    /// Sets the pheromone evaporation rate.
    pub fn with_evaporation_rate(mut self, rate: f64) -> Self {
        self.evaporation_rate = rate;
        self
    }

    /// Sets the pheromone deposit constant.
    pub fn with_deposit_constant(mut self, q: f64) -> Self {
        self.deposit_constant = q;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Enables or disables parallel candidate evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates all parameters.
    ///
    /// Returns [`SearchError::InvalidConfiguration`] naming the offending
    /// parameter. Called by [`Engine::run`](crate::engine::Engine::run)
    /// before any work starts.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_iterations == 0 {
            return Err(invalid("max_iterations must be at least 1"));
        }
        if self.population_size < 2 {
            return Err(invalid("population_size must be at least 2"));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(invalid("mutation_rate must be in [0, 1]"));
        }
        if self.cooling_alpha <= 0.0 || self.cooling_alpha >= 1.0 {
            return Err(invalid("cooling_alpha must be in (0, 1)"));
        }
        if self.initial_temperature <= 0.0 {
            return Err(invalid("initial_temperature must be positive"));
        }
        if self.final_temperature <= 0.0 {
            return Err(invalid("final_temperature must be positive"));
        }
        if self.final_temperature >= self.initial_temperature {
            return Err(invalid(
                "final_temperature must be less than initial_temperature",
            ));
        }
        if !(0.0..=1.0).contains(&self.rcl_alpha) {
            return Err(invalid("rcl_alpha must be in [0, 1]"));
        }
        if self.pheromone_alpha < 0.0 {
            return Err(invalid("pheromone_alpha must be non-negative"));
        }
        if self.pheromone_beta < 0.0 {
            return Err(invalid("pheromone_beta must be non-negative"));
        }
        if !(0.0..1.0).contains(&self.evaporation_rate) {
            return Err(invalid("evaporation_rate must be in [0, 1)"));
        }
        if self.deposit_constant <= 0.0 {
            return Err(invalid("deposit_constant must be positive"));
        }
        if self.tournament_size == 0 {
            return Err(invalid("tournament_size must be at least 1"));
        }
        Ok(())
    }
}

fn invalid(msg: &str) -> SearchError {
    SearchError::InvalidConfiguration(msg.into())
}
