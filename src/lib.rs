//! Pluggable combinatorial metaheuristic search engine.
//!
//! Five classical strategies share one search loop:
//!
//! - **Tabu Search**: best-improvement over the exhaustive swap neighborhood
//!   with short-term memory (tabu list) and an aspiration criterion.
//! - **Simulated Annealing**: single-solution trajectory with metropolis
//!   acceptance and a geometric cooling schedule.
//! - **Genetic Algorithm**: elitism-free generational replacement with
//!   tournament selection, single-point crossover, and per-gene flip mutation.
//! - **GRASP**: greedy-randomized construction (restricted candidate list)
//!   followed by 2-opt local search, restarted every iteration.
//! - **Ant Colony Optimization**: pheromone-guided probabilistic tour
//!   construction with evaporation and inverse-cost deposit.
//!
//! # Architecture
//!
//! The caller supplies a [`Problem`](problem::Problem) adapter — cost
//! evaluation plus whichever capability traits the chosen strategy needs
//! (element universe, edge weights, genome shape, perturbation). Each
//! strategy implements [`Strategy`](engine::Strategy): construction,
//! candidate generation, acceptance, and memory updates for one iteration.
//! [`Engine::run`](engine::Engine::run) owns the loop, the best-so-far
//! record, and termination; it contains no algorithm-specific logic.
//!
//! All strategies minimize. For maximization, negate the cost.
//!
//! # Example
//!
//! ```
//! use heurion::{Engine, SearchConfig};
//! use heurion::problem::{PerturbProblem, Problem};
//! use heurion::strategy::SimulatedAnnealing;
//! use rand::Rng;
//!
//! struct Quadratic;
//!
//! impl Problem for Quadratic {
//!     type Solution = f64;
//!     fn evaluate(&self, x: &f64) -> f64 {
//!         x * x
//!     }
//! }
//!
//! impl PerturbProblem for Quadratic {
//!     fn initial<R: Rng>(&self, _rng: &mut R) -> f64 {
//!         10.0
//!     }
//!     fn perturb<R: Rng>(&self, x: &f64, rng: &mut R) -> f64 {
//!         x + rng.random_range(-1.0..1.0)
//!     }
//! }
//!
//! let config = SearchConfig::default().with_max_iterations(2000).with_seed(42);
//! let result = Engine::run(&Quadratic, &SimulatedAnnealing::new(&config), &config).unwrap();
//! assert!(result.best_cost <= 100.0);
//! ```

pub mod config;
pub mod construct;
pub mod engine;
pub mod error;
pub mod memory;
pub mod neighborhood;
pub mod policy;
pub mod problem;
pub mod random;
pub mod solution;
pub mod strategy;

pub use config::SearchConfig;
pub use engine::{Engine, SearchResult, Strategy};
pub use error::SearchError;
pub use solution::Scored;
