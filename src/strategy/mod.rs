//! The five pluggable strategies.
//!
//! Each strategy is a [`Strategy`](crate::engine::Strategy) implementation
//! built from the shared construction, neighborhood, policy, and memory
//! components. All are constructed from a [`SearchConfig`](crate::SearchConfig)
//! and read only the parameters they need.

mod annealing;
mod colony;
mod genetic;
mod grasp;
mod tabu;

pub use annealing::SimulatedAnnealing;
pub use colony::AntColony;
pub use genetic::GeneticAlgorithm;
pub use grasp::Grasp;
pub use tabu::TabuSearch;
