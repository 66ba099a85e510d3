//! Memory structures retained across iterations.
//!
//! These persist for the whole run and are mutated in place by the owning
//! strategy after each iteration's candidates have been evaluated.

mod pheromone;
mod tabu_list;
mod temperature;

pub use pheromone::PheromoneMatrix;
pub use tabu_list::TabuList;
pub use temperature::Temperature;
