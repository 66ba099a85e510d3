//! Error types surfaced to the caller.
//!
//! Per-iteration numerical edge cases (zero-sum roulette wheel, empty
//! neighbor list) are recovered locally with documented fallbacks and never
//! reach this type. Only invalid configurations and adapter-contract
//! violations are fatal.

use std::error::Error;
use std::fmt;

/// Errors returned by configuration validation and [`Engine::run`].
///
/// [`Engine::run`]: crate::engine::Engine::run
#[derive(Debug, Clone, PartialEq)]
pub enum SearchError {
    /// A run parameter is outside its valid range.
    InvalidConfiguration(String),

    /// Construction cannot proceed: the adapter returned an empty element
    /// universe, or the candidate set was exhausted prematurely.
    EmptyCandidateSet,

    /// The adapter returned a zero or negative value where the engine must
    /// take its inverse (edge weights in the ant transition rule, completed
    /// tour costs for pheromone deposit).
    NonPositiveCost(f64),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::InvalidConfiguration(msg) => {
                write!(f, "invalid configuration: {msg}")
            }
            SearchError::EmptyCandidateSet => {
                write!(f, "candidate set is empty; construction cannot proceed")
            }
            SearchError::NonPositiveCost(value) => {
                write!(f, "adapter returned non-positive cost {value} where inversion is required")
            }
        }
    }
}

impl Error for SearchError {}
