//! Search loop driver.
//!
//! The loop shape is identical for every strategy:
//!
//! 1. INIT: validate the configuration, seed the RNG, let the strategy
//!    construct the initial solution and its memory structures
//! 2. ITERATE: one strategy step — construct-or-perturb, evaluate,
//!    accept, update memory
//! 3. CHECK_TERMINATION: iteration budget or schedule-driven condition
//!    (e.g. temperature floor)
//! 4. DONE: return the best-ever solution
//!
//! Only the plugged-in [`Strategy`] differs between algorithms. The best-ever
//! record is owned here and updated only on strict cost improvement, so the
//! reported history is non-increasing regardless of the strategy's own
//! acceptance behavior (tabu search and annealing both move to worse
//! solutions by design).

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::problem::Problem;
use crate::random::create_rng;
use crate::solution::Scored;
use rand::Rng;

/// One pluggable search strategy: construction, candidate generation,
/// acceptance, and memory updates for a single iteration.
pub trait Strategy<P: Problem> {
    /// Algorithm-specific state retained across iterations: tabu list,
    /// pheromone matrix, temperature, population. `()` when stateless.
    type Memory;

    /// Constructs the initial solution and seeds the memory structures.
    fn initialize<R: Rng>(
        &self,
        problem: &P,
        rng: &mut R,
    ) -> Result<(Self::Memory, Scored<P::Solution>), SearchError>;

    /// Runs one full cycle and returns the new current solution.
    ///
    /// `best_cost` is the engine's best-ever cost, made available for
    /// aspiration checks. The returned solution may be worse than
    /// `current`; the engine tracks the best-ever record separately.
    fn step<R: Rng>(
        &self,
        problem: &P,
        memory: &mut Self::Memory,
        current: &Scored<P::Solution>,
        best_cost: f64,
        rng: &mut R,
    ) -> Result<Scored<P::Solution>, SearchError>;

    /// Schedule-driven termination, checked before each iteration.
    ///
    /// Default: run until the iteration budget is exhausted.
    fn finished(&self, _memory: &Self::Memory) -> bool {
        false
    }
}

/// Result of a search run.
#[derive(Debug, Clone)]
pub struct SearchResult<S> {
    /// The best solution found during the entire run.
    pub best: S,

    /// Cost of the best solution.
    pub best_cost: f64,

    /// Number of iterations executed.
    pub iterations: usize,

    /// Iteration at which the best solution was found (0 = initial solution).
    pub best_iteration: usize,

    /// Best-ever cost after initialization and after each iteration.
    /// Non-increasing by construction.
    pub cost_history: Vec<f64>,
}

/// Executes the search loop for any [`Strategy`].
pub struct Engine;

impl Engine {
    /// Runs the search.
    ///
    /// Returns the best solution observed across all iterations, or an error
    /// if the configuration is invalid or the adapter violates its contract.
    pub fn run<P, S>(
        problem: &P,
        strategy: &S,
        config: &SearchConfig,
    ) -> Result<SearchResult<P::Solution>, SearchError>
    where
        P: Problem,
        S: Strategy<P>,
    {
        config.validate()?;

        let mut rng = create_rng(config.seed.unwrap_or_else(rand::random));

        let (mut memory, initial) = strategy.initialize(problem, &mut rng)?;
        let mut best = initial.clone();
        let mut current = initial;
        let mut best_iteration = 0;
        let mut iterations = 0;

        let mut cost_history = Vec::with_capacity(config.max_iterations + 1);
        cost_history.push(best.cost);

        for iteration in 1..=config.max_iterations {
            if strategy.finished(&memory) {
                break;
            }

            current = strategy.step(problem, &mut memory, &current, best.cost, &mut rng)?;

            if current.cost < best.cost {
                best = current.clone();
                best_iteration = iteration;
            }

            cost_history.push(best.cost);
            iterations = iteration;

            problem.on_iteration(iteration, best.cost);
        }

        Ok(SearchResult {
            best_cost: best.cost,
            best: best.value,
            iterations,
            best_iteration,
            cost_history,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // A strategy that walks an i64 downward by one per step. Exercises the
    // driver without any real metaheuristic.
    struct CountDown;

    struct Identity;

    impl Problem for Identity {
        type Solution = i64;
        fn evaluate(&self, x: &i64) -> f64 {
            *x as f64
        }
    }

    impl Strategy<Identity> for CountDown {
        type Memory = ();

        fn initialize<R: Rng>(
            &self,
            problem: &Identity,
            _rng: &mut R,
        ) -> Result<((), Scored<i64>), SearchError> {
            Ok(((), Scored::evaluate(problem, 10)))
        }

        fn step<R: Rng>(
            &self,
            problem: &Identity,
            _memory: &mut (),
            current: &Scored<i64>,
            _best_cost: f64,
            _rng: &mut R,
        ) -> Result<Scored<i64>, SearchError> {
            Ok(Scored::evaluate(problem, current.value - 1))
        }
    }

    #[test]
    fn test_engine_tracks_best_and_history() {
        let config = SearchConfig::default().with_max_iterations(5).with_seed(1);
        let result = Engine::run(&Identity, &CountDown, &config).unwrap();

        assert_eq!(result.best, 5);
        assert_eq!(result.best_cost, 5.0);
        assert_eq!(result.iterations, 5);
        assert_eq!(result.best_iteration, 5);
        assert_eq!(result.cost_history, vec![10.0, 9.0, 8.0, 7.0, 6.0, 5.0]);
    }

    #[test]
    fn test_engine_rejects_invalid_config() {
        let config = SearchConfig::default().with_max_iterations(0);
        let err = Engine::run(&Identity, &CountDown, &config).unwrap_err();
        assert!(matches!(err, SearchError::InvalidConfiguration(_)));
    }

    // A strategy that returns worse solutions; the best record must hold.
    struct CountUp;

    impl Strategy<Identity> for CountUp {
        type Memory = ();

        fn initialize<R: Rng>(
            &self,
            problem: &Identity,
            _rng: &mut R,
        ) -> Result<((), Scored<i64>), SearchError> {
            Ok(((), Scored::evaluate(problem, 0)))
        }

        fn step<R: Rng>(
            &self,
            problem: &Identity,
            _memory: &mut (),
            current: &Scored<i64>,
            _best_cost: f64,
            _rng: &mut R,
        ) -> Result<Scored<i64>, SearchError> {
            Ok(Scored::evaluate(problem, current.value + 1))
        }
    }

    #[test]
    fn test_best_record_survives_worsening_walk() {
        let config = SearchConfig::default().with_max_iterations(10).with_seed(1);
        let result = Engine::run(&Identity, &CountUp, &config).unwrap();

        assert_eq!(result.best, 0);
        assert_eq!(result.best_iteration, 0);
        for window in result.cost_history.windows(2) {
            assert!(window[1] <= window[0]);
        }
    }

    // A strategy whose memory signals immediate termination.
    struct Frozen;

    impl Strategy<Identity> for Frozen {
        type Memory = ();

        fn initialize<R: Rng>(
            &self,
            problem: &Identity,
            _rng: &mut R,
        ) -> Result<((), Scored<i64>), SearchError> {
            Ok(((), Scored::evaluate(problem, 3)))
        }

        fn step<R: Rng>(
            &self,
            problem: &Identity,
            _memory: &mut (),
            _current: &Scored<i64>,
            _best_cost: f64,
            _rng: &mut R,
        ) -> Result<Scored<i64>, SearchError> {
            Ok(Scored::evaluate(problem, 0))
        }

        fn finished(&self, _memory: &()) -> bool {
            true
        }
    }

    #[test]
    fn test_schedule_driven_termination() {
        let config = SearchConfig::default().with_max_iterations(100).with_seed(1);
        let result = Engine::run(&Identity, &Frozen, &config).unwrap();

        assert_eq!(result.iterations, 0);
        assert_eq!(result.best, 3);
        assert_eq!(result.cost_history, vec![3.0]);
    }

    // Errors from the strategy must propagate.
    struct Failing;

    impl Strategy<Identity> for Failing {
        type Memory = ();

        fn initialize<R: Rng>(
            &self,
            _problem: &Identity,
            _rng: &mut R,
        ) -> Result<((), Scored<i64>), SearchError> {
            Err(SearchError::EmptyCandidateSet)
        }

        fn step<R: Rng>(
            &self,
            _problem: &Identity,
            _memory: &mut (),
            _current: &Scored<i64>,
            _best_cost: f64,
            _rng: &mut R,
        ) -> Result<Scored<i64>, SearchError> {
            unreachable!()
        }
    }

    #[test]
    fn test_initialize_error_propagates() {
        let config = SearchConfig::default().with_seed(1);
        let err = Engine::run(&Identity, &Failing, &config).unwrap_err();
        assert_eq!(err, SearchError::EmptyCandidateSet);
    }
}
