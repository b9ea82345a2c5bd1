//! SA execution loop.

use super::config::SaConfig;
use crate::geometry::DistanceMatrix;
use crate::random::create_rng;
use crate::tour::Tour;
use rand::Rng;

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult {
    /// The reported tour: the terminal current state, or the best state
    /// ever observed when
    /// [`return_best_ever`](SaConfig::return_best_ever) is set.
    pub best_tour: Tour,

    /// Cost of `best_tour`.
    pub best_cost: f64,

    /// Total annealing steps (neighbor evaluations).
    pub iterations: usize,

    /// Temperature when the run stopped.
    pub final_temperature: f64,

    /// Accepted moves, including improvements.
    pub accepted_moves: usize,

    /// Strictly improving moves.
    pub improving_moves: usize,
}

/// Probability of accepting `neighbor_cost` from `current_cost` at the
/// given temperature.
///
/// Exactly 1 for improving moves; `exp((current - neighbor) / temperature)`
/// otherwise (the Metropolis criterion, values in `(0, 1]`).
pub fn acceptance_probability(current_cost: f64, neighbor_cost: f64, temperature: f64) -> f64 {
    if neighbor_cost < current_cost {
        1.0
    } else {
        ((current_cost - neighbor_cost) / temperature).exp()
    }
}

/// Executes Simulated Annealing.
///
/// The trajectory is a stochastic hill-climb, not strict elitism: a
/// probabilistically accepted worsening move replaces the tracked state.
/// By default the result is the state after the last step, matching that
/// trajectory semantics; set
/// [`return_best_ever`](SaConfig::return_best_ever) to report the cheapest
/// state seen instead.
///
/// # Usage
///
/// ```
/// use tsp_metaheur::sa::{SaConfig, SaRunner, Schedule};
/// use tsp_metaheur::geometry::{DistanceMatrix, Point};
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 1.0),
///     Point::new(1.0, 1.0),
///     Point::new(1.0, 0.0),
/// ];
/// let matrix = DistanceMatrix::from_points(&points).unwrap();
/// let config = SaConfig::default()
///     .with_initial_temperature(100.0)
///     .with_min_temperature(0.01)
///     .with_schedule(Schedule::Exponential { alpha: 0.995 })
///     .with_seed(42);
/// let result = SaRunner::run(&matrix, &config);
/// assert!(result.best_tour.is_valid());
/// ```
pub struct SaRunner;

impl SaRunner {
    /// Runs the optimization.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`SaConfig::validate`]
    /// first to get a descriptive error).
    pub fn run(matrix: &DistanceMatrix, config: &SaConfig) -> SaResult {
        config.validate().expect("invalid SaConfig");

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        let n = matrix.size();

        let mut current = Tour::random(n, &mut rng);
        let mut current_cost = current.cost(matrix);
        let mut best_ever = current.clone();
        let mut best_ever_cost = current_cost;

        let mut temperature = config.initial_temperature;
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;

        while temperature > config.min_temperature {
            if config.max_iterations > 0 && iterations >= config.max_iterations {
                break;
            }

            // Swap-mutation neighbor: two distinct open positions swapped.
            let mut neighbor = current.clone();
            let i = rng.random_range(0..n);
            let mut j = rng.random_range(0..n);
            while j == i {
                j = rng.random_range(0..n);
            }
            neighbor.swap_positions(i, j);
            let neighbor_cost = neighbor.cost(matrix);

            let accept = if neighbor_cost < current_cost {
                improving_moves += 1;
                true
            } else {
                let probability =
                    acceptance_probability(current_cost, neighbor_cost, temperature);
                rng.random_range(0.0..1.0) < probability
            };

            if accept {
                current = neighbor;
                current_cost = neighbor_cost;
                accepted_moves += 1;
                if current_cost < best_ever_cost {
                    best_ever = current.clone();
                    best_ever_cost = current_cost;
                }
            }

            temperature = config.schedule.next(temperature);
            iterations += 1;
        }

        let (best_tour, best_cost) = if config.return_best_ever {
            (best_ever, best_ever_cost)
        } else {
            (current, current_cost)
        };

        SaResult {
            best_tour,
            best_cost,
            iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
        }
    }
}
