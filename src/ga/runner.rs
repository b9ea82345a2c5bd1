//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete process:
//! initialization → selection → cycle crossover + mutation → merge → repeat.

use super::config::GaConfig;
use super::crossover::{cycle_crossover, swap_mutation};
use crate::geometry::DistanceMatrix;
use crate::random::create_rng;
use crate::tour::Tour;
use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// One population member: a closed tour and its cost.
#[derive(Debug, Clone)]
pub struct Member {
    pub tour: Tour,
    pub cost: f64,
}

impl Member {
    fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        Self {
            tour: Tour::random(n, rng),
            cost: f64::INFINITY,
        }
    }

    fn unevaluated(tour: Tour) -> Self {
        Self {
            tour,
            cost: f64::INFINITY,
        }
    }
}

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// Cheapest tour in the final population.
    pub best_tour: Tour,

    /// Cost of `best_tour`.
    pub best_cost: f64,

    /// Number of generations executed.
    pub generations: usize,

    /// Best cost per generation; the first entry is the initial random
    /// population.
    pub cost_history: Vec<f64>,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use tsp_metaheur::ga::{GaConfig, GaRunner, Selection};
/// use tsp_metaheur::geometry::{DistanceMatrix, Point};
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 1.0),
///     Point::new(1.0, 1.0),
///     Point::new(1.0, 0.0),
/// ];
/// let matrix = DistanceMatrix::from_points(&points).unwrap();
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_generations(50)
///     .with_selection(Selection::KBest)
///     .with_seed(42);
/// let result = GaRunner::run(&matrix, &config);
/// assert!(result.best_tour.is_valid());
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA optimization.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`GaConfig::validate`]
    /// first to get a descriptive error).
    pub fn run(matrix: &DistanceMatrix, config: &GaConfig) -> GaResult {
        config.validate().expect("invalid GaConfig");

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        let n = matrix.size();

        // 1. Initial population: random closed tours, all costs evaluated.
        let mut population: Vec<Member> = (0..config.population_size)
            .map(|_| Member::random(n, &mut rng))
            .collect();
        evaluate_members(matrix, &mut population);
        sort_by_cost(&mut population);

        let mut cost_history = Vec::with_capacity(config.generations + 1);
        cost_history.push(population[0].cost);

        let parent_count =
            ((config.parent_ratio * config.population_size as f64) as usize).max(2);

        // 2. Evolutionary loop.
        for _ in 0..config.generations {
            let parents = config
                .selection
                .select_parents(&population, parent_count, &mut rng);

            // Random pairing with replacement; each pair yields two
            // children, so offspring reach at least the parent count.
            let mut offspring: Vec<Member> = Vec::with_capacity(parents.len() + 1);
            while offspring.len() < parents.len() {
                let p1 = &parents[rng.random_range(0..parents.len())].tour;
                let p2 = &parents[rng.random_range(0..parents.len())].tour;

                for mut child in [cycle_crossover(p1, p2), cycle_crossover(p2, p1)] {
                    if rng.random_range(0.0..1.0) < config.mutation_probability {
                        swap_mutation(&mut child, &mut rng);
                    }
                    offspring.push(Member::unevaluated(child));
                }
            }
            evaluate_members(matrix, &mut offspring);

            // Merge parents and offspring, keep the cheapest P members.
            population = parents;
            population.append(&mut offspring);
            sort_by_cost(&mut population);
            population.truncate(config.population_size);

            cost_history.push(population[0].cost);
        }

        let best = population[0].clone();
        GaResult {
            best_tour: best.tour,
            best_cost: best.cost,
            generations: config.generations,
            cost_history,
        }
    }
}

/// Evaluates every member's tour cost against the distance matrix.
///
/// With the `parallel` feature, evaluation fans out over rayon; cost
/// evaluation is pure, so the result is identical either way.
#[cfg(feature = "parallel")]
fn evaluate_members(matrix: &DistanceMatrix, members: &mut [Member]) {
    members.par_iter_mut().for_each(|m| {
        m.cost = m.tour.cost(matrix);
    });
}

#[cfg(not(feature = "parallel"))]
fn evaluate_members(matrix: &DistanceMatrix, members: &mut [Member]) {
    for m in members.iter_mut() {
        m.cost = m.tour.cost(matrix);
    }
}

fn sort_by_cost(members: &mut [Member]) {
    members.sort_by(|a, b| {
        a.cost
            .partial_cmp(&b.cost)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}
