//! Traveling Salesman metaheuristics.
//!
//! Three independent optimizers for the symmetric Euclidean TSP, sharing
//! only the problem representation (points, distance matrix, closed tours):
//!
//! - **Ant System (ACO)**: a colony of agents constructs tours
//!   probabilistically, biased by a pheromone matrix that is evaporated
//!   and reinforced each generation.
//! - **Genetic Algorithm (GA)**: population-based search with cycle
//!   crossover, swap mutation, and roulette-wheel or k-best parent
//!   selection.
//! - **Simulated Annealing (SA)**: single-solution trajectory search with
//!   swap-mutation neighbors and a temperature-scheduled acceptance
//!   criterion.
//!
//! # Shared Types
//!
//! - [`geometry::Point`]: 2-D city coordinate
//! - [`geometry::DistanceMatrix`]: dense symmetric pairwise distances
//! - [`tour::Tour`]: closed permutation route (first city repeated at the end)
//!
//! Each optimizer takes a [`geometry::DistanceMatrix`] and its own config,
//! runs to the configured generation/temperature budget, and returns the
//! best tour and its cost. All randomness comes from a per-run seedable
//! generator, so a fixed seed reproduces a run exactly.

pub mod aco;
pub mod ga;
pub mod geometry;
pub mod sa;
pub mod tour;

mod random;
