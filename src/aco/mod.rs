//! Ant System (ACO).
//!
//! A colony of ants constructs closed tours probabilistically, each step
//! biased by pheromone intensity and inverse distance. Pheromone is
//! evaporated and reinforced once per generation, so edges that appear in
//! short tours accumulate desirability over time.
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents"

mod config;
mod pheromone;
mod runner;

pub use config::AcoConfig;
pub use pheromone::PheromoneMatrix;
pub use runner::{AcoResult, AcoRunner};
