//! Genetic Algorithm.
//!
//! Population-based search over closed tours. Each generation selects
//! parents (roulette wheel or k-best), reproduces them via cycle
//! crossover with swap mutation, then merges parents and offspring and
//! keeps the cheapest members as the next population.
//!
//! # Key Types
//!
//! - [`GaConfig`]: population size, parent ratio, operator rates, selection
//! - [`Selection`]: parent selection strategy
//! - [`GaRunner`]: executes the evolutionary loop
//! - [`GaResult`]: final tour, cost, and per-generation history
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Oliver, Smith & Holland (1987), "A Study of Permutation Crossover
//!   Operators on the Traveling Salesman Problem" (cycle crossover)

mod config;
mod crossover;
mod runner;
mod selection;

pub use config::GaConfig;
pub use crossover::{cycle_crossover, swap_mutation};
pub use runner::{GaResult, GaRunner, Member};
pub use selection::Selection;
