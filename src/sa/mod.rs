//! Simulated Annealing (SA).
//!
//! Single-solution trajectory search over closed tours. Each step proposes
//! a swap-mutation neighbor; improvements are always accepted, worsenings
//! probabilistically according to a decaying temperature. Inherently
//! sequential: every step depends on the previously accepted state.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;

pub use config::{SaConfig, Schedule};
pub use runner::{acceptance_probability, SaResult, SaRunner};
