//! GA configuration.

use super::selection::Selection;

/// Configuration for the Genetic Algorithm.
///
/// # Examples
///
/// ```
/// use tsp_metaheur::ga::{GaConfig, Selection};
///
/// let config = GaConfig::default()
///     .with_population_size(250)
///     .with_generations(1000)
///     .with_parent_ratio(0.8)
///     .with_selection(Selection::KBest)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
pub struct GaConfig {
    /// Number of tours kept in the population between generations.
    ///
    /// Must be at least 4 — cycle crossover needs room to form a
    /// non-trivial cycle.
    pub population_size: usize,

    /// Number of generations to run. `0` returns the best member of the
    /// initial random population.
    pub generations: usize,

    /// Fraction of the population selected as parents, in `(0, 1]`.
    ///
    /// The parent count is `floor(parent_ratio * population_size)`,
    /// clamped to at least 2 so pairing is always possible.
    pub parent_ratio: f64,

    /// Probability that an offspring is mutated, in `[0, 1]`.
    pub mutation_probability: f64,

    /// Parent selection strategy.
    pub selection: Selection,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            generations: 200,
            parent_ratio: 0.8,
            mutation_probability: 0.2,
            selection: Selection::default(),
            seed: None,
        }
    }
}

impl GaConfig {
    pub fn with_population_size(mut self, p: usize) -> Self {
        self.population_size = p;
        self
    }

    pub fn with_generations(mut self, g: usize) -> Self {
        self.generations = g;
        self
    }

    pub fn with_parent_ratio(mut self, n: f64) -> Self {
        self.parent_ratio = n;
        self
    }

    pub fn with_mutation_probability(mut self, m: f64) -> Self {
        self.mutation_probability = m;
        self
    }

    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size < 4 {
            return Err(format!(
                "population_size must be at least 4, got {}",
                self.population_size
            ));
        }
        if !(self.parent_ratio > 0.0 && self.parent_ratio <= 1.0) {
            return Err(format!(
                "parent_ratio must be in (0, 1], got {}",
                self.parent_ratio
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_probability) {
            return Err(format!(
                "mutation_probability must be in [0, 1], got {}",
                self.mutation_probability
            ));
        }
        Ok(())
    }
}
