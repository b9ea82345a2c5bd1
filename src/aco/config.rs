//! ACO configuration.

/// Configuration for the Ant System.
///
/// # Degenerate settings
///
/// All of these are accepted and well-defined:
///
/// - `alpha = 0`: pheromone is ignored — distance-greedy probabilistic choice
/// - `beta = 0`: distance is ignored — pure pheromone following
/// - `evaporation_retention = 1`: no evaporation, monotonic reinforcement
/// - `evaporation_retention = 0`: all pheromone history discarded each
///   generation
///
/// # Examples
///
/// ```
/// use tsp_metaheur::aco::AcoConfig;
///
/// let config = AcoConfig::default()
///     .with_colony_size(20)
///     .with_generations(200)
///     .with_alpha(1.0)
///     .with_beta(5.0)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
pub struct AcoConfig {
    /// Number of ants constructing tours each generation.
    pub colony_size: usize,

    /// Number of pheromone-guided generations after the random seeding pass.
    ///
    /// `0` is allowed: the result is then the best tour of the seeding pass.
    pub generations: usize,

    /// Pheromone-influence exponent.
    pub alpha: f64,

    /// Distance-influence exponent.
    pub beta: f64,

    /// Fraction of pheromone retained at each update, in `[0, 1]`.
    ///
    /// The per-generation update is
    /// `whole = retention * whole + deposits`.
    pub evaporation_retention: f64,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            colony_size: 20,
            generations: 200,
            alpha: 1.0,
            beta: 5.0,
            evaporation_retention: 0.5,
            seed: None,
        }
    }
}

impl AcoConfig {
    pub fn with_colony_size(mut self, k: usize) -> Self {
        self.colony_size = k;
        self
    }

    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    pub fn with_evaporation_retention(mut self, p: f64) -> Self {
        self.evaporation_retention = p;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.colony_size == 0 {
            return Err("colony_size must be at least 1".into());
        }
        if self.alpha < 0.0 || !self.alpha.is_finite() {
            return Err(format!("alpha must be finite and >= 0, got {}", self.alpha));
        }
        if self.beta < 0.0 || !self.beta.is_finite() {
            return Err(format!("beta must be finite and >= 0, got {}", self.beta));
        }
        if !(0.0..=1.0).contains(&self.evaporation_retention) {
            return Err(format!(
                "evaporation_retention must be in [0, 1], got {}",
                self.evaporation_retention
            ));
        }
        Ok(())
    }
}
