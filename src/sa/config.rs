//! SA configuration and temperature schedules.

/// Temperature schedule for the annealing run.
#[derive(Debug, Clone, Copy)]
pub enum Schedule {
    /// Exponential decay: `T_{k+1} = alpha * T_k`.
    ///
    /// Typical `alpha`: 0.999–0.9999. Validation requires `alpha` in
    /// `(0, 1)`; [`Schedule::next`] itself is defined for any factor,
    /// which keeps the update formula testable in isolation.
    Exponential {
        /// Decay factor in (0, 1). Higher = slower cooling.
        alpha: f64,
    },

    /// Inverse decay: `T_{k+1} = T_k / (1 + beta * T_k)`.
    ///
    /// Cools fast at high temperature, slow at low temperature.
    Inverse {
        /// Decay parameter, must be positive.
        beta: f64,
    },
}

impl Schedule {
    /// Applies one temperature step.
    pub fn next(&self, temperature: f64) -> f64 {
        match *self {
            Schedule::Exponential { alpha } => alpha * temperature,
            Schedule::Inverse { beta } => temperature / (1.0 + beta * temperature),
        }
    }
}

impl Default for Schedule {
    fn default() -> Self {
        Schedule::Exponential { alpha: 0.9999 }
    }
}

/// Configuration for Simulated Annealing.
///
/// # Examples
///
/// ```
/// use tsp_metaheur::sa::{SaConfig, Schedule};
///
/// let config = SaConfig::default()
///     .with_initial_temperature(1e6)
///     .with_min_temperature(1.0)
///     .with_schedule(Schedule::Exponential { alpha: 0.9999 })
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
pub struct SaConfig {
    /// Starting temperature. Higher values accept more worsening moves
    /// early on.
    pub initial_temperature: f64,

    /// The run stops once the temperature drops to or below this value.
    /// Must lie in `(0, initial_temperature)`.
    pub min_temperature: f64,

    /// Temperature schedule, applied once per step.
    pub schedule: Schedule,

    /// Which state the result reports.
    ///
    /// `false` (default): the state after the last accepted or rejected
    /// step — a probabilistically accepted worsening near the end is what
    /// you get back. `true`: the cheapest state observed at any point of
    /// the run. Both interpretations see the same trajectory; only the
    /// reported tour differs.
    pub return_best_ever: bool,

    /// Hard cap on annealing steps. `0` disables the cap and the
    /// temperature budget alone terminates the run.
    pub max_iterations: usize,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 1e6,
            min_temperature: 1.0,
            schedule: Schedule::default(),
            return_best_ever: false,
            max_iterations: 0,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_schedule(mut self, schedule: Schedule) -> Self {
        self.schedule = schedule;
        self
    }

    pub fn with_return_best_ever(mut self, flag: bool) -> Self {
        self.return_best_ever = flag;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.initial_temperature > 0.0) {
            return Err(format!(
                "initial_temperature must be positive, got {}",
                self.initial_temperature
            ));
        }
        if !(self.min_temperature > 0.0 && self.min_temperature < self.initial_temperature) {
            return Err(format!(
                "min_temperature must be in (0, initial_temperature), got {}",
                self.min_temperature
            ));
        }
        match self.schedule {
            Schedule::Exponential { alpha } => {
                if !(alpha > 0.0 && alpha < 1.0) {
                    return Err(format!("exponential alpha must be in (0, 1), got {alpha}"));
                }
            }
            Schedule::Inverse { beta } => {
                if !(beta > 0.0) {
                    return Err(format!("inverse beta must be positive, got {beta}"));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SaConfig::default();
        assert!((config.initial_temperature - 1e6).abs() < 1e-6);
        assert!((config.min_temperature - 1.0).abs() < 1e-12);
        assert!(!config.return_best_ever);
        assert_eq!(config.max_iterations, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_exponential_step() {
        let schedule = Schedule::Exponential { alpha: 0.5 };
        assert!((schedule.next(100.0) - 50.0).abs() < 1e-12);
    }

    #[test]
    fn test_exponential_alpha_one_never_decays() {
        // Degenerate factor, valid for the step function itself: the
        // temperature (and with it the acceptance probability at fixed
        // cost delta) stays constant across steps.
        let schedule = Schedule::Exponential { alpha: 1.0 };
        let mut t = 42.0;
        for _ in 0..100 {
            t = schedule.next(t);
        }
        assert!((t - 42.0).abs() < 1e-12);
    }

    #[test]
    fn test_inverse_step() {
        let schedule = Schedule::Inverse { beta: 0.1 };
        // 10 / (1 + 0.1 * 10) = 5
        assert!((schedule.next(10.0) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_inverse_is_monotone_decreasing() {
        let schedule = Schedule::Inverse { beta: 0.01 };
        let mut t = 1000.0;
        for _ in 0..50 {
            let next = schedule.next(t);
            assert!(next < t);
            assert!(next > 0.0);
            t = next;
        }
    }

    #[test]
    fn test_validate_bad_initial_temperature() {
        assert!(SaConfig::default()
            .with_initial_temperature(0.0)
            .validate()
            .is_err());
        assert!(SaConfig::default()
            .with_initial_temperature(-5.0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_min_temperature_range() {
        assert!(SaConfig::default()
            .with_min_temperature(0.0)
            .validate()
            .is_err());
        assert!(SaConfig::default()
            .with_initial_temperature(10.0)
            .with_min_temperature(20.0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_bad_alpha() {
        assert!(SaConfig::default()
            .with_schedule(Schedule::Exponential { alpha: 1.0 })
            .validate()
            .is_err());
        assert!(SaConfig::default()
            .with_schedule(Schedule::Exponential { alpha: 0.0 })
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_bad_beta() {
        assert!(SaConfig::default()
            .with_schedule(Schedule::Inverse { beta: 0.0 })
            .validate()
            .is_err());
        assert!(SaConfig::default()
            .with_schedule(Schedule::Inverse { beta: -1.0 })
            .validate()
            .is_err());
    }

    #[test]
    fn test_builder_pattern() {
        let config = SaConfig::default()
            .with_initial_temperature(500.0)
            .with_min_temperature(0.5)
            .with_schedule(Schedule::Inverse { beta: 0.001 })
            .with_return_best_ever(true)
            .with_max_iterations(10_000)
            .with_seed(7);
        assert!(config.return_best_ever);
        assert_eq!(config.max_iterations, 10_000);
        assert_eq!(config.seed, Some(7));
        assert!(config.validate().is_ok());
    }
}
