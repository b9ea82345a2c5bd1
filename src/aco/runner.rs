//! Ant System execution loop.

use super::config::AcoConfig;
use super::pheromone::PheromoneMatrix;
use crate::geometry::DistanceMatrix;
use crate::random::create_rng;
use crate::tour::Tour;
use rand::Rng;

/// Result of an Ant System run.
#[derive(Debug, Clone)]
pub struct AcoResult {
    /// Best tour of the final generation.
    pub best_tour: Tour,

    /// Cost of `best_tour`.
    pub best_cost: f64,

    /// Number of pheromone-guided generations executed.
    pub generations: usize,

    /// Best cost per generation; the first entry is the random seeding pass.
    pub cost_history: Vec<f64>,
}

/// Executes the Ant System.
///
/// # Usage
///
/// ```
/// use tsp_metaheur::aco::{AcoConfig, AcoRunner};
/// use tsp_metaheur::geometry::{DistanceMatrix, Point};
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 1.0),
///     Point::new(1.0, 1.0),
///     Point::new(1.0, 0.0),
/// ];
/// let matrix = DistanceMatrix::from_points(&points).unwrap();
/// let config = AcoConfig::default().with_generations(50).with_seed(42);
/// let result = AcoRunner::run(&matrix, &config);
/// assert!(result.best_tour.is_valid());
/// ```
pub struct AcoRunner;

impl AcoRunner {
    /// Runs the optimization.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`AcoConfig::validate`]
    /// first to get a descriptive error).
    pub fn run(matrix: &DistanceMatrix, config: &AcoConfig) -> AcoResult {
        config.validate().expect("invalid AcoConfig");

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        let n = matrix.size();

        // Each ant keeps its start city for the whole run; only its
        // unvisited set and path reset between generations.
        let mut ants: Vec<Ant> = (0..config.colony_size)
            .map(|_| Ant::new(rng.random_range(0..n), n))
            .collect();

        // Deposits accumulate across generations; they are never reset.
        let mut deposits = PheromoneMatrix::zeros(n);
        let mut cost_history = Vec::with_capacity(config.generations + 1);

        // Seeding pass: uniformly random construction, one deposit sweep.
        for ant in &mut ants {
            while let Some(count) = ant.unvisited_count() {
                let pick = rng.random_range(0..count);
                let city = ant.nth_unvisited(pick);
                ant.visit(city, matrix);
            }
            ant.close(matrix);
            ant.deposit_trail(&mut deposits);
        }
        cost_history.push(colony_best(&ants).1);

        // whole = retention * base + deposits
        let mut whole = PheromoneMatrix::base_level(matrix);
        whole.blend(config.evaporation_retention, &deposits);

        for _ in 0..config.generations {
            for ant in &mut ants {
                ant.restart();
                while ant.unvisited_count().is_some() {
                    let current = ant.current();
                    let probabilities =
                        transition_probabilities(ant, current, &whole, matrix, config);
                    let draw = rng.random_range(0.0..1.0);
                    let city = roulette_pick(&probabilities, draw);
                    ant.visit(city, matrix);
                }
                ant.close(matrix);
                ant.deposit_trail(&mut deposits);
            }
            whole.blend(config.evaporation_retention, &deposits);
            cost_history.push(colony_best(&ants).1);
        }

        let (best_idx, best_cost) = colony_best(&ants);
        AcoResult {
            best_tour: Tour::close(ants[best_idx].path.clone()),
            best_cost,
            generations: config.generations,
            cost_history,
        }
    }
}

/// One agent of the colony.
#[derive(Debug)]
struct Ant {
    start: usize,
    path: Vec<usize>,
    visited: Vec<bool>,
    traveled: f64,
}

impl Ant {
    fn new(start: usize, n: usize) -> Self {
        let mut ant = Self {
            start,
            path: Vec::with_capacity(n),
            visited: vec![false; n],
            traveled: 0.0,
        };
        ant.restart();
        ant
    }

    /// Resets the path and unvisited set; the start city persists.
    fn restart(&mut self) {
        self.path.clear();
        self.path.push(self.start);
        self.visited.fill(false);
        self.visited[self.start] = true;
        self.traveled = 0.0;
    }

    fn current(&self) -> usize {
        *self.path.last().expect("path always holds the start city")
    }

    /// Number of cities still to visit, or `None` once the open tour is
    /// complete.
    fn unvisited_count(&self) -> Option<usize> {
        let left = self.visited.len() - self.path.len();
        (left > 0).then_some(left)
    }

    /// The `k`-th unvisited city in index order.
    fn nth_unvisited(&self, k: usize) -> usize {
        self.visited
            .iter()
            .enumerate()
            .filter(|(_, &v)| !v)
            .nth(k)
            .map(|(city, _)| city)
            .expect("k is below the unvisited count")
    }

    fn visit(&mut self, city: usize, matrix: &DistanceMatrix) {
        self.traveled += matrix.get(self.current(), city);
        self.visited[city] = true;
        self.path.push(city);
    }

    /// Returns to the start city, completing the closed tour.
    fn close(&mut self, matrix: &DistanceMatrix) {
        self.traveled += matrix.get(self.current(), self.start);
    }

    /// Adds `1 / tour_cost` to every traversed directed edge, including
    /// the closing one.
    fn deposit_trail(&self, deposits: &mut PheromoneMatrix) {
        let amount = 1.0 / self.traveled;
        for w in self.path.windows(2) {
            deposits.deposit(w[0], w[1], amount);
        }
        deposits.deposit(*self.path.last().expect("non-empty path"), self.start, amount);
    }
}

/// Transition probabilities over the ant's unvisited cities, in index order.
///
/// Weight of candidate `j` from city `i` is
/// `pheromone(i, j)^alpha * (1 / d(i, j))^beta`; visited and self candidates
/// are excluded before normalization rather than carried as sentinels.
fn transition_probabilities(
    ant: &Ant,
    current: usize,
    pheromone: &PheromoneMatrix,
    matrix: &DistanceMatrix,
    config: &AcoConfig,
) -> Vec<(usize, f64)> {
    let mut weighted: Vec<(usize, f64)> = ant
        .visited
        .iter()
        .enumerate()
        .filter(|(_, &v)| !v)
        .map(|(j, _)| {
            let w = pheromone.get(current, j).powf(config.alpha)
                * (1.0 / matrix.get(current, j)).powf(config.beta);
            (j, w)
        })
        .collect();

    let total: f64 = weighted.iter().map(|(_, w)| w).sum();
    if total > 0.0 {
        for (_, w) in &mut weighted {
            *w /= total;
        }
    }
    weighted
}

/// Roulette selection over `(city, probability)` candidates in index order.
///
/// Walks the cumulative distribution until it meets or exceeds `draw`.
/// When floating-point rounding leaves the draw unmet, falls back to the
/// last candidate deterministically.
fn roulette_pick(probabilities: &[(usize, f64)], draw: f64) -> usize {
    debug_assert!(!probabilities.is_empty());
    let mut cumulative = 0.0;
    for &(city, p) in probabilities {
        cumulative += p;
        if cumulative >= draw {
            return city;
        }
    }
    probabilities[probabilities.len() - 1].0
}

/// Index and cost of the colony's cheapest tour, first occurrence on ties.
fn colony_best(ants: &[Ant]) -> (usize, f64) {
    let mut best_idx = 0;
    for (i, ant) in ants.iter().enumerate().skip(1) {
        if ant.traveled < ants[best_idx].traveled {
            best_idx = i;
        }
    }
    (best_idx, ants[best_idx].traveled)
}
