//! Pheromone intensity matrix.

use crate::geometry::DistanceMatrix;

/// A dense n×n matrix of non-negative pheromone levels, one per directed
/// edge. The diagonal is unused: construction never considers staying on
/// the current city, so those entries are written once at initialization
/// and never read.
#[derive(Debug, Clone)]
pub struct PheromoneMatrix {
    data: Vec<f64>,
    size: usize,
}

impl PheromoneMatrix {
    /// Creates a matrix of the given size with all levels zero.
    pub fn zeros(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Creates the base pheromone matrix for an instance.
    ///
    /// Every edge into city `j` starts at `tau_0[j] = 1 / max_i d(i, j)`,
    /// the reciprocal of `j`'s farthest known distance.
    pub fn base_level(matrix: &DistanceMatrix) -> Self {
        let n = matrix.size();
        let mut pheromone = Self::zeros(n);
        for j in 0..n {
            let tau_0 = 1.0 / matrix.max_distance_to(j);
            for i in 0..n {
                if i != j {
                    pheromone.set(i, j, tau_0);
                }
            }
        }
        pheromone
    }

    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    pub fn set(&mut self, from: usize, to: usize, level: f64) {
        self.data[from * self.size + to] = level;
    }

    /// Adds `amount` to the level of edge `(from, to)`.
    pub fn deposit(&mut self, from: usize, to: usize, amount: f64) {
        self.data[from * self.size + to] += amount;
    }

    /// Evaporate-then-reinforce update:
    /// `self = retention * self + deposits`, entrywise.
    pub fn blend(&mut self, retention: f64, deposits: &PheromoneMatrix) {
        debug_assert_eq!(self.size, deposits.size);
        for (level, &d) in self.data.iter_mut().zip(deposits.data.iter()) {
            *level = retention * *level + d;
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    fn sample_matrix() -> DistanceMatrix {
        DistanceMatrix::from_points(&[
            Point::new(0.0, 0.0),
            Point::new(3.0, 4.0),
            Point::new(0.0, 8.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_base_level_is_reciprocal_of_max_distance() {
        let dm = sample_matrix();
        let pheromone = PheromoneMatrix::base_level(&dm);
        // max distance to city 0 is 8 (from city 2)
        assert!((pheromone.get(1, 0) - 1.0 / 8.0).abs() < 1e-12);
        assert!((pheromone.get(2, 0) - 1.0 / 8.0).abs() < 1e-12);
        // max distance to city 1 is 5
        assert!((pheromone.get(0, 1) - 1.0 / 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_deposit_accumulates() {
        let mut pheromone = PheromoneMatrix::zeros(3);
        pheromone.deposit(0, 1, 0.25);
        pheromone.deposit(0, 1, 0.5);
        assert!((pheromone.get(0, 1) - 0.75).abs() < 1e-12);
        assert_eq!(pheromone.get(1, 0), 0.0);
    }

    #[test]
    fn test_blend() {
        let mut whole = PheromoneMatrix::zeros(2);
        whole.set(0, 1, 2.0);
        let mut deposits = PheromoneMatrix::zeros(2);
        deposits.set(0, 1, 1.0);
        whole.blend(0.5, &deposits);
        assert!((whole.get(0, 1) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_blend_zero_retention_discards_history() {
        let mut whole = PheromoneMatrix::zeros(2);
        whole.set(0, 1, 100.0);
        let mut deposits = PheromoneMatrix::zeros(2);
        deposits.set(0, 1, 0.125);
        whole.blend(0.0, &deposits);
        assert!((whole.get(0, 1) - 0.125).abs() < 1e-12);
    }
}
