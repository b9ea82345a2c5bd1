//! Closed tours over a city set.

use crate::geometry::DistanceMatrix;
use rand::seq::SliceRandom;
use rand::Rng;

/// A closed tour: a permutation of `0..n` with the first city repeated at
/// the end, so the sequence has `n + 1` entries and the closing edge is
/// implicit in the representation rather than a free choice.
///
/// Invariant: every index in `0..n` appears exactly once among the first
/// `n` positions, and `cities[n] == cities[0]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tour {
    cities: Vec<usize>,
}

impl Tour {
    /// Builds a tour from an open permutation by appending its first city.
    ///
    /// # Panics
    ///
    /// Panics if `open` is empty.
    pub fn close(mut open: Vec<usize>) -> Self {
        assert!(!open.is_empty(), "cannot close an empty tour");
        open.push(open[0]);
        Self { cities: open }
    }

    /// Builds a uniformly random closed tour over `n` cities.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        let mut open: Vec<usize> = (0..n).collect();
        open.shuffle(rng);
        Self::close(open)
    }

    /// The full closed sequence, length `n + 1`.
    pub fn cities(&self) -> &[usize] {
        &self.cities
    }

    /// The open part of the tour: the first `n` positions, a permutation
    /// of `0..n`.
    pub fn open(&self) -> &[usize] {
        &self.cities[..self.cities.len() - 1]
    }

    /// Number of distinct cities visited. Always at least 1.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.cities.len() - 1
    }

    /// Total Euclidean length: sum of distances over consecutive pairs,
    /// including the closing edge. O(n), no caching.
    pub fn cost(&self, matrix: &DistanceMatrix) -> f64 {
        self.cities
            .windows(2)
            .map(|w| matrix.get(w[0], w[1]))
            .sum()
    }

    /// Swaps two positions in the open part and re-closes the tour.
    ///
    /// When position 0 is involved, the closing entry is updated to match,
    /// preserving the invariant.
    ///
    /// # Panics
    ///
    /// Panics if either position is outside the open range.
    pub fn swap_positions(&mut self, i: usize, j: usize) {
        let n = self.len();
        assert!(i < n && j < n, "swap positions must lie in the open part");
        self.cities.swap(i, j);
        self.cities[n] = self.cities[0];
    }

    /// Checks the closed-permutation invariant.
    pub fn is_valid(&self) -> bool {
        let n = self.len();
        if self.cities[n] != self.cities[0] {
            return false;
        }
        let mut seen = vec![false; n];
        for &c in self.open() {
            if c >= n || seen[c] {
                return false;
            }
            seen[c] = true;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::random::create_rng;

    fn unit_square() -> DistanceMatrix {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 1.0),
            Point::new(1.0, 0.0),
        ];
        DistanceMatrix::from_points(&points).unwrap()
    }

    #[test]
    fn test_close_appends_first() {
        let tour = Tour::close(vec![2, 0, 1]);
        assert_eq!(tour.cities(), &[2, 0, 1, 2]);
        assert_eq!(tour.open(), &[2, 0, 1]);
        assert_eq!(tour.len(), 3);
        assert!(tour.is_valid());
    }

    #[test]
    fn test_random_is_valid() {
        let mut rng = create_rng(42);
        for _ in 0..50 {
            let tour = Tour::random(10, &mut rng);
            assert!(tour.is_valid(), "invalid random tour: {tour:?}");
        }
    }

    #[test]
    fn test_cost_unit_square_perimeter() {
        let dm = unit_square();
        let tour = Tour::close(vec![0, 1, 2, 3]);
        assert!((tour.cost(&dm) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_cost_includes_closing_edge() {
        let dm = unit_square();
        // 0 -> 2 and 1 -> 3 are diagonals: 2*sqrt(2) + 2
        let tour = Tour::close(vec![0, 2, 1, 3]);
        let expected = 2.0 * std::f64::consts::SQRT_2 + 2.0;
        assert!((tour.cost(&dm) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_swap_positions_keeps_closure() {
        let mut tour = Tour::close(vec![0, 1, 2, 3]);
        tour.swap_positions(0, 2);
        assert_eq!(tour.cities(), &[2, 1, 0, 3, 2]);
        assert!(tour.is_valid());
    }

    #[test]
    fn test_swap_same_position_is_identity() {
        let mut tour = Tour::close(vec![3, 1, 0, 2]);
        let before = tour.clone();
        tour.swap_positions(1, 1);
        assert_eq!(tour, before);
    }

    #[test]
    fn test_invalid_detection() {
        let broken = Tour {
            cities: vec![0, 1, 1, 0],
        };
        assert!(!broken.is_valid());
        let unclosed = Tour {
            cities: vec![0, 1, 2, 1],
        };
        assert!(!unclosed.is_valid());
    }
}
