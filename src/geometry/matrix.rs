//! Dense distance matrix.

use super::Point;

/// A dense n×n symmetric Euclidean distance matrix stored in row-major order.
///
/// Diagonal entries are never meaningful for a tour and are never read;
/// [`get`](DistanceMatrix::get) rejects `i == j` in debug builds rather than
/// storing a NaN sentinel. Visited/self candidates are always filtered by
/// index before any arithmetic touches the matrix.
///
/// # Examples
///
/// ```
/// use tsp_metaheur::geometry::{DistanceMatrix, Point};
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(3.0, 4.0),
///     Point::new(6.0, 8.0),
/// ];
/// let dm = DistanceMatrix::from_points(&points).unwrap();
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Computes the pairwise Euclidean distance matrix from city coordinates.
    ///
    /// Each unordered pair is computed once; the matrix is symmetric by
    /// construction. Returns `Err` if fewer than 2 points are supplied —
    /// no tour exists over 0 or 1 cities.
    pub fn from_points(points: &[Point]) -> Result<Self, String> {
        let n = points.len();
        if n < 2 {
            return Err(format!("at least 2 points required, got {n}"));
        }
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = points[i].distance_to(&points[j]);
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }
        Ok(Self { data, size: n })
    }

    /// Returns the distance between cities `i` and `j`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds, or (in debug builds) if
    /// `i == j` — the diagonal is undefined, not zero.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        debug_assert_ne!(i, j, "diagonal distance is undefined");
        self.data[i * self.size + j]
    }

    /// Number of cities in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Largest distance from any other city to city `j`.
    ///
    /// Used by the ant system to seed the base pheromone level
    /// `tau_0[j] = 1 / max_i d(i, j)`.
    pub fn max_distance_to(&self, j: usize) -> f64 {
        (0..self.size)
            .filter(|&i| i != j)
            .map(|i| self.get(i, j))
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_points() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(3.0, 4.0),
            Point::new(0.0, 8.0),
        ]
    }

    #[test]
    fn test_from_points() {
        let dm = DistanceMatrix::from_points(&sample_points()).unwrap();
        assert_eq!(dm.size(), 3);
        assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
        assert!((dm.get(0, 2) - 8.0).abs() < 1e-10);
        assert!((dm.get(1, 2) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_symmetric() {
        let dm = DistanceMatrix::from_points(&sample_points()).unwrap();
        for i in 0..3 {
            for j in 0..3 {
                if i != j {
                    assert_eq!(dm.get(i, j), dm.get(j, i));
                }
            }
        }
    }

    #[test]
    fn test_too_few_points() {
        assert!(DistanceMatrix::from_points(&[]).is_err());
        assert!(DistanceMatrix::from_points(&[Point::new(1.0, 1.0)]).is_err());
    }

    #[test]
    fn test_two_points_ok() {
        let dm =
            DistanceMatrix::from_points(&[Point::new(0.0, 0.0), Point::new(1.0, 0.0)]).unwrap();
        assert_eq!(dm.size(), 2);
        assert!((dm.get(0, 1) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_max_distance_to() {
        let dm = DistanceMatrix::from_points(&sample_points()).unwrap();
        // Distances to city 0: from 1 = 5, from 2 = 8
        assert!((dm.max_distance_to(0) - 8.0).abs() < 1e-10);
        // Distances to city 1: from 0 = 5, from 2 = 5
        assert!((dm.max_distance_to(1) - 5.0).abs() < 1e-10);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "diagonal distance is undefined")]
    fn test_diagonal_read_panics() {
        let dm = DistanceMatrix::from_points(&sample_points()).unwrap();
        dm.get(1, 1);
    }
}
