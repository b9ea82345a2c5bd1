//! Problem geometry: city coordinates and pairwise distances.

mod matrix;
mod point;

pub use matrix::DistanceMatrix;
pub use point::Point;
