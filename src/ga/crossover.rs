//! Cycle crossover and swap mutation for closed tours.
//!
//! Cycle crossover (CX) partitions tour positions into index cycles and is
//! permutation-preserving by construction: every position holds either a
//! value from parent 1's leading cycle or parent 2's value at that same
//! position, each city exactly once.

use crate::tour::Tour;
use rand::Rng;

/// Produces one offspring from two parent tours via cycle crossover.
///
/// Operates on the open parts of the tours:
///
/// 1. Position 0 takes parent 1's first city.
/// 2. Follow the cycle: look up the city at the current position in
///    parent 2, find that city's position in parent 1, copy it into the
///    offspring there, and continue from that position — until the cycle
///    returns to an already-filled position.
/// 3. Every position the cycle did not reach is filled from parent 2.
///
/// The result is re-closed by repeating its first city. The operator is
/// deterministic; mutate separately with [`swap_mutation`].
///
/// # Panics
///
/// Panics if the parents have different lengths.
pub fn cycle_crossover(parent1: &Tour, parent2: &Tour) -> Tour {
    let p1 = parent1.open();
    let p2 = parent2.open();
    assert_eq!(p1.len(), p2.len(), "parents must have equal length");
    let n = p1.len();

    let mut position_in_p1 = vec![0; n];
    for (i, &city) in p1.iter().enumerate() {
        position_in_p1[city] = i;
    }

    let mut child = vec![usize::MAX; n];
    let mut filled = vec![false; n];

    child[0] = p1[0];
    filled[0] = true;
    let mut city = p2[0];
    loop {
        let position = position_in_p1[city];
        if filled[position] {
            break; // cycle closed
        }
        child[position] = city;
        filled[position] = true;
        city = p2[position];
    }

    for i in 0..n {
        if !filled[i] {
            child[i] = p2[i];
        }
    }

    Tour::close(child)
}

/// Swaps two distinct uniformly random positions in the open part of the
/// tour, then re-closes it.
///
/// The positions are drawn over the tour's full open range; tours of length
/// 1 are returned unchanged.
pub fn swap_mutation<R: Rng>(tour: &mut Tour, rng: &mut R) {
    let n = tour.len();
    if n < 2 {
        return;
    }
    let i = rng.random_range(0..n);
    let mut j = rng.random_range(0..n);
    while j == i {
        j = rng.random_range(0..n);
    }
    tour.swap_positions(i, j);
}
