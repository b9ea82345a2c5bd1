//! Parent selection strategies.

use super::runner::Member;
use rand::Rng;

/// Strategy for choosing parents from the population.
///
/// Both strategies assume minimization (lower tour cost = better) and
/// return `count` parents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Cost-proportionate selection with replacement.
    ///
    /// Fitness is cost-inverted (`max_cost_in_population - cost`) so that
    /// shorter tours get a higher relative probability. A population with
    /// all-equal costs has zero total weight; instead of dividing by zero,
    /// parents are then drawn uniformly at random.
    RouletteWheel,

    /// Truncation selection: the `count` cheapest members become parents.
    ///
    /// Deterministic. Because the merged parent+offspring pool always
    /// contains the previous best member, k-best runs are non-worsening
    /// generation to generation.
    KBest,
}

impl Default for Selection {
    fn default() -> Self {
        Selection::RouletteWheel
    }
}

impl Selection {
    /// Selects `count` parents from the population.
    ///
    /// # Panics
    /// Panics if `population` is empty or `count` is zero.
    pub fn select_parents<R: Rng>(
        &self,
        population: &[Member],
        count: usize,
        rng: &mut R,
    ) -> Vec<Member> {
        assert!(!population.is_empty(), "cannot select from empty population");
        assert!(count > 0, "parent count must be positive");

        match self {
            Selection::KBest => kbest(population, count),
            Selection::RouletteWheel => roulette_wheel(population, count, rng),
        }
    }
}

/// The `count` cheapest members, ties kept in population order.
fn kbest(population: &[Member], count: usize) -> Vec<Member> {
    let mut sorted: Vec<Member> = population.to_vec();
    sorted.sort_by(|a, b| {
        a.cost
            .partial_cmp(&b.cost)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    sorted.truncate(count.min(sorted.len()));
    sorted
}

/// Draws `count` parents with replacement, probability proportional to
/// `max_cost - cost`.
fn roulette_wheel<R: Rng>(population: &[Member], count: usize, rng: &mut R) -> Vec<Member> {
    let max_cost = population
        .iter()
        .map(|m| m.cost)
        .fold(f64::NEG_INFINITY, f64::max);
    let total: f64 = population.iter().map(|m| max_cost - m.cost).sum();

    // All-equal costs: the inverted weights are all zero, so the relative
    // distribution is undefined. Fall back to uniform choice.
    if total <= 0.0 {
        return (0..count)
            .map(|_| population[rng.random_range(0..population.len())].clone())
            .collect();
    }

    let cumulative: Vec<f64> = population
        .iter()
        .scan(0.0, |acc, m| {
            *acc += (max_cost - m.cost) / total;
            Some(*acc)
        })
        .collect();

    (0..count)
        .map(|_| {
            let draw = rng.random_range(0.0..1.0);
            let idx = cumulative
                .iter()
                .position(|&c| c >= draw)
                // rounding can leave the final cumulative sum below 1
                .unwrap_or(population.len() - 1);
            population[idx].clone()
        })
        .collect()
}
