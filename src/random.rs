//! Seedable RNG construction shared by all runners.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a deterministic RNG from a seed.
///
/// Every runner owns one of these for the duration of a run; there is no
/// global random state anywhere in the crate.
pub(crate) fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
