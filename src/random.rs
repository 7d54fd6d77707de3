//! Seedable random source shared by every GA component.
//!
//! All operators are generic over [`rand::Rng`], so any generator can be
//! injected. [`create_rng`] builds the standard one used by the driver.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a deterministic random number generator from a seed.
///
/// Two generators built from the same seed produce identical streams.
///
/// ```
/// use compound_ga::random::create_rng;
/// use rand::Rng;
///
/// let mut a = create_rng(7);
/// let mut b = create_rng(7);
/// assert_eq!(a.random::<u64>(), b.random::<u64>());
/// ```
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a generator from the configured seed, or a fresh random seed.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => create_rng(seed),
        None => create_rng(rand::random()),
    }
}
