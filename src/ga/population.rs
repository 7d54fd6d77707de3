//! Random population generation.
//!
//! Every attribute is drawn independently and uniformly from `[0, 1)`.

use super::types::{Compound, GeneVector, Population};
use rand::Rng;

/// Samples a fresh gene vector with `attributes` values in `[0, 1)`.
pub fn random_gene<R: Rng>(attributes: usize, rng: &mut R) -> GeneVector {
    GeneVector::new((0..attributes).map(|_| rng.random::<f64>()).collect())
}

/// Samples a compound of `n_compounds` random gene vectors.
pub fn random_compound<R: Rng>(n_compounds: usize, attributes: usize, rng: &mut R) -> Compound {
    (0..n_compounds)
        .map(|_| random_gene(attributes, rng))
        .collect()
}

/// Samples `size` independent random compounds.
pub fn random_population<R: Rng>(
    size: usize,
    n_compounds: usize,
    attributes: usize,
    rng: &mut R,
) -> Population {
    (0..size)
        .map(|_| random_compound(n_compounds, attributes, rng))
        .collect()
}
