//! Crossover and mutation operators for compounds.
//!
//! # Crossover Operators
//!
//! - [`one_point_crossover`]: head of parent1, tail of parent2
//! - [`two_point_crossover`]: parent1 outside `[point1, point2)`, parent2 inside
//!
//! Both produce a single child with the parents' length. The random forms
//! draw cut points and delegate to the `_at` forms, which take explicit
//! points and are fully deterministic.
//!
//! # Mutation
//!
//! - [`mutate`]: with probability `p`, replace exactly one gene vector with
//!   a freshly sampled one. Mutation is per individual, not per gene.

use super::population::random_gene;
use super::types::Compound;
use rand::Rng;

/// Crossover strategy used by the driver.
///
/// # Examples
///
/// ```
/// use compound_ga::ga::{Compound, Crossover, GeneVector};
/// use compound_ga::random::create_rng;
///
/// let p1: Compound = (0..5).map(|_| GeneVector::new(vec![0.0, 0.0])).collect();
/// let p2: Compound = (0..5).map(|_| GeneVector::new(vec![0.5, 0.5])).collect();
/// let child = Crossover::TwoPoint.apply(&p1, &p2, &mut create_rng(42));
/// assert_eq!(child.len(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Crossover {
    /// Single cut point in `[1, n - 1]`.
    OnePoint,

    /// Two cut points, `1 <= point1 < point2 <= n - 1`.
    #[default]
    TwoPoint,
}

impl Crossover {
    /// Combines two parents into one child.
    ///
    /// # Panics
    /// Panics if parents have different lengths or are shorter than the
    /// strategy requires (2 for one-point, 3 for two-point).
    pub fn apply<R: Rng>(&self, parent1: &Compound, parent2: &Compound, rng: &mut R) -> Compound {
        match self {
            Crossover::OnePoint => one_point_crossover(parent1, parent2, rng),
            Crossover::TwoPoint => two_point_crossover(parent1, parent2, rng),
        }
    }
}

// ============================================================================
// Crossover operators
// ============================================================================

/// One-point crossover with a uniformly drawn cut in `[1, n - 1]`.
///
/// # Panics
/// Panics if parents have different lengths or fewer than 2 genes.
pub fn one_point_crossover<R: Rng>(parent1: &Compound, parent2: &Compound, rng: &mut R) -> Compound {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n >= 2, "one-point crossover needs at least 2 genes");

    let point = rng.random_range(1..n);
    one_point_crossover_at(parent1, parent2, point)
}

/// One-point crossover at a fixed cut.
///
/// `child = parent1[..point] ++ parent2[point..]`
///
/// # Panics
/// Panics if parents have different lengths or `point > n`.
pub fn one_point_crossover_at(parent1: &Compound, parent2: &Compound, point: usize) -> Compound {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(point <= n, "cut point {point} out of range for length {n}");

    parent1.genes()[..point]
        .iter()
        .chain(&parent2.genes()[point..])
        .cloned()
        .collect()
}

/// Two-point crossover with uniformly drawn cuts.
///
/// `point1` is drawn from `[1, n - 2]`, then `point2` from `[point1 + 1, n - 1]`.
///
/// # Panics
/// Panics if parents have different lengths or fewer than 3 genes.
pub fn two_point_crossover<R: Rng>(parent1: &Compound, parent2: &Compound, rng: &mut R) -> Compound {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n >= 3, "two-point crossover needs at least 3 genes");

    let (point1, point2) = two_cut_points(n, rng);
    two_point_crossover_at(parent1, parent2, point1, point2)
}

/// Two-point crossover at fixed cuts.
///
/// `child = parent1[..point1] ++ parent2[point1..point2] ++ parent1[point2..]`
///
/// # Panics
/// Panics if parents have different lengths or the points are not
/// `point1 <= point2 <= n`.
pub fn two_point_crossover_at(
    parent1: &Compound,
    parent2: &Compound,
    point1: usize,
    point2: usize,
) -> Compound {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(
        point1 <= point2 && point2 <= n,
        "cut points ({point1}, {point2}) out of range for length {n}"
    );

    parent1.genes()[..point1]
        .iter()
        .chain(&parent2.genes()[point1..point2])
        .chain(&parent1.genes()[point2..])
        .cloned()
        .collect()
}

// ============================================================================
// Mutation
// ============================================================================

/// Mutates a child in place with the given probability.
///
/// When triggered, exactly one gene index is chosen uniformly and its gene
/// vector is replaced by a fresh one with the same number of attributes.
/// Returns the mutated index, or `None` when the child was left untouched.
///
/// `probability` is clamped to `[0, 1]` and NaN counts as 0. A probability
/// of 0 never touches the child; 1 always replaces exactly one gene.
pub fn mutate<R: Rng>(child: &mut Compound, probability: f64, rng: &mut R) -> Option<usize> {
    let n = child.len();
    let p = if probability.is_nan() {
        0.0
    } else {
        probability.clamp(0.0, 1.0)
    };
    if n == 0 || !rng.random_bool(p) {
        return None;
    }

    let idx = rng.random_range(0..n);
    let genes = child.genes_mut();
    let attributes = genes[idx].len();
    genes[idx] = random_gene(attributes, rng);
    Some(idx)
}

// ============================================================================
// Helpers
// ============================================================================

/// Draw `(point1, point2)` with `1 <= point1 <= n - 2` and
/// `point1 < point2 <= n - 1`.
fn two_cut_points<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let point1 = rng.random_range(1..=n - 2);
    let point2 = rng.random_range(point1 + 1..=n - 1);
    (point1, point2)
}

// ============================================================================
// Tests
// ============================================================================
