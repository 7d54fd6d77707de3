//! Fitness evaluation.
//!
//! Fitness is a single non-negative scalar; **higher is better**. The base
//! score rewards total efficacy and penalizes total toxicity:
//!
//! ```text
//! fitness = Σ efficacy / (Σ toxicity + 1)
//! ```
//!
//! The `+ 1` keeps the denominator positive for every valid compound.

use super::types::Compound;

/// How a compound's attributes combine into a fitness score.
///
/// # Examples
///
/// ```
/// use compound_ga::ga::{Compound, FitnessScheme, GeneVector};
///
/// let c = Compound::new(vec![GeneVector::new(vec![0.8, 0.6, 0.5])]);
/// let f = FitnessScheme::EfficacyOverToxicity.evaluate(&c);
/// assert!((f - 0.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FitnessScheme {
    /// `Σ efficacy / (Σ toxicity + 1)`.
    ///
    /// Bioavailability is summed alongside but does not affect the score.
    #[default]
    EfficacyOverToxicity,

    /// `(Σ efficacy + weight · Σ bioavailability) / (Σ toxicity + 1)`.
    ///
    /// `weight` must be finite and non-negative.
    BioavailabilityWeighted {
        /// Contribution of one unit of bioavailability relative to efficacy.
        weight: f64,
    },
}

impl FitnessScheme {
    /// Scores a compound. Always `>= 0` for attributes in `[0, 1)`.
    pub fn evaluate(&self, compound: &Compound) -> f64 {
        let efficacy = compound.total_efficacy();
        let toxicity = compound.total_toxicity();
        let bioavailability = compound.total_bioavailability();

        match self {
            FitnessScheme::EfficacyOverToxicity => {
                let _ = bioavailability;
                efficacy / (toxicity + 1.0)
            }
            FitnessScheme::BioavailabilityWeighted { weight } => {
                (efficacy + weight * bioavailability) / (toxicity + 1.0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::types::GeneVector;

    fn compound(rows: &[[f64; 3]]) -> Compound {
        rows.iter().map(|r| GeneVector::new(r.to_vec())).collect()
    }

    #[test]
    fn test_efficacy_over_toxicity() {
        let c = compound(&[[0.5, 0.25, 0.9], [0.5, 0.75, 0.9]]);
        // 1.0 / (1.0 + 1)
        let f = FitnessScheme::EfficacyOverToxicity.evaluate(&c);
        assert!((f - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_bioavailability_ignored_by_default() {
        let a = compound(&[[0.4, 0.2, 0.0]]);
        let b = compound(&[[0.4, 0.2, 0.99]]);
        let scheme = FitnessScheme::default();
        assert_eq!(scheme.evaluate(&a), scheme.evaluate(&b));
    }

    #[test]
    fn test_bioavailability_weighted() {
        let c = compound(&[[0.5, 0.0, 0.5]]);
        let f = FitnessScheme::BioavailabilityWeighted { weight: 2.0 }.evaluate(&c);
        assert!((f - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_zero_weight_matches_default() {
        let c = compound(&[[0.3, 0.6, 0.9], [0.1, 0.2, 0.4]]);
        let base = FitnessScheme::EfficacyOverToxicity.evaluate(&c);
        let weighted = FitnessScheme::BioavailabilityWeighted { weight: 0.0 }.evaluate(&c);
        assert_eq!(base, weighted);
    }

    #[test]
    fn test_zero_compound_scores_zero() {
        let c = compound(&[[0.0, 0.0, 0.0]; 4]);
        assert_eq!(FitnessScheme::default().evaluate(&c), 0.0);
    }

    #[test]
    fn test_less_toxic_scores_higher() {
        let safe = compound(&[[0.5, 0.1, 0.5]]);
        let toxic = compound(&[[0.5, 0.9, 0.5]]);
        let scheme = FitnessScheme::default();
        assert!(scheme.evaluate(&safe) > scheme.evaluate(&toxic));
    }
}
