//! Configuration errors.

use thiserror::Error;

/// Reasons a [`GaConfig`](super::GaConfig) is rejected at setup.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("population_size must be at least 1")]
    EmptyPopulation,

    #[error("max_generations must be at least 1")]
    NoGenerations,

    #[error("mutation_probability must lie in [0, 1], got {0}")]
    MutationProbability(f64),

    #[error("n_compounds must be at least 3 for two-point crossover, got {0}")]
    TooFewCompounds(usize),

    #[error("compound_attributes must be at least 2 (efficacy and toxicity), got {0}")]
    TooFewAttributes(usize),

    #[error("mating_pool_size must be in 1..={population_size}, got {mating_pool_size}")]
    MatingPoolSize {
        mating_pool_size: usize,
        population_size: usize,
    },

    #[error("bioavailability weight must be finite and non-negative, got {0}")]
    BioavailabilityWeight(f64),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
