//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.
//! Everything is fixed at setup; [`GaConfig::validate`] rejects invalid
//! combinations before any population is generated.

use super::error::{ConfigError, Result};
use super::fitness::FitnessScheme;
use super::operators::Crossover;

/// Configuration for the compound GA.
///
/// # Defaults
///
/// ```
/// use compound_ga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 20);
/// assert_eq!(config.max_generations, 200);
/// assert_eq!(config.mating_pool_size, 10);
/// assert!(!config.elitism);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use compound_ga::ga::{Crossover, GaConfig};
///
/// let config = GaConfig::default()
///     .with_population_size(40)
///     .with_mating_pool_ratio(0.25)
///     .with_crossover(Crossover::OnePoint)
///     .with_elitism(true)
///     .with_seed(7);
/// assert_eq!(config.mating_pool_size, 10);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GaConfig {
    /// Number of compounds in every generation.
    pub population_size: usize,

    /// Number of generations (snapshots) the driver produces.
    pub max_generations: usize,

    /// Probability that a child has one gene vector replaced (0.0–1.0).
    pub mutation_probability: f64,

    /// Gene vectors per compound. Must be at least 3.
    pub n_compounds: usize,

    /// Attributes per gene vector: efficacy, toxicity, bioavailability, ...
    ///
    /// Must be at least 2.
    pub compound_attributes: usize,

    /// Number of top-ranked compounds eligible as parents (`k`).
    pub mating_pool_size: usize,

    /// Carry the previous generation's best compound over unmutated.
    ///
    /// Off by default, in which case the best compound may be lost between
    /// generations and the fitness history is not monotonic.
    pub elitism: bool,

    /// Crossover strategy.
    pub crossover: Crossover,

    /// How attributes combine into fitness.
    pub fitness: FitnessScheme,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 20,
            max_generations: 200,
            mutation_probability: 0.2,
            n_compounds: 10,
            compound_attributes: 3,
            mating_pool_size: 10,
            elitism: false,
            crossover: Crossover::TwoPoint,
            fitness: FitnessScheme::EfficacyOverToxicity,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the mutation probability.
    ///
    /// Not clamped: out-of-range values are reported by [`validate`](Self::validate).
    pub fn with_mutation_probability(mut self, p: f64) -> Self {
        self.mutation_probability = p;
        self
    }

    /// Sets the number of gene vectors per compound.
    pub fn with_n_compounds(mut self, n: usize) -> Self {
        self.n_compounds = n;
        self
    }

    /// Sets the number of attributes per gene vector.
    pub fn with_compound_attributes(mut self, n: usize) -> Self {
        self.compound_attributes = n;
        self
    }

    /// Sets the mating pool size `k`.
    pub fn with_mating_pool_size(mut self, k: usize) -> Self {
        self.mating_pool_size = k;
        self
    }

    /// Sets the mating pool size as a fraction of the current population.
    ///
    /// The result is rounded and kept at least 1. Call after
    /// [`with_population_size`](Self::with_population_size).
    pub fn with_mating_pool_ratio(mut self, ratio: f64) -> Self {
        let k = (self.population_size as f64 * ratio.clamp(0.0, 1.0)).round() as usize;
        self.mating_pool_size = k.max(1);
        self
    }

    /// Enables or disables elitism.
    pub fn with_elitism(mut self, elitism: bool) -> Self {
        self.elitism = elitism;
        self
    }

    /// Sets the crossover strategy.
    pub fn with_crossover(mut self, crossover: Crossover) -> Self {
        self.crossover = crossover;
        self
    }

    /// Sets the fitness scheme.
    pub fn with_fitness(mut self, fitness: FitnessScheme) -> Self {
        self.fitness = fitness;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Reference parameters: 20 compounds of 10 rows, 200 generations.
    ///
    /// Same as [`Default`].
    pub fn reference() -> Self {
        Self::default()
    }

    /// Tiny setup for quick experiments and tests.
    ///
    /// - Population: 4, Mating pool: 2, Generations: 20
    /// - Compounds: 4 rows of 2 attributes (efficacy, toxicity)
    pub fn small() -> Self {
        Self {
            population_size: 4,
            max_generations: 20,
            n_compounds: 4,
            compound_attributes: 2,
            mating_pool_size: 2,
            ..Self::default()
        }
    }

    /// Validates the configuration.
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if self.max_generations == 0 {
            return Err(ConfigError::NoGenerations);
        }
        if !(0.0..=1.0).contains(&self.mutation_probability) {
            return Err(ConfigError::MutationProbability(self.mutation_probability));
        }
        if self.n_compounds < 3 {
            return Err(ConfigError::TooFewCompounds(self.n_compounds));
        }
        if self.compound_attributes < 2 {
            return Err(ConfigError::TooFewAttributes(self.compound_attributes));
        }
        if self.mating_pool_size == 0 || self.mating_pool_size > self.population_size {
            return Err(ConfigError::MatingPoolSize {
                mating_pool_size: self.mating_pool_size,
                population_size: self.population_size,
            });
        }
        if let FitnessScheme::BioavailabilityWeighted { weight } = self.fitness {
            if !weight.is_finite() || weight < 0.0 {
                return Err(ConfigError::BioavailabilityWeight(weight));
            }
        }
        Ok(())
    }
}
