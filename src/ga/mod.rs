//! Genetic algorithm over synthetic compounds.
//!
//! A compound is a fixed-length list of gene vectors, each holding
//! attributes such as efficacy, toxicity and bioavailability in `[0, 1)`.
//! The GA evolves a population of compounds toward high efficacy and low
//! toxicity, one generation per request.
//!
//! # Pipeline
//!
//! Each generation: rank the population by [`FitnessScheme`], take the top
//! `k` as the mating pool, then fill a new population with children built by
//! [`Crossover`] and [`mutate`](operators::mutate). Optionally the previous
//! best is carried over unchanged (elitism).
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters, validated at setup
//! - [`GaRunner`]: The generation driver, an iterator of [`Snapshot`]s
//! - [`GaResult`]: Outcome of draining the runner
//!
//! # Submodules
//!
//! - [`population`]: Random compound generation
//! - [`selection`]: Stable best-first ranking and mating pool
//! - [`operators`]: One-point and two-point crossover, single-gene mutation

mod config;
mod error;
mod fitness;
pub mod operators;
pub mod population;
mod runner;
pub mod selection;
mod types;

pub use config::GaConfig;
pub use error::ConfigError;
pub use fitness::FitnessScheme;
pub use operators::Crossover;
pub use runner::{GaResult, GaRunner};
pub use selection::{rank, Ranking};
pub use types::{Compound, GeneVector, Population, Snapshot};
