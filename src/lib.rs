//! Genetic algorithm for evolving synthetic compound parameter sets.
//!
//! Each candidate is a compound made of several rows of attributes
//! (efficacy, toxicity, bioavailability). Fitness rewards efficacy and
//! penalizes toxicity; the GA ranks, recombines and mutates compounds over
//! a fixed number of generations.
//!
//! The engine exposes its progress as a lazy stream of per-generation
//! [`Snapshot`](ga::Snapshot)s. Rendering, plotting or logging consumers
//! read snapshots between pulls and never touch the GA state.
//!
//! ```
//! use compound_ga::ga::{GaConfig, GaRunner};
//!
//! let runner = GaRunner::new(GaConfig::default().with_seed(42))?;
//! let mut last = None;
//! for snapshot in runner {
//!     last = Some(snapshot);
//! }
//! let last = last.expect("at least one generation");
//! assert_eq!(last.generation, 199);
//! assert_eq!(last.best.len(), 10);
//! # Ok::<(), compound_ga::ga::ConfigError>(())
//! ```

pub mod ga;
pub mod random;
