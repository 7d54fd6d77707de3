//! Generation driver.
//!
//! [`GaRunner`] owns the population, the fitness history and the random
//! source, and advances one generation per call to [`GaRunner::step`]:
//! rank → record best → breed from the mating pool → replace.
//!
//! It is an [`Iterator`] over [`Snapshot`]s. Nothing is computed until the
//! consumer asks for the next snapshot, and dropping the runner is all it
//! takes to stop early.

use super::config::GaConfig;
use super::error::Result;
use super::operators::mutate;
use super::population::random_population;
use super::selection::{pick_parent, rank, Ranking};
use super::types::{Compound, Population, Snapshot};
use crate::random::rng_from_seed;
use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::Rng;
use std::iter::FusedIterator;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Result of draining a [`GaRunner`].
#[derive(Debug, Clone)]
pub struct GaResult {
    /// Best compound of the last generation run.
    ///
    /// Without elitism this is not necessarily the best compound ever seen.
    pub best: Compound,

    /// Fitness of `best`.
    pub best_fitness: f64,

    /// Number of generations executed.
    pub generations: usize,

    /// Whether the run was cancelled before exhausting its generations.
    pub cancelled: bool,

    /// Best fitness of every generation.
    pub fitness_history: Vec<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Running,
    Exhausted,
}

/// Drives the GA one generation at a time.
///
/// # Usage
///
/// ```
/// use compound_ga::ga::{GaConfig, GaRunner};
///
/// let config = GaConfig::default().with_max_generations(5).with_seed(42);
/// let runner = GaRunner::new(config)?;
///
/// let snapshots: Vec<_> = runner.collect();
/// assert_eq!(snapshots.len(), 5);
/// assert_eq!(snapshots[4].fitness_history.len(), 5);
/// # Ok::<(), compound_ga::ga::ConfigError>(())
/// ```
#[derive(Debug)]
pub struct GaRunner<R: Rng = StdRng> {
    config: GaConfig,
    rng: R,
    population: Population,
    fitness_history: Vec<f64>,
    best: Option<Compound>,
    generation: usize,
    state: State,
}

impl GaRunner<StdRng> {
    /// Creates a runner seeded from `config.seed`, or randomly when unset.
    pub fn new(config: GaConfig) -> Result<Self> {
        let rng = rng_from_seed(config.seed);
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> GaRunner<R> {
    /// Creates a runner drawing all randomness from `rng`.
    ///
    /// `config.seed` is ignored. The initial population is generated here.
    pub fn with_rng(config: GaConfig, mut rng: R) -> Result<Self> {
        config.validate()?;

        let population = random_population(
            config.population_size,
            config.n_compounds,
            config.compound_attributes,
            &mut rng,
        );

        info!(
            "starting GA: population={}, generations={}, mating_pool={}, crossover={:?}, elitism={}",
            config.population_size,
            config.max_generations,
            config.mating_pool_size,
            config.crossover,
            config.elitism
        );

        Ok(Self {
            fitness_history: Vec::with_capacity(config.max_generations),
            config,
            rng,
            population,
            best: None,
            generation: 0,
            state: State::Running,
        })
    }

    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// The population the next step will rank.
    pub fn population(&self) -> &[Compound] {
        &self.population
    }

    /// Best fitness of every generation run so far.
    pub fn fitness_history(&self) -> &[f64] {
        &self.fitness_history
    }

    /// Best compound of the most recent generation, if any has run.
    pub fn best(&self) -> Option<&Compound> {
        self.best.as_ref()
    }

    /// Number of generations run so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn is_exhausted(&self) -> bool {
        self.state == State::Exhausted
    }

    /// Runs one generation and returns its snapshot.
    ///
    /// Returns `None` once `max_generations` snapshots have been produced.
    pub fn step(&mut self) -> Option<Snapshot> {
        if self.state == State::Exhausted {
            return None;
        }

        // 1. Rank and record the generation's best
        let ranking = rank(std::mem::take(&mut self.population), &self.config.fitness);
        let best = ranking.best()?.clone();
        let best_fitness = ranking.best_fitness()?;
        self.fitness_history.push(best_fitness);

        debug!("generation {}: best fitness = {:.2}", self.generation, best_fitness);
        trace!("best compound:\n{best}");

        // 2. Breed the next population
        self.population = self.breed(&ranking, &best);
        self.best = Some(best.clone());

        let snapshot = Snapshot {
            generation: self.generation,
            fitness_history: self.fitness_history.clone(),
            best,
        };

        self.generation += 1;
        if self.generation >= self.config.max_generations {
            self.state = State::Exhausted;
            info!(
                "GA finished after {} generations, final best fitness = {:.3}",
                self.generation, best_fitness
            );
        }

        Some(snapshot)
    }

    /// Runs every remaining generation.
    pub fn run(self) -> GaResult {
        self.run_with_cancel(None)
    }

    /// Runs the remaining generations with an optional cancellation token.
    ///
    /// The flag is checked before each generation. If the run stops before
    /// any generation, the best compound of the initial population is
    /// reported with an empty fitness history.
    pub fn run_with_cancel(mut self, cancel: Option<Arc<AtomicBool>>) -> GaResult {
        let mut cancelled = false;

        while !self.is_exhausted() {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    info!("GA cancelled after {} generations", self.generation);
                    cancelled = true;
                    break;
                }
            }
            self.step();
        }

        let (best, best_fitness) = match (self.best.take(), self.fitness_history.last()) {
            (Some(best), Some(&f)) => (best, f),
            _ => {
                let ranking = rank(self.population.clone(), &self.config.fitness);
                let f = ranking.best_fitness().unwrap_or(0.0);
                let best = ranking
                    .best()
                    .cloned()
                    .unwrap_or_else(|| Compound::new(Vec::new()));
                (best, f)
            }
        };

        GaResult {
            best,
            best_fitness,
            generations: self.generation,
            cancelled,
            fitness_history: self.fitness_history,
        }
    }

    /// Build a full population of children from the mating pool.
    ///
    /// With elitism the previous best is placed first, unmutated.
    fn breed(&mut self, ranking: &Ranking, best: &Compound) -> Population {
        let size = self.config.population_size;
        let mut next = Vec::with_capacity(size);

        if self.config.elitism {
            next.push(best.clone());
        }

        let pool = ranking.mating_pool(self.config.mating_pool_size);
        while next.len() < size {
            let parent1 = pick_parent(pool, &mut self.rng);
            let parent2 = pick_parent(pool, &mut self.rng);
            let mut child = self.config.crossover.apply(parent1, parent2, &mut self.rng);
            mutate(&mut child, self.config.mutation_probability, &mut self.rng);
            next.push(child);
        }

        next
    }
}

impl<R: Rng> Iterator for GaRunner<R> {
    type Item = Snapshot;

    fn next(&mut self) -> Option<Snapshot> {
        self.step()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.state {
            State::Running => self.config.max_generations - self.generation,
            State::Exhausted => 0,
        };
        (remaining, Some(remaining))
    }
}

impl<R: Rng> ExactSizeIterator for GaRunner<R> {}

impl<R: Rng> FusedIterator for GaRunner<R> {}

// ============================================================================
// Tests
// ============================================================================
