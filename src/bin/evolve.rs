//! Reference consumer: evolves compounds and logs progress per generation.
//!
//! ```text
//! evolve [SEED] [GENERATIONS]
//! ```
//!
//! Progress goes through `log` (`RUST_LOG=debug` shows every generation,
//! `trace` adds the best compound). The final best compound is printed to
//! stdout.

use compound_ga::ga::{GaConfig, GaRunner, Snapshot};
use env_logger::Env;
use log::{error, info};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("debug")).init();

    let mut args = std::env::args().skip(1);
    let mut config = GaConfig::default();

    if let Some(seed) = args.next() {
        match seed.parse::<u64>() {
            Ok(seed) => config = config.with_seed(seed),
            Err(e) => {
                error!("invalid seed {seed:?}: {e}");
                return ExitCode::FAILURE;
            }
        }
    }
    if let Some(generations) = args.next() {
        match generations.parse::<usize>() {
            Ok(n) => config = config.with_max_generations(n),
            Err(e) => {
                error!("invalid generation count {generations:?}: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    let runner = match GaRunner::new(config) {
        Ok(runner) => runner,
        Err(e) => {
            error!("invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut last: Option<Snapshot> = None;
    for snapshot in runner {
        last = Some(snapshot);
    }

    let Some(last) = last else {
        error!("no generations were run");
        return ExitCode::FAILURE;
    };

    info!(
        "best fitness over {} generations: {:.3}",
        last.fitness_history.len(),
        last.best_fitness()
    );
    println!("final best compound:");
    println!("{:.3}", last.best);

    ExitCode::SUCCESS
}
