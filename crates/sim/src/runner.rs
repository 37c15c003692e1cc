use rayon::prelude::*;
use tracing::info;

use puzzle_mc_shared::config::RunConfig;
use puzzle_mc_shared::result::{BatchResult, Estimate};
use puzzle_mc_shared::{Result, SimError};

use crate::puzzle::Puzzle;

pub fn run_batch(
    puzzle: &Puzzle,
    configs: Vec<RunConfig>,
    n_workers: Option<usize>,
) -> Result<BatchResult> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(n_workers.unwrap_or_else(|| rayon::current_num_threads().min(8)))
        .build()
        .map_err(|e| SimError::WorkerPool(e.to_string()))?;

    info!(
        puzzle = puzzle.name(),
        runs = configs.len(),
        workers = pool.current_num_threads(),
        "running batch"
    );

    let results: Result<Vec<Estimate>> = pool.install(|| {
        configs
            .par_iter()
            .map(|config| puzzle.run(config))
            .collect()
    });

    Ok(BatchResult::from_results(results?))
}

pub fn run_seeded_batch(
    puzzle: &Puzzle,
    base: &RunConfig,
    n_runs: u32,
    seed_start: u64,
    seed_stride: u64,
    n_workers: Option<usize>,
) -> Result<BatchResult> {
    let configs = base.seed_schedule(n_runs, seed_start, seed_stride);
    run_batch(puzzle, configs, n_workers)
}
