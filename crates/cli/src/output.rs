use puzzle_mc_shared::result::{BatchResult, Estimate};
use puzzle_mc_sim::stick;
use std::time::Duration;

pub fn print_estimate(estimate: &Estimate, elapsed: Duration) {
    println!("\n========================================");
    println!("  Puzzle:      {}", estimate.puzzle);
    println!("  Seed:        {}", estimate.seed);
    println!("  Trials:      {}", estimate.trials);
    println!("  Qualifying:  {}", estimate.qualifying);
    println!("  Time:        {:.2}s", elapsed.as_secs_f64());
    println!("  Estimate:    {:.6}", estimate.value);
    println!("  Exact:       {:.6}", estimate.closed_form);
    println!("  Abs error:   {:.6}", estimate.abs_error());
    println!("========================================");
}

pub fn print_batch(puzzle: &str, result: &BatchResult, elapsed: Duration) {
    println!("\n========================================");
    println!("  Puzzle:      {}", puzzle);
    println!("  Runs:        {}", result.n_runs());
    println!("  Trials:      {}", result.total_trials);
    println!("  Time:        {:.2}s", elapsed.as_secs_f64());
    println!("  Mean:        {:.6}", result.mean_value());
    if let (Some(min), Some(max)) = (result.min_value(), result.max_value()) {
        println!("  Range:       [{:.6}, {:.6}]", min, max);
    }
    if let Some(exact) = result.closed_form() {
        println!("  Exact:       {:.6}", exact);
    }
    println!("========================================");
}

pub fn print_series(estimate: &Estimate, every: u64) {
    let Some(series) = estimate.series.as_ref() else {
        return;
    };
    println!("\niteration,value");
    for iteration in series_rows(series.len(), every) {
        match series[iteration - 1] {
            Some(v) => println!("{},{:.6}", iteration, v),
            None => println!("{},", iteration),
        }
    }
}

/// 1-based iterations to print: every `every`-th one plus the last.
fn series_rows(len: usize, every: u64) -> impl Iterator<Item = usize> {
    let every = every.max(1);
    (1..=len).filter(move |&i| i as u64 % every == 0 || i == len)
}

pub fn print_stick_regions() {
    println!("Sample space (a, b):   {:?}", stick::sample_space());
    println!("Triangle region (a, b): {:?}", stick::triangle_region());
    println!(
        "Area ratio:            {:.4}",
        stick::polygon_area(&stick::triangle_region()) / stick::polygon_area(&stick::sample_space())
    );
}
