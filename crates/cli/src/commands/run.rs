use puzzle_mc_shared::config::{self, CouponParams, HostKind, RainParams, RunConfig};
use puzzle_mc_sim::coupon::CouponCollector;
use puzzle_mc_sim::monty_hall::MontyHall;
use puzzle_mc_sim::rain::ConditionalRain;
use puzzle_mc_sim::runner;
use puzzle_mc_sim::stick::StickTriangle;
use puzzle_mc_sim::Puzzle;

use crate::output;
use crate::RunArgs;

pub fn coupon(types: usize, args: &RunArgs) -> anyhow::Result<()> {
    let gen = CouponCollector::new(CouponParams {
        coupon_types: types,
    })?;
    run(
        Puzzle::Coupon(gen),
        args,
        config::COUPON_TRIALS,
        config::COUPON_SEED,
    )
}

pub fn monty_hall(blind: bool, args: &RunArgs) -> anyhow::Result<()> {
    let host = if blind {
        HostKind::Blind
    } else {
        HostKind::Sighted
    };
    run(
        Puzzle::MontyHall(MontyHall::new(host)),
        args,
        config::MONTY_HALL_TRIALS,
        config::MONTY_HALL_SEED,
    )
}

pub fn rain(rain_prob: f64, truthful_prob: f64, reports: u32, args: &RunArgs) -> anyhow::Result<()> {
    let gen = ConditionalRain::new(RainParams {
        rain_prob,
        truthful_prob,
        reports,
    })?;
    run(
        Puzzle::Rain(gen),
        args,
        config::RAIN_TRIALS,
        config::RAIN_SEED,
    )
}

pub fn stick(regions: bool, args: &RunArgs) -> anyhow::Result<()> {
    if regions {
        output::print_stick_regions();
    }
    run(
        Puzzle::Stick(StickTriangle::new()),
        args,
        config::STICK_TRIALS,
        config::STICK_SEED,
    )
}

fn check_args(args: &RunArgs) -> anyhow::Result<()> {
    if args.runs == 0 {
        anyhow::bail!("--runs must be at least 1");
    }
    match args.series_every {
        Some(0) => anyhow::bail!("--series-every must be at least 1"),
        Some(_) if args.runs > 1 => {
            anyhow::bail!("--series-every only applies to a single run (got --runs {})", args.runs)
        }
        _ => Ok(()),
    }
}

fn run(puzzle: Puzzle, args: &RunArgs, default_trials: u64, default_seed: u64) -> anyhow::Result<()> {
    check_args(args)?;

    let base = RunConfig {
        trial_count: args.trials.unwrap_or(default_trials),
        seed: args.seed.unwrap_or(default_seed),
        record_series: args.series_every.is_some(),
    };

    println!(
        "Running {} ({} run{} x {} trials)...",
        puzzle.name(),
        args.runs,
        if args.runs == 1 { "" } else { "s" },
        base.trial_count,
    );

    let start = std::time::Instant::now();
    if args.runs == 1 {
        let estimate = puzzle.run(&base)?;
        let elapsed = start.elapsed();
        output::print_estimate(&estimate, elapsed);
        if let Some(every) = args.series_every {
            output::print_series(&estimate, every);
        }
    } else {
        let n_workers = if args.workers == 0 {
            None
        } else {
            Some(args.workers)
        };
        let result = runner::run_seeded_batch(
            &puzzle,
            &base,
            args.runs,
            base.seed,
            args.seed_stride,
            n_workers,
        )?;
        let elapsed = start.elapsed();
        output::print_batch(puzzle.name(), &result, elapsed);
    }
    Ok(())
}
