mod commands;
mod output;

use clap::{Args, Parser, Subcommand};
use puzzle_mc_shared::config;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "puzzle-mc", about = "Monte-Carlo estimates for classic probability puzzles")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Expected draws to collect every coupon type
    Coupon {
        /// Number of distinct coupon types
        #[arg(long, default_value_t = config::COUPON_TYPES)]
        types: usize,
        #[command(flatten)]
        run: RunArgs,
    },
    /// Chance that switching doors wins the car
    MontyHall {
        /// Host opens a random unpicked door; car reveals are discarded
        #[arg(long)]
        blind: bool,
        #[command(flatten)]
        run: RunArgs,
    },
    /// Chance it rained given that every report said so
    Rain {
        /// Prior probability of rain
        #[arg(long, default_value_t = config::RAIN_PROB)]
        rain_prob: f64,
        /// Chance a single report is truthful
        #[arg(long, default_value_t = config::RAIN_TRUTHFUL_PROB)]
        truthful_prob: f64,
        /// Number of independent reports
        #[arg(long, default_value_t = config::RAIN_REPORTS)]
        reports: u32,
        #[command(flatten)]
        run: RunArgs,
    },
    /// Chance that a twice-broken stick forms a triangle
    Stick {
        /// Also print the outline of the (a, b) probability regions
        #[arg(long)]
        regions: bool,
        #[command(flatten)]
        run: RunArgs,
    },
}

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Trials per run (puzzle default when omitted)
    #[arg(long)]
    pub trials: Option<u64>,
    /// Seed for the first run (puzzle default when omitted)
    #[arg(long)]
    pub seed: Option<u64>,
    /// Number of independent runs
    #[arg(long, default_value = "1")]
    pub runs: u32,
    /// Seed step between runs
    #[arg(long, default_value = "1")]
    pub seed_stride: u64,
    /// Number of parallel workers for multi-run batches (0 = auto)
    #[arg(long, default_value = "0")]
    pub workers: usize,
    /// Print every Nth value of the running statistic (single run only)
    #[arg(long)]
    pub series_every: Option<u64>,
}

fn setup_logging(verbose: bool) -> anyhow::Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose)?;

    match cli.command {
        Commands::Coupon { types, run } => commands::run::coupon(types, &run),
        Commands::MontyHall { blind, run } => commands::run::monty_hall(blind, &run),
        Commands::Rain {
            rain_prob,
            truthful_prob,
            reports,
            run,
        } => commands::run::rain(rain_prob, truthful_prob, reports, &run),
        Commands::Stick { regions, run } => commands::run::stick(regions, &run),
    }
}
