use puzzle_mc_shared::config::RunConfig;
use puzzle_mc_shared::result::Estimate;
use puzzle_mc_shared::rng::RandomSource;
use puzzle_mc_shared::{Result, SimError};
use tracing::debug;

use crate::accumulator::Accumulator;
use crate::trial::TrialGenerator;

/// Owns the random source and validated config for exactly one run.
pub struct SimulationContext {
    config: RunConfig,
    rng: RandomSource,
}

impl SimulationContext {
    pub fn new(config: &RunConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            rng: RandomSource::new(config.seed),
            config: config.clone(),
        })
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Draw `trial_count` outcomes from `generator`, folding each into its
    /// accumulator. Fails if no trial qualified for the denominator.
    pub fn run<G: TrialGenerator>(mut self, generator: &G) -> Result<Estimate> {
        let trials = self.config.trial_count;
        debug!(
            puzzle = generator.name(),
            seed = self.config.seed,
            trials,
            "starting run"
        );

        let mut acc = generator.accumulator();
        let mut series = if self.config.record_series {
            Some(series_buffer(trials)?)
        } else {
            None
        };

        for _ in 0..trials {
            let outcome = generator.generate(&mut self.rng);
            acc.update(outcome);
            if let Some(series) = series.as_mut() {
                series.push(acc.current_value());
            }
        }

        let value = acc.current_value().ok_or(SimError::NoQualifyingTrials {
            puzzle: generator.name(),
            trials,
        })?;
        let estimate = Estimate {
            puzzle: generator.name(),
            seed: self.config.seed,
            trials,
            qualifying: acc.qualifying(),
            value,
            closed_form: generator.closed_form(),
            series,
        };
        debug!(
            puzzle = estimate.puzzle,
            value = estimate.value,
            qualifying = estimate.qualifying,
            "finished run"
        );
        Ok(estimate)
    }
}

fn series_buffer(trials: u64) -> Result<Vec<Option<f64>>> {
    let too_long = || {
        SimError::invalid(
            "trial_count",
            format!("{trials} is too many trials to record a series"),
        )
    };
    let len = usize::try_from(trials).map_err(|_| too_long())?;
    let mut buf = Vec::new();
    buf.try_reserve_exact(len).map_err(|_| too_long())?;
    Ok(buf)
}

pub fn run_simulation<G: TrialGenerator>(generator: &G, config: &RunConfig) -> Result<Estimate> {
    SimulationContext::new(config)?.run(generator)
}

pub fn outcomes<G: TrialGenerator>(generator: &G, seed: u64, n: usize) -> Vec<G::Outcome> {
    let mut rng = RandomSource::new(seed);
    (0..n).map(|_| generator.generate(&mut rng)).collect()
}
