use puzzle_mc_shared::rng::RandomSource;

use crate::accumulator::Accumulator;

/// One simulated experiment, repeated by the engine.
pub trait TrialGenerator {
    type Outcome: Copy;
    type Accumulator: Accumulator<Self::Outcome>;

    fn name(&self) -> &'static str;

    fn accumulator(&self) -> Self::Accumulator;

    fn generate(&self, rng: &mut RandomSource) -> Self::Outcome;

    /// Analytic value the running statistic converges to.
    fn closed_form(&self) -> f64;
}
