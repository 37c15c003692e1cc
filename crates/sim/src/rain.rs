use puzzle_mc_shared::config::RainParams;
use puzzle_mc_shared::rng::RandomSource;
use puzzle_mc_shared::Result;

use crate::accumulator::RatioAccumulator;
use crate::trial::TrialGenerator;

/// Estimates P(rain | every report says rain). Trials qualify only when
/// all `reports` readings say rain.
#[derive(Debug, Clone, Copy)]
pub struct ConditionalRain {
    params: RainParams,
}

impl ConditionalRain {
    pub fn new(params: RainParams) -> Result<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &RainParams {
        &self.params
    }
}

impl TrialGenerator for ConditionalRain {
    type Outcome = Option<bool>;
    type Accumulator = RatioAccumulator;

    fn name(&self) -> &'static str {
        "conditional-rain"
    }

    fn accumulator(&self) -> RatioAccumulator {
        RatioAccumulator::new()
    }

    fn generate(&self, rng: &mut RandomSource) -> Option<bool> {
        let rained = rng.next_bool(self.params.rain_prob);
        let report_prob = if rained {
            self.params.truthful_prob
        } else {
            1.0 - self.params.truthful_prob
        };
        // draw every reading so the draw count per trial is fixed
        let mut all_positive = true;
        for _ in 0..self.params.reports {
            all_positive &= rng.next_bool(report_prob);
        }
        all_positive.then_some(rained)
    }

    fn closed_form(&self) -> f64 {
        let RainParams {
            rain_prob,
            truthful_prob,
            reports,
        } = self.params;
        let n = reports as i32;
        let rain = rain_prob * truthful_prob.powi(n);
        let dry = (1.0 - rain_prob) * (1.0 - truthful_prob).powi(n);
        if rain + dry == 0.0 {
            f64::NAN
        } else {
            rain / (rain + dry)
        }
    }
}
