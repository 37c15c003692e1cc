use puzzle_mc_shared::config::CouponParams;
use puzzle_mc_shared::rng::RandomSource;
use puzzle_mc_shared::Result;

use crate::accumulator::MeanAccumulator;
use crate::trial::TrialGenerator;

/// Draws until every one of `k` coupon types has been seen; the outcome is
/// the number of draws it took.
#[derive(Debug, Clone, Copy)]
pub struct CouponCollector {
    coupon_types: usize,
}

impl CouponCollector {
    pub fn new(params: CouponParams) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            coupon_types: params.coupon_types,
        })
    }

    pub fn coupon_types(&self) -> usize {
        self.coupon_types
    }
}

impl TrialGenerator for CouponCollector {
    type Outcome = u64;
    type Accumulator = MeanAccumulator;

    fn name(&self) -> &'static str {
        "coupon-collector"
    }

    fn accumulator(&self) -> MeanAccumulator {
        MeanAccumulator::new()
    }

    fn generate(&self, rng: &mut RandomSource) -> u64 {
        let k = self.coupon_types;
        let mut seen = vec![false; k];
        let mut distinct = 0;
        let mut draws = 0u64;
        while distinct < k {
            draws += 1;
            let coupon = rng.next_int(0, k as u64) as usize;
            if !seen[coupon] {
                seen[coupon] = true;
                distinct += 1;
            }
        }
        draws
    }

    fn closed_form(&self) -> f64 {
        let k = self.coupon_types as f64;
        k * harmonic(self.coupon_types)
    }
}

fn harmonic(n: usize) -> f64 {
    (1..=n).map(|i| 1.0 / i as f64).sum()
}
