use crate::error::{Result, SimError};

// Baseline run parameters, one set per puzzle
pub const COUPON_TRIALS: u64 = 1_000;
pub const COUPON_SEED: u64 = 0;
pub const COUPON_TYPES: usize = 5;
pub const MAX_COUPON_TYPES: usize = 1 << 20;

pub const MONTY_HALL_TRIALS: u64 = 100_000;
pub const MONTY_HALL_SEED: u64 = 123_456;

pub const RAIN_TRIALS: u64 = 10_000_000;
pub const RAIN_SEED: u64 = 123_456;
pub const RAIN_PROB: f64 = 0.25;
pub const RAIN_TRUTHFUL_PROB: f64 = 2.0 / 3.0;
pub const RAIN_REPORTS: u32 = 3;

pub const STICK_TRIALS: u64 = 1_000_000;
pub const STICK_SEED: u64 = 10_815_657;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub trial_count: u64,
    pub seed: u64,
    pub record_series: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            trial_count: MONTY_HALL_TRIALS,
            seed: 0,
            record_series: false,
        }
    }
}

impl RunConfig {
    pub fn new(trial_count: u64, seed: u64) -> Self {
        Self {
            trial_count,
            seed,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.trial_count == 0 {
            return Err(SimError::invalid("trial_count", "must be at least 1"));
        }
        Ok(())
    }

    pub fn seed_schedule(&self, n: u32, start: u64, stride: u64) -> Vec<RunConfig> {
        (0..n as u64)
            .map(|i| RunConfig {
                seed: start.wrapping_add(i.wrapping_mul(stride)),
                ..self.clone()
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CouponParams {
    pub coupon_types: usize,
}

impl Default for CouponParams {
    fn default() -> Self {
        Self {
            coupon_types: COUPON_TYPES,
        }
    }
}

impl CouponParams {
    pub fn validate(&self) -> Result<()> {
        if self.coupon_types == 0 {
            return Err(SimError::invalid("coupon_types", "must be at least 1"));
        }
        if self.coupon_types > MAX_COUPON_TYPES {
            return Err(SimError::invalid(
                "coupon_types",
                format!("must be at most {MAX_COUPON_TYPES}"),
            ));
        }
        Ok(())
    }
}

/// What the Monty Hall host knows when opening a door.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HostKind {
    #[default]
    Sighted,
    Blind,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RainParams {
    pub rain_prob: f64,
    pub truthful_prob: f64,
    pub reports: u32,
}

impl Default for RainParams {
    fn default() -> Self {
        Self {
            rain_prob: RAIN_PROB,
            truthful_prob: RAIN_TRUTHFUL_PROB,
            reports: RAIN_REPORTS,
        }
    }
}

impl RainParams {
    pub fn validate(&self) -> Result<()> {
        check_probability("rain_prob", self.rain_prob)?;
        check_probability("truthful_prob", self.truthful_prob)?;
        if self.reports == 0 {
            return Err(SimError::invalid("reports", "must be at least 1"));
        }
        Ok(())
    }
}

pub fn check_probability(field: &'static str, p: f64) -> Result<()> {
    if !p.is_finite() || !(0.0..=1.0).contains(&p) {
        return Err(SimError::invalid(
            field,
            format!("{p} is not a probability in [0, 1]"),
        ));
    }
    Ok(())
}
