use puzzle_mc_shared::config::RunConfig;
use puzzle_mc_shared::result::Estimate;
use puzzle_mc_shared::Result;

use crate::coupon::CouponCollector;
use crate::engine;
use crate::monty_hall::MontyHall;
use crate::rain::ConditionalRain;
use crate::stick::StickTriangle;
use crate::trial::TrialGenerator;

/// Any of the supported puzzles, with its parameters already validated.
#[derive(Debug, Clone, Copy)]
pub enum Puzzle {
    Coupon(CouponCollector),
    MontyHall(MontyHall),
    Rain(ConditionalRain),
    Stick(StickTriangle),
}

impl Puzzle {
    pub fn name(&self) -> &'static str {
        match self {
            Puzzle::Coupon(g) => g.name(),
            Puzzle::MontyHall(g) => g.name(),
            Puzzle::Rain(g) => g.name(),
            Puzzle::Stick(g) => g.name(),
        }
    }

    pub fn closed_form(&self) -> f64 {
        match self {
            Puzzle::Coupon(g) => g.closed_form(),
            Puzzle::MontyHall(g) => g.closed_form(),
            Puzzle::Rain(g) => g.closed_form(),
            Puzzle::Stick(g) => g.closed_form(),
        }
    }

    pub fn run(&self, config: &RunConfig) -> Result<Estimate> {
        match self {
            Puzzle::Coupon(g) => engine::run_simulation(g, config),
            Puzzle::MontyHall(g) => engine::run_simulation(g, config),
            Puzzle::Rain(g) => engine::run_simulation(g, config),
            Puzzle::Stick(g) => engine::run_simulation(g, config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use puzzle_mc_shared::config::{CouponParams, HostKind};

    #[test]
    fn test_dispatch_matches_direct_run() {
        let gen = CouponCollector::new(CouponParams { coupon_types: 4 }).unwrap();
        let config = RunConfig::new(300, 21);
        let direct = engine::run_simulation(&gen, &config).unwrap();
        let via_enum = Puzzle::Coupon(gen).run(&config).unwrap();
        assert_eq!(direct, via_enum);
    }

    #[test]
    fn test_names() {
        assert_eq!(Puzzle::Stick(StickTriangle).name(), "stick-triangle");
        assert_eq!(
            Puzzle::MontyHall(MontyHall::new(HostKind::Blind)).name(),
            "monty-hall-blind"
        );
    }
}
