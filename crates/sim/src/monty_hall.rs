use puzzle_mc_shared::config::HostKind;
use puzzle_mc_shared::rng::RandomSource;

use crate::accumulator::RatioAccumulator;
use crate::trial::TrialGenerator;

pub const DOORS: u64 = 3;

/// Contestant picks a door, the host opens another, the contestant switches.
/// Outcome is whether switching wins the car.
#[derive(Debug, Clone, Copy)]
pub struct MontyHall {
    host: HostKind,
}

impl MontyHall {
    pub fn new(host: HostKind) -> Self {
        Self { host }
    }

    pub fn host(&self) -> HostKind {
        self.host
    }

    fn sighted(&self, rng: &mut RandomSource) -> bool {
        let car = rng.next_int(0, DOORS);
        let pick = rng.next_int(0, DOORS);
        let others = unpicked(pick);
        let reveal = if pick == car {
            others[rng.next_int(0, 2) as usize]
        } else if others[0] == car {
            others[1]
        } else {
            others[0]
        };
        remaining(pick, reveal) == car
    }

    fn blind(&self, rng: &mut RandomSource) -> Option<bool> {
        let car = rng.next_int(0, DOORS);
        let pick = rng.next_int(0, DOORS);
        let reveal = unpicked(pick)[rng.next_int(0, 2) as usize];
        if reveal == car {
            return None;
        }
        Some(remaining(pick, reveal) == car)
    }
}

fn unpicked(pick: u64) -> [u64; 2] {
    match pick {
        0 => [1, 2],
        1 => [0, 2],
        _ => [0, 1],
    }
}

fn remaining(pick: u64, reveal: u64) -> u64 {
    DOORS * (DOORS - 1) / 2 - pick - reveal
}

impl TrialGenerator for MontyHall {
    /// `None` when a blind host reveals the car.
    type Outcome = Option<bool>;
    type Accumulator = RatioAccumulator;

    fn name(&self) -> &'static str {
        match self.host {
            HostKind::Sighted => "monty-hall",
            HostKind::Blind => "monty-hall-blind",
        }
    }

    fn accumulator(&self) -> RatioAccumulator {
        RatioAccumulator::new()
    }

    fn generate(&self, rng: &mut RandomSource) -> Option<bool> {
        match self.host {
            HostKind::Sighted => Some(self.sighted(rng)),
            HostKind::Blind => self.blind(rng),
        }
    }

    fn closed_form(&self) -> f64 {
        match self.host {
            HostKind::Sighted => 2.0 / 3.0,
            HostKind::Blind => 0.5,
        }
    }
}
