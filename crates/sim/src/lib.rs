pub mod accumulator;
pub mod coupon;
pub mod engine;
pub mod monty_hall;
pub mod puzzle;
pub mod rain;
pub mod runner;
pub mod stick;
pub mod trial;

pub use accumulator::{Accumulator, MeanAccumulator, RatioAccumulator};
pub use engine::{run_simulation, SimulationContext};
pub use puzzle::Puzzle;
pub use trial::TrialGenerator;
