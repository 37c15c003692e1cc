pub mod config;
pub mod error;
pub mod result;
pub mod rng;

pub use error::{Result, SimError};
