//! Command implementations

pub mod simple;
pub mod simulate;

pub use simple::{SimpleCommand, parse_command, run_simple};
pub use simulate::{
    AutoPolicy, GameOutcome, SimulationConfig, SimulationResult, play_game, run_simulation,
};
