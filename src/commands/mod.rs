//! Command implementations

pub mod simple;
pub mod simulate;

pub use simple::{Command, parse_command, run_session, run_simple};
pub use simulate::{GameRecord, SimulationConfig, SimulationResult, play_game, run_simulation};
