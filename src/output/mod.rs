//! Terminal output formatting
//!
//! Display utilities for the text game, simulation results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_simulation_result, write_fate, write_game_status, write_guess_outcome,
    write_hint_outcome,
};
