//! The hangman game engine
//!
//! State machine, game state, outcomes and the saved-game shape.

mod engine;
mod error;
mod outcome;
mod state;

pub use engine::{GameEngine, Phase};
pub use error::{CorruptSave, GameError, IllegalOperation};
pub use outcome::{Fate, GuessOutcome, HintOutcome};
pub use state::{GameState, GameStateDto, MAX_GUESSES};
