//! Automated hangman players
//!
//! Letter selection strategies used by the simulation command.

mod candidates;
pub mod strategy;

pub use candidates::CandidateGuesser;
pub use strategy::{FrequencyGuesser, Guesser, GuesserType, LETTER_FREQUENCY};
