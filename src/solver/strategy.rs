//! Letter selection strategies
//!
//! Defines the Guesser trait and concrete implementations used by the
//! automated player.

use super::CandidateGuesser;
use crate::core::TargetWord;
use crate::game::GameState;

/// Letters ordered from most to least common in English word lists
pub const LETTER_FREQUENCY: &str = "esiarntolcdupmhgbyfvkwzxqj";

/// A strategy for choosing the next letter to guess
pub trait Guesser {
    /// Select the next letter for the given game
    ///
    /// Returns `None` only if every letter has already been guessed.
    fn next_letter(&self, state: &GameState) -> Option<char>;
}

/// Enum wrapper for all guesser types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum GuesserType {
    /// Filters a dictionary by what has been revealed (default)
    Candidates(CandidateGuesser),
    /// Fixed letter-frequency order
    Frequency(FrequencyGuesser),
}

impl Guesser for GuesserType {
    fn next_letter(&self, state: &GameState) -> Option<char> {
        match self {
            Self::Candidates(g) => g.next_letter(state),
            Self::Frequency(g) => g.next_letter(state),
        }
    }
}

impl GuesserType {
    /// Create guesser from name string
    ///
    /// Supported names: "candidates", "frequency".
    /// Defaults to candidates if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str, dictionary: &[TargetWord]) -> Self {
        match name {
            "frequency" | "freq" => Self::Frequency(FrequencyGuesser),
            _ => Self::Candidates(CandidateGuesser::new(dictionary)),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Candidates(_) => "candidates",
            Self::Frequency(_) => "frequency",
        }
    }
}

/// Guess letters in fixed frequency order, ignoring the board
pub struct FrequencyGuesser;

impl Guesser for FrequencyGuesser {
    fn next_letter(&self, state: &GameState) -> Option<char> {
        LETTER_FREQUENCY
            .chars()
            .find(|c| !state.all_guesses().contains(c))
    }
}

/// Rank of a letter in [`LETTER_FREQUENCY`] (0 = most common)
#[must_use]
pub fn frequency_rank(letter: char) -> usize {
    LETTER_FREQUENCY
        .chars()
        .position(|c| c == letter)
        .unwrap_or(LETTER_FREQUENCY.len())
}
