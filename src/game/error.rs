//! Game engine error types

use crate::core::WordError;
use crate::wordlists::WordSourceError;
use thiserror::Error;

/// Errors returned by [`GameEngine`](super::GameEngine) operations
///
/// Routine input filtering (repeated or non-letter guesses) is reported through
/// [`GuessOutcome`](super::GuessOutcome) instead.
#[derive(Debug, Error)]
pub enum GameError {
    /// The word source could not supply a target word
    #[error(transparent)]
    WordSource(#[from] WordSourceError),
    /// An explicitly requested target word was not valid
    #[error("invalid target word: {0}")]
    InvalidWord(#[from] WordError),
    /// The operation is not allowed in the current phase
    #[error("illegal operation: {0}")]
    IllegalOperation(#[from] IllegalOperation),
    /// Saved data failed validation; the engine was left untouched
    #[error("corrupt save data: {0}")]
    CorruptSave(#[from] CorruptSave),
}

impl GameError {
    /// True if no valid word was available to start a game
    #[must_use]
    pub const fn is_no_valid_word(&self) -> bool {
        matches!(
            self,
            Self::WordSource(WordSourceError::NoValidWord { .. })
        )
    }
}

/// Reasons an operation was rejected without touching the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IllegalOperation {
    #[error("no game has been started")]
    NotStarted,
    #[error("the game is over")]
    GameOver,
    #[error("the hint has already been used")]
    HintAlreadyUsed,
}

/// Reasons a saved game was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CorruptSave {
    #[error("target word {0:?} is not a lowercase word")]
    InvalidWord(String),
    #[error("guessed letter {0:?} is not a lowercase letter")]
    InvalidLetter(char),
    #[error("remaining guesses {0} is outside 0..={}", super::MAX_GUESSES)]
    RemainingOutOfRange(i32),
    #[error("letter {0:?} is recorded as both a good and a bad guess")]
    OverlappingGuess(char),
    #[error("good guess {0:?} does not appear in the target word")]
    GoodLetterNotInWord(char),
    #[error("bad guess {0:?} appears in the target word")]
    BadLetterInWord(char),
    #[error("letter {0:?} is missing from the list of all guesses")]
    MissingFromAllGuesses(char),
}
