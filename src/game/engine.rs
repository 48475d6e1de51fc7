//! Hangman game engine
//!
//! `GameEngine` is the only thing that mutates a [`GameState`]. Every public
//! operation either applies completely or returns an error and leaves the
//! engine untouched.

use super::error::{GameError, IllegalOperation};
use super::outcome::{Fate, GuessOutcome, HintOutcome};
use super::state::{GameState, GameStateDto};
use crate::core::{self, TargetWord, normalize_letter};
use crate::wordlists::WordSource;
use std::fmt;

/// Lifecycle of the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No game has been started or restored
    Uninitialized,
    /// A game is in progress and accepts guesses
    Active,
    /// The game is over; guesses and hints are rejected
    Ended(Fate),
}

impl Phase {
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }

    #[must_use]
    pub const fn fate(self) -> Option<Fate> {
        match self {
            Self::Ended(fate) => Some(fate),
            Self::Uninitialized | Self::Active => None,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uninitialized => write!(f, "not started"),
            Self::Active => write!(f, "in progress"),
            Self::Ended(fate) => write!(f, "over ({fate})"),
        }
    }
}

/// Drives one game of hangman at a time
///
/// The engine picks target words from an injected [`WordSource`], so tests can
/// supply a fixed list or call [`GameEngine::start_with_word`] directly.
///
/// # Examples
/// ```
/// use hangman::game::{Fate, GameEngine};
/// use hangman::wordlists::RandomWordSource;
///
/// let mut engine = GameEngine::new(RandomWordSource::seeded(vec!["cat".to_string()], 0));
/// engine.start().unwrap();
///
/// engine.guess('c').unwrap();
/// engine.guess('a').unwrap();
/// let outcome = engine.guess('T').unwrap();
/// assert_eq!(outcome.fate(), Some(Fate::Won));
/// ```
pub struct GameEngine<S> {
    source: S,
    game: Option<GameState>,
    phase: Phase,
    modified: bool,
}

impl<S: WordSource> GameEngine<S> {
    /// Start a new game with a word from the source
    ///
    /// # Errors
    ///
    /// Returns `GameError::WordSource` if the source has no valid word; the
    /// previous game, if any, is kept.
    pub fn start(&mut self) -> Result<(), GameError> {
        let target = self.source.pick_word()?;
        self.begin(target);
        Ok(())
    }
}

impl<S> GameEngine<S> {
    #[must_use]
    pub const fn new(source: S) -> Self {
        Self {
            source,
            game: None,
            phase: Phase::Uninitialized,
            modified: false,
        }
    }

    /// Start a new game with a specific target word
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidWord` if the word is empty or not purely alphabetic.
    pub fn start_with_word(&mut self, word: &str) -> Result<(), GameError> {
        let target = TargetWord::new(word)?;
        self.begin(target);
        Ok(())
    }

    fn begin(&mut self, target: TargetWord) {
        self.game = Some(GameState::new(target));
        self.phase = Phase::Active;
        self.modified = false;
    }

    /// Drop the current game and return to `Phase::Uninitialized`
    pub fn reset(&mut self) {
        self.game = None;
        self.phase = Phase::Uninitialized;
        self.modified = false;
    }

    /// Guess one letter
    ///
    /// The letter is lowercased. Non-letters and repeated letters are reported
    /// through the outcome and change nothing.
    ///
    /// # Errors
    ///
    /// Returns `GameError::IllegalOperation` if no game is active.
    pub fn guess(&mut self, input: char) -> Result<GuessOutcome, GameError> {
        let game = self.active_game_mut()?;

        let Some(letter) = normalize_letter(input) else {
            return Ok(GuessOutcome::InvalidInput { input });
        };
        if game.all_guesses().contains(&letter) {
            return Ok(GuessOutcome::AlreadyGuessed { letter });
        }

        let revealed = game.record_guess(letter);
        let fate = game.fate();
        let remaining = game.remaining_guesses();

        self.modified = true;
        if let Some(fate) = fate {
            self.phase = Phase::Ended(fate);
        }

        Ok(if revealed > 0 {
            GuessOutcome::Hit {
                letter,
                revealed,
                fate,
            }
        } else {
            GuessOutcome::Miss {
                letter,
                remaining,
                fate,
            }
        })
    }

    /// Reveal the leftmost hidden letter, once per game
    ///
    /// Every occurrence of that letter is revealed. The hint costs no guesses.
    ///
    /// # Errors
    ///
    /// Returns `GameError::IllegalOperation` if no game is active or the hint
    /// was already used.
    pub fn hint(&mut self) -> Result<HintOutcome, GameError> {
        let game = self.active_game_mut()?;
        if game.hint_used() {
            return Err(IllegalOperation::HintAlreadyUsed.into());
        }

        let (letter, revealed) = game.record_hint().ok_or(IllegalOperation::GameOver)?;
        let fate = game.fate();

        self.modified = true;
        if let Some(fate) = fate {
            self.phase = Phase::Ended(fate);
        }

        Ok(HintOutcome {
            letter,
            revealed,
            fate,
        })
    }

    fn active_game_mut(&mut self) -> Result<&mut GameState, IllegalOperation> {
        match (self.phase, self.game.as_mut()) {
            (Phase::Active, Some(game)) => Ok(game),
            (Phase::Ended(_), _) => Err(IllegalOperation::GameOver),
            _ => Err(IllegalOperation::NotStarted),
        }
    }

    /// Whether a word has enough distinct letters to offer a hint
    #[must_use]
    pub fn needs_hint(word: &str) -> bool {
        core::needs_hint(word)
    }

    /// Whether the presentation layer should offer the hint right now
    ///
    /// Requires an active game whose word qualifies, an unused hint, and more
    /// than one guess left.
    #[must_use]
    pub fn hint_available(&self) -> bool {
        self.phase.is_active()
            && self.game.as_ref().is_some_and(|game| {
                game.target().needs_hint() && !game.hint_used() && game.remaining_guesses() > 1
            })
    }

    /// Whether a letter was already recorded as a good or bad guess
    #[must_use]
    pub fn is_already_guessed(&self, letter: char) -> bool {
        let letter = letter.to_ascii_lowercase();
        self.game.as_ref().is_some_and(|game| {
            game.good_guesses().contains(&letter) || game.bad_guesses().contains(&letter)
        })
    }

    /// Export the current game for saving
    ///
    /// # Errors
    ///
    /// Returns `GameError::IllegalOperation` if no game has been started.
    pub fn serialize(&self) -> Result<GameStateDto, GameError> {
        self.game
            .as_ref()
            .map(GameState::to_dto)
            .ok_or_else(|| IllegalOperation::NotStarted.into())
    }

    /// Replace the current game with saved data
    ///
    /// The restored game is active unless it is already won or lost.
    ///
    /// # Errors
    ///
    /// Returns `GameError::CorruptSave` if the data fails validation; the
    /// engine is left exactly as it was.
    pub fn restore(&mut self, dto: &GameStateDto) -> Result<(), GameError> {
        let game = GameState::try_from(dto)?;

        self.phase = game.fate().map_or(Phase::Active, Phase::Ended);
        self.game = Some(game);
        self.modified = true;
        Ok(())
    }

    /// Clear the unsaved-changes flag after the game was persisted
    pub fn mark_saved(&mut self) {
        self.modified = false;
    }

    /// Whether the game changed since it was started or last saved
    #[must_use]
    pub const fn is_modified(&self) -> bool {
        self.modified
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// The live game state, if any
    #[must_use]
    pub const fn state(&self) -> Option<&GameState> {
        self.game.as_ref()
    }

    #[must_use]
    pub fn target_word(&self) -> Option<&str> {
        self.game.as_ref().map(|game| game.target().text())
    }

    #[must_use]
    pub fn remaining_guesses(&self) -> Option<u8> {
        self.game.as_ref().map(GameState::remaining_guesses)
    }

    #[must_use]
    pub fn hint_used(&self) -> bool {
        self.game.as_ref().is_some_and(GameState::hint_used)
    }

    #[must_use]
    pub const fn is_ended(&self) -> bool {
        matches!(self.phase, Phase::Ended(_))
    }

    #[must_use]
    pub const fn is_won(&self) -> bool {
        matches!(self.phase, Phase::Ended(Fate::Won))
    }
}
