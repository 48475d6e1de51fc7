//! Results of guesses and hints

use std::fmt;

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fate {
    /// Every letter of the target word was revealed
    Won,
    /// The guess budget ran out first
    Lost,
}

impl Fate {
    #[must_use]
    pub const fn is_won(self) -> bool {
        matches!(self, Self::Won)
    }
}

impl fmt::Display for Fate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Won => write!(f, "won"),
            Self::Lost => write!(f, "lost"),
        }
    }
}

/// Outcome of a single guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The letter occurs in the target word
    Hit {
        letter: char,
        /// Number of positions revealed by this guess
        revealed: usize,
        /// `Some` iff this guess ended the game
        fate: Option<Fate>,
    },
    /// The letter does not occur in the target word
    Miss {
        letter: char,
        /// Guesses left after this one
        remaining: u8,
        fate: Option<Fate>,
    },
    /// The letter was guessed before; nothing changed
    AlreadyGuessed { letter: char },
    /// The input was not a letter; nothing changed
    InvalidInput { input: char },
}

impl GuessOutcome {
    /// The game result, if this guess ended the game
    #[must_use]
    pub const fn fate(&self) -> Option<Fate> {
        match self {
            Self::Hit { fate, .. } | Self::Miss { fate, .. } => *fate,
            Self::AlreadyGuessed { .. } | Self::InvalidInput { .. } => None,
        }
    }

    /// Whether the guess was recorded
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Hit { .. } | Self::Miss { .. })
    }
}

/// Outcome of the one-time hint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HintOutcome {
    /// The letter that was revealed
    pub letter: char,
    /// Number of positions revealed (every occurrence of `letter`)
    pub revealed: usize,
    /// `Some(Fate::Won)` if the hint completed the word
    pub fate: Option<Fate>,
}
