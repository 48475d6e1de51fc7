//! Hangman target word representation
//!
//! A `TargetWord` stores a validated lowercase word along with letter position
//! indices, so a guess can reveal every occurrence of a letter at once.

use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;
use thiserror::Error;

/// Words with more distinct letters than this qualify for a hint
pub const HINT_THRESHOLD: usize = 7;

/// A validated hangman target word with letter position tracking
///
/// The text is always lowercase ASCII letters and never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetWord {
    text: String,
    chars: Vec<char>,
    char_positions: FxHashMap<char, Vec<usize>>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must contain at least one letter")]
    Empty,
    #[error("word must contain only letters, found {0:?}")]
    InvalidCharacter(char),
}

/// Check whether a word is usable as a target word
///
/// True iff the word is non-empty and every character is an ASCII letter
/// (either case). Digits, punctuation and whitespace are rejected.
///
/// # Examples
/// ```
/// use hangman::core::is_valid_word;
///
/// assert!(is_valid_word("Castle"));
/// assert!(!is_valid_word("don't"));
/// assert!(!is_valid_word(""));
/// ```
#[must_use]
pub fn is_valid_word(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| c.is_ascii_alphabetic())
}

/// Whether a word has enough distinct letters to offer a hint
///
/// Letters are compared case-insensitively.
///
/// # Examples
/// ```
/// use hangman::core::needs_hint;
///
/// assert!(!needs_hint("tree"));
/// assert!(needs_hint("subtraction"));
/// ```
#[must_use]
pub fn needs_hint(word: &str) -> bool {
    let distinct: FxHashSet<char> = word.chars().map(|c| c.to_ascii_lowercase()).collect();
    distinct.len() > HINT_THRESHOLD
}

/// Normalize a guessed character to a lowercase letter
///
/// Returns `None` for anything that is not an ASCII letter.
#[inline]
#[must_use]
pub const fn normalize_letter(c: char) -> Option<char> {
    if c.is_ascii_alphabetic() {
        Some(c.to_ascii_lowercase())
    } else {
        None
    }
}

impl TargetWord {
    /// Create a new target word from a string
    ///
    /// The word is lowercased before it is stored.
    ///
    /// # Errors
    /// Returns `WordError` if the word is empty or contains anything other
    /// than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::TargetWord;
    ///
    /// let word = TargetWord::new("Banana").unwrap();
    /// assert_eq!(word.text(), "banana");
    /// assert_eq!(word.positions_of('a'), &[1, 3, 5]);
    ///
    /// assert!(TargetWord::new("cat1").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();

        if text.is_empty() {
            return Err(WordError::Empty);
        }
        if let Some(bad) = text.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacter(bad));
        }

        let text = text.to_ascii_lowercase();
        let chars: Vec<char> = text.chars().collect();

        let mut char_positions: FxHashMap<char, Vec<usize>> = FxHashMap::default();
        for (i, &ch) in chars.iter().enumerate() {
            char_positions.entry(ch).or_default().push(i);
        }

        Ok(Self {
            text,
            chars,
            char_positions,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the letters of the word in order
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of letter positions in the word
    #[inline]
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.chars.len()
    }

    /// Number of distinct letters in the word
    #[inline]
    #[must_use]
    pub fn distinct_letters(&self) -> usize {
        self.char_positions.len()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.char_count()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> char {
        self.chars[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.char_positions.contains_key(&letter)
    }

    /// Get all positions where a letter appears
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    #[must_use]
    pub fn positions_of(&self, letter: char) -> &[usize] {
        self.char_positions
            .get(&letter)
            .map_or(&[], std::vec::Vec::as_slice)
    }

    /// Whether this word qualifies for a hint
    #[inline]
    #[must_use]
    pub fn needs_hint(&self) -> bool {
        self.distinct_letters() > HINT_THRESHOLD
    }
}

impl fmt::Display for TargetWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
