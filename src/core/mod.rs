//! Core domain types for hangman
//!
//! Word validation and the target word representation. Everything here is
//! pure and free of game state.

mod word;

pub use word::{HINT_THRESHOLD, TargetWord, WordError, is_valid_word, needs_hint, normalize_letter};
