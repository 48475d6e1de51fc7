//! Word lists for hangman
//!
//! Provides the embedded candidate list and the word sources that pick a
//! target word from a list.

mod embedded;
pub mod loader;
mod source;

pub use embedded::{WORDS, WORDS_COUNT};
pub use source::{
    EmbeddedWords, FileWords, RandomWordSource, SelectedWords, ValidWords, WordList, WordSource,
    WordSourceError, valid_words,
};
