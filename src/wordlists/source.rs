//! Word sources
//!
//! A `WordList` supplies raw candidates; a `WordSource` turns them into one
//! validated target word per game.

use super::embedded::WORDS;
use super::loader;
use crate::core::TargetWord;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors raised while producing a target word
#[derive(Debug, Error)]
pub enum WordSourceError {
    #[error("no valid words among {candidates} candidates")]
    NoValidWord { candidates: usize },
    #[error("failed to read word list {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A provider of raw candidate words, in list order
pub trait WordList {
    /// Load the candidate list
    ///
    /// # Errors
    ///
    /// Returns `WordSourceError::Io` if the list lives somewhere that cannot be read.
    fn candidates(&self) -> Result<Vec<String>, WordSourceError>;
}

/// Something that produces a target word for a new game
pub trait WordSource {
    /// Pick one valid target word
    ///
    /// # Errors
    ///
    /// Returns `WordSourceError::NoValidWord` if no candidate survives validation.
    fn pick_word(&mut self) -> Result<TargetWord, WordSourceError>;
}

/// The word list compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedWords;

impl WordList for EmbeddedWords {
    fn candidates(&self) -> Result<Vec<String>, WordSourceError> {
        Ok(loader::words_from_slice(WORDS))
    }
}

/// A newline-separated word list on disk, read again on every pick
#[derive(Debug, Clone)]
pub struct FileWords {
    path: PathBuf,
}

impl FileWords {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WordList for FileWords {
    fn candidates(&self) -> Result<Vec<String>, WordSourceError> {
        loader::load_from_file(&self.path).map_err(|source| WordSourceError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

impl WordList for Vec<String> {
    fn candidates(&self) -> Result<Vec<String>, WordSourceError> {
        Ok(self.clone())
    }
}

impl WordList for &[&str] {
    fn candidates(&self) -> Result<Vec<String>, WordSourceError> {
        Ok(loader::words_from_slice(self))
    }
}

/// Runtime choice between the embedded list and a file
///
/// Built from the `--wordlist` argument: `embedded` or a path.
#[derive(Debug, Clone)]
pub enum SelectedWords {
    Embedded(EmbeddedWords),
    File(FileWords),
}

impl SelectedWords {
    /// Interpret a word list argument
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        match arg {
            "embedded" | "default" => Self::Embedded(EmbeddedWords),
            path => Self::File(FileWords::new(path)),
        }
    }
}

impl WordList for SelectedWords {
    fn candidates(&self) -> Result<Vec<String>, WordSourceError> {
        match self {
            Self::Embedded(list) => list.candidates(),
            Self::File(list) => list.candidates(),
        }
    }
}

/// Uniform random choice over the valid entries of a word list
///
/// The whole list is filtered first and the pick is made from what survives,
/// so a list made mostly (or entirely) of invalid entries still terminates.
pub struct RandomWordSource<L, R = StdRng> {
    list: L,
    rng: R,
}

impl<L: WordList> RandomWordSource<L, StdRng> {
    /// Create a source seeded from the operating system
    #[must_use]
    pub fn new(list: L) -> Self {
        Self::with_rng(list, StdRng::from_os_rng())
    }

    /// Create a reproducible source
    #[must_use]
    pub fn seeded(list: L, seed: u64) -> Self {
        Self::with_rng(list, StdRng::seed_from_u64(seed))
    }
}

impl<L, R> RandomWordSource<L, R> {
    pub const fn with_rng(list: L, rng: R) -> Self {
        Self { list, rng }
    }

    pub const fn list(&self) -> &L {
        &self.list
    }
}

impl<L: WordList, R: Rng> WordSource for RandomWordSource<L, R> {
    fn pick_word(&mut self) -> Result<TargetWord, WordSourceError> {
        let valid = valid_words(&self.list)?;
        valid
            .words
            .choose(&mut self.rng)
            .cloned()
            .ok_or(WordSourceError::NoValidWord {
                candidates: valid.skipped + valid.words.len(),
            })
    }
}

/// The entries of a list that can be target words
#[derive(Debug, Clone)]
pub struct ValidWords {
    pub words: Vec<TargetWord>,
    /// Entries dropped for being empty or not purely alphabetic
    pub skipped: usize,
}

/// Filter a list down to its valid entries
///
/// # Errors
///
/// Returns `WordSourceError::Io` if the list cannot be read.
pub fn valid_words<L: WordList + ?Sized>(list: &L) -> Result<ValidWords, WordSourceError> {
    let candidates = list.candidates()?;
    let total = candidates.len();

    let words: Vec<TargetWord> = candidates
        .into_iter()
        .filter_map(|word| TargetWord::new(word).ok())
        .collect();

    debug!(total, valid = words.len(), "filtered word list");

    Ok(ValidWords {
        skipped: total - words.len(),
        words,
    })
}
