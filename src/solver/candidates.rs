//! Dictionary-driven letter selection
//!
//! Keeps only dictionary words consistent with the board, then guesses the
//! unguessed letter that occurs in the most of them.

use super::strategy::{FrequencyGuesser, Guesser, frequency_rank};
use crate::core::TargetWord;
use crate::game::GameState;
use rustc_hash::FxHashMap;
use std::cmp::Reverse;

/// Guesser that narrows a dictionary by the revealed pattern
pub struct CandidateGuesser {
    dictionary: Vec<TargetWord>,
}

impl CandidateGuesser {
    #[must_use]
    pub fn new(dictionary: &[TargetWord]) -> Self {
        Self {
            dictionary: dictionary.to_vec(),
        }
    }

    /// Dictionary words still consistent with the game
    ///
    /// A word survives if it has the same length, agrees on every revealed
    /// position, and has no guessed letter in any hidden position.
    #[must_use]
    pub fn candidates<'a>(&'a self, state: &GameState) -> Vec<&'a TargetWord> {
        let mask = state.reveal_mask();
        let guessed = state.all_guesses();

        self.dictionary
            .iter()
            .filter(|word| word.char_count() == mask.len())
            .filter(|word| {
                word.chars().iter().zip(&mask).all(|(&c, slot)| match slot {
                    Some(revealed) => c == *revealed,
                    None => !guessed.contains(&c),
                })
            })
            .collect()
    }
}

impl Guesser for CandidateGuesser {
    fn next_letter(&self, state: &GameState) -> Option<char> {
        let guessed = state.all_guesses();

        // Count each letter once per candidate word
        let mut counts: FxHashMap<char, usize> = FxHashMap::default();
        for word in self.candidates(state) {
            let mut seen = [false; 26];
            for &c in word.chars() {
                let idx = (c as u8 - b'a') as usize;
                if !seen[idx] && !guessed.contains(&c) {
                    seen[idx] = true;
                    *counts.entry(c).or_insert(0) += 1;
                }
            }
        }

        counts
            .into_iter()
            .max_by_key(|&(c, count)| (count, Reverse(frequency_rank(c))))
            .map(|(c, _)| c)
            .or_else(|| FrequencyGuesser.next_letter(state))
    }
}
