//! Game state and its saved form
//!
//! `GameState` is the single unit of persistence. Derived values (letters
//! discovered, reveal mask, failure markers) are computed from the guess sets
//! on demand rather than stored.

use super::error::CorruptSave;
use super::outcome::Fate;
use crate::core::TargetWord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Guesses available at the start of every game
pub const MAX_GUESSES: u8 = 10;

/// Mutable state of one game of hangman
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    target: TargetWord,
    good_guesses: BTreeSet<char>,
    bad_guesses: BTreeSet<char>,
    all_guesses: BTreeSet<char>,
    remaining_guesses: u8,
    hint_used: bool,
}

/// Saved form of a [`GameState`]
///
/// Field names follow the save-file layout (`targetWord`, `goodGuesses`, ...).
/// Letter sets serialize as sorted arrays of one-character strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStateDto {
    pub target_word: String,
    pub good_guesses: BTreeSet<char>,
    pub bad_guesses: BTreeSet<char>,
    pub all_guesses: BTreeSet<char>,
    pub remaining_guesses: i32,
    pub hint_used: bool,
}

impl GameState {
    /// Fresh state for a new game: empty guess sets, full budget, hint unused
    #[must_use]
    pub const fn new(target: TargetWord) -> Self {
        Self {
            target,
            good_guesses: BTreeSet::new(),
            bad_guesses: BTreeSet::new(),
            all_guesses: BTreeSet::new(),
            remaining_guesses: MAX_GUESSES,
            hint_used: false,
        }
    }

    #[must_use]
    pub const fn target(&self) -> &TargetWord {
        &self.target
    }

    #[must_use]
    pub const fn good_guesses(&self) -> &BTreeSet<char> {
        &self.good_guesses
    }

    #[must_use]
    pub const fn bad_guesses(&self) -> &BTreeSet<char> {
        &self.bad_guesses
    }

    /// Every letter guessed, including letters revealed by the hint
    #[must_use]
    pub const fn all_guesses(&self) -> &BTreeSet<char> {
        &self.all_guesses
    }

    #[must_use]
    pub const fn remaining_guesses(&self) -> u8 {
        self.remaining_guesses
    }

    #[must_use]
    pub const fn hint_used(&self) -> bool {
        self.hint_used
    }

    /// Number of target positions currently revealed
    #[must_use]
    pub fn discovered_count(&self) -> usize {
        self.target
            .chars()
            .iter()
            .filter(|&&c| self.good_guesses.contains(&c))
            .count()
    }

    /// Each position of the target word, `Some(letter)` if revealed
    #[must_use]
    pub fn reveal_mask(&self) -> Vec<Option<char>> {
        self.target
            .chars()
            .iter()
            .map(|&c| self.good_guesses.contains(&c).then_some(c))
            .collect()
    }

    /// Position of the leftmost letter not yet revealed
    #[must_use]
    pub fn first_hidden_position(&self) -> Option<usize> {
        self.target
            .chars()
            .iter()
            .position(|c| !self.good_guesses.contains(c))
    }

    /// 1 once the hint has been used, else 0
    ///
    /// The hint never costs a guess but does occupy one failure marker.
    #[must_use]
    pub const fn hint_reveal_count(&self) -> usize {
        if self.hint_used { 1 } else { 0 }
    }

    /// Number of gallows stages to draw: bad guesses plus the hint reveal
    #[must_use]
    pub fn failure_markers(&self) -> usize {
        (self.bad_guesses.len() + self.hint_reveal_count()).min(usize::from(MAX_GUESSES))
    }

    /// Whether every position of the target word is revealed
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.discovered_count() == self.target.char_count()
    }

    /// The game result, if this state is terminal
    ///
    /// A fully revealed word wins even if the budget is also exhausted.
    #[must_use]
    pub fn fate(&self) -> Option<Fate> {
        if self.is_complete() {
            Some(Fate::Won)
        } else if self.remaining_guesses == 0 {
            Some(Fate::Lost)
        } else {
            None
        }
    }

    /// Record a new, valid, lowercase letter. Returns the number of positions revealed.
    pub(crate) fn record_guess(&mut self, letter: char) -> usize {
        self.all_guesses.insert(letter);

        let revealed = self.target.positions_of(letter).len();
        if revealed > 0 {
            self.good_guesses.insert(letter);
        } else if self.bad_guesses.insert(letter) {
            self.remaining_guesses = self.remaining_guesses.saturating_sub(1);
        }
        revealed
    }

    /// Reveal the leftmost hidden letter and mark the hint used.
    ///
    /// Returns the letter and the number of positions revealed, or `None` if
    /// nothing was hidden.
    pub(crate) fn record_hint(&mut self) -> Option<(char, usize)> {
        let position = self.first_hidden_position()?;
        let letter = self.target.char_at(position);

        self.good_guesses.insert(letter);
        self.all_guesses.insert(letter);
        self.hint_used = true;

        Some((letter, self.target.positions_of(letter).len()))
    }

    /// Export the saved form, copying every field verbatim
    #[must_use]
    pub fn to_dto(&self) -> GameStateDto {
        GameStateDto {
            target_word: self.target.text().to_string(),
            good_guesses: self.good_guesses.clone(),
            bad_guesses: self.bad_guesses.clone(),
            all_guesses: self.all_guesses.clone(),
            remaining_guesses: i32::from(self.remaining_guesses),
            hint_used: self.hint_used,
        }
    }
}

impl TryFrom<&GameStateDto> for GameState {
    type Error = CorruptSave;

    fn try_from(dto: &GameStateDto) -> Result<Self, Self::Error> {
        if !dto.target_word.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(CorruptSave::InvalidWord(dto.target_word.clone()));
        }
        let target = TargetWord::new(dto.target_word.as_str())
            .map_err(|_| CorruptSave::InvalidWord(dto.target_word.clone()))?;

        let remaining_guesses = u8::try_from(dto.remaining_guesses)
            .ok()
            .filter(|&r| r <= MAX_GUESSES)
            .ok_or(CorruptSave::RemainingOutOfRange(dto.remaining_guesses))?;

        let mut letters = dto
            .good_guesses
            .iter()
            .chain(&dto.bad_guesses)
            .chain(&dto.all_guesses);
        if let Some(&bad) = letters.find(|c| !c.is_ascii_lowercase()) {
            return Err(CorruptSave::InvalidLetter(bad));
        }

        if let Some(&letter) = dto.good_guesses.intersection(&dto.bad_guesses).next() {
            return Err(CorruptSave::OverlappingGuess(letter));
        }
        if let Some(&letter) = dto.good_guesses.iter().find(|&&c| !target.has_letter(c)) {
            return Err(CorruptSave::GoodLetterNotInWord(letter));
        }
        if let Some(&letter) = dto.bad_guesses.iter().find(|&&c| target.has_letter(c)) {
            return Err(CorruptSave::BadLetterInWord(letter));
        }
        if let Some(&letter) = dto
            .good_guesses
            .iter()
            .chain(&dto.bad_guesses)
            .find(|&&c| !dto.all_guesses.contains(&c))
        {
            return Err(CorruptSave::MissingFromAllGuesses(letter));
        }

        Ok(Self {
            target,
            good_guesses: dto.good_guesses.clone(),
            bad_guesses: dto.bad_guesses.clone(),
            all_guesses: dto.all_guesses.clone(),
            remaining_guesses,
            hint_used: dto.hint_used,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(word: &str) -> GameState {
        GameState::new(TargetWord::new(word).unwrap())
    }

    fn dto(word: &str) -> GameStateDto {
        state(word).to_dto()
    }

    #[test]
    fn new_state_is_empty() {
        let s = state("cat");
        assert!(s.good_guesses().is_empty());
        assert!(s.bad_guesses().is_empty());
        assert!(s.all_guesses().is_empty());
        assert_eq!(s.remaining_guesses(), MAX_GUESSES);
        assert!(!s.hint_used());
        assert_eq!(s.discovered_count(), 0);
        assert_eq!(s.fate(), None);
    }

    #[test]
    fn guess_reveals_every_occurrence() {
        let mut s = state("banana");
        assert_eq!(s.record_guess('a'), 3);
        assert_eq!(s.discovered_count(), 3);
        assert_eq!(
            s.reveal_mask(),
            vec![None, Some('a'), None, Some('a'), None, Some('a')]
        );
    }

    #[test]
    fn miss_costs_one_guess() {
        let mut s = state("cat");
        assert_eq!(s.record_guess('z'), 0);
        assert_eq!(s.remaining_guesses(), MAX_GUESSES - 1);
        assert!(s.bad_guesses().contains(&'z'));
        assert!(s.all_guesses().contains(&'z'));
    }

    #[test]
    fn hint_reveals_leftmost_hidden_letter() {
        let mut s = state("lantern");
        s.record_guess('l');
        assert_eq!(s.record_hint(), Some(('a', 1)));
        assert!(s.hint_used());
        assert!(s.good_guesses().contains(&'a'));
        assert!(s.all_guesses().contains(&'a'));
        assert_eq!(s.remaining_guesses(), MAX_GUESSES);
        assert_eq!(s.hint_reveal_count(), 1);
    }

    #[test]
    fn hint_reveals_repeated_letters_together() {
        let mut s = state("noon");
        assert_eq!(s.record_hint(), Some(('n', 2)));
        assert_eq!(s.reveal_mask(), vec![Some('n'), None, None, Some('n')]);
    }

    #[test]
    fn failure_markers_count_hint() {
        let mut s = state("cat");
        s.record_guess('x');
        s.record_guess('y');
        assert_eq!(s.failure_markers(), 2);
        s.record_hint();
        assert_eq!(s.failure_markers(), 3);
    }

    #[test]
    fn complete_word_wins_even_with_no_guesses_left() {
        let mut dto = dto("cat");
        dto.good_guesses = ['a', 'c', 't'].into();
        dto.all_guesses = dto.good_guesses.clone();
        dto.remaining_guesses = 0;

        let s = GameState::try_from(&dto).unwrap();
        assert_eq!(s.fate(), Some(Fate::Won));
    }

    #[test]
    fn dto_round_trip() {
        let mut s = state("castle");
        s.record_guess('c');
        s.record_guess('q');
        s.record_hint();

        let restored = GameState::try_from(&s.to_dto()).unwrap();
        assert_eq!(restored, s);
    }

    #[test]
    fn dto_uses_save_file_field_names() {
        let json = serde_json::to_value(dto("cat")).unwrap();
        for field in [
            "targetWord",
            "goodGuesses",
            "badGuesses",
            "allGuesses",
            "remainingGuesses",
            "hintUsed",
        ] {
            assert!(json.get(field).is_some(), "missing field {field}");
        }
    }

    #[test]
    fn rejects_invalid_word() {
        let mut d = dto("cat");
        d.target_word = "cat1".to_string();
        assert_eq!(
            GameState::try_from(&d),
            Err(CorruptSave::InvalidWord("cat1".to_string()))
        );

        d.target_word = "Cat".to_string();
        assert!(matches!(
            GameState::try_from(&d),
            Err(CorruptSave::InvalidWord(_))
        ));

        d.target_word = String::new();
        assert!(matches!(
            GameState::try_from(&d),
            Err(CorruptSave::InvalidWord(_))
        ));
    }

    #[test]
    fn rejects_out_of_range_remaining() {
        let mut d = dto("cat");
        d.remaining_guesses = -1;
        assert_eq!(
            GameState::try_from(&d),
            Err(CorruptSave::RemainingOutOfRange(-1))
        );

        d.remaining_guesses = i32::from(MAX_GUESSES) + 1;
        assert_eq!(
            GameState::try_from(&d),
            Err(CorruptSave::RemainingOutOfRange(11))
        );
    }

    #[test]
    fn rejects_bad_letters() {
        let mut d = dto("cat");
        d.bad_guesses.insert('Z');
        d.all_guesses.insert('Z');
        assert_eq!(
            GameState::try_from(&d),
            Err(CorruptSave::InvalidLetter('Z'))
        );

        let mut d = dto("cat");
        d.all_guesses.insert('7');
        assert_eq!(
            GameState::try_from(&d),
            Err(CorruptSave::InvalidLetter('7'))
        );
    }

    #[test]
    fn rejects_inconsistent_sets() {
        let mut d = dto("cat");
        d.good_guesses.insert('c');
        d.bad_guesses.insert('c');
        d.all_guesses.insert('c');
        assert_eq!(
            GameState::try_from(&d),
            Err(CorruptSave::OverlappingGuess('c'))
        );

        let mut d = dto("cat");
        d.good_guesses.insert('z');
        d.all_guesses.insert('z');
        assert_eq!(
            GameState::try_from(&d),
            Err(CorruptSave::GoodLetterNotInWord('z'))
        );

        let mut d = dto("cat");
        d.bad_guesses.insert('a');
        d.all_guesses.insert('a');
        assert_eq!(
            GameState::try_from(&d),
            Err(CorruptSave::BadLetterInWord('a'))
        );

        let mut d = dto("cat");
        d.good_guesses.insert('a');
        assert_eq!(
            GameState::try_from(&d),
            Err(CorruptSave::MissingFromAllGuesses('a'))
        );
    }
}
