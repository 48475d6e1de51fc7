//! Formatting utilities for terminal output

use crate::game::MAX_GUESSES;
use std::collections::BTreeSet;

/// Placeholder drawn for a hidden letter
pub const HIDDEN: char = '_';

/// Width every gallows line is padded to
const GALLOWS_WIDTH: usize = 9;

/// Format a reveal mask as spaced letters, e.g. `c _ t`
#[must_use]
pub fn masked_word(mask: &[Option<char>]) -> String {
    mask.iter()
        .map(|slot| slot.unwrap_or(HIDDEN).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Each letter of the alphabet paired with whether it has been guessed
#[must_use]
pub fn alphabet_board(guessed: &BTreeSet<char>) -> Vec<(char, bool)> {
    ('a'..='z').map(|c| (c, guessed.contains(&c))).collect()
}

/// Format a set of letters as a space-separated list
#[must_use]
pub fn letter_list(letters: &BTreeSet<char>) -> String {
    letters
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Draw the gallows with `stage` of its parts (0..=10)
///
/// Parts appear in order: base, pole, beam, rope, head, body, left arm,
/// right arm, left leg, right leg.
#[must_use]
pub fn gallows(stage: usize) -> Vec<String> {
    let part = |n: usize, drawn: char| if stage >= n { drawn } else { ' ' };
    let pole = part(2, '|');

    let top = match stage {
        0 | 1 => String::new(),
        2 => "  +".to_string(),
        _ => "  +---+".to_string(),
    };

    let lines = [
        top,
        format!("  {pole}   {}", part(4, '|')),
        format!("  {pole}   {}", part(5, 'O')),
        format!(
            "  {pole}  {}{}{}",
            part(7, '/'),
            part(6, '|'),
            part(8, '\\')
        ),
        format!("  {pole}  {} {}", part(9, '/'), part(10, '\\')),
        format!("  {pole}"),
        if stage >= 1 {
            "=======".to_string()
        } else {
            String::new()
        },
    ];

    lines
        .into_iter()
        .map(|line| format!("{:<GALLOWS_WIDTH$}", line.trim_end()))
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing how many guesses are left
#[must_use]
pub fn remaining_bar(remaining: u8, width: usize) -> String {
    create_progress_bar(f64::from(remaining), f64::from(MAX_GUESSES), width)
}
