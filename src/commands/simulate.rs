//! Simulate command
//!
//! Plays the engine against every word in a list with an automated guesser
//! and collects win/loss statistics.

use crate::core::TargetWord;
use crate::game::{GameEngine, GameError};
use crate::solver::{Guesser, GuesserType};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};
use tracing::info;

/// Take the hint once this many guesses or fewer remain
pub const HINT_AT_REMAINING: u8 = 3;

/// Options for a simulation run
#[derive(Debug, Clone, Copy)]
pub struct SimulationConfig {
    /// Only play the first `limit` words
    pub limit: Option<usize>,
    /// Use the hint when the engine offers it
    pub use_hints: bool,
    pub show_progress: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            limit: None,
            use_hints: true,
            show_progress: true,
        }
    }
}

/// Result of a single simulated game
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub word: String,
    pub won: bool,
    pub misses: usize,
    pub hint_used: bool,
}

/// Aggregate statistics from a simulation run
#[derive(Debug)]
pub struct SimulationResult {
    pub strategy: &'static str,
    pub total_games: usize,
    pub won: usize,
    pub lost: usize,
    pub average_misses: f64,
    pub hints_used: usize,
    pub miss_distribution: FxHashMap<usize, usize>,
    pub lost_words: Vec<String>,
    pub duration: Duration,
    pub games_per_second: f64,
}

impl SimulationResult {
    /// Fraction of games won, in `0.0..=1.0`
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            return 0.0;
        }
        self.won as f64 / self.total_games as f64
    }

    fn from_records(
        strategy: &'static str,
        records: Vec<GameRecord>,
        duration: Duration,
    ) -> Self {
        let total_games = records.len();
        let mut miss_distribution: FxHashMap<usize, usize> = FxHashMap::default();
        let mut lost_words = Vec::new();
        let mut total_misses = 0;
        let mut hints_used = 0;

        for record in records {
            *miss_distribution.entry(record.misses).or_insert(0) += 1;
            total_misses += record.misses;
            if record.hint_used {
                hints_used += 1;
            }
            if !record.won {
                lost_words.push(record.word);
            }
        }
        lost_words.sort_unstable();

        let lost = lost_words.len();
        let secs = duration.as_secs_f64();

        Self {
            strategy,
            total_games,
            won: total_games - lost,
            lost,
            average_misses: if total_games == 0 {
                0.0
            } else {
                total_misses as f64 / total_games as f64
            },
            hints_used,
            miss_distribution,
            lost_words,
            duration,
            games_per_second: if secs > 0.0 {
                total_games as f64 / secs
            } else {
                0.0
            },
        }
    }
}

/// Play one full game of `word` with `guesser`
///
/// # Errors
///
/// Returns `GameError::InvalidWord` if `word` cannot be a target.
pub fn play_game<G: Guesser>(
    word: &str,
    guesser: &G,
    use_hints: bool,
) -> Result<GameRecord, GameError> {
    let mut engine = GameEngine::new(());
    engine.start_with_word(word)?;

    while !engine.is_ended() {
        let Some(state) = engine.state() else {
            break;
        };
        let wants_hint = use_hints
            && engine.hint_available()
            && state.remaining_guesses() <= HINT_AT_REMAINING;

        if wants_hint {
            engine.hint()?;
            continue;
        }

        let Some(letter) = guesser.next_letter(state) else {
            break;
        };
        engine.guess(letter)?;
    }

    Ok(GameRecord {
        word: word.to_string(),
        won: engine.is_won(),
        misses: engine.state().map_or(0, |s| s.bad_guesses().len()),
        hint_used: engine.hint_used(),
    })
}

/// Run the guesser against every word (or the first `limit`) in parallel
///
/// # Errors
///
/// Returns the first `GameError` hit while playing; words are pre-validated so
/// this only happens for words `TargetWord` would reject.
pub fn run_simulation(
    words: &[TargetWord],
    guesser: &GuesserType,
    config: SimulationConfig,
) -> Result<SimulationResult, GameError> {
    let test_words = &words[..config.limit.unwrap_or(words.len()).min(words.len())];
    info!(games = test_words.len(), strategy = guesser.name(), "starting simulation");

    let pb = if config.show_progress {
        ProgressBar::new(test_words.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();
    let records = test_words
        .par_iter()
        .map(|word| {
            let record = play_game(word.text(), guesser, config.use_hints);
            pb.inc(1);
            record
        })
        .collect::<Result<Vec<_>, _>>()?;
    let duration = start.elapsed();

    pb.finish_with_message("Complete!");

    let result = SimulationResult::from_records(guesser.name(), records, duration);
    info!(won = result.won, lost = result.lost, "simulation finished");
    Ok(result)
}
