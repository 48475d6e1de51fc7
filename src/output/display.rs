//! Display functions for game and command results

use super::formatters::{gallows, letter_list, masked_word, remaining_bar};
use crate::commands::SimulationResult;
use crate::game::{Fate, GameState, GuessOutcome, HintOutcome, MAX_GUESSES};
use colored::Colorize;
use std::io::{self, Write};

/// Write the gallows, word and guess summary for a game
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_game_status<W: Write>(
    out: &mut W,
    state: &GameState,
    hint_available: bool,
) -> io::Result<()> {
    writeln!(out)?;
    for line in gallows(state.failure_markers()) {
        writeln!(out, "   {}", line.bright_black())?;
    }
    writeln!(out)?;
    writeln!(
        out,
        "  Word:       {}",
        masked_word(&state.reveal_mask()).bright_white().bold()
    )?;
    writeln!(
        out,
        "  Good:       {}",
        letter_list(state.good_guesses()).green()
    )?;
    writeln!(out, "  Bad:        {}", letter_list(state.bad_guesses()).red())?;
    writeln!(
        out,
        "  Remaining:  [{}] {}/{}",
        remaining_bar(state.remaining_guesses(), 20).cyan(),
        state.remaining_guesses(),
        MAX_GUESSES
    )?;

    let hint = if state.hint_used() {
        "used".bright_black()
    } else if hint_available {
        "available (type 'hint')".yellow()
    } else {
        "not offered".bright_black()
    };
    writeln!(out, "  Hint:       {hint}")?;
    writeln!(out)
}

/// Write a one-line summary of a guess
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_guess_outcome<W: Write>(out: &mut W, outcome: &GuessOutcome) -> io::Result<()> {
    match *outcome {
        GuessOutcome::Hit {
            letter,
            revealed: 1,
            ..
        } => writeln!(out, "{}", format!("✅ '{letter}' appears once!").green()),
        GuessOutcome::Hit {
            letter, revealed, ..
        } => writeln!(
            out,
            "{}",
            format!("✅ '{letter}' appears {revealed} times!").green()
        ),
        GuessOutcome::Miss {
            letter, remaining, ..
        } => writeln!(
            out,
            "{}",
            format!("❌ No '{letter}' in the word. {remaining} guesses left.").red()
        ),
        GuessOutcome::AlreadyGuessed { letter } => writeln!(
            out,
            "{}",
            format!("You already guessed '{letter}'.").yellow()
        ),
        GuessOutcome::InvalidInput { input } => writeln!(
            out,
            "{}",
            format!("'{input}' is not a letter.").yellow()
        ),
    }
}

/// Write a one-line summary of the hint
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_hint_outcome<W: Write>(out: &mut W, outcome: &HintOutcome) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        format!(
            "💡 Hint: the word contains '{}' ({} revealed)",
            outcome.letter, outcome.revealed
        )
        .yellow()
    )
}

/// Write the end-of-game banner
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_fate<W: Write>(out: &mut W, fate: Fate, word: &str) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(50).bright_cyan())?;
    match fate {
        Fate::Won => writeln!(
            out,
            "{}",
            format!("   🎉 You won! The word was {}.", word.to_uppercase())
                .bright_green()
                .bold()
        )?,
        Fate::Lost => writeln!(
            out,
            "{}",
            format!("   💀 You lost. The word was {}.", word.to_uppercase())
                .red()
                .bold()
        )?,
    }
    writeln!(out, "{}", "═".repeat(50).bright_cyan())?;
    writeln!(out, "Type 'new' for another game or 'quit' to exit.\n")
}

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Strategy:         {}", result.strategy);
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate() * 100.0)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Won / lost:       {} / {}",
        result.won.to_string().green(),
        result.lost.to_string().red()
    );
    println!("   Average misses:   {:.2}", result.average_misses);
    println!("   Hints used:       {}", result.hints_used);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    println!("\n📈 {}", "Misses per game:".bright_cyan().bold());
    for misses in 0..=usize::from(MAX_GUESSES) {
        if let Some(&count) = result.miss_distribution.get(&misses) {
            let pct = (count as f64 / result.total_games as f64) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░"
                    .repeat(40_usize.saturating_sub(bar_width))
                    .bright_black()
            );
            println!("   {misses:2}: {bar} {count:4} ({pct:5.1}%)");
        }
    }

    if !result.lost_words.is_empty() {
        println!("\n💀 {}", "Words that beat the strategy:".bright_cyan().bold());
        for word in result.lost_words.iter().take(10) {
            println!("   • {}", word.to_uppercase());
        }
        if result.lost_words.len() > 10 {
            println!("   … and {} more", result.lost_words.len() - 10);
        }
    }
}
