//! Simple interactive CLI mode
//!
//! Line-oriented hangman game without TUI

use crate::game::{GameEngine, Phase};
use crate::output::{write_fate, write_game_status, write_guess_outcome, write_hint_outcome};
use crate::persistence::{load_game, save_game};
use crate::wordlists::WordSource;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, Lines, Write};
use std::path::Path;
use tracing::info;

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Guess(char),
    Hint,
    Save,
    Load,
    New,
    Quit,
    Help,
    Empty,
    Unknown(String),
}

/// Parse a line of input
///
/// A single character is a guess (except `?`, which asks for the hint); longer
/// input is matched case-insensitively against the command words.
#[must_use]
pub fn parse_command(line: &str) -> Command {
    let trimmed = line.trim();
    let mut chars = trimmed.chars();

    match (chars.next(), chars.next()) {
        (None, _) => Command::Empty,
        (Some('?'), None) => Command::Hint,
        (Some(c), None) => Command::Guess(c),
        _ => match trimmed.to_lowercase().as_str() {
            "hint" => Command::Hint,
            "save" => Command::Save,
            "load" => Command::Load,
            "new" => Command::New,
            "quit" | "exit" => Command::Quit,
            "help" => Command::Help,
            _ => Command::Unknown(trimmed.to_string()),
        },
    }
}

/// Run the simple CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if no game can be started or on terminal I/O failure.
pub fn run_simple<S: WordSource>(engine: &mut GameEngine<S>, save_file: &Path) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_session(engine, save_file, stdin.lock(), &mut stdout)
}

/// Play until the player quits or input ends
///
/// Starts a game first unless one is already loaded into `engine`.
///
/// # Errors
///
/// Returns an error if the first game cannot be started or on I/O failure.
pub fn run_session<S, R, W>(
    engine: &mut GameEngine<S>,
    save_file: &Path,
    input: R,
    out: &mut W,
) -> Result<()>
where
    S: WordSource,
    R: BufRead,
    W: Write,
{
    writeln!(out, "\n╔══════════════════════════════════════════════╗")?;
    writeln!(out, "║               Hangman - Text Mode            ║")?;
    writeln!(out, "╚══════════════════════════════════════════════╝")?;
    write_help(out)?;

    if engine.phase() == Phase::Uninitialized {
        engine.start().context("could not start a game")?;
        info!("new game started");
    }
    write_board(engine, out)?;

    let mut lines = input.lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next().transpose()? else {
            writeln!(out, "\n👋 Goodbye!")?;
            return Ok(());
        };

        match parse_command(&line) {
            Command::Guess(c) => match engine.guess(c) {
                Ok(outcome) => {
                    write_guess_outcome(out, &outcome)?;
                    if outcome.is_accepted() {
                        write_board(engine, out)?;
                    }
                }
                Err(e) => writeln!(out, "{}", e.to_string().yellow())?,
            },
            Command::Hint => {
                if engine.hint_available() {
                    let outcome = engine.hint()?;
                    write_hint_outcome(out, &outcome)?;
                    write_board(engine, out)?;
                } else {
                    writeln!(out, "{}", "No hint available right now.".yellow())?;
                }
            }
            Command::Save => {
                save(engine, save_file, out)?;
            }
            Command::Load => {
                if confirm_discard(engine, save_file, &mut lines, out)? {
                    load(engine, save_file, out)?;
                }
            }
            Command::New => {
                if confirm_discard(engine, save_file, &mut lines, out)? {
                    match engine.start() {
                        Ok(()) => {
                            info!("new game started");
                            writeln!(out, "\n🔄 New game started!")?;
                            write_board(engine, out)?;
                        }
                        Err(e) => writeln!(out, "{}", e.to_string().red())?,
                    }
                }
            }
            Command::Quit => {
                if confirm_discard(engine, save_file, &mut lines, out)? {
                    writeln!(out, "\n👋 Thanks for playing!")?;
                    return Ok(());
                }
            }
            Command::Help => write_help(out)?,
            Command::Empty => {}
            Command::Unknown(text) => {
                writeln!(out, "Unknown command '{text}'. Type 'help' for commands.")?;
            }
        }
    }
}

/// Show the board, or the end-of-game banner once the game is over
fn write_board<S, W: Write>(engine: &GameEngine<S>, out: &mut W) -> io::Result<()> {
    let Some(state) = engine.state() else {
        return Ok(());
    };
    write_game_status(out, state, engine.hint_available())?;
    if let Phase::Ended(fate) = engine.phase() {
        info!(%fate, word = state.target().text(), "game over");
        write_fate(out, fate, state.target().text())?;
    }
    Ok(())
}

fn write_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\nType a letter to guess it. Commands:")?;
    writeln!(out, "  hint or ?   reveal a letter (long words only, once per game)")?;
    writeln!(out, "  save        save the current game")?;
    writeln!(out, "  load        load the saved game")?;
    writeln!(out, "  new         start a new game")?;
    writeln!(out, "  quit        exit\n")
}

fn save<S, W: Write>(engine: &mut GameEngine<S>, save_file: &Path, out: &mut W) -> Result<bool> {
    match save_game(engine, save_file) {
        Ok(()) => {
            writeln!(out, "💾 Saved to {}", save_file.display())?;
            Ok(true)
        }
        Err(e) => {
            writeln!(out, "{}", format!("Could not save: {e}").red())?;
            Ok(false)
        }
    }
}

fn load<S, W: Write>(engine: &mut GameEngine<S>, save_file: &Path, out: &mut W) -> Result<()> {
    match load_game(engine, save_file) {
        Ok(()) => {
            writeln!(out, "📂 Loaded {}", save_file.display())?;
            write_board(engine, out)?;
        }
        Err(e) => writeln!(out, "{}", format!("Could not load: {e}").red())?,
    }
    Ok(())
}

/// Ask before throwing away an unsaved game in progress
///
/// Returns whether the caller may go ahead. End of input counts as "no".
fn confirm_discard<S, R: BufRead, W: Write>(
    engine: &mut GameEngine<S>,
    save_file: &Path,
    lines: &mut Lines<R>,
    out: &mut W,
) -> Result<bool> {
    if !engine.is_modified() || engine.is_ended() {
        return Ok(true);
    }

    write!(out, "Save current game first? (yes/no/cancel) ")?;
    out.flush()?;

    let Some(answer) = lines.next().transpose()? else {
        return Ok(true);
    };
    match answer.trim().to_lowercase().as_str() {
        "y" | "yes" => save(engine, save_file, out),
        "n" | "no" => Ok(true),
        _ => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::RandomWordSource;
    use std::path::PathBuf;

    type TestEngine = GameEngine<RandomWordSource<Vec<String>>>;

    fn engine(word: &str) -> TestEngine {
        GameEngine::new(RandomWordSource::seeded(vec![word.to_string()], 7))
    }

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("hangman-simple-{name}-{}.json", std::process::id()))
    }

    fn play(engine: &mut TestEngine, save_file: &Path, input: &str) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        run_session(engine, save_file, input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parse_single_letters_and_commands() {
        assert_eq!(parse_command("a"), Command::Guess('a'));
        assert_eq!(parse_command("  Q \n"), Command::Guess('Q'));
        assert_eq!(parse_command("7"), Command::Guess('7'));
        assert_eq!(parse_command("?"), Command::Hint);
        assert_eq!(parse_command("HINT"), Command::Hint);
        assert_eq!(parse_command("save"), Command::Save);
        assert_eq!(parse_command("load"), Command::Load);
        assert_eq!(parse_command("new"), Command::New);
        assert_eq!(parse_command("exit"), Command::Quit);
        assert_eq!(parse_command("help"), Command::Help);
        assert_eq!(parse_command("   "), Command::Empty);
        assert_eq!(parse_command("xyz"), Command::Unknown("xyz".to_string()));
    }

    #[test]
    fn winning_session() {
        let mut engine = engine("cat");
        let text = play(&mut engine, &temp_path("win"), "c\na\nt\nquit\n");

        assert!(text.contains("You won! The word was CAT."));
        assert!(engine.is_won());
        assert!(text.contains("Thanks for playing"));
    }

    #[test]
    fn losing_session() {
        let mut engine = engine("cat");
        let text = play(&mut engine, &temp_path("loss"), "b\nd\ne\nf\ng\nh\ni\nj\nk\nl\n");

        assert!(text.contains("You lost. The word was CAT."));
        assert_eq!(engine.phase(), Phase::Ended(crate::game::Fate::Lost));
        // Input ended after the loss
        assert!(text.contains("Goodbye"));
    }

    #[test]
    fn invalid_and_repeated_guesses_are_reported() {
        let mut engine = engine("cat");
        let text = play(&mut engine, &temp_path("invalid"), "7\nc\nC\n");

        assert!(text.contains("'7' is not a letter."));
        assert!(text.contains("You already guessed 'c'."));
        assert_eq!(engine.remaining_guesses(), Some(10));
    }

    #[test]
    fn guess_after_game_over_is_refused() {
        let mut engine = engine("at");
        let text = play(&mut engine, &temp_path("over"), "a\nt\nz\n");
        assert!(text.contains("game is over"));
    }

    #[test]
    fn hint_only_for_long_words() {
        let mut short = engine("cat");
        let text = play(&mut short, &temp_path("hint-short"), "hint\n");
        assert!(text.contains("No hint available"));
        assert!(!short.hint_used());

        let mut long = engine("keyboard");
        let text = play(&mut long, &temp_path("hint-long"), "?\n?\n");
        assert!(text.contains("Hint: the word contains 'k'"));
        assert!(long.hint_used());
        assert_eq!(long.remaining_guesses(), Some(10));
    }

    #[test]
    fn save_then_load_restores_game() {
        let path = temp_path("save-load");

        let mut first = engine("castle");
        let text = play(&mut first, &path, "a\nz\nsave\n");
        assert!(text.contains("Saved to"));
        assert!(!first.is_modified());

        let mut second = engine("tree");
        let text = play(&mut second, &path, "load\n");
        std::fs::remove_file(&path).unwrap();

        assert!(text.contains("Loaded"));
        assert_eq!(second.target_word(), Some("castle"));
        assert_eq!(second.remaining_guesses(), Some(9));
    }

    #[test]
    fn load_missing_file_keeps_game() {
        let mut engine = engine("tree");
        let text = play(&mut engine, &temp_path("missing"), "load\n");

        assert!(text.contains("Could not load"));
        assert_eq!(engine.target_word(), Some("tree"));
    }

    #[test]
    fn quit_with_unsaved_game_asks_first() {
        let path = temp_path("confirm");
        let mut engine = engine("tree");

        let text = play(&mut engine, &path, "t\nquit\ncancel\nquit\nno\n");
        assert!(text.contains("Save current game first?"));
        assert!(text.contains("Thanks for playing"));
        assert!(!path.exists());
    }

    #[test]
    fn confirm_yes_saves_before_new_game() {
        let path = temp_path("confirm-yes");
        let mut engine = engine("tree");

        let text = play(&mut engine, &path, "t\nnew\nyes\n");
        assert!(path.exists());
        std::fs::remove_file(&path).unwrap();

        assert!(text.contains("New game started"));
        assert!(!engine.is_modified());
        assert_eq!(engine.remaining_guesses(), Some(10));
    }

    #[test]
    fn no_valid_word_is_an_error() {
        let mut engine = GameEngine::new(RandomWordSource::seeded(vec!["x-ray".to_string()], 0));
        let mut out = Vec::new();
        let result = run_session(&mut engine, &temp_path("none"), "".as_bytes(), &mut out);
        assert!(result.is_err());
    }
}
