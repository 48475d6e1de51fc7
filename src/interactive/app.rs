//! TUI application state and logic

use crate::game::{Fate, GameEngine, GuessOutcome, Phase};
use crate::persistence::{load_game, save_game};
use crate::wordlists::WordSource;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::path::PathBuf;
use tracing::info;

/// Maximum number of messages kept on screen
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<S> {
    pub engine: GameEngine<S>,
    pub save_file: PathBuf,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Playing,
    GameOver,
    /// Waiting for y/n/Esc before running the pending action
    ConfirmDiscard(PendingAction),
}

/// Action that would throw away the current game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    NewGame,
    Load,
    Quit,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
}

impl<S: WordSource> App<S> {
    #[must_use]
    pub fn new(engine: GameEngine<S>, save_file: impl Into<PathBuf>) -> Self {
        let mut app = Self {
            engine,
            save_file: save_file.into(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Playing,
        };
        app.add_message(
            "Welcome! Type letters to guess. Ctrl-S save, Ctrl-O load, Ctrl-N new.",
            MessageStyle::Info,
        );
        app.sync_mode();
        app
    }

    /// Start a game unless one is already loaded
    pub fn ensure_started(&mut self) {
        if self.engine.phase() == Phase::Uninitialized {
            self.new_game();
        }
    }

    pub fn new_game(&mut self) {
        match self.engine.start() {
            Ok(()) => {
                info!("new game started");
                self.add_message("New game started!", MessageStyle::Info);
                if self.engine.hint_available() {
                    self.add_message("Long word: press Tab for a hint.", MessageStyle::Info);
                }
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
        self.sync_mode();
    }

    /// Dispatch one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match (self.input_mode, key.code) {
            (_, KeyCode::Char('c')) if ctrl => self.should_quit = true,
            (InputMode::ConfirmDiscard(action), KeyCode::Char('y')) => {
                if self.save() {
                    self.run_pending(action);
                } else {
                    self.sync_mode();
                }
            }
            (InputMode::ConfirmDiscard(action), KeyCode::Char('n')) => self.run_pending(action),
            (InputMode::ConfirmDiscard(_), KeyCode::Esc) => {
                self.add_message("Cancelled.", MessageStyle::Info);
                self.sync_mode();
            }
            (InputMode::ConfirmDiscard(_), _) => {}
            (_, KeyCode::Char('s')) if ctrl => {
                self.save();
            }
            (_, KeyCode::Char('o')) if ctrl => self.request(PendingAction::Load),
            (_, KeyCode::Char('n')) if ctrl => self.request(PendingAction::NewGame),
            (_, KeyCode::Esc) => self.request(PendingAction::Quit),
            (InputMode::GameOver, KeyCode::Char('n')) => self.new_game(),
            (InputMode::GameOver, KeyCode::Char('q')) => self.should_quit = true,
            (InputMode::Playing, KeyCode::Tab | KeyCode::Char('?')) => self.hint(),
            (InputMode::Playing, KeyCode::Char(c)) if !ctrl => self.guess(c),
            _ => {}
        }
    }

    fn guess(&mut self, c: char) {
        match self.engine.guess(c) {
            Ok(outcome) => {
                let (text, style) = match outcome {
                    GuessOutcome::Hit {
                        letter, revealed, ..
                    } => (
                        format!("'{letter}' is in the word ({revealed}x)"),
                        MessageStyle::Success,
                    ),
                    GuessOutcome::Miss {
                        letter, remaining, ..
                    } => (
                        format!("No '{letter}'. {remaining} guesses left."),
                        MessageStyle::Error,
                    ),
                    GuessOutcome::AlreadyGuessed { letter } => {
                        (format!("Already guessed '{letter}'"), MessageStyle::Info)
                    }
                    GuessOutcome::InvalidInput { input } => {
                        (format!("'{input}' is not a letter"), MessageStyle::Info)
                    }
                };
                self.add_message(&text, style);
                if let Some(fate) = outcome.fate() {
                    self.finish(fate);
                }
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn hint(&mut self) {
        if !self.engine.hint_available() {
            self.add_message("No hint available", MessageStyle::Info);
            return;
        }
        match self.engine.hint() {
            Ok(outcome) => {
                self.add_message(
                    &format!("Hint: the word contains '{}'", outcome.letter),
                    MessageStyle::Success,
                );
                if let Some(fate) = outcome.fate {
                    self.finish(fate);
                }
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn finish(&mut self, fate: Fate) {
        self.stats.total_games += 1;
        if fate.is_won() {
            self.stats.games_won += 1;
        }
        let word = self.engine.target_word().unwrap_or_default().to_uppercase();
        info!(%fate, word = %word, "game over");

        let (text, style) = match fate {
            Fate::Won => (format!("🎉 You won! It was {word}."), MessageStyle::Success),
            Fate::Lost => (format!("💀 You lost. It was {word}."), MessageStyle::Error),
        };
        self.add_message(&text, style);
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
        self.input_mode = InputMode::GameOver;
    }

    /// Save the current game; returns whether it worked
    fn save(&mut self) -> bool {
        match save_game(&mut self.engine, &self.save_file) {
            Ok(()) => {
                let text = format!("Saved to {}", self.save_file.display());
                self.add_message(&text, MessageStyle::Success);
                true
            }
            Err(e) => {
                self.add_message(&format!("Could not save: {e}"), MessageStyle::Error);
                false
            }
        }
    }

    fn load(&mut self) {
        match load_game(&mut self.engine, &self.save_file) {
            Ok(()) => {
                let text = format!("Loaded {}", self.save_file.display());
                self.add_message(&text, MessageStyle::Success);
            }
            Err(e) => self.add_message(&format!("Could not load: {e}"), MessageStyle::Error),
        }
        self.sync_mode();
    }

    /// Run `action` now, or ask first if it would drop unsaved progress
    fn request(&mut self, action: PendingAction) {
        if self.engine.is_modified() && !self.engine.is_ended() {
            self.input_mode = InputMode::ConfirmDiscard(action);
            self.add_message(
                "Save current game first? (y)es / (n)o / Esc cancel",
                MessageStyle::Info,
            );
        } else {
            self.run_pending(action);
        }
    }

    fn run_pending(&mut self, action: PendingAction) {
        match action {
            PendingAction::NewGame => self.new_game(),
            PendingAction::Load => self.load(),
            PendingAction::Quit => self.should_quit = true,
        }
    }
}

impl<S> App<S> {
    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Match the input mode to the engine phase
    fn sync_mode(&mut self) {
        self.input_mode = if self.engine.is_ended() {
            InputMode::GameOver
        } else {
            InputMode::Playing
        };
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: WordSource>(mut app: App<S>) -> Result<()> {
    app.ensure_started();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, S: WordSource>(
    terminal: &mut Terminal<B>,
    mut app: App<S>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::RandomWordSource;

    fn app(word: &str) -> App<RandomWordSource<Vec<String>>> {
        let source = RandomWordSource::seeded(vec![word.to_string()], 1);
        let path = std::env::temp_dir().join(format!(
            "hangman-tui-{word}-{}.json",
            std::process::id()
        ));
        let mut app = App::new(GameEngine::new(source), path);
        app.ensure_started();
        app
    }

    fn key(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn last_message<S>(app: &App<S>) -> &str {
        app.messages.last().map_or("", |m| m.text.as_str())
    }

    #[test]
    fn letters_are_guessed() {
        let mut app = app("cat");
        app.handle_key(key('c'));
        app.handle_key(key('z'));

        let state = app.engine.state().unwrap();
        assert!(state.good_guesses().contains(&'c'));
        assert!(state.bad_guesses().contains(&'z'));
        assert_eq!(last_message(&app), "No 'z'. 9 guesses left.");
    }

    #[test]
    fn winning_switches_to_game_over() {
        let mut app = app("cat");
        for c in ['c', 'a', 't'] {
            app.handle_key(key(c));
        }

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 1);

        // Letters no longer guess; 'n' starts over
        app.handle_key(key('n'));
        assert_eq!(app.input_mode, InputMode::Playing);
        assert_eq!(app.engine.remaining_guesses(), Some(10));
    }

    #[test]
    fn losing_counts_game() {
        let mut app = app("cat");
        for c in "bdefghijkl".chars() {
            app.handle_key(key(c));
        }
        assert_eq!(app.engine.phase(), Phase::Ended(Fate::Lost));
        assert_eq!(app.stats.games_won, 0);
        assert_eq!(app.stats.total_games, 1);

        app.handle_key(key('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn tab_uses_hint_on_long_words() {
        let mut app = app("keyboard");
        app.handle_key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE));
        assert!(app.engine.hint_used());

        app.handle_key(key('?'));
        assert_eq!(last_message(&app), "No hint available");
    }

    #[test]
    fn quit_without_changes_is_immediate() {
        let mut app = app("cat");
        app.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert!(app.should_quit);
    }

    #[test]
    fn quit_with_changes_asks_first() {
        let mut app = app("cat");
        app.handle_key(key('c'));
        app.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert_eq!(
            app.input_mode,
            InputMode::ConfirmDiscard(PendingAction::Quit)
        );
        assert!(!app.should_quit);

        // Letters are ignored while confirming
        app.handle_key(key('a'));
        assert!(!app.engine.state().unwrap().all_guesses().contains(&'a'));

        app.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert_eq!(app.input_mode, InputMode::Playing);

        app.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        app.handle_key(key('n'));
        assert!(app.should_quit);
    }

    #[test]
    fn ctrl_c_always_quits() {
        let mut app = app("cat");
        app.handle_key(key('c'));
        app.handle_key(ctrl('c'));
        assert!(app.should_quit);
    }

    #[test]
    fn save_and_load_keys() {
        let mut app = app("castle");
        app.handle_key(key('a'));
        app.handle_key(ctrl('s'));
        assert!(!app.engine.is_modified());
        assert!(last_message(&app).starts_with("Saved to"));

        app.handle_key(key('z'));
        app.handle_key(ctrl('o'));
        assert_eq!(
            app.input_mode,
            InputMode::ConfirmDiscard(PendingAction::Load)
        );
        app.handle_key(key('n'));
        std::fs::remove_file(&app.save_file).unwrap();

        let state = app.engine.state().unwrap();
        assert!(state.bad_guesses().is_empty());
        assert_eq!(app.input_mode, InputMode::Playing);
        assert!(last_message(&app).starts_with("Loaded"));
    }

    #[test]
    fn load_failure_keeps_game() {
        let mut app = app("lantern");
        app.handle_key(ctrl('o'));

        assert!(last_message(&app).starts_with("Could not load"));
        assert_eq!(app.engine.target_word(), Some("lantern"));
    }

    #[test]
    fn messages_are_capped() {
        let mut app = app("cat");
        for c in "bdefgh".chars() {
            app.handle_key(key(c));
        }
        assert_eq!(app.messages.len(), MAX_MESSAGES);
    }
}
