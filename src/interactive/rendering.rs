//! TUI rendering with ratatui
//!
//! Gallows, word board, alphabet and messages for the hangman interface.

use super::app::{App, InputMode, MessageStyle, PendingAction};
use crate::game::{Fate, GameState, MAX_GUESSES, Phase};
use crate::output::formatters::{HIDDEN, alphabet_board, gallows};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<S>(f: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(15),     // Gallows
            Constraint::Percentage(50), // Word and letters
            Constraint::Min(20),        // Messages
        ])
        .split(chunks[1]);

    let state = app.engine.state();
    render_gallows(f, state, main_chunks[0]);
    render_board(f, app, state, main_chunks[1]);
    render_messages(f, app, main_chunks[2]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🪢 HANGMAN")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_gallows(f: &mut Frame, state: Option<&GameState>, area: Rect) {
    let stage = state.map_or(0, GameState::failure_markers);
    let lines: Vec<Line> = gallows(stage).into_iter().map(Line::from).collect();

    let paragraph = Paragraph::new(lines)
        .style(Style::default().fg(Color::Gray))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn render_board<S>(f: &mut Frame, app: &App<S>, state: Option<&GameState>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Word
            Constraint::Length(3), // Remaining guesses
            Constraint::Min(4),    // Alphabet
        ])
        .split(area);

    let Some(state) = state else {
        let paragraph = Paragraph::new("No game in progress").block(
            Block::default()
                .title(" Word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
        f.render_widget(paragraph, area);
        return;
    };

    render_word(f, app.engine.phase(), state, chunks[0]);
    render_remaining(f, state, chunks[1]);
    render_alphabet(f, state, chunks[2]);
}

fn render_word(f: &mut Frame, phase: Phase, state: &GameState, area: Rect) {
    let lost = phase == Phase::Ended(Fate::Lost);
    let revealed = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    // On a loss the hidden letters are shown in red
    let spans: Vec<Span> = state
        .target()
        .chars()
        .iter()
        .zip(state.reveal_mask())
        .flat_map(|(&c, slot)| {
            let cell = match slot {
                Some(letter) => Span::styled(letter.to_ascii_uppercase().to_string(), revealed),
                None if lost => Span::styled(
                    c.to_ascii_uppercase().to_string(),
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                None => Span::raw(HIDDEN.to_string()),
            };
            [cell, Span::raw(" ")]
        })
        .collect();

    let paragraph = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn render_remaining(f: &mut Frame, state: &GameState, area: Rect) {
    let remaining = state.remaining_guesses();
    let color = match remaining {
        0..=2 => Color::Red,
        3..=5 => Color::Yellow,
        _ => Color::Green,
    };

    let gauge = Gauge::default()
        .block(Block::default().title(" Guesses Left ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(color))
        .percent(u16::from(remaining) * 100 / u16::from(MAX_GUESSES))
        .label(format!("{remaining}/{MAX_GUESSES}"));

    f.render_widget(gauge, area);
}

fn render_alphabet(f: &mut Frame, state: &GameState, area: Rect) {
    let letters: Vec<Span> = alphabet_board(state.all_guesses())
        .into_iter()
        .flat_map(|(c, guessed)| {
            let style = if !guessed {
                Style::default().fg(Color::White)
            } else if state.good_guesses().contains(&c) {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::CROSSED_OUT)
            };
            [
                Span::styled(c.to_ascii_uppercase().to_string(), style),
                Span::raw(" "),
            ]
        })
        .collect();

    // Two rows of 13
    let (first, second) = letters.split_at(letters.len() / 2);
    let lines = vec![Line::from(first.to_vec()), Line::from(second.to_vec())];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Letters ").borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_messages<S>(f: &mut Frame, app: &App<S>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status<S>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let hint = if app.engine.hint_used() {
        "Hint: used"
    } else if app.engine.hint_available() {
        "Hint: Tab"
    } else {
        "Hint: -"
    };
    let hint = Paragraph::new(hint).alignment(Alignment::Center);
    f.render_widget(hint, chunks[0]);

    let stats_text = format!(
        "Games: {} | Won: {}",
        app.stats.total_games, app.stats.games_won
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = match app.input_mode {
        InputMode::Playing => "A-Z: Guess | ^S Save | ^O Load | ^N New | Esc: Quit",
        InputMode::GameOver => "n: New Game | q: Quit | ^O Load",
        InputMode::ConfirmDiscard(PendingAction::Quit) => "Save before quitting? y / n / Esc",
        InputMode::ConfirmDiscard(_) => "Save current game first? y / n / Esc",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
