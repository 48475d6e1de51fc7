//! Hangman
//!
//! A hangman word game engine with a terminal UI, a line-oriented CLI and an
//! automated player for simulations.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::game::{Fate, GameEngine};
//! use hangman::wordlists::RandomWordSource;
//!
//! let source = RandomWordSource::seeded(vec!["tree".to_string()], 42);
//! let mut engine = GameEngine::new(source);
//! engine.start().unwrap();
//!
//! for letter in ['t', 'r', 'e'] {
//!     engine.guess(letter).unwrap();
//! }
//! assert_eq!(engine.phase().fate(), Some(Fate::Won));
//! ```

// Core domain types
pub mod core;

// Game state machine
pub mod game;

// Word lists and word sources
pub mod wordlists;

// Save files
pub mod persistence;

// Automated players
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

pub mod logging;
