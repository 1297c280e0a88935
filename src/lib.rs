//! Wordle
//!
//! A single-player word-guessing game engine with terminal front ends: six
//! tries at a five-letter word, per-letter feedback, a small hint budget and
//! persistent statistics.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{Feedback, LetterState, Word};
//!
//! let secret = Word::new("allee").unwrap();
//! let guess = Word::new("eagle").unwrap();
//!
//! let feedback = Feedback::evaluate(&guess, &secret);
//! assert_eq!(feedback.state_at(4), LetterState::Correct);
//! assert_eq!(feedback.to_string(), "YY-YG");
//! ```

// Core domain types
pub mod core;

// Word lists and guess validation
pub mod wordlists;

// Turn state machine and coordinator
pub mod game;

// Cross-session statistics and persistence
pub mod stats;

// Per-game settings
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
