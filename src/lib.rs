//! Wordle Daily
//!
//! A daily five-letter word game for the terminal: one solution per local
//! calendar day, six guesses, progress saved between runs.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_daily::core::{LetterStatus, Word};
//! use wordle_daily::daily::DayIdentity;
//! use wordle_daily::session::{GameSession, GameState};
//! use wordle_daily::storage::MemoryStore;
//!
//! let store = MemoryStore::new();
//! let day = DayIdentity::parse("2024-03-07").unwrap();
//! let mut session = GameSession::restore(day, Word::new("crane").unwrap(), &store);
//!
//! session.submit_guess("slate").unwrap();
//! assert_eq!(session.scores()[0].statuses()[2], LetterStatus::Correct);
//!
//! session.submit_guess("crane").unwrap();
//! assert_eq!(session.state(), GameState::Won);
//! ```

// Core domain types
pub mod core;

// Calendar day and storage keys
pub mod daily;

// Key-value persistence backends
pub mod storage;

// Daily solution lookup
pub mod provider;

// Game state machine and its persistence
pub mod session;

// User configuration
pub mod config;

// Tracing setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
