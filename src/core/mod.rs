//! Core domain types for the daily game
//!
//! This module contains the fundamental domain types with zero I/O.
//! Everything here is pure and deterministic.

mod score;
mod word;

pub use score::{LetterStatus, Score, score};
pub use word::{Word, WordError, letter};

/// Letters per guess
pub const COLS: usize = 5;

/// Guesses allowed per day
pub const ROWS: usize = 6;
