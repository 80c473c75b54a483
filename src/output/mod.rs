//! Terminal output formatting
//!
//! Board and message printing for the line-mode commands.

pub mod display;
pub mod formatters;

pub use display::{celebration, print_board, print_notice, print_outcome, print_state};
