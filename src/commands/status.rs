//! Status command
//!
//! Shows today's board without accepting input.

use super::GameContext;
use crate::core::ROWS;
use crate::output::{print_board, print_notice, print_state};
use colored::Colorize;

/// Print the current day's board and state
pub fn run_status(ctx: &GameContext) {
    let today = ctx.open_today();
    let session = &today.session;

    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Day {}  ({} solution)",
        session.day().as_str().bright_yellow().bold(),
        today.provenance
    );
    println!("{}", "─".repeat(40).cyan());

    print_notice(today.provenance);
    print_board(session);
    println!("Guesses used: {}/{ROWS}", session.guesses().len());
    print_state(session);
}
