//! Display functions for line-mode commands

use super::formatters::{draft_row, empty_row, scored_row};
use crate::core::ROWS;
use crate::provider::Provenance;
use crate::session::{GameSession, GameState, Outcome};
use crate::storage::KeyValueStore;
use colored::Colorize;

/// Print the full board
pub fn print_board<S: KeyValueStore>(session: &GameSession<S>) {
    println!();
    for (guess, score) in session.rows() {
        println!("  {}", scored_row(guess, score));
    }

    let mut remaining = ROWS - session.guesses().len();
    if !session.locked() && remaining > 0 {
        println!("  {}", draft_row(session.draft()));
        remaining -= 1;
    }
    for _ in 0..remaining {
        println!("  {}", empty_row());
    }
    println!();
}

/// Print the informational notice for an offline solution, if any
pub fn print_notice(provenance: Provenance) {
    if let Some(notice) = provenance.notice() {
        println!("{}", format!("ℹ️  {notice}").bright_blue());
    }
}

/// Print the result of one submitted guess
pub fn print_outcome(outcome: &Outcome, guess_count: usize) {
    match outcome {
        Outcome::Ignored => println!("{}", "Today's game is already finished.".bright_black()),
        Outcome::Continue(score) => println!("  {}", score.to_emoji()),
        Outcome::Won(_) => print_win(guess_count),
        Outcome::Lost { solution, .. } => print_loss(&solution.text().to_uppercase()),
    }
}

/// Summary line for a finished or running session
pub fn print_state<S: KeyValueStore>(session: &GameSession<S>) {
    match session.state() {
        GameState::Active => println!(
            "Guess {} of {}",
            (session.guesses().len() + 1).to_string().bright_cyan().bold(),
            ROWS
        ),
        GameState::Won => print_win(session.guesses().len()),
        GameState::Lost => {
            if let Some(solution) = session.revealed_solution() {
                print_loss(&solution.text().to_uppercase());
            }
        }
    }
}

/// Celebration line for a win in `guess_count` guesses
#[must_use]
pub const fn celebration(guess_count: usize) -> &'static str {
    match guess_count {
        1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
        2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
        3 => "✨ SPLENDID! Three guesses! ✨",
        4 => "👏 GREAT JOB! Four guesses! 👏",
        5 => "🎉 NICE WORK! Five guesses! 🎉",
        _ => "😅 PHEW! Got it in six! 😅",
    }
}

fn print_win(guess_count: usize) {
    println!("\n{}", "═".repeat(50).bright_cyan());
    println!("  {}", "You Win".bright_green().bold());
    println!("  {}", celebration(guess_count).bright_yellow());
    println!("{}", "═".repeat(50).bright_cyan());
}

fn print_loss(solution: &str) {
    println!(
        "\n{} {}",
        "Out of guesses — solution:".red().bold(),
        solution.bright_yellow().bold()
    );
}
