//! Simple interactive CLI mode
//!
//! Text-based play without the TUI: one guess per line.

use super::GameContext;
use crate::core::ROWS;
use crate::output::formatters::scored_row;
use crate::output::{print_board, print_notice, print_outcome, print_state};
use crate::session::Outcome;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(ctx: &GameContext) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Daily Wordle - Simple Mode                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Type a five-letter guess and press Enter. You have {ROWS} tries.");
    println!("Commands: 'quit' to exit, 'show' to print the board again\n");

    let mut today = ctx.open_today();
    print_notice(today.provenance);
    print_board(&today.session);
    print_state(&today.session);

    loop {
        if today.session.locked() {
            println!("\nCome back tomorrow for a new word.\n");
            return Ok(());
        }

        let prompt = format!("Guess {}", today.session.guesses().len() + 1);
        let Some(input) = get_user_input(&prompt)? else {
            println!();
            return Ok(());
        };

        if ctx.roll_over(&mut today) {
            println!("\n🌅 A new day has started!\n");
            print_notice(today.provenance);
            print_board(&today.session);
            continue;
        }

        match input.to_lowercase().as_str() {
            "" => {}
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "show" => print_board(&today.session),
            guess => match today.session.submit_guess(guess) {
                Ok(outcome) => {
                    if let Some((word, score)) = today.session.rows().last() {
                        println!("  {}", scored_row(word, score));
                    }
                    if !matches!(outcome, Outcome::Continue(_)) {
                        print_outcome(&outcome, today.session.guesses().len());
                    }
                }
                Err(e) => println!("❌ {}", e.to_string().red()),
            },
        }
    }
}

/// Get user input with a prompt, `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
