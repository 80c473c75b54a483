//! Formatting utilities for terminal output

use crate::core::{COLS, LetterStatus, Score, Word};
use colored::{ColoredString, Colorize};

/// One letter tile, upper-case on a status-coloured background
#[must_use]
pub fn tile(letter: char, status: Option<LetterStatus>) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match status {
        Some(LetterStatus::Correct) => text.black().on_green().bold(),
        Some(LetterStatus::Present) => text.black().on_yellow().bold(),
        Some(LetterStatus::Absent) => text.white().on_bright_black(),
        None => text.bright_white().bold(),
    }
}

/// A committed guess as coloured tiles
#[must_use]
pub fn scored_row(guess: &Word, score: &Score) -> String {
    guess
        .text()
        .chars()
        .zip(score.statuses())
        .map(|(c, &status)| tile(c, Some(status)).to_string())
        .collect()
}

/// A partially typed row padded with blanks
#[must_use]
pub fn draft_row(letters: &[u8]) -> String {
    (0..COLS)
        .map(|i| {
            letters.get(i).map_or_else(
                || " _ ".dimmed().to_string(),
                |&b| tile(char::from(b), None).to_string(),
            )
        })
        .collect()
}

/// Row of empty slots
#[must_use]
pub fn empty_row() -> String {
    " · ".repeat(COLS).bright_black().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain<F: FnOnce() -> String>(f: F) -> String {
        colored::control::set_override(false);
        f()
    }

    #[test]
    fn scored_row_uppercases_letters() {
        let guess = Word::new("slate").unwrap();
        let score = Score::calculate(&guess, &Word::new("crane").unwrap());
        assert_eq!(plain(|| scored_row(&guess, &score)), " S  L  A  T  E ");
    }

    #[test]
    fn draft_row_pads_to_width() {
        assert_eq!(plain(|| draft_row(b"pi")), " P  I  _  _  _ ");
    }

    #[test]
    fn empty_row_has_all_slots() {
        assert_eq!(plain(empty_row), " ·  ·  ·  ·  · ");
    }
}
