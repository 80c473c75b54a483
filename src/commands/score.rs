//! Score command
//!
//! Scores an arbitrary guess against an arbitrary solution.

use crate::core::{Score, Word};
use crate::output::formatters::scored_row;
use anyhow::{Context, Result};

/// Score `guess` against `solution`
///
/// # Errors
///
/// Returns an error if either word is not five ASCII letters.
pub fn score_words(guess: &str, solution: &str) -> Result<(Word, Score)> {
    let guess = Word::new(guess).with_context(|| format!("invalid guess {guess:?}"))?;
    let solution = Word::new(solution).with_context(|| format!("invalid solution {solution:?}"))?;
    let score = Score::calculate(&guess, &solution);
    Ok((guess, score))
}

/// Print the coloured row and emoji score
///
/// # Errors
///
/// See [`score_words`].
pub fn run_score(guess: &str, solution: &str) -> Result<()> {
    let (word, score) = score_words(guess, solution)?;
    println!("{}  {}", scored_row(&word, &score), score.to_emoji());
    Ok(())
}
