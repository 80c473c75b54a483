//! Letter-by-letter scoring of a guess against the solution
//!
//! Each position of a guess receives exactly one status:
//! - Correct (right letter, right position)
//! - Present (letter is in the solution, but elsewhere)
//! - Absent (no unused occurrence of the letter remains)

use super::{COLS, Word};
use std::fmt;

/// Feedback for a single guess position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterStatus {
    Absent,
    Present,
    Correct,
}

impl LetterStatus {
    /// Emoji square used by the board and the `score` command
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Statuses for every position of one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Score([LetterStatus; COLS]);

impl Score {
    /// All correct (the guess is the solution)
    pub const PERFECT: Self = Self([LetterStatus::Correct; COLS]);

    /// Score `guess` against `solution`
    ///
    /// Implements Wordle's feedback rules, including repeated letters.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and remove them from the solution pool
    /// 2. Second pass: mark the remaining letters present if an unused occurrence
    ///    is still in the pool, consuming that occurrence
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::core::{LetterStatus::*, Score, Word};
    ///
    /// let guess = Word::new("slate").unwrap();
    /// let solution = Word::new("crane").unwrap();
    ///
    /// let score = Score::calculate(&guess, &solution);
    /// assert_eq!(score.statuses(), &[Absent, Absent, Correct, Absent, Correct]);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, solution: &Word) -> Self {
        let mut result = [LetterStatus::Absent; COLS];
        let mut pool: [Option<u8>; COLS] = (*solution.chars()).map(Some);

        for (i, &letter) in guess.chars().iter().enumerate() {
            if pool[i] == Some(letter) {
                result[i] = LetterStatus::Correct;
                pool[i] = None;
            }
        }

        for (i, &letter) in guess.chars().iter().enumerate() {
            if result[i] == LetterStatus::Correct {
                continue;
            }
            if let Some(slot) = pool.iter_mut().find(|slot| **slot == Some(letter)) {
                result[i] = LetterStatus::Present;
                *slot = None;
            }
        }

        Self(result)
    }

    /// Per-position statuses
    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; COLS] {
        &self.0
    }

    /// Convert score to emoji string
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

/// Score two raw strings, validating both as words first
///
/// # Errors
/// Returns the `WordError` of whichever input is not a valid word.
pub fn score(guess: &str, solution: &str) -> Result<Score, super::WordError> {
    Ok(Score::calculate(&Word::new(guess)?, &Word::new(solution)?))
}

#[cfg(test)]
mod tests {
    use super::LetterStatus::{Absent, Correct, Present};
    use super::*;

    fn statuses(guess: &str, solution: &str) -> [LetterStatus; COLS] {
        *score(guess, solution).unwrap().statuses()
    }

    #[test]
    fn score_all_absent() {
        let s = score("abcde", "fghij").unwrap();
        assert_eq!(s.statuses(), &[Absent; COLS]);
        assert_ne!(s, Score::PERFECT);
    }

    #[test]
    fn score_all_correct() {
        assert_eq!(score("crane", "crane").unwrap(), Score::PERFECT);
        assert_eq!(Score::PERFECT.to_emoji(), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn score_is_case_insensitive() {
        assert_eq!(score("CRANE", "crane").unwrap(), Score::PERFECT);
        assert_eq!(statuses("SlAtE", "CRANE"), statuses("slate", "crane"));
    }

    #[test]
    fn score_slate_against_crane() {
        assert_eq!(
            statuses("slate", "crane"),
            [Absent, Absent, Correct, Absent, Correct]
        );
    }

    #[test]
    fn score_repeated_guess_letters_limited_by_solution() {
        // LOLLY has three L's; position 3 is exact, position 1 takes one spare L
        assert_eq!(
            statuses("xlxlx", "lolly"),
            [Absent, Present, Absent, Correct, Absent]
        );
        assert_eq!(
            statuses("llama", "lolly"),
            [Correct, Present, Absent, Absent, Absent]
        );
    }

    #[test]
    fn score_exact_match_consumes_before_present() {
        // Only one E in the solution and it is matched exactly at the end
        assert_eq!(
            statuses("eerie", "crane"),
            [Absent, Absent, Present, Absent, Correct]
        );
    }

    #[test]
    fn score_duplicate_letters_complex() {
        // ROBOT vs FLOOR: first O present, second O exact
        assert_eq!(
            statuses("robot", "floor"),
            [Present, Present, Absent, Correct, Absent]
        );
        // SPEED vs ERASE: both E's present since ERASE has two
        assert_eq!(
            statuses("speed", "erase"),
            [Present, Absent, Present, Present, Absent]
        );
    }

    #[test]
    fn score_never_overcounts_letters() {
        let words = ["lolly", "llama", "xlxlx", "speed", "erase", "aaaaa", "abbey"];
        for guess in words {
            for solution in words {
                let s = score(guess, solution).unwrap();
                for letter in b'a'..=b'z' {
                    let in_solution = solution.bytes().filter(|&b| b == letter).count();
                    let matched = guess
                        .bytes()
                        .zip(s.statuses())
                        .filter(|&(b, &st)| b == letter && st != Absent)
                        .count();
                    assert!(matched <= in_solution, "{guess} vs {solution}");
                }
            }
        }
    }

    #[test]
    fn score_rejects_invalid_words() {
        assert!(score("cran", "crane").is_err());
        assert!(score("crane", "cr4ne").is_err());
    }

    #[test]
    fn score_to_emoji() {
        let s = score("robot", "floor").unwrap();
        assert_eq!(s.to_emoji(), "🟨🟨⬜🟩⬜");
    }
}
