//! Five-letter word representation
//!
//! A Word is the validated form of a guess or a solution: exactly `COLS`
//! ASCII letters, stored lower-case.

use super::COLS;
use std::fmt;
use thiserror::Error;

/// A 5-letter word, canonically lower-case
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: [u8; COLS],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Not enough letters")]
    TooShort(usize),
    #[error("Too many letters")]
    TooLong(usize),
    #[error("Invalid guess")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains anything other than ASCII letters
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::core::Word;
    ///
    /// let word = Word::new("CRANE").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref();

        if !text.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacters);
        }

        // ASCII only from here on, so byte length == letter count
        let chars: [u8; COLS] = match text.len() {
            len if len < COLS => return Err(WordError::TooShort(len)),
            len if len > COLS => return Err(WordError::TooLong(len)),
            _ => {
                let mut chars = [0u8; COLS];
                for (slot, byte) in chars.iter_mut().zip(text.bytes()) {
                    *slot = byte.to_ascii_lowercase();
                }
                chars
            }
        };

        Ok(Self {
            text: chars.iter().map(|&b| char::from(b)).collect(),
            chars,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; COLS] {
        &self.chars
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Normalize a single typed character into a Letter
///
/// Returns `None` for anything that is not an ASCII letter.
#[must_use]
pub const fn letter(c: char) -> Option<u8> {
    if c.is_ascii_alphabetic() {
        Some((c as u8).to_ascii_lowercase())
    } else {
        None
    }
}
