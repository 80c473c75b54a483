//! Per-day identity and storage keys
//!
//! Everything persisted for a game is namespaced by the local calendar date,
//! so state written on one day is never read on another.

use chrono::{Local, NaiveDate};
use std::fmt;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A local calendar day in `YYYY-MM-DD` form
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DayIdentity {
    text: String,
}

/// Storage keys derived from a `DayIdentity`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    /// Cached solution from the last successful fetch
    pub solution_key: String,
    /// Persisted guesses and cursor
    pub state_key: String,
    /// "Finished today" marker
    pub played_key: String,
}

impl DayIdentity {
    /// The current local day (no time component)
    #[must_use]
    pub fn today() -> Self {
        Self::from_date(Local::now().date_naive())
    }

    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            text: date.format(DATE_FORMAT).to_string(),
        }
    }

    /// Parse a `YYYY-MM-DD` string
    ///
    /// # Errors
    /// Returns the chrono parse error if the string is not a valid date.
    pub fn parse(s: &str) -> Result<Self, chrono::ParseError> {
        NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).map(Self::from_date)
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn keys(&self) -> StorageKeys {
        StorageKeys {
            solution_key: format!("wordle-solution-{}", self.text),
            state_key: format!("wordle-popup-{}", self.text),
            played_key: format!("wordle-played-{}", self.text),
        }
    }
}

impl fmt::Display for DayIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
