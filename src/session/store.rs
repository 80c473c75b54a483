//! Persisting the day's progress
//!
//! Stored content is untrusted: it may have been written by an older build,
//! edited by hand, or truncated. Everything read back is sanitized, and any
//! record that does not have the expected shape counts as "no saved game".

use crate::core::ROWS;
use crate::daily::StorageKeys;
use crate::storage::{KeyValueStore, StorageError};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

const PLAYED: &str = "true";

/// The stored projection of a game session
///
/// Only guesses and cursor are kept; whether the game is won, lost or still
/// running is always re-derived from the guesses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersistedState {
    pub guesses: Vec<String>,
    #[serde(rename = "curRow")]
    pub cursor_row: usize,
    #[serde(rename = "curCol")]
    pub cursor_col: usize,
}

/// Keep only ASCII letters
#[must_use]
pub fn sanitize(guess: &str) -> String {
    guess.chars().filter(char::is_ascii_alphabetic).collect()
}

/// Best-effort persistence for one day's session
#[derive(Debug)]
pub struct SessionStore<S> {
    storage: S,
    keys: StorageKeys,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub const fn new(storage: S, keys: StorageKeys) -> Self {
        Self { storage, keys }
    }

    #[must_use]
    pub const fn keys(&self) -> &StorageKeys {
        &self.keys
    }

    /// Write `state` under the state key; failures are logged and dropped
    pub fn save(&self, state: &PersistedState) {
        let sanitized = PersistedState {
            guesses: state.guesses.iter().map(|g| sanitize(g)).collect(),
            ..state.clone()
        };

        let result = serde_json::to_string(&sanitized)
            .map_err(StorageError::from)
            .and_then(|json| self.storage.set(&self.keys.state_key, &json));

        match result {
            Ok(()) => debug!(
                key = %self.keys.state_key,
                guesses = sanitized.guesses.len(),
                "saved session"
            ),
            Err(e) => warn!(key = %self.keys.state_key, error = ?e, "could not save session"),
        }
    }

    /// Read back the saved state, `None` if there is nothing usable
    #[must_use]
    pub fn load(&self) -> Option<PersistedState> {
        let raw = match self.storage.get(&self.keys.state_key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(key = %self.keys.state_key, error = ?e, "could not read session");
                return None;
            }
        };

        let state = parse_state(&raw);
        if state.is_none() {
            warn!(key = %self.keys.state_key, "discarding corrupt session record");
        }
        state
    }

    /// Whether the "finished today" flag is set
    #[must_use]
    pub fn is_marked_played(&self) -> bool {
        match self.storage.get(&self.keys.played_key) {
            Ok(value) => value.as_deref() == Some(PLAYED),
            Err(e) => {
                warn!(key = %self.keys.played_key, error = ?e, "could not read played flag");
                false
            }
        }
    }

    pub fn mark_played(&self) {
        if let Err(e) = self.storage.set(&self.keys.played_key, PLAYED) {
            warn!(key = %self.keys.played_key, error = ?e, "could not set played flag");
        }
    }

    pub fn clear_played(&self) {
        if let Err(e) = self.storage.remove(&self.keys.played_key) {
            warn!(key = %self.keys.played_key, error = ?e, "could not clear played flag");
        }
    }
}

fn parse_state(raw: &str) -> Option<PersistedState> {
    let value: Value = serde_json::from_str(raw).ok()?;
    let guesses = value.get("guesses")?.as_array()?;

    let guesses = guesses
        .iter()
        .take(ROWS)
        .map(|g| g.as_str().map(sanitize).unwrap_or_default())
        .collect();

    let cursor = |field: &str| {
        value
            .get(field)
            .and_then(Value::as_u64)
            .map_or(0, |n| usize::try_from(n).unwrap_or(usize::MAX))
    };

    Some(PersistedState {
        guesses,
        cursor_row: cursor("curRow"),
        cursor_col: cursor("curCol"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::daily::DayIdentity;
    use crate::storage::{FailingStore, MemoryStore};

    fn keys() -> StorageKeys {
        DayIdentity::parse("2024-03-07").unwrap().keys()
    }

    fn state(guesses: &[&str], row: usize, col: usize) -> PersistedState {
        PersistedState {
            guesses: guesses.iter().map(ToString::to_string).collect(),
            cursor_row: row,
            cursor_col: col,
        }
    }

    #[test]
    fn sanitize_keeps_letters_only() {
        assert_eq!(sanitize("cr ane"), "crane");
        assert_eq!(sanitize("C-R4A_N!E"), "CRANE");
        assert_eq!(sanitize("é"), "");
    }

    #[test]
    fn save_writes_expected_json() {
        let mem = MemoryStore::new();
        let store = SessionStore::new(&mem, keys());
        store.save(&state(&["crane", "sl ate"], 2, 0));

        assert_eq!(
            mem.get("wordle-popup-2024-03-07").unwrap().as_deref(),
            Some(r#"{"guesses":["crane","slate"],"curRow":2,"curCol":0}"#)
        );
    }

    #[test]
    fn load_returns_saved_state() {
        let mem = MemoryStore::new();
        let store = SessionStore::new(&mem, keys());
        let saved = state(&["crane", "slate"], 2, 0);
        store.save(&saved);

        assert_eq!(store.load(), Some(saved));
    }

    #[test]
    fn load_then_save_is_byte_identical() {
        let mem = MemoryStore::new();
        let store = SessionStore::new(&mem, keys());
        store.save(&state(&["crane", "slate", "pio"], 2, 3));
        let first = mem.get(&keys().state_key).unwrap();

        let loaded = store.load().unwrap();
        store.save(&loaded);
        assert_eq!(mem.get(&keys().state_key).unwrap(), first);
    }

    #[test]
    fn load_absent_and_malformed() {
        let mem = MemoryStore::new();
        let store = SessionStore::new(&mem, keys());
        assert_eq!(store.load(), None);

        for raw in [
            "not json",
            "42",
            r#"{"guesses":"crane"}"#,
            r#"{"curRow":1}"#,
            r#"["crane"]"#,
        ] {
            mem.set(&keys().state_key, raw).unwrap();
            assert_eq!(store.load(), None, "{raw}");
        }
    }

    #[test]
    fn load_sanitizes_and_truncates() {
        let mem = MemoryStore::new();
        let store = SessionStore::new(&mem, keys());
        mem.set(
            &keys().state_key,
            r#"{"guesses":["c r a n e",7,"SLATE","a","b","c","d","e"],"curRow":9}"#,
        )
        .unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.guesses, ["crane", "", "SLATE", "a", "b", "c"]);
        assert_eq!(loaded.cursor_row, 9);
        assert_eq!(loaded.cursor_col, 0);
    }

    #[test]
    fn played_flag_lifecycle() {
        let mem = MemoryStore::new();
        let store = SessionStore::new(&mem, keys());
        assert!(!store.is_marked_played());

        store.mark_played();
        assert!(store.is_marked_played());
        assert_eq!(
            mem.get("wordle-played-2024-03-07").unwrap().as_deref(),
            Some("true")
        );

        store.clear_played();
        assert!(!store.is_marked_played());
    }

    #[test]
    fn storage_failures_are_swallowed() {
        let store = SessionStore::new(FailingStore, keys());
        store.save(&state(&["crane"], 1, 0));
        store.mark_played();
        store.clear_played();
        assert_eq!(store.load(), None);
        assert!(!store.is_marked_played());
    }

    #[test]
    fn other_days_are_invisible() {
        let mem = MemoryStore::new();
        let today = SessionStore::new(&mem, keys());
        let tomorrow = SessionStore::new(&mem, DayIdentity::parse("2024-03-08").unwrap().keys());

        today.save(&state(&["crane"], 1, 0));
        today.mark_played();

        assert_eq!(tomorrow.load(), None);
        assert!(!tomorrow.is_marked_played());
    }
}
