//! The daily game state machine
//!
//! A session starts `Active`, becomes `Won` on a correct guess or `Lost` once
//! all rows are used, and is never mutated again after that. Lock status is
//! derived from the guesses themselves; the stored "played" flag is only a
//! hint that gets checked against that evidence on restore.

use super::store::{PersistedState, SessionStore};
use crate::core::{COLS, LetterStatus, ROWS, Score, Word, WordError, letter};
use crate::daily::DayIdentity;
use crate::storage::KeyValueStore;
use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Session errors surfaced to the player
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    InvalidInput(#[from] WordError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Active,
    Won,
    Lost,
}

impl GameState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Active)
    }
}

/// Result of submitting a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The session is locked; nothing changed
    Ignored,
    /// Scored, more rows remain
    Continue(Score),
    Won(Score),
    /// Out of rows; the solution is revealed
    Lost { score: Score, solution: Word },
}

/// What reconciling the stored played flag did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconciliation {
    /// No flag, game still running
    NotPlayed,
    /// Flag set and the guesses confirm a finished game
    Confirmed(GameState),
    /// Flag set but the guesses show an unfinished game; flag removed
    Cleared,
    /// Guesses show a finished game but the flag was missing; flag written
    Repaired(GameState),
}

/// One day's game
pub struct GameSession<S> {
    day: DayIdentity,
    solution: Word,
    guesses: Vec<Word>,
    scores: Vec<Score>,
    draft: Vec<u8>,
    state: GameState,
    store: SessionStore<S>,
}

impl<S: KeyValueStore> GameSession<S> {
    /// Start an empty session without reading storage
    #[must_use]
    pub fn new(day: DayIdentity, solution: Word, storage: S) -> Self {
        let store = SessionStore::new(storage, day.keys());
        Self {
            day,
            solution,
            guesses: Vec::with_capacity(ROWS),
            scores: Vec::with_capacity(ROWS),
            draft: Vec::with_capacity(COLS),
            state: GameState::Active,
            store,
        }
    }

    /// Rebuild the session for `day` from storage and reconcile the played flag
    #[must_use]
    pub fn restore(day: DayIdentity, solution: Word, storage: S) -> Self {
        let mut session = Self::new(day, solution, storage);

        if let Some(persisted) = session.store.load() {
            session.apply(&persisted);
        }

        let reconciliation = session.reconcile_played_flag();
        info!(
            day = %session.day,
            guesses = session.guesses.len(),
            state = ?session.state,
            ?reconciliation,
            "restored session"
        );
        session
    }

    /// Rebuild committed guesses from a stored record
    ///
    /// Every complete, valid word counts as a guess, up to and including a
    /// winning one. A short final entry becomes the in-progress row. Any other
    /// entry that is not a word is skipped, so one damaged slot cannot hide
    /// the guesses around it.
    fn apply(&mut self, persisted: &PersistedState) {
        let entries = &persisted.guesses[..persisted.guesses.len().min(ROWS)];

        for (i, entry) in entries.iter().enumerate() {
            let Ok(guess) = Word::new(entry) else {
                if i + 1 == entries.len() && !entry.is_empty() && entry.len() < COLS {
                    self.draft = entry.bytes().map(|b| b.to_ascii_lowercase()).collect();
                } else {
                    warn!(day = %self.day, slot = i, entry = %entry, "skipping invalid stored guess");
                }
                continue;
            };

            let won = guess == self.solution;
            self.scores.push(Score::calculate(&guess, &self.solution));
            self.guesses.push(guess);
            if won {
                break;
            }
        }

        if self.evidence().is_terminal() {
            self.draft.clear();
        }
    }

    /// State implied by the guesses alone
    fn evidence(&self) -> GameState {
        if self.guesses.iter().any(|g| *g == self.solution) {
            GameState::Won
        } else if self.guesses.len() >= ROWS {
            GameState::Lost
        } else {
            GameState::Active
        }
    }

    /// Check the stored played flag against the guesses
    ///
    /// The guesses are authoritative. A flag without a finished game behind it
    /// is stale and gets removed so the player is not locked out.
    pub fn reconcile_played_flag(&mut self) -> Reconciliation {
        let flagged = self.store.is_marked_played();
        let evidence = self.evidence();
        self.state = evidence;

        match (flagged, evidence) {
            (false, GameState::Active) => Reconciliation::NotPlayed,
            (true, GameState::Active) => {
                warn!(day = %self.day, "clearing stale played flag");
                self.store.clear_played();
                Reconciliation::Cleared
            }
            (true, finished) => Reconciliation::Confirmed(finished),
            (false, finished) => {
                debug!(day = %self.day, "re-marking finished game as played");
                self.store.mark_played();
                Reconciliation::Repaired(finished)
            }
        }
    }

    /// Commit a complete guess
    ///
    /// # Errors
    /// Returns `GameError::InvalidInput` if `letters` is not exactly five
    /// ASCII letters. A locked session returns `Outcome::Ignored` instead.
    pub fn submit_guess(&mut self, letters: &str) -> Result<Outcome, GameError> {
        if self.locked() {
            return Ok(Outcome::Ignored);
        }

        let guess = Word::new(letters)?;
        let score = Score::calculate(&guess, &self.solution);

        self.guesses.push(guess);
        self.scores.push(score);
        self.draft.clear();
        self.state = self.evidence();
        self.save();

        debug!(day = %self.day, row = self.guesses.len(), %score, "guess committed");

        Ok(match self.state {
            GameState::Active => Outcome::Continue(score),
            GameState::Won => {
                self.store.mark_played();
                Outcome::Won(score)
            }
            GameState::Lost => {
                self.store.mark_played();
                Outcome::Lost {
                    score,
                    solution: self.solution.clone(),
                }
            }
        })
    }

    /// Commit the letters typed into the current row
    ///
    /// # Errors
    /// Returns `GameError::InvalidInput` if the row is not full.
    pub fn submit_draft(&mut self) -> Result<Outcome, GameError> {
        if self.locked() {
            return Ok(Outcome::Ignored);
        }
        if self.draft.len() < COLS {
            return Err(WordError::TooShort(self.draft.len()).into());
        }

        let letters = self.draft_text();
        self.submit_guess(&letters)
    }

    /// Type a letter into the current row
    ///
    /// Returns `false` (and changes nothing) when locked, when the row is full
    /// or when `c` is not a letter.
    pub fn append_letter(&mut self, c: char) -> bool {
        if self.locked() || self.draft.len() >= COLS {
            return false;
        }
        let Some(l) = letter(c) else {
            return false;
        };
        self.draft.push(l);
        true
    }

    /// Delete the last typed letter of the current row
    pub fn remove_last_letter(&mut self) -> bool {
        if self.locked() {
            return false;
        }
        self.draft.pop().is_some()
    }

    /// Persist guesses and cursor; failures are logged, never returned
    ///
    /// An in-progress row is stored as a trailing partial entry.
    pub fn save(&self) {
        self.store.save(&self.persisted());
    }

    #[must_use]
    pub fn persisted(&self) -> PersistedState {
        let mut guesses: Vec<String> = self.guesses.iter().map(ToString::to_string).collect();
        if !self.draft.is_empty() {
            guesses.push(self.draft_text());
        }

        PersistedState {
            guesses,
            cursor_row: self.guesses.len(),
            cursor_col: self.draft.len(),
        }
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub const fn locked(&self) -> bool {
        self.state.is_terminal()
    }

    #[must_use]
    pub const fn day(&self) -> &DayIdentity {
        &self.day
    }

    /// True once the local date has moved past this session's day
    #[must_use]
    pub fn is_stale(&self, today: &DayIdentity) -> bool {
        self.day != *today
    }

    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    /// Scores, one per committed guess
    #[must_use]
    pub fn scores(&self) -> &[Score] {
        &self.scores
    }

    /// Committed guesses paired with their scores
    pub fn rows(&self) -> impl Iterator<Item = (&Word, &Score)> {
        self.guesses.iter().zip(&self.scores)
    }

    #[must_use]
    pub fn draft(&self) -> &[u8] {
        &self.draft
    }

    fn draft_text(&self) -> String {
        self.draft.iter().map(|&b| char::from(b)).collect()
    }

    /// `(row, col)` of the next letter to type
    #[must_use]
    pub fn cursor(&self) -> (usize, usize) {
        (self.guesses.len(), self.draft.len())
    }

    /// The solution, only once the game is lost
    #[must_use]
    pub fn revealed_solution(&self) -> Option<&Word> {
        (self.state == GameState::Lost).then_some(&self.solution)
    }

    /// Best known status per letter, for colouring a keyboard
    ///
    /// Correct beats present beats absent.
    #[must_use]
    pub fn letter_hints(&self) -> FxHashMap<u8, LetterStatus> {
        let mut hints = FxHashMap::default();
        for (guess, score) in self.rows() {
            for (&l, &status) in guess.chars().iter().zip(score.statuses()) {
                hints
                    .entry(l)
                    .and_modify(|best: &mut LetterStatus| *best = (*best).max(status))
                    .or_insert(status);
            }
        }
        hints
    }

    #[must_use]
    pub const fn store(&self) -> &SessionStore<S> {
        &self.store
    }
}
