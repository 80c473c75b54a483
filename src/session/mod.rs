//! Game session and its persistence
//!
//! `GameSession` is the single owner of a day's progress. `SessionStore`
//! only reads and writes on the session's behalf.

mod game;
mod store;

pub use game::{GameError, GameSession, GameState, Outcome, Reconciliation};
pub use store::{PersistedState, SessionStore, sanitize};
