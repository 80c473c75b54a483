//! Wiring from configuration to a playable session

use crate::config::Config;
use crate::core::Word;
use crate::daily::DayIdentity;
use crate::provider::{HttpFetcher, OfflineFetcher, Provenance, SolutionFetcher, SolutionProvider};
use crate::session::GameSession;
use crate::storage::{FileStore, KeyValueStore, MemoryStore};
use anyhow::Result;
use tracing::{debug, warn};

/// A session for one day plus where its solution came from
pub struct Today<'a> {
    pub session: GameSession<&'a dyn KeyValueStore>,
    pub provenance: Provenance,
}

/// Startup choices that are not part of the config file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Never touch the network
    pub offline: bool,
    /// Keep everything in memory
    pub ephemeral: bool,
    /// Play a fixed day instead of the local date
    pub date: Option<DayIdentity>,
}

/// Source of the current day
pub type Clock = Box<dyn Fn() -> DayIdentity>;

/// Long-lived collaborators shared by every session in a process
pub struct GameContext {
    storage: Box<dyn KeyValueStore>,
    fetcher: Box<dyn SolutionFetcher>,
    fallback: Word,
    clock: Clock,
}

/// The file store under the data directory, or memory if it cannot be opened
fn open_storage(config: &Config) -> Box<dyn KeyValueStore> {
    let opened = config
        .data_dir()
        .map_err(anyhow::Error::from)
        .and_then(|dir| FileStore::in_dir(dir).map_err(anyhow::Error::from));

    match opened {
        Ok(store) => Box::new(store),
        Err(e) => {
            warn!(error = ?e, "storage unavailable, progress will not be saved");
            Box::new(MemoryStore::new())
        }
    }
}

impl GameContext {
    /// Build storage and fetcher from the config
    ///
    /// Storage that cannot be opened is replaced by an in-memory store.
    ///
    /// # Errors
    /// Returns an error if the fallback word is invalid or the HTTP client
    /// cannot be built.
    pub fn new(config: &Config, overrides: Overrides) -> Result<Self> {
        let storage: Box<dyn KeyValueStore> = if overrides.ephemeral {
            Box::new(MemoryStore::new())
        } else {
            open_storage(config)
        };

        let fetcher: Box<dyn SolutionFetcher> = if overrides.offline {
            Box::new(OfflineFetcher)
        } else {
            Box::new(HttpFetcher::new(
                config.fetch.url_template.clone(),
                config.timeout(),
            )?)
        };

        Ok(Self::from_parts(
            storage,
            fetcher,
            config.fallback()?,
            overrides.date,
        ))
    }

    #[must_use]
    pub fn from_parts(
        storage: Box<dyn KeyValueStore>,
        fetcher: Box<dyn SolutionFetcher>,
        fallback: Word,
        date: Option<DayIdentity>,
    ) -> Self {
        let clock: Clock = match date {
            Some(day) => Box::new(move || day.clone()),
            None => Box::new(DayIdentity::today),
        };
        Self {
            storage,
            fetcher,
            fallback,
            clock,
        }
    }

    /// Replace the source of the current day
    #[must_use]
    pub fn with_clock(mut self, clock: impl Fn() -> DayIdentity + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// The day being played: the override if given, else the local date
    #[must_use]
    pub fn day(&self) -> DayIdentity {
        (self.clock)()
    }

    /// Resolve the solution and restore the session for `day`
    #[must_use]
    pub fn open(&self, day: DayIdentity) -> Today<'_> {
        let storage: &dyn KeyValueStore = self.storage.as_ref();
        let provider = SolutionProvider::new(self.fetcher.as_ref(), storage, self.fallback.clone());

        let resolved = provider.resolve(&day);
        debug!(%day, provenance = %resolved.provenance, "solution resolved");

        Today {
            session: GameSession::restore(day, resolved.solution, storage),
            provenance: resolved.provenance,
        }
    }

    /// Open the current day
    #[must_use]
    pub fn open_today(&self) -> Today<'_> {
        self.open(self.day())
    }

    /// Replace `today` with a fresh session if the day has changed
    ///
    /// Returns `true` when a new day was opened.
    pub fn roll_over<'a>(&'a self, today: &mut Today<'a>) -> bool {
        let current = self.day();
        if !today.session.is_stale(&current) {
            return false;
        }
        debug!(from = %today.session.day(), to = %current, "day rolled over");
        *today = self.open(current);
        true
    }
}
