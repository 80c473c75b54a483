//! Resolving the day's solution
//!
//! Order of preference: live fetch, then the cached value from an earlier
//! successful fetch, then a fixed fallback word. Resolution always succeeds.

mod fetch;

pub use fetch::{
    DEFAULT_URL_TEMPLATE, FetchError, HttpFetcher, OfflineFetcher, SolutionFetcher, parse_payload,
};

use crate::core::Word;
use crate::daily::DayIdentity;
use crate::storage::KeyValueStore;
use std::fmt;
use tracing::{info, warn};

/// Word used when neither the network nor the cache can supply one
pub const DEFAULT_FALLBACK: &str = "crane";

/// Where the resolved solution came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    Live,
    Cached,
    Fallback,
}

impl Provenance {
    /// Informational message for the player, `None` for a live word
    #[must_use]
    pub const fn notice(self) -> Option<&'static str> {
        match self {
            Self::Live => None,
            Self::Cached => Some("Offline: using cached solution"),
            Self::Fallback => Some("Offline: using fallback solution"),
        }
    }
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Live => "live",
            Self::Cached => "cached",
            Self::Fallback => "fallback",
        })
    }
}

/// A solution together with its provenance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub solution: Word,
    pub provenance: Provenance,
}

/// Resolves the solution for a day from a fetcher, a cache and a fallback
pub struct SolutionProvider<F, S> {
    fetcher: F,
    store: S,
    fallback: Word,
}

impl<F: SolutionFetcher, S: KeyValueStore> SolutionProvider<F, S> {
    pub fn new(fetcher: F, store: S, fallback: Word) -> Self {
        Self {
            fetcher,
            store,
            fallback,
        }
    }

    /// Resolve the solution for `day`
    ///
    /// Makes at most one fetch attempt and never retries.
    pub fn resolve(&self, day: &DayIdentity) -> Resolved {
        let key = day.keys().solution_key;

        match self.fetcher.fetch(day) {
            Ok(solution) => {
                if let Err(e) = self.store.set(&key, solution.text()) {
                    warn!(error = ?e, "could not cache solution");
                }
                info!(%day, "using live solution");
                return Resolved {
                    solution,
                    provenance: Provenance::Live,
                };
            }
            Err(e) => warn!(%day, error = ?e, "failed to fetch solution"),
        }

        match self.store.get(&key) {
            Ok(Some(cached)) => match Word::new(&cached) {
                Ok(solution) => {
                    info!(%day, "using cached solution");
                    return Resolved {
                        solution,
                        provenance: Provenance::Cached,
                    };
                }
                Err(e) => warn!(%day, error = %e, "ignoring invalid cached solution"),
            },
            Ok(None) => {}
            Err(e) => warn!(error = ?e, "could not read cached solution"),
        }

        info!(%day, "using fallback solution");
        Resolved {
            solution: self.fallback.clone(),
            provenance: Provenance::Fallback,
        }
    }
}
