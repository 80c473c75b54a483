//! Fetching the day's solution from the network

use crate::core::{Word, WordError};
use crate::daily::DayIdentity;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Default source of the daily word, `{date}` is replaced by the day
pub const DEFAULT_URL_TEMPLATE: &str = "https://www.nytimes.com/svc/wordle/v2/{date}.json";

/// Any reason the live solution could not be obtained
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network error")]
    Network(#[from] reqwest::Error),

    #[error("bad response: {0}")]
    Status(StatusCode),

    #[error("unexpected payload: {0}")]
    Payload(String),

    #[error("fetched solution is not a valid word")]
    InvalidWord(#[from] WordError),

    #[error("offline")]
    Offline,
}

/// External collaborator that knows the secret word for a day
pub trait SolutionFetcher {
    /// Fetch the solution for `day`
    ///
    /// # Errors
    /// Returns `FetchError` for any non-success outcome; callers treat all
    /// variants the same way.
    fn fetch(&self, day: &DayIdentity) -> Result<Word, FetchError>;
}

impl<T: SolutionFetcher + ?Sized> SolutionFetcher for &T {
    fn fetch(&self, day: &DayIdentity) -> Result<Word, FetchError> {
        (**self).fetch(day)
    }
}

impl<T: SolutionFetcher + ?Sized> SolutionFetcher for Box<T> {
    fn fetch(&self, day: &DayIdentity) -> Result<Word, FetchError> {
        (**self).fetch(day)
    }
}

/// Blocking HTTP fetcher with a bounded request time
pub struct HttpFetcher {
    client: Client,
    url_template: String,
}

impl HttpFetcher {
    /// Create a fetcher for `url_template`
    ///
    /// # Errors
    /// Returns `FetchError::Network` if the HTTP client cannot be built.
    pub fn new(url_template: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url_template: url_template.into(),
        })
    }

    #[must_use]
    pub fn url_for(&self, day: &DayIdentity) -> String {
        self.url_template.replace("{date}", day.as_str())
    }
}

impl SolutionFetcher for HttpFetcher {
    fn fetch(&self, day: &DayIdentity) -> Result<Word, FetchError> {
        let url = self.url_for(day);
        debug!(%url, "fetching solution");

        let response = self.client.get(&url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.text()?;
        Ok(Word::new(parse_payload(&body)?)?)
    }
}

/// Fetcher that never reaches the network
pub struct OfflineFetcher;

impl SolutionFetcher for OfflineFetcher {
    fn fetch(&self, _day: &DayIdentity) -> Result<Word, FetchError> {
        Err(FetchError::Offline)
    }
}

#[derive(Deserialize)]
struct Entry {
    solution: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Payload {
    Single(Entry),
    Many(Vec<Entry>),
}

/// Extract the lower-cased solution from a response body
///
/// Accepts `{"solution": "..."}` or a list whose first element has that shape.
///
/// # Errors
/// Returns `FetchError::Payload` if the body lacks a solution field.
pub fn parse_payload(body: &str) -> Result<String, FetchError> {
    let payload: Payload =
        serde_json::from_str(body).map_err(|e| FetchError::Payload(e.to_string()))?;

    let solution = match payload {
        Payload::Single(entry) => entry.solution,
        Payload::Many(entries) => entries.into_iter().next().and_then(|e| e.solution),
    };

    solution
        .map(|s| s.to_lowercase())
        .ok_or_else(|| FetchError::Payload("missing solution field".into()))
}
