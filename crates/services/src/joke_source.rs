use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

use crate::error::SourceError;
use crate::html::decode_entities;

/// Shown in place of a joke whenever the joke provider fails.
pub const JOKE_FALLBACK: &str = "Could not fetch a joke right now.";

/// Content categories the joke request excludes.
const BLACKLIST_FLAGS: &str = "nsfw,religious,political,explicit";

/// A joke normalized to a headline plus an optional second line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JokeText {
    pub headline: String,
    pub punchline: Option<String>,
}

impl JokeText {
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            headline: JOKE_FALLBACK.to_string(),
            punchline: None,
        }
    }
}

#[async_trait]
pub trait JokeSource: Send + Sync {
    /// # Errors
    ///
    /// Returns `SourceError` when the request fails or the body is not a joke.
    async fn fetch(&self) -> Result<JokeText, SourceError>;
}

/// Best-effort joke: any failure turns into the fallback text.
pub async fn fetch_joke_or_fallback(source: &dyn JokeSource) -> JokeText {
    match source.fetch().await {
        Ok(joke) => joke,
        Err(err) => {
            warn!(error = %err, "joke fetch failed; showing fallback");
            JokeText::fallback()
        }
    }
}

/// JokeAPI client with the safe-content filters applied.
#[derive(Clone)]
pub struct JokeApiSource {
    client: Client,
    base_url: String,
}

impl JokeApiSource {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// # Errors
    ///
    /// Returns `SourceError::InvalidUrl` if the configured base URL does not parse.
    pub fn request_url(&self) -> Result<Url, SourceError> {
        let mut url = Url::parse(&self.base_url)?;
        url.query_pairs_mut()
            .append_pair("blacklistFlags", BLACKLIST_FLAGS)
            .append_key_only("safe-mode");
        Ok(url)
    }
}

#[async_trait]
impl JokeSource for JokeApiSource {
    async fn fetch(&self) -> Result<JokeText, SourceError> {
        let url = self.request_url()?;
        debug!(%url, "fetching joke");

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(SourceError::HttpStatus(response.status()));
        }
        let body = response.bytes().await?;
        let raw: RawJoke = serde_json::from_slice(&body)?;
        Ok(raw.into())
    }
}

/// The two shapes the provider answers with.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RawJoke {
    Single { joke: String },
    Twopart { setup: String, delivery: String },
}

impl From<RawJoke> for JokeText {
    fn from(raw: RawJoke) -> Self {
        match raw {
            RawJoke::Single { joke } => Self {
                headline: decode_entities(&joke),
                punchline: None,
            },
            RawJoke::Twopart { setup, delivery } => Self {
                headline: decode_entities(&setup),
                punchline: Some(decode_entities(&delivery)),
            },
        }
    }
}
