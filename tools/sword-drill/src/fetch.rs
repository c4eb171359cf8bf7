//! Verse text retrieval over HTTP.
//!
//! The engine only builds a `LookupKey`; everything network-shaped lives
//! here. Lookups are attempted once and never retried.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use sword_protocol::LookupKey;
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::settings::Settings;

/// Text returned for one lookup key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passage {
    /// The service's own rendering of the reference.
    pub reference: String,
    pub text: String,
}

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("no passage for {0}")]
    NotFound(String),
    #[error("verse service request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unreadable verse service response: {0}")]
    Decode(String),
    #[error("cannot build a verse service URL for {0}")]
    InvalidKey(String),
}

/// Downstream source of verse text.
#[async_trait]
pub trait VerseTextService: Send + Sync {
    async fn fetch(&self, key: &LookupKey) -> Result<Passage, LookupError>;
}

/// bible-api.com response body; only the fields we show.
#[derive(Debug, Deserialize)]
struct BibleApiResponse {
    reference: String,
    text: String,
}

/// Client for bible-api.com style services: `GET {base}/{passage}?translation={code}`.
#[derive(Debug, Clone)]
pub struct BibleApi {
    client: Client,
    base: Url,
}

impl BibleApi {
    pub fn new(settings: &Settings) -> Result<Self, LookupError> {
        let client = Client::builder().timeout(settings.timeout).build()?;

        Ok(Self {
            client,
            base: settings.api_url.clone(),
        })
    }

    pub fn url_for(&self, key: &LookupKey) -> Result<Url, LookupError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| LookupError::InvalidKey(key.to_string()))?
            .pop_if_empty()
            .push(&key.passage());
        url.query_pairs_mut().append_pair("translation", &key.translation);
        Ok(url)
    }
}

#[async_trait]
impl VerseTextService for BibleApi {
    async fn fetch(&self, key: &LookupKey) -> Result<Passage, LookupError> {
        let url = self.url_for(key)?;
        debug!(%url, "fetching passage");

        let response = self.client.get(url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(LookupError::NotFound(key.to_string()));
        }

        let body: BibleApiResponse = response
            .error_for_status()?
            .json()
            .await
            .map_err(|err| LookupError::Decode(err.to_string()))?;

        Ok(Passage {
            reference: body.reference,
            text: single_line(&body.text),
        })
    }
}

/// Source texts carry hard line breaks mid-verse.
fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
