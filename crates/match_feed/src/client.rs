use std::time::Duration;
use tracing::{debug, instrument};

use crate::error::FeedError;
use crate::model::RawMatch;

pub const DEFAULT_MATCH_API_URL: &str = "https://worldcup.sfg.io/matches/today";

/// HTTP klient na match-data zdroj. Jeden GET = jeden seznam `RawMatch`.
pub struct MatchFeed {
    client: reqwest::Client,
    url:    String,
}

impl MatchFeed {
    /// Klient s bounded timeoutem, ať visící spojení nezasekne poll loop.
    pub fn new(url: impl Into<String>, timeout: Duration) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("matchday-bridge/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self::with_client(client, url))
    }

    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self { client, url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    #[instrument(skip(self), fields(url = %self.url))]
    pub async fn fetch_today(&self) -> Result<Vec<RawMatch>, FeedError> {
        let resp = self
            .client
            .get(&self.url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|source| FeedError::Http { url: self.url.clone(), source })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FeedError::UnexpectedStatus { url: self.url.clone(), status });
        }

        let raw = resp
            .text()
            .await
            .map_err(|source| FeedError::Body { url: self.url.clone(), source })?;
        debug!("match feed raw (first 300): {}", preview(&raw, 300));

        serde_json::from_str(&raw).map_err(|source| FeedError::Decode { url: self.url.clone(), source })
    }
}

fn preview(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
