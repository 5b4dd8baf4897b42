/// Fetch z match-data zdroje selhal. Scheduler to řeší retry intervalem.
#[derive(thiserror::Error, Debug)]
pub enum FeedError {
    /// Transport (DNS, TLS, connect, timeout).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("failed to read response body from {url}: {source}")]
    Body {
        url: String,
        source: reqwest::Error,
    },

    /// Body není JSON seznam zápasů.
    #[error("failed to decode match list from {url}: {source}")]
    Decode {
        url: String,
        source: serde_json::Error,
    },
}

/// Země nemá záznam v tabulce vlajek.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown country {country:?}: no flag code mapped")]
pub struct UnknownCountry {
    pub country: String,
}
