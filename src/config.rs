//! Konfigurace z env (+ .env přes dotenv v main).

use anyhow::{bail, Context, Result};
use match_feed::DEFAULT_MATCH_API_URL;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_CHANNEL: &str = "#general";
pub const DEFAULT_REFRESH_SECS: u64 = 5;
pub const DEFAULT_RETRY_SECS: u64 = 60;
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_EVENT_LOG_DIR: &str = "logs";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub slack_url:       String,
    pub slack_channel:   String,
    pub poll_interval:   Duration,
    pub retry_interval:  Duration,
    /// posun zobrazeného výkopu v hodinách, může být záporný
    pub tz_offset_hours: i32,
    pub match_api_url:   String,
    pub http_timeout:    Duration,
    pub event_log_dir:   PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Prázdná hodnota = nenastaveno.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let slack_url = get("SLACK_URL").context("SLACK_URL is not set")?;

        let cfg = Self {
            slack_url,
            slack_channel:   get("SLACK_CHANNEL").unwrap_or_else(|| DEFAULT_CHANNEL.to_string()),
            poll_interval:   Duration::from_secs(parse_var(&get, "REFRESH_TIME", DEFAULT_REFRESH_SECS)?),
            retry_interval:  Duration::from_secs(parse_var(&get, "RETRY_TIME", DEFAULT_RETRY_SECS)?),
            tz_offset_hours: parse_var(&get, "TIMEZONE", 0)?,
            match_api_url:   get("MATCH_API_URL").unwrap_or_else(|| DEFAULT_MATCH_API_URL.to_string()),
            http_timeout:    Duration::from_secs(parse_var(&get, "HTTP_TIMEOUT_SECS", DEFAULT_HTTP_TIMEOUT_SECS)?),
            event_log_dir:   get("EVENT_LOG_DIR").map(PathBuf::from).unwrap_or_else(|| DEFAULT_EVENT_LOG_DIR.into()),
        };

        for (key, value) in [
            ("REFRESH_TIME", cfg.poll_interval),
            ("RETRY_TIME", cfg.retry_interval),
            ("HTTP_TIMEOUT_SECS", cfg.http_timeout),
        ] {
            if value.is_zero() {
                bail!("{key} must be greater than 0");
            }
        }

        Ok(cfg)
    }
}

fn parse_var<T>(get: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    match get(key) {
        None => Ok(default),
        Some(raw) => raw
            .parse()
            .map_err(|e| anyhow::anyhow!("{key}={raw:?} is invalid: {e}")),
    }
}
