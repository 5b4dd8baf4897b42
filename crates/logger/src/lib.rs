/// Matchday Bridge — Logger
/// JSONL event stream pro poll cykly a Slack delivery

use anyhow::Result;
use chrono::Utc;
use serde::Serialize;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

pub struct EventLogger {
    log_dir: PathBuf,
}

impl EventLogger {
    pub fn new(log_dir: impl Into<PathBuf>) -> Self {
        let dir = log_dir.into();
        fs::create_dir_all(&dir).ok();
        Self { log_dir: dir }
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    pub fn log<T: Serialize>(&self, event: &T) -> Result<()> {
        let date  = Utc::now().format("%Y-%m-%d").to_string();
        let path  = self.log_dir.join(format!("{date}.jsonl"));
        let line  = serde_json::to_string(event)?;
        let mut f = OpenOptions::new().create(true).append(true).open(&path)?;
        writeln!(f, "{line}")?;
        Ok(())
    }
}

pub fn now_iso() -> String {
    Utc::now().to_rfc3339()
}

// ── Event typy ────────────────────────────────────────────────────────────────

#[derive(Serialize, Debug)]
pub struct PollCycleEvent {
    pub ts:             String,
    pub event:          &'static str,   // "POLL_CYCLE"
    pub ok:             bool,
    pub outcome:        &'static str,   // "unchanged" | "notified" | "cleared" | "fetch_failed" | "normalize_failed"
    pub matches:        usize,
    pub changed:        bool,
    pub next_poll_secs: u64,
    pub message:        String,
}

#[derive(Serialize, Debug)]
pub struct DeliveryEvent {
    pub ts:      String,
    pub event:   &'static str,   // "SLACK_DELIVERY"
    pub ok:      bool,
    pub channel: String,
    pub lines:   usize,
    pub message: String,
}
