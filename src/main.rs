//! Matchday Bridge — dnešní zápasy do Slacku
//!
//! Co dělá:
//!   1. Každých REFRESH_TIME s stáhne dnešní zápasy (worldcup.sfg.io)
//!   2. Seřadí je, převede na řádky s vlajkami, časem výkopu a skóre
//!   3. Když se cokoliv změnilo (skóre, status, nový zápas) → jedna zpráva do Slacku
//!   4. Při chybě fetch zkusí znovu za RETRY_TIME s
//!
//! Spuštění:
//!   $env:SLACK_URL="https://hooks.slack.com/services/..."
//!   $env:SLACK_CHANNEL="#worldcup"
//!   $env:TIMEZONE="2"
//!   cargo run --bin matchday-bridge

mod change_detector;
mod config;
mod scheduler;

use anyhow::{Context, Result};
use config::Config;
use dotenv::dotenv;
use logger::EventLogger;
use match_feed::{MatchFeed, MatchNormalizer};
use scheduler::PollScheduler;
use slack_notifier::SlackNotifier;
use std::env;
use std::fs::File;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .init();

    let cfg = Config::from_env().context("invalid configuration")?;

    info!("=== Matchday Bridge — sfg.io → Slack ===");
    info!("Channel: {} | TZ offset: {:+}h", cfg.slack_channel, cfg.tz_offset_hours);
    info!("Logs: {}", cfg.event_log_dir.display());

    // Single instance lock — dvě instance = dvojité zprávy v kanálu
    let lock_file_path = env::temp_dir().join("matchday_bridge.lock");
    let lock_file = match File::create(&lock_file_path) {
        Ok(f) => f,
        Err(e) => {
            warn!("Failed to create lock file at {:?}: {}", lock_file_path, e);
            return Ok(());
        }
    };

    let mut lock = fd_lock::RwLock::new(lock_file);
    let _write_guard = match lock.try_write() {
        Ok(guard) => {
            info!("Acquired single-instance lock.");
            guard
        }
        Err(_) => {
            warn!("Another instance of matchday-bridge is already running! Exiting.");
            return Ok(());
        }
    };

    let feed = MatchFeed::new(cfg.match_api_url.as_str(), cfg.http_timeout)
        .context("failed to build match feed client")?;
    info!("Feed: {}", feed.url());
    let notifier = SlackNotifier::new(cfg.slack_url.as_str(), cfg.slack_channel.as_str(), cfg.http_timeout)
        .context("failed to build Slack client")?;

    let mut scheduler = PollScheduler::new(
        feed,
        notifier,
        MatchNormalizer::new(cfg.tz_offset_hours),
        cfg.poll_interval,
        cfg.retry_interval,
    )
    .with_event_log(EventLogger::new(&cfg.event_log_dir));

    let cancel = CancellationToken::new();
    let ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Ctrl-C received, stopping after current cycle.");
        }
        ctrl_c.cancel();
    });

    scheduler.run(cancel).await;

    let retained = scheduler.detector().last_seen().map_or(0, <[_]>::len);
    info!("Stopped. Last announced set had {} matches.", retained);
    Ok(())
}
