//! Poll loop: fetch → normalize → change-detect → render → Slack, pak sleep.
//!
//! Cykly se nepřekrývají. Další fetch začne až po dokončení (nebo selhání)
//! deliveru z předchozího cyklu. Po chybě fetch/normalize se čeká kratší
//! retry interval a uložený set zůstává beze změny.

use logger::{now_iso, DeliveryEvent, EventLogger, PollCycleEvent};
use match_feed::{FeedError, MatchFeed, MatchNormalizer, RawMatch};
use slack_notifier::{render_matches, SlackNotifier};
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use crate::change_detector::ChangeDetector;

/// Zdroj dnešních zápasů.
pub trait MatchSource {
    async fn fetch_matches(&self) -> Result<Vec<RawMatch>, FeedError>;
}

/// Cíl notifikací. `deliver` nikdy nepanikuje ani nevrací chybu, jen výsledek.
pub trait MessageSink {
    fn channel(&self) -> &str;
    async fn deliver(&self, text: &str) -> bool;
}

impl MatchSource for MatchFeed {
    async fn fetch_matches(&self) -> Result<Vec<RawMatch>, FeedError> {
        self.fetch_today().await
    }
}

impl MessageSink for SlackNotifier {
    fn channel(&self) -> &str {
        SlackNotifier::channel(self)
    }

    async fn deliver(&self, text: &str) -> bool {
        SlackNotifier::deliver(self, text).await
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    Unchanged { matches: usize },
    /// `delivered == false` = Slack selhal, na plánování to nemá vliv
    Notified { matches: usize, delivered: bool },
    /// Změna na prázdný set, nic se neposílá
    Cleared,
    FetchFailed,
    NormalizeFailed,
}

impl CycleOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::FetchFailed | Self::NormalizeFailed)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Unchanged { .. } => "unchanged",
            Self::Notified { .. } => "notified",
            Self::Cleared => "cleared",
            Self::FetchFailed => "fetch_failed",
            Self::NormalizeFailed => "normalize_failed",
        }
    }

    fn matches(&self) -> usize {
        match self {
            Self::Unchanged { matches } | Self::Notified { matches, .. } => *matches,
            _ => 0,
        }
    }
}

pub struct PollScheduler<S, N> {
    source:         S,
    sink:           N,
    normalizer:     MatchNormalizer,
    detector:       ChangeDetector,
    poll_interval:  Duration,
    retry_interval: Duration,
    events:         Option<EventLogger>,
}

impl<S: MatchSource, N: MessageSink> PollScheduler<S, N> {
    pub fn new(
        source:         S,
        sink:           N,
        normalizer:     MatchNormalizer,
        poll_interval:  Duration,
        retry_interval: Duration,
    ) -> Self {
        Self {
            source,
            sink,
            normalizer,
            detector: ChangeDetector::new(),
            poll_interval,
            retry_interval,
            events: None,
        }
    }

    pub fn with_event_log(mut self, events: EventLogger) -> Self {
        self.events = Some(events);
        self
    }

    pub fn detector(&self) -> &ChangeDetector {
        &self.detector
    }

    pub fn next_delay(&self, outcome: CycleOutcome) -> Duration {
        if outcome.is_failure() {
            self.retry_interval
        } else {
            self.poll_interval
        }
    }

    /// Běží dokud se nezruší `cancel`. První cyklus hned, pak podle výsledku
    /// poll / retry interval. Zrušení ukončí jen čekání, rozjetý cyklus doběhne.
    pub async fn run(&mut self, cancel: CancellationToken) {
        info!(
            poll_secs = self.poll_interval.as_secs(),
            retry_secs = self.retry_interval.as_secs(),
            channel = %self.sink.channel(),
            "poll loop started"
        );

        while !cancel.is_cancelled() {
            let outcome = self.run_cycle().await;
            let delay = self.next_delay(outcome);
            debug!(outcome = outcome.label(), "next poll in {}s", delay.as_secs());

            tokio::select! {
                biased;
                _ = cancel.cancelled() => break,
                _ = tokio::time::sleep(delay) => {}
            }
        }

        info!("poll loop stopped");
    }

    /// Jeden cyklus včetně pokusu o delivery.
    pub async fn run_cycle(&mut self) -> CycleOutcome {
        let raw = match self.source.fetch_matches().await {
            Ok(raw) => raw,
            Err(e) => {
                warn!("match feed fetch failed: {}", e);
                return self.finish(CycleOutcome::FetchFailed, false, e.to_string());
            }
        };

        let set = match self.normalizer.normalize_all(raw) {
            Ok(set) => set,
            Err(e) => {
                error!(country = %e.country, "match normalization failed, cycle aborted: {}", e);
                return self.finish(CycleOutcome::NormalizeFailed, false, e.to_string());
            }
        };

        let matches = set.len();
        if !self.detector.check(&set) {
            debug!(matches, "no change");
            return self.finish(CycleOutcome::Unchanged { matches }, false, "no change".to_string());
        }

        let text = render_matches(&set);
        if text.is_empty() {
            info!("match list changed to empty, nothing to send");
            return self.finish(CycleOutcome::Cleared, true, "empty match list".to_string());
        }

        info!(matches, "match list changed, notifying {}", self.sink.channel());
        let delivered = self.sink.deliver(&text).await;
        self.log_delivery(delivered, matches);

        let message = if delivered { "delivered" } else { "delivery failed" };
        self.finish(CycleOutcome::Notified { matches, delivered }, true, message.to_string())
    }

    fn finish(&self, outcome: CycleOutcome, changed: bool, message: String) -> CycleOutcome {
        if let Some(events) = &self.events {
            let _ = events.log(&PollCycleEvent {
                ts:             now_iso(),
                event:          "POLL_CYCLE",
                ok:             !outcome.is_failure(),
                outcome:        outcome.label(),
                matches:        outcome.matches(),
                changed,
                next_poll_secs: self.next_delay(outcome).as_secs(),
                message,
            });
        }
        outcome
    }

    fn log_delivery(&self, ok: bool, lines: usize) {
        if let Some(events) = &self.events {
            let _ = events.log(&DeliveryEvent {
                ts:      now_iso(),
                event:   "SLACK_DELIVERY",
                ok,
                channel: self.sink.channel().to_string(),
                lines,
                message: if ok { "ok".to_string() } else { "failed".to_string() },
            });
        }
    }
}
