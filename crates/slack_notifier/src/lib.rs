//! Matchday Bridge — Slack Notifier
//!
//! Render seznamu zápasů do jednoho textu + POST na incoming webhook.
//! Fire-and-forget: neúspěch se zaloguje, nic se neopakuje.

pub mod payload;
pub mod render;

pub use payload::{SlackPayload, BOT_ICON_URL, BOT_USERNAME};
pub use render::{render_line, render_matches};

use std::time::Duration;
use tracing::{info, warn};

#[derive(thiserror::Error, Debug)]
pub enum DeliveryError {
    #[error("slack webhook unreachable: {0}")]
    Http(#[from] reqwest::Error),

    /// Webhook odpověděl ne-2xx (Slack vrací text typu "channel_not_found").
    #[error("slack webhook rejected message: {status} {body}")]
    Rejected {
        status: reqwest::StatusCode,
        body:   String,
    },
}

pub struct SlackNotifier {
    client:      reqwest::Client,
    webhook_url: String,
    channel:     String,
}

impl SlackNotifier {
    pub fn new(
        webhook_url: impl Into<String>,
        channel:     impl Into<String>,
        timeout:     Duration,
    ) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, webhook_url, channel))
    }

    pub fn with_client(
        client:      reqwest::Client,
        webhook_url: impl Into<String>,
        channel:     impl Into<String>,
    ) -> Self {
        Self {
            client,
            webhook_url: webhook_url.into(),
            channel:     channel.into(),
        }
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }

    /// Pošle text, vrátí body odpovědi (Slack posílá "ok").
    pub async fn send(&self, text: &str) -> Result<String, DeliveryError> {
        let payload = SlackPayload::new(text, self.channel.as_str());
        let resp = self.client.post(&self.webhook_url).json(&payload).send().await?;

        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        if !status.is_success() {
            return Err(DeliveryError::Rejected { status, body });
        }
        Ok(body)
    }

    /// `send` + log. Chyba se spolkne, vrací jen jestli to prošlo.
    pub async fn deliver(&self, text: &str) -> bool {
        match self.send(text).await {
            Ok(ack) => {
                info!(channel = %self.channel, "Slack response: {}", ack);
                true
            }
            Err(e) => {
                warn!(channel = %self.channel, "Slack delivery failed: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    /// Webhook stub: vrátí URL + request tak jak dorazil.
    async fn webhook_once(status_line: &'static str, body: &'static str) -> (String, oneshot::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let (mut sock, _) = listener.accept().await.unwrap();
            let mut req = Vec::new();
            let mut buf = [0u8; 4096];
            // hlavičky + JSON body, konec podle Content-Length
            loop {
                let n = sock.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                req.extend_from_slice(&buf[..n]);
                let text = String::from_utf8_lossy(&req);
                if let Some(head_end) = text.find("\r\n\r\n") {
                    let len = text[..head_end]
                        .lines()
                        .find_map(|l| {
                            let (k, v) = l.split_once(':')?;
                            k.eq_ignore_ascii_case("content-length").then(|| v.trim().parse::<usize>().ok())?
                        })
                        .unwrap_or(0);
                    if req.len() >= head_end + 4 + len {
                        break;
                    }
                }
            }
            let resp = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            sock.write_all(resp.as_bytes()).await.unwrap();
            let _ = sock.shutdown().await;
            let _ = tx.send(String::from_utf8_lossy(&req).into_owned());
        });
        (format!("http://{addr}/services/T000/B000/XXX"), rx)
    }

    fn notifier(url: String) -> SlackNotifier {
        SlackNotifier::new(url, "#worldcup", Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn posts_envelope_and_returns_ack() {
        let (url, rx) = webhook_once("200 OK", "ok").await;
        let ack = notifier(url).send(":soccer: 21:00: a - b").await.unwrap();
        assert_eq!(ack, "ok");

        let req = rx.await.unwrap();
        assert!(req.starts_with("POST /services/T000/B000/XXX"));
        let body = &req[req.find("\r\n\r\n").unwrap() + 4..];
        let v: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(v["text"], ":soccer: 21:00: a - b");
        assert_eq!(v["channel"], "#worldcup");
        assert_eq!(v["username"], BOT_USERNAME);
    }

    #[tokio::test]
    async fn non_success_is_rejected() {
        let (url, _rx) = webhook_once("404 Not Found", "channel_not_found").await;
        let err = notifier(url).send("x").await.unwrap_err();
        match err {
            DeliveryError::Rejected { status, body } => {
                assert_eq!(status.as_u16(), 404);
                assert_eq!(body, "channel_not_found");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn deliver_swallows_transport_failure() {
        let addr = std::net::TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();
        let n = notifier(format!("http://{addr}/hook"));
        assert!(matches!(n.send("x").await, Err(DeliveryError::Http(_))));
        assert!(!n.deliver("x").await);
    }

    #[tokio::test]
    async fn deliver_reports_success() {
        let (url, _rx) = webhook_once("200 OK", "ok").await;
        assert!(notifier(url).deliver("x").await);
    }
}
