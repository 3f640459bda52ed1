//! An apprise-style client that delivers one message to many URLs.

use anyhow::Result;
use serde_json::json;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
const NTFY_DEFAULT_HOST: &str = "ntfy.sh";
const SLACK_WEBHOOK_PREFIX: &str = "https://hooks.slack.com/";

/// A channel that can deliver a titled message to a list of destination URLs.
pub trait NotificationTransport: Send + Sync {
    /// Delivers `body` under `title` to every URL in `targets`.
    fn notify(&self, title: &str, body: &str, targets: &[String]) -> Result<()>;
}

/// Errors raised while delivering to individual targets.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("unsupported notification URL with scheme '{0}'")]
    UnsupportedUrl(String),
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("notification endpoint returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("failed to deliver notification to {failed} of {total} targets")]
    PartialFailure { failed: usize, total: usize },
}

/// Where and how a target URL is delivered to.
#[derive(Debug, Clone, PartialEq)]
enum Endpoint {
    /// Generic JSON webhook receiving `{"title", "message"}`.
    Json(String),
    /// Slack incoming webhook receiving `{"text"}`.
    Slack(String),
    /// ntfy topic receiving the body as plain text and the title as a header.
    Ntfy(String),
}

impl Endpoint {
    fn parse(target: &str) -> Result<Self, TransportError> {
        let unsupported = || TransportError::UnsupportedUrl(scheme(target).to_string());

        if target.starts_with(SLACK_WEBHOOK_PREFIX) {
            return Ok(Self::Slack(target.to_string()));
        }
        if target.starts_with("http://") || target.starts_with("https://") {
            return Ok(Self::Json(target.to_string()));
        }

        let (prefix, rest) = target.split_once("://").ok_or_else(unsupported)?;
        if rest.is_empty() {
            return Err(unsupported());
        }
        match prefix {
            "json" => Ok(Self::Json(format!("http://{}", rest))),
            "jsons" => Ok(Self::Json(format!("https://{}", rest))),
            // A bare topic lives on the public ntfy server.
            "ntfy" if !rest.contains('/') => {
                Ok(Self::Ntfy(format!("https://{}/{}", NTFY_DEFAULT_HOST, rest)))
            }
            "ntfy" => Ok(Self::Ntfy(format!("http://{}", rest))),
            "ntfys" => Ok(Self::Ntfy(format!("https://{}", rest))),
            _ => Err(unsupported()),
        }
    }
}

/// Only the scheme is logged; the rest of a target URL often embeds a token.
fn scheme(target: &str) -> &str {
    target.split_once("://").map_or("<none>", |(scheme, _)| scheme)
}

/// Delivers notifications over HTTP to apprise-style URLs.
///
/// Every target is attempted even if an earlier one fails.
pub struct AppriseDispatcher {
    client: reqwest::blocking::Client,
}

impl AppriseDispatcher {
    /// Creates a dispatcher with the default request timeout.
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    fn send(&self, endpoint: &Endpoint, title: &str, body: &str) -> Result<(), TransportError> {
        let request = match endpoint {
            Endpoint::Json(url) => self
                .client
                .post(url)
                .json(&json!({ "title": title, "message": body })),
            Endpoint::Slack(url) => self
                .client
                .post(url)
                .json(&json!({ "text": format!("*{}*\n{}", title, body) })),
            Endpoint::Ntfy(url) => self
                .client
                .post(url)
                .header("Title", title)
                .body(body.to_string()),
        };

        let response = request.send()?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(TransportError::Status(status))
        }
    }
}

impl NotificationTransport for AppriseDispatcher {
    #[instrument(skip_all, fields(targets = targets.len()))]
    fn notify(&self, title: &str, body: &str, targets: &[String]) -> Result<()> {
        let mut failed = 0;
        for target in targets {
            let result = Endpoint::parse(target).and_then(|endpoint| self.send(&endpoint, title, body));
            match result {
                Ok(()) => debug!(scheme = scheme(target), "Delivered notification"),
                Err(e) => {
                    failed += 1;
                    warn!(scheme = scheme(target), error = %e, "Failed to deliver notification");
                }
            }
        }

        if failed > 0 {
            error!(failed, total = targets.len(), "Notification delivery incomplete");
            return Err(TransportError::PartialFailure {
                failed,
                total: targets.len(),
            }
            .into());
        }

        info!("Successfully sent notification to {} targets.", targets.len());
        Ok(())
    }
}
