//! Liveness pings to a healthchecks.io-compatible endpoint.

use std::time::Duration;
use tracing::{debug, warn};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Reports liveness of the monitoring loop. Pings are best-effort.
pub trait HealthcheckPinger: Send + Sync {
    /// Posts `message` to `url`. Failures are logged, never returned.
    fn ping(&self, url: &str, message: &str);
}

/// Builds the URL that marks a check as failed.
///
/// `fail` is appended to the path so query parameters such as `?rid=` are kept.
pub fn fail_url(url: &str) -> String {
    let mut parsed = match reqwest::Url::parse(url) {
        Ok(parsed) => parsed,
        Err(_) => return format!("{}/fail", url.trim_end_matches('/')),
    };
    match parsed.path_segments_mut() {
        Ok(mut segments) => {
            segments.pop_if_empty().push("fail");
        }
        Err(()) => return format!("{}/fail", url.trim_end_matches('/')),
    }
    parsed.to_string()
}

/// Pings over HTTP with a blocking client.
pub struct HttpHealthcheckPinger {
    client: reqwest::blocking::Client,
}

impl HttpHealthcheckPinger {
    pub fn new() -> anyhow::Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::blocking::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

impl HealthcheckPinger for HttpHealthcheckPinger {
    fn ping(&self, url: &str, message: &str) {
        match self.client.post(url).body(message.to_string()).send() {
            Ok(response) if response.status().is_success() => {
                debug!("Healthchecks ping delivered.");
            }
            Ok(response) => {
                warn!(status = %response.status(), "Healthchecks endpoint rejected ping");
            }
            Err(e) => {
                warn!(error = %e, "Healthchecks ping failed");
            }
        }
    }
}
