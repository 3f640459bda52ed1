//! Configuration management for flightcheck
//!
//! This module defines the main `Config` struct and the per-account and
//! per-reservation sections that can override its notification settings.
//! It uses the `figment` crate to layer defaults, a `flightcheck.toml` file,
//! environment variables and command-line arguments.

use anyhow::Result;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::cli::Cli;
use crate::level::NotificationLevel;

/// The main configuration struct for the application.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// The logging level used when `RUST_LOG` is not set.
    pub log_level: String,
    /// Apprise-style destination URLs that receive every notification.
    #[serde(default)]
    pub notification_urls: Vec<String>,
    /// Minimum severity a notification needs to be sent.
    #[serde(default)]
    pub notification_level: NotificationLevel,
    /// Render departure times as 14:05 instead of 02:05 PM.
    #[serde(default)]
    pub notification_24_hour_time: bool,
    /// Healthchecks endpoint pinged after each monitoring cycle.
    #[serde(default)]
    pub healthchecks_url: Option<String>,
    /// Accounts to monitor.
    #[serde(default)]
    pub accounts: Vec<AccountConfig>,
    /// Individual reservations to monitor without logging in.
    #[serde(default)]
    pub reservations: Vec<ReservationConfig>,
}

/// An account whose reservations are monitored after logging in.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct AccountConfig {
    pub username: String,
    /// Extra URLs, appended to the global list.
    #[serde(default)]
    pub notification_urls: Vec<String>,
    pub notification_level: Option<NotificationLevel>,
    pub healthchecks_url: Option<String>,
}

/// A single reservation monitored by confirmation number.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct ReservationConfig {
    pub confirmation_number: String,
    pub first_name: String,
    pub last_name: String,
    /// Extra URLs, appended to the global list.
    #[serde(default)]
    pub notification_urls: Vec<String>,
    pub notification_level: Option<NotificationLevel>,
    pub healthchecks_url: Option<String>,
}

/// The effective notification settings of a single monitor.
///
/// This is what a `NotificationHandler` reads on every call.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MonitorConfig {
    pub notification_urls: Vec<String>,
    pub notification_level: NotificationLevel,
    pub notification_24_hour_time: bool,
    pub healthchecks_url: Option<String>,
}

impl Config {
    /// Loads the application configuration by layering, in order of
    /// precedence: defaults, the TOML file, `FLIGHTCHECK_*` environment
    /// variables and command-line arguments.
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
        if let Some(path) = &cli.config {
            figment = figment.merge(Toml::file(path));
        }
        let config: Config = figment
            // Nested keys use a double underscore, e.g. FLIGHTCHECK_NOTIFICATION_LEVEL=error
            .merge(Env::prefixed("FLIGHTCHECK_").split("__"))
            .merge(cli.clone())
            .extract()?;
        Ok(config)
    }

    /// Settings for a monitor that has no account or reservation overrides.
    pub fn global_monitor_config(&self) -> MonitorConfig {
        self.resolve(&[], None, None)
    }

    /// Settings for an account monitor, with the account's overrides applied.
    pub fn account_monitor_config(&self, account: &AccountConfig) -> MonitorConfig {
        self.resolve(
            &account.notification_urls,
            account.notification_level,
            account.healthchecks_url.as_deref(),
        )
    }

    /// Settings for a reservation monitor, with the reservation's overrides applied.
    pub fn reservation_monitor_config(&self, reservation: &ReservationConfig) -> MonitorConfig {
        self.resolve(
            &reservation.notification_urls,
            reservation.notification_level,
            reservation.healthchecks_url.as_deref(),
        )
    }

    fn resolve(
        &self,
        extra_urls: &[String],
        level: Option<NotificationLevel>,
        healthchecks_url: Option<&str>,
    ) -> MonitorConfig {
        let notification_urls = self
            .notification_urls
            .iter()
            .chain(extra_urls)
            .cloned()
            .collect();

        let healthchecks_url = healthchecks_url
            .or(self.healthchecks_url.as_deref())
            .filter(|url| !url.is_empty())
            .map(str::to_string);

        MonitorConfig {
            notification_urls,
            notification_level: level.unwrap_or(self.notification_level),
            notification_24_hour_time: self.notification_24_hour_time,
            healthchecks_url,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            notification_urls: Vec::new(),
            notification_level: NotificationLevel::Info,
            notification_24_hour_time: false,
            healthchecks_url: None,
            accounts: Vec::new(),
            reservations: Vec::new(),
        }
    }
}
