//! Command-Line Interface (CLI) argument parsing.
//!
//! This module defines the command-line arguments for the application using the
//! `clap` crate. These arguments are parsed at startup and then merged with
//! the configuration from the `flightcheck.toml` file and environment variables.

use clap::Parser;
use figment::{
    value::{Dict, Map, Value},
    Error, Metadata, Profile, Provider,
};
use std::path::PathBuf;

use crate::level::NotificationLevel;

/// Notification dispatch for an automated flight check-in monitor.
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Minimum level a notification needs to be sent (1-3 or info, notice, error).
    #[arg(long, value_name = "LEVEL")]
    pub notification_level: Option<NotificationLevel>,

    /// Healthchecks URL to ping.
    #[arg(long, value_name = "URL")]
    pub healthchecks_url: Option<String>,

    /// Send a test message to every configured notification URL and exit.
    #[arg(long)]
    pub test_notifications: bool,
}

impl Provider for Cli {
    fn metadata(&self) -> Metadata {
        Metadata::named("Command-Line Arguments")
    }

    fn data(&self) -> Result<Map<Profile, Dict>, Error> {
        let mut dict = Dict::new();

        if let Some(level) = self.notification_level {
            dict.insert("notification_level".into(), Value::from(u8::from(level)));
        }

        if let Some(url) = &self.healthchecks_url {
            dict.insert("healthchecks_url".into(), Value::from(url.clone()));
        }

        let mut map = Map::new();
        map.insert(Profile::Default, dict);
        Ok(map)
    }
}
