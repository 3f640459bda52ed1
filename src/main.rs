//! flightcheck - notification dispatch for a flight check-in monitor
//!
//! Loads the layered configuration, sets up logging and, on request, sends a
//! test notification through every configured monitor's channels.

use anyhow::Result;
use clap::Parser;
use flightcheck::{
    cli::Cli,
    config::Config,
    monitor::{states_from_config, MonitorView},
    NotificationHandler,
};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration by layering sources: defaults, file, environment, and CLI args.
    let config = Config::load(&cli).unwrap_or_else(|err| {
        // Logging is not configured yet, so fall back to the defaults for this one error.
        tracing_subscriber::fmt().init();
        error!("Failed to load configuration: {}", err);
        std::process::exit(1);
    });

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("flightcheck starting up...");

    info!("-------------------- Configuration --------------------");
    info!("Log Level: {}", config.log_level);
    info!("Notification URLs: {}", config.notification_urls.len());
    info!("Notification Level: {}", config.notification_level);
    info!(
        "Notification Time Format: {}",
        if config.notification_24_hour_time {
            "24-hour"
        } else {
            "12-hour"
        }
    );
    info!(
        "Healthchecks: {}",
        if config.healthchecks_url.is_some() {
            "Enabled"
        } else {
            "Disabled"
        }
    );
    info!("Accounts: {}", config.accounts.len());
    info!("Reservations: {}", config.reservations.len());
    info!("-------------------------------------------------------");

    if !cli.test_notifications {
        info!("Nothing else to do. Pass --test-notifications to send a test message.");
        return Ok(());
    }

    for state in states_from_config(&config) {
        let state: Arc<dyn MonitorView> = Arc::new(state);
        let handler = NotificationHandler::with_http(state.clone())?;
        info!(
            targets = state.config().notification_urls.len(),
            "Sending test notification for '{}'",
            handler.account_name()
        );
        handler.send_test_notification()?;
    }

    info!("Test notifications sent.");
    Ok(())
}
