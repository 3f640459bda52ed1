//! Handles the dispatching of monitor events to notification channels.
//!
//! The [`handler::NotificationHandler`] formats events and filters them by
//! severity. Delivery goes through the [`transport::NotificationTransport`]
//! trait, and liveness reporting through [`healthchecks::HealthcheckPinger`],
//! so the monitor can be tested without any network access.
pub mod handler;
pub mod healthchecks;
pub mod transport;

pub use handler::NotificationHandler;
