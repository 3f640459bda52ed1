/// flightcheck - Notification dispatch for an automated flight check-in monitor
///
/// This library turns reservation monitor events into severity-filtered
/// notifications and reports monitor liveness to a healthchecks endpoint.
pub mod notification;

pub mod cli;
pub mod config;
pub mod flight;
pub mod formatting;
pub mod level;
pub mod monitor;

// Re-export the types a monitor needs for convenience
pub use flight::{CheckinFlight, CheckinPassenger, CheckinResponse, Flight};
pub use level::NotificationLevel;
pub use monitor::{MonitorState, MonitorView};
pub use notification::NotificationHandler;
