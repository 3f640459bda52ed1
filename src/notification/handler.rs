//! Turns monitor lifecycle events into notifications.
//!
//! Each event method formats a message, picks a [`NotificationLevel`] and
//! hands both to [`NotificationHandler::send_notification`], which drops the
//! message if it is below the monitor's configured threshold.

use anyhow::Result;
use itertools::Itertools;
use std::fmt::Display;
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::flight::{CheckinResponse, Flight};
use crate::formatting::FlightFormatter;
use crate::level::NotificationLevel;
use crate::monitor::MonitorView;
use crate::notification::healthchecks::{fail_url, HealthcheckPinger, HttpHealthcheckPinger};
use crate::notification::transport::{AppriseDispatcher, NotificationTransport};

const TITLE: &str = "Flight check-in";
const TEST_MESSAGE: &str = "This is a test message";

/// Formats and dispatches the notifications of a single monitor.
pub struct NotificationHandler {
    monitor: Arc<dyn MonitorView>,
    transport: Arc<dyn NotificationTransport>,
    pinger: Arc<dyn HealthcheckPinger>,
}

impl NotificationHandler {
    pub fn new(
        monitor: Arc<dyn MonitorView>,
        transport: Arc<dyn NotificationTransport>,
        pinger: Arc<dyn HealthcheckPinger>,
    ) -> Self {
        Self {
            monitor,
            transport,
            pinger,
        }
    }

    /// Creates a handler that delivers over HTTP.
    pub fn with_http(monitor: Arc<dyn MonitorView>) -> Result<Self> {
        Ok(Self::new(
            monitor,
            Arc::new(AppriseDispatcher::new()?),
            Arc::new(HttpHealthcheckPinger::new()?),
        ))
    }

    /// Sends `body` to every configured notification URL if `level` meets the
    /// configured threshold. A missing level counts as [`NotificationLevel::Info`].
    #[instrument(skip(self, body))]
    pub fn send_notification(&self, body: &str, level: Option<NotificationLevel>) -> Result<()> {
        let config = self.monitor.config();
        let level = level.unwrap_or_default();

        if level < config.notification_level {
            debug!(threshold = %config.notification_level, "Notification below threshold, skipping");
            return Ok(());
        }
        if config.notification_urls.is_empty() {
            debug!("No notification URLs configured, skipping");
            return Ok(());
        }

        let account_name = self.account_name();
        let title = if account_name.is_empty() {
            TITLE.to_string()
        } else {
            format!("{} for {}", TITLE, account_name)
        };
        self.transport.notify(&title, body, &config.notification_urls)
    }

    /// Reports newly scheduled flights in a single message.
    pub fn new_flights(&self, flights: &[Flight]) -> Result<()> {
        if flights.is_empty() {
            return Ok(());
        }

        let formatter = self.formatter();
        let lines = flights
            .iter()
            .map(|flight| {
                let mut line = format!("Flight from {}", formatter.route(flight));
                if flight.is_international {
                    line.push_str(
                        ". This is an international flight: remember to fill out your \
                         passport information before check-in",
                    );
                }
                line
            })
            .join("\n");

        let message = format!(
            "Successfully scheduled the following flights to check in for {}:\n{}",
            self.account_name(),
            lines
        );
        self.send_notification(&message, Some(NotificationLevel::Info))
    }

    pub fn failed_reservation_retrieval(
        &self,
        error: impl Display,
        reservation_name: &str,
    ) -> Result<()> {
        let message = format!(
            "Failed to retrieve reservation {} for {}. Reason: {}. \
             Flights that were already scheduled will still be checked in.",
            reservation_name,
            self.account_name(),
            error
        );
        self.send_notification(&message, Some(NotificationLevel::Error))
    }

    pub fn failed_login(&self, account_name: &str) -> Result<()> {
        let message = format!(
            "Failed to log in to account {}. Check your username and password.",
            account_name
        );
        self.send_notification(&message, Some(NotificationLevel::Error))
    }

    pub fn timeout_during_retrieval(&self, account_name: &str) -> Result<()> {
        let message = format!(
            "Timed out while retrieving reservations for {}. Retrying at the next interval.",
            account_name
        );
        self.send_notification(&message, Some(NotificationLevel::Notice))
    }

    pub fn too_many_requests_during_login(&self) -> Result<()> {
        let message = format!(
            "Received a Too Many Requests error while logging in for {}. Will try again later.",
            self.account_name()
        );
        self.send_notification(&message, Some(NotificationLevel::Notice))
    }

    /// Reports the boarding positions handed out by a successful check-in.
    ///
    /// Passengers without a boarding group and position (lap children) are
    /// not checked in on their own and are left out of the message.
    pub fn successful_checkin(&self, checkin: &CheckinResponse, flight: &Flight) -> Result<()> {
        let boarding_lines = checkin
            .flights
            .iter()
            .flat_map(|checkin_flight| &checkin_flight.passengers)
            .filter_map(|passenger| {
                passenger
                    .boarding_label()
                    .map(|label| format!("{} got {}!", passenger.name, label))
            })
            .join("\n");

        let message = format!(
            "Successfully checked in to flight from {} for {}!\n{}",
            self.formatter().route(flight),
            self.account_name(),
            boarding_lines
        );
        self.send_notification(&message, Some(NotificationLevel::Info))
    }

    pub fn failed_checkin(&self, error: impl Display, flight: &Flight) -> Result<()> {
        let message = format!(
            "Failed to check in to flight from {} for {}. Reason: {}. Please check in manually.",
            self.formatter().route(flight),
            self.account_name(),
            error
        );
        self.send_notification(&message, Some(NotificationLevel::Error))
    }

    pub fn airport_checkin_required(&self, flight: &Flight) -> Result<()> {
        let message = format!(
            "Failed to check in to flight from {} for {}: this flight requires check-in at the airport.",
            self.formatter().route(flight),
            self.account_name()
        );
        self.send_notification(&message, Some(NotificationLevel::Error))
    }

    pub fn timeout_before_checkin(&self, flight: &Flight) -> Result<()> {
        let message = format!(
            "Missed the check-in window for flight from {} for {} because a request timed out. \
             Please check in manually.",
            self.formatter().route(flight),
            self.account_name()
        );
        self.send_notification(&message, Some(NotificationLevel::Error))
    }

    pub fn lower_fare(&self, flight: &Flight, fare_difference: impl Display) -> Result<()> {
        let message = format!(
            "Found a lower fare of {} for flight from {} for {}!",
            fare_difference,
            self.formatter().route(flight),
            self.account_name()
        );
        self.send_notification(&message, Some(NotificationLevel::Info))
    }

    /// Sends a message that passes every threshold, to verify the configured URLs.
    pub fn send_test_notification(&self) -> Result<()> {
        self.send_notification(TEST_MESSAGE, Some(NotificationLevel::Error))
    }

    /// Reports a successful monitoring cycle.
    pub fn healthchecks_success(&self, message: &str) {
        if let Some(url) = self.healthchecks_url() {
            self.pinger.ping(&url, message);
        }
    }

    /// Reports a failed monitoring cycle.
    pub fn healthchecks_fail(&self, message: &str) {
        if let Some(url) = self.healthchecks_url() {
            self.pinger.ping(&fail_url(&url), message);
        }
    }

    /// "First Last" once both names are known, otherwise the username.
    pub fn account_name(&self) -> String {
        match (self.monitor.first_name(), self.monitor.last_name()) {
            (Some(first), Some(last)) if !first.is_empty() && !last.is_empty() => {
                format!("{} {}", first, last)
            }
            _ => self.monitor.username().unwrap_or_default(),
        }
    }

    fn healthchecks_url(&self) -> Option<String> {
        self.monitor
            .config()
            .healthchecks_url
            .clone()
            .filter(|url| !url.is_empty())
    }

    fn formatter(&self) -> FlightFormatter {
        FlightFormatter::new(self.monitor.config().notification_24_hour_time)
    }
}
