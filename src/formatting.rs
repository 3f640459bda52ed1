// src/formatting.rs

use crate::flight::Flight;

const TWELVE_HOUR_FORMAT: &str = "%Y-%m-%d %I:%M %p";
const TWENTY_FOUR_HOUR_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Renders flight details for notification bodies.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlightFormatter {
    use_24_hour_time: bool,
}

impl FlightFormatter {
    pub fn new(use_24_hour_time: bool) -> Self {
        Self { use_24_hour_time }
    }

    /// Formats the departure time in the departure airport's local time.
    pub fn departure_time(&self, flight: &Flight) -> String {
        let format = if self.use_24_hour_time {
            TWENTY_FOUR_HOUR_FORMAT
        } else {
            TWELVE_HOUR_FORMAT
        };
        flight.departure_time.format(format).to_string()
    }

    /// The route and departure, e.g. "'Dallas' to 'Houston' at 2026-10-20 09:05 AM".
    pub fn route(&self, flight: &Flight) -> String {
        format!(
            "'{}' to '{}' at {}",
            flight.departure_airport,
            flight.destination_airport,
            self.departure_time(flight)
        )
    }
}
