//! Flight and check-in records consumed by the notification layer.
//!
//! Only the fields that notifications reference are modelled here. The
//! reservation monitor owns the full data model and builds these records
//! from its API responses.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A single scheduled flight segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flight {
    /// Name of the departure airport, e.g. "Dallas (Love Field)".
    pub departure_airport: String,
    /// Name of the destination airport.
    pub destination_airport: String,
    /// Departure time in the departure airport's local timezone.
    pub departure_time: DateTime<FixedOffset>,
    pub flight_number: String,
    /// International flights need passport details entered before check-in.
    #[serde(default)]
    pub is_international: bool,
}

/// The body of a successful check-in response.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CheckinResponse {
    pub flights: Vec<CheckinFlight>,
}

/// One flight segment within a check-in response.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CheckinFlight {
    pub passengers: Vec<CheckinPassenger>,
}

/// A passenger's boarding assignment.
///
/// Lap children are listed without a boarding group or position.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckinPassenger {
    pub name: String,
    #[serde(default)]
    pub boarding_group: Option<String>,
    #[serde(default)]
    pub boarding_position: Option<String>,
}

impl CheckinPassenger {
    /// Returns the combined boarding pass label (e.g. "A12") if the
    /// passenger was assigned both a group and a position.
    pub fn boarding_label(&self) -> Option<String> {
        match (&self.boarding_group, &self.boarding_position) {
            (Some(group), Some(position)) => Some(format!("{}{}", group, position)),
            _ => None,
        }
    }
}
