#![allow(dead_code)]

pub mod fake_pinger;
pub mod fake_transport;

use chrono::DateTime;
use fake_pinger::FakePinger;
use fake_transport::FakeTransport;
use flightcheck::config::MonitorConfig;
use flightcheck::monitor::{Identity, MonitorState};
use flightcheck::{Flight, NotificationHandler, NotificationLevel};
use std::sync::Arc;

/// A handler wired to fakes, plus handles to inspect what it did.
pub struct TestHandler {
    pub state: Arc<MonitorState>,
    pub transport: Arc<FakeTransport>,
    pub pinger: Arc<FakePinger>,
    pub handler: NotificationHandler,
}

/// Builds a handler for "John Doe" with a single notification URL.
pub fn handler_with_threshold(threshold: NotificationLevel) -> TestHandler {
    let config = MonitorConfig {
        notification_urls: vec!["json://notify.example.com".to_string()],
        notification_level: threshold,
        ..Default::default()
    };
    let identity = Identity {
        username: Some("jdoe".to_string()),
        first_name: Some("John".to_string()),
        last_name: Some("Doe".to_string()),
    };
    build(MonitorState::new(config, identity))
}

pub fn build(state: MonitorState) -> TestHandler {
    let state = Arc::new(state);
    let transport = Arc::new(FakeTransport::default());
    let pinger = Arc::new(FakePinger::default());
    let handler = NotificationHandler::new(state.clone(), transport.clone(), pinger.clone());
    TestHandler {
        state,
        transport,
        pinger,
        handler,
    }
}

pub fn test_flight(is_international: bool) -> Flight {
    Flight {
        departure_airport: "Dallas (Love Field)".to_string(),
        destination_airport: "Houston (Hobby)".to_string(),
        departure_time: DateTime::parse_from_rfc3339("2026-10-20T09:05:00-05:00").unwrap(),
        flight_number: "WN1234".to_string(),
        is_international,
    }
}
