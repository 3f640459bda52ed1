//! Tests for HTTP delivery through the apprise-style dispatcher.

use flightcheck::config::MonitorConfig;
use flightcheck::monitor::MonitorState;
use flightcheck::notification::transport::{AppriseDispatcher, NotificationTransport};
use flightcheck::{NotificationHandler, NotificationLevel};
use mockito::Matcher;
use serde_json::json;
use std::sync::Arc;

/// The server address without a scheme, e.g. "127.0.0.1:1234".
fn host(server: &mockito::Server) -> String {
    server.host_with_port()
}

#[test]
fn test_json_target_receives_title_and_message() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/hook")
        .match_body(Matcher::Json(json!({
            "title": "Flight check-in for John Doe",
            "message": "John got A1!"
        })))
        .with_status(200)
        .create();

    let dispatcher = AppriseDispatcher::new().unwrap();
    let targets = vec![format!("json://{}/hook", host(&server))];
    dispatcher
        .notify("Flight check-in for John Doe", "John got A1!", &targets)
        .unwrap();

    mock.assert();
}

#[test]
fn test_plain_http_target_is_treated_as_json_webhook() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/generic")
        .match_body(Matcher::PartialJson(json!({ "message": "body" })))
        .with_status(204)
        .create();

    let dispatcher = AppriseDispatcher::new().unwrap();
    dispatcher
        .notify("title", "body", &[format!("{}/generic", server.url())])
        .unwrap();

    mock.assert();
}

#[test]
fn test_ntfy_target_receives_plain_text_and_title_header() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/flights")
        .match_header("title", "Flight check-in for jdoe")
        .match_body("Failed to log in to account jdoe.")
        .with_status(200)
        .create();

    let dispatcher = AppriseDispatcher::new().unwrap();
    let targets = vec![format!("ntfy://{}/flights", host(&server))];
    dispatcher
        .notify(
            "Flight check-in for jdoe",
            "Failed to log in to account jdoe.",
            &targets,
        )
        .unwrap();

    mock.assert();
}

#[test]
fn test_every_target_is_attempted_and_failures_are_reported() {
    let mut server = mockito::Server::new();
    let failing = server.mock("POST", "/down").with_status(500).create();
    let working = server.mock("POST", "/up").with_status(200).create();

    let dispatcher = AppriseDispatcher::new().unwrap();
    let targets = vec![
        format!("json://{}/down", host(&server)),
        "mailto://nobody".to_string(),
        format!("json://{}/up", host(&server)),
    ];
    let result = dispatcher.notify("title", "body", &targets);

    failing.assert();
    working.assert();
    let err = result.unwrap_err();
    assert!(
        err.to_string().contains("2 of 3"),
        "unexpected error: {}",
        err
    );
}

#[test]
fn test_handler_delivers_once_per_target_over_http() {
    let mut server = mockito::Server::new();
    let first = server.mock("POST", "/first").with_status(200).expect(1).create();
    let second = server.mock("POST", "/second").with_status(200).expect(1).create();

    let state = Arc::new(MonitorState::for_reservation(
        MonitorConfig {
            notification_urls: vec![
                format!("json://{}/first", host(&server)),
                format!("json://{}/second", host(&server)),
            ],
            notification_level: NotificationLevel::Notice,
            ..Default::default()
        },
        "John",
        "Doe",
    ));
    let handler = NotificationHandler::with_http(state).unwrap();

    // The info message is below the notice threshold, so each target only sees the login failure.
    handler
        .send_notification("ignored", Some(NotificationLevel::Info))
        .unwrap();
    handler.failed_login("jdoe").unwrap();

    first.assert();
    second.assert();
}

#[test]
fn test_handler_healthchecks_over_http() {
    let mut server = mockito::Server::new();
    let success = server
        .mock("POST", "/uuid")
        .match_body("cycle finished")
        .with_status(200)
        .expect(1)
        .create();
    let fail = server
        .mock("POST", "/uuid/fail")
        .match_body("cycle failed")
        .with_status(500)
        .expect(1)
        .create();

    let state = Arc::new(MonitorState::for_account(
        MonitorConfig {
            healthchecks_url: Some(format!("{}/uuid", server.url())),
            ..Default::default()
        },
        "jdoe",
    ));
    let handler = NotificationHandler::with_http(state).unwrap();

    handler.healthchecks_success("cycle finished");
    // A rejected ping is logged and otherwise ignored.
    handler.healthchecks_fail("cycle failed");

    success.assert();
    fail.assert();
}
