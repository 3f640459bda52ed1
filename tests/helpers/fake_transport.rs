//! A fake notification transport that records what would have been sent.

use flightcheck::notification::transport::NotificationTransport;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub struct SentNotification {
    pub title: String,
    pub body: String,
    pub targets: Vec<String>,
}

#[derive(Debug, Default)]
pub struct FakeTransport {
    sent: Mutex<Vec<SentNotification>>,
}

impl FakeTransport {
    pub fn sent(&self) -> Vec<SentNotification> {
        self.sent.lock().unwrap().clone()
    }

    /// The body of the only notification sent so far.
    pub fn single_body(&self) -> String {
        let sent = self.sent();
        assert_eq!(sent.len(), 1, "expected exactly one notification, got {:?}", sent);
        sent[0].body.clone()
    }
}

impl NotificationTransport for FakeTransport {
    fn notify(&self, title: &str, body: &str, targets: &[String]) -> anyhow::Result<()> {
        self.sent.lock().unwrap().push(SentNotification {
            title: title.to_string(),
            body: body.to_string(),
            targets: targets.to_vec(),
        });
        Ok(())
    }
}
