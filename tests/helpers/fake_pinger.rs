//! A fake healthchecks pinger that records each ping.

use flightcheck::notification::healthchecks::HealthcheckPinger;
use std::sync::Mutex;

#[derive(Debug, Default)]
pub struct FakePinger {
    pings: Mutex<Vec<(String, String)>>,
}

impl FakePinger {
    pub fn pings(&self) -> Vec<(String, String)> {
        self.pings.lock().unwrap().clone()
    }
}

impl HealthcheckPinger for FakePinger {
    fn ping(&self, url: &str, message: &str) {
        self.pings
            .lock()
            .unwrap()
            .push((url.to_string(), message.to_string()));
    }
}
