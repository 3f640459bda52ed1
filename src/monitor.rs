//! The read-only view a notification handler has of its monitor.
//!
//! A reservation monitor owns the login and polling loops. Its notification
//! handler only ever needs to read the monitor's live configuration and the
//! traveler's identity, so that capability is expressed as the
//! [`MonitorView`] trait. [`MonitorState`] is the shared state a monitor
//! hands to its handler; both sides can swap values in at runtime.

use arc_swap::ArcSwap;
use std::sync::Arc;

use crate::config::{Config, MonitorConfig};

/// Identity and configuration of a monitor, as seen by its notification handler.
pub trait MonitorView: Send + Sync {
    /// A snapshot of the monitor's current configuration.
    fn config(&self) -> Arc<MonitorConfig>;

    /// The traveler's first name, once known.
    fn first_name(&self) -> Option<String>;

    /// The traveler's last name, once known.
    fn last_name(&self) -> Option<String>;

    /// The login identifier of the account, if the monitor has one.
    fn username(&self) -> Option<String>;
}

/// Who a monitor is checking in.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Identity {
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Shared, hot-swappable monitor state.
pub struct MonitorState {
    config: ArcSwap<MonitorConfig>,
    identity: ArcSwap<Identity>,
}

impl MonitorState {
    pub fn new(config: MonitorConfig, identity: Identity) -> Self {
        Self {
            config: ArcSwap::from_pointee(config),
            identity: ArcSwap::from_pointee(identity),
        }
    }

    /// State for an account monitor. Names are filled in after login.
    pub fn for_account(config: MonitorConfig, username: impl Into<String>) -> Self {
        Self::new(
            config,
            Identity {
                username: Some(username.into()),
                ..Default::default()
            },
        )
    }

    /// State for a reservation monitor, where the names are known upfront.
    pub fn for_reservation(
        config: MonitorConfig,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self::new(
            config,
            Identity {
                username: None,
                first_name: Some(first_name.into()),
                last_name: Some(last_name.into()),
            },
        )
    }

    /// Replaces the configuration, e.g. after a config reload.
    pub fn update_config(&self, config: MonitorConfig) {
        self.config.store(Arc::new(config));
    }

    /// Records the traveler's names once the account has been retrieved.
    pub fn set_names(&self, first_name: impl Into<String>, last_name: impl Into<String>) {
        let first_name = first_name.into();
        let last_name = last_name.into();
        self.identity.rcu(|current| Identity {
            first_name: Some(first_name.clone()),
            last_name: Some(last_name.clone()),
            ..(**current).clone()
        });
    }
}

/// Builds the state of every configured account and reservation monitor.
///
/// With neither configured, a single monitor with the global settings is
/// returned so global notification URLs can still be exercised.
pub fn states_from_config(config: &Config) -> Vec<MonitorState> {
    let accounts = config.accounts.iter().map(|account| {
        MonitorState::for_account(config.account_monitor_config(account), account.username.clone())
    });
    let reservations = config.reservations.iter().map(|reservation| {
        MonitorState::for_reservation(
            config.reservation_monitor_config(reservation),
            reservation.first_name.clone(),
            reservation.last_name.clone(),
        )
    });

    let states: Vec<MonitorState> = accounts.chain(reservations).collect();
    if states.is_empty() {
        return vec![MonitorState::new(config.global_monitor_config(), Identity::default())];
    }
    states
}

impl MonitorView for MonitorState {
    fn config(&self) -> Arc<MonitorConfig> {
        self.config.load_full()
    }

    fn first_name(&self) -> Option<String> {
        self.identity.load().first_name.clone()
    }

    fn last_name(&self) -> Option<String> {
        self.identity.load().last_name.clone()
    }

    fn username(&self) -> Option<String> {
        self.identity.load().username.clone()
    }
}
