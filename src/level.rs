//! Notification severity levels.
//!
//! Levels are ordered by severity so that a configured threshold can be
//! compared numerically against the level of each outgoing message.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The severity of a notification, in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "LevelRepr", into = "u8")]
#[repr(u8)]
pub enum NotificationLevel {
    /// Routine updates such as new flights or successful check-ins.
    #[default]
    Info = 1,
    /// Transient problems that the monitor will retry on its own.
    Notice = 2,
    /// Failures that need the traveler's attention.
    Error = 3,
}

/// Returned when a value cannot be interpreted as a [`NotificationLevel`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid notification level '{0}', expected 1-3 or one of info, notice, error")]
pub struct LevelParseError(pub String);

impl TryFrom<u8> for NotificationLevel {
    type Error = LevelParseError;

    fn try_from(value: u8) -> Result<Self, LevelParseError> {
        match value {
            1 => Ok(NotificationLevel::Info),
            2 => Ok(NotificationLevel::Notice),
            3 => Ok(NotificationLevel::Error),
            other => Err(LevelParseError(other.to_string())),
        }
    }
}

impl From<NotificationLevel> for u8 {
    fn from(level: NotificationLevel) -> Self {
        level as u8
    }
}

impl FromStr for NotificationLevel {
    type Err = LevelParseError;

    fn from_str(s: &str) -> Result<Self, LevelParseError> {
        let trimmed = s.trim();
        if let Ok(number) = trimmed.parse::<u8>() {
            return NotificationLevel::try_from(number);
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "info" => Ok(NotificationLevel::Info),
            "notice" => Ok(NotificationLevel::Notice),
            "error" => Ok(NotificationLevel::Error),
            _ => Err(LevelParseError(s.to_string())),
        }
    }
}

impl fmt::Display for NotificationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotificationLevel::Info => write!(f, "info"),
            NotificationLevel::Notice => write!(f, "notice"),
            NotificationLevel::Error => write!(f, "error"),
        }
    }
}

// Config files and env vars may spell a level as a number or a name.
#[derive(Deserialize)]
#[serde(untagged)]
enum LevelRepr {
    Number(u8),
    Name(String),
}

impl TryFrom<LevelRepr> for NotificationLevel {
    type Error = LevelParseError;

    fn try_from(repr: LevelRepr) -> Result<Self, LevelParseError> {
        match repr {
            LevelRepr::Number(n) => NotificationLevel::try_from(n),
            LevelRepr::Name(name) => name.parse(),
        }
    }
}
