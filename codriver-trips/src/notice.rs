//! User-facing failure notices.
//!
//! Failures are never retried. Whether one reaches the user depends only on
//! what started the call: work the user asked for produces a dismissable
//! notice, background work is logged and otherwise silent.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// What started an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trigger {
    /// Interval refresh, screen focus and the like.
    #[default]
    #[serde(alias = "auto")]
    Automatic,
    /// A tap, pull-to-refresh, or other explicit request.
    User,
}

/// A dismissable message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}

impl Trigger {
    /// Log a failure and, for user-started work, turn it into a notice.
    ///
    /// `action` names the operation for both the log line and the notice
    /// title, e.g. "Load trips".
    pub fn surface(&self, action: &str, error: &dyn fmt::Display) -> Option<Notice> {
        warn!(action, trigger = ?self, error = %error, "operation failed");
        match self {
            Trigger::Automatic => None,
            Trigger::User => Some(Notice::new(format!("{action} failed"), error.to_string())),
        }
    }
}
