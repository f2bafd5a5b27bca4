use std::time::{Duration, Instant};

use super::Notice;
use crate::error::Error;

pub(crate) const ALERT_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AlertKind {
    Success,
    Error,
}

/// Transient banner message.
#[derive(Debug, Clone)]
pub(crate) struct Alert {
    pub(crate) message: String,
    pub(crate) kind: AlertKind,
    raised_at: Instant,
}

impl Alert {
    pub(crate) fn new(message: impl Into<String>, kind: AlertKind, now: Instant) -> Self {
        Self {
            message: message.into(),
            kind,
            raised_at: now,
        }
    }

    pub(crate) fn success(message: impl Into<String>) -> Self {
        Self::new(message, AlertKind::Success, Instant::now())
    }

    pub(crate) fn error(message: impl Into<String>) -> Self {
        Self::new(message, AlertKind::Error, Instant::now())
    }

    pub(crate) fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.raised_at) >= ALERT_TTL
    }
}

impl From<&Notice> for Alert {
    fn from(notice: &Notice) -> Self {
        Self::success(notice.message())
    }
}

impl From<&Error> for Alert {
    fn from(err: &Error) -> Self {
        Self::error(err.to_string())
    }
}
