//! User-facing notifications and the sink they are delivered to
//!
//! The editor never reaches for a global dispatcher; every session owns a
//! `NotificationSink` supplied by its caller.

use std::collections::VecDeque;
use std::fmt;
use std::time::Duration;

use crate::io::configuration::{MAX_VISIBLE_NOTIFICATIONS, NOTIFICATION_DEFAULT_DURATION_MS};

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    /// An operation completed
    Success,
    /// An operation was rejected or failed
    Error,
    /// Neutral status information
    Info,
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        })
    }
}

/// Message emitted by the editor for presentation to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Severity
    pub kind: NotificationKind,
    /// Message text
    pub message: String,
    /// Requested display time; `None` uses the default, zero means sticky
    pub duration: Option<Duration>,
}

impl Notification {
    /// Create a notification with the default display time
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            duration: None,
        }
    }

    /// Create a success notification
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, message)
    }

    /// Create an error notification
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Error, message)
    }

    /// Create an info notification
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Info, message)
    }

    /// Override the display time
    #[must_use]
    pub const fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// How long the notification stays visible; `None` when it never expires
    pub const fn display_duration(&self) -> Option<Duration> {
        match self.duration {
            Some(duration) if duration.is_zero() => None,
            Some(duration) => Some(duration),
            None => Some(Duration::from_millis(NOTIFICATION_DEFAULT_DURATION_MS)),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}

/// Receiver for editor notifications
pub trait NotificationSink {
    /// Deliver one notification
    fn notify(&mut self, notification: Notification);
}

impl NotificationSink for Vec<Notification> {
    fn notify(&mut self, notification: Notification) {
        self.push(notification);
    }
}

/// Bounded notification list, newest first
///
/// Keeps at most `MAX_VISIBLE_NOTIFICATIONS` entries; older ones fall off.
#[derive(Debug, Clone, Default)]
pub struct NotificationLog {
    entries: VecDeque<Notification>,
}

impl NotificationLog {
    /// Create an empty log
    pub const fn new() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }

    /// Visible notifications, newest first
    pub fn entries(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter()
    }

    /// Most recent notification
    pub fn latest(&self) -> Option<&Notification> {
        self.entries.front()
    }

    /// Number of visible notifications
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is visible
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Dismiss everything
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl NotificationSink for NotificationLog {
    fn notify(&mut self, notification: Notification) {
        self.entries.push_front(notification);
        self.entries.truncate(MAX_VISIBLE_NOTIFICATIONS);
    }
}

/// Forwards notifications to the `log` facade
///
/// Errors are logged at `warn`, everything else at `info`. Errors are also
/// counted, and the latest kept, so command-line callers can report them.
#[derive(Debug, Default)]
pub struct LogSink {
    errors: usize,
    last_error: Option<String>,
}

impl LogSink {
    /// Create a sink with no errors recorded
    pub const fn new() -> Self {
        Self {
            errors: 0,
            last_error: None,
        }
    }

    /// Number of error notifications delivered so far
    pub const fn error_count(&self) -> usize {
        self.errors
    }

    /// Message of the most recent error notification
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

impl NotificationSink for LogSink {
    fn notify(&mut self, notification: Notification) {
        match notification.kind {
            NotificationKind::Error => {
                self.errors += 1;
                log::warn!("{}", notification.message);
                self.last_error = Some(notification.message);
            }
            NotificationKind::Success | NotificationKind::Info => {
                log::info!("{}", notification.message);
            }
        }
    }
}
