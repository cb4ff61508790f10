//! User-facing notifications
//!
//! The wizard reports outcomes as semantic events; rendering them (toast,
//! status line, stdout) is up to the front end.

use std::fmt;

pub const SAVED_MESSAGE: &str = "Progress saved! You can continue later.";
pub const SUBMITTED_MESSAGE: &str = "Welcome aboard! Setting up your dashboard...";
pub const SUBMIT_FAILED_MESSAGE: &str = "Something went wrong. Please try again.";
pub const RESTARTED_MESSAGE: &str = "Starting fresh onboarding process...";

/// Type of notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Error,
}

impl NotificationKind {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Success => "Success",
            Self::Error => "Error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Error, message)
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind.title(), self.message)
    }
}

/// Sink for notifications
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

impl<N: Notifier + ?Sized> Notifier for &mut N {
    fn notify(&mut self, notification: Notification) {
        (**self).notify(notification)
    }
}

/// Collects notifications in order
impl Notifier for Vec<Notification> {
    fn notify(&mut self, notification: Notification) {
        self.push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let n = Notification::error(SUBMIT_FAILED_MESSAGE);
        assert_eq!(n.to_string(), "[Error] Something went wrong. Please try again.");
    }

    #[test]
    fn test_vec_collects() {
        let mut sink: Vec<Notification> = Vec::new();
        sink.notify(Notification::info(SAVED_MESSAGE));
        (&mut sink).notify(Notification::success(SUBMITTED_MESSAGE));
        assert_eq!(sink.len(), 2);
        assert_eq!(sink[1].kind, NotificationKind::Success);
    }
}
