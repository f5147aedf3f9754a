//! Notification collaborator

use std::fmt;

/// How a notification should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// An operation completed
    Success,
    /// Neutral information
    Info,
    /// Something was skipped or partially applied
    Warning,
    /// An operation failed
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let as_str = match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        };
        write!(f, "{as_str}")
    }
}

/// A recorded notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Message text
    pub message: String,
    /// Presentation severity
    pub severity: Severity,
}

/// Receives user-facing messages from the tracker
pub trait Notifier {
    /// Deliver a message
    fn notify(&mut self, message: &str, severity: Severity);
}

/// Collects notifications in order (handy for tests and batch callers)
impl Notifier for Vec<Notification> {
    fn notify(&mut self, message: &str, severity: Severity) {
        self.push(Notification {
            message: message.to_string(),
            severity,
        });
    }
}

/// Routes notifications to the crate logger
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, message: &str, severity: Severity) {
        match severity {
            Severity::Error => crate::error!("{message}"),
            Severity::Warning => crate::warn!("{message}"),
            Severity::Success | Severity::Info => crate::info!("{message}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_notifier_records_in_order() {
        let mut sink: Vec<Notification> = Vec::new();
        sink.notify("saved", Severity::Success);
        sink.notify("failed", Severity::Error);
        assert_eq!(sink.len(), 2);
        assert_eq!(sink[1].severity, Severity::Error);
        assert_eq!(sink[0].message, "saved");
    }

    #[test]
    fn test_log_notifier_does_not_panic() {
        let mut notifier = LogNotifier;
        notifier.notify("hello", Severity::Info);
        notifier.notify("careful", Severity::Warning);
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Warning.to_string(), "warning");
    }
}
