//! Transient user notifications
//!
//! Snackbar semantics: showing a new notification replaces the one
//! currently on screen, so at most one is visible at a time.

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Error,
}

/// One transient message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: Level,
    pub message: String,
}

/// Single-slot notification holder owned by each view
#[derive(Debug, Clone, Default)]
pub struct Notifier {
    current: Option<Notification>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show an informational notification
    pub fn info(&mut self, message: impl Into<String>) {
        self.show(Level::Info, message);
    }

    /// Show an error notification
    pub fn error(&mut self, message: impl Into<String>) {
        self.show(Level::Error, message);
    }

    fn show(&mut self, level: Level, message: impl Into<String>) {
        self.current = Some(Notification {
            level,
            message: message.into(),
        });
    }

    /// The notification currently on screen, if any
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Clear the current notification
    pub fn dismiss(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_new_notification_replaces_the_current_one() {
        let mut notifier = Notifier::new();
        assert!(notifier.current().is_none());

        notifier.info("primero");
        notifier.error("segundo");

        let current = notifier.current().unwrap();
        assert_eq!(current.level, Level::Error);
        assert_eq!(current.message, "segundo");

        notifier.dismiss();
        assert!(notifier.current().is_none());
    }
}
