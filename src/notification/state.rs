use std::time::{Duration, Instant};

const DEFAULT_DURATION: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    shown_at: Instant,
}

#[derive(Debug, Default)]
pub struct NotificationState {
    current: Option<Notification>,
    duration: Option<Duration>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notification state with a custom display duration
    pub fn with_duration(duration: Duration) -> Self {
        Self {
            current: None,
            duration: Some(duration),
        }
    }

    pub fn show(&mut self, message: &str) {
        self.current = Some(Notification {
            message: message.to_string(),
            shown_at: Instant::now(),
        });
    }

    /// The live notification, dropping it once it has expired
    pub fn current(&mut self) -> Option<&Notification> {
        let duration = self.duration.unwrap_or(DEFAULT_DURATION);
        if self
            .current
            .as_ref()
            .is_some_and(|n| n.shown_at.elapsed() >= duration)
        {
            self.current = None;
        }
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_no_notification() {
        let mut state = NotificationState::new();
        assert!(state.current().is_none());
    }

    #[test]
    fn test_show_sets_message() {
        let mut state = NotificationState::new();
        state.show("Copied username!");
        assert_eq!(state.current().unwrap().message, "Copied username!");
    }

    #[test]
    fn test_show_replaces_previous() {
        let mut state = NotificationState::new();
        state.show("first");
        state.show("second");
        assert_eq!(state.current().unwrap().message, "second");
    }

    #[test]
    fn test_notification_expires() {
        let mut state = NotificationState::with_duration(Duration::ZERO);
        state.show("gone");
        assert!(state.current().is_none());
    }
}
