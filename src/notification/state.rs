use std::time::{Duration, Instant};

const DEFAULT_DURATION: Duration = Duration::from_millis(2500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    shown_at: Instant,
    duration: Duration,
}

impl Notification {
    fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.shown_at) >= self.duration
    }
}

#[derive(Debug, Default)]
pub struct NotificationState {
    current: Option<Notification>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, message: &str) {
        self.show_kind(message, NotificationKind::Info);
    }

    pub fn show_error(&mut self, message: &str) {
        self.show_kind(message, NotificationKind::Error);
    }

    fn show_kind(&mut self, message: &str, kind: NotificationKind) {
        self.current = Some(Notification {
            message: message.to_string(),
            kind,
            shown_at: Instant::now(),
            duration: DEFAULT_DURATION,
        });
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Drop the notification once it has been on screen long enough
    pub fn clear_if_expired(&mut self) {
        self.clear_if_expired_at(Instant::now());
    }

    fn clear_if_expired_at(&mut self, now: Instant) {
        if self.current.as_ref().is_some_and(|n| n.is_expired(now)) {
            self.current = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_replaces_previous() {
        let mut state = NotificationState::new();
        state.show("first");
        state.show_error("second");

        let current = state.current().unwrap();
        assert_eq!(current.message, "second");
        assert_eq!(current.kind, NotificationKind::Error);
    }

    #[test]
    fn test_expiry() {
        let mut state = NotificationState::new();
        state.show("saved");

        let shown_at = state.current().unwrap().shown_at;
        state.clear_if_expired_at(shown_at + Duration::from_millis(100));
        assert!(state.current().is_some());

        state.clear_if_expired_at(shown_at + DEFAULT_DURATION);
        assert!(state.current().is_none());
    }
}
