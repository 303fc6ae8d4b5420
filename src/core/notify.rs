use std::time::Duration;

use bevy::time::{Timer, TimerMode};

/// Single transient notification. A new message replaces the old one and
/// restarts the countdown.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotifySlot {
    message: Option<String>,
    timer: Timer,
}

impl NotifySlot {
    pub fn show(&mut self, message: impl Into<String>, duration: Duration) {
        self.message = Some(message.into());
        self.timer = Timer::new(duration, TimerMode::Once);
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Returns true when the message expired during this step.
    pub fn advance(&mut self, delta: Duration) -> bool {
        if self.message.is_none() {
            return false;
        }
        if self.timer.tick(delta).just_finished() {
            self.message = None;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::NotifySlot;

    #[test]
    fn message_expires_after_its_duration() {
        let mut slot = NotifySlot::default();
        slot.show("hello", Duration::from_secs(3));

        assert!(!slot.advance(Duration::from_secs(2)));
        assert_eq!(slot.message(), Some("hello"));
        assert!(slot.advance(Duration::from_secs(1)));
        assert_eq!(slot.message(), None);
        assert!(!slot.advance(Duration::from_secs(1)));
    }

    #[test]
    fn replacing_the_message_restarts_the_countdown() {
        let mut slot = NotifySlot::default();
        slot.show("first", Duration::from_secs(3));
        slot.advance(Duration::from_secs(2));
        slot.show("second", Duration::from_secs(3));

        assert!(!slot.advance(Duration::from_secs(2)));
        assert_eq!(slot.message(), Some("second"));
    }
}
