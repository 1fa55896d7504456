//! Transient toast notifications.
//!
//! Toasts never queue: showing a new one replaces the visible message and
//! restarts the dismissal clock.

use std::time::{Duration, Instant};

/// How long a toast stays visible before it is dismissed.
pub const TOAST_VISIBLE: Duration = Duration::from_millis(2200);

pub struct Toast {
    message: String,
    shown_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            shown_at: Instant::now(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn expired(&self) -> bool {
        self.shown_at.elapsed() >= TOAST_VISIBLE
    }

    /// Time left before dismissal, used to schedule the next repaint.
    pub fn remaining(&self) -> Duration {
        TOAST_VISIBLE.saturating_sub(self.shown_at.elapsed())
    }

    #[cfg(test)]
    fn shown_at(message: impl Into<String>, shown_at: Instant) -> Self {
        Self {
            message: message.into(),
            shown_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_toast_is_visible_with_full_budget() {
        let toast = Toast::new("hello");
        assert!(!toast.expired());
        assert!(toast.remaining() <= TOAST_VISIBLE);
        assert!(toast.remaining() > TOAST_VISIBLE / 2);
    }

    #[test]
    fn old_toast_expires() {
        let toast = Toast::shown_at("old", Instant::now() - TOAST_VISIBLE * 2);
        assert!(toast.expired());
        assert_eq!(toast.remaining(), Duration::ZERO);
    }
}
