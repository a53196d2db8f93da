//! Outbound notifications.
//!
//! The wizard announces a successful booking through a [`Notifier`] and does
//! not care what happens next. The terminal front end shows toasts, the
//! headless commands collect and print them, tests keep them in a `Vec`.

use std::collections::VecDeque;
use std::time::{Duration, Instant};
use tracing::info;

/// Title of the booking confirmation notification.
pub const BOOKING_SUCCESS_TITLE: &str = "Booking Successful!";

/// Maximum number of toasts kept on screen at once.
pub const TOAST_LIMIT: usize = 3;

/// A single structured message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub body: String,
}

impl Notification {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// The confirmation sent after a successful submit.
    pub fn booking_confirmed(body: impl Into<String>) -> Self {
        Self::new(BOOKING_SUCCESS_TITLE, body)
    }
}

/// Fire-and-forget sink for notifications.
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

impl Notifier for Vec<Notification> {
    fn notify(&mut self, notification: Notification) {
        self.push(notification);
    }
}

impl<N: Notifier + ?Sized> Notifier for &mut N {
    fn notify(&mut self, notification: Notification) {
        (**self).notify(notification);
    }
}

/// Notifier that only records the message in the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, notification: Notification) {
        info!(title = %notification.title, body = %notification.body, "notification");
    }
}

/// A notification with the moment it was raised.
#[derive(Debug, Clone)]
pub struct Toast {
    pub notification: Notification,
    pub raised_at: Instant,
}

/// Short-lived on-screen notifications for the terminal front end.
#[derive(Debug, Clone)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    ttl: Duration,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(Duration::from_secs(5))
    }
}

impl ToastQueue {
    pub fn new(ttl: Duration) -> Self {
        Self {
            toasts: VecDeque::with_capacity(TOAST_LIMIT),
            ttl,
        }
    }

    /// Newest toast, if any.
    pub fn latest(&self) -> Option<&Toast> {
        self.toasts.back()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Drop the newest toast.
    pub fn dismiss(&mut self) {
        self.toasts.pop_back();
    }

    /// Drop every toast older than the time-to-live as of `now`.
    pub fn expire(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.toasts
            .retain(|toast| now.saturating_duration_since(toast.raised_at) < ttl);
    }

    fn push_at(&mut self, notification: Notification, raised_at: Instant) {
        if self.toasts.len() == TOAST_LIMIT {
            self.toasts.pop_front();
        }
        self.toasts.push_back(Toast {
            notification,
            raised_at,
        });
    }
}

impl Notifier for ToastQueue {
    fn notify(&mut self, notification: Notification) {
        info!(title = %notification.title, "toast raised");
        self.push_at(notification, Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_collects_notifications() {
        let mut sink: Vec<Notification> = Vec::new();
        sink.notify(Notification::booking_confirmed("Cut with Alex on Friday at 10:00 AM."));
        assert_eq!(sink.len(), 1);
        assert_eq!(sink[0].title, "Booking Successful!");
    }

    #[test]
    fn test_toast_queue_keeps_newest_within_limit() {
        let mut queue = ToastQueue::default();
        for i in 0..5 {
            queue.notify(Notification::new("t", format!("body {i}")));
        }
        assert_eq!(queue.len(), TOAST_LIMIT);
        assert_eq!(queue.latest().map(|t| t.notification.body.as_str()), Some("body 4"));
    }

    #[test]
    fn test_toast_queue_expiry() {
        let mut queue = ToastQueue::new(Duration::from_secs(5));
        let start = Instant::now();
        queue.push_at(Notification::new("old", ""), start);
        queue.push_at(Notification::new("new", ""), start + Duration::from_secs(4));

        queue.expire(start + Duration::from_secs(6));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.latest().map(|t| t.notification.title.as_str()), Some("new"));

        queue.expire(start + Duration::from_secs(10));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_dismiss() {
        let mut queue = ToastQueue::default();
        queue.notify(Notification::new("a", ""));
        queue.dismiss();
        assert!(queue.latest().is_none());
        queue.dismiss();
    }
}
