// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` is the single page-wide container for active notifications.
//! It preserves insertion order, drives the auto-dismiss and removal timers
//! from the periodic tick, and keeps dismissal idempotent.

use super::notification::{Notification, NotificationId};
use std::time::Instant;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID (the toast close button).
    Dismiss(NotificationId),
}

/// Owns every active notification, in the order they were displayed.
#[derive(Debug, Default)]
pub struct Manager {
    /// Active notifications, oldest first. Insertion order is call order.
    active: Vec<Notification>,
}

impl Manager {
    /// Creates a new empty notification manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Displays a new notification.
    ///
    /// The notification is appended after every currently active one, so
    /// stacking order always matches call order.
    pub fn push(&mut self, notification: Notification) {
        self.active.push(notification);
    }

    /// Dismisses a notification by its ID, at `now`.
    ///
    /// This is the single dismissal path shared by the close button and the
    /// auto-dismiss timer. It marks the notification as closing; actual
    /// removal happens from `tick` once the closing phase has elapsed.
    ///
    /// Idempotent: dismissing a notification that is already closing or
    /// already removed is a no-op and never reschedules the removal.
    /// Returns whether a visible notification actually entered closing.
    pub fn dismiss(&mut self, id: NotificationId, now: Instant) -> bool {
        self.active
            .iter_mut()
            .find(|n| n.id() == id)
            .is_some_and(|n| n.begin_closing(now))
    }

    /// Processes a tick at `now`: expired visible notifications enter the
    /// closing phase, and notifications whose closing phase has elapsed are
    /// removed for good.
    ///
    /// Should be called periodically (e.g., every 100ms) while notifications
    /// are active.
    pub fn tick(&mut self, now: Instant) {
        let expired: Vec<NotificationId> = self
            .active
            .iter()
            .filter(|n| n.should_begin_closing(now))
            .map(Notification::id)
            .collect();
        for id in expired {
            self.dismiss(id, now);
        }

        self.active.retain(|n| !n.should_be_removed(now));
    }

    /// Handles a notification message at `now`.
    pub fn handle_message(&mut self, message: &Message, now: Instant) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id, now);
            }
        }
    }

    /// Returns the active notifications in display order.
    pub fn active(&self) -> impl Iterator<Item = &Notification> {
        self.active.iter()
    }

    /// Returns the number of active notifications (visible or closing).
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Returns whether any notifications are active.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.active.is_empty()
    }

    /// Clears all notifications.
    pub fn clear(&mut self) {
        self.active.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::super::notification::{CLOSING_DURATION, DISPLAY_DURATION};
    use super::*;
    use std::time::Duration;

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert_eq!(manager.active_count(), 0);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn push_preserves_call_order() {
        let mut manager = Manager::new();
        let first = Notification::success("first");
        let second = Notification::error("second");
        let third = Notification::info("third");
        let expected = [first.id(), second.id(), third.id()];

        manager.push(first);
        manager.push(second);
        manager.push(third);

        let order: Vec<_> = manager.active().map(Notification::id).collect();
        assert_eq!(order, expected);
    }

    #[test]
    fn notification_auto_dismisses_then_disappears() {
        let mut manager = Manager::new();
        let notification = Notification::success("saved");
        let t0 = notification.created_at();
        manager.push(notification);

        // Just before the deadline nothing changes
        manager.tick(t0 + Duration::from_millis(4999));
        assert_eq!(manager.active_count(), 1);
        assert!(!manager.active().next().unwrap().is_closing());

        // At the deadline the notification enters closing but stays rendered
        manager.tick(t0 + DISPLAY_DURATION);
        assert_eq!(manager.active_count(), 1);
        assert!(manager.active().next().unwrap().is_closing());

        // After the closing phase it is removed entirely
        manager.tick(t0 + DISPLAY_DURATION + CLOSING_DURATION);
        assert_eq!(manager.active_count(), 0);
    }

    #[test]
    fn manual_dismiss_takes_effect_immediately() {
        let mut manager = Manager::new();
        let notification = Notification::info("test");
        let id = notification.id();
        let t0 = notification.created_at();
        manager.push(notification);

        assert!(manager.dismiss(id, t0 + Duration::from_secs(1)));
        assert!(manager.active().next().unwrap().is_closing());

        manager.tick(t0 + Duration::from_secs(1) + CLOSING_DURATION);
        assert_eq!(manager.active_count(), 0);
    }

    #[test]
    fn second_dismiss_is_a_no_op_and_keeps_the_closing_clock() {
        let mut manager = Manager::new();
        let notification = Notification::info("test");
        let id = notification.id();
        let t0 = notification.created_at();
        manager.push(notification);

        assert!(manager.dismiss(id, t0 + Duration::from_secs(1)));
        // A later dismissal (e.g. the auto-dismiss timer firing anyway)
        // must not push the removal deadline back.
        assert!(!manager.dismiss(id, t0 + Duration::from_secs(2)));

        manager.tick(t0 + Duration::from_secs(1) + CLOSING_DURATION);
        assert_eq!(manager.active_count(), 0);
    }

    #[test]
    fn dismissing_a_removed_notification_does_not_error() {
        let mut manager = Manager::new();
        let notification = Notification::info("test");
        let id = notification.id();
        let t0 = notification.created_at();
        manager.push(notification);

        manager.dismiss(id, t0);
        manager.tick(t0 + CLOSING_DURATION);
        assert_eq!(manager.active_count(), 0);

        // The stale auto-dismiss pass after the element is gone
        assert!(!manager.dismiss(id, t0 + DISPLAY_DURATION));
        manager.tick(t0 + DISPLAY_DURATION);
        assert_eq!(manager.active_count(), 0);
    }

    #[test]
    fn lifecycles_are_independent() {
        let mut manager = Manager::new();
        let first = Notification::info("first");
        let second = Notification::info("second");
        let first_id = first.id();
        let second_id = second.id();
        let t0 = first.created_at();
        manager.push(first);
        manager.push(second);

        manager.dismiss(first_id, t0 + Duration::from_secs(1));
        manager.tick(t0 + Duration::from_secs(1) + CLOSING_DURATION);

        let remaining: Vec<_> = manager.active().map(Notification::id).collect();
        assert_eq!(remaining, [second_id]);
        assert!(!manager.active().next().unwrap().is_closing());
    }

    #[test]
    fn handle_message_dismiss() {
        let mut manager = Manager::new();
        let notification = Notification::success("test");
        let id = notification.id();
        let t0 = notification.created_at();
        manager.push(notification);

        manager.handle_message(&Message::Dismiss(id), t0);
        assert!(manager.active().next().unwrap().is_closing());
    }

    #[test]
    fn clear_removes_all() {
        let mut manager = Manager::new();
        for i in 0..5 {
            manager.push(Notification::success(format!("test-{i}")));
        }

        manager.clear();
        assert_eq!(manager.active_count(), 0);
    }
}
