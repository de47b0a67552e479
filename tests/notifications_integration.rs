// SPDX-License-Identifier: MPL-2.0
//! Integration tests for the full notification lifecycle, driven through the
//! public manager API with explicit instants instead of real timers.

use iced_avatar::flash;
use iced_avatar::ui::notifications::{
    Body, Kind, Manager, Notification, CLOSING_DURATION, DISPLAY_DURATION,
};
use std::time::Duration;

#[test]
fn displayed_notification_runs_through_its_whole_lifecycle() {
    let mut manager = Manager::new();
    let notification = Notification::success("notification-save-success");
    let t0 = notification.created_at();
    manager.push(notification);

    let shown = manager.active().next().expect("notification is displayed");
    assert_eq!(shown.kind(), Kind::Success);
    assert_eq!(shown.kind().icon(), "✓");
    assert!(!shown.is_closing());

    // Auto-dismiss begins exactly at the display deadline
    manager.tick(t0 + DISPLAY_DURATION);
    assert!(manager.active().next().unwrap().is_closing());

    // The element survives the closing phase, then disappears for good
    manager.tick(t0 + DISPLAY_DURATION + CLOSING_DURATION - Duration::from_millis(1));
    assert_eq!(manager.active_count(), 1);
    manager.tick(t0 + DISPLAY_DURATION + CLOSING_DURATION);
    assert_eq!(manager.active_count(), 0);
}

#[test]
fn manual_close_wins_the_race_against_the_auto_timer() {
    let mut manager = Manager::new();
    let notification = Notification::info("test");
    let id = notification.id();
    let t0 = notification.created_at();
    manager.push(notification);

    // Close button clicked after one second
    manager.dismiss(id, t0 + Duration::from_secs(1));
    assert!(manager.active().next().unwrap().is_closing());

    // Removal 300ms later
    manager.tick(t0 + Duration::from_secs(1) + CLOSING_DURATION);
    assert_eq!(manager.active_count(), 0);

    // The auto-dismiss timer still firing afterwards must change nothing
    manager.dismiss(id, t0 + DISPLAY_DURATION);
    manager.tick(t0 + DISPLAY_DURATION);
    assert_eq!(manager.active_count(), 0);
}

#[test]
fn burst_of_displays_stacks_in_call_order() {
    let mut manager = Manager::new();
    let notifications: Vec<Notification> = (0..5)
        .map(|i| Notification::info(format!("message-{i}")))
        .collect();
    let expected: Vec<_> = notifications.iter().map(Notification::id).collect();

    for notification in notifications {
        manager.push(notification);
    }

    let order: Vec<_> = manager.active().map(Notification::id).collect();
    assert_eq!(order, expected);
    assert_eq!(manager.active_count(), 5);
}

#[test]
fn flash_messages_become_ordinary_notifications_in_document_order() {
    let mut manager = Manager::new();

    for message in flash::parse_flash_args(&["error:Bad login", "Welcome"]) {
        manager.push(Notification::flash(message.kind, message.text));
    }

    let kinds: Vec<_> = manager.active().map(|n| n.kind()).collect();
    assert_eq!(kinds, [Kind::Error, Kind::Info]);

    let texts: Vec<_> = manager
        .active()
        .map(|n| match n.body() {
            Body::Text(text) => text.clone(),
            Body::Key { .. } => panic!("flash notifications carry literal text"),
        })
        .collect();
    assert_eq!(texts, ["Bad login", "Welcome"]);

    // Flash notifications auto-dismiss like any other. Anchor the ticks on
    // the last creation instant so both deadlines have passed.
    let t_last = manager.active().last().unwrap().created_at();
    manager.tick(t_last + DISPLAY_DURATION);
    assert!(manager.active().all(|n| n.is_closing()));
    manager.tick(t_last + DISPLAY_DURATION + CLOSING_DURATION);
    assert_eq!(manager.active_count(), 0);
}

#[test]
fn overlapping_notifications_keep_independent_timers() {
    let mut manager = Manager::new();
    let first = Notification::warning("first");
    let second = Notification::success("second");
    let first_id = first.id();
    let t0 = first.created_at();
    let t1 = second.created_at();
    manager.push(first);
    manager.push(second);

    // First one dismissed manually right away; the second keeps running
    manager.dismiss(first_id, t0);
    manager.tick(t0 + CLOSING_DURATION);
    assert_eq!(manager.active_count(), 1);
    assert!(!manager.active().next().unwrap().is_closing());

    // The survivor still honors its own 5s deadline
    manager.tick(t1 + DISPLAY_DURATION);
    assert!(manager.active().next().unwrap().is_closing());
}
