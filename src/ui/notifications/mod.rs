// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! This module provides a non-intrusive notification system following
//! toast/snackbar UX patterns. Notifications appear temporarily to inform
//! users about actions (validation errors, load failures, flash messages)
//! without blocking interaction.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with kinds and lifecycle phases
//! - [`manager`] - `Manager` owning the stack and driving timers from ticks
//! - [`toast`] - Toast widget component for rendering notifications
//!
//! # Lifecycle
//!
//! Every notification moves through `visible → closing → removed`. The
//! closing phase starts on manual dismissal or 5 seconds after display,
//! whichever comes first, and lasts 300ms before the element disappears.
//! Both paths converge on the same dismissal operation, which is idempotent.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Manager, Notification};
//!
//! let mut manager = Manager::new();
//! manager.push(Notification::success("notification-save-success"));
//!
//! // In your view function, render toasts above the screen content
//! let toast_overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{
    Body, Kind, Notification, NotificationId, Phase, CLOSING_DURATION, DISPLAY_DURATION,
};
pub use toast::Toast;
