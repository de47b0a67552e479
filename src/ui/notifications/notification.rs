// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct, its `Kind` and lifecycle
//! `Phase`, used throughout the notification system.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// How long a notification stays visible before auto-dismissal kicks in.
pub const DISPLAY_DURATION: Duration = Duration::from_millis(5000);

/// How long a notification lingers in its closing phase before removal.
pub const CLOSING_DURATION: Duration = Duration::from_millis(300);

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Notification kind determines the icon glyph, default title, and accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Kind {
    Success,
    Error,
    #[default]
    Info,
    Warning,
}

impl Kind {
    /// Returns the accent color for this kind.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Kind::Success => palette::SUCCESS_500,
            Kind::Error => palette::ERROR_500,
            Kind::Info => palette::INFO_500,
            Kind::Warning => palette::WARNING_500,
        }
    }

    /// Returns the icon glyph for this kind.
    #[must_use]
    pub fn icon(&self) -> &'static str {
        match self {
            Kind::Success => crate::ui::icons::checkmark(),
            Kind::Error => crate::ui::icons::cross(),
            Kind::Info => crate::ui::icons::info(),
            Kind::Warning => crate::ui::icons::warning(),
        }
    }

    /// Returns the localization key of the default title for this kind.
    #[must_use]
    pub fn title_key(&self) -> &'static str {
        match self {
            Kind::Success => "toast-title-success",
            Kind::Error => "toast-title-error",
            Kind::Info => "toast-title-info",
            Kind::Warning => "toast-title-warning",
        }
    }
}

/// Message content: either a localization key resolved at render time, or
/// literal text handed over by the flash channel.
#[derive(Debug, Clone)]
pub enum Body {
    Key {
        key: String,
        args: Vec<(String, String)>,
    },
    Text(String),
}

/// Lifecycle phase of a rendered notification.
///
/// `Visible → Closing` happens on manual dismissal or once
/// [`DISPLAY_DURATION`] has elapsed, whichever comes first. A `Closing`
/// notification is removed after [`CLOSING_DURATION`]; the transition is
/// one-way and the closing clock is never reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Visible,
    Closing { since: Instant },
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Unique identifier for this notification.
    id: NotificationId,
    /// Kind (determines glyph, default title, and accent color).
    kind: Kind,
    /// Message content.
    body: Body,
    /// Explicit title overriding the kind default.
    title: Option<String>,
    /// When this notification was created.
    created_at: Instant,
    /// Current lifecycle phase.
    phase: Phase,
}

impl Notification {
    /// Creates a new notification with the given kind and message key.
    ///
    /// The `message_key` should be a valid localization key that will be
    /// resolved at render time.
    pub fn new(kind: Kind, message_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            kind,
            body: Body::Key {
                key: message_key.into(),
                args: Vec::new(),
            },
            title: None,
            created_at: Instant::now(),
            phase: Phase::Visible,
        }
    }

    /// Creates a success notification.
    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Kind::Success, message_key)
    }

    /// Creates an error notification.
    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Kind::Error, message_key)
    }

    /// Creates an info notification.
    pub fn info(message_key: impl Into<String>) -> Self {
        Self::new(Kind::Info, message_key)
    }

    /// Creates a warning notification.
    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Kind::Warning, message_key)
    }

    /// Creates a notification carrying literal text instead of a key.
    ///
    /// Used by the flash channel, where the message arrives pre-rendered.
    pub fn flash(kind: Kind, text: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            kind,
            body: Body::Text(text.into()),
            title: None,
            created_at: Instant::now(),
            phase: Phase::Visible,
        }
    }

    /// Adds an argument for message interpolation.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let Body::Key { args, .. } = &mut self.body {
            args.push((key.into(), value.into()));
        }
        self
    }

    /// Sets an explicit title, overriding the kind default.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Returns the notification's unique ID.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Returns the kind.
    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Returns the message content.
    #[must_use]
    pub fn body(&self) -> &Body {
        &self.body
    }

    /// Returns the explicit title override, if any.
    #[must_use]
    pub fn title_override(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns when this notification was created.
    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Returns the current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns whether this notification is in its closing phase.
    #[must_use]
    pub fn is_closing(&self) -> bool {
        matches!(self.phase, Phase::Closing { .. })
    }

    /// Enters the closing phase at `now`.
    ///
    /// Idempotent: a notification already closing keeps its original closing
    /// instant, so removal happens at most once and is never postponed.
    /// Returns whether the transition actually happened.
    pub fn begin_closing(&mut self, now: Instant) -> bool {
        match self.phase {
            Phase::Visible => {
                self.phase = Phase::Closing { since: now };
                true
            }
            Phase::Closing { .. } => false,
        }
    }

    /// Returns whether the auto-dismiss deadline has passed at `now`.
    ///
    /// Only `Visible` notifications auto-dismiss; a closing one already took
    /// the single dismissal path.
    #[must_use]
    pub fn should_begin_closing(&self, now: Instant) -> bool {
        self.phase == Phase::Visible
            && now.saturating_duration_since(self.created_at) >= DISPLAY_DURATION
    }

    /// Returns whether the closing phase has run its course at `now`.
    #[must_use]
    pub fn should_be_removed(&self, now: Instant) -> bool {
        match self.phase {
            Phase::Visible => false,
            Phase::Closing { since } => now.saturating_duration_since(since) >= CLOSING_DURATION,
        }
    }
}
