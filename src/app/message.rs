// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::profile::ImageData;
use crate::ui::notifications;
use crate::ui::profile_pane;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    ProfilePane(profile_pane::Message),
    Notification(notifications::NotificationMessage),
    /// Result from the avatar picker dialog (`None` = cancelled).
    AvatarDialogResult(Option<PathBuf>),
    /// Result from asynchronously reading and decoding the selected file.
    AvatarLoaded {
        path: PathBuf,
        result: Result<ImageData, Error>,
    },
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    /// Periodic tick driving the notification timers.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional directory containing Fluent `.ftl` files for custom builds.
    pub i18n_dir: Option<String>,
    /// One-shot flash messages to surface as notifications on startup,
    /// in `[category:]text` form.
    pub flash: Vec<String>,
}
