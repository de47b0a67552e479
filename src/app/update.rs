// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application.
//!
//! Every mutation of application state happens here, keyed by the top-level
//! [`Message`]. File selection goes through one path regardless of whether it
//! came from the picker dialog or a window drop: probe, validate, then load
//! asynchronously.

use super::Message;
use crate::error::Error;
use crate::profile::{self, AvatarSlot, ImageData, SelectedFile};
use crate::ui::notifications::{self, Notification};
use crate::ui::profile_pane;
use iced::Task;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Mutable views into the `App` fields an update pass may touch.
pub struct UpdateContext<'a> {
    pub avatar: &'a mut AvatarSlot,
    pub selected_path: &'a mut Option<PathBuf>,
    pub last_open_directory: &'a mut Option<PathBuf>,
    pub notifications: &'a mut notifications::Manager,
}

/// Dispatches a top-level message.
pub fn update(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::ProfilePane(profile_pane::Message::ChoosePicture) => {
            handle_open_avatar_dialog(ctx.last_open_directory.clone())
        }
        Message::AvatarDialogResult(selection) => handle_avatar_selected(ctx, selection),
        Message::FileDropped(path) => handle_avatar_selected(ctx, Some(path)),
        Message::AvatarLoaded { path, result } => handle_avatar_loaded(ctx, path, result),
        Message::Notification(notification_message) => {
            ctx.notifications
                .handle_message(&notification_message, Instant::now());
            Task::none()
        }
        Message::Tick(now) => {
            ctx.notifications.tick(now);
            Task::none()
        }
    }
}

/// Opens the avatar picker dialog, starting from the last used directory.
pub fn handle_open_avatar_dialog(last_directory: Option<PathBuf>) -> Task<Message> {
    Task::perform(
        async move {
            let mut dialog =
                rfd::AsyncFileDialog::new().add_filter("Images", profile::AVATAR_EXTENSIONS);

            if let Some(dir) = last_directory {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            dialog.pick_file().await.map(|h| h.path().to_path_buf())
        },
        Message::AvatarDialogResult,
    )
}

/// Handles a selected file, whether picked or dropped.
///
/// A cancelled dialog is a no-op. A selection that fails probing or
/// validation produces exactly one error notification, clears the pending
/// selection, and never touches the avatar slot.
pub fn handle_avatar_selected(
    ctx: &mut UpdateContext<'_>,
    selection: Option<PathBuf>,
) -> Task<Message> {
    let Some(path) = selection else {
        // User cancelled the dialog
        return Task::none();
    };

    let selected = match SelectedFile::probe(&path) {
        Ok(selected) => selected,
        Err(_) => {
            ctx.notifications.push(
                Notification::error("notification-avatar-read-error")
                    .with_arg("filename", file_name_of(&path)),
            );
            *ctx.selected_path = None;
            return Task::none();
        }
    };

    match selected.validate() {
        Ok(_) => load_avatar_task(path),
        Err(error) => {
            ctx.notifications
                .push(Notification::error(error.message_key()));
            *ctx.selected_path = None;
            Task::none()
        }
    }
}

/// Reads and decodes the validated file off the update loop.
fn load_avatar_task(path: PathBuf) -> Task<Message> {
    let path_for_message = path.clone();
    Task::perform(
        async move { profile::load_avatar(&path) },
        move |result| Message::AvatarLoaded {
            path: path_for_message.clone(),
            result,
        },
    )
}

/// Applies the outcome of the asynchronous read.
///
/// Success reconciles the avatar slot (the single preview mutation) and
/// remembers the selection; failure surfaces one error notification and
/// clears the selection instead of leaving the preview silently stuck.
pub fn handle_avatar_loaded(
    ctx: &mut UpdateContext<'_>,
    path: PathBuf,
    result: Result<ImageData, Error>,
) -> Task<Message> {
    match result {
        Ok(data) => {
            ctx.avatar.show(data);
            *ctx.last_open_directory = path.parent().map(Path::to_path_buf);
            *ctx.selected_path = Some(path);
        }
        Err(_) => {
            ctx.notifications.push(
                Notification::error("notification-avatar-read-error")
                    .with_arg("filename", file_name_of(&path)),
            );
            *ctx.selected_path = None;
        }
    }
    Task::none()
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
