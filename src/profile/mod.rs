// SPDX-License-Identifier: MPL-2.0
//! Profile-picture selection domain.
//!
//! This module owns everything between "the user picked a file" and "the
//! avatar preview is on screen": probing the selection, validating its format
//! and size, decoding it, and reconciling the avatar slot.

pub mod avatar;
pub mod selected_file;

pub use avatar::{load_avatar, AvatarSlot, ImageData};
pub use selected_file::{
    AvatarFormat, SelectedFile, ValidationError, AVATAR_EXTENSIONS, MAX_AVATAR_BYTES,
};
