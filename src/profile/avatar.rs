// SPDX-License-Identifier: MPL-2.0
//! Avatar preview loading and the avatar display slot.

use crate::error::Result;
use iced::widget::image;
use std::path::Path;

/// A decoded avatar image ready for display.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let handle = image::Handle::from_rgba(width, height, pixels);
        Self {
            handle,
            width,
            height,
        }
    }
}

/// The avatar display slot: either a decoded image or the placeholder shown
/// before any picture was chosen.
///
/// Modeling the slot as a tagged variant makes "overwrite the existing image"
/// and "replace the placeholder" the same reconciliation operation.
#[derive(Debug, Clone, Default)]
pub enum AvatarSlot {
    #[default]
    Placeholder,
    Image(ImageData),
}

impl AvatarSlot {
    /// Returns whether the slot still shows the placeholder.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        matches!(self, AvatarSlot::Placeholder)
    }

    /// Reconciles the slot with a freshly loaded preview.
    pub fn show(&mut self, data: ImageData) {
        *self = AvatarSlot::Image(data);
    }
}

/// Reads and decodes an avatar file into displayable RGBA data.
///
/// Animated GIFs decode to their first frame, which is all the preview needs.
///
/// # Errors
///
/// Returns [`crate::error::Error::Io`] if the file cannot be read and
/// [`crate::error::Error::Decode`] if the bytes are not a decodable image.
pub fn load_avatar<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    let bytes = std::fs::read(path.as_ref())?;
    let decoded = image_rs::load_from_memory(&bytes)?;

    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(ImageData::from_rgba(width, height, rgba.into_raw()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn slot_starts_as_placeholder() {
        let slot = AvatarSlot::default();
        assert!(slot.is_placeholder());
    }

    #[test]
    fn show_replaces_placeholder() {
        let mut slot = AvatarSlot::Placeholder;
        slot.show(ImageData::from_rgba(1, 1, vec![0, 0, 0, 255]));
        assert!(!slot.is_placeholder());
    }

    #[test]
    fn show_overwrites_previous_image() {
        let mut slot = AvatarSlot::Image(ImageData::from_rgba(1, 1, vec![0, 0, 0, 255]));
        slot.show(ImageData::from_rgba(2, 1, vec![255; 8]));
        match slot {
            AvatarSlot::Image(data) => assert_eq!((data.width, data.height), (2, 1)),
            AvatarSlot::Placeholder => panic!("expected image"),
        }
    }

    #[test]
    fn load_avatar_decodes_png() {
        let dir = tempdir().expect("Failed to create temporary directory");
        let path = dir.path().join("avatar.png");

        let pixels = image_rs::RgbaImage::from_pixel(4, 3, image_rs::Rgba([10, 20, 30, 255]));
        pixels.save(&path).expect("Failed to write test image");

        let data = load_avatar(&path).expect("Failed to load avatar");
        assert_eq!((data.width, data.height), (4, 3));
    }

    #[test]
    fn load_avatar_rejects_garbage_bytes() {
        let dir = tempdir().expect("Failed to create temporary directory");
        let path = dir.path().join("avatar.png");
        std::fs::write(&path, b"definitely not an image").expect("Failed to write file");

        match load_avatar(&path) {
            Err(Error::Decode(_)) => {}
            other => panic!("expected decode error, got {:?}", other.map(|d| d.width)),
        }
    }

    #[test]
    fn load_avatar_reports_missing_file() {
        match load_avatar("/nonexistent/avatar.png") {
            Err(Error::Io(_)) => {}
            other => panic!("expected io error, got {:?}", other.map(|d| d.width)),
        }
    }
}
