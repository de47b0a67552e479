// SPDX-License-Identifier: MPL-2.0
//! Probing and validation of a user-selected profile picture.

use crate::error::Result;
use std::path::{Path, PathBuf};

/// Maximum accepted avatar file size: 16 MiB.
pub const MAX_AVATAR_BYTES: u64 = 16 * 1024 * 1024;

/// File extensions offered in the picker dialog.
pub const AVATAR_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif"];

/// Image formats accepted for profile pictures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvatarFormat {
    Png,
    Jpeg,
    Gif,
}

impl AvatarFormat {
    /// Matches a file extension, case-insensitively. Both `jpg` and `jpeg`
    /// map to JPEG.
    #[must_use]
    pub fn from_extension(extension: &str) -> Option<Self> {
        if extension.eq_ignore_ascii_case("png") {
            Some(AvatarFormat::Png)
        } else if extension.eq_ignore_ascii_case("jpg") || extension.eq_ignore_ascii_case("jpeg") {
            Some(AvatarFormat::Jpeg)
        } else if extension.eq_ignore_ascii_case("gif") {
            Some(AvatarFormat::Gif)
        } else {
            None
        }
    }

    /// Derives the format from a path's extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    /// Returns the canonical MIME type.
    #[must_use]
    pub fn mime_type(self) -> &'static str {
        match self {
            AvatarFormat::Png => "image/png",
            AvatarFormat::Jpeg => "image/jpeg",
            AvatarFormat::Gif => "image/gif",
        }
    }
}

/// Why a selection was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// The file is not one of the accepted image formats.
    UnsupportedType,
    /// The file exceeds [`MAX_AVATAR_BYTES`].
    TooLarge,
}

impl ValidationError {
    /// Returns the localization key of the user-facing error message.
    #[must_use]
    pub fn message_key(self) -> &'static str {
        match self {
            ValidationError::UnsupportedType => "notification-avatar-invalid-type",
            ValidationError::TooLarge => "notification-avatar-too-large",
        }
    }
}

/// A probed selection: the picked path plus the attributes validation needs.
///
/// Ephemeral by design. A `SelectedFile` lives for one validation pass and is
/// not stored once the preview either loaded or got rejected.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    path: PathBuf,
    format: Option<AvatarFormat>,
    size_bytes: u64,
}

impl SelectedFile {
    /// Builds a selection from a path and a known size.
    #[must_use]
    pub fn new(path: PathBuf, size_bytes: u64) -> Self {
        let format = AvatarFormat::from_path(&path);
        Self {
            path,
            format,
            size_bytes,
        }
    }

    /// Probes a path on disk, reading its size from filesystem metadata.
    ///
    /// # Errors
    ///
    /// Returns an error if the file's metadata cannot be read (e.g. the file
    /// vanished between selection and probing).
    pub fn probe(path: &Path) -> Result<Self> {
        let metadata = std::fs::metadata(path)?;
        Ok(Self::new(path.to_path_buf(), metadata.len()))
    }

    /// Returns the selected path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the detected format, if the extension matched an accepted one.
    #[must_use]
    pub fn format(&self) -> Option<AvatarFormat> {
        self.format
    }

    /// Returns the file size in bytes.
    #[must_use]
    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    /// Returns the file name for use in user-facing messages.
    #[must_use]
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Validates the selection: format first, then size.
    ///
    /// # Errors
    ///
    /// Returns the first failed check, mirroring the order the checks are
    /// presented to the user.
    pub fn validate(&self) -> std::result::Result<AvatarFormat, ValidationError> {
        let Some(format) = self.format else {
            return Err(ValidationError::UnsupportedType);
        };
        if self.size_bytes > MAX_AVATAR_BYTES {
            return Err(ValidationError::TooLarge);
        }
        Ok(format)
    }
}
