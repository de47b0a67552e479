// SPDX-License-Identifier: MPL-2.0
//! Glyph-based icons shared across the UI.
//!
//! Icons are plain text glyphs so they inherit the surrounding font and can
//! be tinted through the widget's color, which keeps them crisp at any scale.

use iced::widget::Text;

/// Checkmark, used for success toasts.
pub fn checkmark() -> &'static str {
    "✓"
}

/// Cross, used for error toasts and the dismiss button.
pub fn cross() -> &'static str {
    "✕"
}

/// Lowercase information symbol, used for info toasts.
pub fn info() -> &'static str {
    "ℹ"
}

/// Warning sign, used for warning toasts.
pub fn warning() -> &'static str {
    "⚠"
}

/// Bust silhouette, used for the avatar placeholder.
pub fn person() -> &'static str {
    "👤"
}

/// Builds a text widget rendering `glyph` at the given font size.
pub fn sized(glyph: &str, size: f32) -> Text<'_> {
    Text::new(glyph).size(size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyphs_are_non_empty() {
        for glyph in [checkmark(), cross(), info(), warning(), person()] {
            assert!(!glyph.is_empty());
        }
    }

    #[test]
    fn glyphs_are_distinct() {
        let glyphs = [checkmark(), cross(), info(), warning(), person()];
        for (i, a) in glyphs.iter().enumerate() {
            for b in glyphs.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
