// SPDX-License-Identifier: MPL-2.0
//! Flash messages handed over by the launcher.
//!
//! A web backend renders one-shot status messages into the page it serves;
//! the desktop equivalent is the launcher passing them on the command line:
//! repeated `--flash [category:]text` options. This module is purely an
//! input adapter: every parsed message is replayed through the regular
//! notification display path at startup, with no code path of its own.

use crate::ui::notifications::Kind;

/// A launcher-provided one-shot message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashMessage {
    pub kind: Kind,
    pub text: String,
}

/// Maps a recognized category prefix to a notification kind.
fn category_kind(category: &str) -> Option<Kind> {
    if category.eq_ignore_ascii_case("success") {
        Some(Kind::Success)
    } else if category.eq_ignore_ascii_case("error") {
        Some(Kind::Error)
    } else if category.eq_ignore_ascii_case("info") {
        Some(Kind::Info)
    } else if category.eq_ignore_ascii_case("warning") {
        Some(Kind::Warning)
    } else {
        None
    }
}

/// Parses a single `--flash` value.
///
/// The part before the first `:` is treated as a category when it names one;
/// otherwise the whole value is the message text with the `Info` default.
/// The text is trimmed; a message that is empty after trimming yields `None`.
pub fn parse_flash_arg(raw: &str) -> Option<FlashMessage> {
    let (kind, text) = match raw.split_once(':') {
        Some((prefix, rest)) => match category_kind(prefix.trim()) {
            Some(kind) => (kind, rest),
            None => (Kind::Info, raw),
        },
        None => (Kind::Info, raw),
    };

    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    Some(FlashMessage {
        kind,
        text: text.to_string(),
    })
}

/// Parses every `--flash` value, preserving argument order.
pub fn parse_flash_args<S: AsRef<str>>(raw: &[S]) -> Vec<FlashMessage> {
    raw.iter()
        .filter_map(|value| parse_flash_arg(value.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categorized_message_parses_kind_and_text() {
        let message = parse_flash_arg("error:Bad login").unwrap();
        assert_eq!(message.kind, Kind::Error);
        assert_eq!(message.text, "Bad login");
    }

    #[test]
    fn uncategorized_message_defaults_to_info() {
        let message = parse_flash_arg("Welcome").unwrap();
        assert_eq!(message.kind, Kind::Info);
        assert_eq!(message.text, "Welcome");
    }

    #[test]
    fn unrecognized_category_keeps_whole_text_as_info() {
        let message = parse_flash_arg("danger:scary things").unwrap();
        assert_eq!(message.kind, Kind::Info);
        assert_eq!(message.text, "danger:scary things");
    }

    #[test]
    fn category_matching_is_case_insensitive() {
        let message = parse_flash_arg("Warning: disk almost full").unwrap();
        assert_eq!(message.kind, Kind::Warning);
        assert_eq!(message.text, "disk almost full");
    }

    #[test]
    fn text_is_trimmed() {
        let message = parse_flash_arg("success:  Saved!  ").unwrap();
        assert_eq!(message.text, "Saved!");
    }

    #[test]
    fn blank_messages_are_skipped() {
        assert_eq!(parse_flash_arg(""), None);
        assert_eq!(parse_flash_arg("   "), None);
        assert_eq!(parse_flash_arg("info:   "), None);
    }

    #[test]
    fn argument_order_is_preserved() {
        let messages = parse_flash_args(&["error:Bad login", "Welcome"]);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].kind, Kind::Error);
        assert_eq!(messages[0].text, "Bad login");
        assert_eq!(messages[1].kind, Kind::Info);
        assert_eq!(messages[1].text, "Welcome");
    }
}
