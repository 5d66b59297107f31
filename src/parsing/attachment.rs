//! Attachment markers.
//!
//! Media messages carry an inline token naming the exported file:
//!
//! ```text
//! [15/01/2024, 10:30:45] Ana: <attached: 00000012-PHOTO-2024-01-15-10-30-45.jpg>
//! ```
//!
//! The file name is the shortest run of characters up to the first `>`.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use crate::message::MessageType;

/// Pattern for an attachment marker.
pub const ATTACHMENT_PATTERN: &str = r"<attached: (.+?)>";

static ATTACHMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ATTACHMENT_PATTERN).unwrap());

/// File-name fragments that decide the media type, checked in order.
const KIND_FRAGMENTS: &[(&str, MessageType)] = &[
    ("-photo-", MessageType::Image),
    ("-audio-", MessageType::Audio),
    ("-sticker-", MessageType::Sticker),
];

/// Returns the file name of the first attachment marker in `content`.
pub fn find_attachment_name(content: &str) -> Option<&str> {
    ATTACHMENT_REGEX
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Removes the first attachment marker from `content`.
pub fn strip_attachment_marker(content: &str) -> Cow<'_, str> {
    ATTACHMENT_REGEX.replace(content, "")
}

/// Media type implied by a file name, if any.
///
/// Case-insensitive; `-photo-` wins over `-audio-`, which wins over
/// `-sticker-`.
pub fn media_kind(file_name: &str) -> Option<MessageType> {
    let lower = file_name.to_lowercase();
    KIND_FRAGMENTS
        .iter()
        .find(|(fragment, _)| lower.contains(fragment))
        .map(|(_, kind)| *kind)
}
