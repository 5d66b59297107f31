//! Parsed chat messages.
//!
//! A [`Message`] is one recognized line of the chat log: the date and time
//! exactly as written, the sender, the content, a [`MessageType`], and the
//! resolved attachment when the content references an uploaded media file.
//!
//! # Example
//!
//! ```
//! use wachat::{Message, MessageType};
//!
//! let msg = Message::new("15/01/2024", "10:30:45", "Ana", "<attached: IMG-photo-0001.jpg>");
//! assert_eq!(msg.kind, MessageType::Text);
//! assert_eq!(msg.attachment_name(), Some("IMG-photo-0001.jpg"));
//! assert_eq!(msg.display_content(), "");
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::media::MediaHandle;
use crate::parsing::attachment::{find_attachment_name, strip_attachment_marker};

/// Format of the date and time captured from a message header.
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// What kind of message a line carries.
///
/// The variants are mutually exclusive. Serialized in lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    /// Plain text written by a participant
    #[default]
    Text,
    /// Photo attachment
    Image,
    /// Voice note or audio file
    Audio,
    /// Sticker
    Sticker,
    /// Platform notice (encryption banner, group created, ...)
    System,
}

impl MessageType {
    /// Lowercase name, as used in serialized output.
    pub fn as_str(self) -> &'static str {
        match self {
            MessageType::Text => "text",
            MessageType::Image => "image",
            MessageType::Audio => "audio",
            MessageType::Sticker => "sticker",
            MessageType::System => "system",
        }
    }

    /// Returns all variants.
    pub fn all() -> &'static [MessageType] {
        &[
            MessageType::Text,
            MessageType::Image,
            MessageType::Audio,
            MessageType::Sticker,
            MessageType::System,
        ]
    }

    /// Returns `true` for the attachment-backed kinds.
    pub fn is_media(self) -> bool {
        matches!(
            self,
            MessageType::Image | MessageType::Audio | MessageType::Sticker
        )
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(MessageType::Text),
            "image" => Ok(MessageType::Image),
            "audio" => Ok(MessageType::Audio),
            "sticker" => Ok(MessageType::Sticker),
            "system" => Ok(MessageType::System),
            _ => Err(format!(
                "Unknown message type: '{}'. Expected one of: text, image, audio, sticker, system",
                s
            )),
        }
    }
}

/// One message of a chat export.
///
/// | Field | Description |
/// |-------|-------------|
/// | `date` | `DD/MM/YYYY`, verbatim |
/// | `time` | `HH:MM:SS`, verbatim |
/// | `sender` | trimmed; not meaningful for system notices |
/// | `content` | trimmed, attachment marker kept |
/// | `kind` | see [`MessageType`] |
/// | `attachment` | set only when the marker's file was uploaded |
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    /// Date as written in the log (`DD/MM/YYYY`).
    pub date: String,

    /// Time as written in the log (`HH:MM:SS`).
    pub time: String,

    /// Display name of the author.
    pub sender: String,

    /// Message text, including any `<attached: ...>` marker.
    pub content: String,

    /// Message type.
    #[serde(rename = "type")]
    pub kind: MessageType,

    /// Resolved media file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<MediaHandle>,
}

impl Message {
    /// Creates a text message without attachment.
    pub fn new(
        date: impl Into<String>,
        time: impl Into<String>,
        sender: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
            sender: sender.into(),
            content: content.into(),
            kind: MessageType::Text,
            attachment: None,
        }
    }

    /// Sets the message type.
    #[must_use]
    pub fn with_kind(mut self, kind: MessageType) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the resolved attachment.
    #[must_use]
    pub fn with_attachment(mut self, handle: MediaHandle) -> Self {
        self.attachment = Some(handle);
        self
    }

    /// Date and time combined, or `None` if they don't form a real calendar
    /// instant (the header pattern accepts `31/02/2024` or `99:00:00`).
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&format!("{} {}", self.date, self.time), TIMESTAMP_FORMAT)
            .ok()
    }

    /// File name from the attachment marker, whether or not it resolved.
    pub fn attachment_name(&self) -> Option<&str> {
        find_attachment_name(&self.content)
    }

    /// Content with the attachment marker removed, for display.
    pub fn display_content(&self) -> String {
        strip_attachment_marker(&self.content).trim().to_string()
    }

    /// Returns `true` for platform notices.
    pub fn is_system(&self) -> bool {
        self.kind == MessageType::System
    }

    /// Returns `true` if an attachment resolved.
    pub fn has_attachment(&self) -> bool {
        self.attachment.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_new_defaults() {
        let msg = Message::new("01/02/2024", "08:09:10", "Ana", "hola");
        assert_eq!(msg.kind, MessageType::Text);
        assert!(msg.attachment.is_none());
        assert!(!msg.is_system());
        assert!(!msg.has_attachment());
    }

    #[test]
    fn test_timestamp() {
        let msg = Message::new("01/02/2024", "08:09:10", "Ana", "hola");
        let ts = msg.timestamp().unwrap();
        assert_eq!(ts.day(), 1);
        assert_eq!(ts.month(), 2);
        assert_eq!(ts.year(), 2024);
        assert_eq!(ts.hour(), 8);
        assert_eq!(ts.second(), 10);
    }

    #[test]
    fn test_timestamp_out_of_range() {
        assert!(Message::new("31/02/2024", "10:00:00", "A", "x").timestamp().is_none());
        assert!(Message::new("00/01/2024", "10:00:00", "A", "x").timestamp().is_none());
        assert!(Message::new("01/01/2024", "99:00:00", "A", "x").timestamp().is_none());
    }

    #[test]
    fn test_display_content_strips_marker() {
        let msg = Message::new("01/01/2024", "10:00:00", "A", "look <attached: IMG-photo-1.jpg>");
        assert_eq!(msg.display_content(), "look");
        assert_eq!(msg.content, "look <attached: IMG-photo-1.jpg>");
        assert_eq!(msg.attachment_name(), Some("IMG-photo-1.jpg"));
    }

    #[test]
    fn test_display_content_without_marker() {
        let msg = Message::new("01/01/2024", "10:00:00", "A", "plain");
        assert_eq!(msg.display_content(), "plain");
        assert_eq!(msg.attachment_name(), None);
    }

    #[test]
    fn test_message_type_roundtrip_names() {
        for kind in MessageType::all() {
            assert_eq!(kind.as_str().parse::<MessageType>().unwrap(), *kind);
            assert_eq!(kind.to_string(), kind.as_str());
        }
        assert!("video".parse::<MessageType>().is_err());
    }

    #[test]
    fn test_is_media() {
        assert!(MessageType::Image.is_media());
        assert!(MessageType::Audio.is_media());
        assert!(MessageType::Sticker.is_media());
        assert!(!MessageType::Text.is_media());
        assert!(!MessageType::System.is_media());
    }

    #[test]
    fn test_serialize_shape() {
        let msg = Message::new("01/01/2024", "10:00:00", "Ana", "hola").with_kind(MessageType::System);
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["type"], "system");
        assert_eq!(json["sender"], "Ana");
        assert!(json.get("attachment").is_none());
    }
}
