//! Message type decision and attachment resolution.

use crate::config::ChatConfig;
use crate::media::MediaIndex;
use crate::message::{Message, MessageType};

use super::attachment::{find_attachment_name, media_kind};
use super::line::ParsedFields;

/// Turns captured header fields into a [`Message`].
///
/// Order matters:
/// 1. every message starts as [`MessageType::Text`];
/// 2. content containing a system phrase becomes [`MessageType::System`];
/// 3. an attachment marker whose file is in `index` attaches the handle and,
///    unless the message is already a system notice, narrows the type from
///    the file name.
///
/// A marker naming a file that was not uploaded changes nothing.
pub fn classify(fields: &ParsedFields<'_>, index: &MediaIndex, config: &ChatConfig) -> Message {
    let mut message = Message::new(
        fields.date,
        fields.time,
        fields.sender.trim(),
        fields.raw_content.trim(),
    );

    if config.is_system_content(fields.raw_content) {
        message.kind = MessageType::System;
    }

    if let Some(name) = find_attachment_name(fields.raw_content) {
        match index.get(name) {
            Some(handle) => {
                message.attachment = Some(handle.clone());
                if message.kind != MessageType::System {
                    if let Some(kind) = media_kind(name) {
                        message.kind = kind;
                    }
                }
            }
            None => {
                tracing::trace!(name, "attachment not in upload");
            }
        }
    }

    message
}
