//! Counters collected while parsing a chat log.

use serde::Serialize;

use crate::message::{Message, MessageType};

/// What happened to each line of a parse.
///
/// `lines_scanned` covers every line after the title line. Each of them is
/// exactly one of blank, skipped, or a message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ParseStats {
    /// Lines examined after the title line
    pub lines_scanned: usize,
    /// Empty or whitespace-only lines
    pub blank_lines: usize,
    /// Non-blank lines that are not message headers
    pub skipped_lines: usize,
    /// Message headers recognized
    pub messages: usize,
    /// Plain text messages
    pub text: usize,
    /// Image messages
    pub images: usize,
    /// Audio messages
    pub audio: usize,
    /// Sticker messages
    pub stickers: usize,
    /// System notices
    pub system_messages: usize,
    /// System notices left out of the export
    pub dropped_system: usize,
    /// Attachment markers found in the media index
    pub attachments_resolved: usize,
    /// Attachment markers naming a file that wasn't uploaded
    pub attachments_unresolved: usize,
}

impl ParseStats {
    /// Creates empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one classified message.
    pub fn record(&mut self, message: &Message) {
        self.messages += 1;
        match message.kind {
            MessageType::Text => self.text += 1,
            MessageType::Image => self.images += 1,
            MessageType::Audio => self.audio += 1,
            MessageType::Sticker => self.stickers += 1,
            MessageType::System => self.system_messages += 1,
        }
        if message.attachment.is_some() {
            self.attachments_resolved += 1;
        } else if message.attachment_name().is_some() {
            self.attachments_unresolved += 1;
        }
    }

    /// Number of messages of one type.
    pub fn count_of(&self, kind: MessageType) -> usize {
        match kind {
            MessageType::Text => self.text,
            MessageType::Image => self.images,
            MessageType::Audio => self.audio,
            MessageType::Sticker => self.stickers,
            MessageType::System => self.system_messages,
        }
    }

    /// Messages that made it into the export.
    pub fn exported(&self) -> usize {
        self.messages - self.dropped_system
    }

    /// Share of non-blank lines recognized as messages, in percent.
    ///
    /// 100 when there was nothing to recognize.
    #[allow(clippy::cast_precision_loss)]
    pub fn recognition_rate(&self) -> f64 {
        let candidates = self.lines_scanned - self.blank_lines;
        if candidates == 0 {
            100.0
        } else {
            (self.messages as f64 / candidates as f64) * 100.0
        }
    }
}
