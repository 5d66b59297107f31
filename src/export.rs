//! The parsed result of one upload.

use serde::Serialize;

use crate::core::stats::ParseStats;
use crate::message::{Message, MessageType};

/// Title and messages of one chat, in log order.
///
/// Built in one go by [`ChatParser`](crate::parser::ChatParser) and never
/// modified afterwards; a new upload produces a new export.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChatExport {
    /// Chat title from the first line, if it had one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Messages in the order they appear in the log.
    pub messages: Vec<Message>,
}

impl ChatExport {
    /// Creates an export.
    pub fn new(title: Option<String>, messages: Vec<Message>) -> Self {
        Self { title, messages }
    }

    /// Number of messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns `true` if there are no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Distinct senders of non-system messages, in order of first appearance.
    ///
    /// Handy for letting the user pick which participant is "me".
    pub fn senders(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for msg in self.messages.iter().filter(|m| !m.is_system()) {
            if !seen.contains(&msg.sender.as_str()) {
                seen.push(&msg.sender);
            }
        }
        seen
    }

    /// Messages of one type, in order.
    pub fn messages_of(&self, kind: MessageType) -> impl Iterator<Item = &Message> {
        self.messages.iter().filter(move |m| m.kind == kind)
    }
}

/// An export together with the counters from producing it.
#[derive(Debug, Clone, Default)]
pub struct ParsedChat {
    /// The export.
    pub export: ChatExport,
    /// What the parser saw.
    pub stats: ParseStats,
}
