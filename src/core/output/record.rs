//! Flattened message record shared by the writers.

use serde::Serialize;

use crate::core::models::OutputConfig;
use crate::message::{Message, MessageType};

/// One message as written out. Optional fields follow `OutputConfig`.
#[derive(Debug, Serialize)]
pub(crate) struct OutputRecord<'a> {
    pub date: &'a str,
    pub time: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    pub sender: &'a str,
    #[serde(rename = "type")]
    pub kind: MessageType,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<String>,
}

impl<'a> OutputRecord<'a> {
    pub fn new(msg: &'a Message, config: &OutputConfig) -> Self {
        Self {
            date: &msg.date,
            time: &msg.time,
            timestamp: if config.include_timestamps {
                msg.timestamp()
                    .map(|ts| ts.format("%Y-%m-%dT%H:%M:%S").to_string())
            } else {
                None
            },
            sender: &msg.sender,
            kind: msg.kind,
            content: if config.strip_markers {
                msg.display_content()
            } else {
                msg.content.clone()
            },
            attachment: if config.include_attachments {
                msg.attachment.as_ref().map(|handle| handle.uri())
            } else {
                None
            },
        }
    }
}
