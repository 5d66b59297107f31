//! Chat log parser.
//!
//! [`ChatParser`] runs the whole pipeline for one upload:
//!
//! 1. pick the chat log and build the [`MediaIndex`] from the rest;
//! 2. read the title from line 0;
//! 3. scan every later line, classify message headers, drop the rest;
//! 4. collect the messages, in log order, into a [`ChatExport`].
//!
//! # Example
//!
//! ```rust
//! use wachat::parser::ChatParser;
//! use wachat::upload::{Upload, UploadEntry};
//! use wachat::MessageType;
//!
//! let log = "Chat de Familia\n\
//!            [15/01/2024, 10:30:45] Ana: <attached: IMG-photo-0001.jpg>\n\
//!            [15/01/2024, 10:31:00] Bea: qué bonito\n";
//!
//! let upload = Upload::new(vec![
//!     UploadEntry::from_bytes("_chat.txt", "text/plain", log),
//!     UploadEntry::from_bytes("IMG-photo-0001.jpg", "image/jpeg", vec![0xffu8, 0xd8]),
//! ]);
//!
//! let parsed = ChatParser::new().parse_upload(&upload)?;
//! assert_eq!(parsed.export.title.as_deref(), Some("Familia"));
//! assert_eq!(parsed.export.messages[0].kind, MessageType::Image);
//! assert_eq!(parsed.export.messages[1].content, "qué bonito");
//! # Ok::<(), wachat::WachatError>(())
//! ```

use std::path::Path;

use crate::config::ChatConfig;
use crate::core::stats::ParseStats;
use crate::error::WachatError;
use crate::export::{ChatExport, ParsedChat};
use crate::media::{HandleTracker, MediaIndex};
use crate::parsing::{ScannedLine, classify, extract_title, scan_line};
use crate::upload::Upload;

/// Parser for folder exports.
#[derive(Debug, Clone, Default)]
pub struct ChatParser {
    config: ChatConfig,
}

impl ChatParser {
    /// Creates a parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ChatConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ChatConfig {
        &self.config
    }

    /// Loads every file under `dir` and parses it as one upload.
    pub fn parse_dir(&self, dir: impl AsRef<Path>) -> Result<ParsedChat, WachatError> {
        let upload = Upload::from_dir(dir)?;
        self.parse_upload(&upload)
    }

    /// Parses an upload.
    ///
    /// Fails with [`WachatError::MissingChatFile`] when no entry carries the
    /// chat extension, and with [`WachatError::Io`] when the log can't be
    /// read. Nothing else about the content is an error.
    pub fn parse_upload(&self, upload: &Upload) -> Result<ParsedChat, WachatError> {
        self.parse_upload_tracked(upload, &HandleTracker::new())
    }

    /// Like [`parse_upload`](Self::parse_upload), counting media resources in
    /// `tracker`.
    pub fn parse_upload_tracked(
        &self,
        upload: &Upload,
        tracker: &HandleTracker,
    ) -> Result<ParsedChat, WachatError> {
        let chat_file = upload.find_chat_file(&self.config)?;
        let index = MediaIndex::build_tracked(upload, &self.config, tracker);
        let text = chat_file.read_text()?;

        tracing::debug!(chat_file = %chat_file.name, bytes = text.len(), "read chat log");

        Ok(self.parse_str(&text, &index))
    }

    /// Parses chat log text against an already built media index.
    pub fn parse_str(&self, text: &str, index: &MediaIndex) -> ParsedChat {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let mut lines = text.split('\n');

        let title = lines
            .next()
            .and_then(|first| extract_title(first, &self.config.title_marker));

        let mut stats = ParseStats::new();
        let mut messages = Vec::new();

        for (offset, line) in lines.enumerate() {
            stats.lines_scanned += 1;

            match scan_line(line) {
                ScannedLine::Blank => stats.blank_lines += 1,
                ScannedLine::Unrecognized => {
                    stats.skipped_lines += 1;
                    tracing::trace!(line = offset + 2, "skipped line without message header");
                }
                ScannedLine::Message(fields) => {
                    let message = classify(&fields, index, &self.config);
                    stats.record(&message);

                    if self.config.skip_system_messages && message.is_system() {
                        stats.dropped_system += 1;
                        continue;
                    }
                    messages.push(message);
                }
            }
        }

        tracing::debug!(
            title = title.as_deref().unwrap_or(""),
            messages = messages.len(),
            skipped = stats.skipped_lines,
            unresolved = stats.attachments_unresolved,
            "parsed chat log"
        );

        ParsedChat {
            export: ChatExport::new(title, messages),
            stats,
        }
    }
}
