//! Configuration for parsing uploads.
//!
//! [`ChatConfig`] carries every literal the parser matches against: the
//! title marker on the first line, the phrases that identify system notices,
//! and the file-name rules used to pick the chat log and the media files.
//! The defaults reproduce the Spanish-locale iOS export this crate targets.
//!
//! # Example
//!
//! ```rust
//! use wachat::config::ChatConfig;
//!
//! let config = ChatConfig::new()
//!     .with_skip_system_messages(true)
//!     .with_title_marker("Chat with");
//!
//! assert!(config.skip_system_messages);
//! assert_eq!(config.title_marker, "Chat with");
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::WachatError;

/// Phrases that mark a platform notice rather than something a person wrote.
pub const DEFAULT_SYSTEM_MARKERS: &[&str] = &[
    "Messages and calls are end-to-end encrypted",
    "created this group",
    "added you",
];

/// Configuration for chat export parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Substring on the first line that precedes the chat title (default: `"Chat de"`)
    pub title_marker: String,

    /// Case-sensitive substrings that make a message a system notice
    pub system_markers: Vec<String>,

    /// Drop system notices from the export after classification (default: false)
    pub skip_system_messages: bool,

    /// Extension of the chat log, without the dot (default: `"txt"`)
    pub chat_file_extension: String,

    /// Name suffixes indexed as media even without an `image/` or `audio/`
    /// content type (default: `.opus`, `.webp`)
    pub media_suffixes: Vec<String>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            title_marker: "Chat de".to_string(),
            system_markers: DEFAULT_SYSTEM_MARKERS
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            skip_system_messages: false,
            chat_file_extension: "txt".to_string(),
            media_suffixes: vec![".opus".to_string(), ".webp".to_string()],
        }
    }
}

impl ChatConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a configuration from a JSON file.
    ///
    /// Fields missing from the file keep their default values.
    #[cfg(feature = "json-output")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, WachatError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&raw)
    }

    /// Parses a configuration from a JSON string.
    #[cfg(feature = "json-output")]
    pub fn from_json_str(raw: &str) -> Result<Self, WachatError> {
        serde_json::from_str(raw).map_err(|e| WachatError::invalid_config(e.to_string()))
    }

    /// Sets the marker that precedes the title on the first line.
    #[must_use]
    pub fn with_title_marker(mut self, marker: impl Into<String>) -> Self {
        self.title_marker = marker.into();
        self
    }

    /// Replaces the list of system notice phrases.
    #[must_use]
    pub fn with_system_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.system_markers = markers.into_iter().map(Into::into).collect();
        self
    }

    /// Sets whether system notices are dropped from the export.
    #[must_use]
    pub fn with_skip_system_messages(mut self, skip: bool) -> Self {
        self.skip_system_messages = skip;
        self
    }

    /// Sets the chat log extension (without the dot).
    #[must_use]
    pub fn with_chat_file_extension(mut self, extension: impl Into<String>) -> Self {
        self.chat_file_extension = extension.into();
        self
    }

    /// Returns `true` if `name` looks like the chat log.
    pub fn is_chat_file_name(&self, name: &str) -> bool {
        name.strip_suffix(self.chat_file_extension.as_str())
            .is_some_and(|stem| stem.ends_with('.'))
    }

    /// Returns `true` if `content` contains one of the system phrases.
    pub fn is_system_content(&self, content: &str) -> bool {
        self.system_markers
            .iter()
            .any(|marker| content.contains(marker.as_str()))
    }
}

#[cfg(not(feature = "json-output"))]
impl ChatConfig {
    /// Loading from a file needs the `json-output` feature.
    pub fn from_json_file(_path: impl AsRef<Path>) -> Result<Self, WachatError> {
        Err(WachatError::invalid_config(
            "config files require the `json-output` feature",
        ))
    }
}
