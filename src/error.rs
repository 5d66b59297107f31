//! Unified error types for wachat.
//!
//! Only a handful of conditions are real errors here. A line that does not
//! look like a message, an attachment marker pointing at a file that was not
//! uploaded, or a first line without a title are all tolerated by the parser
//! and show up in [`ParseStats`](crate::core::stats::ParseStats) instead.
//!
//! What remains:
//! - **MissingChatFile**: the upload has no chat log, the parse never starts
//! - **Io**: reading the chat log or media, or writing output
//! - **InvalidConfig**: a config file that does not describe a `ChatConfig`
//! - **InvalidFormat**: an unknown output format, or one whose feature is off

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for wachat operations.
///
/// # Example
///
/// ```rust
/// use wachat::error::Result;
/// use wachat::ChatExport;
///
/// fn load() -> Result<ChatExport> {
///     Ok(ChatExport::default())
/// }
/// ```
pub type Result<T> = std::result::Result<T, WachatError>;

/// The error type for all wachat operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum WachatError {
    /// The upload does not contain a chat log.
    ///
    /// Reported before anything is parsed; a [`Session`](crate::Session)
    /// keeps its previous export when this happens.
    #[error("No chat file found (looked for a *.{extension} entry among {entries} files)")]
    MissingChatFile {
        /// Extension that was searched for, without the dot
        extension: String,
        /// Number of entries in the upload
        entries: usize,
    },

    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The upload directory doesn't exist
    /// - A media file disappeared between listing and reading
    /// - The output file cannot be created
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A configuration file could not be understood.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of what's wrong
        message: String,
    },

    /// The requested output format is unknown or not compiled in.
    #[error("Invalid output format: {message}")]
    InvalidFormat {
        /// Description of what's wrong
        message: String,
    },

    /// JSON serialization error while writing output.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl WachatError {
    /// Creates a missing chat file error.
    pub fn missing_chat_file(extension: impl Into<String>, entries: usize) -> Self {
        WachatError::MissingChatFile {
            extension: extension.into(),
            entries,
        }
    }

    /// Creates an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        WachatError::InvalidConfig {
            message: message.into(),
        }
    }

    /// Creates an invalid output format error.
    pub fn invalid_format(message: impl Into<String>) -> Self {
        WachatError::InvalidFormat {
            message: message.into(),
        }
    }

    /// Returns `true` if the upload had no chat log.
    pub fn is_missing_chat_file(&self) -> bool {
        matches!(self, WachatError::MissingChatFile { .. })
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, WachatError::Io(_))
    }

    /// Returns `true` if this is a configuration error.
    pub fn is_invalid_config(&self) -> bool {
        matches!(self, WachatError::InvalidConfig { .. })
    }
}
