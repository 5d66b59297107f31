//! Output configuration.

use serde::{Deserialize, Serialize};

/// Controls what the writers put in each record.
///
/// Date, time, sender, type and content are always written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Write the content with the attachment marker removed
    pub strip_markers: bool,
    /// Write the resolved attachment URI
    pub include_attachments: bool,
    /// Write an ISO 8601 timestamp built from date and time
    pub include_timestamps: bool,
}

impl OutputConfig {
    /// Creates a config with only the mandatory fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Strips attachment markers from the content.
    #[must_use]
    pub fn with_stripped_markers(mut self) -> Self {
        self.strip_markers = true;
        self
    }

    /// Includes attachment URIs.
    #[must_use]
    pub fn with_attachments(mut self) -> Self {
        self.include_attachments = true;
        self
    }

    /// Includes ISO timestamps.
    #[must_use]
    pub fn with_timestamps(mut self) -> Self {
        self.include_timestamps = true;
        self
    }
}
