//! # wachat
//!
//! A Rust library for turning WhatsApp folder exports (the `.txt` chat log
//! plus the media files that came with it) into typed, ordered message
//! records.
//!
//! ## Overview
//!
//! An export folder looks like this:
//!
//! ```text
//! WhatsApp Chat - Familia/
//! ├── _chat.txt
//! ├── IMG-photo-0001.jpg
//! ├── PTT-audio-0002.opus
//! └── STK-sticker-0003.webp
//! ```
//!
//! and the chat log like this:
//!
//! ```text
//! Chat de Familia
//! [15/01/2024, 10:30:45] Familia: Messages and calls are end-to-end encrypted.
//! [15/01/2024, 10:31:00] Ana: <attached: IMG-photo-0001.jpg>
//! [15/01/2024, 10:31:20] Bea: qué bonito
//! ```
//!
//! Each `[DD/MM/YYYY, HH:MM:SS] Sender: Content` line becomes a [`Message`]
//! with a [`MessageType`]. Attachment markers are resolved against the
//! uploaded media; resolved messages hold a [`MediaHandle`](media::MediaHandle)
//! to the file. Lines that don't match the header pattern are skipped and
//! counted.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use wachat::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let parsed = ChatParser::new().parse_dir("WhatsApp Chat - Familia")?;
//!
//!     println!("{:?}", parsed.export.title);
//!     for msg in &parsed.export.messages {
//!         println!("[{} {}] {} ({}): {}", msg.date, msg.time, msg.sender, msg.kind, msg.display_content());
//!     }
//!
//!     write_json(&parsed.export, "chat.json", &OutputConfig::new().with_attachments())?;
//!     Ok(())
//! }
//! ```
//!
//! ## Sessions
//!
//! A [`Session`] holds the current export of one viewer. A new upload
//! replaces it (releasing the old media handles); a result that arrives
//! after a newer upload started is discarded.
//!
//! ## Module Structure
//!
//! - [`upload`]: [`Upload`](upload::Upload) and [`UploadEntry`](upload::UploadEntry)
//! - [`media`]: [`MediaIndex`](media::MediaIndex), [`MediaHandle`](media::MediaHandle)
//! - [`parsing`]: title, line, attachment and classification steps
//! - [`parser`]: [`ChatParser`], the full pipeline
//! - [`session`]: [`Session`], latest-upload-wins holder
//! - [`message`], [`export`]: the data model
//! - [`config`]: [`ChatConfig`](config::ChatConfig)
//! - [`core`]: [`OutputConfig`](core::OutputConfig), [`ParseStats`](core::ParseStats), writers
//! - [`format`]: [`OutputFormat`](format::OutputFormat) dispatch
//! - [`error`]: [`WachatError`], [`Result`]
//! - [`prelude`]: convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod export;
pub mod format;
pub mod media;
pub mod message;
pub mod parser;
pub mod parsing;
pub mod session;
pub mod upload;

// Re-export the main types at the crate root for convenience
pub use error::{Result, WachatError};
pub use export::{ChatExport, ParsedChat};
pub use message::{Message, MessageType};
pub use parser::ChatParser;
pub use session::Session;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use wachat::prelude::*;
/// ```
pub mod prelude {
    // Data model
    pub use crate::export::{ChatExport, ParsedChat};
    pub use crate::message::{Message, MessageType};

    // Error types
    pub use crate::error::{Result, WachatError};

    // Parsing
    pub use crate::config::ChatConfig;
    pub use crate::parser::ChatParser;
    pub use crate::session::{Session, UploadOutcome, UploadTicket};
    pub use crate::upload::{Upload, UploadEntry};

    // Media
    pub use crate::media::{MediaHandle, MediaIndex};

    // Output
    pub use crate::core::models::OutputConfig;
    pub use crate::core::stats::ParseStats;
    pub use crate::format::{OutputFormat, to_format_string, write_to_format};

    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, to_jsonl, write_json, write_jsonl};
}
