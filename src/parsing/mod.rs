//! Line-level parsing building blocks.
//!
//! - [`header`]: chat title from the first line
//! - [`line`]: message header recognition and field extraction
//! - [`attachment`]: `<attached: ...>` markers and file-name conventions
//! - [`classify`]: message type decision and attachment resolution
//!
//! [`ChatParser`](crate::parser::ChatParser) strings these together.

pub mod attachment;
pub mod classify;
pub mod header;
pub mod line;

pub use attachment::{find_attachment_name, media_kind, strip_attachment_marker};
pub use classify::classify;
pub use header::extract_title;
pub use line::{ParsedFields, ScannedLine, parse_line, scan_line};
