//! Output format writers.
//!
//! - [`write_csv`] / [`to_csv`]: one row per message, semicolon delimited (`csv-output`)
//! - [`write_json`] / [`to_json`]: title plus message array (`json-output`)
//! - [`write_jsonl`] / [`to_jsonl`]: one JSON object per message (`json-output`)
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> wachat::Result<()> {
//! use wachat::core::output::{write_csv, write_json, to_jsonl};
//! use wachat::core::models::OutputConfig;
//! use wachat::parser::ChatParser;
//!
//! let parsed = ChatParser::new().parse_dir("WhatsApp Chat - Familia")?;
//! let config = OutputConfig::new().with_attachments();
//!
//! write_json(&parsed.export, "chat.json", &config)?;
//! write_csv(&parsed.export, "chat.csv", &config)?;
//! let lines = to_jsonl(&parsed.export, &config)?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;
#[cfg(any(feature = "csv-output", feature = "json-output"))]
mod record;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};
