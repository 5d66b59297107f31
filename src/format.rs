//! Output format selection.
//!
//! Library-side format types that don't depend on the CLI.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() -> wachat::Result<()> {
//! use wachat::format::{OutputFormat, to_format_string};
//! use wachat::core::models::OutputConfig;
//! use wachat::{ChatExport, Message};
//!
//! let export = ChatExport::new(
//!     Some("Familia".into()),
//!     vec![Message::new("15/01/2024", "10:30:45", "Ana", "hola")],
//! );
//!
//! let csv = to_format_string(&export, OutputFormat::Csv, &OutputConfig::new())?;
//! assert!(csv.starts_with("Date;Time;Sender;Type;Content"));
//!
//! let format = OutputFormat::from_path("chat.jsonl")?;
//! assert_eq!(format, OutputFormat::Jsonl);
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::models::OutputConfig;
use crate::error::WachatError;
use crate::export::ChatExport;

/// Output format for chat exports.
///
/// - [`Json`](OutputFormat::Json): title plus message array (default)
/// - [`Jsonl`](OutputFormat::Jsonl): one message object per line
/// - [`Csv`](OutputFormat::Csv): semicolon-delimited table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// Single JSON document with the title and all messages
    #[default]
    Json,

    /// JSON Lines, also known as NDJSON
    Jsonl,

    /// CSV with semicolon delimiter
    Csv,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    ///
    /// ```rust
    /// use wachat::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::Json.extension(), "json");
    /// assert_eq!(OutputFormat::Csv.extension(), "csv");
    /// ```
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
            OutputFormat::Csv => "csv",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["json", "jsonl", "ndjson", "csv"]
    }

    /// Returns the MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Json => "application/json",
            OutputFormat::Jsonl => "application/x-ndjson",
            OutputFormat::Csv => "text/csv",
        }
    }

    /// Detects format from a file path based on extension.
    ///
    /// ```rust
    /// use wachat::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::from_path("out.ndjson").unwrap(), OutputFormat::Jsonl);
    /// assert!(OutputFormat::from_path("out.txt").is_err());
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, WachatError> {
        let ext = path
            .as_ref()
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(WachatError::invalid_format(format!(
                "Unknown file extension: '.{}'. Expected one of: json, jsonl, csv",
                ext
            ))),
        }
    }

    fn required_feature(self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv-output",
            OutputFormat::Json | OutputFormat::Jsonl => "json-output",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
            OutputFormat::Csv => write!(f, "CSV"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

/// Writes an export to a file in the given format.
///
/// # Errors
///
/// Fails if the format's feature is disabled or the file can't be written.
#[allow(unused_variables)]
pub fn write_to_format(
    export: &ChatExport,
    path: impl AsRef<Path>,
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<(), WachatError> {
    let path = path.as_ref();
    match format {
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_json(export, path, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::write_jsonl(export, path, config),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_csv(export, path, config),
        #[allow(unreachable_patterns)]
        _ => Err(feature_disabled(format)),
    }
}

/// Converts an export to a string in the given format.
#[allow(unused_variables)]
pub fn to_format_string(
    export: &ChatExport,
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<String, WachatError> {
    match format {
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::to_json(export, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::to_jsonl(export, config),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::to_csv(export, config),
        #[allow(unreachable_patterns)]
        _ => Err(feature_disabled(format)),
    }
}

#[allow(dead_code)]
fn feature_disabled(format: OutputFormat) -> WachatError {
    WachatError::invalid_format(format!(
        "Output format {:?} requires the '{}' feature to be enabled",
        format,
        format.required_feature()
    ))
}
