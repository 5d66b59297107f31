//! JSON output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use super::record::OutputRecord;
use crate::core::models::OutputConfig;
use crate::error::WachatError;
use crate::export::ChatExport;

#[derive(Serialize)]
struct JsonExport<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    messages: Vec<OutputRecord<'a>>,
}

/// Writes the export to a JSON file.
///
/// # Format
/// ```json
/// {
///   "title": "Familia",
///   "messages": [
///     {"date": "15/01/2024", "time": "10:30:45", "sender": "Ana", "type": "text", "content": "hola"}
///   ]
/// }
/// ```
pub fn write_json(
    export: &ChatExport,
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<(), WachatError> {
    let json = to_json(export, config)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts the export to a pretty-printed JSON string.
pub fn to_json(export: &ChatExport, config: &OutputConfig) -> Result<String, WachatError> {
    let doc = JsonExport {
        title: export.title.as_deref(),
        messages: export
            .messages
            .iter()
            .map(|m| OutputRecord::new(m, config))
            .collect(),
    };

    Ok(serde_json::to_string_pretty(&doc)?)
}
