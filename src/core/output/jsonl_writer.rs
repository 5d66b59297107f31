//! JSON Lines (JSONL) output writer.
//!
//! One message per line; the title is not written.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::record::OutputRecord;
use crate::core::models::OutputConfig;
use crate::error::WachatError;
use crate::export::ChatExport;

/// Writes the messages to a JSONL file.
///
/// ```jsonl
/// {"date":"15/01/2024","time":"10:30:45","sender":"Ana","type":"text","content":"hola"}
/// {"date":"15/01/2024","time":"10:31:00","sender":"Bea","type":"image","content":"<attached: IMG-photo-1.jpg>"}
/// ```
pub fn write_jsonl(
    export: &ChatExport,
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<(), WachatError> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);

    for msg in &export.messages {
        let line = serde_json::to_string(&OutputRecord::new(msg, config))?;
        writeln!(writer, "{}", line)?;
    }

    writer.flush()?;
    Ok(())
}

/// Converts the messages to a JSONL string.
pub fn to_jsonl(export: &ChatExport, config: &OutputConfig) -> Result<String, WachatError> {
    let mut output = String::new();

    for msg in &export.messages {
        let line = serde_json::to_string(&OutputRecord::new(msg, config))?;
        output.push_str(&line);
        output.push('\n');
    }

    Ok(output)
}
