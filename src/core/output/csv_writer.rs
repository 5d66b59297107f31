//! CSV output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::record::OutputRecord;
use crate::core::models::OutputConfig;
use crate::error::WachatError;
use crate::export::ChatExport;

/// Writes the messages to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Date`, `Time`, [`Timestamp`], `Sender`, `Type`, `Content`, [`Attachment`]
/// - Encoding: UTF-8
pub fn write_csv(
    export: &ChatExport,
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<(), WachatError> {
    let file = File::create(output_path)?;
    write_records(export, config, file)
}

/// Converts the messages to a CSV string.
pub fn to_csv(export: &ChatExport, config: &OutputConfig) -> Result<String, WachatError> {
    let mut buffer = Vec::new();
    write_records(export, config, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

fn write_records<W: Write>(
    export: &ChatExport,
    config: &OutputConfig,
    out: W,
) -> Result<(), WachatError> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(out);

    writer.write_record(build_header(config))?;

    for msg in &export.messages {
        writer.write_record(build_record(&OutputRecord::new(msg, config), config))?;
    }

    writer.flush()?;
    Ok(())
}

/// Build CSV header based on output configuration.
fn build_header(config: &OutputConfig) -> Vec<&'static str> {
    let mut header = vec!["Date", "Time"];

    if config.include_timestamps {
        header.push("Timestamp");
    }

    header.extend(["Sender", "Type", "Content"]);

    if config.include_attachments {
        header.push("Attachment");
    }

    header
}

/// Build a CSV record matching the header.
fn build_record(record: &OutputRecord<'_>, config: &OutputConfig) -> Vec<String> {
    let mut row = vec![record.date.to_string(), record.time.to_string()];

    if config.include_timestamps {
        row.push(record.timestamp.clone().unwrap_or_default());
    }

    row.push(record.sender.to_string());
    row.push(record.kind.to_string());
    row.push(record.content.clone());

    if config.include_attachments {
        row.push(record.attachment.clone().unwrap_or_default());
    }

    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{Message, MessageType};

    fn export() -> ChatExport {
        ChatExport::new(
            None,
            vec![
                Message::new("15/01/2024", "10:30:45", "Ana", "hola; qué tal"),
                Message::new("31/02/2024", "10:31:00", "Bea", "<attached: x.jpg>")
                    .with_kind(MessageType::Image),
            ],
        )
    }

    #[test]
    fn test_to_csv_basic() {
        let csv = to_csv(&export(), &OutputConfig::new()).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("Date;Time;Sender;Type;Content"));
        assert_eq!(lines.next(), Some("15/01/2024;10:30:45;Ana;text;\"hola; qué tal\""));
        assert_eq!(lines.next(), Some("31/02/2024;10:31:00;Bea;image;<attached: x.jpg>"));
    }

    #[test]
    fn test_to_csv_with_options() {
        let config = OutputConfig::new().with_timestamps().with_attachments();
        let csv = to_csv(&export(), &config).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("Date;Time;Timestamp;Sender;Type;Content;Attachment")
        );
        assert_eq!(
            lines.next(),
            Some("15/01/2024;10:30:45;2024-01-15T10:30:45;Ana;text;\"hola; qué tal\";")
        );
        // invalid calendar date: empty timestamp cell
        assert_eq!(
            lines.next(),
            Some("31/02/2024;10:31:00;;Bea;image;<attached: x.jpg>;")
        );
    }

    #[test]
    fn test_write_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_csv(&export(), &path, &OutputConfig::new()).unwrap();

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b';')
            .from_path(&path)
            .unwrap();
        let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][4], "hola; qué tal");
    }
}
