//! Message header recognition.
//!
//! A message line looks like:
//!
//! ```text
//! [15/01/2024, 10:30:45] Sender Name: message text
//! ```
//!
//! Day, month, hours, minutes and seconds are exactly two ASCII digits, the
//! year four. The sender runs up to the first `": "` and cannot contain a
//! colon. Anything that doesn't fit is not a message; lines are never glued
//! onto the previous message.

use std::sync::LazyLock;

use regex::Regex;

/// Pattern for a message header. Unanchored: text before the opening
/// bracket (for instance a left-to-right mark) is ignored.
pub const LINE_PATTERN: &str =
    r"\[([0-9]{2}/[0-9]{2}/[0-9]{4}), ([0-9]{2}:[0-9]{2}:[0-9]{2})\] ([^:]+): (.+)";

static LINE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(LINE_PATTERN).unwrap());

/// Fields captured from one message line.
///
/// `sender` and `raw_content` are as captured, not trimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedFields<'a> {
    /// `DD/MM/YYYY`
    pub date: &'a str,
    /// `HH:MM:SS`
    pub time: &'a str,
    /// Sender, untrimmed
    pub sender: &'a str,
    /// Everything after the first `": "`, untrimmed
    pub raw_content: &'a str,
}

/// Outcome of scanning one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScannedLine<'a> {
    /// Empty or whitespace only.
    Blank,
    /// A message header.
    Message(ParsedFields<'a>),
    /// Anything else; dropped.
    Unrecognized,
}

/// Classifies a line as blank, a message header, or unrecognized.
pub fn scan_line(line: &str) -> ScannedLine<'_> {
    if line.trim().is_empty() {
        return ScannedLine::Blank;
    }
    match parse_line(line) {
        Some(fields) => ScannedLine::Message(fields),
        None => ScannedLine::Unrecognized,
    }
}

/// Extracts the header fields, or `None` if the line is not a message.
///
/// # Example
///
/// ```rust
/// use wachat::parsing::parse_line;
///
/// let fields = parse_line("[15/01/2024, 10:30:45] Ana: hola").unwrap();
/// assert_eq!(fields.date, "15/01/2024");
/// assert_eq!(fields.time, "10:30:45");
/// assert_eq!(fields.sender, "Ana");
/// assert_eq!(fields.raw_content, "hola");
///
/// assert!(parse_line("[5/01/2024, 10:30:45] Ana: hola").is_none());
/// ```
pub fn parse_line(line: &str) -> Option<ParsedFields<'_>> {
    let caps = LINE_REGEX.captures(line)?;
    Some(ParsedFields {
        date: caps.get(1)?.as_str(),
        time: caps.get(2)?.as_str(),
        sender: caps.get(3)?.as_str(),
        raw_content: caps.get(4)?.as_str(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let fields = parse_line("[15/01/2024, 10:30:45] Ana: hola que tal").unwrap();
        assert_eq!(fields.date, "15/01/2024");
        assert_eq!(fields.time, "10:30:45");
        assert_eq!(fields.sender, "Ana");
        assert_eq!(fields.raw_content, "hola que tal");
    }

    #[test]
    fn test_content_keeps_later_colons() {
        let fields = parse_line("[15/01/2024, 10:30:45] Ana: nota: son las 10:30").unwrap();
        assert_eq!(fields.sender, "Ana");
        assert_eq!(fields.raw_content, "nota: son las 10:30");
    }

    #[test]
    fn test_sender_with_spaces_and_symbols() {
        let fields = parse_line("[15/01/2024, 10:30:45] +34 600 12 34 56: ok").unwrap();
        assert_eq!(fields.sender, "+34 600 12 34 56");
    }

    #[test]
    fn test_untrimmed_capture() {
        let fields = parse_line("[15/01/2024, 10:30:45]  Ana : hola  \r").unwrap();
        assert_eq!(fields.sender, " Ana ");
        assert_eq!(fields.raw_content, "hola  \r");
    }

    #[test]
    fn test_leading_text_is_ignored() {
        let fields = parse_line("\u{200e}[15/01/2024, 10:30:45] Ana: hola").unwrap();
        assert_eq!(fields.sender, "Ana");
    }

    #[test]
    fn test_rejects_single_digit_day() {
        assert!(parse_line("[5/01/2024, 10:30:45] Ana: hola").is_none());
    }

    #[test]
    fn test_rejects_two_digit_year() {
        assert!(parse_line("[15/01/24, 10:30:45] Ana: hola").is_none());
    }

    #[test]
    fn test_rejects_missing_seconds() {
        assert!(parse_line("[15/01/2024, 10:30] Ana: hola").is_none());
    }

    #[test]
    fn test_rejects_missing_brackets() {
        assert!(parse_line("15/01/2024, 10:30:45 - Ana: hola").is_none());
    }

    #[test]
    fn test_rejects_empty_content() {
        assert!(parse_line("[15/01/2024, 10:30:45] Ana: ").is_none());
        assert!(parse_line("[15/01/2024, 10:30:45] Ana:").is_none());
    }

    #[test]
    fn test_rejects_non_ascii_digits() {
        assert!(parse_line("[١٥/01/2024, 10:30:45] Ana: hola").is_none());
    }

    #[test]
    fn test_accepts_out_of_range_values() {
        let fields = parse_line("[99/99/0000, 99:99:99] Ana: hola").unwrap();
        assert_eq!(fields.date, "99/99/0000");
        assert_eq!(fields.time, "99:99:99");
    }

    #[test]
    fn test_scan_line() {
        assert_eq!(scan_line(""), ScannedLine::Blank);
        assert_eq!(scan_line("  \t\r"), ScannedLine::Blank);
        assert_eq!(scan_line("continuation text"), ScannedLine::Unrecognized);
        assert!(matches!(
            scan_line("[15/01/2024, 10:30:45] Ana: hola"),
            ScannedLine::Message(_)
        ));
    }
}
