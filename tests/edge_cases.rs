//! Edge case tests for wachat.
//!
//! Boundary conditions of the line grammar, title extraction and message
//! classification, exercised through the public API.

use wachat::config::ChatConfig;
use wachat::media::MediaIndex;
use wachat::parser::ChatParser;
use wachat::parsing::{extract_title, media_kind, parse_line};
use wachat::upload::{Upload, UploadEntry};
use wachat::{MessageType, ParsedChat};

fn parse(body: &str) -> ParsedChat {
    ChatParser::new().parse_str(&format!("Chat de Test\n{body}"), &MediaIndex::new())
}

fn index(names: &[&str]) -> MediaIndex {
    let upload: Upload = names
        .iter()
        .map(|name| UploadEntry::from_bytes(*name, "image/jpeg", vec![0u8]))
        .collect();
    MediaIndex::build(&upload, &ChatConfig::default())
}

// =========================================================================
// Line grammar
// =========================================================================

#[test]
fn test_single_digit_day_is_not_a_message() {
    assert!(parse_line("[1/01/2024, 10:30:45] Ana: hola").is_none());
    assert!(parse_line("[01/1/2024, 10:30:45] Ana: hola").is_none());
    assert!(parse_line("[01/01/24, 10:30:45] Ana: hola").is_none());
}

#[test]
fn test_missing_brackets_or_separator() {
    assert!(parse_line("15/01/2024, 10:30:45 Ana: hola").is_none());
    assert!(parse_line("[15/01/2024 10:30:45] Ana: hola").is_none());
    assert!(parse_line("[15/01/2024, 10:30] Ana: hola").is_none());
    assert!(parse_line("[15/01/2024, 10:30:45] Ana hola").is_none());
    assert!(parse_line("[15/01/2024, 10:30:45] Ana: ").is_none());
}

#[test]
fn test_non_ascii_digits_rejected() {
    assert!(parse_line("[١٥/٠١/٢٠٢٤, 10:30:45] Ana: hola").is_none());
}

#[test]
fn test_header_anywhere_in_line() {
    let fields = parse_line("\u{200e}[15/01/2024, 10:30:45] Ana: hola").unwrap();
    assert_eq!(fields.sender, "Ana");
    assert_eq!(fields.date, "15/01/2024");
}

#[test]
fn test_colon_in_content_stays_in_content() {
    let fields = parse_line("[15/01/2024, 10:30:45] Ana: a las 10:30: vale").unwrap();
    assert_eq!(fields.sender, "Ana");
    assert_eq!(fields.raw_content, "a las 10:30: vale");
}

#[test]
fn test_unicode_sender_and_content() {
    let parsed = parse("[15/01/2024, 10:30:45] Иван 🎉: Привет мир 👋\n");
    let msg = &parsed.export.messages[0];
    assert_eq!(msg.sender, "Иван 🎉");
    assert_eq!(msg.content, "Привет мир 👋");
}

#[test]
fn test_out_of_range_values_are_kept_verbatim() {
    let parsed = parse("[99/99/0000, 99:99:99] Ana: raro\n");
    let msg = &parsed.export.messages[0];
    assert_eq!(msg.date, "99/99/0000");
    assert_eq!(msg.time, "99:99:99");
    assert!(msg.timestamp().is_none());
}

#[test]
fn test_junk_does_not_affect_neighbours() {
    let parsed = parse(
        "[15/01/2024, 10:30:45] Ana: uno\n\
         basura\n\
         [15/01/2024, 10:30:46] Bea: dos\n",
    );
    let contents: Vec<_> = parsed
        .export
        .messages
        .iter()
        .map(|m| m.content.as_str())
        .collect();
    assert_eq!(contents, vec!["uno", "dos"]);
    assert_eq!(parsed.stats.skipped_lines, 1);
}

#[test]
fn test_only_junk_is_empty_not_error() {
    let parsed = parse("nada\nde\nnada\n");
    assert!(parsed.export.is_empty());
    assert_eq!(parsed.stats.skipped_lines, 3);
    assert!(parsed.stats.recognition_rate().abs() < f64::EPSILON);
}

// =========================================================================
// Title
// =========================================================================

#[test]
fn test_title_after_prefix() {
    assert_eq!(
        extract_title("Some prefix Chat de Family Group", "Chat de").as_deref(),
        Some("Family Group")
    );
}

#[test]
fn test_title_missing_or_empty() {
    assert_eq!(extract_title("WhatsApp Chat with Ana", "Chat de"), None);
    assert_eq!(extract_title("Chat de   ", "Chat de").as_deref(), Some(""));
}

#[test]
fn test_title_uses_first_marker() {
    assert_eq!(
        extract_title("Chat de Chat de amigos", "Chat de").as_deref(),
        Some("Chat de amigos")
    );
}

// =========================================================================
// Classification
// =========================================================================

#[test]
fn test_system_phrase_anywhere() {
    let parsed = parse("[15/01/2024, 10:30:45] Ana: Ana created this group \"Familia\"\n");
    assert_eq!(parsed.export.messages[0].kind, MessageType::System);
}

#[test]
fn test_system_phrase_is_case_sensitive() {
    let parsed = parse("[15/01/2024, 10:30:45] Ana: Ana CREATED THIS GROUP\n");
    assert_eq!(parsed.export.messages[0].kind, MessageType::Text);
}

#[test]
fn test_system_not_narrowed_by_attachment() {
    let index = index(&["IMG-photo-1.jpg"]);
    let parsed = ChatParser::new().parse_str(
        "Chat de X\n[15/01/2024, 10:30:45] Ana: added you <attached: IMG-photo-1.jpg>\n",
        &index,
    );
    let msg = &parsed.export.messages[0];
    assert_eq!(msg.kind, MessageType::System);
    assert!(msg.has_attachment());
}

#[test]
fn test_fragment_match_is_case_insensitive() {
    assert_eq!(media_kind("00001-PHOTO-2024.jpg"), Some(MessageType::Image));
    assert_eq!(media_kind("PTT-Audio-1.opus"), Some(MessageType::Audio));
    assert_eq!(media_kind("photo.jpg"), None);
}

#[test]
fn test_index_lookup_is_case_sensitive() {
    let index = index(&["IMG-photo-1.jpg"]);
    let parsed = ChatParser::new().parse_str(
        "Chat de X\n[15/01/2024, 10:30:45] Ana: <attached: img-photo-1.jpg>\n",
        &index,
    );
    assert_eq!(parsed.export.messages[0].kind, MessageType::Text);
    assert!(!parsed.export.messages[0].has_attachment());
}

#[test]
fn test_resolved_media_without_fragment_stays_text() {
    let index = index(&["00000012-2024-01-15.jpg"]);
    let parsed = ChatParser::new().parse_str(
        "Chat de X\n[15/01/2024, 10:30:45] Ana: <attached: 00000012-2024-01-15.jpg>\n",
        &index,
    );
    let msg = &parsed.export.messages[0];
    assert_eq!(msg.kind, MessageType::Text);
    assert!(msg.has_attachment());
}

#[test]
fn test_only_first_marker_counts() {
    let index = index(&["IMG-photo-1.jpg", "IMG-photo-2.jpg"]);
    let parsed = ChatParser::new().parse_str(
        "Chat de X\n[15/01/2024, 10:30:45] Ana: <attached: IMG-photo-1.jpg> <attached: IMG-photo-2.jpg>\n",
        &index,
    );
    let handle = parsed.export.messages[0].attachment.as_ref().unwrap();
    assert_eq!(handle.name(), "IMG-photo-1.jpg");
}

#[test]
fn test_chat_file_extension_is_exact() {
    let upload = Upload::new(vec![
        UploadEntry::from_bytes("notes.TXT", "text/plain", "Chat de Mayus\n"),
        UploadEntry::from_bytes("txt", "", "Chat de Nada\n"),
        UploadEntry::from_bytes("chat.txt", "text/plain", "Chat de Bueno\n"),
    ]);
    let parsed = ChatParser::new().parse_upload(&upload).unwrap();
    assert_eq!(parsed.export.title.as_deref(), Some("Bueno"));
}
