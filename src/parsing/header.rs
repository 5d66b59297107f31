//! Chat title from the first line of the log.

/// Extracts the chat title from the first line.
///
/// The title is whatever follows the first occurrence of `marker`, trimmed.
/// Returns `None` when the marker is absent (or empty); a line that ends
/// right after the marker yields an empty title.
///
/// # Example
///
/// ```rust
/// use wachat::parsing::extract_title;
///
/// assert_eq!(
///     extract_title("Some prefix Chat de Family Group", "Chat de"),
///     Some("Family Group".to_string())
/// );
/// assert_eq!(extract_title("[01/01/2024, 10:00:00] Ana: hola", "Chat de"), None);
/// ```
pub fn extract_title(first_line: &str, marker: &str) -> Option<String> {
    if marker.is_empty() {
        return None;
    }
    let (_, rest) = first_line.split_once(marker)?;
    Some(rest.trim().to_string())
}
