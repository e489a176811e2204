// src/utils/text.rs

//! Text cleanup for scraped fields.

/// Collapse every whitespace run into a single space and trim both edges.
///
/// Whitespace-only input becomes an empty string.
pub fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
