//! Text normalization applied before n-gram extraction.

/// Canonicalize raw text: lower-case and collapse whitespace.
///
/// Splits on any whitespace run and rejoins with a single space, which also
/// strips leading and trailing whitespace. Total over all inputs; the empty
/// string (and all-whitespace strings) normalize to the empty string.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
