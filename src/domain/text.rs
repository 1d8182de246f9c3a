/// Truncates to at most `max_chars` characters, respecting UTF-8 boundaries.
/// Returns a borrowed slice when no truncation is needed.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Strips NUL bytes, which Postgres rejects inside text columns.
pub fn sanitize_for_storage(text: &str) -> String {
    text.replace('\0', "")
}
