//! Utility functions for common operations.

/// Truncate text to a maximum number of characters, appending "..."
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let take = max_chars.saturating_sub(3);
    let truncated: String = text.chars().take(take).collect();
    format!("{}...", truncated)
}

/// Derive a download filename from a resource path or URL.
/// Falls back to "documento.pdf" when no usable segment exists.
pub fn suggested_filename(resource_path: &str) -> String {
    let trimmed = resource_path.trim().trim_end_matches('/');
    let segment = trimmed.rsplit(['/', '\\']).next().unwrap_or("");
    let name = segment.split(['?', '#']).next().unwrap_or("");
    if name.is_empty() {
        "documento.pdf".to_string()
    } else {
        name.to_string()
    }
}
