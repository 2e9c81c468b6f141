/// Trim text read from the page, treating whitespace-only text as absent
pub fn clean_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Shorten a title for log lines
pub fn log_preview(title: &str) -> String {
    const MAX_CHARS: usize = 60;
    if title.chars().count() > MAX_CHARS {
        let short: String = title.chars().take(MAX_CHARS).collect();
        format!("{}...", short)
    } else {
        title.to_string()
    }
}
