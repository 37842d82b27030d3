//! Shared formatting helpers for records output

/// Escape double quotes for quoted record fields
pub fn escape_quotes(s: &str) -> String {
    s.replace('\"', r#"\""#)
}

/// Format tags as a CSV field, using "-" when there are none
pub fn format_tags(tags: &[String]) -> String {
    if tags.is_empty() {
        "-".to_string()
    } else {
        tags.join(",")
    }
}
