use tracing::warn;

use super::frontmatter::NoteFrontmatter;

/// Split markdown content into its YAML frontmatter block and body.
///
/// Returns `(None, content)` when there is no opening `---` or no closing
/// delimiter; a file without frontmatter is all body.
pub fn split_frontmatter(content: &str) -> (Option<&str>, &str) {
    let trimmed = content.trim_start();
    if !trimmed.starts_with("---") {
        return (None, content);
    }

    let after_open = &trimmed[3..];
    match after_open.find("\n---") {
        Some(end) => {
            let yaml = &after_open[..end];
            let body = &after_open[end + 4..];
            (Some(yaml), body.trim_start_matches('\n'))
        }
        None => (None, content),
    }
}

/// Parse the frontmatter block out of markdown content.
///
/// Malformed YAML downgrades to default frontmatter with a warning so a
/// single bad note never takes a listing down with it.
pub fn frontmatter_or_default(content: &str, path: &str) -> NoteFrontmatter {
    let (yaml, _) = split_frontmatter(content);
    let Some(yaml) = yaml else {
        return NoteFrontmatter::default();
    };
    if yaml.trim().is_empty() {
        return NoteFrontmatter::default();
    }
    match serde_yaml::from_str(yaml) {
        Ok(fm) => fm,
        Err(e) => {
            warn!(path = %path, error = %e, "malformed frontmatter, keeping basename only");
            NoteFrontmatter::default()
        }
    }
}

/// Markdown body with any frontmatter block removed
pub fn body_of(content: &str) -> &str {
    split_frontmatter(content).1
}
