//! Parsing and generation of item files: YAML frontmatter, an H1 display
//! name, and a markdown body.

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FrontmatterError {
    #[error("Invalid item file format: {0}")]
    InvalidFormat(String),
    #[error("YAML parse error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

/// Parse an item file.
///
/// Returns a tuple of:
/// - Deserialized frontmatter metadata
/// - Display name extracted from the H1 heading after the frontmatter
/// - Body content (everything after the heading)
///
/// # Format
/// ```markdown
/// ---
/// createdAt: 2024-01-01T00:00:00Z
/// updatedAt: 2024-01-01T00:00:00Z
/// fields:
///   Title: Welcome
/// ---
/// # Home
///
/// Body content...
/// ```
pub fn parse_item<T: DeserializeOwned>(
    content: &str,
) -> Result<(T, String, String), FrontmatterError> {
    let lines: Vec<&str> = content.lines().collect();

    if lines.first() != Some(&"---") {
        return Err(FrontmatterError::InvalidFormat(
            "Content must start with '---'".to_string(),
        ));
    }

    let end_idx = lines
        .iter()
        .skip(1)
        .position(|&line| line == "---")
        .ok_or_else(|| {
            FrontmatterError::InvalidFormat("Missing closing '---' for frontmatter".to_string())
        })?;

    let frontmatter_yaml = lines.get(1..=end_idx).unwrap_or(&[]).join("\n");
    let metadata: T = serde_yaml::from_str(&frontmatter_yaml)?;

    // Everything after the closing delimiter, leading blank lines dropped
    let body_start = end_idx.saturating_add(2);
    let body_lines: Vec<&str> = lines
        .get(body_start..)
        .unwrap_or(&[])
        .iter()
        .skip_while(|line| line.is_empty())
        .copied()
        .collect();

    let (name, body) = if body_lines.first().is_some_and(|l| l.starts_with("# ")) {
        let first_line = body_lines.first().unwrap_or(&"");
        let name = first_line.strip_prefix("# ").unwrap_or("").to_string();
        let body = body_lines
            .get(1..)
            .unwrap_or(&[])
            .iter()
            .skip_while(|line| line.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join("\n")
            .trim_end()
            .to_string();
        (name, body)
    } else {
        // No H1 heading, use empty name and full body
        (String::new(), body_lines.join("\n").trim_end().to_string())
    };

    Ok((metadata, name, body))
}

/// Generate an item file from frontmatter metadata, a display name, and a
/// body. Inverse of [`parse_item`]; used to author content trees.
pub fn generate_item<T: Serialize>(metadata: &T, name: &str, body: &str) -> String {
    let yaml = serde_yaml::to_string(metadata).unwrap_or_default();
    let yaml = yaml.trim_end();

    if body.is_empty() {
        format!("---\n{yaml}\n---\n\n# {name}\n")
    } else {
        format!("---\n{yaml}\n---\n\n# {name}\n\n{body}\n")
    }
}
