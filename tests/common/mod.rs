//! Common test utilities

use centy_content::{generate_item, ItemFrontmatter};
use std::path::Path;
use tempfile::TempDir;

/// Create a temporary directory for testing
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Create the items directory so an empty root opens cleanly
#[allow(dead_code)] // Test utility for integration tests
pub async fn init_store(root: &Path) {
    tokio::fs::create_dir_all(root.join("items"))
        .await
        .expect("Failed to create items directory");
}

/// Write `config.json` with the given context language
#[allow(dead_code)] // Test utility for integration tests
pub async fn write_config(root: &Path, context_language: &str) {
    let content = format!(r#"{{"contextLanguage": "{context_language}"}}"#);
    tokio::fs::write(root.join("config.json"), content)
        .await
        .expect("Failed to write config");
}

/// Write one version file for a localized item
pub async fn write_item(
    root: &Path,
    id: &str,
    language: &str,
    version: u32,
    name: &str,
    fields: &[(&str, &str)],
    body: &str,
) {
    let dir = root.join("items").join(id).join(language);
    tokio::fs::create_dir_all(&dir)
        .await
        .expect("Failed to create item directory");

    let frontmatter = ItemFrontmatter {
        created_at: "2024-01-01T00:00:00Z".to_string(),
        updated_at: "2024-01-02T00:00:00Z".to_string(),
        fields: fields
            .iter()
            .map(|(name, value)| ((*name).to_string(), (*value).to_string()))
            .collect(),
    };
    let content = generate_item(&frontmatter, name, body);
    tokio::fs::write(dir.join(format!("{version}.md")), content)
        .await
        .expect("Failed to write item file");
}

/// Write a media item with the conventional asset fields
#[allow(dead_code)] // Test utility for integration tests
pub async fn write_media_item(
    root: &Path,
    id: &str,
    language: &str,
    name: &str,
    path: &str,
    mime_type: &str,
    alt: &str,
) {
    write_item(
        root,
        id,
        language,
        1,
        name,
        &[
            ("Path", path),
            ("MimeType", mime_type),
            ("Alt", alt),
            ("Extension", "jpg"),
            ("Size", "2048"),
        ],
        "",
    )
    .await;
}
