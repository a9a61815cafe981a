//! Test fixtures: author small content trees on disk.

use crate::frontmatter::generate_item;
use crate::item::ItemFrontmatter;
use crate::store::Database;
use crate::utils::{config_path, items_path};
use std::path::Path;
use tokio::fs;

/// Create the items directory so an empty root opens cleanly.
pub(crate) async fn init_store(root: &Path) {
    fs::create_dir_all(items_path(root))
        .await
        .expect("create items directory");
}

/// Write `config.json` with the given context language.
pub(crate) async fn write_config(root: &Path, context_language: &str) {
    let content = format!(r#"{{"contextLanguage": "{context_language}"}}"#);
    fs::write(config_path(root), content)
        .await
        .expect("write config");
}

/// Write one version file for a localized item.
pub(crate) async fn write_item(
    root: &Path,
    id: &str,
    language: &str,
    version: u32,
    name: &str,
    fields: &[(&str, &str)],
    body: &str,
) {
    let dir = items_path(root).join(id).join(language);
    fs::create_dir_all(&dir).await.expect("create item directory");

    let frontmatter = ItemFrontmatter {
        created_at: "2024-01-01T00:00:00Z".to_string(),
        updated_at: "2024-01-01T00:00:00Z".to_string(),
        fields: fields
            .iter()
            .map(|(name, value)| ((*name).to_string(), (*value).to_string()))
            .collect(),
    };
    let content = generate_item(&frontmatter, name, body);
    fs::write(dir.join(format!("{version}.md")), content)
        .await
        .expect("write item file");
}

/// Write a media item with the conventional asset fields.
pub(crate) async fn write_media_item(
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

/// Open the store, panicking on failure.
pub(crate) async fn open_store(root: &Path) -> Database {
    Database::open(root).await.expect("open store")
}

/// Fetch an item, panicking when the identity is unknown.
pub(crate) fn get_item(db: &Database, id: &str, language: &str) -> crate::item::Item {
    let id = crate::id::ItemId::parse(id);
    let language = crate::language::Language::parse(language).expect("valid language tag");
    db.item(&id, &language).expect("item exists")
}
