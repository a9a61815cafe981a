//! Async loader that walks a content tree and builds the item index.
//!
//! Expected layout: `<root>/items/<id>/<language>/<version>.md`, where
//! `<version>` is a positive integer and the highest number is the current
//! version.

use super::database::{ItemEntry, VersionRecord};
use crate::error::ContentError;
use crate::frontmatter::parse_item;
use crate::id::ItemId;
use crate::item::ItemFrontmatter;
use crate::language::Language;
use crate::utils::items_path;
use std::collections::HashMap;
use std::path::Path;
use tokio::fs;
use tracing::{debug, warn};

/// Scan the items directory and parse every version file.
pub(crate) async fn load_items(
    store_root: &Path,
) -> Result<HashMap<ItemId, ItemEntry>, ContentError> {
    let items_dir = items_path(store_root);
    if !items_dir.exists() {
        return Err(ContentError::NotInitialized);
    }

    let mut items = HashMap::new();
    let mut item_dirs = fs::read_dir(&items_dir).await?;
    while let Some(entry) = item_dirs.next_entry().await? {
        if !entry.file_type().await?.is_dir() {
            warn!(
                "Skipping stray file in items directory: {}",
                entry.path().display()
            );
            continue;
        }
        let id = ItemId::parse(&entry.file_name().to_string_lossy());
        let languages = load_item_languages(&entry.path()).await?;
        items.insert(id, ItemEntry { languages });
    }

    debug!("Indexed {} items under {}", items.len(), items_dir.display());
    Ok(items)
}

/// Load every language folder of one item directory.
async fn load_item_languages(
    item_dir: &Path,
) -> Result<HashMap<Language, Vec<VersionRecord>>, ContentError> {
    let mut languages = HashMap::new();
    let mut language_dirs = fs::read_dir(item_dir).await?;
    while let Some(entry) = language_dirs.next_entry().await? {
        if !entry.file_type().await?.is_dir() {
            warn!(
                "Skipping stray file in item directory: {}",
                entry.path().display()
            );
            continue;
        }
        let tag = entry.file_name().to_string_lossy().to_string();
        let language = Language::parse(tag)?;
        let versions = load_versions(&entry.path()).await?;
        languages.insert(language, versions);
    }
    Ok(languages)
}

/// Load and sort the version files of one language folder.
async fn load_versions(language_dir: &Path) -> Result<Vec<VersionRecord>, ContentError> {
    let mut versions = Vec::new();
    let mut files = fs::read_dir(language_dir).await?;
    while let Some(entry) = files.next_entry().await? {
        let file_name = entry.file_name().to_string_lossy().to_string();
        if !entry.file_type().await?.is_file() {
            return Err(ContentError::invalid_version_file(file_name));
        }
        let number = parse_version_number(&file_name)?;

        let path = entry.path();
        let content = fs::read_to_string(&path).await?;
        let (frontmatter, name, body): (ItemFrontmatter, String, String) = parse_item(&content)
            .map_err(|source| {
                ContentError::invalid_item_file(path.display().to_string(), source)
            })?;

        versions.push(VersionRecord {
            number,
            name,
            body,
            frontmatter,
        });
    }
    versions.sort_by_key(|record| record.number);
    Ok(versions)
}

/// A version file must be named `<n>.md` with `n` a positive integer.
fn parse_version_number(file_name: &str) -> Result<u32, ContentError> {
    let stem = file_name
        .strip_suffix(".md")
        .ok_or_else(|| ContentError::invalid_version_file(file_name))?;
    let number: u32 = stem
        .parse()
        .map_err(|_| ContentError::invalid_version_file(file_name))?;
    if number == 0 {
        return Err(ContentError::invalid_version_file(file_name));
    }
    Ok(number)
}
