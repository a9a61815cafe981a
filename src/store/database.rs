//! Read-only database handle over a loaded content tree.

use crate::config::{read_config, StoreConfig};
use crate::error::ContentError;
use crate::field::FieldMap;
use crate::id::ItemId;
use crate::item::Item;
use crate::language::Language;
use crate::media::MediaItem;
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// One parsed version file of a localized item.
pub(crate) struct VersionRecord {
    pub(crate) number: u32,
    pub(crate) name: String,
    pub(crate) body: String,
    pub(crate) frontmatter: crate::item::ItemFrontmatter,
}

/// Everything stored under one item identity: per-language version lists,
/// sorted ascending by version number.
pub(crate) struct ItemEntry {
    pub(crate) languages: HashMap<Language, Vec<VersionRecord>>,
}

impl ItemEntry {
    /// Current (highest-numbered) version in a language
    fn current(&self, language: &Language) -> Option<&VersionRecord> {
        self.languages.get(language).and_then(|versions| versions.last())
    }

    fn version_count(&self, language: &Language) -> usize {
        self.languages.get(language).map_or(0, Vec::len)
    }

    /// Display name for a shell: the preferred language's current name, else
    /// the first populated language's (by tag order), else empty.
    fn fallback_name(&self, preferred: &Language) -> String {
        if let Some(record) = self.current(preferred) {
            return record.name.clone();
        }
        self.populated_languages()
            .first()
            .and_then(|language| self.current(language))
            .map(|record| record.name.clone())
            .unwrap_or_default()
    }

    /// Languages holding at least one version, sorted by tag
    fn populated_languages(&self) -> Vec<Language> {
        let mut languages: Vec<Language> = self
            .languages
            .iter()
            .filter(|(_, versions)| !versions.is_empty())
            .map(|(language, _)| language.clone())
            .collect();
        languages.sort();
        languages
    }
}

struct DatabaseInner {
    root: PathBuf,
    config: StoreConfig,
    items: HashMap<ItemId, ItemEntry>,
}

/// Handle to a loaded content store.
///
/// Cheap to clone; every [`Item`] carries one back to the database it was
/// read from. The index is immutable after [`Database::open`], so concurrent
/// readers need no coordination.
#[derive(Clone)]
pub struct Database {
    inner: Arc<DatabaseInner>,
}

impl Database {
    /// Open a content store rooted at the given directory.
    ///
    /// Reads `config.json` (falling back to defaults when absent) and
    /// indexes every item version file under `items/`.
    ///
    /// # Errors
    ///
    /// Fails when the `items` directory is missing, a language folder or
    /// version file name is malformed, or an item file does not parse.
    pub async fn open(store_root: impl AsRef<Path>) -> Result<Self, ContentError> {
        let store_root = store_root.as_ref();
        let config = read_config(store_root).await?.unwrap_or_default();
        let items = super::loader::load_items(store_root).await?;

        debug!(
            "Opened content store at {} ({} items, context language {})",
            store_root.display(),
            items.len(),
            config.context_language
        );

        Ok(Self {
            inner: Arc::new(DatabaseInner {
                root: store_root.to_path_buf(),
                config,
                items,
            }),
        })
    }

    /// Root directory this store was opened from
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.inner.root
    }

    /// The store configuration
    #[must_use]
    pub fn config(&self) -> &StoreConfig {
        &self.inner.config
    }

    /// Language used when no explicit language is supplied
    #[must_use]
    pub fn context_language(&self) -> &Language {
        &self.inner.config.context_language
    }

    /// Number of item identities in the store
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.items.is_empty()
    }

    /// All item identities in the store (unordered)
    #[must_use]
    pub fn item_ids(&self) -> Vec<ItemId> {
        self.inner.items.keys().cloned().collect()
    }

    /// Look up an item by identity and language.
    ///
    /// Returns `None` when the identity is unknown. A known identity with no
    /// versions in the requested language yields a shell: present handle,
    /// zero version count, empty fields.
    #[must_use]
    pub fn item(&self, id: &ItemId, language: &Language) -> Option<Item> {
        let entry = self.inner.items.get(id)?;
        match entry.current(language) {
            Some(record) => Some(Item::new(
                id.clone(),
                language.clone(),
                record.number,
                entry.version_count(language),
                record.name.clone(),
                record.body.clone(),
                record.frontmatter.created_at.clone(),
                record.frontmatter.updated_at.clone(),
                FieldMap::from(record.frontmatter.fields.clone()),
                self.clone(),
            )),
            None => Some(Item::shell(
                id.clone(),
                language.clone(),
                entry.fallback_name(self.context_language()),
                self.clone(),
            )),
        }
    }

    /// Look up an item in the context language
    #[must_use]
    pub fn item_in_context_language(&self, id: &ItemId) -> Option<Item> {
        self.item(id, self.context_language())
    }

    /// Resolve a media record.
    ///
    /// Media content is treated as language-invariant: resolution prefers the
    /// context language and falls back to the first populated language.
    /// Returns `None` when the identity is unknown or holds no versions in
    /// any language.
    #[must_use]
    pub fn media_item(&self, id: &ItemId) -> Option<MediaItem> {
        let entry = self.inner.items.get(id)?;
        let context = self.context_language();
        let language = if entry.current(context).is_some() {
            context.clone()
        } else {
            entry.populated_languages().into_iter().next()?
        };
        self.item(id, &language).map(MediaItem::new)
    }
}

impl fmt::Debug for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Database")
            .field("root", &self.inner.root)
            .field("items", &self.inner.items.len())
            .field("context_language", &self.inner.config.context_language)
            .finish()
    }
}
