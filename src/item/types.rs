//! Content item types.

use crate::field::{Field, FieldMap};
use crate::id::ItemId;
use crate::language::Language;
use crate::store::Database;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Frontmatter of an item version file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ItemFrontmatter {
    /// ISO timestamp when the version was created
    pub created_at: String,
    /// ISO timestamp when the version was last updated
    pub updated_at: String,
    /// Field collection: field name → raw string value
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub fields: HashMap<String, String>,
}

/// A localized, versioned content item served by a [`Database`].
///
/// An item handle always refers to a single (identity, language) pair and
/// carries the current version's content. When the identity exists but the
/// language holds no versions, the handle is a *shell*: zero version count,
/// empty field collection, display name borrowed from a populated language.
#[derive(Debug, Clone)]
pub struct Item {
    id: ItemId,
    language: Language,
    version: u32,
    version_count: usize,
    name: String,
    body: String,
    created_at: String,
    updated_at: String,
    fields: FieldMap,
    database: Database,
}

impl Item {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        id: ItemId,
        language: Language,
        version: u32,
        version_count: usize,
        name: String,
        body: String,
        created_at: String,
        updated_at: String,
        fields: FieldMap,
        database: Database,
    ) -> Self {
        Self {
            id,
            language,
            version,
            version_count,
            name,
            body,
            created_at,
            updated_at,
            fields,
            database,
        }
    }

    pub(crate) fn shell(id: ItemId, language: Language, name: String, database: Database) -> Self {
        Self {
            id,
            language,
            version: 0,
            version_count: 0,
            name,
            body: String::new(),
            created_at: String::new(),
            updated_at: String::new(),
            fields: FieldMap::default(),
            database,
        }
    }

    #[must_use]
    pub fn id(&self) -> &ItemId {
        &self.id
    }

    #[must_use]
    pub fn language(&self) -> &Language {
        &self.language
    }

    /// Current version number; 0 for a shell
    #[must_use]
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Number of versions stored for this (identity, language) pair
    #[must_use]
    pub fn version_count(&self) -> usize {
        self.version_count
    }

    /// Whether this handle has no versions in its language
    #[must_use]
    pub fn is_shell(&self) -> bool {
        self.version_count == 0
    }

    /// Display name (the H1 heading of the version file)
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Markdown body below the heading
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    #[must_use]
    pub fn created_at(&self) -> &str {
        &self.created_at
    }

    #[must_use]
    pub fn updated_at(&self) -> &str {
        &self.updated_at
    }

    /// The item's field collection
    #[must_use]
    pub fn fields(&self) -> &FieldMap {
        &self.fields
    }

    /// Look up a field by exact name
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.field(name)
    }

    /// The database this item was read from
    #[must_use]
    pub fn database(&self) -> &Database {
        &self.database
    }
}
