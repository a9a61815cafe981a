//! Media items: content items whose fields describe a stored asset.

use crate::id::ItemId;
use crate::item::Item;
use crate::language::Language;

/// Field holding the asset's path relative to the store root
pub const PATH_FIELD: &str = "Path";
/// Field holding the asset's MIME type
pub const MIME_TYPE_FIELD: &str = "MimeType";
/// Field holding the default alternative text
pub const ALT_FIELD: &str = "Alt";
/// Field holding the asset's file extension
pub const EXTENSION_FIELD: &str = "Extension";
/// Field holding the asset's size in bytes
pub const SIZE_FIELD: &str = "Size";

/// Thin wrapper over an [`Item`] stored in the media part of the tree.
///
/// All getters read the wrapped item's fields and degrade to empty values
/// when a field is missing.
#[derive(Debug, Clone)]
pub struct MediaItem {
    item: Item,
}

impl MediaItem {
    #[must_use]
    pub fn new(item: Item) -> Self {
        Self { item }
    }

    /// The wrapped content item
    #[must_use]
    pub fn item(&self) -> &Item {
        &self.item
    }

    #[must_use]
    pub fn id(&self) -> &ItemId {
        self.item.id()
    }

    #[must_use]
    pub fn language(&self) -> &Language {
        self.item.language()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.item.name()
    }

    /// Asset path relative to the store root, or empty
    #[must_use]
    pub fn path(&self) -> String {
        self.string_field(PATH_FIELD)
    }

    /// MIME type, or empty
    #[must_use]
    pub fn mime_type(&self) -> String {
        self.string_field(MIME_TYPE_FIELD)
    }

    /// Default alternative text, or empty
    #[must_use]
    pub fn alt(&self) -> String {
        self.string_field(ALT_FIELD)
    }

    /// File extension without the dot, or empty
    #[must_use]
    pub fn extension(&self) -> String {
        self.string_field(EXTENSION_FIELD)
    }

    /// Asset size in bytes; 0 when unset or unparseable
    #[must_use]
    pub fn size(&self) -> u64 {
        self.string_field(SIZE_FIELD).parse().unwrap_or(0)
    }

    fn string_field(&self, name: &str) -> String {
        self.item
            .field(name)
            .map(|field| field.value().to_string())
            .unwrap_or_default()
    }
}

impl From<Item> for MediaItem {
    fn from(item: Item) -> Self {
        MediaItem::new(item)
    }
}
