//! Typed, null-safe field accessors.
//!
//! Every accessor turns "field missing", "value empty", or "target gone"
//! into a safe default (empty string, false, `None`, or the current time)
//! instead of an error. Each call is a synchronous read with at most two
//! dependent lookups: the field, then its target.

use crate::field::{
    DateField, ImageField, LinkField, MultilistField, ReferenceField, RichTextField, BOOLEAN_TRUE,
};
use crate::item::Item;
use crate::language::Language;
use crate::media::MediaItem;
use chrono::{DateTime, Utc};
use tracing::debug;

/// Typed accessors over an item's fields and language versions.
pub trait FieldAccessors {
    /// Whether the item has at least one version under the store's context
    /// language
    fn has_language_version(&self) -> bool;

    /// Whether the item has at least one version under the given language
    fn has_language_version_in(&self, language: &Language) -> bool;

    /// Boolean field: true iff the raw value is exactly [`BOOLEAN_TRUE`].
    /// A missing field reads as false.
    fn bool_field(&self, name: &str) -> bool;

    /// String field: the raw value, or empty when the field is missing
    fn string_field(&self, name: &str) -> String;

    /// Date field: the parsed timestamp, or the current time when the field
    /// is missing or its value does not parse
    fn date_field(&self, name: &str) -> DateTime<Utc>;

    /// Media field: the referenced media item, when the field has a value
    /// and its reference resolves
    fn media_item_field(&self, name: &str) -> Option<MediaItem>;

    /// Rich-text view of a field, when the field exists
    fn rich_text_field(&self, name: &str) -> Option<RichTextField>;

    /// Hyperlink view of a field, when the field exists
    fn link_field(&self, name: &str) -> Option<LinkField>;

    /// Single-reference view of a field, when the field exists
    fn reference_field(&self, name: &str) -> Option<ReferenceField>;

    /// The item referenced by a single-reference field, when the field
    /// exists and its target resolves
    fn reference_target(&self, name: &str) -> Option<Item>;

    /// Multi-reference view of a field, when the field exists
    fn multilist_field(&self, name: &str) -> Option<MultilistField>;

    /// The items referenced by a multi-reference field.
    ///
    /// `None` when the field is missing; `Some` (possibly empty) when it
    /// exists. Identities that do not resolve are skipped. The missing/empty
    /// distinction lets callers tell "no such field" from "field cleared".
    fn multilist_targets(&self, name: &str) -> Option<Vec<Item>>;
}

impl FieldAccessors for Item {
    fn has_language_version(&self) -> bool {
        self.has_language_version_in(self.database().context_language())
    }

    fn has_language_version_in(&self, language: &Language) -> bool {
        match self.database().item(self.id(), language) {
            Some(localized) => localized.version_count() > 0,
            None => {
                debug!(
                    "Language version check for unknown item {} ({})",
                    self.id(),
                    language
                );
                false
            }
        }
    }

    fn bool_field(&self, name: &str) -> bool {
        self.field(name)
            .is_some_and(|field| field.value() == BOOLEAN_TRUE)
    }

    fn string_field(&self, name: &str) -> String {
        self.field(name)
            .map(|field| field.value().to_string())
            .unwrap_or_default()
    }

    fn date_field(&self, name: &str) -> DateTime<Utc> {
        self.field(name)
            .map(DateField::from_field)
            .and_then(|date| date.date_time())
            .unwrap_or_else(Utc::now)
    }

    fn media_item_field(&self, name: &str) -> Option<MediaItem> {
        let field = self.field(name).filter(|field| field.has_value())?;
        let image = ImageField::from_field(field);
        let media_id = image.media_id()?;
        self.database().media_item(media_id)
    }

    fn rich_text_field(&self, name: &str) -> Option<RichTextField> {
        self.field(name).map(RichTextField::from_field)
    }

    fn link_field(&self, name: &str) -> Option<LinkField> {
        self.field(name).map(LinkField::from_field)
    }

    fn reference_field(&self, name: &str) -> Option<ReferenceField> {
        self.field(name).map(ReferenceField::from_field)
    }

    fn reference_target(&self, name: &str) -> Option<Item> {
        let reference = self.reference_field(name)?;
        let target_id = reference.target_id()?;
        self.database().item(&target_id, self.language())
    }

    fn multilist_field(&self, name: &str) -> Option<MultilistField> {
        self.field(name).map(MultilistField::from_field)
    }

    fn multilist_targets(&self, name: &str) -> Option<Vec<Item>> {
        let multilist = self.multilist_field(name)?;
        let targets = multilist
            .target_ids()
            .iter()
            .filter_map(|target_id| self.database().item(target_id, self.language()))
            .collect();
        Some(targets)
    }
}
