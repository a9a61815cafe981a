//! Fields and typed field views.
//!
//! A field is a named slot holding a raw string value; the raw value is the
//! single source of truth. Typed views ([`DateField`], [`ImageField`],
//! [`LinkField`], [`ReferenceField`], [`MultilistField`], [`RichTextField`])
//! parse the raw value on demand and never fail; an unusable raw value
//! degrades to an empty view.

mod date;
mod image;
mod link;
mod multilist;
mod reference;
mod rich_text;

pub use date::DateField;
pub use image::ImageField;
pub use link::LinkField;
pub use multilist::{MultilistField, MULTILIST_SEPARATOR};
pub use reference::ReferenceField;
pub use rich_text::RichTextField;

use std::collections::HashMap;

/// Raw value a boolean field must hold exactly to be read as true
pub const BOOLEAN_TRUE: &str = "1";

/// A named field with a raw string value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    name: String,
    value: String,
}

impl Field {
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw stored value
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether the raw value is non-empty
    #[must_use]
    pub fn has_value(&self) -> bool {
        !self.value.is_empty()
    }
}

/// An item's field collection, keyed by exact field name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldMap {
    fields: HashMap<String, Field>,
}

impl FieldMap {
    /// Look up a field by name. Names match exactly (case-sensitive).
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over field names (unordered)
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields.keys().map(String::as_str)
    }
}

impl From<HashMap<String, String>> for FieldMap {
    fn from(raw: HashMap<String, String>) -> Self {
        let fields = raw
            .into_iter()
            .map(|(name, value)| (name.clone(), Field::new(name, value)))
            .collect();
        Self { fields }
    }
}
