//! Typed view over a single-reference field.

use super::Field;
use crate::id::ItemId;

/// View over a field pointing at one other item.
///
/// The raw value is the target's identity as a plain string; whitespace is
/// trimmed, and a blank value means no target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceField {
    raw: String,
}

impl ReferenceField {
    #[must_use]
    pub fn from_field(field: &Field) -> Self {
        Self {
            raw: field.value().to_string(),
        }
    }

    /// The raw stored value
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Identity of the referenced item, if the field holds one
    #[must_use]
    pub fn target_id(&self) -> Option<ItemId> {
        let trimmed = self.raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(ItemId::parse(trimmed))
        }
    }

    #[must_use]
    pub fn has_target(&self) -> bool {
        !self.raw.trim().is_empty()
    }
}
