//! Typed view over a multi-value reference field.

use super::Field;
use crate::id::ItemId;

/// Separator between identities in a multi-value reference field's raw value
pub const MULTILIST_SEPARATOR: char = '|';

/// View over a field pointing at an ordered list of other items.
///
/// The raw value is the target identities joined with
/// [`MULTILIST_SEPARATOR`]. An empty raw value is an empty list, which is
/// distinct from the field being absent altogether; callers must detect
/// absence before constructing this view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultilistField {
    raw: String,
}

impl MultilistField {
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

    /// Identities of the referenced items, in stored order. Blank segments
    /// are skipped.
    #[must_use]
    pub fn target_ids(&self) -> Vec<ItemId> {
        self.raw
            .split(MULTILIST_SEPARATOR)
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(ItemId::parse)
            .collect()
    }

    /// Number of referenced identities
    #[must_use]
    pub fn len(&self) -> usize {
        self.target_ids().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.target_ids().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordered_targets() {
        let a = uuid::Uuid::new_v4();
        let b = uuid::Uuid::new_v4();
        let field = Field::new("Related", format!("{a}|{b}|site-root"));
        let multilist = MultilistField::from_field(&field);
        assert_eq!(
            multilist.target_ids(),
            vec![
                ItemId::from(a),
                ItemId::from(b),
                ItemId::from_slug("site-root")
            ]
        );
        assert_eq!(multilist.len(), 3);
    }

    #[test]
    fn test_empty_value_is_empty_list() {
        let field = Field::new("Related", "");
        let multilist = MultilistField::from_field(&field);
        assert!(multilist.is_empty());
        assert_eq!(multilist.target_ids(), Vec::<ItemId>::new());
    }

    #[test]
    fn test_blank_segments_are_skipped() {
        let field = Field::new("Related", "a| |b||");
        let multilist = MultilistField::from_field(&field);
        assert_eq!(
            multilist.target_ids(),
            vec![ItemId::from_slug("a"), ItemId::from_slug("b")]
        );
    }
}
