//! Typed view over an image field.

use super::Field;
use crate::id::ItemId;
use serde::Deserialize;

/// JSON payload stored in an image field's raw value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ImagePayload {
    #[serde(default)]
    media_id: Option<String>,
    #[serde(default)]
    alt: Option<String>,
}

/// View over a field referencing a media item.
///
/// The raw value is a compact JSON object, e.g.
/// `{"mediaId": "550e8400-e29b-41d4-a716-446655440000", "alt": "Team photo"}`.
/// A raw value that is not valid JSON degrades to an image with no media
/// reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageField {
    media_id: Option<ItemId>,
    alt: Option<String>,
}

impl ImageField {
    #[must_use]
    pub fn from_field(field: &Field) -> Self {
        let payload: ImagePayload = serde_json::from_str(field.value()).unwrap_or_default();
        Self {
            media_id: payload
                .media_id
                .as_deref()
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(ItemId::parse),
            alt: payload.alt,
        }
    }

    /// Identity of the referenced media item, if the field holds one
    #[must_use]
    pub fn media_id(&self) -> Option<&ItemId> {
        self.media_id.as_ref()
    }

    /// Alternative text stored alongside the reference
    #[must_use]
    pub fn alt(&self) -> Option<&str> {
        self.alt.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_payload() {
        let uuid = uuid::Uuid::new_v4();
        let field = Field::new(
            "Hero",
            format!(r#"{{"mediaId": "{uuid}", "alt": "Team photo"}}"#),
        );
        let image = ImageField::from_field(&field);
        assert_eq!(image.media_id(), Some(&ItemId::from(uuid)));
        assert_eq!(image.alt(), Some("Team photo"));
    }

    #[test]
    fn test_missing_media_id() {
        let field = Field::new("Hero", r#"{"alt": "Just text"}"#);
        let image = ImageField::from_field(&field);
        assert!(image.media_id().is_none());
        assert_eq!(image.alt(), Some("Just text"));
    }

    #[test]
    fn test_malformed_payload() {
        let field = Field::new("Hero", "<image mediaid=broken>");
        let image = ImageField::from_field(&field);
        assert!(image.media_id().is_none());
        assert!(image.alt().is_none());
    }
}
