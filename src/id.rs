//! Item identifier types supporting both UUID and slug-based IDs.

use std::fmt;

/// Stable identity of a content item.
///
/// Regular content and media items use UUIDs; well-known items (a site root,
/// a settings item) may use human-readable slugs instead. Reference fields
/// store either form as a plain string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ItemId {
    /// UUID-based identifier
    Uuid(uuid::Uuid),
    /// Slug-based identifier
    Slug(String),
}

impl ItemId {
    /// Create a new random UUID-based identifier
    #[must_use]
    pub fn new_uuid() -> Self {
        ItemId::Uuid(uuid::Uuid::new_v4())
    }

    /// Create an identifier from a slug string
    #[must_use]
    pub fn from_slug(slug: impl Into<String>) -> Self {
        ItemId::Slug(slug.into())
    }

    /// Parse a string as an identifier, attempting UUID first, then falling
    /// back to slug
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match uuid::Uuid::parse_str(s) {
            Ok(uuid) => ItemId::Uuid(uuid),
            Err(_) => ItemId::Slug(s.to_string()),
        }
    }

    /// Folder name for this identifier under the items directory
    #[must_use]
    pub fn folder_name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Uuid(uuid) => write!(f, "{uuid}"),
            ItemId::Slug(slug) => write!(f, "{slug}"),
        }
    }
}

impl From<uuid::Uuid> for ItemId {
    fn from(uuid: uuid::Uuid) -> Self {
        ItemId::Uuid(uuid)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        ItemId::parse(s)
    }
}

impl serde::Serialize for ItemId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for ItemId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(ItemId::parse(&s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_uuid() {
        let uuid = uuid::Uuid::new_v4();
        let id = ItemId::parse(&uuid.to_string());
        assert_eq!(id, ItemId::Uuid(uuid));
    }

    #[test]
    fn test_parse_slug_fallback() {
        let id = ItemId::parse("site-root");
        assert_eq!(id, ItemId::from_slug("site-root"));
    }

    #[test]
    fn test_folder_name_matches_display() {
        let id = ItemId::from_slug("settings");
        assert_eq!(id.folder_name(), "settings");
        assert_eq!(id.to_string(), "settings");

        let uuid = uuid::Uuid::new_v4();
        let id = ItemId::from(uuid);
        assert_eq!(id.folder_name(), uuid.to_string());
    }

    #[test]
    fn test_new_uuid_is_unique() {
        assert_ne!(ItemId::new_uuid(), ItemId::new_uuid());
    }

    #[test]
    fn test_serde_roundtrip() {
        let id = ItemId::new_uuid();
        let json = serde_json::to_string(&id).unwrap();
        let parsed: ItemId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);

        let id = ItemId::from_slug("home");
        let json = serde_json::to_string(&id).unwrap();
        let parsed: ItemId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }
}
