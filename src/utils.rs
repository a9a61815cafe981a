//! Shared constants and path helpers for the content store layout.

use std::path::Path;

/// Folder under the store root that holds all item trees
pub const ITEMS_FOLDER: &str = "items";

/// Name of the store configuration file
pub const CONFIG_FILE: &str = "config.json";

/// Get the path to the items folder
#[must_use]
pub fn items_path(store_root: &Path) -> std::path::PathBuf {
    store_root.join(ITEMS_FOLDER)
}

/// Get the path to the store configuration file
#[must_use]
pub fn config_path(store_root: &Path) -> std::path::PathBuf {
    store_root.join(CONFIG_FILE)
}

/// Get current timestamp in ISO 8601 format
#[must_use]
pub fn now_iso() -> String {
    chrono::Utc::now().to_rfc3339()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_items_path() {
        let root = Path::new("/srv/content");
        assert_eq!(items_path(root), Path::new("/srv/content/items"));
    }

    #[test]
    fn test_config_path() {
        let root = Path::new("/srv/content");
        assert_eq!(config_path(root), Path::new("/srv/content/config.json"));
    }

    #[test]
    fn test_now_iso_is_rfc3339() {
        let timestamp = now_iso();
        let parsed = chrono::DateTime::parse_from_rfc3339(&timestamp);
        assert!(parsed.is_ok(), "Should be valid RFC3339 format");
    }
}
