//! Unified error types for content store operations.

use thiserror::Error;

/// Unified error type for content store operations.
///
/// Field accessors never return errors; every "absent" case collapses to a
/// safe default. This type covers the store side: opening a content tree,
/// reading configuration, and parsing item files.
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store not initialized: missing items directory")]
    NotInitialized,

    #[error("Invalid item file {path}: {source}")]
    InvalidItemFile {
        path: String,
        #[source]
        source: crate::frontmatter::FrontmatterError,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid language tag: {0}")]
    InvalidLanguage(String),

    #[error("Invalid version file name: {0}")]
    InvalidVersionFile(String),

    #[error("{0}")]
    Custom(String),
}

impl ContentError {
    /// Create a custom error with a message
    pub fn custom(msg: impl Into<String>) -> Self {
        ContentError::Custom(msg.into())
    }

    /// Create an invalid-language error for a rejected tag
    pub fn invalid_language(tag: impl Into<String>) -> Self {
        ContentError::InvalidLanguage(tag.into())
    }

    /// Create an invalid-version-file error for a rejected file name
    pub fn invalid_version_file(name: impl Into<String>) -> Self {
        ContentError::InvalidVersionFile(name.into())
    }

    /// Wrap a frontmatter parse failure with the path of the offending file
    pub fn invalid_item_file(
        path: impl Into<String>,
        source: crate::frontmatter::FrontmatterError,
    ) -> Self {
        ContentError::InvalidItemFile {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_error_message() {
        let err = ContentError::custom("something went wrong");
        assert_eq!(err.to_string(), "something went wrong");
    }

    #[test]
    fn test_invalid_language_display() {
        let err = ContentError::invalid_language("EN_US");
        assert_eq!(err.to_string(), "Invalid language tag: EN_US");
    }

    #[test]
    fn test_invalid_version_file_display() {
        let err = ContentError::invalid_version_file("latest.md");
        assert_eq!(err.to_string(), "Invalid version file name: latest.md");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: ContentError = io.into();
        assert!(matches!(err, ContentError::Io(_)));
    }
}
