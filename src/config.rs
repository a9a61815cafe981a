//! Store configuration read from `<root>/config.json`.

use crate::error::ContentError;
use crate::language::Language;
use crate::utils::config_path;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;

fn default_context_language() -> Language {
    Language::english()
}

/// Content store configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    /// Language used when an accessor needs "the current language" and the
    /// caller did not supply one. Defaults to `en`.
    #[serde(default = "default_context_language")]
    pub context_language: Language,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            context_language: default_context_language(),
        }
    }
}

/// Read the store configuration file. Returns `None` when the store has no
/// `config.json`; the caller falls back to [`StoreConfig::default`].
pub async fn read_config(store_root: &Path) -> Result<Option<StoreConfig>, ContentError> {
    let path = config_path(store_root);
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&path).await?;
    let config: StoreConfig = serde_json::from_str(&content)?;
    Ok(Some(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_context_language() {
        let config = StoreConfig::default();
        assert_eq!(config.context_language, Language::english());
    }

    #[test]
    fn test_deserialize_full() {
        let config: StoreConfig =
            serde_json::from_str(r#"{"contextLanguage": "da-DK"}"#).unwrap();
        assert_eq!(config.context_language.as_str(), "da-DK");
    }

    #[test]
    fn test_deserialize_empty_object_uses_defaults() {
        let config: StoreConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, StoreConfig::default());
    }

    #[test]
    fn test_deserialize_rejects_bad_language() {
        let result: Result<StoreConfig, _> =
            serde_json::from_str(r#"{"contextLanguage": "Bad Tag"}"#);
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_read_config_missing_file() {
        let temp = tempfile::tempdir().unwrap();
        let config = read_config(temp.path()).await.unwrap();
        assert!(config.is_none());
    }

    #[tokio::test]
    async fn test_read_config_roundtrip() {
        let temp = tempfile::tempdir().unwrap();
        let path = config_path(temp.path());
        tokio::fs::write(&path, r#"{"contextLanguage": "sv"}"#)
            .await
            .unwrap();

        let config = read_config(temp.path()).await.unwrap().unwrap();
        assert_eq!(config.context_language.as_str(), "sv");
    }

    #[tokio::test]
    async fn test_read_config_invalid_json() {
        let temp = tempfile::tempdir().unwrap();
        let path = config_path(temp.path());
        tokio::fs::write(&path, "{not json").await.unwrap();

        let result = read_config(temp.path()).await;
        assert!(matches!(result, Err(ContentError::Json(_))));
    }
}
