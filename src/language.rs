//! Language tags selecting which localized version of an item to read.

use crate::error::ContentError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Pattern for accepted language tags: a lowercase primary subtag with
/// optional hyphen-separated subtags (`en`, `da-DK`, `zh-Hans-CN`).
#[allow(clippy::unwrap_used)] // pattern is a compile-time constant
static LANGUAGE_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z]{2,3}(-[A-Za-z0-9]{2,8})*$").unwrap());

/// A validated locale tag.
///
/// Items are stored per language under `items/<id>/<tag>/`; the tag doubles
/// as the folder name. Tags are compared exactly, no normalization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Language(String);

impl Language {
    /// Parse and validate a language tag.
    pub fn parse(tag: impl Into<String>) -> Result<Self, ContentError> {
        let tag = tag.into();
        if LANGUAGE_TAG.is_match(&tag) {
            Ok(Language(tag))
        } else {
            Err(ContentError::invalid_language(tag))
        }
    }

    /// The default language (`en`)
    #[must_use]
    pub fn english() -> Self {
        Language("en".to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Folder name for this language under an item's directory
    #[must_use]
    pub fn folder_name(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for Language {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::parse(s)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl serde::Serialize for Language {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for Language {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Language::parse(s).map_err(serde::de::Error::custom)
    }
}
