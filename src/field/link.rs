//! Typed view over a hyperlink field.

use super::Field;
use serde::Deserialize;

/// JSON payload stored in a hyperlink field's raw value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LinkPayload {
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    target: Option<String>,
    #[serde(default)]
    title: Option<String>,
}

/// View over a field holding a hyperlink.
///
/// The raw value is a compact JSON object, e.g.
/// `{"url": "https://example.org", "text": "Example", "target": "_blank"}`.
/// A raw value that is not valid JSON degrades to a link with no parts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkField {
    url: Option<String>,
    text: Option<String>,
    target: Option<String>,
    title: Option<String>,
}

impl LinkField {
    #[must_use]
    pub fn from_field(field: &Field) -> Self {
        let payload: LinkPayload = serde_json::from_str(field.value()).unwrap_or_default();
        Self {
            url: payload.url,
            text: payload.text,
            target: payload.target,
            title: payload.title,
        }
    }

    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// The link's display text
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Browsing context the link opens in (e.g. `_blank`)
    #[must_use]
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Whether the link carries no usable destination
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.url.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_payload() {
        let field = Field::new(
            "MoreInfo",
            r#"{"url": "https://example.org/docs", "text": "Read more", "target": "_blank", "title": "Documentation"}"#,
        );
        let link = LinkField::from_field(&field);
        assert_eq!(link.url(), Some("https://example.org/docs"));
        assert_eq!(link.text(), Some("Read more"));
        assert_eq!(link.target(), Some("_blank"));
        assert_eq!(link.title(), Some("Documentation"));
        assert!(!link.is_empty());
    }

    #[test]
    fn test_partial_payload() {
        let field = Field::new("MoreInfo", r#"{"url": "/about"}"#);
        let link = LinkField::from_field(&field);
        assert_eq!(link.url(), Some("/about"));
        assert_eq!(link.text(), None);
        assert_eq!(link.target(), None);
    }

    #[test]
    fn test_malformed_payload_degrades_to_empty() {
        let field = Field::new("MoreInfo", "not json at all");
        let link = LinkField::from_field(&field);
        assert!(link.is_empty());
        assert_eq!(link.url(), None);
    }

    #[test]
    fn test_empty_value() {
        let field = Field::new("MoreInfo", "");
        assert!(LinkField::from_field(&field).is_empty());
    }
}
