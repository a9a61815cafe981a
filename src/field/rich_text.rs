//! Typed view over a rich-text field.

use super::Field;

/// View over a field holding raw HTML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RichTextField {
    html: String,
}

impl RichTextField {
    #[must_use]
    pub fn from_field(field: &Field) -> Self {
        Self {
            html: field.value().to_string(),
        }
    }

    /// The stored markup, unprocessed
    #[must_use]
    pub fn as_html(&self) -> &str {
        &self.html
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.html.is_empty()
    }
}
