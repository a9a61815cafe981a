//! Typed view over a date field.

use super::Field;
use chrono::{DateTime, Utc};

/// View over a field holding an RFC 3339 timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateField {
    raw: String,
}

impl DateField {
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

    /// Parse the stored timestamp. `None` when the raw value is empty or not
    /// a valid RFC 3339 timestamp.
    #[must_use]
    pub fn date_time(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.raw)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    #[must_use]
    pub fn has_value(&self) -> bool {
        !self.raw.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_parses_rfc3339() {
        let field = Field::new("ReleaseDate", "2024-06-15T12:30:00Z");
        let date = DateField::from_field(&field);
        let parsed = date.date_time().unwrap();
        assert_eq!(parsed.year(), 2024);
        assert_eq!(parsed.month(), 6);
        assert_eq!(parsed.day(), 15);
    }

    #[test]
    fn test_parses_offset_timestamp() {
        let field = Field::new("ReleaseDate", "2024-06-15T14:30:00+02:00");
        let date = DateField::from_field(&field);
        let parsed = date.date_time().unwrap();
        // Normalized to UTC
        assert_eq!(parsed.to_rfc3339(), "2024-06-15T12:30:00+00:00");
    }

    #[test]
    fn test_empty_value() {
        let field = Field::new("ReleaseDate", "");
        let date = DateField::from_field(&field);
        assert!(!date.has_value());
        assert!(date.date_time().is_none());
    }

    #[test]
    fn test_garbage_value() {
        let field = Field::new("ReleaseDate", "next tuesday");
        let date = DateField::from_field(&field);
        assert!(date.has_value());
        assert!(date.date_time().is_none());
    }
}
