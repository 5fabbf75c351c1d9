//! Adapters that pull the post text out of source-specific records.
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use socialnorm::source::{FieldExtractor, TextExtractor};
//!
//! let tweet = json!({"id": 1, "text": "hello #world"});
//! assert_eq!(FieldExtractor::twitter().extract(&tweet).unwrap(), "hello #world");
//!
//! let post = json!({"title": "t", "fulltext": "long read"});
//! assert_eq!(FieldExtractor::reddit().extract(&post).unwrap(), "long read");
//! ```

use std::str::FromStr;

use serde_json::Value;

use crate::error::{NormalizeError, Result};

/// Extracts the raw text of one record.
pub trait TextExtractor: Send + Sync {
    fn extract<'a>(&self, record: &'a Value) -> Result<&'a str>;

    fn name(&self) -> &'static str;
}

/// Reads the text from one top-level string field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldExtractor {
    field: String,
    name: &'static str,
}

impl FieldExtractor {
    pub fn new<S: Into<String>>(field: S) -> Self {
        FieldExtractor {
            field: field.into(),
            name: "field",
        }
    }

    /// Tweets keep their body in `text`.
    pub fn twitter() -> Self {
        FieldExtractor {
            field: "text".to_string(),
            name: "twitter",
        }
    }

    /// Reddit dumps keep title and body together in `fulltext`.
    pub fn reddit() -> Self {
        FieldExtractor {
            field: "fulltext".to_string(),
            name: "reddit",
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }
}

impl FromStr for FieldExtractor {
    type Err = NormalizeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "twitter" => Ok(Self::twitter()),
            "reddit" => Ok(Self::reddit()),
            _ => Err(NormalizeError::invalid_config("source", s)),
        }
    }
}

impl TextExtractor for FieldExtractor {
    fn extract<'a>(&self, record: &'a Value) -> Result<&'a str> {
        record
            .get(&self.field)
            .and_then(Value::as_str)
            .ok_or_else(|| NormalizeError::missing_field(self.field.clone()))
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_missing_field() {
        let record = json!({"fulltext": "body"});
        let err = FieldExtractor::twitter().extract(&record).unwrap_err();
        assert!(matches!(err, NormalizeError::MissingField(ref field) if field == "text"));
        assert_eq!(err.to_string(), "Missing field: text");
    }

    #[test]
    fn test_non_string_field_is_missing() {
        let record = json!({"text": 42});
        assert!(FieldExtractor::twitter().extract(&record).is_err());
    }

    #[test]
    fn test_custom_field() {
        let record = json!({"body": "hi"});
        let extractor = FieldExtractor::new("body");
        assert_eq!(extractor.extract(&record).unwrap(), "hi");
        assert_eq!(extractor.field(), "body");
        assert_eq!(extractor.name(), "field");
    }

    #[test]
    fn test_parse_source() {
        assert_eq!(
            "Reddit".parse::<FieldExtractor>().unwrap(),
            FieldExtractor::reddit()
        );
        assert!("mastodon".parse::<FieldExtractor>().unwrap_err().is_config_error());
    }
}
