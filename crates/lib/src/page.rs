//! # Page Record
//!
//! The decoded form of a page summary. Only `title` and `extract` are kept;
//! every other field the API sends is dropped during decoding.

use crate::errors::FetchError;
use serde_json::{Map, Value};

/// A Wikipedia article summary. Immutable once decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    title: String,
    extract: String,
}

impl Page {
    pub fn new(title: impl Into<String>, extract: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            extract: extract.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn extract(&self) -> &str {
        &self.extract
    }

    /// Parses a raw response body and decodes it.
    pub fn from_body(body: &str) -> Result<Self, FetchError> {
        let value: Value = serde_json::from_str(body)
            .map_err(|e| FetchError::Validation(format!("response is not valid JSON: {e}")))?;
        Self::from_json(value)
    }

    /// Decodes a JSON value into a page.
    ///
    /// The value must be an object holding string `title` and `extract`
    /// fields. Anything else fails with [`FetchError::Validation`]; unknown
    /// fields are ignored.
    pub fn from_json(value: Value) -> Result<Self, FetchError> {
        let mut fields = match value {
            Value::Object(fields) => fields,
            other => {
                return Err(FetchError::Validation(format!(
                    "expected a JSON object, found {}",
                    kind_of(&other)
                )))
            }
        };
        let title = take_string(&mut fields, "title")?;
        let extract = take_string(&mut fields, "extract")?;
        Ok(Self { title, extract })
    }
}

impl TryFrom<Value> for Page {
    type Error = FetchError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Page::from_json(value)
    }
}

fn take_string(fields: &mut Map<String, Value>, name: &str) -> Result<String, FetchError> {
    match fields.remove(name) {
        Some(Value::String(s)) => Ok(s),
        Some(other) => Err(FetchError::Validation(format!(
            "field `{name}` must be a string, found {}",
            kind_of(&other)
        ))),
        None => Err(FetchError::Validation(format!("missing field `{name}`"))),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_accepts_title_and_extract() {
        let page = Page::from_json(json!({
            "title": "Lorem Ipsum",
            "extract": "Lorem ipsum dolor sit amet"
        }))
        .unwrap();

        assert_eq!(page.title(), "Lorem Ipsum");
        assert_eq!(page.extract(), "Lorem ipsum dolor sit amet");
    }

    #[test]
    fn test_from_json_ignores_unknown_fields() {
        let page = Page::from_json(json!({
            "title": "T",
            "extract": "E",
            "thumbnail": { "source": "https://upload.wikimedia.org/x.png", "width": 320 },
            "pageid": 42
        }))
        .unwrap();

        assert_eq!(page, Page::new("T", "E"));
    }

    #[test]
    fn test_from_json_rejects_null() {
        let err = Page::from_json(Value::Null).unwrap_err();
        assert_eq!(
            err,
            FetchError::Validation("expected a JSON object, found null".to_string())
        );
    }

    #[test]
    fn test_from_json_rejects_non_object_top_level() {
        let err = Page::try_from(json!(["title", "extract"])).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("found an array"));
    }

    #[test]
    fn test_from_json_names_missing_field() {
        let err = Page::from_json(json!({ "title": "Only a title" })).unwrap_err();
        assert_eq!(
            err,
            FetchError::Validation("missing field `extract`".to_string())
        );
    }

    #[test]
    fn test_from_json_names_mistyped_field() {
        let err = Page::from_json(json!({ "title": 7, "extract": "E" })).unwrap_err();
        assert_eq!(
            err,
            FetchError::Validation("field `title` must be a string, found a number".to_string())
        );
    }

    #[test]
    fn test_from_body_rejects_malformed_json() {
        let err = Page::from_body("<html>Service Unavailable</html>").unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("not valid JSON"));
    }
}
