use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{CallunaError, Result};

/// Identifier assigned to a document by the document store.
///
/// IDs are dense integers assigned in insertion order starting at 0,
/// strictly increasing and never reused.
pub type DocId = u64;

/// The value type for fields in a document.
///
/// Every variant has a text rendering so the index writer can tokenize it;
/// `Null` is the one exception and is skipped at indexing time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DataValue {
    Null,
    Bool(bool),
    Int64(i64),
    Float64(f64),

    /// Text content to be tokenized and indexed.
    Text(String),

    /// List of values (e.g. tags).
    List(Vec<String>),

    /// Date and time in UTC.
    DateTime(chrono::DateTime<chrono::Utc>),
}

impl DataValue {
    /// Returns the text value if this is a Text variant.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            DataValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer value if this is an Int64 variant.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            DataValue::Int64(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the float value if this is a Float64 variant.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            DataValue::Float64(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns the boolean value if this is a Bool variant.
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            DataValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the datetime value if this is a DateTime variant.
    pub fn as_datetime(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        match self {
            DataValue::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }

    /// Returns the list items if this is a List variant.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            DataValue::List(items) => Some(items),
            _ => None,
        }
    }
}

// --- Conversions ---

impl From<String> for DataValue {
    fn from(v: String) -> Self {
        DataValue::Text(v)
    }
}

impl From<&str> for DataValue {
    fn from(v: &str) -> Self {
        DataValue::Text(v.to_string())
    }
}

impl From<i64> for DataValue {
    fn from(v: i64) -> Self {
        DataValue::Int64(v)
    }
}

impl From<i32> for DataValue {
    fn from(v: i32) -> Self {
        DataValue::Int64(v as i64)
    }
}

impl From<f64> for DataValue {
    fn from(v: f64) -> Self {
        DataValue::Float64(v)
    }
}

impl From<f32> for DataValue {
    fn from(v: f32) -> Self {
        DataValue::Float64(v as f64)
    }
}

impl From<bool> for DataValue {
    fn from(v: bool) -> Self {
        DataValue::Bool(v)
    }
}

impl From<chrono::DateTime<chrono::Utc>> for DataValue {
    fn from(dt: chrono::DateTime<chrono::Utc>) -> Self {
        DataValue::DateTime(dt)
    }
}

impl From<Vec<String>> for DataValue {
    fn from(v: Vec<String>) -> Self {
        DataValue::List(v)
    }
}

/// A document is a collection of named fields, each containing a `DataValue`.
///
/// Documents carry no identifier of their own; the document store assigns a
/// [`DocId`] when the document is added, and the document is immutable from
/// that point on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Field data.
    pub fields: HashMap<String, DataValue>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self {
            fields: HashMap::new(),
        }
    }

    /// Build a document from a JSON object string.
    ///
    /// Strings become text fields, numbers become integer or float fields,
    /// booleans and nulls map directly, and arrays become lists with each
    /// element stringified. Nested objects are rejected.
    ///
    /// # Errors
    ///
    /// Returns `CallunaError::InvalidArgument` if `json` is not valid JSON,
    /// is not an object, or contains a nested object.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)
            .map_err(|e| CallunaError::invalid_argument(format!("invalid document JSON: {e}")))?;
        let serde_json::Value::Object(members) = value else {
            return Err(CallunaError::invalid_argument(
                "document JSON must be an object",
            ));
        };

        let mut doc = Document::new();
        for (name, member) in members {
            let value = match member {
                serde_json::Value::Null => DataValue::Null,
                serde_json::Value::Bool(b) => DataValue::Bool(b),
                serde_json::Value::Number(n) => match (n.as_i64(), n.as_f64()) {
                    (Some(i), _) => DataValue::Int64(i),
                    (None, Some(f)) => DataValue::Float64(f),
                    (None, None) => {
                        return Err(CallunaError::invalid_argument(format!(
                            "field '{name}' holds an unrepresentable number"
                        )));
                    }
                },
                serde_json::Value::String(s) => DataValue::Text(s),
                serde_json::Value::Array(items) => DataValue::List(
                    items
                        .into_iter()
                        .map(|item| match item {
                            serde_json::Value::String(s) => s,
                            other => other.to_string(),
                        })
                        .collect(),
                ),
                serde_json::Value::Object(_) => {
                    return Err(CallunaError::invalid_argument(format!(
                        "field '{name}' is a nested object, which is not supported"
                    )));
                }
            };
            doc.fields.insert(name, value);
        }
        Ok(doc)
    }

    /// Add a field to the document.
    pub fn add_field(mut self, name: impl Into<String>, value: impl Into<DataValue>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Add a text field.
    pub fn add_text(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.fields
            .insert(name.into(), DataValue::Text(text.into()));
        self
    }

    /// Add an integer field.
    pub fn add_integer(mut self, name: impl Into<String>, value: i64) -> Self {
        self.fields.insert(name.into(), DataValue::Int64(value));
        self
    }

    /// Add a float field.
    pub fn add_float(mut self, name: impl Into<String>, value: f64) -> Self {
        self.fields.insert(name.into(), DataValue::Float64(value));
        self
    }

    /// Add a boolean field.
    pub fn add_boolean(mut self, name: impl Into<String>, value: bool) -> Self {
        self.fields.insert(name.into(), DataValue::Bool(value));
        self
    }

    /// Add a datetime field.
    pub fn add_datetime(
        mut self,
        name: impl Into<String>,
        value: chrono::DateTime<chrono::Utc>,
    ) -> Self {
        self.fields.insert(name.into(), DataValue::DateTime(value));
        self
    }

    /// Add a list field (e.g. tags).
    pub fn add_list(mut self, name: impl Into<String>, items: Vec<String>) -> Self {
        self.fields.insert(name.into(), DataValue::List(items));
        self
    }

    /// Get a reference to a field's value.
    pub fn get(&self, name: &str) -> Option<&DataValue> {
        self.fields.get(name)
    }

    /// Check if the document has a field.
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Get all field names.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.keys().map(|s| s.as_str()).collect()
    }

    /// Get the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the document is empty.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fluent_builder_and_accessors() {
        let doc = Document::new()
            .add_text("title", "hello world")
            .add_integer("year", 2024)
            .add_boolean("published", true)
            .add_list("tags", vec!["search".to_string(), "index".to_string()]);

        assert_eq!(doc.len(), 4);
        assert!(doc.has_field("title"));
        assert_eq!(doc.get("title").and_then(|v| v.as_text()), Some("hello world"));
        assert_eq!(doc.get("year").and_then(|v| v.as_integer()), Some(2024));
        assert_eq!(doc.get("published").and_then(|v| v.as_boolean()), Some(true));
        assert_eq!(
            doc.get("tags").and_then(|v| v.as_list()).map(|t| t.len()),
            Some(2)
        );
        assert!(doc.get("missing").is_none());
    }

    #[test]
    fn test_from_json_object() {
        let doc = Document::from_json(
            r#"{"title": "hello", "year": 2024, "score": 1.5, "draft": false, "tags": ["a", "b"], "note": null}"#,
        )
        .unwrap();

        assert_eq!(doc.get("title"), Some(&DataValue::Text("hello".to_string())));
        assert_eq!(doc.get("year"), Some(&DataValue::Int64(2024)));
        assert_eq!(doc.get("score"), Some(&DataValue::Float64(1.5)));
        assert_eq!(doc.get("draft"), Some(&DataValue::Bool(false)));
        assert_eq!(
            doc.get("tags"),
            Some(&DataValue::List(vec!["a".to_string(), "b".to_string()]))
        );
        assert_eq!(doc.get("note"), Some(&DataValue::Null));
    }

    #[test]
    fn test_from_json_rejects_non_objects() {
        let err = Document::from_json("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, CallunaError::InvalidArgument(_)));

        let err = Document::from_json("not json at all").unwrap_err();
        assert!(matches!(err, CallunaError::InvalidArgument(_)));
    }

    #[test]
    fn test_from_json_rejects_nested_objects() {
        let err = Document::from_json(r#"{"meta": {"inner": 1}}"#).unwrap_err();
        assert!(matches!(err, CallunaError::InvalidArgument(_)));
    }
}
