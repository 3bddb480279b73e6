//! The document value every builder wraps.
//!
//! An [`Object`] is a JSON object held as a `serde_json` map. Keys are kept
//! in sorted order, so two documents built the same way always serialize to
//! the same bytes, and "the first object-valued entry" is well defined.

use std::ops::Deref;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::RenderOptions;
use crate::error::{QueryBuilderError, Result};

/// An ordered sequence of clause values or scalars.
pub type Array = Vec<Value>;

/// A JSON object used as a query, aggregation, sort or settings body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Object(Map<String, Value>);

impl Object {
    /// Create an empty document.
    pub fn new() -> Self {
        Object(Map::new())
    }

    /// Parse a document from JSON text.
    ///
    /// Fails when the text is not valid JSON or holds something other than
    /// an object at the top level.
    pub fn from_json(text: &str) -> Result<Self> {
        match serde_json::from_str::<Value>(text)? {
            Value::Object(map) => Ok(Object(map)),
            other => Err(QueryBuilderError::not_an_object(format!(
                "expected a JSON object, found {}",
                kind_of(&other)
            ))),
        }
    }

    /// Insert or overwrite a top-level key.
    pub fn insert<K: Into<String>, V: Into<Value>>(mut self, key: K, value: V) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Borrow the underlying map.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Mutably borrow the underlying map.
    pub fn as_map_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.0
    }

    /// Consume the document and return the underlying map.
    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    /// Serialize to compact JSON.
    pub fn to_json(&self) -> Result<String> {
        self.render(&RenderOptions::compact())
    }

    /// Serialize to indented JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        self.render(&RenderOptions::pretty())
    }

    /// Serialize according to `options`.
    pub fn render(&self, options: &RenderOptions) -> Result<String> {
        if !options.pretty {
            return Ok(serde_json::to_string(self)?);
        }

        let indent = " ".repeat(options.indent);
        let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
        let mut buffer = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        self.serialize(&mut serializer)?;

        String::from_utf8(buffer).map_err(|e| QueryBuilderError::other(e.to_string()))
    }
}

impl Deref for Object {
    type Target = Map<String, Value>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Map<String, Value>> for Object {
    fn from(map: Map<String, Value>) -> Self {
        Object(map)
    }
}

impl From<Object> for Value {
    fn from(object: Object) -> Self {
        Value::Object(object.0)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Object {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Object(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl IntoIterator for Object {
    type Item = (String, Value);
    type IntoIter = serde_json::map::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Collect strings into JSON string values.
pub(crate) fn string_array<I, S>(items: I) -> Vec<Value>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    items.into_iter().map(|s| Value::String(s.into())).collect()
}

pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Coerce a value into something a combinator can hold.
///
/// Values that coerce to `None` are dropped by the combinators instead of
/// being serialized as `null`, which is what lets conditional constructors
/// like [`TermQuery::new_if`](crate::query::TermQuery::new_if) be passed
/// inline.
pub trait IntoClause {
    /// Produce the clause value, or `None` when there is nothing to add.
    fn into_clause(self) -> Option<Value>;
}

impl IntoClause for Object {
    fn into_clause(self) -> Option<Value> {
        Some(self.into())
    }
}

impl IntoClause for Value {
    fn into_clause(self) -> Option<Value> {
        match self {
            Value::Null => None,
            value => Some(value),
        }
    }
}

impl<T: IntoClause> IntoClause for Option<T> {
    fn into_clause(self) -> Option<Value> {
        self.and_then(IntoClause::into_clause)
    }
}

/// Coerce every item and keep the ones that produced a value.
pub(crate) fn coerce_all<I, C>(items: I) -> impl Iterator<Item = Value>
where
    I: IntoIterator<Item = C>,
    C: IntoClause,
{
    items.into_iter().filter_map(|item| {
        let clause = item.into_clause();
        if clause.is_none() {
            tracing::trace!("dropping clause that coerced to nothing");
        }
        clause
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_new_object_is_empty() {
        let a = Object::new();
        let b = Object::new();

        assert!(a.is_empty());
        assert_eq!(a, b);
        assert_eq!(a.to_json().unwrap(), "{}");
    }

    #[test]
    fn test_keys_serialize_sorted() {
        let object = Object::new()
            .insert("size", 10)
            .insert("from", 0)
            .insert("query", json!({}));

        assert_eq!(
            object.to_json().unwrap(),
            r#"{"from":0,"query":{},"size":10}"#
        );
    }

    #[test]
    fn test_from_json_round_trip() {
        let object = Object::from_json(r#"{"query":{"match_all":{}}}"#).unwrap();
        assert_eq!(object["query"], json!({"match_all": {}}));
    }

    #[test]
    fn test_from_json_rejects_non_objects() {
        let error = Object::from_json("[1, 2]").unwrap_err();
        assert!(matches!(error, QueryBuilderError::NotAnObject(_)));
        assert!(error.to_string().contains("an array"));

        let error = Object::from_json("{").unwrap_err();
        assert!(matches!(error, QueryBuilderError::Json(_)));
    }

    #[test]
    fn test_from_map() {
        let mut map = Map::new();
        map.insert("size".to_owned(), json!(10));

        let object = Object::from(map).from_offset(20);
        assert_eq!(Value::from(object), json!({"from": 20, "size": 10}));
    }

    #[test]
    fn test_render_pretty_with_indent() {
        let object = Object::new().insert("size", 1);
        let options = RenderOptions::pretty().with_indent(4);

        assert_eq!(object.render(&options).unwrap(), "{\n    \"size\": 1\n}");
        assert_eq!(object.to_json_pretty().unwrap(), "{\n  \"size\": 1\n}");
    }

    #[test]
    fn test_into_clause_drops_nothing_values() {
        assert_eq!(Value::Null.into_clause(), None);
        assert_eq!(None::<Object>.into_clause(), None);
        assert_eq!(Some(Object::new()).into_clause(), Some(json!({})));
        assert_eq!(json!("raw").into_clause(), Some(json!("raw")));
    }

    #[test]
    fn test_coerce_all_filters_none() {
        let items = vec![Some(json!({"a": 1})), None, Some(Value::Null), Some(json!(2))];
        let coerced: Vec<Value> = coerce_all(items).collect();

        assert_eq!(coerced, vec![json!({"a": 1}), json!(2)]);
    }
}
