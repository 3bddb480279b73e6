//! The root search request document.
//!
//! [`new_query`] wraps a clause in `{"query": ...}` and the setters below
//! add the request-level keys beside it.

use serde_json::Value;

use crate::aggregation::NamedAgg;
use crate::aggregation::reduce::put_aggs;
use crate::mutate::append_in_field;
use crate::object::{IntoClause, Object, string_array};
use crate::sort::Sort;

/// Create a root document around a query clause.
///
/// A clause that coerces to nothing gives `{"query": {}}`.
///
/// ```
/// use es_query_builder::document::new_query;
/// use es_query_builder::query::TermsQuery;
///
/// let query = new_query(TermsQuery::new("key", ["v1", "v2"]).boost(1.5));
/// assert_eq!(
///     query.to_json().unwrap(),
///     r#"{"query":{"terms":{"boost":1.5,"key":["v1","v2"]}}}"#
/// );
/// ```
pub fn new_query(clause: impl IntoClause) -> Object {
    let clause = clause
        .into_clause()
        .unwrap_or_else(|| Value::Object(Default::default()));
    Object::new().insert("query", clause)
}

impl Object {
    fn set(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.as_map_mut().insert(key.to_owned(), value.into());
        self
    }

    /// Set the query clause, unless it coerces to nothing.
    pub fn query(self, clause: impl IntoClause) -> Self {
        match clause.into_clause() {
            Some(clause) => self.set("query", clause),
            None => self,
        }
    }

    /// Count every matching hit instead of stopping at the default bound.
    pub fn track_total_hits(self, track_total_hits: bool) -> Self {
        self.set("track_total_hits", track_total_hits)
    }

    /// Maximum number of hits to return.
    pub fn size(self, size: u64) -> Self {
        self.set("size", size)
    }

    /// Offset of the first hit, written as `from`.
    pub fn from_offset(self, from: u64) -> Self {
        self.set("from", from)
    }

    /// Return no `_source` with the hits.
    pub fn source_false(self) -> Self {
        self.set("_source", false)
    }

    /// Append fields to `_source.includes`.
    pub fn source_includes<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields = string_array(fields);
        if !fields.is_empty() {
            append_in_field(self.as_map_mut(), "_source", "includes", fields);
        }
        self
    }

    /// Append fields to `_source.excludes`.
    pub fn source_excludes<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields = string_array(fields);
        if !fields.is_empty() {
            append_in_field(self.as_map_mut(), "_source", "excludes", fields);
        }
        self
    }

    /// Replace the sort list.
    pub fn sort(self, sorts: impl IntoIterator<Item = Sort>) -> Self {
        let sorts: Vec<Value> = sorts.into_iter().map(Value::from).collect();
        self.set("sort", sorts)
    }

    /// Set the top-level aggregations. A single `None` leaves them unchanged.
    pub fn aggs<I, A>(mut self, aggs: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<Option<NamedAgg>>,
    {
        put_aggs(self.as_map_mut(), aggs);
        self
    }
}
