//! `nested` query.

use serde_json::Value;

use crate::enums::ScoreMode;
use crate::inner_hits::InnerHits;
use crate::object::{IntoClause, Object};

clause! {
    /// Run a query against nested objects under `path`.
    ///
    /// ```
    /// use es_query_builder::query::{NestedQuery, TermQuery};
    ///
    /// let query = NestedQuery::new("items", TermQuery::new("items.sku", "A-1"));
    /// assert_eq!(
    ///     query.as_object().to_json().unwrap(),
    ///     r#"{"nested":{"path":"items","query":{"term":{"items.sku":{"value":"A-1"}}}}}"#
    /// );
    /// ```
    pub struct NestedQuery;
}

impl NestedQuery {
    /// A query that coerces to nothing leaves an empty `query` object.
    pub fn new(path: &str, query: impl IntoClause) -> Self {
        let query = query
            .into_clause()
            .unwrap_or_else(|| Value::Object(Default::default()));
        NestedQuery(Object::new().insert(
            "nested",
            Object::new().insert("query", query).insert("path", path),
        ))
    }
}

setters!(NestedQuery, field "nested" {
    fn inner_hits(InnerHits) => "inner_hits";
    /// How scores of matching children are combined into the parent score.
    fn score_mode(ScoreMode) => "score_mode";
    fn ignore_unmapped(bool) => "ignore_unmapped";
});
