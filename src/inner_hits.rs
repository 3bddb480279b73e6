//! Inner hits returned alongside nested query matches.

use serde_json::Value;

use crate::mutate::append_in_field;
use crate::object::{IntoClause, Object, string_array};
use crate::sort::Sort;

clause! {
    /// Options for the nested documents that caused a parent to match.
    pub struct InnerHits;
}

impl Default for InnerHits {
    fn default() -> Self {
        Self::new()
    }
}

impl InnerHits {
    pub fn new() -> Self {
        InnerHits(Object::new())
    }

    fn set(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.as_map_mut().insert(key.to_owned(), value.into());
        self
    }

    pub fn explain(self, explain: bool) -> Self {
        self.set("explain", explain)
    }

    /// Offset of the first inner hit, written as `from`.
    pub fn from_offset(self, from: u64) -> Self {
        self.set("from", from)
    }

    pub fn ignore_unmapped(self, ignore_unmapped: bool) -> Self {
        self.set("ignore_unmapped", ignore_unmapped)
    }

    pub fn size(self, size: u64) -> Self {
        self.set("size", size)
    }

    /// Restrict inner hits to nested documents matching `query`.
    pub fn query(self, query: impl IntoClause) -> Self {
        match query.into_clause() {
            Some(clause) => self.set("query", clause),
            None => self,
        }
    }

    /// Name under which the inner hits appear in the response.
    pub fn name(self, name: &str) -> Self {
        self.set("name", name)
    }

    pub fn seq_no_primary_term(self, seq_no_primary_term: bool) -> Self {
        self.set("seq_no_primary_term", seq_no_primary_term)
    }

    /// Replace the sort order of inner hits.
    pub fn sort(self, sorts: impl IntoIterator<Item = Sort>) -> Self {
        let sorts: Vec<Value> = sorts.into_iter().map(Value::from).collect();
        self.set("sort", sorts)
    }

    pub fn source_false(self) -> Self {
        self.set("_source", false)
    }

    pub fn source_includes<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields = string_array(fields);
        if !fields.is_empty() {
            append_in_field(self.0.as_map_mut(), "_source", "includes", fields);
        }
        self
    }

    pub fn source_excludes<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields = string_array(fields);
        if !fields.is_empty() {
            append_in_field(self.0.as_map_mut(), "_source", "excludes", fields);
        }
        self
    }

    pub fn stored_fields<I, S>(self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields = string_array(fields);
        self.set("stored_fields", fields)
    }

    pub fn track_scores(self, track_scores: bool) -> Self {
        self.set("track_scores", track_scores)
    }

    pub fn version(self, version: bool) -> Self {
        self.set("version", version)
    }
}
