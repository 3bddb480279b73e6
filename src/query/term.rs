//! Term-level queries: `term`, `terms` and `terms_set`.

use serde_json::Value;

use crate::object::Object;
use crate::script::Script;

clause! {
    /// Exact match on a single value: `{"term": {"<field>": {"value": ...}}}`.
    ///
    /// Like every term-level query the value is not analyzed.
    pub struct TermQuery;
}

impl TermQuery {
    /// Create a new term query.
    pub fn new(field: &str, value: impl Into<Value>) -> Self {
        TermQuery(Object::new().insert(
            "term",
            Object::new().insert(field, Object::new().insert("value", value)),
        ))
    }

    /// Create a term query only when `condition` holds.
    pub fn new_if(field: &str, value: impl Into<Value>, condition: bool) -> Option<Self> {
        condition.then(|| Self::new(field, value))
    }

    /// Create a term query only when `predicate(field, &value)` holds.
    pub fn new_when<V, F>(field: &str, value: V, predicate: F) -> Option<Self>
    where
        V: Into<Value>,
        F: FnOnce(&str, &V) -> bool,
    {
        if predicate(field, &value) {
            Some(Self::new(field, value))
        } else {
            None
        }
    }
}

setters!(TermQuery, first_child "term" {
    fn case_insensitive(bool) => "case_insensitive";
    /// Relevance multiplier.
    fn boost(f64) => "boost";
});

clause! {
    /// Match any of several exact values: `{"terms": {"<field>": [...]}}`.
    pub struct TermsQuery;
}

impl TermsQuery {
    /// Create a new terms query from any list of values.
    pub fn new<I, V>(field: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        TermsQuery(Object::new().insert("terms", Object::new().insert(field, values)))
    }

    pub fn new_if<I, V>(field: &str, values: I, condition: bool) -> Option<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        condition.then(|| Self::new(field, values))
    }

    /// Create a terms query only when `predicate(field, &values)` holds.
    pub fn new_when<V, F>(field: &str, values: Vec<V>, predicate: F) -> Option<Self>
    where
        V: Into<Value>,
        F: FnOnce(&str, &[V]) -> bool,
    {
        if predicate(field, &values) {
            Some(Self::new(field, values))
        } else {
            None
        }
    }
}

setters!(TermsQuery, field "terms" {
    fn boost(f64) => "boost";
    fn name(&str) => "_name";
});

clause! {
    /// Match documents containing a minimum number of the given values.
    pub struct TermsSetQuery;
}

impl TermsSetQuery {
    pub fn new<I, V>(field: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        TermsSetQuery(Object::new().insert(
            "terms_set",
            Object::new().insert(field, Object::new().insert("terms", values)),
        ))
    }
}

setters!(TermsSetQuery, first_child "terms_set" {
    fn boost(f64) => "boost";
    /// Numeric field holding the number of terms that must match.
    fn minimum_should_match_field(&str) => "minimum_should_match_field";
    /// Script computing the number of terms that must match.
    fn minimum_should_match_script(Script) => "minimum_should_match_script";
});
