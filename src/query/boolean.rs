//! Boolean query combining other clauses.

use serde_json::Value;

use crate::mutate::append_to_array;
use crate::object::{IntoClause, Object, coerce_all};

/// The section of a bool query a clause is added to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occur {
    /// Must match, does not contribute to the score.
    Filter,
    /// Must match (equivalent to AND).
    Must,
    /// Must not match (equivalent to NOT).
    MustNot,
    /// Should match (equivalent to OR).
    Should,
}

impl Occur {
    /// Key of the section inside the bool body.
    pub fn as_key(&self) -> &'static str {
        match self {
            Occur::Filter => "filter",
            Occur::Must => "must",
            Occur::MustNot => "must_not",
            Occur::Should => "should",
        }
    }
}

clause! {
    /// A boolean query.
    ///
    /// Unlike the other clauses the builder holds the bool *body*, the map of
    /// sections; it is wrapped in `{"bool": ...}` when passed to a
    /// combinator or to [`new_query`](crate::document::new_query).
    ///
    /// Section setters append. Items that coerce to nothing, such as a
    /// conditional constructor that returned `None`, are dropped.
    ///
    /// ```
    /// use es_query_builder::document::new_query;
    /// use es_query_builder::query::{BoolQuery, TermQuery};
    ///
    /// let query = new_query(
    ///     BoolQuery::new()
    ///         .filter([TermQuery::new_if("a", "b", false), TermQuery::new_if("c", "d", true)]),
    /// );
    /// assert_eq!(
    ///     query.to_json().unwrap(),
    ///     r#"{"query":{"bool":{"filter":[{"term":{"c":{"value":"d"}}}]}}}"#
    /// );
    /// ```
    pub struct BoolQuery;
}

impl Default for BoolQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl BoolQuery {
    /// Create an empty bool query.
    pub fn new() -> Self {
        BoolQuery(Object::new())
    }

    fn set(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.as_map_mut().insert(key.to_owned(), value.into());
        self
    }

    /// Number or percentage of `should` clauses that must match.
    pub fn minimum_should_match(self, minimum_should_match: impl Into<Value>) -> Self {
        self.set("minimum_should_match", minimum_should_match)
    }

    /// Whether a body holding only `must_not` clauses still matches all documents first.
    pub fn adjust_pure_negative(self, adjust_pure_negative: bool) -> Self {
        self.set("adjust_pure_negative", adjust_pure_negative)
    }

    /// Relevance multiplier.
    pub fn boost(self, boost: f64) -> Self {
        self.set("boost", boost)
    }

    /// Append clauses to the given section.
    ///
    /// The section array is created even when every item is dropped.
    pub fn add<I, C>(mut self, occur: Occur, items: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: IntoClause,
    {
        append_to_array(self.0.as_map_mut(), occur.as_key(), coerce_all(items));
        self
    }

    /// Append clauses to `filter`, see [`Occur::Filter`].
    pub fn filter<I, C>(self, items: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: IntoClause,
    {
        self.add(Occur::Filter, items)
    }

    /// Append clauses to `must`.
    pub fn must<I, C>(self, items: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: IntoClause,
    {
        self.add(Occur::Must, items)
    }

    /// Append clauses to `must_not`.
    pub fn must_not<I, C>(self, items: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: IntoClause,
    {
        self.add(Occur::MustNot, items)
    }

    /// Append clauses to `should`.
    pub fn should<I, C>(self, items: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: IntoClause,
    {
        self.add(Occur::Should, items)
    }
}

impl IntoClause for BoolQuery {
    fn into_clause(self) -> Option<Value> {
        Some(Object::new().insert("bool", self.0).into())
    }
}
