//! `query_string` and `simple_query_string`.
//!
//! Neither has a dynamic field key, so setters write into the first (and
//! only) object of the clause.

use serde_json::Value;

use crate::enums::{Operator, TextQueryType};
use crate::mutate::put_in_first_object_field;
use crate::object::{Object, string_array};

clause! {
    /// Lucene query syntax: `{"query_string": {"query": "title:(quick OR brown)"}}`.
    pub struct QueryStringQuery;
}

impl QueryStringQuery {
    pub fn new(query: impl Into<Value>) -> Self {
        QueryStringQuery(Object::new().insert("query_string", Object::new().insert("query", query)))
    }

    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        put_in_first_object_field(&mut self.0, "fields", string_array(fields));
        self
    }
}

setters!(QueryStringQuery, first_object {
    fn default_field(&str) => "default_field";
    fn allow_leading_wildcard(bool) => "allow_leading_wildcard";
    fn analyze_wildcard(bool) => "analyze_wildcard";
    fn analyzer(&str) => "analyzer";
    fn auto_generate_synonyms_phrase_query(bool) => "auto_generate_synonyms_phrase_query";
    fn boost(f64) => "boost";
    fn default_operator(Operator) => "default_operator";
    fn enable_position_increments(bool) => "enable_position_increments";
    fn fuzziness(impl Into<Value>) => "fuzziness";
    fn fuzzy_max_expansions(u64) => "fuzzy_max_expansions";
    fn fuzzy_prefix_length(u64) => "fuzzy_prefix_length";
    fn fuzzy_transpositions(bool) => "fuzzy_transpositions";
    fn lenient(bool) => "lenient";
    fn max_determinized_states(u64) => "max_determinized_states";
    fn minimum_should_match(impl Into<Value>) => "minimum_should_match";
    fn quote_analyzer(&str) => "quote_analyzer";
    fn phrase_slop(u64) => "phrase_slop";
    fn quote_field_suffix(&str) => "quote_field_suffix";
    fn rewrite(&str) => "rewrite";
    fn time_zone(&str) => "time_zone";
    fn escape(bool) => "escape";
    fn fuzzy_rewrite(&str) => "fuzzy_rewrite";
    fn tie_breaker(f64) => "tie_breaker";
    fn query_type(TextQueryType) => "type";
});

clause! {
    /// Forgiving query syntax that never fails on malformed input.
    pub struct SimpleQueryStringQuery;
}

impl SimpleQueryStringQuery {
    pub fn new(query: impl Into<Value>) -> Self {
        SimpleQueryStringQuery(
            Object::new().insert("simple_query_string", Object::new().insert("query", query)),
        )
    }

    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        put_in_first_object_field(&mut self.0, "fields", string_array(fields));
        self
    }
}

setters!(SimpleQueryStringQuery, first_object {
    fn analyzer(&str) => "analyzer";
    fn default_operator(Operator) => "default_operator";
    fn minimum_should_match(impl Into<Value>) => "minimum_should_match";
    fn fuzzy_max_expansions(u64) => "fuzzy_max_expansions";
    fn fuzzy_prefix_length(u64) => "fuzzy_prefix_length";
    fn fuzzy_transpositions(bool) => "fuzzy_transpositions";
    fn analyze_wildcard(bool) => "analyze_wildcard";
    fn auto_generate_synonyms_phrase_query(bool) => "auto_generate_synonyms_phrase_query";
    /// Enabled operators, e.g. `"AND|OR|PREFIX"`.
    fn flags(&str) => "flags";
    fn lenient(bool) => "lenient";
    fn quote_field_suffix(&str) => "quote_field_suffix";
});
