//! `multi_match` query.

use serde_json::Value;

use crate::enums::{Operator, TextQueryType, ZeroTermsQuery};
use crate::mutate::put_in_field;
use crate::object::{Object, string_array};

clause! {
    /// A match query run over several fields.
    pub struct MultiMatchQuery;
}

impl MultiMatchQuery {
    pub fn new(query: impl Into<Value>) -> Self {
        MultiMatchQuery(Object::new().insert("multi_match", Object::new().insert("query", query)))
    }

    /// Fields to search, optionally boosted with `^`, e.g. `"title^3"`.
    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields = string_array(fields);
        put_in_field(&mut self.0, "multi_match", "fields", fields);
        self
    }
}

setters!(MultiMatchQuery, field "multi_match" {
    fn analyzer(&str) => "analyzer";
    fn auto_generate_synonyms_phrase_query(bool) => "auto_generate_synonyms_phrase_query";
    fn boost(f64) => "boost";
    fn cutoff_frequency(f64) => "cutoff_frequency";
    fn fuzziness(impl Into<Value>) => "fuzziness";
    fn fuzzy_rewrite(&str) => "fuzzy_rewrite";
    fn fuzzy_transpositions(bool) => "fuzzy_transpositions";
    fn lenient(bool) => "lenient";
    fn max_expansions(u64) => "max_expansions";
    fn minimum_should_match(impl Into<Value>) => "minimum_should_match";
    fn operator(Operator) => "operator";
    fn prefix_length(u64) => "prefix_length";
    fn slop(u64) => "slop";
    /// Weight of non-best fields when combining scores.
    fn tie_breaker(f64) => "tie_breaker";
    /// Execution strategy, serialized as `type`.
    fn query_type(TextQueryType) => "type";
    fn zero_terms_query(ZeroTermsQuery) => "zero_terms_query";
});
