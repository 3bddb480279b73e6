//! Full-text queries keyed by a field name: `match`, `match_phrase`,
//! `match_phrase_prefix` and `match_bool_prefix`.
//!
//! All four share the shape `{"<kind>": {"<field>": {"query": ...}}}` and
//! their setters write next to `query`.

use serde_json::Value;

use crate::enums::{Operator, ZeroTermsQuery};
use crate::object::Object;

fn field_query(kind: &str, field: &str, query: impl Into<Value>) -> Object {
    Object::new().insert(
        kind,
        Object::new().insert(field, Object::new().insert("query", query)),
    )
}

clause! {
    /// Standard analyzed full-text query.
    ///
    /// ```
    /// use es_query_builder::enums::Operator;
    /// use es_query_builder::query::MatchQuery;
    ///
    /// let query = MatchQuery::new("title", "rust search").operator(Operator::And);
    /// assert_eq!(
    ///     query.as_object().to_json().unwrap(),
    ///     r#"{"match":{"title":{"operator":"and","query":"rust search"}}}"#
    /// );
    /// ```
    pub struct MatchQuery;
}

impl MatchQuery {
    pub fn new(field: &str, query: impl Into<Value>) -> Self {
        MatchQuery(field_query("match", field, query))
    }
}

setters!(MatchQuery, first_child "match" {
    fn operator(Operator) => "operator";
    fn boost(f64) => "boost";
    fn cutoff_frequency(f64) => "cutoff_frequency";
    /// Edit distance, either a number or `"AUTO"`.
    fn fuzziness(impl Into<Value>) => "fuzziness";
    fn fuzzy_rewrite(&str) => "fuzzy_rewrite";
    fn fuzzy_transpositions(bool) => "fuzzy_transpositions";
    fn lenient(bool) => "lenient";
    fn max_expansions(u64) => "max_expansions";
    fn prefix_length(u64) => "prefix_length";
    fn analyzer(&str) => "analyzer";
    fn minimum_should_match(impl Into<Value>) => "minimum_should_match";
    fn auto_generate_synonyms_phrase_query(bool) => "auto_generate_synonyms_phrase_query";
    fn zero_terms_query(ZeroTermsQuery) => "zero_terms_query";
});

clause! {
    /// Match an exact phrase, optionally allowing `slop` positions between terms.
    pub struct MatchPhraseQuery;
}

impl MatchPhraseQuery {
    pub fn new(field: &str, query: impl Into<Value>) -> Self {
        MatchPhraseQuery(field_query("match_phrase", field, query))
    }
}

setters!(MatchPhraseQuery, first_child "match_phrase" {
    fn analyzer(&str) => "analyzer";
    fn boost(f64) => "boost";
    fn zero_terms_query(ZeroTermsQuery) => "zero_terms_query";
    fn slop(u64) => "slop";
});

clause! {
    /// Phrase match where the last term is treated as a prefix.
    pub struct MatchPhrasePrefixQuery;
}

impl MatchPhrasePrefixQuery {
    pub fn new(field: &str, query: impl Into<Value>) -> Self {
        MatchPhrasePrefixQuery(field_query("match_phrase_prefix", field, query))
    }
}

setters!(MatchPhrasePrefixQuery, first_child "match_phrase_prefix" {
    fn analyzer(&str) => "analyzer";
    fn boost(f64) => "boost";
    /// Maximum number of terms the final prefix expands to.
    fn max_expansions(u64) => "max_expansions";
    fn zero_terms_query(ZeroTermsQuery) => "zero_terms_query";
    fn slop(u64) => "slop";
});

clause! {
    /// Analyze the input and build a bool query of terms plus a trailing prefix.
    pub struct MatchBoolPrefixQuery;
}

impl MatchBoolPrefixQuery {
    pub fn new(field: &str, query: impl Into<Value>) -> Self {
        MatchBoolPrefixQuery(field_query("match_bool_prefix", field, query))
    }
}

setters!(MatchBoolPrefixQuery, first_child "match_bool_prefix" {
    fn analyzer(&str) => "analyzer";
    fn minimum_should_match(impl Into<Value>) => "minimum_should_match";
    fn operator(Operator) => "operator";
    fn boost(f64) => "boost";
    fn fuzziness(impl Into<Value>) => "fuzziness";
    fn fuzzy_rewrite(&str) => "fuzzy_rewrite";
    fn fuzzy_transpositions(bool) => "fuzzy_transpositions";
    fn max_expansions(u64) => "max_expansions";
    fn prefix_length(u64) => "prefix_length";
});
