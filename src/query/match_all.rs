//! `match_all` and `match_none`.

use crate::object::Object;

clause! {
    /// Matches every document, each with a score of 1.0 (or `boost`).
    pub struct MatchAllQuery;
}

impl Default for MatchAllQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchAllQuery {
    pub fn new() -> Self {
        MatchAllQuery(Object::new().insert("match_all", Object::new()))
    }
}

setters!(MatchAllQuery, field "match_all" {
    fn boost(f64) => "boost";
    fn name(&str) => "_name";
});

clause! {
    /// Matches no documents.
    pub struct MatchNoneQuery;
}

impl Default for MatchNoneQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchNoneQuery {
    pub fn new() -> Self {
        MatchNoneQuery(Object::new().insert("match_none", Object::new()))
    }
}

setters!(MatchNoneQuery, field "match_none" {
    fn boost(f64) => "boost";
    fn name(&str) => "_name";
});
