//! `constant_score` query.

use crate::object::{IntoClause, Object};

clause! {
    /// Wrap a filter and give every match the same score.
    pub struct ConstantScoreQuery;
}

impl ConstantScoreQuery {
    /// Returns `None` when `filter` coerces to nothing, so the result can be
    /// passed straight into a bool section.
    pub fn new(filter: impl IntoClause) -> Option<Self> {
        let filter = filter.into_clause()?;
        Some(ConstantScoreQuery(Object::new().insert(
            "constant_score",
            Object::new().insert("filter", filter),
        )))
    }
}

setters!(ConstantScoreQuery, field "constant_score" {
    fn name(&str) => "_name";
    fn boost(f64) => "boost";
});

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;
    use crate::query::{BoolQuery, TermQuery};

    #[test]
    fn test_constant_score_query() {
        let query = ConstantScoreQuery::new(TermQuery::new("user", "kim"))
            .map(|q| q.boost(1.2).name("by_user"));

        assert_eq!(
            query.map(Value::from),
            Some(json!({
                "constant_score": {
                    "filter": {"term": {"user": {"value": "kim"}}},
                    "boost": 1.2,
                    "_name": "by_user"
                }
            }))
        );
    }

    #[test]
    fn test_constant_score_without_filter() {
        assert!(ConstantScoreQuery::new(TermQuery::new_if("a", "b", false)).is_none());
        assert!(ConstantScoreQuery::new(Value::Null).is_none());
    }

    #[test]
    fn test_constant_score_drops_out_of_bool() {
        let query = BoolQuery::new().filter([ConstantScoreQuery::new(None::<TermQuery>)]);
        assert_eq!(Value::from(query), json!({"filter": []}));
    }
}
