//! Conditional inclusion of clauses.

/// Keep `item` only when `condition` holds.
///
/// Works with any builder, so clauses without a `new_if` constructor can
/// still be dropped from a combinator:
///
/// ```
/// use es_query_builder::condition::when;
/// use es_query_builder::query::{BoolQuery, RangeQuery};
///
/// let min_age: Option<u32> = None;
/// let query = BoolQuery::new().filter([when(RangeQuery::new("age").gte(min_age.unwrap_or(0)), min_age.is_some())]);
/// assert_eq!(query.as_object().to_json().unwrap(), r#"{"filter":[]}"#);
/// ```
pub fn when<T>(item: T, condition: bool) -> Option<T> {
    condition.then_some(item)
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;
    use crate::query::{BoolQuery, ExistsQuery, TermQuery};

    #[test]
    fn test_when() {
        assert_eq!(when(1, true), Some(1));
        assert_eq!(when(1, false), None);
    }

    #[test]
    fn test_when_inside_bool() {
        let query = BoolQuery::new().must([
            when(TermQuery::new("a", 1), true),
            when(TermQuery::new("b", 2), false),
        ]);

        assert_eq!(Value::from(query), json!({"must": [{"term": {"a": {"value": 1}}}]}));
    }

    #[test]
    fn test_when_composes_with_new_if() {
        let query = BoolQuery::new().filter([when(ExistsQuery::new_if("x", true), false)]);
        assert_eq!(Value::from(query), json!({"filter": []}));
    }
}
