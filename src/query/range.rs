//! Range query.

use serde_json::Value;

use crate::enums::RangeRelation;
use crate::mutate::{put_in_first_child_field, remove_in_first_child_field};
use crate::object::Object;

clause! {
    /// Matches values within bounds: `{"range": {"<field>": {"gte": ..., "lt": ...}}}`.
    ///
    /// `gt`/`gte` are mutually exclusive, as are `lt`/`lte`. Setting one
    /// removes the other.
    ///
    /// ```
    /// use es_query_builder::query::RangeQuery;
    ///
    /// let query = RangeQuery::new("age").gte(10).gt(20);
    /// assert_eq!(
    ///     query.as_object().to_json().unwrap(),
    ///     r#"{"range":{"age":{"gt":20}}}"#
    /// );
    /// ```
    pub struct RangeQuery;
}

impl RangeQuery {
    /// Create an unbounded range on `field`.
    pub fn new(field: &str) -> Self {
        RangeQuery(Object::new().insert("range", Object::new().insert(field, Object::new())))
    }

    fn bound(mut self, key: &str, value: impl Into<Value>, excludes: &str) -> Self {
        put_in_first_child_field(&mut self.0, "range", key, value);
        remove_in_first_child_field(&mut self.0, "range", excludes);
        self
    }

    /// Strictly less than.
    pub fn lt(self, value: impl Into<Value>) -> Self {
        self.bound("lt", value, "lte")
    }

    /// Less than or equal.
    pub fn lte(self, value: impl Into<Value>) -> Self {
        self.bound("lte", value, "lt")
    }

    /// Strictly greater than.
    pub fn gt(self, value: impl Into<Value>) -> Self {
        self.bound("gt", value, "gte")
    }

    /// Greater than or equal.
    pub fn gte(self, value: impl Into<Value>) -> Self {
        self.bound("gte", value, "gt")
    }
}

setters!(RangeQuery, first_child "range" {
    /// Date format used to parse the bounds.
    fn format(&str) => "format";
    fn boost(f64) => "boost";
    fn from(impl Into<Value>) => "from";
    fn to(impl Into<Value>) => "to";
    fn relation(RangeRelation) => "relation";
    fn time_zone(&str) => "time_zone";
});

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_empty_range() {
        assert_eq!(
            Value::from(RangeQuery::new("age")),
            json!({"range": {"age": {}}})
        );
    }

    #[test]
    fn test_lower_bounds_exclude_each_other() {
        let query = RangeQuery::new("age").gte(10).gt(20);
        assert_eq!(Value::from(query), json!({"range": {"age": {"gt": 20}}}));

        let query = RangeQuery::new("age").gt(20).gte(10);
        assert_eq!(Value::from(query), json!({"range": {"age": {"gte": 10}}}));
    }

    #[test]
    fn test_upper_bounds_exclude_each_other() {
        let query = RangeQuery::new("age").lt(5).lte(6);
        assert_eq!(Value::from(query), json!({"range": {"age": {"lte": 6}}}));

        let query = RangeQuery::new("age").lte(6).lt(5);
        assert_eq!(Value::from(query), json!({"range": {"age": {"lt": 5}}}));
    }

    #[test]
    fn test_both_sides_and_options() {
        let query = RangeQuery::new("created_at")
            .gte("2024-01-01")
            .lt("2025-01-01")
            .format("yyyy-MM-dd")
            .time_zone("+01:00")
            .relation(RangeRelation::Within)
            .boost(2.0);

        assert_eq!(
            Value::from(query),
            json!({
                "range": {
                    "created_at": {
                        "gte": "2024-01-01",
                        "lt": "2025-01-01",
                        "format": "yyyy-MM-dd",
                        "time_zone": "+01:00",
                        "relation": "within",
                        "boost": 2.0
                    }
                }
            })
        );
    }

    #[test]
    fn test_from_to() {
        let query = RangeQuery::new("price").from(10).to(Value::Null);

        assert_eq!(
            Value::from(query),
            json!({"range": {"price": {"from": 10, "to": null}}})
        );
    }
}
