//! Bucket aggregations: `terms`, `multi_terms` and `nested`.

use serde_json::Value;

use crate::enums::{CollectMode, ExecutionHint, Order};
use crate::mutate::put_in_field;
use crate::object::{Object, string_array};
use crate::script::Script;

clause! {
    /// One bucket ordering: `{"<key>": "asc" | "desc"}`.
    pub struct AggOrder;
}

impl AggOrder {
    /// Order buckets by `key`, e.g. `_count`, `_key` or a sub-aggregation name.
    pub fn new(key: &str, order: Order) -> Self {
        AggOrder(Object::new().insert(key, order))
    }
}

/// Collect orders, treating a lone `None` as "no order requested".
fn orders<I, O>(orders: I) -> Option<Vec<Value>>
where
    I: IntoIterator<Item = O>,
    O: Into<Option<AggOrder>>,
{
    let orders: Vec<Option<AggOrder>> = orders.into_iter().map(Into::into).collect();
    if let [None] = orders.as_slice() {
        return None;
    }
    Some(orders.into_iter().flatten().map(Value::from).collect())
}

clause! {
    /// Bucket documents by the unique values of a field.
    pub struct TermsAgg;
}

impl TermsAgg {
    pub fn new(field: &str) -> Self {
        TermsAgg(Object::new().insert("terms", Object::new().insert("field", field)))
    }

    pub fn include<I, S>(mut self, include: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        put_in_field(&mut self.0, "terms", "include", string_array(include));
        self
    }

    pub fn exclude<I, S>(mut self, exclude: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        put_in_field(&mut self.0, "terms", "exclude", string_array(exclude));
        self
    }

    /// Replace the bucket order. A single `None` leaves it unchanged.
    pub fn order<I, O>(mut self, order: I) -> Self
    where
        I: IntoIterator<Item = O>,
        O: Into<Option<AggOrder>>,
    {
        if let Some(order) = orders(order) {
            put_in_field(&mut self.0, "terms", "order", order);
        }
        self
    }
}

setters!(TermsAgg, field "terms" {
    /// Bucket for documents without the field.
    fn missing(impl Into<Value>) => "missing";
    fn script(Script) => "script";
    fn size(u64) => "size";
    fn shard_size(u64) => "shard_size";
    fn show_term_doc_count_error(bool) => "show_term_doc_count_error";
    fn min_doc_count(u64) => "min_doc_count";
    fn execution_hint(ExecutionHint) => "execution_hint";
    fn collect_mode(CollectMode) => "collect_mode";
});

clause! {
    /// One source field of a `multi_terms` aggregation.
    pub struct TermAgg;
}

impl TermAgg {
    pub fn new(field: &str) -> Self {
        TermAgg(Object::new().insert("field", field))
    }

    pub fn missing(self, missing: impl Into<Value>) -> Self {
        TermAgg(self.0.insert("missing", missing))
    }
}

clause! {
    /// Bucket documents by combinations of several fields.
    pub struct MultiTermsAgg;
}

impl MultiTermsAgg {
    pub fn new(terms: impl IntoIterator<Item = TermAgg>) -> Self {
        let terms: Vec<Value> = terms.into_iter().map(Value::from).collect();
        MultiTermsAgg(Object::new().insert("multi_terms", Object::new().insert("terms", terms)))
    }

    pub fn include<I, S>(mut self, include: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        put_in_field(&mut self.0, "multi_terms", "include", string_array(include));
        self
    }

    pub fn exclude<I, S>(mut self, exclude: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        put_in_field(&mut self.0, "multi_terms", "exclude", string_array(exclude));
        self
    }

    /// Replace the bucket order. A single `None` leaves it unchanged.
    pub fn order<I, O>(mut self, order: I) -> Self
    where
        I: IntoIterator<Item = O>,
        O: Into<Option<AggOrder>>,
    {
        if let Some(order) = orders(order) {
            put_in_field(&mut self.0, "multi_terms", "order", order);
        }
        self
    }
}

setters!(MultiTermsAgg, field "multi_terms" {
    fn missing(impl Into<Value>) => "missing";
    fn script(Script) => "script";
    fn size(u64) => "size";
    fn ignore_unmapped(bool) => "ignore_unmapped";
    fn shard_size(u64) => "shard_size";
    fn min_doc_count(u64) => "min_doc_count";
    fn execution_hint(ExecutionHint) => "execution_hint";
    fn collect_mode(CollectMode) => "collect_mode";
});

clause! {
    /// Aggregate over nested documents under `path`.
    pub struct NestedAgg;
}

impl NestedAgg {
    pub fn new(path: &str) -> Self {
        NestedAgg(Object::new().insert("nested", Object::new().insert("path", path)))
    }
}

impl_aggs!(TermsAgg, MultiTermsAgg, NestedAgg);

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::aggregation::{AvgAgg, NamedAgg};
    use crate::enums::ScriptLanguage;

    #[test]
    fn test_terms_agg_with_order_and_sub_aggs() {
        let agg = TermsAgg::new("category")
            .order([AggOrder::new("_count", Order::Desc)])
            .aggs([NamedAgg::new("avg_price", AvgAgg::new("price"))]);

        assert_eq!(
            Value::from(agg),
            json!({
                "terms": {
                    "field": "category",
                    "order": [{"_count": "desc"}]
                },
                "aggs": {
                    "avg_price": {"avg": {"field": "price"}}
                }
            })
        );
    }

    #[test]
    fn test_terms_agg_settings() {
        let agg = TermsAgg::new("tags")
            .missing("N/A")
            .size(20)
            .shard_size(100)
            .show_term_doc_count_error(true)
            .include(["rust", "go"])
            .exclude(["java"])
            .min_doc_count(2)
            .execution_hint(ExecutionHint::Map)
            .collect_mode(CollectMode::BreadthFirst)
            .script(Script::source("doc['tags'].value", ScriptLanguage::Painless));

        assert_eq!(
            Value::from(agg),
            json!({
                "terms": {
                    "field": "tags",
                    "missing": "N/A",
                    "size": 20,
                    "shard_size": 100,
                    "show_term_doc_count_error": true,
                    "include": ["rust", "go"],
                    "exclude": ["java"],
                    "min_doc_count": 2,
                    "execution_hint": "map",
                    "collect_mode": "breadth_first",
                    "script": {"lang": "painless", "source": "doc['tags'].value"}
                }
            })
        );
    }

    #[test]
    fn test_single_none_order_and_aggs_are_noops() {
        let before = TermsAgg::new("category");
        let after = before
            .clone()
            .order([None::<AggOrder>])
            .aggs([None::<NamedAgg>]);

        assert_eq!(before, after);
    }

    #[test]
    fn test_order_skips_none_among_several() {
        let agg = TermsAgg::new("category").order([
            Some(AggOrder::new("_key", Order::Asc)),
            None,
            Some(AggOrder::new("_count", Order::Desc)),
        ]);

        assert_eq!(
            agg.as_object()["terms"]["order"],
            json!([{"_key": "asc"}, {"_count": "desc"}])
        );
    }

    #[test]
    fn test_multi_terms_agg() {
        let agg = MultiTermsAgg::new([TermAgg::new("genre"), TermAgg::new("product").missing("none")])
            .size(5)
            .ignore_unmapped(true)
            .order([AggOrder::new("_count", Order::Desc)])
            .aggs([NamedAgg::new("max_price", crate::aggregation::MaxAgg::new("price"))]);

        assert_eq!(
            Value::from(agg),
            json!({
                "multi_terms": {
                    "terms": [
                        {"field": "genre"},
                        {"field": "product", "missing": "none"}
                    ],
                    "size": 5,
                    "ignore_unmapped": true,
                    "order": [{"_count": "desc"}]
                },
                "aggs": {"max_price": {"max": {"field": "price"}}}
            })
        );
    }

    #[test]
    fn test_multi_terms_filters() {
        let agg = MultiTermsAgg::new(Vec::new())
            .include(["a"])
            .exclude(["b"])
            .missing(0)
            .shard_size(10)
            .min_doc_count(1)
            .execution_hint(ExecutionHint::GlobalOrdinals)
            .collect_mode(CollectMode::DepthFirst);

        let body = &agg.as_object()["multi_terms"];
        assert_eq!(body["terms"], json!([]));
        assert_eq!(body["include"], json!(["a"]));
        assert_eq!(body["exclude"], json!(["b"]));
        assert_eq!(body["execution_hint"], "global_ordinals");
        assert_eq!(body["collect_mode"], "depth_first");
    }

    #[test]
    fn test_nested_agg() {
        let agg = NestedAgg::new("resellers").aggs([NamedAgg::new(
            "min_price",
            crate::aggregation::MinAgg::new("resellers.price"),
        )]);

        assert_eq!(
            Value::from(agg),
            json!({
                "nested": {"path": "resellers"},
                "aggs": {"min_price": {"min": {"field": "resellers.price"}}}
            })
        );
    }

    #[test]
    fn test_aggs_replace_on_second_call() {
        let agg = NestedAgg::new("p")
            .aggs([NamedAgg::new("a", AvgAgg::new("x"))])
            .aggs([NamedAgg::new("b", AvgAgg::new("y"))]);

        assert_eq!(
            agg.as_object()["aggs"],
            json!({"b": {"avg": {"field": "y"}}})
        );
    }
}
