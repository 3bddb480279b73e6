//! Integration tests for aggregation documents.

use es_query_builder::aggregation::reduce_aggs;
use es_query_builder::prelude::*;
use serde_json::{Value, json};

fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn test_reduce_later_name_wins() -> Result<()> {
    init();

    let reduced = reduce_aggs([
        NamedAgg::new("x", AvgAgg::new("a")),
        NamedAgg::new("x", SumAgg::new("b")),
    ]);

    assert_eq!(reduced.to_json()?, r#"{"x":{"sum":{"field":"b"}}}"#);

    Ok(())
}

#[test]
fn test_single_none_aggs_is_noop() -> Result<()> {
    init();

    let builders: Vec<(Value, Value)> = vec![
        (
            Value::from(TermsAgg::new("a")),
            Value::from(TermsAgg::new("a").aggs([None::<NamedAgg>])),
        ),
        (
            Value::from(MultiTermsAgg::new([TermAgg::new("a")])),
            Value::from(MultiTermsAgg::new([TermAgg::new("a")]).aggs([None::<NamedAgg>])),
        ),
        (
            Value::from(NestedAgg::new("p")),
            Value::from(NestedAgg::new("p").aggs([None::<NamedAgg>])),
        ),
        (
            Value::from(AvgAgg::new("a")),
            Value::from(AvgAgg::new("a").aggs([None::<NamedAgg>])),
        ),
        (
            Value::from(ExtendedStatsAgg::new("a")),
            Value::from(ExtendedStatsAgg::new("a").aggs([None::<NamedAgg>])),
        ),
        (
            Value::from(CardinalityAgg::new("a")),
            Value::from(CardinalityAgg::new("a").aggs([None::<NamedAgg>])),
        ),
        (
            Value::from(new_query(MatchAllQuery::new())),
            Value::from(new_query(MatchAllQuery::new()).aggs([None::<NamedAgg>])),
        ),
    ];

    for (before, after) in builders {
        assert_eq!(before, after);
    }

    Ok(())
}

#[test]
fn test_terms_with_order_and_sub_aggregation() -> Result<()> {
    init();

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

    Ok(())
}

#[test]
fn test_deeply_nested_aggregations() -> Result<()> {
    init();

    let root = new_query(RangeQuery::new("created_at").gte("now-30d/d"))
        .size(0)
        .aggs([
            NamedAgg::new(
                "resellers",
                NestedAgg::new("resellers").aggs([NamedAgg::new(
                    "by_reseller",
                    TermsAgg::new("resellers.name")
                        .size(5)
                        .aggs([
                            Some(NamedAgg::new("min_price", MinAgg::new("resellers.price"))),
                            None,
                            Some(NamedAgg::new("stats", StatsAgg::new("resellers.price").format("0.0"))),
                        ]),
                )]),
            ),
            NamedAgg::new(
                "unique_buyers",
                CardinalityAgg::new("buyer_id").precision_threshold(100),
            ),
            NamedAgg::new(
                "revenue",
                SumAgg::new("amount").meta("currency", "USD"),
            ),
        ]);

    assert_eq!(
        Value::from(root),
        json!({
            "query": {"range": {"created_at": {"gte": "now-30d/d"}}},
            "size": 0,
            "aggs": {
                "resellers": {
                    "nested": {"path": "resellers"},
                    "aggs": {
                        "by_reseller": {
                            "terms": {"field": "resellers.name", "size": 5},
                            "aggs": {
                                "min_price": {"min": {"field": "resellers.price"}},
                                "stats": {"stats": {"field": "resellers.price", "format": "0.0"}}
                            }
                        }
                    }
                },
                "unique_buyers": {"cardinality": {"field": "buyer_id", "precision_threshold": 100}},
                "revenue": {"sum": {"field": "amount"}, "meta": {"currency": "USD"}}
            }
        })
    );

    Ok(())
}

#[test]
fn test_aggs_only_request() -> Result<()> {
    init();

    let root = new_aggs([
        Some(NamedAgg::new("max_price", MaxAgg::new("price"))),
        None,
    ])
    .size(0);

    assert_eq!(
        root.to_json()?,
        r#"{"aggs":{"max_price":{"max":{"field":"price"}}},"size":0}"#
    );

    Ok(())
}

#[test]
fn test_custom_aggregation_object() -> Result<()> {
    init();

    let custom = Object::from_json(r#"{"date_histogram": {"field": "ts", "calendar_interval": "day"}}"#)?;
    let root = Object::new().aggs([NamedAgg::new("per_day", custom)]);

    assert_eq!(
        root["aggs"]["per_day"]["date_histogram"]["calendar_interval"],
        "day"
    );

    Ok(())
}
