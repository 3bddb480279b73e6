//! Single-field metric aggregations.
//!
//! `meta` is free-form data echoed back in the response. It is written next
//! to the aggregation kind, not inside it.

use serde_json::Value;

use crate::mutate::upsert_in_field;
use crate::object::Object;
use crate::script::Script;

macro_rules! metric_agg {
    ($(#[$attr:meta])* $name:ident, $kind:literal) => {
        clause! {
            $(#[$attr])*
            pub struct $name;
        }

        impl $name {
            pub fn new(field: &str) -> Self {
                $name(Object::new().insert($kind, Object::new().insert("field", field)))
            }

            /// Add one `meta` entry.
            pub fn meta(mut self, key: &str, value: impl Into<Value>) -> Self {
                upsert_in_field(self.0.as_map_mut(), "meta", key, value);
                self
            }
        }

        setters!($name, field $kind {
            /// Value used for documents without the field.
            fn missing(impl Into<Value>) => "missing";
            fn script(Script) => "script";
            fn format(&str) => "format";
        });
    };
}

metric_agg!(
    /// Average of a numeric field.
    AvgAgg,
    "avg"
);
metric_agg!(
    /// Minimum of a numeric field.
    MinAgg,
    "min"
);
metric_agg!(
    /// Maximum of a numeric field.
    MaxAgg,
    "max"
);
metric_agg!(
    /// Sum of a numeric field.
    SumAgg,
    "sum"
);
metric_agg!(
    /// `min`, `max`, `sum`, `count` and `avg` in one pass.
    StatsAgg,
    "stats"
);
metric_agg!(
    /// `stats` plus variance, standard deviation and sum of squares.
    ExtendedStatsAgg,
    "extended_stats"
);

clause! {
    /// Approximate count of distinct values.
    pub struct CardinalityAgg;
}

impl CardinalityAgg {
    pub fn new(field: &str) -> Self {
        CardinalityAgg(Object::new().insert("cardinality", Object::new().insert("field", field)))
    }

    pub fn meta(mut self, key: &str, value: impl Into<Value>) -> Self {
        upsert_in_field(self.0.as_map_mut(), "meta", key, value);
        self
    }
}

setters!(CardinalityAgg, field "cardinality" {
    fn missing(impl Into<Value>) => "missing";
    /// Counts below this threshold are expected to be close to exact.
    fn precision_threshold(u64) => "precision_threshold";
    fn script(Script) => "script";
});

impl_aggs!(
    AvgAgg,
    MinAgg,
    MaxAgg,
    SumAgg,
    StatsAgg,
    ExtendedStatsAgg,
    CardinalityAgg,
);
