//! Aggregation builders and the reducer that merges named aggregations.
//!
//! Sub-aggregations are attached with `aggs(...)`. The setter takes a list
//! of `NamedAgg` (or `Option<NamedAgg>`) and writes them, reduced into one
//! map, under an `aggs` key beside the aggregation kind:
//!
//! ```
//! use es_query_builder::aggregation::{AvgAgg, NamedAgg, TermsAgg};
//! use serde_json::json;
//!
//! let agg = TermsAgg::new("category").aggs([NamedAgg::new("avg_price", AvgAgg::new("price"))]);
//! assert_eq!(
//!     serde_json::Value::from(agg),
//!     json!({"terms": {"field": "category"}, "aggs": {"avg_price": {"avg": {"field": "price"}}}})
//! );
//! ```
//!
//! A single `None` argument leaves the builder untouched.

/// Generate the `aggs` setter for aggregation builders.
macro_rules! impl_aggs {
    ($($name:ident),* $(,)?) => {
        $(
            impl $name {
                /// Attach sub-aggregations. Later names overwrite earlier ones.
                pub fn aggs<I, A>(mut self, aggs: I) -> Self
                where
                    I: IntoIterator<Item = A>,
                    A: Into<Option<$crate::aggregation::NamedAgg>>,
                {
                    $crate::aggregation::reduce::put_aggs(self.0.as_map_mut(), aggs);
                    self
                }
            }
        )*
    };
}

pub mod bucket;
pub mod metric;
pub mod reduce;

pub use self::bucket::{AggOrder, MultiTermsAgg, NestedAgg, TermAgg, TermsAgg};
pub use self::metric::{
    AvgAgg, CardinalityAgg, ExtendedStatsAgg, MaxAgg, MinAgg, StatsAgg, SumAgg,
};
pub use self::reduce::{NamedAgg, new_aggs, reduce_aggs};
