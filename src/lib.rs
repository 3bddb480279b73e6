//! # es-query-builder
//!
//! A fluent builder for Elasticsearch query DSL documents.
//!
//! ## Features
//!
//! - Typed builders for queries, aggregations, sorts and inner hits
//! - Conditional constructors that drop out of combinators
//! - Deterministic JSON output (keys are sorted)
//! - An optional lint pass for suspicious documents
//!
//! ```
//! use es_query_builder::prelude::*;
//!
//! let query = new_query(
//!     BoolQuery::new()
//!         .filter(clauses![
//!             TermQuery::new("status", "active"),
//!             RangeQuery::new("age").gte(18),
//!             ExistsQuery::new_if("email", false),
//!         ])
//!         .should([MatchQuery::new("bio", "rust")]),
//! )
//! .size(20)
//! .sort([Sort::new("age").order(Order::Desc)])
//! .aggs([NamedAgg::new("by_city", TermsAgg::new("city").size(10))]);
//!
//! assert_eq!(query["query"]["bool"]["filter"].as_array().unwrap().len(), 2);
//! ```

#[macro_use]
mod macros;

pub mod aggregation;
pub mod condition;
pub mod config;
pub mod document;
pub mod enums;
pub mod error;
pub mod inner_hits;
pub mod lint;
pub mod mutate;
pub mod object;
pub mod query;
pub mod script;
pub mod sort;

pub mod prelude {
    pub use crate::aggregation::{
        AggOrder, AvgAgg, CardinalityAgg, ExtendedStatsAgg, MaxAgg, MinAgg, MultiTermsAgg,
        NamedAgg, NestedAgg, StatsAgg, SumAgg, TermAgg, TermsAgg, new_aggs,
    };
    pub use crate::clauses;
    pub use crate::condition::when;
    pub use crate::config::RenderOptions;
    pub use crate::document::new_query;
    pub use crate::enums::*;
    pub use crate::error::{QueryBuilderError, Result};
    pub use crate::inner_hits::InnerHits;
    pub use crate::object::{Array, IntoClause, Object};
    pub use crate::query::*;
    pub use crate::script::Script;
    pub use crate::sort::{NestedSort, Sort};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
