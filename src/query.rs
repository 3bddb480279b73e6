//! Query clause catalogue.
//!
//! Every clause is a newtype over [`Object`](crate::object::Object) built
//! from one of three shapes:
//!
//! - a static key: `{"exists": {"field": "user"}}`
//! - a dynamic field under a static key: `{"term": {"user": {"value": "kim"}}}`
//! - a dynamic field with no wrapper: `{"query_string": {...}}` is addressed
//!   through its only object
//!
//! Setters write one level inside the clause and never touch its own key.

pub mod boolean;
pub mod constant_score;
pub mod exists;
pub mod full_text;
pub mod ids;
pub mod match_all;
pub mod multi_match;
pub mod nested;
pub mod query_string;
pub mod range;
pub mod regexp;
pub mod script_query;
pub mod term;

pub use self::boolean::{BoolQuery, Occur};
pub use self::constant_score::ConstantScoreQuery;
pub use self::exists::ExistsQuery;
pub use self::full_text::{
    MatchBoolPrefixQuery, MatchPhrasePrefixQuery, MatchPhraseQuery, MatchQuery,
};
pub use self::ids::IdsQuery;
pub use self::match_all::{MatchAllQuery, MatchNoneQuery};
pub use self::multi_match::MultiMatchQuery;
pub use self::nested::NestedQuery;
pub use self::query_string::{QueryStringQuery, SimpleQueryStringQuery};
pub use self::range::RangeQuery;
pub use self::regexp::RegexpQuery;
pub use self::script_query::ScriptQuery;
pub use self::term::{TermQuery, TermsQuery, TermsSetQuery};

impl_into_clause!(
    ConstantScoreQuery,
    ExistsQuery,
    IdsQuery,
    MatchAllQuery,
    MatchBoolPrefixQuery,
    MatchNoneQuery,
    MatchPhrasePrefixQuery,
    MatchPhraseQuery,
    MatchQuery,
    MultiMatchQuery,
    NestedQuery,
    QueryStringQuery,
    RangeQuery,
    RegexpQuery,
    ScriptQuery,
    SimpleQueryStringQuery,
    TermQuery,
    TermsQuery,
    TermsSetQuery,
);
