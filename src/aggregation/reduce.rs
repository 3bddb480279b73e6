//! Merging named aggregations into one `aggs` map.

use serde_json::{Map, Value};
use tracing::trace;

use crate::object::Object;

clause! {
    /// A single named aggregation: `{"<name>": <aggregation>}`.
    pub struct NamedAgg;
}

impl NamedAgg {
    /// Name an aggregation. Any builder in [`aggregation`](crate::aggregation)
    /// or a raw [`Object`] holding a custom aggregation is accepted.
    pub fn new(name: &str, agg: impl Into<Object>) -> Self {
        NamedAgg(Object::new().insert(name, agg.into()))
    }

    /// The aggregation name, if the entry has one.
    pub fn name(&self) -> Option<&str> {
        self.0.keys().next().map(String::as_str)
    }
}

/// Merge named aggregations into one map keyed by name.
///
/// When two entries share a name the later one wins. Only the first entry
/// of each `NamedAgg` is read.
pub fn reduce_aggs(aggs: impl IntoIterator<Item = NamedAgg>) -> Object {
    let mut reduced = Map::new();
    for agg in aggs {
        if let Some((name, value)) = agg.0.into_iter().next() {
            if reduced.insert(name.clone(), value).is_some() {
                trace!(%name, "aggregation overwritten by a later one with the same name");
            }
        }
    }
    reduced.into()
}

/// Build a root document holding only `aggs`.
///
/// `None` entries are skipped; with nothing left the result is
/// `{"aggs": {}}`.
pub fn new_aggs<I, A>(aggs: I) -> Object
where
    I: IntoIterator<Item = A>,
    A: Into<Option<NamedAgg>>,
{
    let reduced = reduce_aggs(aggs.into_iter().filter_map(Into::into));
    Object::new().insert("aggs", reduced)
}

/// Write reduced `aggs` into `map`, unless the only argument is `None`.
pub(crate) fn put_aggs<I, A>(map: &mut Map<String, Value>, aggs: I)
where
    I: IntoIterator<Item = A>,
    A: Into<Option<NamedAgg>>,
{
    let aggs: Vec<Option<NamedAgg>> = aggs.into_iter().map(Into::into).collect();
    if let [None] = aggs.as_slice() {
        trace!("single empty aggs argument, leaving aggregations untouched");
        return;
    }
    let reduced = reduce_aggs(aggs.into_iter().flatten());
    map.insert("aggs".to_owned(), reduced.into());
}
