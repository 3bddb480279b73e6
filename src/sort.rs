//! Sort clauses.

use crate::enums::{Order, SortMode};
use crate::object::{IntoClause, Object};

clause! {
    /// Sort on one field: `{"<field>": {"order": ..., "mode": ...}}`.
    pub struct Sort;
}

impl Sort {
    /// Sort on `field` with engine defaults.
    pub fn new(field: &str) -> Self {
        Sort(Object::new().insert(field, Object::new()))
    }
}

setters!(Sort, first_object {
    /// Sort direction.
    fn order(Order) => "order";
    /// How multi-valued fields pick their sort value.
    fn mode(SortMode) => "mode";
    fn nested(NestedSort) => "nested";
});

clause! {
    /// Nested-object context for a sort: `{"path": ..., "filter": ...}`.
    pub struct NestedSort;
}

impl NestedSort {
    pub fn new(path: &str) -> Self {
        NestedSort(Object::new().insert("path", path))
    }

    /// Restrict which nested documents take part in sorting.
    ///
    /// A filter that coerces to nothing is ignored.
    pub fn filter(mut self, filter: impl IntoClause) -> Self {
        if let Some(clause) = filter.into_clause() {
            self.0.as_map_mut().insert("filter".to_owned(), clause);
        }
        self
    }

    pub fn max_children(mut self, max_children: u64) -> Self {
        self.0.as_map_mut().insert("max_children".to_owned(), max_children.into());
        self
    }

    /// Nest a further level for multi-level nested fields.
    pub fn nested(mut self, nested: NestedSort) -> Self {
        self.0.as_map_mut().insert("nested".to_owned(), nested.into());
        self
    }
}
