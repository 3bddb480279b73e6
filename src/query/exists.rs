//! `exists` query.

use crate::object::Object;

clause! {
    /// Matches documents that hold an indexed value for `field`.
    pub struct ExistsQuery;
}

impl ExistsQuery {
    pub fn new(field: &str) -> Self {
        ExistsQuery(Object::new().insert("exists", Object::new().insert("field", field)))
    }

    /// Create an exists query only when `condition` holds.
    pub fn new_if(field: &str, condition: bool) -> Option<Self> {
        condition.then(|| Self::new(field))
    }

    /// Create an exists query only when `predicate(field)` holds.
    pub fn new_when<F>(field: &str, predicate: F) -> Option<Self>
    where
        F: FnOnce(&str) -> bool,
    {
        if predicate(field) {
            Some(Self::new(field))
        } else {
            None
        }
    }
}

setters!(ExistsQuery, field "exists" {
    fn boost(f64) => "boost";
});
