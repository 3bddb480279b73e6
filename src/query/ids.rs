//! `ids` query.

use crate::object::{Object, string_array};

clause! {
    /// Matches documents by their `_id`.
    pub struct IdsQuery;
}

impl IdsQuery {
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values = string_array(values);
        IdsQuery(Object::new().insert("ids", Object::new().insert("values", values)))
    }
}

setters!(IdsQuery, field "ids" {
    fn boost(f64) => "boost";
    fn name(&str) => "_name";
});
