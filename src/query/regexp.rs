//! `regexp` query.

use crate::object::Object;

clause! {
    /// Matches terms against a regular expression.
    pub struct RegexpQuery;
}

impl RegexpQuery {
    pub fn new(field: &str, pattern: &str) -> Self {
        RegexpQuery(Object::new().insert(
            "regexp",
            Object::new().insert(field, Object::new().insert("value", pattern)),
        ))
    }
}

setters!(RegexpQuery, first_child "regexp" {
    /// Enabled operators, e.g. `"ALL"` or `"COMPLEMENT|INTERVAL"`.
    fn flags(&str) => "flags";
    fn case_insensitive(bool) => "case_insensitive";
    fn max_determinized_states(u64) => "max_determinized_states";
    fn rewrite(&str) => "rewrite";
    fn boost(f64) => "boost";
});
