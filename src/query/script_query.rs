//! `script` query.

use crate::object::Object;
use crate::script::Script;

clause! {
    /// Filter documents with a script returning a boolean.
    pub struct ScriptQuery;
}

impl ScriptQuery {
    pub fn new(script: Script) -> Self {
        ScriptQuery(Object::new().insert("script", Object::new().insert("script", script)))
    }
}

setters!(ScriptQuery, field "script" {
    fn boost(f64) => "boost";
    fn name(&str) => "_name";
});

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;
    use crate::enums::ScriptLanguage;

    #[test]
    fn test_script_query() {
        let script = Script::source("doc['num'].value > params.limit", ScriptLanguage::Painless)
            .parameter("limit", 5);
        let query = ScriptQuery::new(script).boost(2.0).name("over_limit");

        assert_eq!(
            Value::from(query),
            json!({
                "script": {
                    "script": {
                        "lang": "painless",
                        "source": "doc['num'].value > params.limit",
                        "params": {"limit": 5}
                    },
                    "boost": 2.0,
                    "_name": "over_limit"
                }
            })
        );
    }
}
