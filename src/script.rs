//! Stored and inline scripts.

use serde_json::Value;

use crate::enums::ScriptLanguage;
use crate::mutate::upsert_in_field;
use crate::object::Object;

clause! {
    /// A script definition, either inline (`source`) or stored (`id`).
    ///
    /// ```
    /// use es_query_builder::enums::ScriptLanguage;
    /// use es_query_builder::script::Script;
    ///
    /// let script = Script::source("doc['price'].value * params.factor", ScriptLanguage::Painless)
    ///     .parameter("factor", 1.2);
    /// assert_eq!(script.as_object()["params"]["factor"], 1.2);
    /// ```
    pub struct Script;
}

impl Script {
    /// Create an inline script.
    pub fn source(source: &str, language: ScriptLanguage) -> Self {
        Script(
            Object::new()
                .insert("lang", language)
                .insert("source", source),
        )
    }

    /// Reference a stored script by id.
    pub fn id(id: &str, language: ScriptLanguage) -> Self {
        Script(Object::new().insert("id", id).insert("lang", language))
    }

    /// Add a compiler option under `options`.
    pub fn option(mut self, option: &str, value: &str) -> Self {
        upsert_in_field(self.0.as_map_mut(), "options", option, value);
        self
    }

    /// Add a script parameter under `params`.
    pub fn parameter(mut self, parameter: &str, value: impl Into<Value>) -> Self {
        upsert_in_field(self.0.as_map_mut(), "params", parameter, value);
        self
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_source_script() {
        let script = Script::source("Math.log(_score * 2)", ScriptLanguage::Painless);

        assert_eq!(
            Value::from(script),
            json!({"lang": "painless", "source": "Math.log(_score * 2)"})
        );
    }

    #[test]
    fn test_stored_script() {
        let script = Script::id("calc-score", ScriptLanguage::Expression);

        assert_eq!(
            script.as_object().to_json().unwrap(),
            r#"{"id":"calc-score","lang":"expression"}"#
        );
    }

    #[test]
    fn test_options_and_params_accumulate() {
        let script = Script::source("return 1;", ScriptLanguage::Painless)
            .option("cache", "true")
            .option("debug", "false")
            .parameter("factor", 2)
            .parameter("tags", vec!["a", "b"])
            .parameter("factor", 3);

        assert_eq!(
            Value::from(script),
            json!({
                "lang": "painless",
                "source": "return 1;",
                "options": {"cache": "true", "debug": "false"},
                "params": {"factor": 3, "tags": ["a", "b"]}
            })
        );
    }
}
