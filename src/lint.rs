//! Optional checks on a finished document.
//!
//! The builders never reject input. This module looks for the shapes they
//! can silently produce and which are usually mistakes: `null` values,
//! empty `aggs`, empty bool sections, range bodies holding both an
//! inclusive and an exclusive bound on the same side, and field-keyed
//! clauses holding more than one field (setters only reach the first).
//!
//! Keys directly under `aggs` are aggregation names chosen by the caller,
//! so they are never read as clause kinds. A `null` `from` or `to` inside a
//! range body is an open bound and is not reported.

use std::fmt;

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{QueryBuilderError, Result};
use crate::object::Object;

/// Clauses shaped `{"<kind>": {"<field>": {...}}}`.
const FIELD_KEYED_CLAUSES: &[&str] = &[
    "match",
    "match_bool_prefix",
    "match_phrase",
    "match_phrase_prefix",
    "range",
    "regexp",
    "term",
    "terms_set",
];

const BOOL_SECTIONS: &[&str] = &["filter", "must", "must_not", "should"];

/// What a lint finding is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintKind {
    /// A `null` anywhere except an open range bound.
    NullValue,
    /// An `aggs` object with no named aggregation.
    EmptyAggs,
    /// A `filter`, `must`, `must_not` or `should` array with no clause.
    EmptyBoolSection,
    /// A range field with both `gt` and `gte`, or both `lt` and `lte`.
    ConflictingRangeBounds,
    /// A field-keyed clause with more than one field.
    MultipleDynamicFields,
}

impl LintKind {
    fn describe(&self) -> &'static str {
        match self {
            LintKind::NullValue => "null value",
            LintKind::EmptyAggs => "empty aggs",
            LintKind::EmptyBoolSection => "empty bool section",
            LintKind::ConflictingRangeBounds => "conflicting range bounds",
            LintKind::MultipleDynamicFields => "several fields where only the first is configured",
        }
    }
}

/// One finding, located by a dotted path such as `query.bool.filter[1].range`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintIssue {
    /// What was found.
    pub kind: LintKind,
    /// Dotted path from the document root, with `[i]` for array items.
    pub path: String,
}

impl fmt::Display for LintIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at '{}'", self.kind.describe(), self.path)
    }
}

/// Walk `document` and report every finding.
pub fn lint(document: &Object) -> Vec<LintIssue> {
    let mut linter = Linter::default();
    linter.visit_map(document.as_map(), "");
    linter.issues
}

/// Fail with [`QueryBuilderError::Lint`] when `document` has any finding.
pub fn ensure_clean(document: &Object) -> Result<()> {
    let issues = lint(document);
    if issues.is_empty() {
        return Ok(());
    }
    let message = issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ");
    Err(QueryBuilderError::lint(message))
}

#[derive(Default)]
struct Linter {
    issues: Vec<LintIssue>,
}

fn child_path(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_owned()
    } else {
        format!("{path}.{key}")
    }
}

impl Linter {
    fn report(&mut self, kind: LintKind, path: String) {
        debug!(kind = kind.describe(), %path, "lint finding");
        self.issues.push(LintIssue { kind, path });
    }

    fn visit(&mut self, value: &Value, path: String) {
        match value {
            Value::Null => self.report(LintKind::NullValue, path),
            Value::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    self.visit(item, format!("{path}[{i}]"));
                }
            }
            Value::Object(map) => self.visit_map(map, &path),
            _ => {}
        }
    }

    fn visit_map(&mut self, map: &Map<String, Value>, path: &str) {
        for (key, value) in map {
            let path = child_path(path, key);
            match (key.as_str(), value) {
                ("aggs", Value::Object(aggs)) => {
                    if aggs.is_empty() {
                        self.report(LintKind::EmptyAggs, path.clone());
                    }
                    self.visit_named_aggs(aggs, &path);
                    continue;
                }
                ("bool", Value::Object(body)) => self.check_bool(body, &path),
                ("range", Value::Object(body)) => {
                    self.check_field_keyed("range", body, &path);
                    self.visit_range(body, &path);
                    continue;
                }
                (kind, Value::Object(body)) if FIELD_KEYED_CLAUSES.contains(&kind) => {
                    self.check_field_keyed(kind, body, &path);
                }
                _ => {}
            }
            self.visit(value, path);
        }
    }

    fn visit_named_aggs(&mut self, aggs: &Map<String, Value>, path: &str) {
        for (name, agg) in aggs {
            self.visit(agg, child_path(path, name));
        }
    }

    fn visit_range(&mut self, body: &Map<String, Value>, path: &str) {
        for (field, bounds) in body {
            let field_path = child_path(path, field);
            let Value::Object(bounds) = bounds else {
                self.visit(bounds, field_path);
                continue;
            };
            for (bound, value) in bounds {
                let open_bound = value.is_null() && matches!(bound.as_str(), "from" | "to");
                if !open_bound {
                    self.visit(value, child_path(&field_path, bound));
                }
            }
        }
    }

    fn check_bool(&mut self, body: &Map<String, Value>, path: &str) {
        for section in BOOL_SECTIONS {
            if let Some(Value::Array(items)) = body.get(*section) {
                if items.is_empty() {
                    self.report(LintKind::EmptyBoolSection, child_path(path, section));
                }
            }
        }
    }

    fn check_field_keyed(&mut self, kind: &str, body: &Map<String, Value>, path: &str) {
        let fields: Vec<(&String, &Map<String, Value>)> = body
            .iter()
            .filter_map(|(field, value)| value.as_object().map(|inner| (field, inner)))
            .collect();

        if fields.len() > 1 {
            self.report(LintKind::MultipleDynamicFields, path.to_owned());
        }

        if kind == "range" {
            for (field, bounds) in fields {
                let conflicting = (bounds.contains_key("gt") && bounds.contains_key("gte"))
                    || (bounds.contains_key("lt") && bounds.contains_key("lte"));
                if conflicting {
                    self.report(LintKind::ConflictingRangeBounds, child_path(path, field));
                }
            }
        }
    }
}
