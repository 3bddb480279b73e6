//! Field mutators shared by every clause builder.
//!
//! Query clauses come in three nesting shapes, and each has one mutator:
//!
//! | shape | example | mutator |
//! |-------|---------|---------|
//! | static key | `{"avg": {"field": "price"}}` | [`put_in_field`] |
//! | dynamic field under a static key | `{"match": {"title": {"query": "rust"}}}` | [`put_in_first_child_field`] |
//! | dynamic field, no wrapper | `{"price": {"order": "asc"}}` | [`put_in_first_object_field`] |
//!
//! All of them are total. When the expected object is missing or is not an
//! object the document is returned unchanged.
//!
//! Only the first object-valued entry (in key order) is ever touched by the
//! `first_*` variants. A clause holding several dynamic fields will have
//! setter values land on one of them only.

use serde_json::{Map, Value};
use tracing::trace;

use crate::object::Object;

/// Set `root[parent_key][key] = value` when `root[parent_key]` is an object.
pub fn put_in_field<'a>(
    root: &'a mut Object,
    parent_key: &str,
    key: &str,
    value: impl Into<Value>,
) -> &'a mut Object {
    match root.as_map_mut().get_mut(parent_key) {
        Some(Value::Object(container)) => {
            container.insert(key.to_owned(), value.into());
        }
        _ => trace!(parent_key, key, "put_in_field: parent is not an object, skipping"),
    }
    root
}

/// Set `key = value` in the first object found inside `root[parent_key]`.
pub fn put_in_first_child_field<'a>(
    root: &'a mut Object,
    parent_key: &str,
    key: &str,
    value: impl Into<Value>,
) -> &'a mut Object {
    let child = match root.as_map_mut().get_mut(parent_key) {
        Some(Value::Object(container)) => first_object_mut(container),
        _ => None,
    };

    match child {
        Some(child) => {
            child.insert(key.to_owned(), value.into());
        }
        None => trace!(parent_key, key, "put_in_first_child_field: no child object, skipping"),
    }
    root
}

/// Set `key = value` in the first object found directly inside `root`.
pub fn put_in_first_object_field<'a>(
    root: &'a mut Object,
    key: &str,
    value: impl Into<Value>,
) -> &'a mut Object {
    match first_object_mut(root.as_map_mut()) {
        Some(child) => {
            child.insert(key.to_owned(), value.into());
        }
        None => trace!(key, "put_in_first_object_field: no object entry, skipping"),
    }
    root
}

/// Remove `key` from the first object found inside `root[parent_key]`.
pub fn remove_in_first_child_field<'a>(
    root: &'a mut Object,
    parent_key: &str,
    key: &str,
) -> &'a mut Object {
    if let Some(Value::Object(container)) = root.as_map_mut().get_mut(parent_key) {
        if let Some(child) = first_object_mut(container) {
            child.remove(key);
        }
    }
    root
}

/// Set `map[parent_key][key] = value`, creating `map[parent_key]` when it is
/// absent or not an object.
pub(crate) fn upsert_in_field(
    map: &mut Map<String, Value>,
    parent_key: &str,
    key: &str,
    value: impl Into<Value>,
) {
    if let Value::Object(container) = object_entry(map, parent_key) {
        container.insert(key.to_owned(), value.into());
    }
}

/// Append `items` to the array at `map[key]`, creating it when absent or not
/// an array. The key is written even when `items` is empty.
pub(crate) fn append_to_array(
    map: &mut Map<String, Value>,
    key: &str,
    items: impl IntoIterator<Item = Value>,
) {
    let entry = map
        .entry(key.to_owned())
        .or_insert_with(|| Value::Array(Vec::new()));
    if !entry.is_array() {
        *entry = Value::Array(Vec::new());
    }
    if let Value::Array(array) = entry {
        array.extend(items);
    }
}

/// Append `items` to the array at `map[parent_key][key]`, creating both
/// levels as needed.
pub(crate) fn append_in_field(
    map: &mut Map<String, Value>,
    parent_key: &str,
    key: &str,
    items: impl IntoIterator<Item = Value>,
) {
    if let Value::Object(container) = object_entry(map, parent_key) {
        append_to_array(container, key, items);
    }
}

fn object_entry<'a>(map: &'a mut Map<String, Value>, key: &str) -> &'a mut Value {
    let entry = map
        .entry(key.to_owned())
        .or_insert_with(|| Value::Object(Map::new()));
    if !entry.is_object() {
        *entry = Value::Object(Map::new());
    }
    entry
}

fn first_object_mut(map: &mut Map<String, Value>) -> Option<&mut Map<String, Value>> {
    map.values_mut().find_map(|value| value.as_object_mut())
}
