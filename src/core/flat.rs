//! Conversion between nested locale documents and flat `KeyPath -> value` maps.
//!
//! The flat form is what the reconciler merges on. Arrays flatten like objects
//! keyed by their indices; [`nested_keys_of`] remembers which branches were
//! arrays so [`restore_shape`] can put them back after unflattening.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use super::KeyPath;

/// One entry per terminal value. Empty objects and arrays are terminal.
pub type FlatMap = IndexMap<KeyPath, Value>;

/// Every non-empty branch of a document, with the kind of container it was.
pub type NestedKeySet = IndexMap<KeyPath, Container>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Container {
    Object,
    Array,
}

pub fn flatten(doc: &Map<String, Value>) -> FlatMap {
    let mut flat = FlatMap::new();
    for (key, value) in doc {
        flatten_value(value, KeyPath::single(key.clone()), &mut flat);
    }
    flat
}

fn flatten_value(value: &Value, path: KeyPath, flat: &mut FlatMap) {
    match value {
        Value::Object(map) if !map.is_empty() => {
            for (key, child) in map {
                flatten_value(child, path.child(key.clone()), flat);
            }
        }
        Value::Array(items) if !items.is_empty() => {
            for (index, child) in items.iter().enumerate() {
                flatten_value(child, path.child(index.to_string()), flat);
            }
        }
        _ => {
            flat.insert(path, value.clone());
        }
    }
}

/// Build nested objects from a flat map, in map order.
///
/// An entry whose path goes through an earlier leaf replaces that leaf with
/// an object.
pub fn unflatten(flat: FlatMap) -> Map<String, Value> {
    let mut root = Map::new();
    for (path, value) in flat {
        insert_nested(&mut root, path.segments(), value);
    }
    root
}

fn insert_nested(root: &mut Map<String, Value>, path: &[String], value: Value) {
    match path {
        [] => {}
        [last] => {
            root.insert(last.clone(), value);
        }
        [first, rest @ ..] => {
            let next = root
                .entry(first.clone())
                .or_insert_with(|| Value::Object(Map::new()));

            // If the existing value is not an object, replace it with an object
            if !next.is_object() {
                *next = Value::Object(Map::new());
            }
            if let Value::Object(inner) = next {
                insert_nested(inner, rest, value);
            }
        }
    }
}

pub fn nested_keys_of(doc: &Map<String, Value>) -> NestedKeySet {
    let mut nested = NestedKeySet::new();
    for (key, value) in doc {
        collect_nested(value, KeyPath::single(key.clone()), &mut nested);
    }
    nested
}

fn collect_nested(value: &Value, path: KeyPath, nested: &mut NestedKeySet) {
    match value {
        Value::Object(map) if !map.is_empty() => {
            for (key, child) in map {
                collect_nested(child, path.child(key.clone()), nested);
            }
            nested.insert(path, Container::Object);
        }
        Value::Array(items) if !items.is_empty() => {
            for (index, child) in items.iter().enumerate() {
                collect_nested(child, path.child(index.to_string()), nested);
            }
            nested.insert(path, Container::Array);
        }
        _ => {}
    }
}

/// Turn objects back into arrays where the original document had arrays.
///
/// Only objects whose keys are exactly `0..n` are converted; anything else
/// stays an object.
pub fn restore_shape(doc: &mut Map<String, Value>, nested: &NestedKeySet) {
    if !nested.values().any(|kind| *kind == Container::Array) {
        return;
    }
    for (key, value) in doc.iter_mut() {
        restore_value(value, KeyPath::single(key.clone()), nested);
    }
}

fn restore_value(value: &mut Value, path: KeyPath, nested: &NestedKeySet) {
    let Value::Object(map) = value else {
        return;
    };
    for (key, child) in map.iter_mut() {
        restore_value(child, path.child(key.clone()), nested);
    }
    if nested.get(&path) == Some(&Container::Array)
        && let Some(items) = take_sequence(map)
    {
        *value = Value::Array(items);
    }
}

fn take_sequence(map: &mut Map<String, Value>) -> Option<Vec<Value>> {
    let len = map.len();
    if len == 0 {
        return None;
    }
    // Keys are unique, so `len` canonical indices below `len` cover 0..len.
    let is_sequence = map.keys().all(|key| {
        key.parse::<usize>()
            .is_ok_and(|index| index < len && index.to_string() == *key)
    });
    if !is_sequence {
        return None;
    }

    let mut items: Vec<(usize, Value)> = std::mem::take(map)
        .into_iter()
        .filter_map(|(key, value)| key.parse().ok().map(|index| (index, value)))
        .collect();
    items.sort_by_key(|(index, _)| *index);
    Some(items.into_iter().map(|(_, value)| value).collect())
}

/// Merge `source` into `target`. Objects present on both sides are merged
/// recursively, any other value from `source` replaces the one in `target`.
pub fn deep_merge(target: &mut Map<String, Value>, source: Map<String, Value>) {
    for (key, value) in source {
        match target.get_mut(&key) {
            Some(Value::Object(existing)) if value.is_object() => {
                if let Value::Object(incoming) = value {
                    deep_merge(existing, incoming);
                }
            }
            _ => {
                target.insert(key, value);
            }
        }
    }
}
