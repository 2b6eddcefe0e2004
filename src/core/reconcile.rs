use serde_json::{Map, Value};

use super::{
    FlatMap, Namespace, TargetKeySet, deep_merge, flatten, nested_keys_of, restore_shape,
    unflatten,
};

/// Next version of one locale document.
#[derive(Debug)]
pub struct Reconciled {
    pub document: Map<String, Value>,
    /// Extracted keys that the locale did not have, in target order.
    pub added: Vec<String>,
    /// Entries placed in `document`: targets plus the unused entries kept by
    /// `keep_unused`. An unused leaf overwritten by a new branch still counts.
    pub total: usize,
    /// The loaded root was not an object and has been treated as `{}`.
    pub replaced_non_object: bool,
}

/// Merges a [`TargetKeySet`] into existing locale documents.
pub struct Reconciler<'a> {
    targets: &'a TargetKeySet,
    keep_unused: bool,
}

impl<'a> Reconciler<'a> {
    pub fn new(targets: &'a TargetKeySet, keep_unused: bool) -> Self {
        Self {
            targets,
            keep_unused,
        }
    }

    /// Existing values are kept as they are, whatever their JSON type. Missing
    /// keys get their default. Keys no longer extracted survive only with
    /// `keep_unused`, in their original shape.
    pub fn reconcile(&self, existing: Value) -> Reconciled {
        let (root, replaced_non_object) = match existing {
            Value::Object(map) => (map, false),
            _ => (Map::new(), true),
        };
        let mut unused = flatten(&root);
        let nested = nested_keys_of(&root);

        let mut new_plain = FlatMap::new();
        let mut new_prefixed = FlatMap::new();
        let mut added = Vec::new();

        for (path, entry) in self.targets.iter() {
            let value = match unused.shift_remove(path) {
                Some(value) => value,
                None => {
                    added.push(entry.key.clone());
                    Value::String(entry.default.clone())
                }
            };
            match entry.namespace {
                Namespace::Plain => new_plain.insert(path.clone(), value),
                Namespace::Prefixed => new_prefixed.insert(path.clone(), value),
            };
        }

        let survivors = if self.keep_unused {
            unused
        } else {
            FlatMap::new()
        };
        let total = new_plain.len() + new_prefixed.len() + survivors.len();

        let mut document = unflatten(survivors);
        deep_merge(&mut document, unflatten(new_plain));
        deep_merge(&mut document, unflatten(new_prefixed));
        restore_shape(&mut document, &nested);

        Reconciled {
            document,
            added,
            total,
            replaced_non_object,
        }
    }
}
