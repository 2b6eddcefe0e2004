use std::{collections::BTreeSet, ops::Bound};

use indexmap::IndexMap;

use super::{DefaultResolver, KeyPath, Namespace, PrefixRule};

/// One key every processed locale must contain after a sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetEntry {
    /// The key as extracted from source (`i18n.menu.home`).
    pub key: String,
    pub namespace: Namespace,
    /// Value written when the locale does not have the key yet.
    pub default: String,
}

/// Canonical set of keys for one run, indexed by storage path.
///
/// Built once from the extraction output and shared read-only by every
/// locale file. Iteration follows first extraction order.
#[derive(Debug, Default)]
pub struct TargetKeySet {
    entries: IndexMap<KeyPath, TargetEntry>,
}

impl TargetKeySet {
    /// Build the set from extracted keys.
    ///
    /// Keys mapping to the same storage path keep the first occurrence, so
    /// `hello` (plain) followed by `i18n.hello` (prefixed) yields one entry.
    ///
    /// A path cannot be both a value and a branch of the written document.
    /// When one storage path lies inside another, only the entry that wins
    /// the document merge is kept: prefixed entries beat plain ones, and a
    /// later prefixed entry beats an earlier one. `menu` followed by
    /// `i18n.menu.home` therefore keeps only `menu.home`.
    pub fn build<I, S>(keys: I, prefix: &PrefixRule, resolver: &DefaultResolver) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries: IndexMap<KeyPath, TargetEntry> = IndexMap::new();
        let mut paths = BTreeSet::new();
        for key in keys {
            let key = key.as_ref();
            let namespace = prefix.classify(key);
            let path = prefix.storage_path(key, namespace);
            if entries.contains_key(&path) {
                continue;
            }

            let overlapping = overlapping_paths(&paths, &path);
            let shadowed = namespace == Namespace::Plain
                && overlapping
                    .iter()
                    .any(|p| entries[p].namespace == Namespace::Prefixed);
            if shadowed {
                continue;
            }
            for p in &overlapping {
                entries.shift_remove(p);
                paths.remove(p);
            }

            paths.insert(path.clone());
            entries.insert(
                path,
                TargetEntry {
                    key: key.to_string(),
                    namespace,
                    default: resolver.resolve(key, namespace),
                },
            );
        }
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, path: &KeyPath) -> Option<&TargetEntry> {
        self.entries.get(path)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&KeyPath, &TargetEntry)> {
        self.entries.iter()
    }
}

/// Paths in `paths` that are strict ancestors or descendants of `path`.
fn overlapping_paths(paths: &BTreeSet<KeyPath>, path: &KeyPath) -> Vec<KeyPath> {
    let segments = path.segments();
    let ancestors = (1..segments.len())
        .map(|len| KeyPath::from(segments[..len].to_vec()))
        .filter(|ancestor| paths.contains(ancestor));
    // Descendants sort directly after `path`.
    let descendants = paths
        .range((Bound::Excluded(path), Bound::Unbounded))
        .take_while(|p| p.starts_with(path))
        .cloned();
    ancestors.chain(descendants).collect()
}
