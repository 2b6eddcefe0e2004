//! Splits extracted keys into plain and prefixed namespaces.
//!
//! A plain key is stored as one flat string key (`{"Hello. World": ...}`),
//! a prefixed key is stored as nested objects with the prefix removed
//! (`i18n.menu.home` -> `{"menu": {"home": ...}}`).

use super::KeyPath;

/// Storage namespace of an extracted key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    Plain,
    Prefixed,
}

/// Whether key-based (prefixed) translations are in use, and with which prefix.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PrefixRule {
    /// Every key is plain.
    #[default]
    Disabled,
    /// Keys starting with the prefix are prefixed. An empty prefix matches every
    /// key and strips nothing.
    Enabled(String),
}

impl PrefixRule {
    pub fn from_option(prefix: Option<String>) -> Self {
        match prefix {
            Some(prefix) => Self::Enabled(prefix),
            None => Self::Disabled,
        }
    }

    pub fn classify(&self, key: &str) -> Namespace {
        match self {
            Self::Enabled(prefix) if key.starts_with(prefix.as_str()) => Namespace::Prefixed,
            _ => Namespace::Plain,
        }
    }

    /// Remove the prefix and the first `.` that follows it.
    ///
    /// Returns `None` when there is nothing to strip: the rule is disabled, the
    /// prefix is empty, `key` does not start with it, or no `.` follows it.
    ///
    /// - `"i18n.foo.bar"` with prefix `"i18n"` -> `Some("foo.bar")`
    /// - `"i18n"` with prefix `"i18n"` -> `None`
    pub fn strip<'a>(&self, key: &'a str) -> Option<&'a str> {
        let Self::Enabled(prefix) = self else {
            return None;
        };
        if prefix.is_empty() {
            return None;
        }
        let rest = key.strip_prefix(prefix.as_str())?;
        let dot = rest.find('.')?;
        Some(&key[prefix.len() + dot + 1..])
    }

    /// Where a key lives inside a locale document.
    pub fn storage_path(&self, key: &str, namespace: Namespace) -> KeyPath {
        match namespace {
            Namespace::Plain => KeyPath::single(key),
            Namespace::Prefixed => KeyPath::split(self.strip(key).unwrap_or(key)),
        }
    }
}

/// Keys grouped by namespace, each group in extraction order.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Partition {
    pub prefixed: Vec<String>,
    pub plain: Vec<String>,
}

pub fn partition<I, S>(keys: I, rule: &PrefixRule) -> Partition
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut result = Partition::default();
    for key in keys {
        let key = key.into();
        match rule.classify(&key) {
            Namespace::Prefixed => result.prefixed.push(key),
            Namespace::Plain => result.plain.push(key),
        }
    }
    result
}
