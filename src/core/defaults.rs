use super::{Namespace, PrefixRule};

/// Computes the placeholder value written for a key missing from a locale.
#[derive(Debug, Clone, Default)]
pub struct DefaultResolver {
    pub prefix: PrefixRule,
    /// Overrides every computed default when set, including `Some("")`.
    pub fill: Option<String>,
}

impl DefaultResolver {
    pub fn new(prefix: PrefixRule, fill: Option<String>) -> Self {
        Self { prefix, fill }
    }

    pub fn resolve(&self, key: &str, namespace: Namespace) -> String {
        if let Some(fill) = &self.fill {
            return fill.clone();
        }
        match namespace {
            Namespace::Prefixed => self.prefix.strip(key).unwrap_or(key).to_string(),
            Namespace::Plain => key.to_string(),
        }
    }
}
