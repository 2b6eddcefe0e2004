use std::fmt;

/// Identifies one slot in a locale document as an ordered list of object keys.
///
/// Segments are kept apart instead of being joined with `.`, so a key that
/// itself contains a dot (`{"Hello. World": "..."}`) never collides with a
/// nested path (`{"Hello": {" World": "..."}}`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct KeyPath(Vec<String>);

impl KeyPath {
    /// A path with exactly one segment; dots in `key` stay literal.
    ///
    /// Used for plain keys, which are stored flat at the top of the document.
    pub fn single(key: impl Into<String>) -> Self {
        Self(vec![key.into()])
    }

    /// Split a dotted key into segments: `"menu.home"` -> `["menu", "home"]`.
    pub fn split(key: &str) -> Self {
        Self(key.split('.').map(str::to_string).collect())
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when `prefix` is this path or one of its ancestors.
    pub fn starts_with(&self, prefix: &KeyPath) -> bool {
        self.0.starts_with(&prefix.0)
    }

    /// Returns a new path with `segment` appended.
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.0.clone();
        segments.push(segment.into());
        Self(segments)
    }
}

impl From<Vec<String>> for KeyPath {
    fn from(segments: Vec<String>) -> Self {
        Self(segments)
    }
}

impl<const N: usize> From<[&str; N]> for KeyPath {
    fn from(segments: [&str; N]) -> Self {
        Self(segments.iter().map(|s| s.to_string()).collect())
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}
