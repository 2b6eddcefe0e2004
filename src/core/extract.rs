//! Translation key extraction from source files.
//!
//! Extraction is a seam: the sync pipeline only needs an ordered list of key
//! strings per file. [`PatternExtractor`] covers the usual vue-i18n call
//! shapes without parsing templates.

use std::{path::PathBuf, sync::LazyLock};

use anyhow::{Context, Result};
use rayon::prelude::*;
use regex::Regex;

/// Produces translation keys found in one source file, in source order.
/// Duplicates are allowed.
pub trait KeyExtractor: Sync {
    fn extract(&self, source: &str) -> Vec<String>;
}

// $t('key'), $tc("key", n), i18n.t(`key`), t('key')
static METHOD_CALL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"\btc?\(\s*(?:'((?:[^'\\\n]|\\.)*)'|"((?:[^"\\\n]|\\.)*)"|`((?:[^`\\]|\\.)*)`)"#,
    )
    .unwrap()
});

// v-t="'key'"
static DIRECTIVE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"v-t="'((?:[^'\\]|\\.)*)'""#).unwrap());

// <i18n path="key"> and <i18n-t keypath="key">
static COMPONENT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<i18n(?:-t)?\b[^>]*?\s(?:key)?path=(?:"([^"]*)"|'([^']*)')"#).unwrap()
});

/// Regex-based extractor for `$t`/`$tc` calls, `v-t` directives and
/// `<i18n>` components.
///
/// Keys built from template literals with `${...}` are dynamic and skipped.
#[derive(Debug, Default, Clone, Copy)]
pub struct PatternExtractor;

impl KeyExtractor for PatternExtractor {
    fn extract(&self, source: &str) -> Vec<String> {
        let mut found: Vec<(usize, String)> = Vec::new();

        for regex in [&*METHOD_CALL_REGEX, &*DIRECTIVE_REGEX, &*COMPONENT_REGEX] {
            for captures in regex.captures_iter(source) {
                // Exactly one alternative group matches.
                let Some(key) = captures.iter().skip(1).flatten().next() else {
                    continue;
                };
                let key = unescape(key.as_str());
                if key.is_empty() || key.contains("${") {
                    continue;
                }
                let offset = captures.get(0).map_or(0, |m| m.start());
                found.push((offset, key));
            }
        }

        found.sort_by_key(|(offset, _)| *offset);
        found.into_iter().map(|(_, key)| key).collect()
    }
}

fn unescape(raw: &str) -> String {
    let mut result = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next) = chars.next() {
                result.push(next);
            }
        } else {
            result.push(c);
        }
    }
    result
}

/// Extract keys from every file, concatenated in file order.
///
/// Files are read and scanned in parallel; a file that cannot be read aborts
/// the extraction.
pub fn extract_keys(files: &[PathBuf], extractor: &dyn KeyExtractor) -> Result<Vec<String>> {
    let per_file = files
        .par_iter()
        .map(|path| -> Result<Vec<String>> {
            let source = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read source file: {}", path.display()))?;
            Ok(extractor.extract(&source))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(per_file.into_iter().flatten().collect())
}
