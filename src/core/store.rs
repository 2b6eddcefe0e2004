//! Reading, creating and writing locale JSON files.

use std::{
    fs::{self, OpenOptions},
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde_json::{Map, Value};

/// Content of a freshly created locale file.
const EMPTY_LOCALE: &str = "{}";

pub fn load(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read JSON file: {}", path.display()))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON file: {}", path.display()))
}

/// Overwrite `path` with `doc` as compact JSON.
pub fn write(path: &Path, doc: &Map<String, Value>) -> Result<()> {
    let content = serde_json::to_string(doc).context("Failed to serialize JSON")?;

    fs::write(path, content)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    Ok(())
}

/// Extracts locale from filename.
///
/// Examples:
/// - "en_US.json" -> Some("en_US")
/// - "/path/to/locales/ru_RU.json" -> Some("ru_RU")
pub fn locale_name(path: impl AsRef<Path>) -> Option<String> {
    path.as_ref()
        .file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}

/// Resolve the locale files a run writes to, creating missing ones.
///
/// With `targets`, returns one file per distinct target in the given order,
/// creating each with `{}` when absent. Otherwise returns every `*.json` file
/// already in `dir` (sorted), or a new `<default_locale>.json` when there is
/// none. `dir` itself is created if needed.
pub fn ensure_locale_files(
    dir: &Path,
    default_locale: &str,
    targets: &[String],
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    if !targets.is_empty() {
        let mut paths: Vec<PathBuf> = Vec::with_capacity(targets.len());
        for target in targets {
            let path = locale_path(dir, target);
            if paths.contains(&path) {
                continue;
            }
            create_if_absent(&path)?;
            paths.push(path);
        }
        return Ok(paths);
    }

    let mut paths = find_locale_files(dir)?;
    if paths.is_empty() {
        let path = locale_path(dir, default_locale);
        create_if_absent(&path)?;
        paths.push(path);
    }
    Ok(paths)
}

fn locale_path(dir: &Path, locale: &str) -> PathBuf {
    let locale = locale.strip_suffix(".json").unwrap_or(locale);
    dir.join(format!("{}.json", locale))
}

/// Returns true if the file was created.
fn create_if_absent(path: &Path) -> Result<bool> {
    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(mut file) => {
            file.write_all(EMPTY_LOCALE.as_bytes())
                .with_context(|| format!("Failed to write file: {}", path.display()))?;
            Ok(true)
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(false),
        Err(e) => {
            Err(e).with_context(|| format!("Failed to create file: {}", path.display()))
        }
    }
}

fn find_locale_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?
    {
        let path = entry?.path();
        if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("json") {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}
