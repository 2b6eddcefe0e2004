use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use colored::Colorize;
use glob::glob;
use walkdir::{DirEntry, WalkDir};

/// Check if a pattern contains glob wildcards (* ? or [).
/// Patterns without wildcards are treated as literal paths.
pub fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?') || pattern.contains('[')
}

/// Result of scanning source files.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Sorted, without duplicates.
    pub files: Vec<PathBuf>,
    pub skipped_count: usize,
}

/// Expand source patterns into the files to extract keys from.
///
/// Glob patterns are expanded as given. Literal directories (and directories
/// matched by a glob) are walked for source files; literal files are taken
/// as they are, whatever their extension.
pub fn scan_sources(patterns: &[String], verbose: bool) -> Result<ScanResult> {
    let mut files: BTreeSet<PathBuf> = BTreeSet::new();
    let mut skipped_count = 0;

    for pattern in patterns {
        if is_glob_pattern(pattern) {
            let entries = glob(pattern)
                .with_context(|| format!("Invalid source pattern: \"{}\"", pattern))?;
            for entry in entries {
                match entry {
                    Ok(path) if path.is_dir() => {
                        skipped_count += walk_dir(&path, &mut files, verbose);
                    }
                    Ok(path) => {
                        files.insert(path);
                    }
                    Err(e) => {
                        skipped_count += 1;
                        if verbose {
                            eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                        }
                    }
                }
            }
        } else {
            let path = Path::new(pattern);
            if path.is_dir() {
                skipped_count += walk_dir(path, &mut files, verbose);
            } else if path.is_file() {
                files.insert(path.to_path_buf());
            } else if verbose {
                eprintln!(
                    "{} Source path does not exist: {}",
                    "warning:".bold().yellow(),
                    path.display()
                );
            }
        }
    }

    Ok(ScanResult {
        files: files.into_iter().collect(),
        skipped_count,
    })
}

/// Returns the number of entries that could not be read.
fn walk_dir(dir: &Path, files: &mut BTreeSet<PathBuf>, verbose: bool) -> usize {
    let mut skipped_count = 0;
    for entry in WalkDir::new(dir).into_iter().filter_entry(|e| !is_ignored_dir(e)) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };
        let path = entry.path();
        if path.is_file() && is_scannable_file(path) {
            files.insert(path.to_path_buf());
        }
    }
    skipped_count
}

fn is_ignored_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && matches!(entry.file_name().to_str(), Some("node_modules" | ".git"))
}

fn is_scannable_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("vue" | "js" | "ts" | "jsx" | "tsx")
    )
}
