//! The sync pipeline: extract keys once, then reconcile each locale file.
//!
//! Locale files are processed one after another in resolution order. The
//! first failure stops the run; files written before it stay written.

use std::path::{Path, PathBuf};

use anyhow::Result;

use super::{
    DefaultResolver, KeyExtractor, PrefixRule, Reconciler, TargetKeySet, extract_keys,
    scan_sources, store,
};

/// Everything a run needs, after CLI and config file have been merged.
#[derive(Debug, Clone)]
pub struct SyncOptions {
    /// Source glob patterns or directories.
    pub sources: Vec<String>,
    pub locales_dir: PathBuf,
    pub prefix: PrefixRule,
    /// Locale file created when `locales_dir` holds no `*.json` file.
    pub default_locale: String,
    pub keep_unused: bool,
    pub fill: Option<String>,
    /// Restrict the run to these locales, creating missing files.
    pub targets: Vec<String>,
    pub verbose: bool,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            sources: Vec::new(),
            locales_dir: PathBuf::from("./src/locales"),
            prefix: PrefixRule::Disabled,
            default_locale: "en_US".to_string(),
            keep_unused: false,
            fill: None,
            targets: Vec::new(),
            verbose: false,
        }
    }
}

/// Outcome for one locale file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub locale: String,
    /// Keys newly written with their default value.
    pub added: Vec<String>,
    /// Entries in the file after the merge.
    pub total: usize,
    /// The file's root was not a JSON object and has been replaced.
    pub replaced_non_object: bool,
}

/// Outcome of a whole run.
#[derive(Debug, Default)]
pub struct SyncReport {
    pub source_files: usize,
    /// Distinct keys found across all source files.
    pub found: usize,
    pub files: Vec<FileReport>,
}

/// Progress reported by [`sync`] while it runs.
#[derive(Debug, Clone, Copy)]
pub enum SyncProgress<'a> {
    /// Keys are extracted and locale files resolved; nothing is written yet.
    Planned(&'a SyncPlan),
    /// One locale file has been written.
    Synced(&'a FileReport),
}

/// Keys and locale files resolved before any locale is touched.
#[derive(Debug)]
pub struct SyncPlan {
    pub source_files: usize,
    /// Source paths that could not be read while scanning.
    pub skipped_sources: usize,
    pub targets: TargetKeySet,
    pub locale_files: Vec<PathBuf>,
}

impl SyncPlan {
    /// Scan and extract sources, build the target key set and make sure the
    /// locale files exist.
    pub fn prepare(options: &SyncOptions, extractor: &dyn KeyExtractor) -> Result<Self> {
        let scanned = scan_sources(&options.sources, options.verbose)?;
        let keys = extract_keys(&scanned.files, extractor)?;

        let resolver = DefaultResolver::new(options.prefix.clone(), options.fill.clone());
        let targets = TargetKeySet::build(&keys, &options.prefix, &resolver);

        let locale_files = store::ensure_locale_files(
            &options.locales_dir,
            &options.default_locale,
            &options.targets,
        )?;

        Ok(Self {
            source_files: scanned.files.len(),
            skipped_sources: scanned.skipped_count,
            targets,
            locale_files,
        })
    }

    pub fn found(&self) -> usize {
        self.targets.len()
    }
}

/// Load, reconcile and rewrite one locale file.
pub fn sync_locale(path: &Path, targets: &TargetKeySet, keep_unused: bool) -> Result<FileReport> {
    let existing = store::load(path)?;
    let reconciled = Reconciler::new(targets, keep_unused).reconcile(existing);
    store::write(path, &reconciled.document)?;

    Ok(FileReport {
        path: path.to_path_buf(),
        locale: store::locale_name(path).unwrap_or_default(),
        added: reconciled.added,
        total: reconciled.total,
        replaced_non_object: reconciled.replaced_non_object,
    })
}

/// Run the whole pipeline and collect the per-file reports.
///
/// `on_progress` sees the plan before any locale is touched and each file
/// right after it is written, so a failure still leaves the earlier files
/// reported.
pub fn sync<F>(
    options: &SyncOptions,
    extractor: &dyn KeyExtractor,
    mut on_progress: F,
) -> Result<SyncReport>
where
    F: FnMut(SyncProgress<'_>),
{
    let plan = SyncPlan::prepare(options, extractor)?;
    on_progress(SyncProgress::Planned(&plan));

    let mut files = Vec::with_capacity(plan.locale_files.len());
    for path in &plan.locale_files {
        let file_report = sync_locale(path, &plan.targets, options.keep_unused)?;
        on_progress(SyncProgress::Synced(&file_report));
        files.push(file_report);
    }

    Ok(SyncReport {
        source_files: plan.source_files,
        found: plan.found(),
        files,
    })
}
