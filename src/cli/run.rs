use std::{env, path::PathBuf};

use anyhow::{Context, Result, bail};
use colored::Colorize;

use super::{args::Arguments, report};
use crate::{
    config::{CONFIG_FILE_NAME, Config, ConfigLoadResult, load_config, load_config_file},
    core::{PatternExtractor, PrefixRule, SyncOptions, SyncProgress, SyncReport, sync},
};

/// Run a sync from parsed arguments, printing progress as files are written.
pub fn run(args: Arguments) -> Result<SyncReport> {
    let options = resolve_options(args)?;
    let verbose = options.verbose;

    sync(&options, &PatternExtractor, |progress| match progress {
        SyncProgress::Planned(plan) => {
            report::print_skipped_warning(plan.skipped_sources, verbose);
            report::print_found(plan.found(), plan.source_files, verbose);
        }
        SyncProgress::Synced(file_report) => report::print_file_report(file_report, verbose),
    })
}

/// Merge command-line arguments over the config file.
fn resolve_options(args: Arguments) -> Result<SyncOptions> {
    let ConfigLoadResult { config, path } = match &args.config {
        Some(path) => ConfigLoadResult {
            config: load_config_file(path)?,
            path: Some(path.clone()),
        },
        None => {
            let cwd = env::current_dir().context("Failed to read current directory")?;
            load_config(&cwd)?
        }
    };

    if args.verbose
        && let Some(path) = &path
    {
        eprintln!("{} Using config file {}", "note:".bold(), path.display());
    }

    merge(args, config)
}

fn merge(args: Arguments, config: Config) -> Result<SyncOptions> {
    let sources = if args.sources.is_empty() {
        config.sources
    } else {
        args.sources
    };
    if sources.is_empty() {
        bail!(
            "Missing source pattern.\n\
             Hint: pass -v \"./src/**/*.vue\" or set 'sources' in {}",
            CONFIG_FILE_NAME
        );
    }

    let Some(locales_dir) = args
        .locales_dir
        .or_else(|| config.locales_dir.map(PathBuf::from))
    else {
        bail!(
            "Missing locale directory.\n\
             Hint: pass -l \"./src/locales/\" or set 'localesDir' in {}",
            CONFIG_FILE_NAME
        );
    };

    let targets = if args.targets.is_empty() {
        config.targets
    } else {
        args.targets
    };

    Ok(SyncOptions {
        sources,
        locales_dir,
        prefix: PrefixRule::from_option(args.key_prefix.or(config.key_prefix)),
        default_locale: args.default_locale.unwrap_or(config.default_locale),
        keep_unused: args.keep_unused || config.keep_unused,
        fill: args.fill.or(config.fill),
        targets,
        verbose: args.verbose,
    })
}
