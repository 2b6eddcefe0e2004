//! Report formatting and printing utilities.
//!
//! Separate from the core so the sync engine can be used as a library.

use std::io::{self, Write};

use colored::Colorize;

use crate::core::FileReport;

/// Print the number of distinct keys found in the sources.
pub fn print_found(found: usize, source_files: usize, verbose: bool) {
    print_found_to(found, source_files, verbose, &mut io::stdout().lock());
}

pub fn print_found_to<W: Write>(found: usize, source_files: usize, verbose: bool, writer: &mut W) {
    let _ = writeln!(writer);
    if verbose {
        let _ = writeln!(
            writer,
            "{} {} (in {} source {})",
            "Found:".bold(),
            found,
            source_files,
            if source_files == 1 { "file" } else { "files" }
        );
    } else {
        let _ = writeln!(writer, "{} {}", "Found:".bold(), found);
    }
}

/// Print a warning about source paths that could not be read.
pub fn print_skipped_warning(count: usize, verbose: bool) {
    print_skipped_warning_to(count, verbose, &mut io::stderr().lock());
}

pub fn print_skipped_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} source path(s) could not be read (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "--verbose".cyan()
        );
    }
}

/// Print the outcome for one locale file.
pub fn print_file_report(report: &FileReport, verbose: bool) {
    if report.replaced_non_object {
        print_non_object_warning_to(report, &mut io::stderr().lock());
    }
    print_file_report_to(report, verbose, &mut io::stdout().lock());
}

pub fn print_file_report_to<W: Write>(report: &FileReport, verbose: bool, writer: &mut W) {
    let file_name = report
        .path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| report.locale.clone());

    let added = report.added.len();
    let added_str = if added > 0 {
        added.to_string().green().to_string()
    } else {
        added.to_string()
    };

    let _ = writeln!(writer);
    let _ = writeln!(writer, "{} {}", "Locale file:".bold(), file_name.cyan());
    let _ = writeln!(writer, "  Added: {}", added_str);
    if verbose {
        for key in &report.added {
            let _ = writeln!(writer, "    {} {}", "+".green(), key);
        }
    }
    let _ = writeln!(writer, "  Total: {}", report.total);
}

fn print_non_object_warning_to<W: Write>(report: &FileReport, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {} does not contain a JSON object, its content was replaced",
        "warning:".bold().yellow(),
        report.path.display()
    );
}
