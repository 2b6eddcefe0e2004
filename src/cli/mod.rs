//! Command-line interface: argument parsing, config merging and console output.

use anyhow::Result;

mod args;
mod exit_status;
pub mod report;
mod run;

pub use args::Arguments;
pub use exit_status::ExitStatus;

use crate::core::SyncReport;

pub fn run_cli(args: Arguments) -> Result<SyncReport> {
    run::run(args)
}
