use std::process::ExitCode;

/// Exit status of the CLI.
///
/// - `Success` (0): every locale file was synced
/// - `Error` (2): the run stopped on an error (missing option, invalid JSON, I/O failure)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Every locale file was synced.
    Success,
    /// The run stopped on an error. Files written before it stay written.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
