use std::process::ExitCode;

use super::run::RunResult;

/// Exit status of the CLI.
///
/// - `Success` (0): every file was extracted
/// - `Failure` (1): at least one file failed extraction
/// - `Error` (2): the run itself failed (bad arguments, no input files, I/O)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl ExitStatus {
    pub fn from_result(result: &RunResult) -> Self {
        if result.failure_count() > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
