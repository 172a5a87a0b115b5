use std::process::ExitCode;

/// Exit status of the CLI.
///
/// - `Success` (0): every processed file was reconciled
/// - `Failure` (1): bad usage, setup problem, or a fatal error while processing
/// - `MissingTranslation` (2): check mode found a missing key
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    MissingTranslation,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::MissingTranslation => ExitCode::from(2),
        }
    }
}
