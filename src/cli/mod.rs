use std::io;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use crate::core::{ReconcileError, Reconciler};

mod args;
mod exit_status;
mod prompt;
mod report;
mod run;

pub use args::Arguments;
pub use exit_status::ExitStatus;
pub use prompt::Prompt;
pub use report::BatchSummary;
pub use run::{Settings, language_files, run};

/// Install the stderr diagnostics subscriber.
///
/// `RUST_LOG` wins when set; otherwise `-v` selects `debug` and the default
/// is `warn`.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let settings = Settings::resolve(&args)?;
    let mut stdout = io::stdout();

    let mut reconciler =
        Reconciler::new(settings.mode, Prompt::stdio()).with_placeholder(&settings.placeholder);

    match run::run(&settings, &mut reconciler, &mut stdout) {
        Ok(summary) => {
            report::print_summary_to(settings.mode, &summary, &mut stdout);
            Ok(ExitStatus::Success)
        }
        Err(err) => match err.downcast_ref::<ReconcileError>() {
            Some(missing @ ReconcileError::MissingTranslation { .. }) => {
                report::print_reconcile_error_to(missing, &mut stdout);
                Ok(ExitStatus::MissingTranslation)
            }
            _ => Err(err),
        },
    }
}
