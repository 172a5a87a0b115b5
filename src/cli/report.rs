//! Report formatting and printing utilities.
//!
//! Every printer has a `_to` variant taking a writer, used by the batch
//! driver and by tests. Write errors on the report stream are ignored.

use std::io::Write;

use colored::Colorize;

use crate::core::{Change, Mode, ReconcileError};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Totals over one batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub files_processed: usize,
    pub keys_added: usize,
    pub keys_removed: usize,
}

pub fn print_banner_to<W: Write>(mode: Mode, lang_folder: &str, writer: &mut W) {
    let _ = writeln!(writer, "Using langtool in {} mode", mode.to_string().bold());
    let _ = writeln!(writer, "Processing language files in {}...", lang_folder);
}

pub fn print_template_to<W: Write>(file_name: &str, writer: &mut W) {
    let _ = writeln!(
        writer,
        "Using file '{}' as template language file",
        file_name.cyan()
    );
}

pub fn print_file_header_to<W: Write>(file_name: &str, writer: &mut W) {
    let _ = writeln!(writer);
    let _ = writeln!(writer, "Processing file '{}'", file_name.bold());
    let _ = writeln!(writer, "{}", "-".repeat(28).dimmed());
}

/// Print what reconciling one file did.
///
/// In check mode nothing is written back, so obsolete keys are reported as
/// warnings instead of removals.
pub fn print_changes_to<W: Write>(mode: Mode, code: &str, changes: &[Change], writer: &mut W) {
    for change in changes {
        match (change, mode) {
            (Change::Added { key, .. }, Mode::Update) => {
                let _ = writeln!(
                    writer,
                    "Added placeholder for missing key '{}' to translation '{}'",
                    key.yellow(),
                    code
                );
            }
            (Change::Added { key, value }, _) => {
                let _ = writeln!(
                    writer,
                    "Added translation for key '{}' to translation '{}': '{}'",
                    key.green(),
                    code,
                    value
                );
            }
            (Change::Removed { key, value }, Mode::Check) => {
                let _ = writeln!(
                    writer,
                    "{} Translation {} contains unused key '{}' with value '{}'",
                    "warning:".bold().yellow(),
                    code,
                    key,
                    value
                );
            }
            (Change::Removed { key, value }, _) => {
                let _ = writeln!(
                    writer,
                    "Removed unused key '{}' from translation '{}' (was '{}')",
                    key.red(),
                    code,
                    value.dimmed()
                );
            }
        }
    }
}

pub fn print_reconcile_error_to<W: Write>(err: &ReconcileError, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {} {}",
        FAILURE_MARK.red(),
        "error:".bold().red(),
        err
    );
}

/// Print a warning when a language filter matched no file.
pub fn print_no_match_to<W: Write>(language: &str, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} no translation file matches language '{}'",
        "warning:".bold().yellow(),
        language
    );
}

pub fn print_summary_to<W: Write>(mode: Mode, summary: &BatchSummary, writer: &mut W) {
    let files = format!(
        "{} translation {}",
        summary.files_processed,
        plural(summary.files_processed, "file", "files")
    );

    let msg = match mode {
        Mode::Check => format!("Checked {} - no missing translations", files),
        Mode::Translate | Mode::Update => format!(
            "Processed {}: {} {} added, {} {} removed",
            files,
            summary.keys_added,
            plural(summary.keys_added, "key", "keys"),
            summary.keys_removed,
            plural(summary.keys_removed, "key", "keys")
        ),
    };

    let _ = writeln!(writer);
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
}

fn plural<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 { singular } else { plural }
}
