//! CLI argument definitions using clap.
//!
//! ```text
//! langtool <check|translate|update> <LANG_FOLDER> [LANGUAGE]
//! ```
//!
//! - `check`: fail if any translation lacks a template key
//! - `translate`: prompt for every missing translation
//! - `update`: fill missing translations with a placeholder

use std::path::PathBuf;

use clap::Parser;

use crate::core::Mode;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// What to do with keys missing from a translation
    #[arg(value_enum)]
    pub mode: Mode,

    /// Folder containing the language files
    pub lang_folder: PathBuf,

    /// Only process the language file with this code (e.g. de_DE)
    pub language: Option<String>,

    /// Template language code (overrides config file)
    #[arg(long, value_name = "CODE")]
    pub template: Option<String>,

    /// Value written for missing keys in update mode (overrides config file)
    #[arg(long, value_name = "TEXT")]
    pub placeholder: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
