//! Langtool - keeps translation files in sync with a template language
//!
//! Langtool compares every language file in a folder against the template
//! language file (`en_US.json` by default). Keys missing from a translation
//! are reported (`check`), asked for interactively (`translate`) or filled
//! with a placeholder (`update`); keys the template no longer has are
//! removed.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, batch driver, output)
//! - `config`: Configuration file loading and parsing
//! - `core`: Translation sets and the reconciliation engine
//! - `json_writer`: Language file loading and normalized writing

pub mod cli;
pub mod config;
pub mod core;
pub mod json_writer;
