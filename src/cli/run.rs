//! Batch driver: reconciles every language file in a folder against the template.
//!
//! Files are processed one at a time in file name order. Each one is
//! loaded, reconciled and (outside check mode) written back before the
//! next is opened, so a failure leaves earlier files as written.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use glob::{Pattern, glob};
use tracing::debug;

use super::{
    args::Arguments,
    report::{self, BatchSummary},
};
use crate::config::{load_config, validate_locale};
use crate::core::{Mode, Reconciler, TranslationProvider};
use crate::json_writer::LanguageDocument;

/// Arguments merged with the config file.
#[derive(Debug)]
pub struct Settings {
    pub mode: Mode,
    pub lang_folder: PathBuf,
    pub language: Option<String>,
    pub template_locale: String,
    pub placeholder: String,
}

impl Settings {
    /// Validate the language folder and resolve CLI overrides against the
    /// `.langtoolrc.json` found from that folder upwards.
    pub fn resolve(args: &Arguments) -> Result<Self> {
        let folder = &args.lang_folder;
        if !folder.exists() {
            bail!("{} does not exist", folder.display());
        }
        if !folder.is_dir() {
            bail!("{} is not a folder", folder.display());
        }

        let start_dir = fs::canonicalize(folder)
            .with_context(|| format!("Failed to resolve path: {}", folder.display()))?;
        let loaded = load_config(&start_dir)?;
        match &loaded.path {
            Some(path) => debug!(path = %path.display(), "loaded config file"),
            None => debug!("no config file found, using defaults"),
        }
        let config = loaded.config;

        let template_locale = args
            .template
            .clone()
            .unwrap_or_else(|| config.template_locale.clone());
        validate_locale(&template_locale)?;

        Ok(Self {
            mode: args.mode,
            lang_folder: folder.clone(),
            language: args.language.clone(),
            placeholder: args
                .placeholder
                .clone()
                .unwrap_or_else(|| config.placeholder.clone()),
            template_locale,
        })
    }

    pub fn template_path(&self) -> PathBuf {
        self.lang_folder
            .join(format!("{}.json", self.template_locale))
    }
}

/// List the language files to reconcile, sorted by file name.
///
/// Skips hidden files and every file whose name starts with the template
/// locale. With `language` set, only the file with that stem is kept.
pub fn language_files(
    folder: &Path,
    template_locale: &str,
    language: Option<&str>,
) -> Result<Vec<PathBuf>> {
    let folder_str = folder
        .to_str()
        .with_context(|| format!("Path is not valid UTF-8: {}", folder.display()))?;
    let pattern = format!("{}/*.json", Pattern::escape(folder_str));

    let mut files = Vec::new();
    for entry in glob(&pattern).with_context(|| format!("Invalid glob pattern: {}", pattern))? {
        let path = entry?;
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if name.starts_with('.') || name.starts_with(template_locale) {
            continue;
        }
        if let Some(language) = language
            && path.file_stem().and_then(|s| s.to_str()) != Some(language)
        {
            continue;
        }
        files.push(path);
    }

    files.sort();
    Ok(files)
}

/// Reconcile every selected language file against the template.
///
/// # Errors
///
/// Returns the [`crate::core::ReconcileError`] unchanged (so callers can
/// downcast it) and any load or save failure with file context.
pub fn run<P, W>(
    settings: &Settings,
    reconciler: &mut Reconciler<P>,
    writer: &mut W,
) -> Result<BatchSummary>
where
    P: TranslationProvider,
    W: Write,
{
    report::print_banner_to(
        settings.mode,
        &settings.lang_folder.display().to_string(),
        writer,
    );

    let template_path = settings.template_path();
    if !template_path.is_file() {
        bail!(
            "Default language file {} does not exist",
            template_path.display()
        );
    }

    let template = LanguageDocument::open(&template_path)?;
    report::print_template_to(&template.file_name(), writer);
    debug!(
        keys = template.translations().len(),
        code = template.code(),
        "loaded template"
    );

    let files = language_files(
        &settings.lang_folder,
        &settings.template_locale,
        settings.language.as_deref(),
    )?;
    if files.is_empty()
        && let Some(language) = &settings.language
    {
        report::print_no_match_to(language, writer);
    }

    let mut summary = BatchSummary::default();
    for path in files {
        let mut document = LanguageDocument::open(&path)?;
        report::print_file_header_to(&document.file_name(), writer);

        let reconciliation =
            reconciler.reconcile(template.translations(), document.translations())?;
        report::print_changes_to(
            settings.mode,
            document.code(),
            &reconciliation.changes,
            writer,
        );

        summary.files_processed += 1;
        summary.keys_added += reconciliation.added_count();
        summary.keys_removed += reconciliation.removed_count();
        if reconciliation.is_unchanged() {
            debug!(code = document.code(), "already matches template");
        }

        if settings.mode == Mode::Check {
            continue;
        }

        document.set_translations(reconciliation.translations);
        document.save()?;
        debug!(path = %document.file_path().display(), "saved");
    }

    Ok(summary)
}
