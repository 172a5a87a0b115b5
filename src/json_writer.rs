use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Serializer, Value, ser::PrettyFormatter};

use crate::core::TranslationSet;

/// Indentation used when writing language files.
const INDENT: &[u8] = b"    ";

/// On-disk layout of a language file.
///
/// Only `code` and `translations` are interpreted; any other top-level
/// field is carried through unchanged.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LanguageFile {
    #[serde(flatten)]
    pub translations: TranslationSet,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A language file loaded for reconciliation and written back in place.
pub struct LanguageDocument {
    file_path: PathBuf,
    file: LanguageFile,
}

impl LanguageDocument {
    /// Read and parse a language file.
    pub fn open(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        let file: LanguageFile = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse language file: {}", path.display()))?;

        Ok(Self {
            file_path: path.to_path_buf(),
            file,
        })
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// File name for display, e.g. `de_DE.json`.
    pub fn file_name(&self) -> String {
        self.file_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.file_path.display().to_string())
    }

    pub fn code(&self) -> &str {
        &self.file.translations.code
    }

    pub fn translations(&self) -> &TranslationSet {
        &self.file.translations
    }

    pub fn set_translations(&mut self, translations: TranslationSet) {
        self.file.translations = translations;
    }

    /// Serialize the document the way it is written to disk.
    pub fn render(&self) -> Result<String> {
        to_sorted_json(&self.file)
    }

    /// Overwrite the file with the current content.
    pub fn save(&self) -> Result<()> {
        let content = self.render()?;
        fs::write(&self.file_path, content)
            .with_context(|| format!("Failed to write file: {}", self.file_path.display()))?;
        Ok(())
    }
}

/// Pretty-print `value` with every object's keys sorted and 4-space indentation.
///
/// Non-ASCII text is written as-is and no trailing newline is added.
pub fn to_sorted_json<T: Serialize>(value: &T) -> Result<String> {
    let mut value = serde_json::to_value(value).context("Failed to serialize JSON")?;
    value.sort_all_objects();

    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    value
        .serialize(&mut serializer)
        .context("Failed to serialize JSON")?;

    String::from_utf8(buf).context("Serialized JSON is not valid UTF-8")
}
