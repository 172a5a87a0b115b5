//! Key-set reconciliation.
//!
//! A target translation set is aligned with the template in two passes:
//!
//! 1. Every template key the target lacks is resolved according to the
//!    [`Mode`]: `check` fails, `translate` asks a [`TranslationProvider`],
//!    `update` writes a placeholder.
//! 2. Every target key the template lacks is dropped.
//!
//! The reconciler never touches the target it is given; it returns a new
//! set together with the list of [`Change`]s that produced it.

use std::{fmt, io};

use clap::ValueEnum;
use thiserror::Error;

use super::TranslationSet;


/// Value written for keys added in update mode.
pub const MISSING_TRANSLATION_PLACEHOLDER: &str = "***** MISSING TRANSLATION *****";

/// How missing keys are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Mode {
    /// Fail on the first missing key, never modify anything
    Check,
    /// Ask for a translation of every missing key
    Translate,
    /// Fill missing keys with a placeholder
    Update,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Check => write!(f, "check"),
            Mode::Translate => write!(f, "translate"),
            Mode::Update => write!(f, "update"),
        }
    }
}

/// A template key that has no entry in the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingKey<'a> {
    /// Code of the target translation.
    pub code: &'a str,
    pub key: &'a str,
    /// Template text for the key, shown as context when translating.
    pub template_value: &'a str,
}

/// Source of translations for missing keys in translate mode.
pub trait TranslationProvider {
    fn provide(&mut self, missing: &MissingKey<'_>) -> io::Result<String>;
}

impl<P: TranslationProvider + ?Sized> TranslationProvider for &mut P {
    fn provide(&mut self, missing: &MissingKey<'_>) -> io::Result<String> {
        (**self).provide(missing)
    }
}

/// One modification made to a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    Added { key: String, value: String },
    Removed { key: String, value: String },
}

impl Change {
    pub fn key(&self) -> &str {
        match self {
            Change::Added { key, .. } | Change::Removed { key, .. } => key,
        }
    }
}

#[derive(Debug, Error)]
pub enum ReconcileError {
    #[error("Translation {code} is missing translation for key '{key}'")]
    MissingTranslation { code: String, key: String },

    #[error("Failed to read translation for key '{key}' in translation '{code}'")]
    Input {
        code: String,
        key: String,
        #[source]
        source: io::Error,
    },
}

/// Outcome of reconciling one target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    pub translations: TranslationSet,
    /// Additions in template order, then removals in target order.
    pub changes: Vec<Change>,
}

impl Reconciliation {
    pub fn is_unchanged(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn added_count(&self) -> usize {
        self.changes
            .iter()
            .filter(|c| matches!(c, Change::Added { .. }))
            .count()
    }

    pub fn removed_count(&self) -> usize {
        self.changes
            .iter()
            .filter(|c| matches!(c, Change::Removed { .. }))
            .count()
    }
}

/// Template keys absent from `target`, in template order.
pub fn missing_keys<'a>(
    template: &'a TranslationSet,
    target: &'a TranslationSet,
) -> impl Iterator<Item = &'a str> + 'a {
    template.keys().filter(|key| !target.contains_key(key))
}

/// Target keys absent from `template`, in target order.
pub fn obsolete_keys<'a>(
    template: &'a TranslationSet,
    target: &'a TranslationSet,
) -> impl Iterator<Item = &'a str> + 'a {
    target.keys().filter(|key| !template.contains_key(key))
}

/// Applies one [`Mode`] to any number of targets.
pub struct Reconciler<P> {
    mode: Mode,
    placeholder: String,
    provider: P,
}

impl<P: TranslationProvider> Reconciler<P> {
    pub fn new(mode: Mode, provider: P) -> Self {
        Self {
            mode,
            placeholder: MISSING_TRANSLATION_PLACEHOLDER.to_string(),
            provider,
        }
    }

    /// Override the value written for missing keys in update mode.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Align `target` with the key set of `template`.
    ///
    /// # Errors
    ///
    /// - [`ReconcileError::MissingTranslation`] in check mode, for the first
    ///   template key the target lacks.
    /// - [`ReconcileError::Input`] in translate mode, if the provider fails.
    pub fn reconcile(
        &mut self,
        template: &TranslationSet,
        target: &TranslationSet,
    ) -> Result<Reconciliation, ReconcileError> {
        let mut translations = target.translations.clone();
        let mut changes = Vec::new();

        for key in missing_keys(template, target) {
            let template_value = template.get(key).unwrap_or_default();
            let value = match self.mode {
                Mode::Check => {
                    return Err(ReconcileError::MissingTranslation {
                        code: target.code.clone(),
                        key: key.to_string(),
                    });
                }
                Mode::Translate => {
                    let missing = MissingKey {
                        code: &target.code,
                        key,
                        template_value,
                    };
                    self.provider
                        .provide(&missing)
                        .map_err(|source| ReconcileError::Input {
                            code: target.code.clone(),
                            key: key.to_string(),
                            source,
                        })?
                }
                Mode::Update => self.placeholder.clone(),
            };

            translations.insert(key.to_string(), value.clone());
            changes.push(Change::Added {
                key: key.to_string(),
                value,
            });
        }

        for key in obsolete_keys(template, target) {
            if let Some(value) = translations.shift_remove(key) {
                changes.push(Change::Removed {
                    key: key.to_string(),
                    value,
                });
            }
        }

        Ok(Reconciliation {
            translations: TranslationSet {
                code: target.code.clone(),
                translations,
            },
            changes,
        })
    }
}
