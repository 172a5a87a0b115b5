//! Core reconciliation engine.
//!
//! Everything in here is free of file I/O and printing: the CLI layer loads
//! language files, hands their string tables to the [`Reconciler`], and
//! decides what to do with the resulting [`Reconciliation`].
//!
//! ## Module Structure
//!
//! - `translation_set`: the in-memory string table of one language
//! - `reconcile`: key diffing and the check/translate/update policies

pub mod reconcile;
pub mod translation_set;

pub use reconcile::{
    Change, MISSING_TRANSLATION_PLACEHOLDER, MissingKey, Mode, ReconcileError, Reconciler,
    Reconciliation, TranslationProvider, missing_keys, obsolete_keys,
};
pub use translation_set::TranslationSet;
