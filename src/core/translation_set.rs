use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The string table of one language.
///
/// Keys keep the order they were read in, so prompts and diagnostics follow
/// the layout of the source file. Sorting only happens when writing to disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct TranslationSet {
    /// Language identifier, e.g. `de_DE`.
    pub code: String,
    /// Translation key to translated text.
    pub translations: IndexMap<String, String>,
}

impl TranslationSet {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            translations: IndexMap::new(),
        }
    }

    /// Build a set from `(key, value)` pairs, keeping their order.
    pub fn with_translations<I, K, V>(code: impl Into<String>, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            code: code.into(),
            translations: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.translations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.translations.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.translations.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.translations.get(key).map(String::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.translations.keys().map(String::as_str)
    }

    /// True if both sets define exactly the same keys, ignoring order.
    pub fn has_same_keys(&self, other: &TranslationSet) -> bool {
        self.len() == other.len() && self.keys().all(|key| other.contains_key(key))
    }
}
