//! # Localized Fields
//!
//! A localized field maps a language code to a value. Records are
//! hand-authored, so the map may hold codes outside [`REQUIRED_LANGUAGES`]
//! or miss some of them; nothing here rejects that. Completeness is the
//! validator's concern.
//!
//! [`REQUIRED_LANGUAGES`]: crate::language::REQUIRED_LANGUAGES

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::language::Language;

/// A mapping from language code to value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Localized<T>(BTreeMap<String, T>);

impl<T> Default for Localized<T> {
    fn default() -> Self {
        Self(BTreeMap::new())
    }
}

impl<T> Localized<T> {
    /// An empty field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Exact lookup by language code, no fallback.
    pub fn get(&self, code: &str) -> Option<&T> {
        self.0.get(code)
    }

    /// Exact lookup by [`Language`], no fallback.
    pub fn get_lang(&self, lang: Language) -> Option<&T> {
        self.0.get(lang.code())
    }

    /// Set the value for a language code, returning the previous one.
    pub fn insert(&mut self, code: impl Into<String>, value: T) -> Option<T> {
        self.0.insert(code.into(), value)
    }

    /// All values, in language-code order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.0.values()
    }

    /// All `(code, value)` pairs, in language-code order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// True if no language has a value.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, T> FromIterator<(K, T)> for Localized<T> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl Localized<String> {
    /// Text for `lang`, falling back to English. See [`localized()`].
    pub fn text(&self, lang: Language) -> Option<&str> {
        localized(self, lang)
    }
}

impl Localized<Vec<String>> {
    /// Tags for `lang`, falling back to English, empty if neither exists.
    pub fn tags(&self, lang: Language) -> &[String] {
        self.get_lang(lang)
            .filter(|tags| !tags.is_empty())
            .or_else(|| self.get_lang(Language::En))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

/// Look up a localized string with an explicit fallback policy.
///
/// Returns the non-empty value for `lang`; otherwise the non-empty English
/// value; otherwise `None`.
pub fn localized(field: &Localized<String>, lang: Language) -> Option<&str> {
    let pick = |l: Language| field.get_lang(l).map(String::as_str).filter(|s| !s.is_empty());
    pick(lang).or_else(|| pick(Language::En))
}
