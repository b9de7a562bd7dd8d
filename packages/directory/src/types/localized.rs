//! Locale-mapped display text
//!
//! The bundled datasets write display strings in two shapes, often mixed
//! within one file: a bare string (`"name": "Ace Cafe"`) or a map keyed by
//! locale code (`"name": {"en": "North Market", "es": "Mercado del Norte"}`).
//! Both deserialize into [`LocalizedText`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Display text that is either one string for all locales or a per-locale map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocalizedText {
    /// One string, shown regardless of locale.
    Plain(String),
    /// Locale code to display string.
    ByLocale(HashMap<String, String>),
}

impl LocalizedText {
    /// Resolve the text for a locale.
    ///
    /// Plain text resolves for any locale. A locale map resolves only when
    /// it carries an entry for exactly `locale`; there is no fallback chain.
    pub fn resolve(&self, locale: &str) -> Option<&str> {
        match self {
            LocalizedText::Plain(text) => Some(text),
            LocalizedText::ByLocale(by_locale) => by_locale.get(locale).map(String::as_str),
        }
    }
}

impl From<&str> for LocalizedText {
    fn from(text: &str) -> Self {
        LocalizedText::Plain(text.to_string())
    }
}

impl From<String> for LocalizedText {
    fn from(text: String) -> Self {
        LocalizedText::Plain(text)
    }
}
