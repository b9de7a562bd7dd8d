//! Display-string lookup seam
//!
//! Category and sub-category ids are machine keys; what the user types a
//! search term against is their translated labels. Translation belongs to
//! the host's localization layer, so the engine reaches it through the
//! [`StringLookup`] trait, usually backed by the host's `t` function
//! already bound to the session locale.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Localized display strings for taxonomy keys.
///
/// The engine asks for [`category_key`] and [`sub_category_key`] keys when
/// matching a search term against a resource's category labels.
/// Implementations must be pure: same key, same answer, no side effects.
pub trait StringLookup {
    /// The display string for a key, or `None` when no translation exists.
    /// A missing translation makes that one field non-matching, nothing
    /// more.
    fn lookup(&self, key: &str) -> Option<String>;
}

/// The lookup key for a category's display string.
pub fn category_key(category: &str) -> String {
    format!("category.{}", category)
}

/// The lookup key for a sub-category's display string.
pub fn sub_category_key(sub_category: &str) -> String {
    format!("subCategory.{}", sub_category)
}

/// A flat map of lookup keys to display strings.
///
/// Suits hosts that bundle their strings as plain JSON key/value files,
/// and doubles as the stand-in for a full localization layer in tests.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StringTable {
    strings: HashMap<String, String>,
}

impl StringTable {
    /// Empty table; every lookup misses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one key/value pair, builder style.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.strings.insert(key.into(), value.into());
        self
    }
}

impl StringLookup for StringTable {
    fn lookup(&self, key: &str) -> Option<String> {
        self.strings.get(key).cloned()
    }
}
