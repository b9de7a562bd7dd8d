//! Locale dataset records

use serde::{Deserialize, Serialize};

/// A UI language offered by the directory.
///
/// Dataset order matters: the first entry is the locale a new session
/// starts in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locale {
    /// Locale code, e.g. `"en"` or `"es"`.
    pub id: String,
    /// Display name in the language itself, e.g. `"Español"`.
    pub name: String,
}
