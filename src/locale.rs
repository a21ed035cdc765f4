// SPDX-License-Identifier: MPL-2.0
//! Locale identifier carried through the header components.
//!
//! A [`Locale`] is deliberately opaque: it is whatever short code the site
//! routes under (`en`, `fr`, `zh-CN`, ...). It selects the display label,
//! the translation bundle, and the `/{locale}` path prefix of every internal
//! link.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Locale used when the requested one is unknown.
pub const DEFAULT_LOCALE: &str = "en";

/// Opaque locale identifier supplied by the host layout.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locale(String);

impl Locale {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Root path of this locale, e.g. `/en`.
    #[must_use]
    pub fn root_path(&self) -> String {
        format!("/{}", self.0)
    }

    /// Path under this locale, e.g. `/en/about` for `"about"`.
    #[must_use]
    pub fn prefixed(&self, segment: &str) -> String {
        if segment.is_empty() {
            self.root_path()
        } else {
            format!("/{}/{}", self.0, segment.trim_start_matches('/'))
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::new(DEFAULT_LOCALE)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Locale {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for Locale {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl PartialEq<str> for Locale {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Locale {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_path_prefixes_slash() {
        assert_eq!(Locale::from("en").root_path(), "/en");
        assert_eq!(Locale::from("zh-CN").root_path(), "/zh-CN");
    }

    #[test]
    fn prefixed_joins_segment() {
        let locale = Locale::from("fr");
        assert_eq!(locale.prefixed("about"), "/fr/about");
        assert_eq!(locale.prefixed("/projects"), "/fr/projects");
        assert_eq!(locale.prefixed(""), "/fr");
    }

    #[test]
    fn default_is_english() {
        assert_eq!(Locale::default(), "en");
    }
}
