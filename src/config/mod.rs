// SPDX-License-Identifier: MPL-2.0
//! Site configuration injected into the header components.
//!
//! [`SiteConfig`] replaces the module-level site settings a web layout would
//! import: the header receives it by reference in its view and update
//! contexts. It is loaded from a `settings.toml` file; every field has a
//! default so partial files are accepted.
//!
//! # Examples
//!
//! ```no_run
//! use site_header::config::{self, SiteConfig};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.show_language_switcher = false;
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::locale::{Locale, DEFAULT_LOCALE};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// A selectable locale in the language switcher.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LanguageItem {
    pub label: String,
    pub value: Locale,
}

/// External destinations linked from the drawer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SiteLinks {
    pub jobs: String,
    pub twitter: String,
    pub discord: String,
    pub github: String,
    pub articles: String,
}

impl Default for SiteLinks {
    fn default() -> Self {
        Self {
            jobs: DEFAULT_JOBS_URL.to_string(),
            twitter: DEFAULT_TWITTER_URL.to_string(),
            discord: DEFAULT_DISCORD_URL.to_string(),
            github: DEFAULT_GITHUB_URL.to_string(),
            articles: DEFAULT_ARTICLES_URL.to_string(),
        }
    }
}

/// Static site configuration consumed by the header.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteConfig {
    /// Render the inline language switcher inside the drawer.
    #[serde(default = "default_show_language_switcher")]
    pub show_language_switcher: bool,

    /// Collapse the language sublist whenever the drawer closes.
    #[serde(default = "default_collapse_language_on_close")]
    pub collapse_language_on_close: bool,

    /// Date literal shown in the "last updated" footer line.
    #[serde(default = "default_last_updated")]
    pub last_updated: String,

    #[serde(default)]
    pub links: SiteLinks,

    /// Locale code to display label (e.g. `en` -> `English`).
    #[serde(default = "default_language_labels")]
    pub language_labels: BTreeMap<String, String>,

    /// Locales offered by the switcher, in display order.
    #[serde(default = "default_languages")]
    pub languages: Vec<LanguageItem>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            show_language_switcher: default_show_language_switcher(),
            collapse_language_on_close: default_collapse_language_on_close(),
            last_updated: default_last_updated(),
            links: SiteLinks::default(),
            language_labels: default_language_labels(),
            languages: default_languages(),
        }
    }
}

impl SiteConfig {
    /// Display label for `locale`, falling back to the default locale's label.
    #[must_use]
    pub fn language_label(&self, locale: &Locale) -> &str {
        self.language_labels
            .get(locale.as_str())
            .or_else(|| self.language_labels.get(DEFAULT_LOCALE))
            .map_or(DEFAULT_LOCALE, String::as_str)
    }

    /// Whether `locale` is one of the switcher's selectable locales.
    #[must_use]
    pub fn is_selectable(&self, locale: &Locale) -> bool {
        self.languages.iter().any(|item| &item.value == locale)
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_show_language_switcher() -> bool {
    DEFAULT_SHOW_LANGUAGE_SWITCHER
}

fn default_collapse_language_on_close() -> bool {
    DEFAULT_COLLAPSE_LANGUAGE_ON_CLOSE
}

fn default_last_updated() -> String {
    DEFAULT_LAST_UPDATED.to_string()
}

fn default_language_labels() -> BTreeMap<String, String> {
    DEFAULT_LANGUAGES
        .iter()
        .map(|(code, label)| ((*code).to_string(), (*label).to_string()))
        .collect()
}

fn default_languages() -> Vec<LanguageItem> {
    DEFAULT_LANGUAGES
        .iter()
        .map(|(code, label)| LanguageItem {
            label: (*label).to_string(),
            value: Locale::from(*code),
        })
        .collect()
}

// =============================================================================
// Load Functions
// =============================================================================

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). A missing file yields the
/// defaults silently; an unreadable or invalid file yields the defaults plus
/// a warning describing the problem.
pub fn load() -> (SiteConfig, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (SiteConfig, Option<String>) {
    let Some(path) = config_path_with_override(base_dir) else {
        return (SiteConfig::default(), None);
    };
    if !path.exists() {
        tracing::debug!("Configuration file not found: {:?}", path);
        return (SiteConfig::default(), None);
    }

    tracing::debug!("Loading configuration from: {:?}", path);
    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => (
            SiteConfig::default(),
            Some(format!("{}: {}", path.display(), err)),
        ),
    }
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<SiteConfig> {
    let content = fs::read_to_string(path)?;
    let config: SiteConfig = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &SiteConfig) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &SiteConfig, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &SiteConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_config_shows_switcher_with_three_languages() {
        let config = SiteConfig::default();
        assert!(config.show_language_switcher);
        assert!(!config.collapse_language_on_close);
        assert_eq!(config.last_updated, "January 16, 2024");
        let codes: Vec<&str> = config.languages.iter().map(|l| l.value.as_str()).collect();
        assert_eq!(codes, ["en", "es", "fr"]);
    }

    #[test]
    fn language_label_falls_back_to_english() {
        let config = SiteConfig::default();
        assert_eq!(config.language_label(&"fr".into()), "Français");
        assert_eq!(config.language_label(&"xx".into()), "English");
    }

    #[test]
    fn language_label_without_english_entry_uses_code() {
        let mut config = SiteConfig::default();
        config.language_labels.clear();
        assert_eq!(config.language_label(&"fr".into()), DEFAULT_LOCALE);
    }

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let mut config = SiteConfig::default();
        config.show_language_switcher = false;
        config.links.jobs = "https://example.org/careers".to_string();
        config.languages.reverse();

        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            "show_language_switcher = false\n[links]\ngithub = \"https://example.org/gh\"\n",
        )
        .expect("failed to write partial config");

        let loaded = load_from_path(&config_path).expect("partial config should load");
        assert!(!loaded.show_language_switcher);
        assert_eq!(loaded.links.github, "https://example.org/gh");
        assert_eq!(loaded.links.twitter, DEFAULT_TWITTER_URL);
        assert_eq!(loaded.languages.len(), DEFAULT_LANGUAGES.len());
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_warns_and_defaults_on_invalid_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "show_language_switcher = 3")
            .expect("failed to write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, SiteConfig::default());
        assert!(warning.is_some());
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, SiteConfig::default());
        assert!(warning.is_none());
    }

    #[test]
    fn save_with_override_creates_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let dir = temp_dir.path().join("deep").join("path");
        save_with_override(&SiteConfig::default(), Some(dir.clone()))
            .expect("save should create directories");
        assert!(dir.join(CONFIG_FILE).exists());
    }
}
