// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for the site configuration.
//!
//! This module serves as the single source of truth for the values a fresh
//! `settings.toml` resolves to. Constants are organized by category.

// ==========================================================================
// Feature Flags
// ==========================================================================

/// Whether the drawer shows the inline language switcher.
pub const DEFAULT_SHOW_LANGUAGE_SWITCHER: bool = true;

/// Whether closing the drawer also collapses the language sublist.
pub const DEFAULT_COLLAPSE_LANGUAGE_ON_CLOSE: bool = false;

// ==========================================================================
// Footer
// ==========================================================================

/// Date interpolated into the "last updated" footer line.
pub const DEFAULT_LAST_UPDATED: &str = "January 16, 2024";

// ==========================================================================
// External Links
// ==========================================================================

pub const DEFAULT_JOBS_URL: &str = "https://pse.dev/jobs";
pub const DEFAULT_TWITTER_URL: &str = "https://twitter.com/PrivacyScaling";
pub const DEFAULT_DISCORD_URL: &str = "https://discord.com/invite/sF5CT5rzrR";
pub const DEFAULT_GITHUB_URL: &str = "https://github.com/privacy-scaling-explorations";
pub const DEFAULT_ARTICLES_URL: &str = "https://mirror.xyz/privacy-scaling-explorations.eth";

// ==========================================================================
// Languages
// ==========================================================================

/// Selectable locales as `(code, display label)`, in switcher order.
pub const DEFAULT_LANGUAGES: &[(&str, &str)] =
    &[("en", "English"), ("es", "Español"), ("fr", "Français")];
