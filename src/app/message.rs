// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo shell.

use crate::ui::site_header_mobile;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Header(site_header_mobile::Message),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override (e.g. `fr`), used when `path` carries none.
    pub lang: Option<String>,
    /// Optional in-app path to start on (e.g. `/fr/about`).
    pub path: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `SITE_HEADER_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
