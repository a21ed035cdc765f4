// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module for the header's SVG icons.
//!
//! Icons are embedded at compile time via `include_bytes!` from
//! `assets/icons/` and handles are cached using `OnceLock`, so repeated view
//! calls share one parsed handle per icon.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::icons;
//!
//! let trigger = button(icons::sized(icons::menu_burger(), sizing::ICON_MD));
//! ```
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `close_fill` not `close_drawer`).

use iced::widget::svg::{Handle, Svg};
use iced::Length;
use std::sync::OnceLock;

/// Macro to define an icon function with a cached handle.
/// The handle is created once on first access and reused thereafter.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        #[must_use]
        pub fn $name<'a>() -> Svg<'a> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/assets/icons/",
                $filename
            ));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

// =============================================================================
// Drawer Controls
// =============================================================================

define_icon!(
    menu_burger,
    "menu_burger.svg",
    "Burger icon: three horizontal lines."
);
define_icon!(close_fill, "close_fill.svg", "Close icon: X mark shape.");
define_icon!(
    arrow_right_up,
    "arrow_right_up.svg",
    "Diagonal arrow pointing up and right (leaves the site)."
);

// =============================================================================
// Language Switcher
// =============================================================================

define_icon!(globe, "globe.svg", "Globe icon: meridians and parallels.");
define_icon!(arrow_down, "arrow_down.svg", "Chevron pointing down.");

// =============================================================================
// Social Icons
// =============================================================================

define_icon!(twitter, "twitter.svg", "Twitter bird.");
define_icon!(discord, "discord.svg", "Discord controller face.");
define_icon!(github, "github.svg", "GitHub octocat silhouette.");
define_icon!(mirror, "mirror.svg", "Mirror arch (articles).");

// =============================================================================
// Helper Functions
// =============================================================================

/// Creates an icon with a fixed square size.
#[must_use]
pub fn sized(icon: Svg<'_>, size: f32) -> Svg<'_> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_icons_load() {
        let _ = menu_burger();
        let _ = close_fill();
        let _ = arrow_right_up();
        let _ = globe();
        let _ = arrow_down();
        let _ = twitter();
        let _ = discord();
        let _ = github();
        let _ = mirror();
    }

    #[test]
    fn sized_icon_builds() {
        let _icon = sized(globe(), 22.0);
    }
}
