// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the header's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale

## Examples

```
use site_header::ui::design_tokens::{palette, opacity};
use iced::Color;

// Dimming overlay behind the drawer
let overlay_bg = Color {
    a: opacity::OVERLAY_MEDIUM,
    ..palette::BLACK
};
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Neutrals
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_400: Color = Color::from_rgb(0.612, 0.639, 0.686);

    // Brand accent (anakiwa scale)
    pub const ANAKIWA_300: Color = Color::from_rgb(0.545, 0.847, 0.929);
    pub const ANAKIWA_500: Color = Color::from_rgb(0.314, 0.765, 0.878);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    /// Dimming overlay behind the drawer.
    pub const OVERLAY_MEDIUM: f32 = 0.5;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 14.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 20.0;
    pub const XL: f32 = 32.0;

    /// Inset of the close icon from the drawer's top-right corner.
    pub const CLOSE_INSET: f32 = 37.0;

    /// Vertical padding of the drawer footer.
    pub const FOOTER_Y: f32 = 40.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_GLOBE: f32 = 22.0;
    pub const ICON_MD: f32 = 24.0;

    /// Fixed width of the slide-in drawer.
    pub const DRAWER_WIDTH: f32 = 257.0;

    /// Height of the bar carrying the drawer trigger.
    pub const HEADER_HEIGHT: f32 = 56.0;

    /// Phone-sized default window used by the demo shell.
    pub const VIEWPORT_WIDTH: f32 = 390.0;
    pub const VIEWPORT_HEIGHT: f32 = 780.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Drawer links and switcher label.
    pub const BODY_LG: f32 = 16.0;

    /// Footer lines.
    pub const BODY: f32 = 14.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Medium border - Link separators in the drawer
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);

    assert!(sizing::ICON_MD > sizing::ICON_GLOBE);
    assert!(sizing::DRAWER_WIDTH < sizing::VIEWPORT_WIDTH);

    assert!(typography::BODY_LG > typography::BODY);
    assert!(border::WIDTH_MD > 0.0);
};
