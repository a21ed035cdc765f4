// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, GRAY_400, WHITE},
};
use iced::widget::container;
use iced::{Background, Color, Theme};

/// Full-viewport dimming layer behind the drawer.
#[must_use]
pub fn overlay(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..BLACK
        })),
        ..Default::default()
    }
}

/// Drawer surface: black with white text.
#[must_use]
pub fn drawer(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(BLACK)),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Bar carrying the drawer trigger.
#[must_use]
pub fn header_bar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(BLACK)),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Label next to an icon button: inverted colours for contrast.
#[must_use]
pub fn tooltip(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(WHITE)),
        text_color: Some(BLACK),
        ..Default::default()
    }
}

/// Solid white line separating drawer sections.
#[must_use]
pub fn separator(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(WHITE)),
        ..Default::default()
    }
}

/// Muted footer text ("last updated").
#[must_use]
pub fn muted_text(_theme: &Theme) -> container::Style {
    container::Style {
        text_color: Some(GRAY_400),
        ..Default::default()
    }
}
