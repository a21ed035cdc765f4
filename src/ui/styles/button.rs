// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.
//!
//! Every interactive element in the drawer is a borderless button on a black
//! surface; only the text colour changes between states.

use crate::ui::design_tokens::palette::{ANAKIWA_300, ANAKIWA_500, WHITE};
use iced::widget::button;
use iced::{Border, Theme};

/// Text-only drawer link: white, accent on hover.
pub fn link(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => ANAKIWA_300,
        _ => WHITE,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        ..button::Style::default()
    }
}

/// Icon-only button (trigger, close, social links).
pub fn icon(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: WHITE,
        border: Border::default(),
        ..button::Style::default()
    }
}

/// Entry of the language sublist; the active locale uses the accent colour.
pub fn language_entry(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        if active {
            button::Style {
                text_color: ANAKIWA_500,
                ..link(theme, status)
            }
        } else {
            link(theme, status)
        }
    }
}
