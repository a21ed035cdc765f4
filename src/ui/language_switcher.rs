// SPDX-License-Identifier: MPL-2.0
//! Inline language switcher shown inside the navigation drawer.
//!
//! The switcher is a toggle button labelled with the current language and,
//! when expanded, the list of selectable locales. Each entry links to the
//! root page of its locale; the entry matching the current locale is styled
//! as active.
//!
//! Rendering goes through [`model`], a pure function of
//! `(config, locale, state)`, so tests can inspect exactly what the view
//! would draw.

use crate::config::SiteConfig;
use crate::locale::Locale;
use crate::route::Route;
use crate::ui::design_tokens::{border, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    font::{self, Font},
    widget::{button, Column, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the switcher.
pub struct ViewContext<'a> {
    pub config: &'a SiteConfig,
    pub locale: &'a Locale,
    pub state: State,
}

/// Expansion state of the sublist. Collapsed on construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct State {
    open: bool,
}

impl State {
    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn collapse(&mut self) {
        self.open = false;
    }
}

/// Messages emitted by the switcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Toggle,
    Select(Locale),
}

/// Events propagated to the parent component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Navigate(Route),
}

/// Process a switcher message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::Toggle => {
            state.open = !state.open;
            tracing::debug!(open = state.open, "Language sublist toggled");
            Event::None
        }
        Message::Select(locale) => {
            tracing::debug!(%locale, "Language selected");
            Event::Navigate(Route::home(locale))
        }
    }
}

/// What the switcher renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model<'a> {
    /// Label of the current language on the toggle button.
    pub label: &'a str,
    pub open: bool,
    /// Selectable locales; empty while collapsed.
    pub entries: Vec<Entry<'a>>,
}

/// One row of the expanded sublist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<'a> {
    pub label: &'a str,
    pub locale: &'a Locale,
    pub href: String,
    pub active: bool,
}

/// Builds the render model, or `None` when the switcher is disabled.
#[must_use]
pub fn model<'a>(config: &'a SiteConfig, locale: &Locale, state: State) -> Option<Model<'a>> {
    if !config.show_language_switcher {
        return None;
    }

    let entries = if state.open {
        config
            .languages
            .iter()
            .map(|item| Entry {
                label: &item.label,
                locale: &item.value,
                href: item.value.root_path(),
                active: &item.value == locale,
            })
            .collect()
    } else {
        Vec::new()
    };

    Some(Model {
        label: config.language_label(locale),
        open: state.open,
        entries,
    })
}

/// Render the switcher, or nothing when it is disabled.
#[must_use]
pub fn view(ctx: ViewContext<'_>) -> Option<Element<'_, Message>> {
    model(ctx.config, ctx.locale, ctx.state).map(view_model)
}

/// Render an already-built model.
#[must_use]
pub fn view_model(model: Model<'_>) -> Element<'_, Message> {
    let toggle_content = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(icons::sized(icons::globe(), sizing::ICON_GLOBE))
        .push(
            Text::new(model.label.to_uppercase())
                .size(typography::BODY_LG)
                .font(medium()),
        )
        .push(icons::sized(icons::arrow_down(), sizing::ICON_MD));

    let toggle = button(toggle_content)
        .on_press(Message::Toggle)
        .padding(0.0)
        .style(styles::button::link);

    let mut content = Column::new().push(toggle);

    if model.open {
        let list = model.entries.into_iter().fold(
            Column::new().spacing(spacing::XXS),
            |list, entry| list.push(build_entry(entry)),
        );
        content = content.push(
            Container::new(list).padding(iced::Padding {
                top: spacing::MD,
                left: spacing::XL,
                ..iced::Padding::ZERO
            }),
        );
    }

    let section = Column::new()
        .push(
            Container::new(content)
                .width(Length::Fill)
                .padding(iced::Padding {
                    top: 0.0,
                    bottom: spacing::MD,
                    left: spacing::SM,
                    right: spacing::SM,
                }),
        )
        .push(
            Container::new(Row::new())
                .width(Length::Fill)
                .height(Length::Fixed(border::WIDTH_MD))
                .style(styles::container::separator),
        );

    section.into()
}

fn build_entry(entry: Entry<'_>) -> Element<'_, Message> {
    let font = if entry.active { medium() } else { Font::DEFAULT };

    button(
        Text::new(entry.label.to_uppercase())
            .size(typography::BODY_LG)
            .font(font),
    )
    .on_press(Message::Select(entry.locale.clone()))
    .padding([spacing::XS, 0.0])
    .style(styles::button::language_entry(entry.active))
    .into()
}

fn medium() -> Font {
    Font {
        weight: font::Weight::Medium,
        ..Font::DEFAULT
    }
}
