// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo shell.
//!
//! The header bar sits above a placeholder page; when the drawer is open its
//! overlay layer is stacked over both.

use super::Message;
use crate::config::SiteConfig;
use crate::i18n::I18n;
use crate::route::Route;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::site_header_mobile::{self, State as HeaderState};
use iced::{
    widget::{Column, Container, Stack, Text},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub config: &'a SiteConfig,
    pub route: &'a Route,
    pub header: &'a HeaderState,
    pub last_external: Option<&'a str>,
}

/// Renders the header, the current page, and the drawer layer when open.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let header_ctx = site_header_mobile::ViewContext {
        i18n: ctx.i18n,
        config: ctx.config,
        locale: &ctx.route.locale,
        state: ctx.header,
    };

    let base = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(site_header_mobile::view_bar(&header_ctx).map(Message::Header))
        .push(view_page(&ctx));

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base);

    if let Some(drawer) = site_header_mobile::view_drawer(&header_ctx) {
        layers = layers.push(drawer.map(Message::Header));
    }

    layers.into()
}

fn view_page<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let locale = &ctx.route.locale;
    let href = ctx.route.href();

    let title = ctx.i18n.tr(locale, ctx.route.page.label_key());
    let current_path = ctx
        .i18n
        .tr_with_args(locale, "page-current-path", &[("path", href.as_str())]);

    let mut content = Column::new()
        .spacing(spacing::MD)
        .push(Text::new(title).size(typography::BODY_LG * 2.0))
        .push(Text::new(current_path).size(typography::BODY));

    if let Some(url) = ctx.last_external {
        content = content.push(
            Text::new(ctx.i18n.tr_with_args(locale, "page-external-request", &[("url", url)]))
                .size(typography::BODY),
        );
    }

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .into()
}
