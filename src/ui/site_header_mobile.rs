// SPDX-License-Identifier: MPL-2.0
//! Mobile site header: burger trigger and slide-in navigation drawer.
//!
//! The header owns a single `drawer_open` flag (plus the embedded language
//! switcher's own state). The trigger opens the drawer; the dimming overlay,
//! the close icon, and every internal navigation link close it. Internal
//! links also ask the host to navigate, external links ask it to open a URL
//! in a new browsing context.
//!
//! The host renders two pieces: [`view_bar`] in its layout, and
//! [`view_drawer`] stacked above the page when the drawer is open.

use crate::config::SiteConfig;
use crate::i18n::I18n;
use crate::locale::Locale;
use crate::route::{ExternalLink, Page, Route, NAV_LINKS, SOCIAL_LINKS};
use crate::ui::design_tokens::{border, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::language_switcher;
use crate::ui::styles;
use iced::widget::svg::Svg;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, mouse_area, opaque, tooltip, Column, Container, Row, Stack, Text},
    Element, Length, Padding,
};

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub config: &'a SiteConfig,
    pub locale: &'a Locale,
    pub state: &'a State,
}

/// Contextual data needed to process header messages.
pub struct UpdateContext<'a> {
    pub config: &'a SiteConfig,
    pub locale: &'a Locale,
}

/// Header state: the drawer flag and the embedded switcher's state.
///
/// Both start closed. The switcher keeps its expansion across drawer
/// close/reopen unless [`SiteConfig::collapse_language_on_close`] is set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct State {
    drawer_open: bool,
    switcher: language_switcher::State,
}

impl State {
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.drawer_open
    }

    #[must_use]
    pub fn switcher(&self) -> language_switcher::State {
        self.switcher
    }

    fn close(&mut self, config: &SiteConfig) {
        self.drawer_open = false;
        if config.collapse_language_on_close {
            self.switcher.collapse();
        }
    }
}

/// Messages emitted by the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Burger icon activated.
    OpenDrawer,
    /// Click outside the drawer.
    DismissOverlay,
    CloseIcon,
    /// Internal navigation link activated.
    Navigate(Page),
    OpenExternal(ExternalLink),
    LanguageSwitcher(language_switcher::Message),
}

/// Events propagated to the host layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// In-app navigation request.
    Navigate(Route),
    /// Open this URL in a new browsing context.
    OpenExternal(String),
}

/// Process a header message and return the corresponding event.
pub fn update(state: &mut State, message: Message, ctx: &UpdateContext<'_>) -> Event {
    match message {
        Message::OpenDrawer => {
            state.drawer_open = true;
            tracing::debug!(locale = %ctx.locale, "Drawer opened");
            Event::None
        }
        Message::DismissOverlay | Message::CloseIcon => {
            state.close(ctx.config);
            tracing::debug!(?message, "Drawer closed");
            Event::None
        }
        Message::Navigate(page) => {
            state.close(ctx.config);
            let route = Route::new(ctx.locale.clone(), page);
            tracing::debug!(%route, "Drawer link activated");
            Event::Navigate(route)
        }
        Message::OpenExternal(link) => {
            // The drawer intentionally stays open for external links.
            let url = link.url(&ctx.config.links).to_string();
            tracing::debug!(?link, %url, "External link activated");
            Event::OpenExternal(url)
        }
        Message::LanguageSwitcher(message) => {
            match language_switcher::update(&mut state.switcher, message) {
                language_switcher::Event::None => Event::None,
                language_switcher::Event::Navigate(route) => Event::Navigate(route),
            }
        }
    }
}

// =============================================================================
// Render Model
// =============================================================================

/// What the open drawer renders, top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawerModel<'a> {
    /// Tooltip of the close icon.
    pub close_label: String,
    pub nav_items: Vec<NavItem>,
    pub jobs: ExternalItem<'a>,
    pub jobs_label: String,
    pub language_switcher: Option<language_switcher::Model<'a>>,
    pub social: Vec<ExternalItem<'a>>,
    pub privacy_policy: String,
    pub terms_of_use: String,
    pub last_updated: String,
}

/// Internal link row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub label: String,
    pub href: String,
    pub page: Page,
}

/// Link leaving the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExternalItem<'a> {
    pub link: ExternalLink,
    pub url: &'a str,
}

/// Builds the drawer's render model, or `None` while the drawer is closed.
#[must_use]
pub fn drawer_model<'a>(ctx: &ViewContext<'a>) -> Option<DrawerModel<'a>> {
    if !ctx.state.drawer_open {
        return None;
    }

    let (i18n, config, locale) = (ctx.i18n, ctx.config, ctx.locale);
    let external = |link: ExternalLink| ExternalItem {
        link,
        url: link.url(&config.links),
    };

    let nav_items = NAV_LINKS
        .iter()
        .map(|nav| NavItem {
            label: i18n.tr(locale, nav.label_key),
            href: Route::new(locale.clone(), nav.page).href(),
            page: nav.page,
        })
        .collect();

    Some(DrawerModel {
        close_label: i18n.tr(locale, "menu-close"),
        nav_items,
        jobs: external(ExternalLink::Jobs),
        jobs_label: i18n.tr(locale, "menu-jobs"),
        language_switcher: language_switcher::model(config, locale, ctx.state.switcher),
        social: SOCIAL_LINKS.iter().copied().map(external).collect(),
        privacy_policy: i18n.tr(locale, "footer-privacy-policy"),
        terms_of_use: i18n.tr(locale, "footer-terms-of-use"),
        last_updated: i18n.tr_with_args(
            locale,
            "last-updated-at",
            &[("date", config.last_updated.as_str())],
        ),
    })
}

/// Tooltip of the burger trigger.
#[must_use]
pub fn trigger_label(ctx: &ViewContext<'_>) -> String {
    ctx.i18n.tr(ctx.locale, "menu-open")
}

// =============================================================================
// View
// =============================================================================

/// Render the bar holding the drawer trigger.
#[must_use]
pub fn view_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let trigger = button(icons::sized(icons::menu_burger(), sizing::ICON_MD))
        .on_press(Message::OpenDrawer)
        .padding(spacing::XS)
        .style(styles::button::icon);

    Container::new(labelled(trigger, trigger_label(ctx), tooltip::Position::Left))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::HEADER_HEIGHT))
        .padding([0.0, spacing::MD])
        .align_x(Horizontal::Right)
        .align_y(Vertical::Center)
        .style(styles::container::header_bar)
        .into()
}

/// Render the overlay and drawer layer, or nothing while closed.
#[must_use]
pub fn view_drawer<'a>(ctx: &ViewContext<'a>) -> Option<Element<'a, Message>> {
    let model = drawer_model(ctx)?;

    let overlay = mouse_area(
        Container::new(Row::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::overlay),
    )
    .on_press(Message::DismissOverlay);

    let switcher = model
        .language_switcher
        .map(|switcher| language_switcher::view_model(switcher).map(Message::LanguageSwitcher));

    let drawer = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(build_close_row(model.close_label))
        .push(build_links(model.nav_items, model.jobs, model.jobs_label, switcher))
        .push(build_footer(
            &model.social,
            model.privacy_policy,
            model.terms_of_use,
            model.last_updated,
        ));

    let panel = Container::new(drawer)
        .width(Length::Fixed(sizing::DRAWER_WIDTH))
        .height(Length::Fill)
        .style(styles::container::drawer);

    let drawer_layer = Container::new(opaque(panel))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Right);

    Some(
        Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(overlay)
            .push(drawer_layer)
            .into(),
    )
}

fn build_close_row<'a>(label: String) -> Element<'a, Message> {
    let close = button(icons::sized(icons::close_fill(), sizing::ICON_MD))
        .on_press(Message::CloseIcon)
        .padding(0.0)
        .style(styles::button::icon);

    Container::new(labelled(close, label, tooltip::Position::Bottom))
        .width(Length::Fill)
        .padding(spacing::CLOSE_INSET)
        .align_x(Horizontal::Right)
        .into()
}

fn build_links<'a>(
    nav_items: Vec<NavItem>,
    jobs: ExternalItem<'a>,
    jobs_label: String,
    switcher: Option<Element<'a, Message>>,
) -> Element<'a, Message> {
    let mut links = Column::new().spacing(spacing::LG).push(separator());

    for (index, item) in nav_items.into_iter().enumerate() {
        let label = Text::new(item.label.to_uppercase()).size(typography::BODY_LG);
        let padding = if index == 0 {
            Padding::new(spacing::MD)
        } else {
            Padding::new(spacing::MD).top(0.0)
        };
        let link = Column::new()
            .spacing(spacing::LG)
            .push(
                button(label)
                    .on_press(Message::Navigate(item.page))
                    .width(Length::Fill)
                    .padding(padding)
                    .style(styles::button::link),
            )
            .push(separator());
        links = links.push(link);
    }

    let jobs_content = Row::new()
        .spacing(spacing::LG)
        .align_y(Vertical::Center)
        .push(Text::new(jobs_label.to_uppercase()).size(typography::BODY_LG))
        .push(icons::sized(icons::arrow_right_up(), sizing::ICON_MD));
    links = links.push(
        Column::new()
            .spacing(spacing::LG)
            .push(
                button(jobs_content)
                    .on_press(Message::OpenExternal(jobs.link))
                    .width(Length::Fill)
                    .padding(Padding::new(spacing::MD).top(0.0))
                    .style(styles::button::link),
            )
            .push(separator()),
    );

    if let Some(switcher) = switcher {
        links = links.push(switcher);
    }

    Container::new(links)
        .width(Length::Fill)
        .padding([0.0, spacing::MD])
        .into()
}

fn build_footer<'a>(
    social: &[ExternalItem<'a>],
    privacy_policy: String,
    terms_of_use: String,
    last_updated: String,
) -> Element<'a, Message> {
    let icons_row = social.iter().fold(Row::new().spacing(spacing::LG), |row, item| {
        row.push(
            button(icons::sized(social_icon(item.link), sizing::ICON_MD))
                .on_press(Message::OpenExternal(item.link))
                .padding(0.0)
                .style(styles::button::icon),
        )
    });

    let legal_row = Row::new()
        .spacing(spacing::LG)
        .push(Text::new(privacy_policy).size(typography::BODY))
        .push(Text::new(terms_of_use).size(typography::BODY));

    let updated = Container::new(Text::new(last_updated).size(typography::BODY))
        .style(styles::container::muted_text);

    let footer = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(icons_row)
        .push(legal_row)
        .push(updated);

    Container::new(footer)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding([spacing::FOOTER_Y, 0.0])
        .align_x(Horizontal::Center)
        .align_y(Vertical::Bottom)
        .into()
}

fn social_icon<'a>(link: ExternalLink) -> Svg<'a> {
    match link {
        ExternalLink::Twitter => icons::twitter(),
        ExternalLink::Discord => icons::discord(),
        ExternalLink::Github => icons::github(),
        ExternalLink::Articles => icons::mirror(),
        ExternalLink::Jobs => icons::arrow_right_up(),
    }
}

fn labelled<'a>(
    content: impl Into<Element<'a, Message>>,
    label: String,
    position: tooltip::Position,
) -> Element<'a, Message> {
    let tip = Container::new(Text::new(label).size(typography::BODY))
        .padding(spacing::XXS)
        .style(styles::container::tooltip);

    tooltip(content, tip, position).gap(spacing::XXS).into()
}

fn separator<'a>() -> Element<'a, Message> {
    Container::new(Row::new())
        .width(Length::Fill)
        .height(Length::Fixed(border::WIDTH_MD))
        .style(styles::container::separator)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::{Point, Size};
    use iced_test::simulator::{self, Simulator};

    struct Fixture {
        i18n: I18n,
        config: SiteConfig,
        locale: Locale,
    }

    impl Fixture {
        fn new(locale: &str) -> Self {
            Self {
                i18n: I18n::default(),
                config: SiteConfig::default(),
                locale: Locale::from(locale),
            }
        }

        fn update(&self, state: &mut State, message: Message) -> Event {
            let ctx = UpdateContext {
                config: &self.config,
                locale: &self.locale,
            };
            update(state, message, &ctx)
        }

        fn view_ctx<'a>(&'a self, state: &'a State) -> ViewContext<'a> {
            ViewContext {
                i18n: &self.i18n,
                config: &self.config,
                locale: &self.locale,
                state,
            }
        }
    }

    fn opened(fixture: &Fixture) -> State {
        let mut state = State::default();
        fixture.update(&mut state, Message::OpenDrawer);
        state
    }

    #[test]
    fn initial_state_is_closed_with_collapsed_switcher() {
        let state = State::default();
        assert!(!state.is_open());
        assert!(!state.switcher().is_open());
    }

    #[test]
    fn trigger_opens_drawer() {
        let fixture = Fixture::new("en");
        let mut state = State::default();
        let event = fixture.update(&mut state, Message::OpenDrawer);
        assert!(state.is_open());
        assert_eq!(event, Event::None);
    }

    #[test]
    fn overlay_and_close_icon_close_drawer() {
        let fixture = Fixture::new("en");
        for message in [Message::DismissOverlay, Message::CloseIcon] {
            let mut state = opened(&fixture);
            let event = fixture.update(&mut state, message);
            assert!(!state.is_open());
            assert_eq!(event, Event::None);
        }
    }

    #[test]
    fn every_nav_link_closes_drawer_and_navigates() {
        let fixture = Fixture::new("fr");
        for nav in NAV_LINKS {
            let mut state = opened(&fixture);
            let event = fixture.update(&mut state, Message::Navigate(nav.page));
            assert!(!state.is_open());
            assert_eq!(event, Event::Navigate(Route::new("fr".into(), nav.page)));
        }
    }

    #[test]
    fn external_link_keeps_drawer_open() {
        let fixture = Fixture::new("en");
        let mut state = opened(&fixture);
        let event = fixture.update(&mut state, Message::OpenExternal(ExternalLink::Jobs));
        assert!(state.is_open());
        assert_eq!(event, Event::OpenExternal(fixture.config.links.jobs.clone()));
    }

    #[test]
    fn drawer_reopens_indefinitely() {
        let fixture = Fixture::new("en");
        let mut state = State::default();
        for _ in 0..3 {
            fixture.update(&mut state, Message::OpenDrawer);
            assert!(state.is_open());
            fixture.update(&mut state, Message::CloseIcon);
            assert!(!state.is_open());
        }
    }

    #[test]
    fn switcher_state_survives_close_by_default() {
        let fixture = Fixture::new("en");
        let mut state = opened(&fixture);
        fixture.update(
            &mut state,
            Message::LanguageSwitcher(language_switcher::Message::Toggle),
        );
        fixture.update(&mut state, Message::DismissOverlay);
        fixture.update(&mut state, Message::OpenDrawer);
        assert!(state.switcher().is_open());
    }

    #[test]
    fn switcher_collapses_on_close_when_configured() {
        let mut fixture = Fixture::new("en");
        fixture.config.collapse_language_on_close = true;
        let mut state = opened(&fixture);
        fixture.update(
            &mut state,
            Message::LanguageSwitcher(language_switcher::Message::Toggle),
        );
        fixture.update(&mut state, Message::Navigate(Page::About));
        assert!(!state.switcher().is_open());
    }

    #[test]
    fn language_selection_bubbles_navigation() {
        let fixture = Fixture::new("en");
        let mut state = opened(&fixture);
        let event = fixture.update(
            &mut state,
            Message::LanguageSwitcher(language_switcher::Message::Select("es".into())),
        );
        assert_eq!(event, Event::Navigate(Route::home("es".into())));
        assert!(state.is_open());
    }

    #[test]
    fn closed_drawer_has_no_model_or_layer() {
        let fixture = Fixture::new("en");
        let state = State::default();
        assert!(drawer_model(&fixture.view_ctx(&state)).is_none());
        assert!(view_drawer(&fixture.view_ctx(&state)).is_none());
    }

    #[test]
    fn drawer_model_lists_content_in_order() {
        let fixture = Fixture::new("en");
        let state = opened(&fixture);
        let model = drawer_model(&fixture.view_ctx(&state)).unwrap();

        let labels: Vec<&str> = model.nav_items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, ["Home", "Project Library", "About", "Resources"]);
        let hrefs: Vec<&str> = model.nav_items.iter().map(|i| i.href.as_str()).collect();
        assert_eq!(hrefs, ["/en", "/en/projects", "/en/about", "/en/resources"]);

        assert_eq!(model.jobs_label, "Jobs");
        assert_eq!(model.jobs.url, fixture.config.links.jobs);

        let social: Vec<ExternalLink> = model.social.iter().map(|s| s.link).collect();
        assert_eq!(social, SOCIAL_LINKS);

        assert_eq!(model.privacy_policy, "Privacy Policy");
        assert_eq!(model.terms_of_use, "Terms of use");
        assert_eq!(model.last_updated, "Last updated at: January 16, 2024");
        assert!(model.language_switcher.is_some());
    }

    #[test]
    fn drawer_model_translates_for_locale() {
        let fixture = Fixture::new("fr");
        let state = opened(&fixture);
        let model = drawer_model(&fixture.view_ctx(&state)).unwrap();
        assert_eq!(model.nav_items[0].label, "Accueil");
        assert_eq!(model.nav_items[0].href, "/fr");
        assert!(model.last_updated.contains("January 16, 2024"));
    }

    #[test]
    fn drawer_model_omits_disabled_switcher() {
        let mut fixture = Fixture::new("en");
        fixture.config.show_language_switcher = false;
        let state = opened(&fixture);
        let model = drawer_model(&fixture.view_ctx(&state)).unwrap();
        assert!(model.language_switcher.is_none());
    }

    #[test]
    fn header_views_render() {
        let fixture = Fixture::new("es");
        let state = opened(&fixture);
        let ctx = fixture.view_ctx(&state);
        let _bar = view_bar(&ctx);
        assert!(view_drawer(&ctx).is_some());
    }

    #[test]
    fn icon_buttons_are_labelled_per_locale() {
        let fixture = Fixture::new("en");
        let state = opened(&fixture);
        let ctx = fixture.view_ctx(&state);
        assert_eq!(trigger_label(&ctx), "Open menu");
        assert_eq!(drawer_model(&ctx).unwrap().close_label, "Close menu");

        let fixture = Fixture::new("fr");
        let ctx = fixture.view_ctx(&state);
        assert_eq!(trigger_label(&ctx), "Ouvrir le menu");
        assert_eq!(drawer_model(&ctx).unwrap().close_label, "Fermer le menu");
    }

    fn phone(element: Element<'_, Message>) -> Simulator<'_, Message> {
        Simulator::with_size(
            iced::Settings::default(),
            Size::new(sizing::VIEWPORT_WIDTH, sizing::VIEWPORT_HEIGHT),
            element,
        )
    }

    fn click_at(element: Element<'_, Message>, position: Point) -> Vec<Message> {
        let mut ui = phone(element);
        ui.point_at(position);
        let _ = ui.simulate(simulator::click());
        ui.into_messages().collect()
    }

    #[test]
    fn click_left_of_drawer_dismisses() {
        let fixture = Fixture::new("en");
        let state = opened(&fixture);
        let layer = view_drawer(&fixture.view_ctx(&state)).unwrap();
        assert_eq!(
            click_at(layer, Point::new(40.0, 400.0)),
            [Message::DismissOverlay]
        );
    }

    #[test]
    fn click_on_blank_drawer_space_is_swallowed() {
        let fixture = Fixture::new("en");
        let state = opened(&fixture);
        let layer = view_drawer(&fixture.view_ctx(&state)).unwrap();
        assert!(click_at(layer, Point::new(300.0, 500.0)).is_empty());
    }

    #[test]
    fn rendered_links_emit_their_messages() {
        let fixture = Fixture::new("en");
        let state = opened(&fixture);
        let ctx = fixture.view_ctx(&state);

        let mut ui = phone(view_drawer(&ctx).unwrap());
        ui.click("HOME").expect("home link is rendered");
        ui.click("JOBS").expect("jobs link is rendered");
        ui.click("ENGLISH").expect("switcher toggle is rendered");
        let messages: Vec<Message> = ui.into_messages().collect();

        assert_eq!(
            messages,
            [
                Message::Navigate(Page::Home),
                Message::OpenExternal(ExternalLink::Jobs),
                Message::LanguageSwitcher(language_switcher::Message::Toggle),
            ]
        );
    }

    #[test]
    fn rendered_switcher_follows_model() {
        let fixture = Fixture::new("en");
        let mut state = opened(&fixture);
        fixture.update(
            &mut state,
            Message::LanguageSwitcher(language_switcher::Message::Toggle),
        );
        let ctx = fixture.view_ctx(&state);
        let model = drawer_model(&ctx).unwrap();
        let switcher = model.language_switcher.expect("switcher enabled");

        let mut ui = phone(view_drawer(&ctx).unwrap());
        for entry in &switcher.entries {
            ui.find(entry.label.to_uppercase())
                .expect("every modelled entry is rendered");
        }
        ui.click("FRANÇAIS").expect("french entry is rendered");
        let messages: Vec<Message> = ui.into_messages().collect();
        assert_eq!(
            messages,
            [Message::LanguageSwitcher(
                language_switcher::Message::Select("fr".into())
            )]
        );
    }
}
