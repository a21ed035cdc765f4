// SPDX-License-Identifier: MPL-2.0
//! Demo shell hosting the mobile header.
//!
//! The `App` plays the part of the site layout around the header: it derives
//! the current locale from the route, hands the header its injected
//! configuration, and performs in-app navigation when the header asks for it.
//! External links are recorded and logged; launching a browser is left to
//! the embedding platform.

mod message;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, SiteConfig};
use crate::i18n::I18n;
use crate::locale::Locale;
use crate::route::{self, Route};
use crate::ui::design_tokens::sizing;
use crate::ui::site_header_mobile::{self, Event as HeaderEvent, UpdateContext};
use iced::{window, Element, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use unic_langid::LanguageIdentifier;

/// Root Iced application state.
pub struct App {
    i18n: I18n,
    config: SiteConfig,
    route: Route,
    header: site_header_mobile::State,
    /// Most recent external URL the header asked to open.
    last_external: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("route", &self.route)
            .field("header", &self.header)
            .field("last_external", &self.last_external)
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::with_config(&Flags::default(), SiteConfig::default(), I18n::default())
    }
}

/// Builds the phone-sized window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(sizing::VIEWPORT_WIDTH, sizing::VIEWPORT_HEIGHT),
        min_size: Some(iced::Size::new(sizing::DRAWER_WIDTH, sizing::HEADER_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot closure; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

impl App {
    /// Loads configuration and translations, then resolves the start route.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, warning) =
            config::load_with_override(flags.config_dir.as_ref().map(PathBuf::from));
        if let Some(warning) = warning {
            tracing::warn!("Falling back to default configuration: {}", warning);
        }

        let app = Self::with_config(&flags, config, I18n::default());
        tracing::info!(route = %app.route, "Site header started");
        (app, Task::none())
    }

    /// Builds the shell from already-loaded configuration and translations.
    pub fn with_config(flags: &Flags, config: SiteConfig, i18n: I18n) -> Self {
        let missing = untranslated_languages(&config, &i18n);
        if !missing.is_empty() {
            tracing::warn!(
                ?missing,
                available = ?i18n.available_locales(),
                "Selectable languages without translations will render in English"
            );
        }

        let route = resolve_initial_route(flags, &config, sys_locale::get_locale());
        Self {
            i18n,
            config,
            route,
            header: site_header_mobile::State::default(),
            last_external: None,
        }
    }

    pub fn title(&self) -> String {
        self.i18n.tr(self.locale(), "app-title")
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    #[must_use]
    pub fn locale(&self) -> &Locale {
        &self.route.locale
    }

    #[must_use]
    pub fn route(&self) -> &Route {
        &self.route
    }

    #[must_use]
    pub fn header(&self) -> &site_header_mobile::State {
        &self.header
    }

    #[must_use]
    pub fn last_external_request(&self) -> Option<&str> {
        self.last_external.as_deref()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Header(message) => {
                let ctx = UpdateContext {
                    config: &self.config,
                    locale: &self.route.locale,
                };
                match site_header_mobile::update(&mut self.header, message, &ctx) {
                    HeaderEvent::None => {}
                    HeaderEvent::Navigate(route) => self.navigate(route),
                    HeaderEvent::OpenExternal(url) => {
                        tracing::info!(%url, "External link requested");
                        self.last_external = Some(url);
                    }
                }
            }
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            config: &self.config,
            route: &self.route,
            header: &self.header,
            last_external: self.last_external.as_deref(),
        })
    }

    fn navigate(&mut self, route: Route) {
        if route.locale != self.route.locale {
            tracing::info!(from = %self.route.locale, to = %route.locale, "Locale changed");
        }
        tracing::info!(%route, "Navigating");
        self.route = route;
    }
}

/// Switcher languages with no translation bundle.
fn untranslated_languages<'a>(config: &'a SiteConfig, i18n: &I18n) -> Vec<&'a Locale> {
    config
        .languages
        .iter()
        .map(|item| &item.value)
        .filter(|locale| !i18n.has_locale(locale))
        .collect()
}

/// Picks the start route: explicit path, then `--lang`, then the system
/// locale, then the default locale. Only selectable locales are accepted
/// from `--lang` and the system.
fn resolve_initial_route(flags: &Flags, config: &SiteConfig, system: Option<String>) -> Route {
    if let Some(route) = flags.path.as_deref().and_then(route::parse) {
        return route;
    }

    let selectable = |code: &str| {
        let locale = Locale::from(code);
        config.is_selectable(&locale).then_some(locale)
    };

    if let Some(locale) = flags.lang.as_deref().and_then(selectable) {
        return Route::home(locale);
    }

    if let Some(system) = system {
        if let Some(locale) = selectable(&system) {
            return Route::home(locale);
        }
        // "fr-CA" should still land on "fr".
        if let Ok(langid) = system.parse::<LanguageIdentifier>() {
            if let Some(locale) = selectable(langid.language.as_str()) {
                return Route::home(locale);
            }
        }
    }

    Route::home(Locale::default())
}
