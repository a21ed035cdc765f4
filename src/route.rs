// SPDX-License-Identifier: MPL-2.0
//! Site routes and the static link tables rendered by the drawer.

use crate::config::SiteLinks;
use crate::locale::Locale;
use std::fmt;

/// Internal pages reachable from the drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    ProjectLibrary,
    About,
    Resources,
}

impl Page {
    /// Path segment below the locale prefix. Empty for the home page.
    #[must_use]
    pub fn segment(self) -> &'static str {
        match self {
            Page::Home => "",
            Page::ProjectLibrary => "projects",
            Page::About => "about",
            Page::Resources => "resources",
        }
    }

    /// Translation key of the page's navigation label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Page::Home => "menu-home",
            Page::ProjectLibrary => "menu-project-library",
            Page::About => "menu-about",
            Page::Resources => "menu-resources",
        }
    }

    fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "" => Some(Page::Home),
            "projects" => Some(Page::ProjectLibrary),
            "about" => Some(Page::About),
            "resources" => Some(Page::Resources),
            _ => None,
        }
    }
}

/// A locale-qualified internal destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub locale: Locale,
    pub page: Page,
}

impl Route {
    pub fn new(locale: Locale, page: Page) -> Self {
        Self { locale, page }
    }

    /// Root page of a locale.
    pub fn home(locale: Locale) -> Self {
        Self::new(locale, Page::Home)
    }

    #[must_use]
    pub fn href(&self) -> String {
        self.locale.prefixed(self.page.segment())
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href())
    }
}

/// Parses an in-app path such as `/fr/about` into a [`Route`].
///
/// The first segment is taken as the locale. A missing leading slash is
/// tolerated. Returns `None` for an empty path or an unknown page.
#[must_use]
pub fn parse(path: &str) -> Option<Route> {
    let trimmed = path.trim().trim_matches('/');
    let mut segments = trimmed.splitn(2, '/');
    let locale = segments.next().filter(|s| !s.is_empty())?;
    let rest = segments.next().unwrap_or("").trim_end_matches('/');
    let page = Page::from_segment(rest)?;
    Some(Route::new(Locale::from(locale), page))
}

/// Static internal navigation entry: translation key and destination page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label_key: &'static str,
    pub page: Page,
}

/// Drawer navigation links, in render order.
pub const NAV_LINKS: [NavLink; 4] = [
    NavLink {
        label_key: "menu-home",
        page: Page::Home,
    },
    NavLink {
        label_key: "menu-project-library",
        page: Page::ProjectLibrary,
    },
    NavLink {
        label_key: "menu-about",
        page: Page::About,
    },
    NavLink {
        label_key: "menu-resources",
        page: Page::Resources,
    },
];

/// Links that leave the site and open in a new browsing context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExternalLink {
    Jobs,
    Twitter,
    Discord,
    Github,
    Articles,
}

/// Social icons row, in render order.
pub const SOCIAL_LINKS: [ExternalLink; 4] = [
    ExternalLink::Twitter,
    ExternalLink::Discord,
    ExternalLink::Github,
    ExternalLink::Articles,
];

impl ExternalLink {
    /// Configured destination URL.
    #[must_use]
    pub fn url(self, links: &SiteLinks) -> &str {
        match self {
            ExternalLink::Jobs => &links.jobs,
            ExternalLink::Twitter => &links.twitter,
            ExternalLink::Discord => &links.discord,
            ExternalLink::Github => &links.github,
            ExternalLink::Articles => &links.articles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_links_resolve_to_locale_prefixed_paths() {
        let locale = Locale::from("en");
        let hrefs: Vec<String> = NAV_LINKS
            .iter()
            .map(|link| Route::new(locale.clone(), link.page).href())
            .collect();
        assert_eq!(hrefs, ["/en", "/en/projects", "/en/about", "/en/resources"]);
    }

    #[test]
    fn nav_link_keys_match_pages() {
        for link in NAV_LINKS {
            assert_eq!(link.label_key, link.page.label_key());
        }
    }

    #[test]
    fn parse_reads_locale_and_page() {
        assert_eq!(parse("/en"), Some(Route::home("en".into())));
        assert_eq!(
            parse("/fr/about"),
            Some(Route::new("fr".into(), Page::About))
        );
        assert_eq!(
            parse("es/projects/"),
            Some(Route::new("es".into(), Page::ProjectLibrary))
        );
    }

    #[test]
    fn parse_rejects_unknown_pages_and_empty_paths() {
        assert_eq!(parse("/en/blog"), None);
        assert_eq!(parse("/"), None);
        assert_eq!(parse(""), None);
    }

    #[test]
    fn external_urls_come_from_config() {
        let links = SiteLinks::default();
        assert_eq!(ExternalLink::Jobs.url(&links), links.jobs);
        let social: Vec<&str> = SOCIAL_LINKS.iter().map(|l| l.url(&links)).collect();
        assert_eq!(
            social,
            [
                links.twitter.as_str(),
                links.discord.as_str(),
                links.github.as_str(),
                links.articles.as_str()
            ]
        );
    }
}
