// SPDX-License-Identifier: MPL-2.0
use crate::error::{I18nError, Result};
use crate::locale::{Locale, DEFAULT_LOCALE};
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Translation lookup keyed by `(locale, message id)`.
///
/// Unlike a single-locale bundle, every lookup names its locale explicitly:
/// the header renders for whatever locale the host route carries.
pub struct I18n {
    bundles: HashMap<Locale, FluentBundle<FluentResource>>,
    available_locales: Vec<Locale>,
    fallback: Locale,
}

impl Default for I18n {
    fn default() -> Self {
        Self::load().unwrap_or_else(|err| {
            tracing::error!("Failed to load translations: {}", err);
            Self::empty()
        })
    }
}

impl I18n {
    /// Builds bundles from the embedded `assets/i18n/*.ftl` files.
    pub fn load() -> Result<Self> {
        let sources = Asset::iter().filter_map(|file| {
            let filename = file.as_ref().to_string();
            Asset::get(&filename).map(|content| {
                let text = String::from_utf8_lossy(content.data.as_ref()).to_string();
                (filename, text)
            })
        });
        Self::from_sources(sources)
    }

    /// Builds bundles from `(file name, FTL source)` pairs such as `("fr.ftl", ...)`.
    ///
    /// Files without the `.ftl` suffix are ignored.
    pub fn from_sources<I>(sources: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for (filename, text) in sources {
            let Some(locale_str) = filename.strip_suffix(".ftl") else {
                continue;
            };
            let langid = locale_str
                .parse::<LanguageIdentifier>()
                .map_err(|_| I18nError::InvalidLocale(filename.clone()))?;

            let resource = FluentResource::try_new(text).map_err(|(_, errors)| {
                I18nError::Parse {
                    file: filename.clone(),
                    details: format!("{:?}", errors),
                }
            })?;

            let mut bundle = FluentBundle::new(vec![langid]);
            bundle.set_use_isolating(false);
            bundle
                .add_resource(resource)
                .map_err(|errors| I18nError::Overriding {
                    locale: locale_str.to_string(),
                    details: format!("{:?}", errors),
                })?;

            let locale = Locale::from(locale_str);
            tracing::debug!(%locale, "Loaded translation bundle");
            bundles.insert(locale.clone(), bundle);
            available_locales.push(locale);
        }

        available_locales.sort();

        Ok(Self {
            bundles,
            available_locales,
            fallback: Locale::from(DEFAULT_LOCALE),
        })
    }

    fn empty() -> Self {
        Self {
            bundles: HashMap::new(),
            available_locales: Vec::new(),
            fallback: Locale::from(DEFAULT_LOCALE),
        }
    }

    #[must_use]
    pub fn available_locales(&self) -> &[Locale] {
        &self.available_locales
    }

    #[must_use]
    pub fn has_locale(&self, locale: &Locale) -> bool {
        self.bundles.contains_key(locale)
    }

    /// Translates `key` for `locale`.
    ///
    /// Missing locales or messages fall back to the English bundle; a key
    /// absent from both renders as `MISSING: {key}`.
    #[must_use]
    pub fn tr(&self, locale: &Locale, key: &str) -> String {
        self.format(locale, key, None)
    }

    /// Translates `key` for `locale`, interpolating the named arguments.
    #[must_use]
    pub fn tr_with_args(&self, locale: &Locale, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, *value);
        }
        self.format(locale, key, Some(&fluent_args))
    }

    fn format(&self, locale: &Locale, key: &str, args: Option<&FluentArgs<'_>>) -> String {
        self.format_in(locale, key, args)
            .or_else(|| self.format_in(&self.fallback, key, args))
            .unwrap_or_else(|| format!("MISSING: {}", key))
    }

    fn format_in(
        &self,
        locale: &Locale,
        key: &str,
        args: Option<&FluentArgs<'_>>,
    ) -> Option<String> {
        let bundle = self.bundles.get(locale)?;
        let pattern = bundle.get_message(key)?.value()?;
        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, args, &mut errors);
        if errors.is_empty() {
            Some(value.to_string())
        } else {
            tracing::warn!(%locale, key, "Translation formatting failed: {:?}", errors);
            None
        }
    }
}
