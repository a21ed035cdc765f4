// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    I18n(I18nError),
}

/// Failures while building the translation bundles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum I18nError {
    /// An embedded `.ftl` file is not valid Fluent syntax.
    Parse { file: String, details: String },

    /// A message id is defined twice for the same locale.
    Overriding { locale: String, details: String },

    /// An embedded file name is not a valid language identifier.
    InvalidLocale(String),
}

impl fmt::Display for I18nError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            I18nError::Parse { file, details } => {
                write!(f, "Failed to parse {}: {}", file, details)
            }
            I18nError::Overriding { locale, details } => {
                write!(f, "Conflicting messages for {}: {}", locale, details)
            }
            I18nError::InvalidLocale(name) => write!(f, "Invalid locale file name: {}", name),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::I18n(e) => write!(f, "I18n Error: {}", e),
        }
    }
}

impl std::error::Error for I18nError {}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::I18n(err) => Some(err),
            _ => None,
        }
    }
}

impl From<I18nError> for Error {
    fn from(err: I18nError) -> Self {
        Error::I18n(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
