// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the header.
//!
//! This module provides localization capabilities using the Fluent localization system.
//!
//! # Features
//!
//! - Translation files embedded at compile time from `assets/i18n/*.ftl`
//! - Per-call locale selection, so the host route decides the language
//! - Named argument interpolation (`{ $date }`)
//! - Fallback to the English bundle when a locale or message is missing

pub mod fluent;

pub use fluent::I18n;
