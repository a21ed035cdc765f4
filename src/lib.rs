// SPDX-License-Identifier: MPL-2.0
//! `site_header` is an internationalized mobile site header built with the Iced GUI framework.
//!
//! It provides a burger trigger that opens a slide-in navigation drawer with
//! localized links, an inline language switcher, and social links. The
//! site configuration is injected into the components rather than read from
//! globals, and each component renders from a pure model of its state.

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod locale;
pub mod route;
pub mod ui;
