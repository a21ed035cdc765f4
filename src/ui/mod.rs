// SPDX-License-Identifier: MPL-2.0
//! User interface components and styling.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! exposes a `State`, a `Message`, an `update` returning an `Event` for its
//! parent, and view functions taking a `ViewContext`.
//!
//! # Components
//!
//! - [`site_header_mobile`] - Burger trigger and slide-in navigation drawer
//! - [`language_switcher`] - Inline locale list embedded in the drawer
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`icons`] - Embedded SVG icons

pub mod design_tokens;
pub mod icons;
pub mod language_switcher;
pub mod site_header_mobile;
pub mod styles;
