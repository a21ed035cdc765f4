// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the header components.

pub mod button;
pub mod container;
