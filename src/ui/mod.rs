// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes the widget kit's UI code following a
//! component-based architecture with the Elm-style "state down, messages up"
//! pattern.
//!
//! # Widgets
//!
//! - [`palette`] - Clickable texture palette grid with exclusive selection
//! - [`checkable_list`] - Titled list of toggleable items with bulk actions
//! - [`browse`] - Labelled path rows backed by native file dialogs
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers, tooltips)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod browse;
pub mod checkable_list;
pub mod design_tokens;
pub mod palette;
pub mod styles;
pub mod theming;
