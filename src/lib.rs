// SPDX-License-Identifier: MPL-2.0
//! `iced_kit` is a collection of prebuilt widgets for the Iced GUI framework.
//!
//! It provides a clickable texture palette, a checkable item list, and native
//! file/folder browse controls. Each widget is split into a framework-free
//! model layer ([`domain`]) and an Iced rendering adapter ([`ui`]), so the
//! interaction logic stays testable without a running event loop. A demo
//! application embedding one of each widget lives in [`app`].

#![doc(html_root_url = "https://docs.rs/iced_kit/0.1.0")]

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod ui;
