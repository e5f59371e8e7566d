// SPDX-License-Identifier: MPL-2.0
//! Domain layer - widget models with no dependency on the rendering toolkit.
//!
//! This module contains the data and interaction rules behind each widget.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity: the Iced adapters in [`crate::ui`]
//! consume these models and translate clicks into the operations below.
//!
//! # Modules
//!
//! - [`background`]: sanitized background image references
//!   ([`BackgroundRef`](background::BackgroundRef))
//! - [`checklist`]: checkable item list ([`CheckableList`](checklist::CheckableList))
//! - [`labels`]: best-effort cell label source reader
//! - [`palette`]: clickable texture palette grid
//!   ([`PaletteGrid`](palette::PaletteGrid), [`CellPress`](palette::CellPress))

pub mod background;
pub mod checklist;
pub mod labels;
pub mod palette;

pub use background::BackgroundRef;
pub use checklist::CheckableList;
pub use palette::{CellPress, Modifiers, PaletteGrid};
