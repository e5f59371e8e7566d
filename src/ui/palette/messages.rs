// SPDX-License-Identifier: MPL-2.0
//! Palette message/event types re-exported by the facade.

use crate::domain::palette::CellPress;

/// Messages emitted directly by the palette widgets.
#[derive(Debug, Clone)]
pub enum Message {
    /// A grid cell was clicked (row-major index).
    CellPressed(usize),
    /// The built-in change-image affordance was clicked.
    ChangeImagePressed,
}

/// Events propagated to the parent application for side effects.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// A cell was pressed; deliver the payload to interested listeners.
    Pressed(CellPress),
    /// The user asked to swap the background image; the parent owns the
    /// file dialog.
    BrowseImageRequested,
}
