// SPDX-License-Identifier: MPL-2.0
//! Checkable list message types re-exported by the facade.

/// Messages emitted directly by the list widgets.
#[derive(Debug, Clone)]
pub enum Message {
    /// The checkbox of the item at this index was clicked.
    ItemToggled(usize),
    /// Bulk action: check every item.
    SelectAll,
    /// Bulk action: uncheck every item.
    SelectNone,
}
