// SPDX-License-Identifier: MPL-2.0
//! Texture palette grid model.
//!
//! A palette is a square grid of `side * side` cells laid out in row-major
//! order. Cell `(i, j)` carries the normalized value
//! `((j + 1) + side * i - 1) / side²`, so the cell values partition `[0, 1)`
//! into equal intervals. Pressing a cell produces a [`CellPress`] payload that
//! the host application can route wherever the original click happened.
//!
//! Checked/unchecked state is deliberately *not* tracked here: exclusive
//! selection belongs to the rendering adapter's selection group, while this
//! model only remembers which cell was pressed last.

use crate::domain::background::BackgroundRef;
use crate::error::{PaletteError, Result};
use std::fmt;
use std::path::Path;

/// Keyboard modifier state sampled by the caller at the moment of a press.
///
/// Passing this in explicitly keeps [`PaletteGrid::press`] a pure function of
/// its inputs; the model never queries global input state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub alt: bool,
    pub shift: bool,
    pub ctrl: bool,
}

/// Payload describing a single cell press.
///
/// Carries the palette's identity (unchanged for the lifetime of the grid),
/// the pressed cell's normalized value, and the modifier keys held when the
/// press happened.
#[derive(Debug, Clone, PartialEq)]
pub struct CellPress {
    pub palette: String,
    pub value: f64,
    pub alt: bool,
    pub shift: bool,
    pub ctrl: bool,
}

impl fmt::Display for CellPress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.4}", self.palette, self.value)?;
        for (held, name) in [
            (self.alt, "Alt"),
            (self.shift, "Shift"),
            (self.ctrl, "Ctrl"),
        ] {
            if held {
                write!(f, " +{}", name)?;
            }
        }
        Ok(())
    }
}

/// One grid position: a derived value plus an optional label.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    value: f64,
    label: String,
}

impl Cell {
    /// Normalized value assigned to this cell, in `[0, 1)`.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Label text; empty when the label source had no entry for this cell.
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Square grid of value-carrying cells behind a texture palette widget.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteGrid {
    name: String,
    side: usize,
    step: f64,
    cells: Vec<Cell>,
    last_pressed: Option<usize>,
    background: Option<BackgroundRef>,
}

impl PaletteGrid {
    /// Builds a `side * side` grid with values assigned in row-major order.
    ///
    /// Labels are matched positionally: a list shorter than the cell count
    /// leaves the trailing cells unlabeled, extra entries are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::ZeroGridSide`] when `side` is zero.
    pub fn new(name: impl Into<String>, side: usize, labels: Vec<String>) -> Result<Self> {
        if side == 0 {
            return Err(PaletteError::ZeroGridSide.into());
        }

        let step = 1.0 / (side * side) as f64;
        let cells = (0..side * side)
            .map(|index| Cell {
                value: step * index as f64,
                label: labels.get(index).cloned().unwrap_or_default(),
            })
            .collect();

        Ok(Self {
            name: name.into(),
            side,
            step,
            cells,
            last_pressed: None,
            background: None,
        })
    }

    /// The palette identity, reported verbatim in every [`CellPress`].
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of cells per row and per column.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Total number of cells (`side * side`).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Value increment between consecutive cells, `1 / side²`.
    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// Value of the cell at `index`, if in range.
    pub fn value_of(&self, index: usize) -> Option<f64> {
        self.cells.get(index).map(Cell::value)
    }

    /// Row-major index of the most recently pressed cell.
    ///
    /// Kept for highlighting; pressing updates it even when the press does
    /// not change which cell is checked.
    pub fn last_pressed(&self) -> Option<usize> {
        self.last_pressed
    }

    /// Registers a press on the cell at `index` and returns the event payload
    /// the host should deliver to its listeners.
    ///
    /// Records the index as last-pressed. Does not touch any checked flag;
    /// exclusive selection is owned by the adapter's selection group. An
    /// out-of-range index leaves the grid untouched and yields no event.
    pub fn press(&mut self, index: usize, modifiers: Modifiers) -> Option<CellPress> {
        let value = self.value_of(index)?;
        self.last_pressed = Some(index);
        Some(CellPress {
            palette: self.name.clone(),
            value,
            alt: modifiers.alt,
            shift: modifiers.shift,
            ctrl: modifiers.ctrl,
        })
    }

    /// Replaces the background image reference.
    ///
    /// The cells are unaffected; an image that later fails to decode is a
    /// cosmetic problem for the rendering adapter, not an error here.
    pub fn set_background(&mut self, reference: BackgroundRef) {
        self.background = Some(reference);
    }

    pub fn background(&self) -> Option<&BackgroundRef> {
        self.background.as_ref()
    }

    /// Accepts a request to swap the cell labels.
    ///
    /// Label hot-swapping has never shipped; the operation is part of the
    /// palette contract but intentionally does nothing.
    /// TODO: wire label replacement through to the cells once the label
    /// lifecycle is settled.
    pub fn change_labels(&mut self, _source: &Path) {}
}
