// SPDX-License-Identifier: MPL-2.0
//! Texture palette widget: a square grid of transparent, clickable cells
//! overlaid on a background image.
//!
//! This module follows a "state down, messages up" pattern: the host embeds
//! a [`State`], forwards widget [`Message`]s into [`State::update`] together
//! with the keyboard modifier snapshot it tracks, and reacts to the returned
//! [`Event`]s. Exclusive selection (at most one checked cell) lives here;
//! the value/label bookkeeping lives in [`crate::domain::palette`].

use crate::domain::labels::read_labels;
use crate::domain::palette::{Modifiers, PaletteGrid};
use crate::domain::BackgroundRef;
use crate::error::Result;
use crate::ui::design_tokens::sizing;
use iced::keyboard;
use iced::widget::image;
use std::path::{Path, PathBuf};

mod messages;
mod view;

pub use messages::{Event, Message};
pub use view::ViewContext;

/// Construction parameters for a palette widget.
#[derive(Debug, Clone)]
pub struct StateConfig {
    /// Palette identity, reported in every press event and shown as the
    /// group title.
    pub name: String,
    /// Cells per side of the square grid; must be at least 1.
    pub grid_side: usize,
    /// Background image; `None` renders the grid on the bare surface.
    pub image_path: Option<PathBuf>,
    /// Optional label source, one label per line, row-major order.
    pub labels_path: Option<PathBuf>,
    /// Edge length of the square grid area, in pixels.
    pub size: f32,
    /// Tooltip applied uniformly to every cell.
    pub tooltip: String,
    /// Whether to render the built-in change-image affordance.
    pub show_change_image: bool,
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            grid_side: 4,
            image_path: None,
            labels_path: None,
            size: sizing::PALETTE_DEFAULT,
            tooltip: String::new(),
            show_change_image: false,
        }
    }
}

/// Local UI state for a texture palette.
#[derive(Debug, Clone)]
pub struct State {
    grid: PaletteGrid,
    background: Option<image::Handle>,
    /// Exclusive selection: the one checked cell, if any. Separate from the
    /// grid's last-pressed record on purpose; pressing checks the cell via
    /// this group, not via the press bookkeeping.
    checked: Option<usize>,
    size: f32,
    tooltip: String,
    show_change_image: bool,
}

impl State {
    /// Builds the palette state, reading the label source best-effort.
    ///
    /// # Errors
    ///
    /// Fails only on a degenerate grid side of zero.
    pub fn new(config: StateConfig) -> Result<Self> {
        let labels = config
            .labels_path
            .as_deref()
            .map(read_labels)
            .unwrap_or_default();
        let mut grid = PaletteGrid::new(config.name, config.grid_side, labels)?;

        let background = config.image_path.as_deref().map(|path| {
            let reference = BackgroundRef::new(path.to_string_lossy());
            let handle = resolve_background(&reference);
            grid.set_background(reference);
            handle
        });

        Ok(Self {
            grid,
            background: background.flatten(),
            checked: None,
            size: config.size,
            tooltip: config.tooltip,
            show_change_image: config.show_change_image,
        })
    }

    /// Last-resort 1x1 palette used when a caller-supplied configuration
    /// turns out to be invalid.
    pub fn fallback(name: impl Into<String>) -> Self {
        Self {
            grid: PaletteGrid::new(name, 1, Vec::new()).expect("side 1 is always valid"),
            background: None,
            checked: None,
            size: sizing::PALETTE_DEFAULT,
            tooltip: String::new(),
            show_change_image: false,
        }
    }

    /// Handles a widget message.
    ///
    /// `modifiers` is the host-tracked keyboard state at the time the click
    /// was delivered; it is sampled here, once, into the emitted payload.
    pub fn update(&mut self, message: Message, modifiers: Modifiers) -> Event {
        match message {
            Message::CellPressed(index) => {
                match self.grid.press(index, modifiers) {
                    Some(press) => {
                        // The exclusive group checks the clicked cell and
                        // implicitly unchecks the previous one.
                        self.checked = Some(index);
                        Event::Pressed(press)
                    }
                    None => Event::None,
                }
            }
            Message::ChangeImagePressed => Event::BrowseImageRequested,
        }
    }

    /// Replaces the background image.
    ///
    /// The reference is sanitized before storage; a path that does not
    /// resolve to a decodable image leaves the grid without a background
    /// instead of failing.
    pub fn change_image(&mut self, path: &Path) {
        let reference = BackgroundRef::new(path.to_string_lossy());
        self.background = resolve_background(&reference);
        self.grid.set_background(reference);
    }

    /// Forwards a label-swap request to the model (currently a no-op there).
    pub fn change_labels(&mut self, source: &Path) {
        self.grid.change_labels(source);
    }

    pub fn grid(&self) -> &PaletteGrid {
        &self.grid
    }

    pub fn name(&self) -> &str {
        self.grid.name()
    }

    /// The checked cell of the exclusive selection, if any.
    pub fn checked(&self) -> Option<usize> {
        self.checked
    }

    pub fn has_background(&self) -> bool {
        self.background.is_some()
    }

    /// Render the palette.
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> iced::Element<'a, Message> {
        view::render(self, ctx)
    }

    fn background_handle(&self) -> Option<&image::Handle> {
        self.background.as_ref()
    }

    fn cell_size(&self) -> f32 {
        (self.size / self.grid.side() as f32).max(sizing::CELL_MIN)
    }

    fn grid_size(&self) -> f32 {
        self.cell_size() * self.grid.side() as f32
    }

    fn tooltip(&self) -> &str {
        &self.tooltip
    }

    fn shows_change_image(&self) -> bool {
        self.show_change_image
    }
}

/// Converts Iced's modifier flags into the model's explicit sample.
pub fn modifier_state(modifiers: keyboard::Modifiers) -> Modifiers {
    Modifiers {
        alt: modifiers.alt(),
        shift: modifiers.shift(),
        ctrl: modifiers.control(),
    }
}

/// Probes the image header before handing the path to the renderer, so an
/// unresolvable reference degrades to a bare grid instead of a crash.
fn resolve_background(reference: &BackgroundRef) -> Option<image::Handle> {
    image_rs::image_dimensions(reference.path())
        .ok()
        .map(|_| image::Handle::from_path(reference.path()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(name: &str, side: usize) -> StateConfig {
        StateConfig {
            name: name.to_string(),
            grid_side: side,
            ..StateConfig::default()
        }
    }

    #[test]
    fn new_rejects_zero_grid_side() {
        assert!(State::new(config("broken", 0)).is_err());
    }

    #[test]
    fn press_checks_the_cell_and_reports_payload() {
        let mut state = State::new(config("terrain", 2)).unwrap();
        let event = state.update(
            Message::CellPressed(3),
            Modifiers {
                alt: false,
                shift: true,
                ctrl: false,
            },
        );

        let Event::Pressed(press) = event else {
            panic!("expected press event");
        };
        assert_eq!(press.palette, "terrain");
        assert!((press.value - 0.75).abs() < 1e-12);
        assert!(press.shift);
        assert_eq!(state.checked(), Some(3));
        assert_eq!(state.grid().last_pressed(), Some(3));
    }

    #[test]
    fn exclusive_selection_moves_with_each_press() {
        let mut state = State::new(config("p", 2)).unwrap();
        state.update(Message::CellPressed(0), Modifiers::default());
        state.update(Message::CellPressed(2), Modifiers::default());
        assert_eq!(state.checked(), Some(2));
    }

    #[test]
    fn out_of_range_press_changes_nothing() {
        let mut state = State::new(config("p", 2)).unwrap();
        let event = state.update(Message::CellPressed(9), Modifiers::default());
        assert!(matches!(event, Event::None));
        assert_eq!(state.checked(), None);
    }

    #[test]
    fn change_image_request_is_forwarded_to_parent() {
        let mut state = State::new(config("p", 2)).unwrap();
        let event = state.update(Message::ChangeImagePressed, Modifiers::default());
        assert!(matches!(event, Event::BrowseImageRequested));
    }

    #[test]
    fn unresolvable_image_leaves_grid_without_background() {
        let mut state = State::new(config("p", 2)).unwrap();
        state.change_image(Path::new("/definitely/not/here.png"));
        assert!(!state.has_background());
        // The sanitized reference is still recorded on the model.
        assert!(state.grid().background().is_some());
    }

    #[test]
    fn missing_label_file_falls_back_to_unlabeled_cells() {
        let state = State::new(StateConfig {
            labels_path: Some(PathBuf::from("/no/such/labels.txt")),
            ..config("p", 2)
        })
        .unwrap();
        assert!(state
            .grid()
            .cells()
            .iter()
            .all(|cell| cell.label().is_empty()));
    }

    #[test]
    fn cell_size_is_clamped_for_dense_grids() {
        let state = State::new(StateConfig {
            size: 100.0,
            ..config("dense", 16)
        })
        .unwrap();
        assert!(state.cell_size() >= sizing::CELL_MIN);
    }

    #[test]
    fn fallback_palette_is_single_celled() {
        let state = State::fallback("safe");
        assert_eq!(state.grid().len(), 1);
    }

    #[test]
    fn modifier_state_maps_flags_independently() {
        let sample = modifier_state(keyboard::Modifiers::SHIFT | keyboard::Modifiers::CTRL);
        assert!(!sample.alt);
        assert!(sample.shift);
        assert!(sample.ctrl);
    }
}
