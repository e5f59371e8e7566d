// SPDX-License-Identifier: MPL-2.0
//! Checkable list widget: a titled list of independently toggleable items
//! with optional All/None bulk actions.
//!
//! The widget is purely self-contained: unlike the palette it emits no
//! events to the parent, who instead queries the current selection on
//! demand through [`State::selected_texts`] (and friends). Replacing the
//! contents resets every item to unchecked.

use crate::domain::checklist::{CheckableList, ListItem};

mod messages;
mod view;

pub use messages::Message;
pub use view::ViewContext;

/// Construction parameters for a checkable list widget.
#[derive(Debug, Clone)]
pub struct StateConfig {
    /// Title shown on the group frame.
    pub title: String,
    /// Initial items, all unchecked.
    pub items: Vec<String>,
    /// Show the All/None bulk selection buttons.
    pub show_buttons: bool,
}

/// Local UI state for a checkable list.
#[derive(Debug, Clone)]
pub struct State {
    list: CheckableList,
}

impl State {
    pub fn new(config: StateConfig) -> Self {
        Self {
            list: CheckableList::new(config.title, config.items, config.show_buttons),
        }
    }

    /// Handles a widget message by mutating the underlying list.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::ItemToggled(index) => {
                self.list.toggle(index);
            }
            Message::SelectAll => self.list.set_all(true),
            Message::SelectNone => self.list.set_all(false),
        }
    }

    /// Atomically replaces the list contents; the new items start unchecked.
    pub fn replace_items(&mut self, new_items: impl IntoIterator<Item = impl Into<String>>) {
        self.list.replace_items(new_items);
    }

    pub fn title(&self) -> &str {
        self.list.title()
    }

    pub fn items(&self) -> &[ListItem] {
        self.list.items()
    }

    /// Indices of the checked items, in display order.
    pub fn selected(&self) -> Vec<usize> {
        self.list.selected()
    }

    /// Texts of the checked items, in display order.
    pub fn selected_texts(&self) -> Vec<String> {
        self.list.selected_texts()
    }

    /// Render the list.
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> iced::Element<'a, Message> {
        view::render(self, ctx)
    }

    fn has_bulk_actions(&self) -> bool {
        self.list.has_bulk_actions()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> State {
        State::new(StateConfig {
            title: "Items".to_string(),
            items: vec!["item1".into(), "item2".into(), "item3".into()],
            show_buttons: true,
        })
    }

    #[test]
    fn toggle_message_flips_one_item() {
        let mut state = state();
        state.update(Message::ItemToggled(1));
        assert_eq!(state.selected_texts(), ["item2"]);
    }

    #[test]
    fn select_all_then_none_round_trips() {
        let mut state = state();
        state.update(Message::SelectAll);
        assert_eq!(state.selected(), vec![0, 1, 2]);

        state.update(Message::SelectNone);
        assert!(state.selected().is_empty());
    }

    #[test]
    fn replace_items_clears_selection() {
        let mut state = state();
        state.update(Message::SelectAll);
        state.replace_items(["test1", "test2"]);
        assert!(state.selected().is_empty());
        assert_eq!(state.items().len(), 2);
    }

    #[test]
    fn toggle_out_of_range_is_ignored() {
        let mut state = state();
        state.update(Message::ItemToggled(17));
        assert!(state.selected().is_empty());
    }
}
