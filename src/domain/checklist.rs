// SPDX-License-Identifier: MPL-2.0
//! Checkable item list model.
//!
//! A titled, ordered list of text items, each independently toggleable.
//! Unlike the palette's exclusive selection, any number of items may be
//! checked at once. Replacing the contents discards every existing item and
//! rebuilds the list unchecked, in the order given.

/// One list entry: a text plus a checked flag.
///
/// Texts are identities only in the loose sense; duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    text: String,
    checked: bool,
}

impl ListItem {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }
}

/// Ordered collection of checkable items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckableList {
    title: String,
    items: Vec<ListItem>,
    bulk_actions: bool,
}

impl CheckableList {
    /// Builds a list with every item unchecked.
    ///
    /// `bulk_actions` decides whether the widget offers All/None buttons;
    /// the [`set_all`](Self::set_all) operation itself is always available
    /// to the host.
    pub fn new(
        title: impl Into<String>,
        items: impl IntoIterator<Item = impl Into<String>>,
        bulk_actions: bool,
    ) -> Self {
        Self {
            title: title.into(),
            items: Self::fresh_items(items),
            bulk_actions,
        }
    }

    fn fresh_items(items: impl IntoIterator<Item = impl Into<String>>) -> Vec<ListItem> {
        items
            .into_iter()
            .map(|text| ListItem {
                text: text.into(),
                checked: false,
            })
            .collect()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Items in display order.
    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether the bulk All/None affordance was requested at construction.
    pub fn has_bulk_actions(&self) -> bool {
        self.bulk_actions
    }

    /// Flips the checked flag of the item at `index`.
    ///
    /// Returns the new flag, or `None` when the index is out of range.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        let item = self.items.get_mut(index)?;
        item.checked = !item.checked;
        Some(item.checked)
    }

    /// Sets every item's checked flag uniformly.
    pub fn set_all(&mut self, checked: bool) {
        for item in &mut self.items {
            item.checked = checked;
        }
    }

    /// Indices of the checked items, in display order.
    pub fn selected(&self) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.checked)
            .map(|(index, _)| index)
            .collect()
    }

    /// Texts of the checked items, in display order.
    pub fn selected_texts(&self) -> Vec<String> {
        self.items
            .iter()
            .filter(|item| item.checked)
            .map(|item| item.text.clone())
            .collect()
    }

    /// Atomically replaces the contents with fresh, unchecked items.
    ///
    /// The order of `new_items` becomes the new display order; nothing of
    /// the previous items (texts or checked flags) survives.
    pub fn replace_items(&mut self, new_items: impl IntoIterator<Item = impl Into<String>>) {
        self.items = Self::fresh_items(new_items);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CheckableList {
        CheckableList::new("Items", ["monitor", "mouse", "keyboard"], true)
    }

    #[test]
    fn items_start_unchecked_in_given_order() {
        let list = sample();
        let texts: Vec<&str> = list.items().iter().map(ListItem::text).collect();
        assert_eq!(texts, ["monitor", "mouse", "keyboard"]);
        assert!(list.items().iter().all(|item| !item.is_checked()));
    }

    #[test]
    fn toggle_flips_exactly_one_item() {
        let mut list = sample();
        assert_eq!(list.toggle(1), Some(true));
        assert_eq!(list.selected(), vec![1]);
        assert_eq!(list.toggle(1), Some(false));
        assert!(list.selected().is_empty());
    }

    #[test]
    fn toggle_out_of_range_is_none() {
        let mut list = sample();
        assert_eq!(list.toggle(3), None);
        assert!(list.selected().is_empty());
    }

    #[test]
    fn set_all_true_selects_everything_in_order() {
        let mut list = sample();
        list.set_all(true);
        assert_eq!(list.selected(), vec![0, 1, 2]);
        assert_eq!(list.selected_texts(), ["monitor", "mouse", "keyboard"]);

        list.set_all(false);
        assert!(list.selected().is_empty());
    }

    #[test]
    fn selection_query_is_idempotent() {
        let mut list = sample();
        list.toggle(0);
        list.toggle(2);
        let first = list.selected_texts();
        let second = list.selected_texts();
        assert_eq!(first, second);
        assert_eq!(first, ["monitor", "keyboard"]);
    }

    #[test]
    fn replace_items_resets_selection_and_order() {
        let mut list = sample();
        list.set_all(true);

        list.replace_items(["test1", "test2"]);
        assert_eq!(list.len(), 2);
        assert!(list.selected().is_empty());
        let texts: Vec<&str> = list.items().iter().map(ListItem::text).collect();
        assert_eq!(texts, ["test1", "test2"]);
    }

    #[test]
    fn bulk_affordance_flag_is_fixed_at_construction() {
        let with_buttons = sample();
        assert!(with_buttons.has_bulk_actions());

        let mut without_buttons = CheckableList::new("bare", ["a", "b"], false);
        assert!(!without_buttons.has_bulk_actions());
        // The operation itself stays available to the host either way.
        without_buttons.set_all(true);
        assert_eq!(without_buttons.selected(), vec![0, 1]);
    }

    #[test]
    fn duplicate_texts_are_independent_items() {
        let mut list = CheckableList::new("dup", ["same", "same"], false);
        list.toggle(0);
        assert_eq!(list.selected(), vec![0]);
        assert!(!list.items()[1].is_checked());
    }
}
