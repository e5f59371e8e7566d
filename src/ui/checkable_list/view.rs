// SPDX-License-Identifier: MPL-2.0
//! Checkable list rendering: group frame, bulk buttons, checkbox column.

use super::{Message, State};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, checkbox, Column, Container, Row, Scrollable, Text};
use iced::{Element, Length};

/// Contextual data needed to render the list view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

pub(super) fn render<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(state.title()).size(typography::TITLE_SM);

    let mut content = Column::new().spacing(spacing::XS).push(title);

    if state.has_bulk_actions() {
        let all_button = button(Text::new(ctx.i18n.tr("list-select-all")))
            .on_press(Message::SelectAll)
            .style(styles::button::primary);
        let none_button = button(Text::new(ctx.i18n.tr("list-select-none")))
            .on_press(Message::SelectNone)
            .style(styles::button::secondary);

        content = content.push(
            Row::new()
                .spacing(spacing::XS)
                .push(all_button)
                .push(none_button),
        );
    }

    let mut item_column = Column::new().spacing(spacing::XXS);
    for (index, item) in state.items().iter().enumerate() {
        let entry = checkbox(item.is_checked())
            .label(item.text().to_string())
            .on_toggle(move |_| Message::ItemToggled(index));
        item_column = item_column.push(entry);
    }

    content = content.push(
        Scrollable::new(item_column)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::LIST_HEIGHT)),
    );

    Container::new(content)
        .padding(spacing::SM)
        .width(Length::Fill)
        .style(styles::container::group)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::checkable_list::StateConfig;

    #[test]
    fn view_renders_with_and_without_buttons() {
        let i18n = I18n::default();
        for show_buttons in [false, true] {
            let state = State::new(StateConfig {
                title: "Items".to_string(),
                items: vec!["a".into(), "b".into()],
                show_buttons,
            });
            let _element = state.view(ViewContext { i18n: &i18n });
        }
        // Smoke test to ensure rendering succeeds.
    }
}
