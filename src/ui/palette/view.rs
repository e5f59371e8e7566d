// SPDX-License-Identifier: MPL-2.0
//! Palette rendering: group frame, background stack, and the cell grid.

use super::{Message, State};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, tooltip, Column, Container, Image, Row, Stack, Text};
use iced::{alignment, ContentFit, Element, Length};

/// Contextual data needed to render the palette view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

pub(super) fn render<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let grid_size = state.grid_size();

    let mut layers = Stack::new()
        .width(Length::Fixed(grid_size))
        .height(Length::Fixed(grid_size));

    if let Some(handle) = state.background_handle() {
        layers = layers.push(
            Image::new(handle.clone())
                .width(Length::Fill)
                .height(Length::Fill)
                .content_fit(ContentFit::Fill),
        );
    }

    layers = layers.push(cell_grid(state));

    let frame = Container::new(layers).style(styles::container::palette_frame);

    let title = Text::new(state.name()).size(typography::TITLE_SM);

    let mut content = Column::new()
        .spacing(spacing::XS)
        .push(title)
        .push(frame);

    if state.shows_change_image() {
        let change_button = button(Text::new(
            ctx.i18n.tr("palette-change-image-button"),
        ))
        .on_press(Message::ChangeImagePressed)
        .style(styles::button::secondary);
        content = content.push(change_button);
    }

    Container::new(content)
        .padding(spacing::SM)
        .style(styles::container::group)
        .into()
}

/// Builds the row-major grid of transparent cell buttons.
fn cell_grid(state: &State) -> Element<'_, Message> {
    let side = state.grid().side();
    let cell_size = state.cell_size();
    let checked = state.checked();

    let mut rows = Column::new().spacing(0);
    for i in 0..side {
        let mut row = Row::new().spacing(0);
        for j in 0..side {
            let index = side * i + j;
            row = row.push(cell(state, index, cell_size, checked == Some(index)));
        }
        rows = rows.push(row);
    }

    rows.into()
}

fn cell(state: &State, index: usize, cell_size: f32, is_checked: bool) -> Element<'_, Message> {
    let label = state
        .grid()
        .cell(index)
        .map(|cell| cell.label())
        .unwrap_or_default();

    let caption = Container::new(Text::new(label).size(typography::BODY_SM))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    let cell_button = button(caption)
        .width(Length::Fixed(cell_size))
        .height(Length::Fixed(cell_size))
        .padding(1)
        .on_press(Message::CellPressed(index))
        .style(styles::button::palette_cell(is_checked));

    if state.tooltip().is_empty() {
        cell_button.into()
    } else {
        styles::tooltip::styled(
            cell_button,
            state.tooltip(),
            tooltip::Position::FollowCursor,
        )
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::palette::StateConfig;

    #[test]
    fn view_renders_without_background() {
        let i18n = I18n::default();
        let state = State::new(StateConfig {
            name: "smoke".to_string(),
            grid_side: 3,
            tooltip: "press me".to_string(),
            show_change_image: true,
            ..StateConfig::default()
        })
        .unwrap();

        let _element = state.view(ViewContext { i18n: &i18n });
        // Smoke test to ensure rendering succeeds.
    }
}
