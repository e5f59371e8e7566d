// SPDX-License-Identifier: MPL-2.0
//! Browse controls: labelled path rows backed by native file dialogs.
//!
//! Each picker is a small row (label, read-only path display, Browse
//! button) that opens the platform's folder/open/save dialog and reports
//! the chosen path to the parent as [`Event::Selected`]. Cancelling the
//! dialog reports nothing. The dialogs themselves are external
//! collaborators; this module only assembles them and routes the result.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::spacing;
use crate::ui::styles;
use iced::widget::{button, text_input, Row, Text};
use iced::{alignment, Element, Length, Task};
use std::path::{Path, PathBuf};

/// Which native dialog the picker opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerKind {
    Folder,
    OpenFile,
    SaveFile,
}

/// Messages emitted by the picker row.
#[derive(Debug, Clone)]
pub enum Message {
    BrowsePressed,
    DialogResolved(Option<PathBuf>),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// The user picked a path; cancellation never produces this.
    Selected(PathBuf),
}

/// Local UI state for one browse row.
#[derive(Debug, Clone)]
pub struct State {
    kind: PickerKind,
    label: String,
    dialog_title: Option<String>,
    filters: Vec<(String, Vec<String>)>,
    starting_dir: Option<PathBuf>,
    selected: Option<PathBuf>,
}

impl State {
    pub fn new(kind: PickerKind, label: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.into(),
            dialog_title: None,
            filters: Vec::new(),
            starting_dir: None,
            selected: None,
        }
    }

    /// Adds a name/extensions filter to the dialog (ignored for folders).
    pub fn with_filter(
        mut self,
        name: impl Into<String>,
        extensions: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.filters.push((
            name.into(),
            extensions.into_iter().map(Into::into).collect(),
        ));
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.dialog_title = Some(title.into());
        self
    }

    pub fn with_starting_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.starting_dir = Some(dir.into());
        self
    }

    /// Most recently picked path, if any.
    pub fn selected(&self) -> Option<&Path> {
        self.selected.as_deref()
    }

    /// Directory the next dialog will open in.
    pub fn starting_dir(&self) -> Option<&Path> {
        self.starting_dir.as_deref()
    }

    pub fn update(&mut self, message: Message) -> (Event, Task<Message>) {
        match message {
            Message::BrowsePressed => (Event::None, self.open_dialog()),
            Message::DialogResolved(Some(path)) => {
                // Remember the directory so the next dialog opens nearby.
                self.starting_dir = path.parent().map(Path::to_path_buf);
                self.selected = Some(path.clone());
                (Event::Selected(path), Task::none())
            }
            Message::DialogResolved(None) => (Event::None, Task::none()),
        }
    }

    /// Spawns the native dialog matching this picker's kind.
    pub fn open_dialog(&self) -> Task<Message> {
        let kind = self.kind;
        let title = self.dialog_title.clone();
        let filters = self.filters.clone();
        let starting_dir = self.starting_dir.clone();

        Task::perform(
            async move {
                let mut dialog = rfd::AsyncFileDialog::new();

                if let Some(title) = &title {
                    dialog = dialog.set_title(title);
                }

                if let Some(dir) = starting_dir {
                    if dir.exists() {
                        dialog = dialog.set_directory(&dir);
                    }
                }

                for (name, extensions) in &filters {
                    dialog = dialog.add_filter(name, extensions);
                }

                let handle = match kind {
                    PickerKind::Folder => dialog.pick_folder().await,
                    PickerKind::OpenFile => dialog.pick_file().await,
                    PickerKind::SaveFile => dialog.save_file().await,
                };

                handle.map(|h| h.path().to_path_buf())
            },
            Message::DialogResolved,
        )
    }

    /// Render the picker row.
    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let label = Text::new(self.label.as_str());

        let display = self
            .selected
            .as_ref()
            .map(|path| path.to_string_lossy().into_owned())
            .unwrap_or_default();

        let placeholder = i18n.tr("browse-path-placeholder");
        // No `on_input`: the field is a read-only display of the picked path.
        let path_field = text_input(&placeholder, &display).width(Length::Fill);

        let browse_button = button(Text::new(i18n.tr("browse-button")))
            .on_press(Message::BrowsePressed)
            .style(styles::button::primary);

        Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(label)
            .push(path_field)
            .push(browse_button)
            .into()
    }
}
