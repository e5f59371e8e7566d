// SPDX-License-Identifier: MPL-2.0
//! Demo application embedding one of each widget.
//!
//! The `App` struct wires together a texture palette, a checkable list, and
//! an image browse row, and translates widget events into side effects like
//! config persistence or background swaps. This file intentionally keeps
//! policy decisions (window sizing, persistence, localization switching)
//! close to the main update loop so it is easy to audit user-facing
//! behavior.

use crate::config;
use crate::domain::palette::CellPress;
use crate::i18n::fluent::I18n;
use crate::ui::browse::{self, PickerKind};
use crate::ui::checkable_list;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::palette::{self, modifier_state};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, event, keyboard, window, Element, Length, Subscription, Task, Theme};
use std::fmt;
use std::path::{Path, PathBuf};
use unic_langid::LanguageIdentifier;

pub const WINDOW_DEFAULT_WIDTH: u32 = 980;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const MIN_WINDOW_WIDTH: u32 = 760;
pub const MIN_WINDOW_HEIGHT: u32 = 560;

const DEFAULT_GRID_SIDE: usize = 8;

/// Seed items for the checkable list.
const SAMPLE_ITEMS: [&str; 6] = ["monitor", "mouse", "keyboard", "tablet", "headset", "webcam"];

/// Items swapped in by the replace-contents demo button.
const REPLACEMENT_ITEMS: [&str; 5] = ["test1", "test2", "test3", "test4", "test5"];

const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "bmp"];

/// Root Iced application state that bridges the widgets, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    /// Live keyboard modifier state, fed by the raw-event subscription and
    /// sampled into every palette press.
    modifiers: keyboard::Modifiers,
    palette: palette::State,
    list: checkable_list::State,
    image_picker: browse::State,
    last_press: Option<CellPress>,
    /// Alternates the replace-contents demo between the two item sets.
    replacement_round: usize,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("palette", &self.palette.name())
            .field("items", &self.list.items().len())
            .field("last_press", &self.last_press)
            .finish()
    }
}

/// Top-level messages consumed by [`App::update`]. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Palette(palette::Message),
    List(checkable_list::Message),
    ImagePicker(browse::Message),
    /// Raw keyboard modifier change; kept current so presses can sample it.
    ModifiersChanged(keyboard::Modifiers),
    LanguageSelected(LanguageIdentifier),
    /// Swap the list contents with the next demo item set.
    ReplaceItems,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional palette background image.
    pub image_path: Option<String>,
    /// Optional cell label source, one label per line.
    pub labels_path: Option<String>,
    /// Optional grid side override.
    pub grid_side: Option<usize>,
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let i18n = I18n::default();
        let palette = build_palette(&i18n, DEFAULT_GRID_SIDE, None, None);
        let list = build_list(&i18n);
        let image_picker = build_image_picker(&i18n, None);

        Self {
            i18n,
            theme_mode: ThemeMode::System,
            modifiers: keyboard::Modifiers::default(),
            palette,
            list,
            image_picker,
            last_press: None,
            replacement_round: 0,
        }
    }
}

fn build_palette(
    i18n: &I18n,
    grid_side: usize,
    image_path: Option<PathBuf>,
    labels_path: Option<PathBuf>,
) -> palette::State {
    let config = palette::StateConfig {
        name: i18n.tr("demo-palette-name"),
        grid_side,
        image_path,
        labels_path,
        size: sizing::PALETTE_DEFAULT,
        tooltip: i18n.tr("demo-palette-tooltip"),
        show_change_image: true,
    };

    palette::State::new(config).unwrap_or_else(|err| {
        eprintln!("Invalid palette configuration: {}", err);
        palette::State::fallback(i18n.tr("demo-palette-name"))
    })
}

fn build_list(i18n: &I18n) -> checkable_list::State {
    checkable_list::State::new(checkable_list::StateConfig {
        title: i18n.tr("demo-list-title"),
        items: SAMPLE_ITEMS.iter().map(|item| item.to_string()).collect(),
        show_buttons: true,
    })
}

fn build_image_picker(i18n: &I18n, starting_dir: Option<PathBuf>) -> browse::State {
    let mut picker = browse::State::new(PickerKind::OpenFile, i18n.tr("demo-image-picker-label"))
        .with_title(i18n.tr("demo-image-dialog-title"))
        .with_filter("Images", IMAGE_EXTENSIONS);

    if let Some(dir) = starting_dir {
        picker = picker.with_starting_dir(dir);
    }

    picker
}

impl App {
    /// Initializes application state from persisted preferences and the
    /// `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let grid_side = flags.grid_side.unwrap_or(DEFAULT_GRID_SIDE);
        let palette = build_palette(
            &i18n,
            grid_side,
            flags.image_path.map(PathBuf::from),
            flags.labels_path.map(PathBuf::from),
        );
        let list = build_list(&i18n);
        let image_picker = build_image_picker(&i18n, config.last_image_directory.clone());

        let app = App {
            i18n,
            theme_mode: config.theme_mode,
            palette,
            list,
            image_picker,
            ..Self::default()
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        // Track modifier state from raw events so a press can sample the
        // keyboard at the moment it happens.
        event::listen_with(|event, _status, _window| match event {
            iced::Event::Keyboard(keyboard::Event::ModifiersChanged(modifiers)) => {
                Some(Message::ModifiersChanged(modifiers))
            }
            _ => None,
        })
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Palette(palette_message) => {
                let sample = modifier_state(self.modifiers);
                match self.palette.update(palette_message, sample) {
                    palette::Event::Pressed(press) => {
                        self.last_press = Some(press);
                        Task::none()
                    }
                    palette::Event::BrowseImageRequested => {
                        self.image_picker.open_dialog().map(Message::ImagePicker)
                    }
                    palette::Event::None => Task::none(),
                }
            }
            Message::List(list_message) => {
                self.list.update(list_message);
                Task::none()
            }
            Message::ImagePicker(picker_message) => {
                let (event, task) = self.image_picker.update(picker_message);
                if let browse::Event::Selected(path) = event {
                    self.palette.change_image(&path);
                    self.persist_preferences();
                }
                task.map(Message::ImagePicker)
            }
            Message::ModifiersChanged(modifiers) => {
                self.modifiers = modifiers;
                Task::none()
            }
            Message::LanguageSelected(locale) => {
                self.i18n.set_locale(locale);
                self.persist_preferences();
                Task::none()
            }
            Message::ReplaceItems => {
                self.replacement_round += 1;
                if self.replacement_round % 2 == 1 {
                    self.list.replace_items(REPLACEMENT_ITEMS);
                } else {
                    self.list.replace_items(SAMPLE_ITEMS);
                }
                Task::none()
            }
        }
    }

    /// Writes the current preferences back to disk; a failure is reported
    /// but never interrupts the session.
    fn persist_preferences(&self) {
        let config = config::Config {
            language: Some(self.i18n.current_locale().to_string()),
            theme_mode: self.theme_mode,
            last_image_directory: self.image_picker.starting_dir().map(Path::to_path_buf),
        };
        if let Err(err) = config::save(&config) {
            eprintln!("Failed to save settings: {}", err);
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let palette_view = self
            .palette
            .view(palette::ViewContext { i18n: &self.i18n })
            .map(Message::Palette);

        let list_view = self
            .list
            .view(checkable_list::ViewContext { i18n: &self.i18n })
            .map(Message::List);

        let picker_view = self.image_picker.view(&self.i18n).map(Message::ImagePicker);

        let replace_button = button(Text::new(self.i18n.tr("demo-replace-items-button")))
            .on_press(Message::ReplaceItems)
            .style(styles::button::secondary);

        let side_panel = Column::new()
            .spacing(spacing::MD)
            .width(Length::Fixed(sizing::PANEL_WIDTH))
            .push(list_view)
            .push(picker_view)
            .push(replace_button)
            .push(self.language_row())
            .push(self.status_panel());

        let content = Row::new()
            .spacing(spacing::LG)
            .align_y(alignment::Vertical::Top)
            .push(palette_view)
            .push(side_panel);

        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::LG)
            .align_x(alignment::Horizontal::Center)
            .into()
    }

    fn language_row(&self) -> Element<'_, Message> {
        let mut row = Row::new().spacing(spacing::XS);

        for locale in &self.i18n.available_locales {
            let translated_name = self.i18n.tr(&format!("language-name-{}", locale));
            let label = if translated_name.starts_with("MISSING:") {
                locale.to_string()
            } else {
                translated_name
            };

            let mut language_button =
                button(Text::new(label)).on_press(Message::LanguageSelected(locale.clone()));
            if self.i18n.current_locale() == locale {
                language_button = language_button.style(styles::button::primary);
            } else {
                language_button = language_button.style(styles::button::secondary);
            }
            row = row.push(language_button);
        }

        row.into()
    }

    fn status_panel(&self) -> Element<'_, Message> {
        let press_line = match &self.last_press {
            Some(press) => format!("{} {}", self.i18n.tr("demo-last-press-label"), press),
            None => self.i18n.tr("demo-status-idle"),
        };

        let selection = self.list.selected_texts();
        let selection_line = if selection.is_empty() {
            self.i18n.tr("demo-selection-empty")
        } else {
            format!(
                "{} {}",
                self.i18n.tr("demo-selection-label"),
                selection.join(", ")
            )
        };

        Container::new(
            Column::new()
                .spacing(spacing::XXS)
                .push(Text::new(press_line).size(typography::CAPTION))
                .push(Text::new(selection_line).size(typography::CAPTION)),
        )
        .padding(spacing::SM)
        .width(Length::Fill)
        .style(styles::container::panel)
        .into()
    }
}
