// SPDX-License-Identifier: MPL-2.0
use iced_kit::config::{self, Config};
use iced_kit::domain::palette::Modifiers;
use iced_kit::domain::PaletteGrid;
use iced_kit::i18n::fluent::I18n;
use iced_kit::ui::checkable_list;
use iced_kit::ui::palette::{self, Message as PaletteMessage};
use iced_kit::ui::theming::ThemeMode;
use std::fs;
use tempfile::tempdir;

#[test]
fn palette_values_partition_the_unit_interval() {
    let grid = PaletteGrid::new("prova", 4, Vec::new()).expect("grid should build");
    let step = 1.0 / 16.0;

    let mut values: Vec<f64> = grid.cells().iter().map(|cell| cell.value()).collect();
    values.sort_by(|a, b| a.partial_cmp(b).unwrap());

    for (index, value) in values.iter().enumerate() {
        assert!((value - index as f64 * step).abs() < 1e-12);
    }
    assert!(values.last().unwrap() < &1.0);
}

#[test]
fn label_file_is_mapped_row_major_with_shortfall() {
    let dir = tempdir().expect("failed to create temp dir");
    let labels_path = dir.path().join("labels.txt");
    fs::write(&labels_path, "A\nB\nC\n").expect("failed to write labels");

    let state = palette::State::new(palette::StateConfig {
        name: "labels".to_string(),
        grid_side: 2,
        labels_path: Some(labels_path),
        ..palette::StateConfig::default()
    })
    .expect("palette should build");

    let labels: Vec<&str> = state.grid().cells().iter().map(|cell| cell.label()).collect();
    assert_eq!(labels, ["A", "B", "C", ""]);
}

#[test]
fn press_event_is_stable_across_image_updates() {
    let mut state = palette::State::new(palette::StateConfig {
        name: "terrain".to_string(),
        grid_side: 4,
        ..palette::StateConfig::default()
    })
    .expect("palette should build");

    // Swapping to an unresolvable image is cosmetic only.
    state.change_image(std::path::Path::new(r"C:\nowhere\missing-$texture*.png"));
    assert!(!state.has_background());

    let event = state.update(
        PaletteMessage::CellPressed(7),
        Modifiers {
            alt: false,
            shift: false,
            ctrl: true,
        },
    );
    let palette::Event::Pressed(press) = event else {
        panic!("expected a press event");
    };

    assert_eq!(press.palette, "terrain");
    assert!((press.value - 7.0 / 16.0).abs() < 1e-12);
    assert!(press.ctrl);
}

#[test]
fn background_reference_is_sanitized_for_style_syntax() {
    let mut state = palette::State::new(palette::StateConfig {
        name: "escaped".to_string(),
        grid_side: 2,
        ..palette::StateConfig::default()
    })
    .expect("palette should build");

    state.change_image(std::path::Path::new(r"assets\pack-01\grass.v2.png"));
    let reference = state
        .grid()
        .background()
        .expect("background reference should be recorded");

    // Separators are normalized and every reserved character is escaped.
    assert!(!reference.path().to_string_lossy().contains('\\'));
    assert_eq!(reference.style_ref(), "assets/pack\\-01/grass\\.v2\\.png");
}

#[test]
fn list_bulk_selection_and_replace_flow() {
    let mut state = checkable_list::State::new(checkable_list::StateConfig {
        title: "prova".to_string(),
        items: vec!["item1".into(), "item2".into(), "item3".into()],
        show_buttons: true,
    });

    state.update(checkable_list::Message::SelectAll);
    assert_eq!(state.selected_texts(), ["item1", "item2", "item3"]);

    state.update(checkable_list::Message::SelectNone);
    assert!(state.selected_texts().is_empty());

    state.update(checkable_list::Message::ItemToggled(2));
    state.update(checkable_list::Message::ItemToggled(0));
    // Display order wins over toggle order.
    assert_eq!(state.selected_texts(), ["item1", "item3"]);

    state.replace_items(["fresh1", "fresh2"]);
    assert!(state.selected_texts().is_empty());
}

#[test]
fn language_change_via_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        language: Some("en-US".to_string()),
        theme_mode: ThemeMode::System,
        last_image_directory: None,
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to fr
    let french_config = Config {
        language: Some("fr".to_string()),
        theme_mode: ThemeMode::System,
        last_image_directory: None,
    };
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}
