//! Config file tests

use pxl::color::{BLACK, WHITE};
use pxl::editor::EditorOptions;
use pxl::Config;
use ratatui::layout::Size;
use std::fs;
use tempfile::TempDir;

#[test]
fn missing_file_gives_defaults() {
    let temp = TempDir::new().unwrap();
    let config = Config::load_from(&temp.path().join("config.toml")).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.pen_color().unwrap(), BLACK);
    assert_eq!(config.new_image_fill().unwrap(), WHITE);
}

#[test]
fn partial_file_keeps_other_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(
        &path,
        "[editor]\npen_color = \"#ff0000\"\n\n[layout]\nborder_size = 2\n",
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.editor.pen_color, "#ff0000");
    assert_eq!(config.editor.palette_size, 11);
    assert_eq!(config.layout.border_size, 2);
    assert_eq!(config.layout.min_width, 48);
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn save_then_load_round_trips() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("config.toml");
    let mut config = Config::default();
    config.editor.palette_size = 21;
    config.canvas.new_image_fill = "#00000000".to_string();
    config.save_to(&path).unwrap();

    assert_eq!(Config::load_from(&path).unwrap(), config);
}

#[test]
fn bad_colour_is_rejected_on_load() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[canvas]\nnew_image_fill = \"white\"\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("new_image_fill"));
}

#[test]
fn malformed_toml_is_rejected() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[editor\npalette_size = ").unwrap();
    assert!(Config::load_from(&path).is_err());
}

#[test]
fn editor_options_follow_config() {
    let mut config = Config::default();
    config.editor.palette_size = 7;
    config.editor.pen_color = "#ffffff".to_string();
    config.layout.padding_y = 3;

    let options = EditorOptions::from_config(&config, Size::new(100, 40)).unwrap();
    assert_eq!(options.palette_size, 7);
    assert_eq!(options.pen_color, WHITE);
    assert_eq!(options.layout.padding_y, 3);
    assert_eq!(options.terminal, Size::new(100, 40));
}
