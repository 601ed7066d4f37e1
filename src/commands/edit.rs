//! Edit command handler

use anyhow::{bail, Context, Result};
use image::RgbaImage;
use ratatui::layout::Size;
use std::path::Path;
use tracing::warn;

use pxl::editor::{EditorOptions, EditorState};
use pxl::tui::{current_theme, EditorApp};
use pxl::{codec, logging, Config};

/// Open (or create) `file` and run the interactive editor on it.
#[cfg(not(tarpaulin_include))]
pub fn handle(file: &Path, size: Option<&str>, palette_size: Option<usize>) -> Result<()> {
    let config = Config::load()?;
    let theme = current_theme();
    if let Err(e) = logging::init(&config) {
        eprintln!(
            "{}",
            theme.error_text(&format!("Warning: logging disabled: {:#}", e))
        );
    }

    let base = open_or_create(file, size, &config)?;
    let options = editor_options(&config, palette_size)?;
    let identifier = file.to_string_lossy().into_owned();
    let state = EditorState::with_options(identifier, base, &options)?;

    let mut app = EditorApp::new(state, theme)?;
    let mut sink = |id: &str, image: &RgbaImage| codec::save(Path::new(id), image);
    app.run(&mut sink)
}

/// Load `file` if it exists, otherwise create a blank image of `size`.
pub(crate) fn open_or_create(file: &Path, size: Option<&str>, config: &Config) -> Result<RgbaImage> {
    if file.exists() {
        if size.is_some() {
            warn!(file = %file.display(), "--size ignored for an existing file");
        }
        return codec::load(file).with_context(|| format!("Failed to open {}", file.display()));
    }

    let Some(size) = size else {
        bail!(
            "{} does not exist; pass --size W,H to create it",
            file.display()
        );
    };
    let (width, height) = codec::parse_resolution(size)?;
    let fill = config
        .new_image_fill()
        .context("Invalid canvas.new_image_fill in config")?;
    Ok(codec::create_blank(width, height, fill))
}

/// Editor options from config, with the command-line palette size on top.
///
/// The terminal size is a placeholder; the app resizes to the real one.
pub(crate) fn editor_options(config: &Config, palette_size: Option<usize>) -> Result<EditorOptions> {
    let mut options = EditorOptions::from_config(config, Size::new(80, 24))
        .context("Invalid editor.pen_color in config")?;
    if let Some(size) = palette_size {
        options.palette_size = size;
    }
    Ok(options)
}
