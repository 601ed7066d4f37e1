//! Configuration management for pxl

mod io;
mod types;

pub use types::*;

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::color::{parse_hex, Color, ParseColorError};

impl Config {
    /// Get the config file path (~/.config/pxl/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        io::config_path()
    }

    /// Get the config directory path (~/.config/pxl)
    pub fn config_dir() -> Result<PathBuf> {
        io::config_dir()
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Result<Self> {
        io::load()
    }

    /// Load configuration from a specific file, or defaults if it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        io::load_from(path)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        io::save(self)
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        io::save_to(self, path)
    }

    /// Check values that serde cannot: palette size and colour strings.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.editor.palette_size == 0 {
            return Err("editor.palette_size must be at least 1".to_string());
        }
        self.pen_color()
            .map_err(|e| format!("editor.pen_color: {}", e))?;
        self.new_image_fill()
            .map_err(|e| format!("canvas.new_image_fill: {}", e))?;
        Ok(())
    }

    pub fn pen_color(&self) -> std::result::Result<Color, ParseColorError> {
        parse_hex(&self.editor.pen_color)
    }

    pub fn new_image_fill(&self) -> std::result::Result<Color, ParseColorError> {
        parse_hex(&self.canvas.new_image_fill)
    }

    /// Log file location, expanding a leading `~/`.
    ///
    /// Empty `logging.file` means `pxl.log` in the config directory.
    pub fn log_path(&self) -> Result<PathBuf> {
        let file = &self.logging.file;
        if file.is_empty() {
            return Ok(Self::config_dir()?.join("pxl.log"));
        }
        if let Some(stripped) = file.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return Ok(home.join(stripped));
            }
        }
        Ok(PathBuf::from(file))
    }
}
