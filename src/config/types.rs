//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub editor: EditorConfig,
    #[serde(default)]
    pub canvas: CanvasConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Pen and palette configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Number of swatches per palette row
    #[serde(default = "default_palette_size")]
    pub palette_size: usize,
    /// Initial pen colour (#rrggbb or #rrggbbaa)
    #[serde(default = "default_pen_color")]
    pub pen_color: String,
}

pub fn default_palette_size() -> usize {
    11
}

pub fn default_pen_color() -> String {
    "#000000".to_string()
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            palette_size: default_palette_size(),
            pen_color: default_pen_color(),
        }
    }
}

/// New-image configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Fill colour for images created with `--size`
    #[serde(default = "default_new_image_fill")]
    pub new_image_fill: String,
}

pub fn default_new_image_fill() -> String {
    "#ffffff".to_string()
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            new_image_fill: default_new_image_fill(),
        }
    }
}

/// Screen layout configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
    #[serde(default = "default_border_size")]
    pub border_size: u16,
    /// Minimum content width used when centring horizontally
    #[serde(default = "default_min_width")]
    pub min_width: u16,
    /// Blank rows above the title
    #[serde(default = "default_padding_y")]
    pub padding_y: u16,
}

pub fn default_border_size() -> u16 {
    1
}

pub fn default_min_width() -> u16 {
    48
}

pub fn default_padding_y() -> u16 {
    1
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            border_size: default_border_size(),
            min_width: default_min_width(),
            padding_y: default_padding_y(),
        }
    }
}

/// Log output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive, overridden by `PXL_LOG`
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file path; empty means `pxl.log` next to the config file
    #[serde(default)]
    pub file: String,
}

pub fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: String::new(),
        }
    }
}
