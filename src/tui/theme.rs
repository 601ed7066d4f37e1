//! Theme configuration for TUI and CLI
//!
//! Centralizes the chrome colours of the editor screen and the ANSI escape
//! codes used by the plain CLI commands. Pixel colours are never themed.

use ratatui::style::{Color, Modifier, Style};

use crate::color::{self, contrast_color};

/// Theme configuration for the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary text color (title, labels)
    pub text_primary: Color,
    /// Secondary/dimmed text color (footer hints)
    pub text_secondary: Color,
    /// Accent color for key names and box borders
    pub accent: Color,
    /// Error/warning color (exit prompt, save errors)
    pub error: Color,
    /// Background color (usually default/transparent)
    pub background: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::pxl()
    }
}

impl Theme {
    /// Light gray text with green accents on the terminal background.
    pub fn pxl() -> Self {
        Self {
            text_primary: Color::Gray,
            text_secondary: Color::DarkGray,
            accent: Color::LightGreen,
            error: Color::Red,
            background: Color::Reset,
        }
    }

    // Style helpers

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    pub fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Style for key names in hints.
    pub fn accent_bold_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    pub fn error_bold_style(&self) -> Style {
        self.error_style().add_modifier(Modifier::BOLD)
    }

    /// Style for a cell showing `pixel`, with foreground readable on top.
    pub fn pixel_style(&self, pixel: color::Color) -> Style {
        Style::default()
            .bg(to_terminal_color(pixel))
            .fg(to_terminal_color(contrast_color(pixel)))
    }

    // ANSI color helpers for CLI output

    pub fn accent_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.accent), text, ANSI_RESET)
    }

    pub fn primary_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.text_primary), text, ANSI_RESET)
    }

    pub fn error_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.error), text, ANSI_RESET)
    }
}

/// Truecolor terminal colour for a pixel. Alpha is ignored.
pub fn to_terminal_color(pixel: color::Color) -> Color {
    let [r, g, b, _] = pixel.0;
    Color::Rgb(r, g, b)
}

/// ANSI reset sequence
pub const ANSI_RESET: &str = "\x1b[0m";

/// Convert a ratatui Color to an ANSI escape code.
pub fn color_to_ansi(color: Color) -> &'static str {
    match color {
        Color::Black => "\x1b[30m",
        Color::Red => "\x1b[31m",
        Color::Green => "\x1b[32m",
        Color::Yellow => "\x1b[33m",
        Color::Blue => "\x1b[34m",
        Color::Magenta => "\x1b[35m",
        Color::Cyan => "\x1b[36m",
        Color::Gray => "\x1b[37m",
        Color::DarkGray => "\x1b[90m",
        Color::LightRed => "\x1b[91m",
        Color::LightGreen => "\x1b[92m",
        Color::LightYellow => "\x1b[93m",
        Color::LightBlue => "\x1b[94m",
        Color::LightMagenta => "\x1b[95m",
        Color::LightCyan => "\x1b[96m",
        Color::White => "\x1b[97m",
        Color::Reset => "\x1b[0m",
        // RGB and indexed colours fall back to no colour
        _ => "",
    }
}

/// Global theme instance.
pub fn current_theme() -> Theme {
    Theme::default()
}
