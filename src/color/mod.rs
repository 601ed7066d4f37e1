//! Colour model for the editor.
//!
//! - `palette`: HSV axis sampling and nearest-sample lookup
//! - `pen`: the pen colour with its three cascading palettes
//!
//! Pixels are stored as [`Color`] (8-bit RGBA) so that flood fill and cursor
//! highlighting can rely on exact value equality. HSV floats only exist on
//! the palette side.

mod palette;
mod pen;

pub use palette::{nearest_index, Axis, Palette, Swatch, MAX_HUE};
pub use pen::{Direction, PenColor};

use image::Rgba;

/// An RGBA pixel value.
pub type Color = Rgba<u8>;

pub const WHITE: Color = Rgba([255, 255, 255, 255]);
pub const BLACK: Color = Rgba([0, 0, 0, 255]);

/// Hue in degrees, saturation and value in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Hsv {
    pub const fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    /// Decompose an RGBA colour. Alpha is ignored.
    pub fn from_color(color: Color) -> Self {
        let [r, g, b, _] = color.0;
        let r = f64::from(r) / 255.0;
        let g = f64::from(g) / 255.0;
        let b = f64::from(b) / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let d = max - min;

        let h = if d == 0.0 {
            0.0
        } else if max == r {
            60.0 * ((g - b) / d).rem_euclid(6.0)
        } else if max == g {
            60.0 * ((b - r) / d + 2.0)
        } else {
            60.0 * ((r - g) / d + 4.0)
        };
        let s = if max == 0.0 { 0.0 } else { d / max };
        Self::new(h, s, max)
    }

    /// Convert to an opaque RGBA colour. Hues outside `[0, 360)` wrap.
    pub fn to_color(self) -> Color {
        let h = self.h.rem_euclid(360.0) / 60.0;
        let s = self.s.clamp(0.0, 1.0);
        let v = self.v.clamp(0.0, 1.0);
        let c = v * s;
        let x = c * (1.0 - ((h % 2.0) - 1.0).abs());
        let m = v - c;
        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        Rgba([to_channel(r + m), to_channel(g + m), to_channel(b + m), 255])
    }
}

fn to_channel(f: f64) -> u8 {
    (f * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Pick black or white, whichever reads better on top of `background`.
pub fn contrast_color(background: Color) -> Color {
    let [r, g, b, _] = background.0;
    let lum = (0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b)) / 255.0;
    if lum < 0.5 {
        WHITE
    } else {
        BLACK
    }
}

/// Error returned when a colour string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid colour '{0}': expected #rrggbb or #rrggbbaa")]
pub struct ParseColorError(pub String);

/// Parse `#rrggbb` or `#rrggbbaa` (leading `#` optional).
pub fn parse_hex(input: &str) -> Result<Color, ParseColorError> {
    let err = || ParseColorError(input.to_string());
    let hex = input.trim().trim_start_matches('#');
    if !(hex.len() == 6 || hex.len() == 8) || !hex.is_ascii() {
        return Err(err());
    }
    let mut channels = [255u8; 4];
    for (i, channel) in channels.iter_mut().enumerate().take(hex.len() / 2) {
        *channel = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16).map_err(|_| err())?;
    }
    Ok(Rgba(channels))
}

/// Format as `#rrggbb`, or `#rrggbbaa` when not fully opaque.
pub fn to_hex(color: Color) -> String {
    let [r, g, b, a] = color.0;
    if a == 255 {
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    } else {
        format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
    }
}
