//! The pen colour and its palettes.
//!
//! Saturation and value palettes are defined relative to the live hue (and
//! the value palette also to the live saturation), so changing an upstream
//! axis regenerates the downstream palettes. The order is fixed:
//!
//! - hue change: regenerate saturation palette, then value palette
//! - saturation change: regenerate value palette
//! - value change: nothing downstream

use tracing::trace;

use super::palette::{Axis, Palette};
use super::{Color, Hsv};
use crate::error::EditorError;

/// Direction of a palette step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Increase,
    Decrease,
}

impl Direction {
    /// Step `index` once in this direction, clamped to `[0, len - 1]`.
    fn step(self, index: usize, len: usize) -> usize {
        match self {
            Direction::Increase => (index + 1).min(len.saturating_sub(1)),
            Direction::Decrease => index.saturating_sub(1),
        }
    }
}

/// Current pen colour with hue, saturation and value palettes.
#[derive(Debug, Clone, PartialEq)]
pub struct PenColor {
    color: Color,
    hsv: Hsv,
    palette_size: usize,
    hue: Palette,
    saturation: Palette,
    value: Palette,
}

impl PenColor {
    /// Build the pen from an initial colour.
    ///
    /// Returns [`EditorError::DegeneratePalette`] when `palette_size` is zero.
    pub fn new(color: Color, palette_size: usize) -> Result<Self, EditorError> {
        if palette_size == 0 {
            return Err(EditorError::DegeneratePalette { size: palette_size });
        }
        let hsv = Hsv::from_color(color);
        Ok(Self {
            color,
            hsv,
            palette_size,
            hue: Palette::generate(Axis::Hue, hsv, palette_size),
            saturation: Palette::generate(Axis::Saturation, hsv, palette_size),
            value: Palette::generate(Axis::Value, hsv, palette_size),
        })
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn hsv(&self) -> Hsv {
        self.hsv
    }

    pub fn palette_size(&self) -> usize {
        self.palette_size
    }

    pub fn palette(&self, axis: Axis) -> &Palette {
        match axis {
            Axis::Hue => &self.hue,
            Axis::Saturation => &self.saturation,
            Axis::Value => &self.value,
        }
    }

    /// Step along `axis`. Returns true if the pen colour state changed.
    pub fn change(&mut self, axis: Axis, direction: Direction) -> bool {
        match axis {
            Axis::Hue => self.change_hue(direction),
            Axis::Saturation => self.change_saturation(direction),
            Axis::Value => self.change_value(direction),
        }
    }

    pub fn change_hue(&mut self, direction: Direction) -> bool {
        let before = self.hsv;
        let index = direction.step(self.hue.selected(), self.palette_size);
        self.hsv.h = self.hue.swatch(index).hsv.h;
        self.hue.select_nearest(self.hsv.h);
        self.regenerate_saturation();
        self.regenerate_value();
        self.finish(Axis::Hue, before)
    }

    pub fn change_saturation(&mut self, direction: Direction) -> bool {
        let before = self.hsv;
        let index = direction.step(self.saturation.selected(), self.palette_size);
        self.hsv.s = self.saturation.swatch(index).hsv.s;
        self.saturation.select_nearest(self.hsv.s);
        self.regenerate_value();
        self.finish(Axis::Saturation, before)
    }

    pub fn change_value(&mut self, direction: Direction) -> bool {
        let before = self.hsv;
        let index = direction.step(self.value.selected(), self.palette_size);
        self.hsv.v = self.value.swatch(index).hsv.v;
        self.value.select_nearest(self.hsv.v);
        self.finish(Axis::Value, before)
    }

    fn regenerate_saturation(&mut self) {
        self.saturation = Palette::generate(Axis::Saturation, self.hsv, self.palette_size);
    }

    fn regenerate_value(&mut self) {
        self.value = Palette::generate(Axis::Value, self.hsv, self.palette_size);
    }

    fn finish(&mut self, axis: Axis, before: Hsv) -> bool {
        // Palettes only move HSV; alpha stays as configured.
        let alpha = self.color.0[3];
        self.color = self.hsv.to_color();
        self.color.0[3] = alpha;
        trace!(?axis, h = self.hsv.h, s = self.hsv.s, v = self.hsv.v, "pen colour changed");
        self.hsv != before
    }
}
