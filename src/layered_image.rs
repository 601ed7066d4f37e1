//! Layered image: a read-only base plus a sparse overlay of edited pixels.
//!
//! Edits never touch the base image. A point present in the overlay always
//! shadows the base pixel at that point, so reading is "overlay first, base
//! second" and discarding edits is just clearing the overlay.

use std::collections::HashMap;

use image::RgbaImage;
use tracing::debug;

use crate::color::Color;
use crate::error::EditorError;
use crate::geometry::Point;

/// Sparse map of edited pixels.
pub type Layer = HashMap<Point, Color>;

/// Base image with an overlay of edits.
#[derive(Debug, Clone)]
pub struct LayeredImage {
    base: RgbaImage,
    layer: Layer,
}

impl LayeredImage {
    pub fn new(base: RgbaImage) -> Self {
        Self {
            base,
            layer: Layer::new(),
        }
    }

    pub fn width(&self) -> u32 {
        self.base.width()
    }

    pub fn height(&self) -> u32 {
        self.base.height()
    }

    pub fn base(&self) -> &RgbaImage {
        &self.base
    }

    pub fn layer(&self) -> &Layer {
        &self.layer
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x < self.width() && p.y < self.height()
    }

    /// Pixel at `p`: the overlay value if edited, otherwise the base pixel.
    ///
    /// # Panics
    ///
    /// Panics if `p` is outside the image. Callers clip coordinates through
    /// the viewport, so an out-of-range point is a layout bug.
    pub fn get(&self, p: Point) -> Color {
        assert!(
            self.contains(p),
            "get {} outside {}x{} image",
            p,
            self.width(),
            self.height()
        );
        match self.layer.get(&p) {
            Some(c) => *c,
            None => *self.base.get_pixel(p.x, p.y),
        }
    }

    /// Checked variant of [`get`](Self::get).
    pub fn try_get(&self, p: Point) -> Result<Color, EditorError> {
        if self.contains(p) {
            Ok(self.get(p))
        } else {
            Err(EditorError::OutOfBounds {
                point: p,
                width: self.width(),
                height: self.height(),
            })
        }
    }

    /// Write `color` into the overlay at `p`.
    ///
    /// # Panics
    ///
    /// Panics if `p` is outside the image.
    pub fn set(&mut self, p: Point, color: Color) {
        assert!(
            self.contains(p),
            "set {} outside {}x{} image",
            p,
            self.width(),
            self.height()
        );
        self.layer.insert(p, color);
    }

    /// Drop every edit, leaving only the base image visible.
    pub fn clear_layer(&mut self) {
        self.layer.clear();
    }

    /// Recolour the 4-connected region of uniform colour around `start`.
    ///
    /// Returns every point written, each exactly once. Filling with the
    /// colour already at `start` is a no-op and returns nothing.
    ///
    /// The region grows from an explicit work list. A cell is painted as it is
    /// pushed, so it no longer matches the region colour and cannot be pushed
    /// twice.
    pub fn flood_fill(&mut self, start: Point, fill: Color) -> Vec<Point> {
        let target = self.get(start);
        if target == fill {
            return Vec::new();
        }

        let mut filled = vec![start];
        let mut stack = vec![start];
        self.set(start, fill);

        while let Some(p) = stack.pop() {
            for n in p.neighbors() {
                if self.contains(n) && self.get(n) == target {
                    self.set(n, fill);
                    filled.push(n);
                    stack.push(n);
                }
            }
        }

        debug!(%start, cells = filled.len(), "flood fill");
        filled
    }

    /// Flatten base and overlay into a new image.
    pub fn compose(&self) -> RgbaImage {
        let mut out = self.base.clone();
        for (p, c) in &self.layer {
            out.put_pixel(p.x, p.y, *c);
        }
        out
    }
}
