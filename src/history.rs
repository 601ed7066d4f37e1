//! Paint history and undo.
//!
//! The overlay of a [`LayeredImage`] is always a pure function of the
//! history: replaying every item in order into an empty overlay reproduces
//! it exactly. Appending writes through to the overlay immediately; undo
//! truncates the log and rebuilds the overlay from scratch, so repeated
//! writes to the same point resolve to the last surviving one.
//!
//! Items are grouped into strokes. A single paint is a one-item stroke, a
//! flood fill is one stroke holding every cell it changed, and undo removes
//! the whole trailing stroke.

use tracing::debug;

use crate::color::Color;
use crate::geometry::Point;
use crate::layered_image::LayeredImage;

/// One committed pixel write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryItem {
    pub point: Point,
    pub color: Color,
    /// Identifier shared by all items written by the same command.
    pub stroke: u64,
}

/// Append-only log of pixel writes, truncated by undo.
#[derive(Debug, Clone, Default)]
pub struct History {
    items: Vec<HistoryItem>,
    next_stroke: u64,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[HistoryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True when there is anything to save or undo.
    pub fn has_pending_changes(&self) -> bool {
        !self.items.is_empty()
    }

    /// Record a single write and apply it to `image`.
    pub fn append(&mut self, image: &mut LayeredImage, point: Point, color: Color) {
        self.append_stroke(image, [(point, color)]);
    }

    /// Record a group of writes as one undoable stroke and apply them.
    ///
    /// Returns the number of items recorded. An empty group records nothing.
    pub fn append_stroke<I>(&mut self, image: &mut LayeredImage, writes: I) -> usize
    where
        I: IntoIterator<Item = (Point, Color)>,
    {
        self.record_stroke(
            writes
                .into_iter()
                .inspect(|&(point, color)| image.set(point, color)),
        )
    }

    /// Record writes the overlay already holds as one undoable stroke.
    ///
    /// The caller must have written exactly these values, in this order, so
    /// that replay reproduces the overlay.
    pub fn record_stroke<I>(&mut self, writes: I) -> usize
    where
        I: IntoIterator<Item = (Point, Color)>,
    {
        let stroke = self.next_stroke;
        let before = self.items.len();
        self.items
            .extend(writes.into_iter().map(|(point, color)| HistoryItem {
                point,
                color,
                stroke,
            }));
        let added = self.items.len() - before;
        if added > 0 {
            self.next_stroke += 1;
        }
        added
    }

    /// Remove the last stroke and rebuild the overlay from what remains.
    ///
    /// Returns the points the removed stroke touched, for redrawing. Undo on
    /// an empty history does nothing and returns an empty list.
    pub fn undo(&mut self, image: &mut LayeredImage) -> Vec<Point> {
        let Some(last) = self.items.last().map(|item| item.stroke) else {
            return Vec::new();
        };
        let keep = self
            .items
            .iter()
            .rposition(|item| item.stroke != last)
            .map_or(0, |i| i + 1);
        let removed: Vec<Point> = self.items.drain(keep..).map(|item| item.point).collect();
        self.rebuild(image);
        debug!(
            removed = removed.len(),
            remaining = self.items.len(),
            "undo"
        );
        removed
    }

    /// Replace the overlay of `image` with a replay of this history.
    pub fn rebuild(&self, image: &mut LayeredImage) {
        image.clear_layer();
        for item in &self.items {
            image.set(item.point, item.color);
        }
    }
}
